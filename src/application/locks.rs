//! Per-(table, date) mutual exclusion for the booking commit.
//!
//! Stands in for the advisory lock the original store provided: a lock table
//! of async mutexes keyed by a hash of the table id combined with the date
//! ordinal. Holding the guard makes the check-then-insert sequence atomic
//! relative to every other booking attempt on the same table and date, while
//! attempts on other tables or dates proceed in parallel. Entries are evicted
//! when the last holder releases, so the table tracks contention, not booking
//! history.
//!
//! Valid because this process instance owns all reservation writes; a
//! multi-instance deployment would swap this for a store-level lock.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Lock table for booking commits.
#[derive(Default)]
pub struct TableDateLocks {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
}

impl TableDateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key = first 8 bytes of the table UUID XOR the shifted date ordinal,
    /// mirroring the advisory-lock key of the original store.
    fn key(table_id: Uuid, date: NaiveDate) -> i64 {
        let bytes = table_id.as_bytes();
        let mut head = [0u8; 8];
        head.copy_from_slice(&bytes[..8]);
        let table_hash = i64::from_le_bytes(head);
        table_hash ^ ((date.num_days_from_ce() as i64) << 17)
    }

    /// Acquire the exclusion for one (table, date).
    ///
    /// The guard is released when dropped, on commit, rollback and
    /// mid-flight cancellation alike. The shard reference into the map is
    /// dropped before awaiting so contending acquirers never block the map.
    pub async fn acquire(&self, table_id: Uuid, date: NaiveDate) -> TableDateGuard {
        let key = Self::key(table_id, date);
        let cell = self.locks.entry(key).or_default().clone();
        let guard = cell.lock_owned().await;
        TableDateGuard {
            locks: Arc::clone(&self.locks),
            key,
            guard: Some(guard),
        }
    }
}

/// Holds one (table, date) exclusion. Dropping it releases the lock and
/// removes the map entry unless another acquirer already holds a handle.
pub struct TableDateGuard {
    locks: Arc<DashMap<i64, Arc<Mutex<()>>>>,
    key: i64,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for TableDateGuard {
    fn drop(&mut self) {
        // Release the mutex first: a strong count above 1 then means a
        // contender holds a handle and the entry must stay.
        self.guard.take();
        // Removal and `entry()` serialize on the map shard: a contender
        // either cloned the cell already (count > 1, entry stays) or
        // installs a fresh mutex after the removal.
        self.locks
            .remove_if(&self.key, |_, cell| Arc::strong_count(cell) == 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn distinct_tables_and_dates_use_distinct_keys() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let d1 = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
        assert_ne!(TableDateLocks::key(a, d1), TableDateLocks::key(b, d1));
        assert_ne!(TableDateLocks::key(a, d1), TableDateLocks::key(a, d2));
        assert_eq!(TableDateLocks::key(a, d1), TableDateLocks::key(a, d1));
    }

    #[tokio::test]
    async fn same_key_serializes_critical_sections() {
        let locks = Arc::new(TableDateLocks::new());
        let table = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let in_section = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let locks = locks.clone();
            let in_section = in_section.clone();
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire(table, date).await;
                let concurrent = in_section.fetch_add(1, Ordering::SeqCst);
                assert_eq!(concurrent, 0, "two tasks inside the same exclusion");
                tokio::task::yield_now().await;
                in_section.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
    }

    #[tokio::test]
    async fn different_keys_do_not_block_each_other() {
        let locks = TableDateLocks::new();
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let _g1 = locks.acquire(Uuid::new_v4(), date).await;
        // Must not deadlock: a different table acquires immediately.
        let _g2 = locks.acquire(Uuid::new_v4(), date).await;
    }

    #[tokio::test]
    async fn entries_are_evicted_once_released() {
        let locks = TableDateLocks::new();
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();

        for _ in 0..32 {
            let guard = locks.acquire(Uuid::new_v4(), date).await;
            assert_eq!(locks.locks.len(), 1);
            drop(guard);
        }
        // No growth with booking history: every release evicted its entry.
        assert_eq!(locks.locks.len(), 0);
    }

    #[tokio::test]
    async fn eviction_does_not_break_exclusion_under_contention() {
        let locks = Arc::new(TableDateLocks::new());
        let table = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let in_section = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let locks = locks.clone();
            let in_section = in_section.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..8 {
                    let _guard = locks.acquire(table, date).await;
                    let concurrent = in_section.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(concurrent, 0, "two tasks inside the same exclusion");
                    tokio::task::yield_now().await;
                    in_section.fetch_sub(1, Ordering::SeqCst);
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(locks.locks.len(), 0);
    }
}
