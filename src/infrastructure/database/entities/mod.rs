pub mod opening_hours;
pub mod reservation;
pub mod restaurant;
pub mod restaurant_table;
