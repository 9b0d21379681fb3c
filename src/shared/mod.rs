pub mod shutdown;
pub mod types;
pub mod utills;
