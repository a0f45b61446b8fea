pub mod calculator;
pub mod clock;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod summary;
