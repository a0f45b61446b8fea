pub mod impact;
pub mod intervals;
pub mod status;
