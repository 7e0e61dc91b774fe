pub mod calendar;
pub mod geo;
pub mod station;
pub mod time;
pub mod traits;
