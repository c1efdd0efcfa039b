pub mod calendar;
pub mod export;
pub mod statistics;
pub mod trend;
