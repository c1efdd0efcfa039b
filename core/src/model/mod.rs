pub mod activity;
pub mod entry;
pub mod mood;
pub mod stats;
