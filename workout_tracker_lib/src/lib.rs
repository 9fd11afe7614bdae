pub mod config;
pub mod display;
pub mod error;
pub mod map;
pub mod storage;
pub mod tracker;
pub mod validation;
pub mod workout;

pub use error::{StorageError, TrackerError};
