//! forecourt-core
//!
//! Business logic and services for Forecourt.
//! Depends on forecourt-domain. No CLI, no terminal I/O, no direct storage
//! implementations.

pub mod aggregation;
pub mod audit;
pub mod error;
pub mod services;
pub mod storage;
pub mod time;

pub use error::CoreError;
pub use services::*;
pub use time::{Clock, FixedClock, SystemClock};
