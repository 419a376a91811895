//! Dealer Desk offers the operator surface over the Forecourt crates:
//! catalog and stock upkeep, purchase recording, and the sales reports.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dealer Desk tracing initialized.");
    });
}
