//! Command-line front end: context wiring and dispatch.

pub mod commands;
pub mod format;

use std::env;

use forecourt_config::{default_base_dir, Config, ConfigManager};
use forecourt_core::{storage::DealershipStorage, CoreError, SystemClock};
use forecourt_domain::Dealership;
use forecourt_storage_json::JsonDealershipStorage;

use crate::errors::DeskError;

/// Everything a command handler needs: configuration, the lot store, and a
/// wall clock.
pub struct DeskContext {
    pub config: Config,
    pub storage: JsonDealershipStorage,
    pub clock: SystemClock,
}

impl DeskContext {
    pub fn open() -> Result<Self, DeskError> {
        let base = default_base_dir();
        let manager = ConfigManager::with_base_dir(base.clone())?;
        let config = manager.load()?;
        let storage = JsonDealershipStorage::new(
            config.resolve_lots_root(&base),
            config.resolve_backups_root(&base),
        )?;
        Ok(Self {
            config,
            storage,
            clock: SystemClock,
        })
    }

    pub fn lot_name(&self) -> &str {
        &self.config.default_lot
    }

    pub fn load_lot(&self) -> Result<Dealership, DeskError> {
        Ok(self.storage.load_lot(self.lot_name())?)
    }

    /// Loads the default lot, starting an empty one on first use.
    pub fn load_or_create_lot(&self) -> Result<Dealership, DeskError> {
        match self.storage.load_lot(self.lot_name()) {
            Ok(lot) => Ok(lot),
            Err(CoreError::LotNotFound(_)) => Ok(Dealership::new(self.lot_name())),
            Err(err) => Err(err.into()),
        }
    }

    pub fn save_lot(&self, lot: &Dealership) -> Result<(), DeskError> {
        Ok(self.storage.save_lot(self.lot_name(), lot)?)
    }
}

/// Entry point for the binary: dispatches the first argument as a command.
pub fn run_cli() -> Result<(), DeskError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        commands::print_help();
        return Ok(());
    };
    let ctx = DeskContext::open()?;
    commands::dispatch(&ctx, command, rest)
}
