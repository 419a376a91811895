use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the base directory; primarily for tests
/// and portable installs.
pub const HOME_ENV_VAR: &str = "DEALER_DESK_HOME";

/// Stores user-configurable preferences for the dealer desk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency_value")]
    pub currency: String,
    #[serde(default = "Config::default_lot_value")]
    pub default_lot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for lot files. Defaults to
    /// `<base>/lots`.
    pub lots_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom root directory for lot backups. Defaults to
    /// `<base>/backups`.
    pub backups_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency_value(),
            default_lot: Self::default_lot_value(),
            lots_root: None,
            backups_root: None,
        }
    }
}

impl Config {
    pub fn default_currency_value() -> String {
        "USD".into()
    }

    pub fn default_lot_value() -> String {
        "main".into()
    }

    pub fn resolve_lots_root(&self, base: &std::path::Path) -> PathBuf {
        match &self.lots_root {
            Some(path) => path.clone(),
            None => base.join("lots"),
        }
    }

    pub fn resolve_backups_root(&self, base: &std::path::Path) -> PathBuf {
        match &self.backups_root {
            Some(path) => path.clone(),
            None => base.join("backups"),
        }
    }
}

/// Resolves the base directory for all dealer-desk state: the
/// `DEALER_DESK_HOME` override when set, otherwise a `dealer-desk` folder in
/// the platform's local data directory.
pub fn default_base_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(home);
    }
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dealer-desk")
}
