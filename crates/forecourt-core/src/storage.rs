use std::path::PathBuf;

use forecourt_domain::Dealership;

use crate::CoreError;

/// Describes a persisted backup artifact for a lot.
#[derive(Debug, Clone)]
pub struct LotBackupInfo {
    pub lot: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends capable of storing lots and their
/// backups. The engine and services never touch a backend directly; callers
/// load a [`Dealership`], mutate or report over it, and save it back.
pub trait DealershipStorage: Send + Sync {
    fn save_lot(&self, name: &str, lot: &Dealership) -> Result<(), CoreError>;
    fn load_lot(&self, name: &str) -> Result<Dealership, CoreError>;
    fn list_lots(&self) -> Result<Vec<String>, CoreError>;
    fn delete_lot(&self, name: &str) -> Result<(), CoreError>;
    fn backup_lot(
        &self,
        name: &str,
        lot: &Dealership,
        note: Option<&str>,
    ) -> Result<LotBackupInfo, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<LotBackupInfo>, CoreError>;
    fn restore_backup(&self, backup: &LotBackupInfo) -> Result<Dealership, CoreError>;
}
