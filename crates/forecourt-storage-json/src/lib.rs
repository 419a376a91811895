//! Filesystem-backed JSON persistence for dealership lots and their backups.
//!
//! Each lot is one pretty-printed JSON document under the lots directory,
//! written atomically (temp file + rename). Backups are timestamped copies
//! under a per-lot subdirectory with bounded retention.

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use chrono::{DateTime, NaiveDateTime, Utc};

use forecourt_core::{
    storage::{DealershipStorage, LotBackupInfo},
    CoreError,
};
use forecourt_domain::Dealership;

const LOT_EXTENSION: &str = "json";
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
const TMP_SUFFIX: &str = "tmp";
const DEFAULT_RETENTION: usize = 5;

/// Filesystem-backed JSON store for lots.
#[derive(Debug, Clone)]
pub struct JsonDealershipStorage {
    lots_dir: PathBuf,
    backups_dir: PathBuf,
    retention: usize,
}

/// Listing row for one persisted lot.
#[derive(Debug, Clone)]
pub struct LotMetadata {
    pub slug: String,
    pub name: String,
    pub path: PathBuf,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub car_count: usize,
    pub stock_units: u64,
    pub sale_count: usize,
}

impl JsonDealershipStorage {
    pub fn new(lots_dir: PathBuf, backups_dir: PathBuf) -> Result<Self, CoreError> {
        Self::with_retention(lots_dir, backups_dir, DEFAULT_RETENTION)
    }

    pub fn with_retention(
        lots_dir: PathBuf,
        backups_dir: PathBuf,
        retention: usize,
    ) -> Result<Self, CoreError> {
        fs::create_dir_all(&lots_dir)?;
        fs::create_dir_all(&backups_dir)?;
        Ok(Self {
            lots_dir,
            backups_dir,
            retention: retention.max(1),
        })
    }

    pub fn lot_path(&self, name: &str) -> PathBuf {
        self.lots_dir
            .join(format!("{}.{}", slug(name), LOT_EXTENSION))
    }

    /// Loads every persisted lot and summarizes it for listings.
    pub fn list_lot_metadata(&self) -> Result<Vec<LotMetadata>, CoreError> {
        let mut rows = Vec::new();
        for entry_slug in self.list_lots()? {
            let lot = self.load_lot(&entry_slug)?;
            rows.push(LotMetadata {
                slug: entry_slug.clone(),
                name: lot.name.clone(),
                path: self.lot_path(&entry_slug),
                created_at: lot.created_at,
                updated_at: lot.updated_at,
                car_count: lot.catalog.len(),
                stock_units: lot.stock.iter().map(|item| u64::from(item.stock)).sum(),
                sale_count: lot.sales.len(),
            });
        }
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.backups_dir.join(slug(name))
    }

    fn write_backup(
        &self,
        lot: &Dealership,
        name: &str,
        note: Option<&str>,
    ) -> Result<LotBackupInfo, CoreError> {
        let dir = self.backup_dir(name);
        fs::create_dir_all(&dir)?;
        let timestamp = Utc::now().format(BACKUP_TIMESTAMP_FORMAT).to_string();
        let mut stem = format!("{}_{}", slug(name), timestamp);
        if let Some(label) = sanitize_note(note) {
            stem.push('_');
            stem.push_str(&label);
        }
        let file_name = format!("{}.{}", stem, LOT_EXTENSION);
        let path = dir.join(&file_name);
        write_atomic(&path, &serialize_lot(lot)?)?;
        self.prune_backups(name)?;
        Ok(LotBackupInfo {
            lot: slug(name),
            id: file_name,
            created_at: timestamp,
            path,
        })
    }

    fn prune_backups(&self, name: &str) -> Result<(), CoreError> {
        let mut entries = self.list_backups(name)?;
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        for stale in entries.into_iter().skip(self.retention) {
            let _ = fs::remove_file(stale.path);
        }
        Ok(())
    }
}

impl DealershipStorage for JsonDealershipStorage {
    fn save_lot(&self, name: &str, lot: &Dealership) -> Result<(), CoreError> {
        let path = self.lot_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &serialize_lot(lot)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load_lot(&self, name: &str) -> Result<Dealership, CoreError> {
        let path = self.lot_path(name);
        if !path.exists() {
            return Err(CoreError::LotNotFound(name.to_string()));
        }
        load_lot_from_path(&path)
    }

    fn list_lots(&self) -> Result<Vec<String>, CoreError> {
        if !self.lots_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.lots_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(LOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_lot(&self, name: &str) -> Result<(), CoreError> {
        let path = self.lot_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn backup_lot(
        &self,
        name: &str,
        lot: &Dealership,
        note: Option<&str>,
    ) -> Result<LotBackupInfo, CoreError> {
        self.write_backup(lot, name, note)
    }

    fn list_backups(&self, name: &str) -> Result<Vec<LotBackupInfo>, CoreError> {
        let dir = self.backup_dir(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let lot_slug = slug(name);
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LOT_EXTENSION) {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                entries.push(LotBackupInfo {
                    lot: lot_slug.clone(),
                    id: file_name.to_string(),
                    created_at: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }
        entries.sort_by_key(|info| Reverse(parse_backup_timestamp(&info.id)));
        Ok(entries)
    }

    fn restore_backup(&self, backup: &LotBackupInfo) -> Result<Dealership, CoreError> {
        if !backup.path.exists() {
            return Err(CoreError::Storage(format!(
                "backup `{}` not found",
                backup.id
            )));
        }
        let target = self.lot_path(&backup.lot);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&backup.path, &target)?;
        load_lot_from_path(&target)
    }
}

/// Saves a lot to an arbitrary path on disk.
pub fn save_lot_to_path(lot: &Dealership, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    write_atomic(&tmp, &serialize_lot(lot)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Loads a lot from the provided filesystem path.
pub fn load_lot_from_path(path: &Path) -> Result<Dealership, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn serialize_lot(lot: &Dealership) -> Result<String, CoreError> {
    serde_json::to_string_pretty(lot).map_err(|err| CoreError::Serde(err.to_string()))
}

fn slug(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "lot".into()
    } else {
        sanitized
    }
}

fn sanitize_note(note: Option<&str>) -> Option<String> {
    let raw = note?.trim();
    if raw.is_empty() {
        return None;
    }
    let sanitized: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let collapsed: Vec<&str> = sanitized.split('-').filter(|part| !part.is_empty()).collect();
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.join("-"))
    }
}

fn parse_backup_timestamp(file_name: &str) -> Option<DateTime<Utc>> {
    let stem = file_name.strip_suffix(&format!(".{}", LOT_EXTENSION))?;
    for window in stem
        .split('_')
        .collect::<Vec<_>>()
        .windows(2)
    {
        let (date, time) = (window[0], window[1]);
        if date.len() == 8
            && time.len() == 6
            && date.chars().all(|c| c.is_ascii_digit())
            && time.chars().all(|c| c.is_ascii_digit())
        {
            let raw = format!("{date}{time}");
            if let Ok(naive) = NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M%S") {
                return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
            }
        }
    }
    None
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
