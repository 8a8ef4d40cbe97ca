// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;

use crate::models::Ledger;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "AceTrack", "acetrack"));

/// Logical storage key carried over from the original schema; the on-disk
/// file name so existing backups stay recognizable.
pub const STORAGE_KEY: &str = "acetrack_bankroll_v1";

pub fn ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join(format!("{}.json", STORAGE_KEY)))
}

/// Whole-blob load/save contract. `load` never fails: anything short of a
/// readable, parseable blob falls back to the seed ledger. `save` overwrites
/// the prior state wholesale.
pub trait PersistenceAdapter {
    fn load(&self) -> Ledger;
    fn save(&self, state: &Ledger) -> Result<()>;
    /// The serialized blob as an opaque string, if any state is stored.
    /// Backs the copy/paste backup surface.
    fn raw(&self) -> Option<String>;
}

pub struct JsonFileAdapter {
    path: PathBuf,
}

impl JsonFileAdapter {
    pub fn new(path: PathBuf) -> Self {
        JsonFileAdapter { path }
    }

    pub fn open_default() -> Result<Self> {
        Ok(JsonFileAdapter::new(ledger_path()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl PersistenceAdapter for JsonFileAdapter {
    fn load(&self) -> Ledger {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| Ledger::seed()),
            Err(_) => Ledger::seed(),
        }
    }

    fn save(&self, state: &Ledger) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Write ledger at {}", self.path.display()))?;
        Ok(())
    }

    fn raw(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }
}

/// A shared in-memory buffer run through the same serde codec as the file
/// adapter. Lets tests substitute storage without touching disk.
#[derive(Clone, Default)]
pub struct MemoryAdapter {
    buf: Rc<RefCell<Option<String>>>,
}

impl MemoryAdapter {
    pub fn new() -> Self {
        MemoryAdapter::default()
    }

    /// Pre-load the buffer with an arbitrary blob (e.g. garbage, to
    /// exercise the corrupt-state fallback).
    pub fn with_raw(raw: &str) -> Self {
        MemoryAdapter {
            buf: Rc::new(RefCell::new(Some(raw.to_string()))),
        }
    }
}

impl PersistenceAdapter for MemoryAdapter {
    fn load(&self) -> Ledger {
        match self.buf.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|_| Ledger::seed()),
            None => Ledger::seed(),
        }
    }

    fn save(&self, state: &Ledger) -> Result<()> {
        *self.buf.borrow_mut() = Some(serde_json::to_string(state)?);
        Ok(())
    }

    fn raw(&self) -> Option<String> {
        self.buf.borrow().clone()
    }
}
