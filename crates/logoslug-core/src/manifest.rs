//! `manifest.json`: the original -> normalized mapping of a run, with digests.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::batch::{BatchReport, CopyOutcome};
use crate::checksum::sha256_path;

pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub original: String,
    pub normalized: String,
    /// SHA-256 of the file now stored under `normalized`.
    pub sha256: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// One entry per file written by the run, sorted by normalized name.
    ///
    /// When several sources landed on the same name, the one that was
    /// written last is the one recorded.
    pub fn from_report(report: &BatchReport) -> Result<Self> {
        let mut by_name: BTreeMap<&str, &str> = BTreeMap::new();
        for f in &report.files {
            if f.outcome != CopyOutcome::Skipped {
                by_name.insert(&f.normalized, &f.original);
            }
        }

        let mut entries = Vec::with_capacity(by_name.len());
        for (normalized, original) in by_name {
            let sha256 = sha256_path(&report.output_dir.join(normalized))?;
            entries.push(ManifestEntry {
                original: original.to_string(),
                normalized: normalized.to_string(),
                sha256,
            });
        }
        Ok(Manifest { entries })
    }

    /// Writes the manifest into `dir` and returns its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("wrote manifest to {}", path.display());
        Ok(path)
    }

    pub fn read_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parse {}", path.display()))
    }
}
