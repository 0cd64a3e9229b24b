//! Batch processing: copy every logo in a directory under its normalized name.
//!
//! Sequential and synchronous. Any I/O failure aborts the run; files copied
//! before the failure stay in place.

mod copy;
mod scan;

pub use copy::copy_with_metadata;
pub use scan::{has_extension, matching_files, SourceFile};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use crate::manifest::Manifest;
use crate::slug::{normalize_filename, SlugOptions};

/// What to do when the target name already exists in the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Replace the existing file (last write wins).
    #[default]
    Overwrite,
    /// Leave the existing file alone and skip the source.
    Skip,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
            CollisionPolicy::Skip => write!(f, "skip"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid collision policy {0:?}: expected \"overwrite\" or \"skip\"")]
pub struct ParseCollisionPolicyError(String);

impl FromStr for CollisionPolicy {
    type Err = ParseCollisionPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            "skip" => Ok(CollisionPolicy::Skip),
            other => Err(ParseCollisionPolicyError(other.to_string())),
        }
    }
}

/// Inputs for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    pub source_dir: PathBuf,
    /// Single directory name, created inside `source_dir`.
    pub output_subdir: String,
    /// File name that is never copied.
    pub sentinel: String,
    pub extensions: Vec<String>,
    pub slug: SlugOptions,
    pub on_collision: CollisionPolicy,
    pub manifest: bool,
}

impl BatchOptions {
    pub fn output_dir(&self) -> PathBuf {
        self.source_dir.join(&self.output_subdir)
    }

    /// The output directory must be a strict child of the source directory,
    /// otherwise a file could be copied onto itself.
    fn validate(&self) -> Result<()> {
        let mut components = Path::new(&self.output_subdir).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(()),
            _ => bail!(
                "output subdirectory must be a single directory name, got {:?}",
                self.output_subdir
            ),
        }
    }
}

/// Result of handling one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copied to a previously free name.
    Copied,
    /// Copied over a file that already had the target name.
    Replaced,
    /// Target name was taken and the policy is [`CollisionPolicy::Skip`].
    Skipped,
}

impl CopyOutcome {
    /// Word printed at the start of the progress line.
    pub fn status_word(self) -> &'static str {
        match self {
            CopyOutcome::Copied => "Processed",
            CopyOutcome::Replaced => "Replaced",
            CopyOutcome::Skipped => "Skipped",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFile {
    pub original: String,
    pub normalized: String,
    pub source: PathBuf,
    pub target: PathBuf,
    pub outcome: CopyOutcome,
}

impl ProcessedFile {
    /// `<status-word>: <original-name> -> <new-name>`
    pub fn progress_line(&self) -> String {
        format!(
            "{}: {} -> {}",
            self.outcome.status_word(),
            self.original,
            self.normalized
        )
    }
}

/// Two inputs of the same run that normalize to the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub normalized: String,
    pub first: String,
    pub second: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    /// In processing order.
    pub files: Vec<ProcessedFile>,
    pub sentinel_skipped: bool,
    pub collisions: Vec<Collision>,
    /// Set when a manifest was written.
    pub manifest_path: Option<PathBuf>,
}

impl BatchReport {
    pub fn count(&self, outcome: CopyOutcome) -> usize {
        self.files.iter().filter(|f| f.outcome == outcome).count()
    }
}

/// Creates `dir` if missing. The parent must already exist.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    match std::fs::create_dir(dir) {
        Ok(()) => {
            tracing::debug!(path = %dir.display(), "created output directory");
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {}
        Err(e) => {
            return Err(e).with_context(|| format!("create directory {}", dir.display()));
        }
    }
    if !dir.is_dir() {
        bail!("{} exists and is not a directory", dir.display());
    }
    Ok(())
}

/// Copies every matching file of `opts.source_dir` into the output directory
/// under its normalized name, calling `on_file` after each one.
pub fn process_dir<F>(opts: &BatchOptions, mut on_file: F) -> Result<BatchReport>
where
    F: FnMut(&ProcessedFile),
{
    opts.validate()?;
    let output_dir = opts.output_dir();
    ensure_output_dir(&output_dir)?;

    let sources = matching_files(&opts.source_dir, &opts.extensions)?;
    tracing::debug!(
        source = %opts.source_dir.display(),
        count = sources.len(),
        "found candidate files"
    );

    let mut report = BatchReport {
        output_dir: output_dir.clone(),
        ..BatchReport::default()
    };
    // normalized name -> first original that produced it
    let mut seen: HashMap<String, String> = HashMap::new();

    for src in sources {
        if src.name == opts.sentinel {
            tracing::debug!(name = %src.name, "skipping sentinel file");
            report.sentinel_skipped = true;
            continue;
        }

        let normalized = normalize_filename(&src.name, &opts.slug);
        // A slug never contains '.', so a leading dot means the base vanished.
        if normalized.starts_with('.') {
            tracing::warn!(original = %src.name, normalized = %normalized, "normalized base name is empty");
        }

        if let Some(first) = seen.get(&normalized) {
            tracing::warn!(
                first = %first,
                second = %src.name,
                normalized = %normalized,
                "name collision"
            );
            report.collisions.push(Collision {
                normalized: normalized.clone(),
                first: first.clone(),
                second: src.name.clone(),
            });
        } else {
            seen.insert(normalized.clone(), src.name.clone());
        }

        let target = output_dir.join(&normalized);
        let exists = target.exists();
        let outcome = if exists && opts.on_collision == CollisionPolicy::Skip {
            tracing::info!(target = %target.display(), "target exists, skipping");
            CopyOutcome::Skipped
        } else {
            let bytes = copy_with_metadata(&src.path, &target)?;
            tracing::debug!(from = %src.path.display(), to = %target.display(), bytes, "copied");
            if exists {
                CopyOutcome::Replaced
            } else {
                CopyOutcome::Copied
            }
        };

        let processed = ProcessedFile {
            original: src.name,
            normalized,
            source: src.path,
            target,
            outcome,
        };
        on_file(&processed);
        report.files.push(processed);
    }

    if opts.manifest {
        let manifest = Manifest::from_report(&report)?;
        report.manifest_path = Some(manifest.write_to(&output_dir)?);
    }

    tracing::info!(
        copied = report.count(CopyOutcome::Copied),
        replaced = report.count(CopyOutcome::Replaced),
        skipped = report.count(CopyOutcome::Skipped),
        collisions = report.collisions.len(),
        "batch finished"
    );
    Ok(report)
}
