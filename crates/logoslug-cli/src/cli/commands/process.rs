//! `logoslug process` – copy logos under normalized names.

use anyhow::Result;
use logoslug_core::batch::{self, BatchReport};
use logoslug_core::config::SlugConfig;

pub fn run_process(cfg: &SlugConfig) -> Result<BatchReport> {
    let opts = cfg.batch_options();
    tracing::info!(
        source = %opts.source_dir.display(),
        separator = %opts.slug.separator,
        transliterate = opts.slug.transliterate,
        on_collision = %opts.on_collision,
        "processing logos"
    );

    let report = batch::process_dir(&opts, |f| println!("{}", f.progress_line()))?;

    for c in &report.collisions {
        eprintln!(
            "warning: {} and {} both normalize to {}",
            c.first, c.second, c.normalized
        );
    }
    if report.files.is_empty() {
        println!("No logos to process in {}.", opts.source_dir.display());
    }
    if let Some(path) = &report.manifest_path {
        println!("Manifest: {}", path.display());
    }
    Ok(report)
}
