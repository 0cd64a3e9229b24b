//! CLI for logoslug.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use logoslug_core::batch::CollisionPolicy;
use logoslug_core::config::{self, SlugConfig};
use logoslug_core::slug::Separator;
use std::path::PathBuf;

use commands::{run_config, run_process, run_slug};

/// Top-level CLI. With no subcommand, behaves like `process`.
#[derive(Debug, Parser)]
#[command(name = "logoslug")]
#[command(about = "Copy logo images under normalized, URL-safe filenames", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Normalization overrides shared by `process` and `slug`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct SlugArgs {
    /// Separator character: "-" or "_".
    #[arg(long, value_name = "SEP")]
    pub separator: Option<Separator>,
    /// Keep Turkish letters as-is (they then become separators).
    #[arg(long)]
    pub no_transliterate: bool,
}

impl SlugArgs {
    fn apply(&self, cfg: &mut SlugConfig) {
        if let Some(separator) = self.separator {
            cfg.separator = separator;
        }
        if self.no_transliterate {
            cfg.transliterate = false;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Copy every logo from the source directory into the output subdirectory.
    Process {
        /// Directory holding the original logos.
        #[arg(long, value_name = "DIR")]
        source: Option<PathBuf>,
        /// Output directory name, created inside the source directory.
        #[arg(long, value_name = "NAME")]
        output_subdir: Option<String>,
        #[command(flatten)]
        slug: SlugArgs,
        /// "overwrite" (last write wins) or "skip" (keep existing files).
        #[arg(long, value_name = "POLICY")]
        on_collision: Option<CollisionPolicy>,
        /// Write manifest.json into the output directory.
        #[arg(long)]
        manifest: bool,
    },

    /// Print the normalized form of each name without touching the filesystem.
    Slug {
        /// File names to normalize.
        #[arg(required = true)]
        names: Vec<String>,
        #[command(flatten)]
        slug: SlugArgs,
    },

    /// Show the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    /// Folds command-line overrides into `cfg`.
    fn apply_overrides(&self, cfg: &mut SlugConfig) {
        match self {
            CliCommand::Process {
                source,
                output_subdir,
                slug,
                on_collision,
                manifest,
            } => {
                if let Some(source) = source {
                    cfg.source_dir = source.clone();
                }
                if let Some(output_subdir) = output_subdir {
                    cfg.output_subdir = output_subdir.clone();
                }
                slug.apply(cfg);
                if let Some(policy) = on_collision {
                    cfg.on_collision = *policy;
                }
                if *manifest {
                    cfg.manifest = true;
                }
            }
            CliCommand::Slug { slug, .. } => slug.apply(cfg),
            CliCommand::Config => {}
        }
    }

    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or_else(CliCommand::default_process);
        command.apply_overrides(&mut cfg);

        match command {
            CliCommand::Process { .. } => {
                run_process(&cfg)?;
            }
            CliCommand::Slug { names, .. } => run_slug(&cfg, &names),
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }

    fn default_process() -> Self {
        CliCommand::Process {
            source: None,
            output_subdir: None,
            slug: SlugArgs::default(),
            on_collision: None,
            manifest: false,
        }
    }
}

#[cfg(test)]
mod tests;
