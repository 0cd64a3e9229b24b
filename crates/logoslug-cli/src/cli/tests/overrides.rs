//! Command-line flags folded into the loaded config.

use super::parse;
use crate::cli::CliCommand;
use logoslug_core::batch::CollisionPolicy;
use logoslug_core::config::SlugConfig;
use logoslug_core::slug::{Separator, SlugOptions};
use std::path::PathBuf;

fn overridden(args: &[&str]) -> SlugConfig {
    let command = parse(args).unwrap_or_else(CliCommand::default_process);
    let mut cfg = SlugConfig::default();
    command.apply_overrides(&mut cfg);
    cfg
}

#[test]
fn bare_invocation_keeps_config() {
    assert_eq!(overridden(&["logoslug"]), SlugConfig::default());
}

#[test]
fn process_flags_override_config() {
    let cfg = overridden(&[
        "logoslug",
        "process",
        "--source",
        "/srv/events",
        "--separator",
        "_",
        "--no-transliterate",
        "--on-collision",
        "skip",
        "--manifest",
    ]);
    assert_eq!(cfg.source_dir, PathBuf::from("/srv/events"));
    assert_eq!(cfg.output_subdir, "processed");
    assert_eq!(cfg.slug_options(), SlugOptions::underscore());
    assert_eq!(cfg.on_collision, CollisionPolicy::Skip);
    assert!(cfg.manifest);
}

#[test]
fn slug_flags_override_config() {
    let cfg = overridden(&["logoslug", "slug", "--separator", "_", "x.png"]);
    assert_eq!(cfg.separator, Separator::Underscore);
    assert!(cfg.transliterate);
}
