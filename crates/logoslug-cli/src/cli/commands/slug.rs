//! `logoslug slug <name>...` – print normalized names.

use logoslug_core::config::SlugConfig;
use logoslug_core::slug::normalize_filename;

pub fn run_slug(cfg: &SlugConfig, names: &[String]) {
    let opts = cfg.slug_options();
    for name in names {
        println!("{} -> {}", name, normalize_filename(name, &opts));
    }
}
