//! Filename normalization.
//!
//! Turns an arbitrary logo filename into a lowercase, URL-safe slug while
//! keeping the extension exactly as it was. Two behaviors are supported
//! through [`SlugOptions`]: hyphen separator with Turkish transliteration
//! (the default) and underscore separator without transliteration.

mod sanitize;
mod translit;

pub use sanitize::sanitize_base;
pub use translit::transliterate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character used to replace disallowed characters and join the remaining tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Separator {
    #[serde(rename = "_")]
    Underscore,
    #[default]
    #[serde(rename = "-")]
    Hyphen,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Underscore => '_',
            Separator::Hyphen => '-',
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid separator {0:?}: expected \"-\" or \"_\"")]
pub struct ParseSeparatorError(String);

impl FromStr for Separator {
    type Err = ParseSeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" | "hyphen" => Ok(Separator::Hyphen),
            "_" | "underscore" => Ok(Separator::Underscore),
            other => Err(ParseSeparatorError(other.to_string())),
        }
    }
}

/// Normalization knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    pub separator: Separator,
    /// Fold Turkish diacritics to ASCII before sanitizing.
    pub transliterate: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: Separator::Hyphen,
            transliterate: true,
        }
    }
}

impl SlugOptions {
    /// Underscore separator, no transliteration.
    pub fn underscore() -> Self {
        Self {
            separator: Separator::Underscore,
            transliterate: false,
        }
    }
}

/// Splits `name` into base and extension (dot included).
///
/// The extension starts at the last `.`, except that leading dots never
/// start one: `.png` and `noext` both have an empty extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if !name[..dot].chars().all(|c| c == '.') => (&name[..dot], &name[dot..]),
        _ => (name, ""),
    }
}

/// Slugifies a bare string (no extension handling).
pub fn slugify(input: &str, opts: &SlugOptions) -> String {
    if opts.transliterate {
        sanitize_base(&transliterate(input), opts.separator.as_char())
    } else {
        sanitize_base(input, opts.separator.as_char())
    }
}

/// Normalizes a filename: the base becomes a slug, the extension is kept verbatim.
///
/// Total over any input. A base that sanitizes to nothing is not replaced,
/// so the result is then just the extension.
///
/// # Examples
///
/// - `normalize_filename("Team Logo!!.png", &SlugOptions::default())` → `"team-logo.png"`
/// - `normalize_filename("Team Logo!!.png", &SlugOptions::underscore())` → `"team_logo.png"`
pub fn normalize_filename(name: &str, opts: &SlugOptions) -> String {
    let (base, ext) = split_extension(name);
    let mut out = slugify(base, opts);
    out.push_str(ext);
    out
}
