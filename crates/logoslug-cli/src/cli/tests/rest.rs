//! Tests for `slug` and `config`.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use logoslug_core::slug::Separator;

#[test]
fn cli_parse_slug() {
    match parse(&["logoslug", "slug", "Team Logo!!.png", "İstanbul Cup.png"]) {
        Some(CliCommand::Slug { names, slug }) => {
            assert_eq!(names, vec!["Team Logo!!.png", "İstanbul Cup.png"]);
            assert!(slug.separator.is_none());
            assert!(!slug.no_transliterate);
        }
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_parse_slug_with_separator() {
    match parse(&["logoslug", "slug", "--separator", "underscore", "a b.png"]) {
        Some(CliCommand::Slug { names, slug }) => {
            assert_eq!(names, vec!["a b.png"]);
            assert_eq!(slug.separator, Some(Separator::Underscore));
        }
        _ => panic!("expected Slug"),
    }
}

#[test]
fn cli_parse_slug_requires_a_name() {
    assert!(Cli::try_parse_from(["logoslug", "slug"]).is_err());
}

#[test]
fn cli_parse_config() {
    match parse(&["logoslug", "config"]) {
        Some(CliCommand::Config) => {}
        _ => panic!("expected Config"),
    }
}
