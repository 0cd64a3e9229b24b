//! Replace, collapse and trim pass over a base name.

/// Replaces characters outside `[A-Za-z0-9]` and `separator` with
/// `separator`, collapses separator runs, trims separators at both ends and
/// lowercases what is left.
pub fn sanitize_base(base: &str, separator: char) -> String {
    let mut out = String::with_capacity(base.len());
    let mut prev_separator = false;

    for c in base.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            prev_separator = false;
        } else {
            // Disallowed characters and the separator itself are treated alike.
            if !prev_separator {
                out.push(separator);
            }
            prev_separator = true;
        }
    }

    out.trim_matches(separator).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_and_punctuation() {
        assert_eq!(sanitize_base("Team Logo!!", '_'), "team_logo");
        assert_eq!(sanitize_base("Team Logo!!", '-'), "team-logo");
    }

    #[test]
    fn collapses_mixed_runs() {
        assert_eq!(sanitize_base("a _-. b", '-'), "a-b");
        assert_eq!(sanitize_base("a___b", '_'), "a_b");
    }

    #[test]
    fn trims_separators() {
        assert_eq!(sanitize_base("__weird___name--", '_'), "weird_name");
        assert_eq!(sanitize_base("__weird___name--", '-'), "weird-name");
    }

    #[test]
    fn other_separator_is_replaced() {
        assert_eq!(sanitize_base("a-b", '_'), "a_b");
        assert_eq!(sanitize_base("a_b", '-'), "a-b");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(sanitize_base("İstanbul Cup", '_'), "stanbul_cup");
        assert_eq!(sanitize_base("şöğüçı", '_'), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(sanitize_base("", '-'), "");
        assert_eq!(sanitize_base("---", '-'), "");
    }
}
