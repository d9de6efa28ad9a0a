// crates/licnorm-core/src/rules/rule.rs

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::error::{NormError, Result};

/// One find/replace pass over the whole text.
///
/// Patterns are compiled in multi-line mode, so `^` and `$` match at line
/// boundaries rather than only at the ends of the buffer. Templates use the
/// `regex` expansion syntax (`${name}`, `$1`); a group that did not take part
/// in the match expands to nothing.
#[derive(Clone, Debug)]
pub struct Rule {
    name: String,
    pattern: Regex,
    template: String,
}

impl Rule {
    pub fn new(name: &str, pattern: &str, template: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|source| NormError::Pattern {
                rule: name.to_string(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            template: template.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace every non-overlapping match and return the new text together
    /// with the number of replacements. Borrows `text` when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut out = String::new();
        let mut last = 0usize;
        let mut hits = 0usize;

        for caps in self.pattern.captures_iter(text) {
            let Some(m) = caps.get(0) else {
                continue;
            };
            out.push_str(&text[last..m.start()]);
            caps.expand(&self.template, &mut out);
            last = m.end();
            hits += 1;
        }

        if hits == 0 {
            return (Cow::Borrowed(text), 0);
        }
        out.push_str(&text[last..]);
        (Cow::Owned(out), hits)
    }

    /// True if the pattern can produce a zero-width match.
    pub(crate) fn matches_empty(&self) -> bool {
        const PROBES: [&str; 3] = ["", "a", " a\n\"*/"];
        PROBES
            .iter()
            .any(|probe| self.pattern.find_iter(probe).any(|m| m.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_counts_every_match() {
        let rule = Rule::new("digits", r"[0-9]+", "#").unwrap();
        let (out, hits) = rule.apply("a1 b22 c333");
        assert_eq!(out, "a# b# c#");
        assert_eq!(hits, 3);
    }

    #[test]
    fn apply_borrows_when_nothing_matches() {
        let rule = Rule::new("digits", r"[0-9]+", "#").unwrap();
        let (out, hits) = rule.apply("no numbers here");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(hits, 0);
    }

    #[test]
    fn caret_matches_at_line_starts() {
        let rule = Rule::new("bullet", r"^-", "*").unwrap();
        let (out, hits) = rule.apply("- one\n- two\nx - three");
        assert_eq!(out, "* one\n* two\nx - three");
        assert_eq!(hits, 2);
    }

    #[test]
    fn missing_group_expands_to_nothing() {
        let rule = Rule::new("opt", r"a(?P<tail>b)?", "[${tail}]").unwrap();
        let (out, _) = rule.apply("ab a");
        assert_eq!(out, "[b] []");
    }

    #[test]
    fn invalid_pattern_names_the_rule() {
        let err = Rule::new("broken", r"(unclosed", "").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("broken"), "{msg}");
    }

    #[test]
    fn detects_zero_width_patterns() {
        assert!(Rule::new("star", r"x*", "").unwrap().matches_empty());
        assert!(Rule::new("bol", r"^", "").unwrap().matches_empty());
        assert!(Rule::new("wb", r"\b", "").unwrap().matches_empty());
        assert!(!Rule::new("plus", r"x+", "").unwrap().matches_empty());
    }
}
