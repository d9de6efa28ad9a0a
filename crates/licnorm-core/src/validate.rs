use std::collections::HashSet;

use crate::error::{NormError, Result};
use crate::rules::rule::Rule;

pub fn validate_rules(rules: &[Rule]) -> Result<()> {
    let mut seen = HashSet::new();
    for rule in rules {
        // Names key the per-rule report.
        if rule.name().trim().is_empty() {
            return Err(NormError::Validation("rule name must not be empty".into()));
        }
        if !seen.insert(rule.name()) {
            return Err(NormError::Validation(format!(
                "duplicate rule name `{}`",
                rule.name()
            )));
        }
        // A zero-width match would splice the template between characters.
        if rule.matches_empty() {
            return Err(NormError::Validation(format!(
                "rule `{}` matches the empty string: {}",
                rule.name(),
                rule.pattern()
            )));
        }
    }
    Ok(())
}
