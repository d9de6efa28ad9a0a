// crates/licnorm-core/src/normalize.rs
//
// Left fold of the rule list over the text: each rule sees the previous
// rule's output, never the original input.

use tracing::debug;

use crate::error::Result;
use crate::rules::defaults::default_rules;
use crate::rules::rule::Rule;
use crate::validate::validate_rules;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleHits {
    pub rule: String,
    pub replacements: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// One entry per rule, in application order.
    pub rules: Vec<RuleHits>,
    pub changed: bool,
}

impl NormalizeReport {
    pub fn total_replacements(&self) -> usize {
        self.rules.iter().map(|r| r.replacements).sum()
    }

    pub fn hits_for(&self, rule: &str) -> Option<usize> {
        self.rules
            .iter()
            .find(|r| r.rule == rule)
            .map(|r| r.replacements)
    }
}

#[derive(Clone, Debug)]
pub struct Normalized {
    pub text: String,
    pub report: NormalizeReport,
}

/// An ordered, validated rule set.
#[derive(Clone, Debug)]
pub struct Normalizer {
    rules: Vec<Rule>,
}

impl Normalizer {
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        validate_rules(&rules)?;
        Ok(Self { rules })
    }

    pub fn with_default_rules() -> Result<Self> {
        Self::new(default_rules()?)
    }

    pub fn normalize(&self, input: &str) -> Normalized {
        let mut text = input.to_string();
        let mut report = NormalizeReport::default();

        for rule in &self.rules {
            let (out, replacements) = rule.apply(&text);
            debug!(
                rule = rule.name(),
                template = rule.template(),
                replacements,
                "rule applied"
            );
            if replacements > 0 {
                text = out.into_owned();
            }
            report.rules.push(RuleHits {
                rule: rule.name().to_string(),
                replacements,
            });
        }

        report.changed = text != input;
        Normalized { text, report }
    }
}
