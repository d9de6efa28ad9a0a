pub mod error;
pub mod validate;

pub mod normalize;
pub mod rules;

pub use crate::normalize::{Normalized, NormalizeReport, Normalizer, RuleHits};
pub use crate::rules::defaults::default_rules;
pub use crate::rules::rule::Rule;
