// crates/licnorm-core/src/rules/mod.rs

pub mod defaults;
pub mod rule;
