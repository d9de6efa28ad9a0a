// crates/licnorm-cli/src/cmd/mod.rs

pub mod normalize;
