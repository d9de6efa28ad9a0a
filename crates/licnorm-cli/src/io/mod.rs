// crates/licnorm-cli/src/io/mod.rs

pub mod text_file;
