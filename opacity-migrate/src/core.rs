// src/core.rs
pub mod migrate;
pub mod rewrite;
pub mod scanner;
