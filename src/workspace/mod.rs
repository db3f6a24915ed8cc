// src/workspace/mod.rs

pub mod file;

pub use file::*;
