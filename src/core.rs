// src/core.rs
pub mod metadata;
pub mod scanner;
pub mod wildcard;
