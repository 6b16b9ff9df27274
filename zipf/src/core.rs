// src/core.rs
pub mod analyzer;
pub mod counter;
pub mod ranker;
pub mod report;
