//! # Core Types Crate
//!
//! This crate defines the foundational data structures for the learner
//! analytics platform: the `LearnerProfile` document and every nested record
//! it contains (`LearningMetrics` and its per-style categories, `Course`,
//! `Module`).
//!
//! These are plain serde structs. Their wire shape is the document stored in
//! the document-store service, so field names here are the field names on
//! disk. Crates above this one (e.g. `database`) rely on that mapping being
//! stable.

pub mod structs;

// Re-export the core types to provide a clean public API.
pub use structs::{
    CodingMetrics, Course, LearnerProfile, LearningMetrics, Module, TestMetrics, TextMetrics,
    VisualMetrics,
};
