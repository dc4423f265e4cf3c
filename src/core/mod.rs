//! Core types & traits: domain-agnostic contracts for tools and their errors.

pub mod content;
pub mod error;
pub mod tool;
