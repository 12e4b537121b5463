//! Chart generation for distributions
//!
//! Provides Mermaid chart syntax for Markdown reports. HTML reports draw
//! their bars with plain CSS and need nothing from here.

pub mod mermaid;

pub use mermaid::MermaidGenerator;
