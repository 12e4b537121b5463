//! Command handlers for the `EduVerse` CLI

pub mod catalog;
pub mod config;
pub mod report;
