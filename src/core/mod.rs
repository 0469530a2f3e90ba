//! Core functionality: configuration, post records, directory scanning and
//! the manifest itself

pub mod config;
pub mod document;
pub mod error;
pub mod file_system;
pub mod manifest;
