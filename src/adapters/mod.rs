//! Infrastructure adapters. Implement ports.
//!
//! Terminal UI and report files. Map errors to DomainError.

pub mod export;
pub mod ui;
