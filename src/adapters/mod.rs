//! Infrastructure adapters. Implement ports.
//!
//! HTTP collaborators, session, platform capabilities, terminal UI. Map errors to DomainError.

pub mod api;
pub mod platform;
pub mod session;
pub mod ui;
