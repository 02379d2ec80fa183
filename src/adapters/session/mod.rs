//! Auth/session adapters.

pub mod memory_session;

pub use memory_session::MemorySession;
