//! Platform capabilities: clipboard and native share.

pub mod clipboard;
pub mod share;

pub use clipboard::SystemClipboard;
pub use share::TerminalShare;
