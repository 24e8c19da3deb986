//! Output encoding and clipboard integration.

mod clipboard;
mod format;

pub use clipboard::{copy_to_clipboard, ClipboardError, ClipboardTool};
pub use format::{render, OutputFormat};
