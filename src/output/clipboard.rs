//! Clipboard copy through an external helper.
//!
//! The first of `wl-copy`, `xclip` and `pbcopy` found on `PATH` receives
//! the text on stdin.

use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;

/// Errors that can occur while copying to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// None of the supported helpers is on `PATH`.
    #[error("no clipboard utility found (expected wl-copy, xclip or pbcopy)")]
    NoTool,
    #[error("failed to run {tool}: {source}")]
    /// The helper could not be started or fed.
    Spawn {
        /// Helper that failed.
        tool: ClipboardTool,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}")]
    /// The helper exited unsuccessfully.
    Failed {
        /// Helper that failed.
        tool: ClipboardTool,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// A supported clipboard helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    /// Wayland.
    WlCopy,
    /// X11.
    Xclip,
    /// macOS.
    Pbcopy,
}

impl ClipboardTool {
    /// Helpers in order of preference.
    pub const ALL: [ClipboardTool; 3] = [
        ClipboardTool::WlCopy,
        ClipboardTool::Xclip,
        ClipboardTool::Pbcopy,
    ];

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            ClipboardTool::WlCopy => "wl-copy",
            ClipboardTool::Xclip => "xclip",
            ClipboardTool::Pbcopy => "pbcopy",
        }
    }

    fn args(&self) -> &'static [&'static str] {
        match self {
            ClipboardTool::Xclip => &["-selection", "clipboard"],
            ClipboardTool::WlCopy | ClipboardTool::Pbcopy => &[],
        }
    }

    /// Returns the first helper present on the process `PATH`.
    pub fn detect() -> Option<(Self, PathBuf)> {
        let path = std::env::var_os("PATH")?;
        Self::detect_in(&path)
    }

    /// Returns the first helper present in a `PATH`-style list.
    pub fn detect_in(path: &OsStr) -> Option<(Self, PathBuf)> {
        Self::ALL
            .into_iter()
            .find_map(|tool| find_in_path(tool.program(), path).map(|found| (tool, found)))
    }
}

impl std::fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// Copies `text` using the first available helper.
pub fn copy_to_clipboard(text: &str) -> Result<ClipboardTool, ClipboardError> {
    let (tool, program) = ClipboardTool::detect().ok_or(ClipboardError::NoTool)?;

    let mut child = Command::new(&program)
        .args(tool.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| ClipboardError::Spawn { tool, source })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|source| ClipboardError::Spawn { tool, source })?;
    }

    let status = child
        .wait()
        .map_err(|source| ClipboardError::Spawn { tool, source })?;
    if !status.success() {
        return Err(ClipboardError::Failed { tool, status });
    }

    tracing::info!(tool = %tool, "Copied password to clipboard");
    Ok(tool)
}

fn find_in_path(program: &str, path: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
