//! Host platform detection and candidate port generation.
//!
//! Each supported platform category has its own strategy for producing
//! candidate device names: a fixed COM name range on Windows, and `/dev`
//! name patterns on Linux and the macOS/BSD family. Candidates are names
//! only; whether one is actually usable is decided later by the open probe.

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

/// Highest COM port number generated on Windows.
const MAX_COM_PORT: u32 = 256;

/// Platform category selecting a candidate generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows: the fixed `COM1`..`COM256` name range.
    Windows,
    /// Linux family: `/dev/tty*` entries with an alphabetic suffix.
    Linux,
    /// macOS and the BSDs: `/dev/tty.*` callout entries.
    Bsd,
}

impl Platform {
    /// Detect the category of the running host.
    pub fn detect() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier (as in `std::env::consts::OS`) to a category.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" | "android" => Ok(Self::Linux),
            "macos" | "freebsd" | "netbsd" | "openbsd" | "dragonfly" => Ok(Self::Bsd),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Get a human-readable name for the category.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Bsd => "Unix/BSD",
        }
    }

    /// Generate the candidate port names for this category.
    ///
    /// Order follows the underlying source (numeric on Windows, directory
    /// order on Unix) and is not sorted.
    #[must_use]
    pub fn candidate_ports(self) -> Vec<String> {
        let candidates: Vec<String> = match self {
            Self::Windows => (1..=MAX_COM_PORT).map(|n| format!("COM{n}")).collect(),
            Self::Linux => scan_dev_dir(Path::new("/dev"), is_linux_tty_name),
            Self::Bsd => scan_dev_dir(Path::new("/dev"), is_bsd_tty_name),
        };
        debug!("{} candidate ports on {}", candidates.len(), self.name());
        candidates
    }
}

/// Matches `tty` followed by an alphabetic character (`ttyUSB0`, `ttyS1`, ...).
///
/// The bare `tty` device and the numbered virtual consoles (`tty0`, `tty1`,
/// ...) do not match.
fn is_linux_tty_name(name: &str) -> bool {
    name.strip_prefix("tty")
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_alphabetic())
}

/// Matches the `tty.` callout naming used on macOS and the BSDs.
fn is_bsd_tty_name(name: &str) -> bool {
    name.starts_with("tty.")
}

/// List the entries of `dir` whose file name satisfies `matches`, as full
/// paths.
///
/// A missing or unreadable directory yields no candidates rather than an
/// error, the same as a pattern that matches nothing.
fn scan_dev_dir(dir: &Path, matches: fn(&str) -> bool) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if matches(name) {
            candidates.push(entry.path().to_string_lossy().into_owned());
        }
    }
    candidates
}
