//! # portview
//!
//! Serial port enumeration for the portview desktop utility.
//!
//! The crate answers one question: which serial ports on this machine can
//! be opened right now? Enumeration is platform aware:
//!
//! - **Windows**: probes the fixed name range `COM1`..`COM256`
//! - **Linux**: probes `/dev/tty*` entries with an alphabetic suffix
//! - **macOS / BSD**: probes `/dev/tty.*` callout entries
//!
//! "Available" means the device opened once as a serial connection and was
//! closed again. A positive answer is not proof of a real serial device,
//! and a negative one may just be a port that is busy; callers get the
//! filtered name list and nothing else.
//!
//! ## Example
//!
//! ```rust,no_run
//! fn main() -> portview::Result<()> {
//!     for port in portview::list_available_ports()? {
//!         println!("{port}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod host;
pub mod platform;
pub mod probe;

pub use {
    error::{Error, Result},
    host::{available_ports, list_available_ports, probe_candidates},
    platform::Platform,
    probe::{PROBE_BAUD, Probe, ProbeOutcome, SerialProbe},
};
