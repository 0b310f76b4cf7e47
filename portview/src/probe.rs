//! Availability probing for candidate ports.
//!
//! A candidate counts as available when it can be opened as a serial
//! connection; the handle is closed again immediately. The check is
//! deliberately coarse: opening can succeed on non-serial device files that
//! match a candidate pattern, and can fail transiently on ports held open
//! by another process.

use crate::error::Error;

/// Baud rate used for probe opens.
///
/// The rate has no bearing on the availability answer; 9600 is the
/// conventional serial default.
pub const PROBE_BAUD: u32 = 9600;

/// Outcome of probing a single candidate.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// The candidate opened and was closed again.
    Available,
    /// The candidate could not be opened. Enumeration discards the reason;
    /// it is carried only so the discard happens at the call site.
    Unavailable(Error),
}

impl ProbeOutcome {
    /// True when the candidate opened successfully.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Availability check, separated from enumeration so the enumeration logic
/// can be exercised against scripted outcomes.
pub trait Probe {
    /// Test whether `port` can currently be opened.
    fn probe(&self, port: &str) -> ProbeOutcome;
}

/// Probe that opens the port via the `serialport` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialProbe;

impl Probe for SerialProbe {
    fn probe(&self, port: &str) -> ProbeOutcome {
        match serialport::new(port, PROBE_BAUD).open() {
            // Dropping the handle closes the port.
            Ok(_handle) => ProbeOutcome::Available,
            Err(e) => ProbeOutcome::Unavailable(Error::Serial(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_available() {
        assert!(ProbeOutcome::Available.is_available());

        let reason = Error::UnsupportedPlatform("none".to_string());
        assert!(!ProbeOutcome::Unavailable(reason).is_available());
    }

    #[test]
    fn test_serial_probe_rejects_missing_device() {
        // No platform has a serial device at this path.
        let outcome = SerialProbe.probe("/no-such-dir/no-such-port");
        assert!(!outcome.is_available());
    }
}
