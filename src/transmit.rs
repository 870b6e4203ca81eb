//! Hardware boundary: emitting an encoded pulse train on an output line.

use crate::encoder::Pulse;

/// Identifies the physical output line (GPIO number) a strip is wired to.
///
/// The crate never configures the line itself; the surrounding system is
/// expected to have set it up as an output before constructing a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputLine(pub u8);

impl From<u8> for OutputLine {
    fn from(line: u8) -> Self {
        OutputLine(line)
    }
}

impl From<OutputLine> for u8 {
    fn from(line: OutputLine) -> Self {
        line.0
    }
}

/// Pulse emission failed; the frame was not delivered.
///
/// Deliberately carries no detail. The core only needs to know whether the
/// frame reached the wire; implementations should handle and report their
/// hardware specifics internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TransmitError;

impl core::fmt::Display for TransmitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "pulse transmission failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransmitError {}

/// Trait for abstracting the pulse-train transmitter hardware.
///
/// Implement this for your platform's waveform peripheral (RMT, PIO, SPI,
/// timer + DMA, ...) to let a [`LedStrip`](crate::strip::LedStrip) drive it.
pub trait PulseTransmitter {
    /// Emits `pulses` on `line` as one uninterrupted burst.
    ///
    /// Pulse durations are in nanoseconds; convert them to your peripheral's
    /// resolution as needed (see [`Pulse::high_ticks`] for tick-counting
    /// timers). When `wait_until_complete` is true, block until the last
    /// pulse has left the wire.
    ///
    /// Returning an error means the frame was not delivered. The protocol
    /// has no mid-frame resume, so implementations must not retry partial
    /// bursts; the caller resends the whole frame instead.
    fn transmit(
        &mut self,
        line: OutputLine,
        pulses: &[Pulse],
        wait_until_complete: bool,
    ) -> Result<(), TransmitError>;
}
