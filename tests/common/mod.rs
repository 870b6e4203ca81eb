//! Shared test infrastructure for pulse-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pulse_strip::{OutputLine, Pulse, PulseTransmitter, TransmitError};

// ============================================================================
// Mock Transmitters
// ============================================================================

/// One burst as handed to a transmitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub line: OutputLine,
    pub pulses: Vec<Pulse>,
    pub wait_until_complete: bool,
}

/// Transmitter that records every burst it is handed.
pub struct MockTransmitter {
    pub frames: Vec<Frame>,
}

impl MockTransmitter {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// The most recently transmitted frame.
    pub fn last_frame(&self) -> &Frame {
        self.frames.last().expect("no frame was transmitted")
    }
}

impl PulseTransmitter for MockTransmitter {
    fn transmit(
        &mut self,
        line: OutputLine,
        pulses: &[Pulse],
        wait_until_complete: bool,
    ) -> Result<(), TransmitError> {
        self.frames.push(Frame {
            line,
            pulses: pulses.to_vec(),
            wait_until_complete,
        });
        Ok(())
    }
}

/// Transmitter that fails the first `failures` bursts, then records.
pub struct FlakyTransmitter {
    pub failures: usize,
    pub inner: MockTransmitter,
}

impl FlakyTransmitter {
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            inner: MockTransmitter::new(),
        }
    }
}

impl PulseTransmitter for FlakyTransmitter {
    fn transmit(
        &mut self,
        line: OutputLine,
        pulses: &[Pulse],
        wait_until_complete: bool,
    ) -> Result<(), TransmitError> {
        if self.failures > 0 {
            self.failures -= 1;
            return Err(TransmitError);
        }
        self.inner.transmit(line, pulses, wait_until_complete)
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// The bit-0 pulse shape of a profile.
pub fn zero_pulse(profile: &pulse_strip::TimingProfile) -> Pulse {
    Pulse {
        high_ns: profile.t0_high,
        low_ns: profile.t0_low,
    }
}

/// The bit-1 pulse shape of a profile.
pub fn one_pulse(profile: &pulse_strip::TimingProfile) -> Pulse {
    Pulse {
        high_ns: profile.t1_high,
        low_ns: profile.t1_low,
    }
}
