//! LED strip controller: pixel buffer, frame encoding, and transmission.
//!
//! Provides [`LedStrip`], which owns the pixel state for one physical strip
//! and pushes it to the wire through a [`PulseTransmitter`]. One controller
//! drives one output line; applications with several strips instantiate one
//! controller per line, each with independently owned buffers.

use heapless::Vec;

use crate::PIXEL_OFF;
use crate::encoder::{self, Pulse};
use crate::timing::TimingProfile;
use crate::transmit::{OutputLine, PulseTransmitter, TransmitError};
use crate::types::{ChipVariant, Pixel};

/// Number of pulse slots a strip of `led_count` LEDs needs: three wire bytes
/// of eight bits each per LED.
///
/// Use it to size the `PULSES` parameter at the instantiation site:
/// `LedStrip::<_, 8, { pulse_capacity(8) }>`.
pub const fn pulse_capacity(led_count: usize) -> usize {
    led_count * 3 * 8
}

/// Errors that can occur constructing or operating a strip controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// The chip variant has no usable timing profile.
    ///
    /// Fatal at construction; no buffers are allocated and there is no
    /// fallback to a default profile.
    UnsupportedVariant(ChipVariant),

    /// Pixel or pulse storage could not be obtained.
    ///
    /// Fatal at construction: the requested LED count does not fit the
    /// controller's const-generic capacities.
    AllocationFailure {
        /// Number of slots the configuration needs.
        requested: usize,
        /// Number of slots the storage provides.
        capacity: usize,
    },

    /// Pixel index past the end of the strip.
    ///
    /// A caller programming error; the buffer is left unmodified.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of LEDs in the strip.
        len: usize,
    },

    /// The transmitter reported the frame as not delivered.
    ///
    /// Recoverable: the pixel buffer is untouched by a failed transmit, so
    /// calling [`LedStrip::update`] again resends the frame.
    TransmitFailure,
}

impl core::fmt::Display for StripError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StripError::UnsupportedVariant(variant) => {
                write!(f, "chip variant {:?} has no usable timing profile", variant)
            }
            StripError::AllocationFailure {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "requested {} storage slots but capacity is {}",
                    requested, capacity
                )
            }
            StripError::IndexOutOfRange { index, len } => {
                write!(f, "pixel index {} out of range for {} LEDs", index, len)
            }
            StripError::TransmitFailure => {
                write!(f, "frame not delivered, update again to resend")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StripError {}

impl From<TransmitError> for StripError {
    fn from(_err: TransmitError) -> Self {
        StripError::TransmitFailure
    }
}

/// Controls a single WS281x-family LED strip.
///
/// Owns the pixel buffer and pulse storage for one strip. Callers mutate
/// pixels with [`set_pixel`](LedStrip::set_pixel), then push a whole frame
/// to the wire with [`update`](LedStrip::update); every update re-encodes
/// the entire buffer from scratch, there is no dirty tracking.
///
/// # Type Parameters
/// * `T` - Transmitter implementation type
/// * `LEDS` - Pixel storage capacity (maximum LED count)
/// * `PULSES` - Pulse storage capacity; size it with [`pulse_capacity`]
pub struct LedStrip<T: PulseTransmitter, const LEDS: usize, const PULSES: usize> {
    transmitter: T,
    line: OutputLine,
    variant: ChipVariant,
    profile: TimingProfile,
    pixels: Vec<Pixel, LEDS>,
    // Rebuilt on every update; the storage is reused, the contents are
    // transient.
    pulses: Vec<Pulse, PULSES>,
}

impl<T: PulseTransmitter, const LEDS: usize, const PULSES: usize> LedStrip<T, LEDS, PULSES> {
    /// Creates a controller for `led_count` LEDs on `line`, all unlit.
    ///
    /// The timing profile is derived from `variant` once, here, and is
    /// immutable for the controller's lifetime. Nothing is transmitted
    /// until the first [`update`](LedStrip::update).
    ///
    /// # Errors
    /// * `UnsupportedVariant` - `variant` is the `Null` sentinel; no
    ///   buffers are allocated
    /// * `AllocationFailure` - `led_count` exceeds `LEDS`, or the frame it
    ///   implies exceeds `PULSES`
    pub fn new(
        variant: ChipVariant,
        led_count: usize,
        line: OutputLine,
        transmitter: T,
    ) -> Result<Self, StripError> {
        if !variant.is_supported() {
            return Err(StripError::UnsupportedVariant(variant));
        }
        let profile = TimingProfile::for_variant(variant);

        let mut pixels = Vec::new();
        if pixels.resize(led_count, PIXEL_OFF).is_err() {
            return Err(StripError::AllocationFailure {
                requested: led_count,
                capacity: LEDS,
            });
        }

        // The pulse buffer is only filled during updates, but a strip whose
        // frames can never fit is unusable; reject it up front.
        let pulses_needed = profile.pulses_per_frame(led_count);
        if pulses_needed > PULSES {
            return Err(StripError::AllocationFailure {
                requested: pulses_needed,
                capacity: PULSES,
            });
        }

        Ok(Self {
            transmitter,
            line,
            variant,
            profile,
            pixels,
            pulses: Vec::new(),
        })
    }

    /// Writes one pixel. The change reaches the wire on the next
    /// [`update`](LedStrip::update).
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index >= len()`; the buffer is unmodified
    pub fn set_pixel(&mut self, index: usize, r: u8, g: u8, b: u8) -> Result<(), StripError> {
        let len = self.pixels.len();
        let pixel = self
            .pixels
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange { index, len })?;
        *pixel = Pixel::new(r, g, b);
        Ok(())
    }

    /// Reads one pixel back from the buffer.
    ///
    /// # Errors
    /// * `IndexOutOfRange` - `index >= len()`
    pub fn get_pixel(&self, index: usize) -> Result<Pixel, StripError> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(StripError::IndexOutOfRange {
                index,
                len: self.pixels.len(),
            })
    }

    /// Sets every pixel to unlit.
    pub fn clear(&mut self) {
        self.pixels.fill(PIXEL_OFF);
    }

    /// Sets every pixel to one color.
    pub fn fill(&mut self, r: u8, g: u8, b: u8) {
        self.pixels.fill(Pixel::new(r, g, b));
    }

    /// Encodes the current pixel buffer and transmits it as one frame.
    ///
    /// The full pulse train is rebuilt from scratch on every call and handed
    /// to the transmitter as a single burst. An empty strip encodes to an
    /// empty train and succeeds without contacting the transmitter.
    ///
    /// # Errors
    /// * `TransmitFailure` - the transmitter did not deliver the frame. The
    ///   pixel buffer is untouched; call `update` again to resend.
    pub fn update(&mut self) -> Result<(), StripError> {
        let requested = self.profile.pulses_per_frame(self.pixels.len());
        encoder::encode_frame(&self.pixels, &self.profile, &mut self.pulses).map_err(|_| {
            StripError::AllocationFailure {
                requested,
                capacity: PULSES,
            }
        })?;

        // Nothing to put on the wire for a zero-length strip.
        if self.pulses.is_empty() {
            return Ok(());
        }

        self.transmitter.transmit(self.line, &self.pulses, true)?;
        Ok(())
    }

    /// Returns the number of LEDs in the strip.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Returns true if the strip has no LEDs.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Returns the chip variant the strip was configured with.
    pub fn variant(&self) -> ChipVariant {
        self.variant
    }

    /// Returns the timing profile driving the encoder.
    pub fn profile(&self) -> &TimingProfile {
        &self.profile
    }

    /// Returns the output line the strip transmits on.
    pub fn output_line(&self) -> OutputLine {
        self.line
    }

    /// Read-only view of the pixel buffer.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consumes the controller and returns the transmitter.
    pub fn release(self) -> T {
        self.transmitter
    }
}
