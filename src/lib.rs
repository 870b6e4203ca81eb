#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ChipVariant`**: The chip revision a strip is built from; selects its timing profile
//! - **`TimingProfile`**: The five nanosecond constants defining bit-0, bit-1 and reset-gap pulse shapes
//! - **`Pulse`**: One transmitted bit, a high duration followed by a low duration
//! - **`LedStrip`**: Controls a single strip: pixel buffer, frame encoding, transmission
//! - **`PulseTransmitter`**: Trait to implement for your waveform-emitting hardware
//! - **`OutputLine`**: The physical line (GPIO number) a strip transmits on
//!
//! Pixels are 8-bit [`RGB8`] values. The encoder serializes them in the chip
//! family's Green, Red, Blue wire order; callers always work in plain RGB.

// Re-export the pixel type and color constants from smart-leds for user convenience
pub use smart_leds::{RGB8, colors};

pub mod encoder;
pub mod strip;
pub mod timing;
pub mod transmit;
pub mod types;

pub use encoder::{EncodeError, Pulse};
pub use strip::{LedStrip, StripError, pulse_capacity};
pub use timing::TimingProfile;
pub use transmit::{OutputLine, PulseTransmitter, TransmitError};
pub use types::{ChipVariant, Pixel};

/// An unlit pixel.
pub const PIXEL_OFF: Pixel = RGB8::new(0, 0, 0);
