//! Core types for strip configuration.

use smart_leds::RGB8;

/// A single LED's color: three independent 8-bit channels.
///
/// Alias of [`smart_leds::RGB8`] for interoperability with the wider LED
/// ecosystem. Stored in R, G, B field order; the encoder handles the chip
/// family's G, R, B wire order on its own.
pub type Pixel = RGB8;

/// The digital LED chip variants this crate can drive.
///
/// Each variant selects a [`TimingProfile`](crate::timing::TimingProfile)
/// with the pulse tolerances of that chip revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipVariant {
    /// Sentinel for "not set". Carries all-zero timings; a controller
    /// refuses to be constructed with it.
    Null,

    /// The original WS2812.
    Ws2812,

    /// WS2812B revision.
    Ws2812b,

    /// WS2812D revision.
    Ws2812d,

    /// WS2813 revision.
    Ws2813,

    /// WS2815 revision.
    Ws2815,

    /// Relaxed timings that should work for all WS281x chips and clones.
    Ws281x,
}

impl ChipVariant {
    /// Returns true if the variant has a usable timing profile.
    ///
    /// Only the [`Null`](ChipVariant::Null) sentinel is unsupported; every
    /// named chip revision can be driven.
    #[inline]
    pub const fn is_supported(self) -> bool {
        !matches!(self, ChipVariant::Null)
    }
}
