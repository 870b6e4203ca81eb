//! Per-variant protocol timing constants.

use crate::types::ChipVariant;

/// Protocol timing for one chip variant, in nanoseconds.
///
/// Derived once from a [`ChipVariant`] when a controller is constructed and
/// immutable from then on; the encoder reads it by reference and never
/// writes it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingProfile {
    /// High time of a bit-0 pulse.
    pub t0_high: u32,

    /// Low time of a bit-0 pulse.
    pub t0_low: u32,

    /// High time of a bit-1 pulse.
    pub t1_high: u32,

    /// Low time of a bit-1 pulse.
    pub t1_low: u32,

    /// Low time that separates consecutive frames on the wire.
    pub reset_gap: u32,

    /// Bytes shifted out per LED (3 for all supported variants: one byte
    /// each for green, red, blue).
    pub bytes_per_led: usize,
}

impl TimingProfile {
    /// Looks up the timing profile for a chip variant.
    ///
    /// Values come from the datasheets. The `Ws281x` row is deliberately
    /// conservative so that clones stay within tolerance. `Null` maps to an
    /// all-zero profile and must be rejected before encoding.
    pub const fn for_variant(variant: ChipVariant) -> Self {
        match variant {
            ChipVariant::Null => Self {
                t0_high: 0,
                t0_low: 0,
                t1_high: 0,
                t1_low: 0,
                reset_gap: 0,
                bytes_per_led: 0,
            },
            ChipVariant::Ws2812 => Self {
                t0_high: 350,
                t0_low: 800,
                t1_high: 700,
                t1_low: 600,
                reset_gap: 50_000,
                bytes_per_led: 3,
            },
            ChipVariant::Ws2812b | ChipVariant::Ws2813 | ChipVariant::Ws2815 => Self {
                t0_high: 300,
                t0_low: 1090,
                t1_high: 1090,
                t1_low: 320,
                reset_gap: 280_000,
                bytes_per_led: 3,
            },
            ChipVariant::Ws2812d => Self {
                t0_high: 400,
                t0_low: 850,
                t1_high: 800,
                t1_low: 450,
                reset_gap: 50_000,
                bytes_per_led: 3,
            },
            ChipVariant::Ws281x => Self {
                t0_high: 400,
                t0_low: 850,
                t1_high: 850,
                t1_low: 400,
                reset_gap: 50_000,
                bytes_per_led: 3,
            },
        }
    }

    /// Number of pulses one frame takes for `led_count` LEDs.
    pub const fn pulses_per_frame(&self, led_count: usize) -> usize {
        led_count * self.bytes_per_led * 8
    }
}
