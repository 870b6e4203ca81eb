//! Host demonstration of the strip API: an alternating startup pattern
//! followed by a blue dot with brightness falloff sweeping along the strip.
//!
//! No hardware is involved; a stand-in transmitter reports what each frame
//! would put on the wire.
//!
//! Run with: `cargo run --example moving_dot --features std`

use pulse_strip::{
    ChipVariant, LedStrip, OutputLine, Pulse, PulseTransmitter, StripError, TransmitError,
    pulse_capacity,
};

const NUM_LEDS: usize = 30;
const BRIGHTNESS: i32 = 128;

/// Stand-in transmitter: sums up what would go out on the wire.
struct ConsoleTransmitter;

impl PulseTransmitter for ConsoleTransmitter {
    fn transmit(
        &mut self,
        line: OutputLine,
        pulses: &[Pulse],
        _wait_until_complete: bool,
    ) -> Result<(), TransmitError> {
        let wire_ns: u64 = pulses
            .iter()
            .map(|pulse| u64::from(pulse.high_ns) + u64::from(pulse.low_ns))
            .sum();
        println!(
            "line {:>2}: {} pulses, {} us on the wire",
            u8::from(line),
            pulses.len(),
            wire_ns / 1000
        );
        Ok(())
    }
}

fn main() -> Result<(), StripError> {
    let mut strip = LedStrip::<_, NUM_LEDS, { pulse_capacity(NUM_LEDS) }>::new(
        ChipVariant::Ws281x,
        NUM_LEDS,
        OutputLine(32),
        ConsoleTransmitter,
    )?;

    // Alternating red/blue startup pattern
    for offset in 0..8 {
        for i in 0..NUM_LEDS {
            let red = (i + offset) % 2 == 0;
            strip.set_pixel(i, if red { 64 } else { 0 }, 0, if red { 0 } else { 64 })?;
        }
        strip.update()?;
    }

    strip.clear();
    strip.update()?;

    // Blue dot sweeping right, then back left
    let sweep = (0..NUM_LEDS as i32).chain((0..NUM_LEDS as i32).rev());
    for position in sweep {
        for i in 0..NUM_LEDS {
            let falloff = (position - i as i32).abs() * (BRIGHTNESS / 16);
            let level = BRIGHTNESS - falloff.min(BRIGHTNESS);
            strip.set_pixel(i, 0, 0, level as u8)?;
        }
        strip.update()?;
    }

    strip.clear();
    strip.update()?;
    Ok(())
}
