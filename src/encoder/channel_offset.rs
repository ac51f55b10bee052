//! LPD8806-style channel offset encoder
//!
//! The driver chip takes color data in `[128, 255]`; the low half of the byte
//! range is reserved for latching. 128 itself reads as "channel off", so a
//! lit channel never transmits it.

use super::{Encoder, Frame, Word};
use crate::bus::BusConfig;
use crate::math8::{latch_words, scale_by_level};
use crate::state::LampState;

/// Bus clock of the strip
const STRIP_CLOCK_HZ: u32 = 2_000_000;

/// Channel value that latches the strip and keeps the LED dark
pub const CHANNEL_OFF: u8 = 128;

const LATCH_WIDTH: u8 = 8;
const DATA_WIDTH: u8 = 24;

/// Channel offset encoder for `LEDS` LEDs
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelOffsetEncoder<const LEDS: usize>;

impl<const LEDS: usize> ChannelOffsetEncoder<LEDS> {
    pub const fn new() -> Self {
        Self
    }

    /// Wire value for a lit channel at the given level
    pub const fn channel(value: u8, level: u8) -> u8 {
        let offset = CHANNEL_OFF.saturating_add(scale_by_level(value, level));
        if offset == CHANNEL_OFF {
            CHANNEL_OFF + 1
        } else {
            offset
        }
    }

    /// Pack the data word for the given state
    pub fn pack(state: &LampState) -> u32 {
        let (red, green, blue) = if state.power() {
            let level = state.level().get();
            let color = state.color();
            (
                Self::channel(color.r, level),
                Self::channel(color.g, level),
                Self::channel(color.b, level),
            )
        } else {
            (CHANNEL_OFF, CHANNEL_OFF, CHANNEL_OFF)
        };

        (u32::from(green) << 16) | (u32::from(red) << 8) | u32::from(blue)
    }
}

impl<const LEDS: usize> Encoder for ChannelOffsetEncoder<LEDS> {
    const SPI_CLOCK_HZ: u32 = STRIP_CLOCK_HZ;

    fn bus_config(&self, clock_divider: u8) -> BusConfig {
        BusConfig {
            slave_count: 1,
            lsb_first: false,
            inverted_polarity: false,
            trailing_edge_latch: false,
            clock_divider,
            interrupts: true,
            auto_select: false,
        }
    }

    fn render(&self, state: &LampState) -> Frame {
        Frame {
            select: None,
            latch: Word::new(LATCH_WIDTH, 0),
            latch_count: latch_words(LEDS),
            data: Word::new(DATA_WIDTH, Self::pack(state)),
            data_count: LEDS,
        }
    }
}
