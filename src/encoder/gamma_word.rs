//! Gamma corrected word encoder
//!
//! Every LED receives the same 24-bit word built from gamma corrected
//! channels. The strip is wired Green-Red-Blue and the bus right-aligns the
//! word, so blue lands in the top byte.

use super::{Encoder, Frame, Word};
use crate::bus::BusConfig;
use crate::gamma::GammaTable;
use crate::math8::{latch_words, scale_by_level};
use crate::state::LampState;

/// Bus clock of the strip
const STRIP_CLOCK_HZ: u32 = 1_000_000;

/// Slave select line the strip is wired to
const STRIP_SLAVE: u8 = 1;

const LATCH_WIDTH: u8 = 7;
const DATA_WIDTH: u8 = 23;

/// Gamma table word encoder for `LEDS` LEDs
#[derive(Debug, Clone)]
pub struct GammaWordEncoder<const LEDS: usize> {
    table: GammaTable,
}

impl<const LEDS: usize> GammaWordEncoder<LEDS> {
    /// Create an encoder using the default strip table
    pub const fn new() -> Self {
        Self {
            table: GammaTable::STRIP,
        }
    }

    /// Replace the gamma table
    #[must_use]
    pub fn with_table(mut self, table: GammaTable) -> Self {
        self.table = table;
        self
    }

    /// Gamma table in use
    pub const fn table(&self) -> &GammaTable {
        &self.table
    }

    /// Corrected output for a single channel at the given level
    pub const fn channel(&self, value: u8, level: u8) -> u8 {
        self.table.get(scale_by_level(value, level))
    }

    /// Pack the data word for the given state
    pub fn pack(&self, state: &LampState) -> u32 {
        if !state.power() {
            return 0;
        }
        let level = state.level().get();
        let color = state.color();
        let red = u32::from(self.channel(color.r, level));
        let green = u32::from(self.channel(color.g, level));
        let blue = u32::from(self.channel(color.b, level));

        (blue << 16) | (red << 8) | green
    }
}

impl<const LEDS: usize> Default for GammaWordEncoder<LEDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEDS: usize> Encoder for GammaWordEncoder<LEDS> {
    const SPI_CLOCK_HZ: u32 = STRIP_CLOCK_HZ;

    fn bus_config(&self, clock_divider: u8) -> BusConfig {
        BusConfig {
            slave_count: 4,
            lsb_first: false,
            inverted_polarity: false,
            trailing_edge_latch: false,
            clock_divider,
            interrupts: false,
            auto_select: false,
        }
    }

    fn render(&self, state: &LampState) -> Frame {
        Frame {
            select: Some(STRIP_SLAVE),
            latch: Word::new(LATCH_WIDTH, 0),
            latch_count: latch_words(LEDS).max(1),
            data: Word::new(DATA_WIDTH, self.pack(state)),
            data_count: LEDS,
        }
    }
}
