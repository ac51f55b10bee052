use crate::color::Rgb;
use crate::encoder::{Encoder, StripEncoder};
use crate::state::{DEFAULT_COLOR, LampState, Level};

/// System clock of the reference microcontroller
pub const DEFAULT_PERIPHERAL_CLOCK_HZ: u32 = 16_000_000;

/// Configuration for the lamp controller
#[derive(Debug, Clone)]
pub struct LampConfig {
    /// System clock feeding the bus peripheral
    pub peripheral_clock_hz: u32,
    /// Target bus clock
    pub spi_clock_hz: u32,
    /// Level at cold start
    pub level: Level,
    /// Color at cold start
    pub color: Rgb,
}

impl LampConfig {
    /// Configuration with the bus clock the encoder's strip expects
    pub fn for_encoder<E: Encoder>() -> Self {
        Self {
            spi_clock_hz: E::SPI_CLOCK_HZ,
            ..Self::default()
        }
    }

    /// Lamp state at cold start, before `init` powers the lamp
    pub(crate) fn cold_start(&self) -> LampState {
        LampState::new(false, self.level, self.color)
    }
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            peripheral_clock_hz: DEFAULT_PERIPHERAL_CLOCK_HZ,
            spi_clock_hz: <StripEncoder<0> as Encoder>::SPI_CLOCK_HZ,
            level: Level::default(),
            color: DEFAULT_COLOR,
        }
    }
}
