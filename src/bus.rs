//! Synchronous serial bus contract
//!
//! The peripheral itself (register programming, pin muxing) belongs to the
//! host. The driver only needs to configure it once and push words through it.

/// Bus peripheral settings applied once at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Number of slave select lines to enable
    pub slave_count: u8,
    /// Shift the least significant bit first
    pub lsb_first: bool,
    /// Idle-high clock
    pub inverted_polarity: bool,
    /// Latch data on the trailing clock edge
    pub trailing_edge_latch: bool,
    /// Divider applied to the halved peripheral clock
    pub clock_divider: u8,
    /// Raise an interrupt on transfer completion
    pub interrupts: bool,
    /// Let the peripheral drive the select line on its own
    pub auto_select: bool,
}

/// Abstract synchronous serial bus
///
/// Implement this trait to support different hardware platforms.
/// Words are fired with [`SerialBus::start_transfer`] and completed with
/// [`SerialBus::wait_busy`]; the driver never has two words in flight.
pub trait SerialBus {
    /// Fault reported while waiting for a transfer
    ///
    /// Use [`core::convert::Infallible`] for a bus that can only spin.
    type Error;

    /// Apply the peripheral configuration
    fn configure(&mut self, config: &BusConfig);

    /// Assert the given slave select line, `0` deasserts all of them
    fn select(&mut self, slave: u8);

    /// Fire a word of `width` bits, right aligned in `value`
    fn start_transfer(&mut self, width: u8, value: u32);

    /// Block until the current transfer is complete
    fn wait_busy(&mut self) -> Result<(), Self::Error>;
}

impl<B: SerialBus> SerialBus for &mut B {
    type Error = B::Error;

    fn configure(&mut self, config: &BusConfig) {
        (**self).configure(config);
    }

    fn select(&mut self, slave: u8) {
        (**self).select(slave);
    }

    fn start_transfer(&mut self, width: u8, value: u32) {
        (**self).start_transfer(width, value);
    }

    fn wait_busy(&mut self) -> Result<(), Self::Error> {
        (**self).wait_busy()
    }
}

/// Compute the clock divider for the requested bus frequency
///
/// The peripheral runs off half the system clock. Results above `u8::MAX`
/// saturate, a zero bus frequency yields the slowest clock.
#[allow(clippy::cast_possible_truncation)]
pub const fn clock_divider(peripheral_clock_hz: u32, spi_clock_hz: u32) -> u8 {
    if spi_clock_hz == 0 {
        return u8::MAX;
    }
    let divider = (peripheral_clock_hz / 2) / spi_clock_hz;
    if divider > u8::MAX as u32 {
        u8::MAX
    } else {
        divider as u8
    }
}
