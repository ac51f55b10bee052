//! Output encoders for the supported strip protocols
//!
//! Every encoder is a pure function of the lamp state and the LED count.
//! The resulting [`Frame`] is pushed to the bus word by word, blocking on
//! completion of each word before firing the next one.

mod channel_offset;
mod gamma_word;

pub use channel_offset::{CHANNEL_OFF, ChannelOffsetEncoder};
pub use gamma_word::GammaWordEncoder;

use crate::bus::{BusConfig, SerialBus};
use crate::state::LampState;

/// Encoder selected for this build
#[cfg(not(feature = "lpd8806"))]
pub type StripEncoder<const LEDS: usize> = GammaWordEncoder<LEDS>;

/// Encoder selected for this build
#[cfg(feature = "lpd8806")]
pub type StripEncoder<const LEDS: usize> = ChannelOffsetEncoder<LEDS>;

/// Single serial word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    /// Width passed verbatim to the bus
    pub width: u8,
    /// Right-aligned payload
    pub value: u32,
}

impl Word {
    pub const fn new(width: u8, value: u32) -> Self {
        Self { width, value }
    }
}

/// Fully framed output for one render
///
/// Strips on these protocols show one repeated color, so the frame stores
/// the data word once together with its repeat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Slave to assert for the duration of the frame
    pub select: Option<u8>,
    /// Word that resets the strip's shift register
    pub latch: Word,
    pub latch_count: usize,
    /// Color word sent once per LED
    pub data: Word,
    pub data_count: usize,
}

impl Frame {
    /// Total number of words the frame puts on the bus
    pub const fn word_count(&self) -> usize {
        self.latch_count + self.data_count
    }
}

/// Strip protocol strategy
pub trait Encoder {
    /// Bus clock the strip protocol runs at
    const SPI_CLOCK_HZ: u32;

    /// Bus settings for this protocol
    fn bus_config(&self, clock_divider: u8) -> BusConfig;

    /// Encode the lamp state into a frame
    fn render(&self, state: &LampState) -> Frame;

    /// Push a frame to the bus
    ///
    /// Stops at the first failed transfer. The slave select, if the frame
    /// asserted one, is released on every path.
    fn transmit<B: SerialBus>(&self, frame: &Frame, bus: &mut B) -> Result<(), B::Error> {
        let Some(slave) = frame.select else {
            return send_words(frame, bus);
        };

        bus.select(slave);
        let result = bus.wait_busy().and_then(|()| send_words(frame, bus));
        bus.select(0);
        result
    }
}

fn send_words<B: SerialBus>(frame: &Frame, bus: &mut B) -> Result<(), B::Error> {
    for _ in 0..frame.latch_count {
        bus.start_transfer(frame.latch.width, frame.latch.value);
        bus.wait_busy()?;
    }
    for _ in 0..frame.data_count {
        bus.start_transfer(frame.data.width, frame.data.value);
        bus.wait_busy()?;
    }
    Ok(())
}
