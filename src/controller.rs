//! Lamp controller
//!
//! Single authority over the lamp state. Every mutator compares the new value
//! with the current one and only an actual change reaches the bus.

use core::marker::PhantomData;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::{SerialBus, clock_divider};
use crate::color::{Rgb, differs};
use crate::config::LampConfig;
use crate::encoder::Encoder;
use crate::error::Fault;
use crate::state::{LampState, Level};

/// Controller that has not configured the bus yet
#[derive(Debug)]
pub struct Uninit;

/// Controller with a configured bus and a powered lamp
#[derive(Debug)]
pub struct Ready;

/// Lamp controller
///
/// Created with [`LampController::new`] and turned into a usable controller
/// with [`LampController::init`]. `init` consumes the uninitialized value, so
/// the bus is configured exactly once per controller.
pub struct LampController<B: SerialBus, E: Encoder, S = Ready> {
    bus: B,
    encoder: E,
    state: LampState,
    spi_clock_hz: u32,
    peripheral_clock_hz: u32,
    fault: Option<Fault>,
    _phase: PhantomData<S>,
}

impl<B: SerialBus, E: Encoder> LampController<B, E, Uninit> {
    /// Create a controller in cold-start state
    ///
    /// Does not touch the bus.
    pub fn new(bus: B, encoder: E, config: &LampConfig) -> Self {
        Self {
            bus,
            encoder,
            state: config.cold_start(),
            spi_clock_hz: config.spi_clock_hz,
            peripheral_clock_hz: config.peripheral_clock_hz,
            fault: None,
            _phase: PhantomData,
        }
    }

    /// Configure the bus, power the lamp on and render the first frame
    pub fn init(self) -> LampController<B, E, Ready> {
        let divider = clock_divider(self.peripheral_clock_hz, self.spi_clock_hz);
        #[cfg(feature = "esp32-log")]
        println!("[LampController.init] setting bus clock divider {}", divider);

        let mut lamp = LampController {
            bus: self.bus,
            encoder: self.encoder,
            state: self.state,
            spi_clock_hz: self.spi_clock_hz,
            peripheral_clock_hz: self.peripheral_clock_hz,
            fault: self.fault,
            _phase: PhantomData,
        };

        let bus_config = lamp.encoder.bus_config(divider);
        lamp.bus.configure(&bus_config);

        lamp.state.power = true;
        lamp.render();
        lamp
    }
}

impl<B: SerialBus, E: Encoder> LampController<B, E, Ready> {
    /// Turn the lamp on or off
    pub fn set_on_off(&mut self, on: bool) {
        if on {
            self.on();
        } else {
            self.off();
        }
    }

    /// Turn the lamp on
    ///
    /// The off to on transition always renders, even with unchanged
    /// level and color, so a strip left deep-dimmed is re-ignited.
    pub fn on(&mut self) {
        if self.state.power {
            return;
        }
        self.state.power = true;
        self.render();
    }

    /// Turn the lamp off, sending the protocol's dark frame
    pub fn off(&mut self) {
        if !self.state.power {
            return;
        }
        self.state.power = false;
        self.render();
    }

    /// Set the brightness level
    ///
    /// A request for 0 is stored as 1. While the lamp is off the level is
    /// only stored and shows up on the next [`on`](Self::on).
    pub fn set_level(&mut self, requested: u8) {
        let level = Level::new(requested);
        if level == self.state.level {
            return;
        }
        self.state.level = level;
        if self.state.power {
            self.render();
        }
    }

    /// Set the color, same policy as [`set_level`](Self::set_level)
    pub fn set_color(&mut self, color: Rgb) {
        if !differs(color, self.state.color) {
            return;
        }
        self.state.color = color;
        if self.state.power {
            self.render();
        }
    }

    /// The lamp has no warm-up phase
    #[allow(clippy::unused_self)]
    pub const fn is_ready(&self) -> bool {
        true
    }

    pub const fn is_on(&self) -> bool {
        self.state.power
    }

    /// Returns `true` once a bus fault has been latched
    pub const fn is_failed(&self) -> bool {
        self.fault.is_some()
    }

    /// Latched fault, if any
    pub const fn fault(&self) -> Option<Fault> {
        self.fault
    }

    /// Periodic hook, expected every 10 ms
    ///
    /// Reserved for restoring very low levels after an ignition sequence.
    /// Nothing needs timing yet.
    #[allow(clippy::unused_self)]
    pub fn tick(&mut self) {}

    /// Analogue measurements are not supported by this driver
    #[allow(clippy::unused_self)]
    pub const fn read_analogue(&self, _channel: u8, _raw: u16) -> i16 {
        0
    }

    /// Current lamp state
    pub const fn state(&self) -> &LampState {
        &self.state
    }

    pub const fn bus(&self) -> &B {
        &self.bus
    }

    pub const fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Give back the bus and the encoder
    pub fn release(self) -> (B, E) {
        (self.bus, self.encoder)
    }

    /// Encode the current state and push it to the bus
    fn render(&mut self) {
        let frame = self.encoder.render(&self.state);
        #[cfg(feature = "esp32-log")]
        println!("[LampController.render] color word 0x{:06x}", frame.data.value);

        if self.encoder.transmit(&frame, &mut self.bus).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[LampController.render] bus transfer failed");
            self.fault = Some(Fault::Transfer);
        }
    }
}
