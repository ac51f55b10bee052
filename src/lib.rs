#![no_std]

pub mod bus;
pub mod color;
pub mod config;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod gamma;
pub mod math8;
pub mod scheduler;
pub mod shared;
pub mod state;

pub use bus::{BusConfig, SerialBus, clock_divider};
pub use config::{DEFAULT_PERIPHERAL_CLOCK_HZ, LampConfig};
pub use controller::{LampController, Ready, Uninit};
pub use encoder::{ChannelOffsetEncoder, Encoder, Frame, GammaWordEncoder, StripEncoder, Word};
pub use error::Fault;
pub use gamma::GammaTable;
pub use scheduler::{TICK_INTERVAL, TickResult, TickScheduler};
pub use shared::SharedLamp;
pub use state::{LampState, Level};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};
