//! Logical lamp state
//!
//! Darkness is expressed through `power`, never through the level, so the
//! level is kept in `[1, 255]` by construction.

use crate::color::Rgb;

/// Default brightness level at cold start
pub const DEFAULT_LEVEL: u8 = 127;

/// Default color at cold start
pub const DEFAULT_COLOR: Rgb = Rgb {
    r: 64,
    g: 64,
    b: 64,
};

/// Brightness level in `[1, 255]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(u8);

impl Level {
    /// Lowest storable level
    pub const MIN: Self = Self(1);
    /// Full brightness
    pub const MAX: Self = Self(255);

    /// Create a level, clamping 0 to 1
    pub const fn new(requested: u8) -> Self {
        if requested == 0 { Self::MIN } else { Self(requested) }
    }

    /// Raw level value
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self(DEFAULT_LEVEL)
    }
}

impl From<u8> for Level {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

/// Snapshot of everything the encoder needs to render a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LampState {
    pub(crate) power: bool,
    pub(crate) level: Level,
    pub(crate) color: Rgb,
}

impl LampState {
    pub const fn new(power: bool, level: Level, color: Rgb) -> Self {
        Self {
            power,
            level,
            color,
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Default for LampState {
    fn default() -> Self {
        Self::new(false, Level::default(), DEFAULT_COLOR)
    }
}
