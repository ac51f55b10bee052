/// Scale a channel by a brightness level (0-255 = 0.0-1.0)
///
/// Exact integer form `value * level / 255`, so `255 * 255` stays 255.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn scale_by_level(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

/// Number of latch words the strip needs before a frame
///
/// One latch word resets 32 LEDs worth of shift register.
pub const fn latch_words(leds: usize) -> usize {
    leds.div_ceil(32)
}
