use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Returns `true` if any channel of `a` differs from `b`
#[inline]
pub const fn differs(a: Rgb, b: Rgb) -> bool {
    a.r != b.r || a.g != b.g || a.b != b.b
}
