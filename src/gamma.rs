//! Gamma correction for strip drivers with a `[128, 255]` data range
//!
//! The fixed [`GammaTable::STRIP`] table compensates for the non-linear
//! response of the strip driver. Custom curves can be built at runtime with
//! [`GammaTable::from_exponent`].

/// 256-entry lookup from linear `[0, 255]` to the strip's output range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GammaTable([u8; 256]);

impl GammaTable {
    /// Default table for the 7-bit strip drivers
    #[rustfmt::skip]
    pub const STRIP: Self = Self([
        128, 128, 128, 128, 128, 128, 128, 128,
        128, 128, 128, 128, 128, 128, 128, 128,
        128, 128, 128, 128, 128, 128, 128, 128,
        128, 128, 128, 128, 129, 129, 129, 129,
        129, 129, 129, 129, 129, 129, 129, 129,
        129, 129, 129, 129, 130, 130, 130, 130,
        130, 130, 130, 130, 130, 131, 131, 131,
        131, 131, 131, 131, 131, 132, 132, 132,
        132, 132, 132, 132, 133, 133, 133, 133,
        133, 134, 134, 134, 134, 134, 135, 135,
        135, 135, 135, 136, 136, 136, 136, 137,
        137, 137, 137, 138, 138, 138, 138, 139,
        139, 139, 140, 140, 140, 141, 141, 141,
        141, 142, 142, 142, 143, 143, 144, 144,
        144, 145, 145, 145, 146, 146, 146, 147,
        147, 148, 148, 149, 149, 149, 150, 150,
        151, 151, 152, 152, 152, 153, 153, 154,
        154, 155, 155, 156, 156, 157, 157, 158,
        158, 159, 160, 160, 161, 161, 162, 162,
        163, 163, 164, 165, 165, 166, 166, 167,
        168, 168, 169, 169, 170, 171, 171, 172,
        173, 173, 174, 175, 175, 176, 177, 178,
        178, 179, 180, 180, 181, 182, 183, 183,
        184, 185, 186, 186, 187, 188, 189, 190,
        190, 191, 192, 193, 194, 195, 195, 196,
        197, 198, 199, 200, 201, 202, 202, 203,
        204, 205, 206, 207, 208, 209, 210, 211,
        212, 213, 214, 215, 216, 217, 218, 219,
        220, 221, 222, 223, 224, 225, 226, 227,
        228, 229, 230, 232, 233, 234, 235, 236,
        237, 238, 239, 241, 242, 243, 244, 245,
        246, 248, 249, 250, 251, 253, 254, 255,
    ]);

    /// Build a table from a power curve
    ///
    /// Entry `i` is `floor + (255 - floor) * (i / 255) ^ exponent`, rounded.
    /// Non-positive exponents fall back to a linear ramp.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn from_exponent(exponent: f32, floor: u8) -> Self {
        let exponent = if exponent > 0.0 { exponent } else { 1.0 };
        let span = f32::from(255 - floor);
        let mut table = [0u8; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let linear = i as f32 / 255.0;
            let scaled = libm::roundf(span * libm::powf(linear, exponent));
            *entry = floor.saturating_add(scaled as u8);
        }
        Self(table)
    }

    /// Look up the corrected value
    #[inline]
    pub const fn get(&self, value: u8) -> u8 {
        self.0[value as usize]
    }

    /// Raw table entries
    pub const fn as_slice(&self) -> &[u8; 256] {
        &self.0
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::STRIP
    }
}
