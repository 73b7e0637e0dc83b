//! Linear RGB color helpers.

use crate::{DVec3, Interval};

/// Color type alias (linear RGB, displayable range 0-1).
///
/// Channels are accumulated unclamped while tracing; clamping only happens
/// in [`color_to_rgb8`].
pub type Color = DVec3;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Quantize a color to 8-bit RGB, clamping each channel to [0, 1] first.
pub fn color_to_rgb8(color: Color, gamma_correct: bool) -> [u8; 3] {
    let encode = |channel: f64| {
        let channel = if gamma_correct {
            linear_to_gamma(channel)
        } else {
            channel
        };
        (255.0 * Interval::UNIT.clamp(channel)).round() as u8
    };
    [encode(color.x), encode(color.y), encode(color.z)]
}
