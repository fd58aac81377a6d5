use super::constants::{GLOW_MID_ALPHA_HEX, GLOW_MID_STOP, GLOW_RADIUS};

/// Radial gradient description for one glow mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// (offset, css color) pairs, inner to outer.
    pub stops: [(f32, String); 3],
}

impl Glow {
    /// Solid `color` at the center, translucent at the mid stop, clear at the rim.
    /// `color` is expected in `#rrggbb` form so the alpha suffix yields `#rrggbbaa`.
    pub fn new(x: f64, y: f64, color: &str) -> Self {
        Self {
            x,
            y,
            radius: GLOW_RADIUS,
            stops: [
                (0.0, color.to_string()),
                (GLOW_MID_STOP, format!("{}{}", color, GLOW_MID_ALPHA_HEX)),
                (1.0, "transparent".to_string()),
            ],
        }
    }
}
