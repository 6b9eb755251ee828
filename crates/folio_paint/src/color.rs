//! Color types and utilities

use serde::{Deserialize, Serialize};

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from u8 channels and a 0.0-1.0 alpha, like CSS `rgba()`
    pub fn rgba8(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::from_rgba8(r, g, b, 255).with_alpha(alpha)
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            // 0xRRGGBBAA format
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            // 0xRRGGBB format
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set alpha from a byte (the `#RRGGBBAA` suffix)
    pub fn with_alpha_byte(self, alpha: u8) -> Self {
        Self {
            a: alpha as f32 / 255.0,
            ..self
        }
    }

    /// Convert to u8 array [r, g, b, a]
    ///
    /// Channels are rounded to the nearest byte, so an alpha of 0.25 becomes 64 (`40`).
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b),
            channel_byte(self.a),
        ]
    }

    /// Format as CSS hex: `#rrggbb` when opaque, `#rrggbbaa` otherwise
    pub fn to_css_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn channel_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
        assert_eq!(Color::from_hex(0x31A8FF40).to_rgba8(), [0x31, 0xa8, 0xff, 0x40]);
        assert_eq!(Color::from_hex(0x31A8FF).to_rgba8()[3], 0xff);
    }

    #[test]
    fn test_css_hex_pads_alpha() {
        // 0.02 * 255 = 5.1 -> 0x05, always two digits
        let c = Color::from_hex(0xF9A8D4).with_alpha(0.02);
        assert_eq!(c.to_css_hex(), "#f9a8d405");
        assert_eq!(Color::from_hex(0xF9A8D4).to_css_hex(), "#f9a8d4");
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(1.7).a, 1.0);
        assert_eq!(Color::WHITE.with_alpha(-0.2).a, 0.0);
        assert_eq!(Color::BLACK.with_alpha_byte(0x60).to_rgba8()[3], 0x60);
    }

    #[test]
    fn test_rgba8_css_style() {
        let c = Color::rgba8(100, 149, 237, 0.5);
        let [r, g, b, _] = c.to_rgba8();
        assert_eq!((r, g, b), (100, 149, 237));
        assert_eq!(c.a, 0.5);
    }
}
