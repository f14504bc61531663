//! RGB colour model, hex conversion, interpolation and the precision metric.
//!
//! Channels are integers in [0, 255]. `Rgb` is a `Copy` value type: every
//! edit returns a new colour, so snapshots held elsewhere (level history,
//! targets) never change under the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// One of the three colour channels (one slider each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];
}

/// An 8-bit-per-channel RGB colour.
///
/// Serializes as a `"#rrggbb"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `"#ff00aa"` or `"ff00aa"` (case insensitive).
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        // from_str_radix tolerates a leading '+', so check the digits first
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats as lowercase `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channel(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }

    /// Returns a copy with one channel replaced.
    pub fn with_channel(self, channel: Channel, value: u8) -> Rgb {
        match channel {
            Channel::Red => Rgb { r: value, ..self },
            Channel::Green => Rgb { g: value, ..self },
            Channel::Blue => Rgb { b: value, ..self },
        }
    }

    /// Linear interpolation in RGB space, each channel rounded independently.
    ///
    /// `t` is clamped to [0, 1]; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| {
            let a = f64::from(a);
            (a + (f64::from(b) - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Euclidean distance in RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        euclidean(self.as_f64(), other.as_f64())
    }

    fn as_f64(self) -> [f64; 3] {
        [f64::from(self.r), f64::from(self.g), f64::from(self.b)]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Converts a raw slider value to a channel: rounded, clamped to [0, 255].
///
/// Returns `None` for NaN or infinite input.
pub fn channel_from_f64(value: f64) -> Option<u8> {
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

/// Interpolates two hex colours, returning the result as `"#rrggbb"`.
pub fn lerp_hex(a: &str, b: &str, t: f64) -> Result<String, ColorError> {
    Ok(Rgb::from_hex(a)?.lerp(Rgb::from_hex(b)?, t).to_hex())
}

/// Colour with possibly missing or non-numeric channels, as it may arrive
/// from an external caller or a decoded payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRgb {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
}

impl RawRgb {
    /// All three channels, if each is present and finite.
    pub fn channels(&self) -> Option<[f64; 3]> {
        match (self.r, self.g, self.b) {
            (Some(r), Some(g), Some(b)) if r.is_finite() && g.is_finite() && b.is_finite() => {
                Some([r, g, b])
            }
            _ => None,
        }
    }
}

impl From<Rgb> for RawRgb {
    fn from(c: Rgb) -> Self {
        Self {
            r: Some(f64::from(c.r)),
            g: Some(f64::from(c.g)),
            b: Some(f64::from(c.b)),
        }
    }
}

/// Largest possible distance in the 0-255 cube (black to white).
fn max_distance() -> f64 {
    (3.0 * 255.0_f64 * 255.0).sqrt()
}

fn euclidean(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

fn precision_from_channels(a: [f64; 3], b: [f64; 3]) -> u8 {
    let normalized = (1.0 - euclidean(a, b) / max_distance()).clamp(0.0, 1.0);
    let result = (normalized * 100.0).round();
    if !result.is_finite() {
        log::warn!("non-finite precision for {a:?} vs {b:?}");
        return 0;
    }
    result as u8
}

/// Precision score in [0, 100]: 100 for identical colours, falling with
/// Euclidean RGB distance normalized against the cube diagonal.
pub fn precision(a: Rgb, b: Rgb) -> u8 {
    precision_from_channels(a.as_f64(), b.as_f64())
}

/// Like [`precision`], but scores 0 instead of failing when either colour
/// has a missing or non-finite channel.
pub fn precision_lenient(a: &RawRgb, b: &RawRgb) -> u8 {
    match (a.channels(), b.channels()) {
        (Some(a), Some(b)) => precision_from_channels(a, b),
        _ => {
            log::warn!("invalid RGB values: {a:?} vs {b:?}");
            0
        }
    }
}
