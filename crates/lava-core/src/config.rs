//! Effect configuration: the settable surface of the lava lamp.

use crate::constants::*;
use crate::error::LavaError;
use serde::Deserialize;
use std::str::FromStr;

/// Linear RGB triple with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([1.0, 1.0, 1.0]);

    /// Parse `#rrggbb` (the `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, LavaError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(LavaError::InvalidColor(hex.to_string()));
        }
        let mut out = [0.0_f32; 3];
        for (i, c) in out.iter_mut().enumerate() {
            let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
                .map_err(|_| LavaError::InvalidColor(hex.to_string()))?;
            *c = byte as f32 / 255.0;
        }
        Ok(Rgb(out))
    }

    #[inline]
    pub fn to_vec4(self) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], 1.0]
    }
}

impl FromStr for Rgb {
    type Err = LavaError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = LavaError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&s)
    }
}

/// Snapshot of every user-facing knob.
///
/// A running session never observes edits: any change goes through the
/// driver's reset transition, which rebuilds the session from a new snapshot.
/// Out-of-range values (for example `hover_smoothness` above 1) are not
/// rejected; they only produce odd visuals.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub color: Rgb,
    pub cursor_color: Rgb,
    pub speed: f32,
    pub ball_count: usize,
    pub clump_factor: f32,
    pub hover_smoothness: f32,
    pub animation_size: f32,
    pub cursor_ball_size: f32,
    pub mouse_interaction_enabled: bool,
    pub transparent: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            color: Rgb(DEFAULT_COLOR),
            cursor_color: Rgb(DEFAULT_CURSOR_COLOR),
            speed: DEFAULT_SPEED,
            ball_count: DEFAULT_BALL_COUNT,
            clump_factor: DEFAULT_CLUMP_FACTOR,
            hover_smoothness: DEFAULT_HOVER_SMOOTHNESS,
            animation_size: DEFAULT_ANIMATION_SIZE,
            cursor_ball_size: DEFAULT_CURSOR_BALL_SIZE,
            mouse_interaction_enabled: false,
            transparent: true,
        }
    }
}

impl EffectConfig {
    /// Number of blobs actually simulated and rendered.
    #[inline]
    pub fn effective_ball_count(&self) -> usize {
        self.ball_count.min(MAX_BLOBS)
    }
}
