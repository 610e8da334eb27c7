use lava_core::{EffectConfig, Rgb};
use winit::keyboard::{Key, NamedKey};

pub const PALETTE: [Rgb; 4] = [
    Rgb([1.0, 1.0, 1.0]),
    Rgb([1.0, 0.42, 0.21]),
    Rgb([0.36, 0.62, 1.0]),
    Rgb([0.55, 0.95, 0.45]),
];

const SPEED_STEP: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    CycleColor,
    ToggleMouse,
    Faster,
    Slower,
    MoreBalls,
    FewerBalls,
    Quit,
}

pub fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Shortcut::Quit),
        Key::Character(s) => match s.as_str() {
            "c" | "C" => Some(Shortcut::CycleColor),
            "m" | "M" => Some(Shortcut::ToggleMouse),
            "+" | "=" => Some(Shortcut::Faster),
            "-" | "_" => Some(Shortcut::Slower),
            "]" => Some(Shortcut::MoreBalls),
            "[" => Some(Shortcut::FewerBalls),
            _ => None,
        },
        _ => None,
    }
}

/// Apply a config-editing shortcut. `palette_index` tracks the color cycle.
pub fn apply(shortcut: Shortcut, config: &mut EffectConfig, palette_index: &mut usize) {
    match shortcut {
        Shortcut::CycleColor => {
            *palette_index = (*palette_index + 1) % PALETTE.len();
            config.color = PALETTE[*palette_index];
        }
        Shortcut::ToggleMouse => {
            config.mouse_interaction_enabled = !config.mouse_interaction_enabled
        }
        Shortcut::Faster => config.speed += SPEED_STEP,
        Shortcut::Slower => config.speed = (config.speed - SPEED_STEP).max(0.0),
        Shortcut::MoreBalls => config.ball_count = (config.ball_count + 1).min(lava_core::MAX_BLOBS),
        Shortcut::FewerBalls => config.ball_count = config.ball_count.saturating_sub(1),
        Shortcut::Quit => {}
    }
}
