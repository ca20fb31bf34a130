//! Game settings
//!
//! Every tunable constant in one serializable struct. Defaults come from
//! [`crate::consts`]; nothing is read from disk or the environment.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::PongError;
use crate::platform::Key;

/// Keys bound to one keyboard-controlled paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Logical screen size; the field is derived from it
    pub screen_size: Vec2,
    /// Font used for text layout
    pub font_path: String,

    // === Physics ===
    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub paddle_size: Vec2,
    /// Limit on the ball's vertical direction component
    pub max_ball_dir_y: f32,
    /// Keep paddles inside the field's vertical extent (off by default)
    pub clamp_paddles: bool,

    // === Controls ===
    pub left_keys: KeyBindings,
    pub right_keys: KeyBindings,

    /// Seed for decorative randomness
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            font_path: FONT_PATH.to_string(),

            paddle_speed: PADDLE_SPEED,
            ball_speed: BALL_SPEED,
            ball_radius: BALL_RADIUS,
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            max_ball_dir_y: MAX_BALL_DIR_Y,
            clamp_paddles: false,

            left_keys: KeyBindings {
                up: Key::W,
                down: Key::S,
            },
            right_keys: KeyBindings {
                up: Key::Up,
                down: Key::Down,
            },

            seed: 0x5eed,
        }
    }
}

impl Settings {
    /// Reject geometry that would make the field or paddle math divide by zero
    pub fn validate(&self) -> Result<(), PongError> {
        if self.screen_size.x <= 0.0 || self.screen_size.y <= 0.0 {
            return Err(PongError::DegenerateRect {
                what: "screen",
                width: self.screen_size.x,
                height: self.screen_size.y,
            });
        }
        if self.paddle_size.x <= 0.0 || self.paddle_size.y <= 0.0 {
            return Err(PongError::DegenerateRect {
                what: "paddle",
                width: self.paddle_size.x,
                height: self.paddle_size.y,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.paddle_speed, 200.0);
        assert_eq!(settings.ball_speed, 450.0);
        assert_eq!(settings.right_keys.down, Key::Down);
        assert!(!settings.clamp_paddles);
    }

    #[test]
    fn test_zero_height_paddle_rejected() {
        let settings = Settings {
            paddle_size: Vec2::new(20.0, 0.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(PongError::DegenerateRect { what: "paddle", .. })
        ));
    }

    #[test]
    fn test_settings_json_round_trip() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.left_keys, Settings::default().left_keys);
        assert_eq!(back.screen_size, Vec2::new(800.0, 600.0));
    }
}
