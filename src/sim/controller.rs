//! Paddle controllers
//!
//! A controller turns the current ball state into a move intent for its
//! paddle once per frame. Neither variant keeps state between frames.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::platform::KeyboardState;
use crate::settings::KeyBindings;

/// Requested paddle movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    Up,
    Down,
}

/// Who plays a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleMode {
    Keyboard,
    Ai,
}

/// Decision function for one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleController {
    /// Tracks the ball while it is heading towards this paddle
    Ai,
    /// Follows two polled keys; Down wins if both are held
    Keyboard(KeyBindings),
}

impl PaddleController {
    pub fn from_mode(mode: PaddleMode, keys: KeyBindings) -> Self {
        match mode {
            PaddleMode::Keyboard => PaddleController::Keyboard(keys),
            PaddleMode::Ai => PaddleController::Ai,
        }
    }

    /// Decide how the paddle bounded by `own` should move this frame
    pub fn act(
        &self,
        ball: Vec2,
        ball_velocity: Vec2,
        own: Rect,
        _enemy: Rect,
        keyboard: &dyn KeyboardState,
    ) -> Action {
        match self {
            PaddleController::Ai => ai_act(ball, ball_velocity, own),
            PaddleController::Keyboard(keys) => {
                if keyboard.is_key_pressed(keys.down) {
                    Action::Down
                } else if keyboard.is_key_pressed(keys.up) {
                    Action::Up
                } else {
                    Action::None
                }
            }
        }
    }
}

fn ai_act(ball: Vec2, ball_velocity: Vec2, own: Rect) -> Action {
    // Idle while the ball is moving away
    let ball_is_right = own.left() < ball.x;
    if (ball_is_right && ball_velocity.x > 0.0) || (!ball_is_right && ball_velocity.x < 0.0) {
        return Action::None;
    }

    let center_y = own.center().y;
    if ball.y > center_y {
        Action::Down
    } else if ball.y < center_y {
        Action::Up
    } else {
        Action::None
    }
}
