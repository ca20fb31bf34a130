//! Stack Pong - a two-paddle ball game driven by a stack of UI states
//!
//! Core modules:
//! - `sim`: Ball/paddle physics, controllers and scoring
//! - `ui`: State stack and the game, menu and decorative text states
//! - `renderer`: Canvas abstraction (terminal and recording canvases)
//! - `platform`: Keys, input events, keyboard polling and font metrics
//! - `settings`: Tunable game constants

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::PongError;
pub use settings::Settings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Logical screen size (the playfield is derived from it)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle movement speed (units/s)
    pub const PADDLE_SPEED: f32 = 200.0;
    /// Ball travel speed (units/s)
    pub const BALL_SPEED: f32 = 450.0;

    pub const BALL_RADIUS: f32 = 20.0;
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;

    /// Vertical direction limit, prevents near-vertical bounces
    pub const MAX_BALL_DIR_Y: f32 = 0.7;

    /// Character size used for menu entries and the score label
    pub const CHAR_SIZE: f32 = 40.0;

    /// Period of the highlight triangle wave (alpha ping-pongs 0..512)
    pub const HIGHLIGHT_PERIOD: f32 = 512.0;

    /// Frame delta cap to avoid huge jumps after a stall
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Font asset, relative to the working directory
    pub const FONT_PATH: &str = "assets/DejaVuSansMono.ttf";
}

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}

/// Normalize a vector. A zero-length vector is returned unchanged.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len_sq = v.length_squared();
    if len_sq > 0.0 {
        v / len_sq.sqrt()
    } else {
        v
    }
}

/// Multiply a vector by a scalar
#[inline]
pub fn scale(v: Vec2, s: f32) -> Vec2 {
    Vec2::new(v.x * s, v.y * s)
}

/// Keep `min <= value <= max`. If `min > max` the result is `max`.
#[inline]
pub fn keep_in_bounds(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Keep a point inside a rectangle (same `(min, max)` order as [`keep_in_bounds`])
#[inline]
pub fn keep_point_in_bounds(point: Vec2, bounds: Rect) -> Vec2 {
    Vec2::new(
        keep_in_bounds(point.x, bounds.left(), bounds.right()),
        keep_in_bounds(point.y, bounds.top(), bounds.bottom()),
    )
}

/// Triangle wave used for pulsing highlights: `|256 - alpha|`, saturated to a byte
#[inline]
pub fn pulse_opacity(alpha: f32) -> u8 {
    let half = consts::HIGHLIGHT_PERIOD / 2.0;
    (half - alpha).abs().min(255.0) as u8
}

/// Advance a highlight phase by `dt`, wrapping at [`consts::HIGHLIGHT_PERIOD`]
#[inline]
pub fn advance_pulse(alpha: f32, dt: f32) -> f32 {
    (alpha + dt * consts::HIGHLIGHT_PERIOD).rem_euclid(consts::HIGHLIGHT_PERIOD)
}
