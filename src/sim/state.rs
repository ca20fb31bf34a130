//! Simulation entities: ball, paddles, score and the arena holding them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::Rect;
use crate::error::PongError;
use crate::settings::Settings;

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Travel direction (not necessarily unit length)
    pub dir: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball resting at `pos`, heading right
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            dir: Vec2::new(1.0, 0.0),
            radius,
        }
    }

    /// Put the ball back at `center` heading towards `side`
    pub fn serve_towards(&mut self, center: Vec2, side: Side) {
        self.pos = center;
        self.dir = match side {
            Side::Left => Vec2::new(-1.0, 0.0),
            Side::Right => Vec2::new(1.0, 0.0),
        };
    }
}

/// A paddle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}", self.left, self.right)
    }
}

/// Complete simulation state for one match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena {
    pub field: Field,
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Score,

    pub paddle_speed: f32,
    pub ball_speed: f32,
    pub max_ball_dir_y: f32,
    pub clamp_paddles: bool,
}

impl Arena {
    /// Fresh arena: ball at the centre heading right, paddles centred just
    /// outside the left and right field edges
    pub fn new(settings: &Settings) -> Result<Self, PongError> {
        settings.validate()?;
        let field = Field::from_screen(settings.screen_size)?;
        let center = field.center();
        let size = settings.paddle_size;
        let paddle_y = center.y - size.y / 2.0;

        Ok(Self {
            field,
            ball: Ball::new(center, settings.ball_radius),
            left: Paddle::new(Vec2::new(field.left - size.x, paddle_y), size),
            right: Paddle::new(Vec2::new(field.right, paddle_y), size),
            score: Score::default(),
            paddle_speed: settings.paddle_speed,
            ball_speed: settings.ball_speed,
            max_ball_dir_y: settings.max_ball_dir_y,
            clamp_paddles: settings.clamp_paddles,
        })
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Current ball velocity (direction scaled to ball speed)
    pub fn ball_velocity(&self) -> Vec2 {
        crate::scale(crate::normalize(self.ball.dir), self.ball_speed)
    }
}
