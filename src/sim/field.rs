//! Playing field geometry

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::error::PongError;

/// Axis-aligned play area. Invariant: `left < right`, `top < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Field {
    /// Field inset from the screen edges by 1/16 of the width and 1/12 of the height
    pub fn from_screen(screen_size: Vec2) -> Result<Self, PongError> {
        let left = screen_size.x / 16.0;
        let top = screen_size.y / 12.0;
        Self::new(left, screen_size.x - left, top, screen_size.y - top)
    }

    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Result<Self, PongError> {
        // Negated comparisons also reject NaN
        if !(left < right && top < bottom) {
            return Err(PongError::DegenerateRect {
                what: "field",
                width: right - left,
                height: bottom - top,
            });
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.right - self.left, self.bottom - self.top)
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(Vec2::new(self.left, self.top), self.size())
    }
}
