//! Simulation module
//!
//! All gameplay logic lives here. No rendering, no logging policy:
//! - Field geometry and entities (`field`, `state`)
//! - Paddle controllers (`controller`)
//! - Collision rules and the cubic paddle reflection (`collision`)
//! - The per-frame physics step (`tick`)

pub mod collision;
pub mod controller;
pub mod field;
pub mod state;
pub mod tick;

pub use collision::{reflect_ball_from_paddle, vertical_overlap, wall_bounce};
pub use controller::{Action, PaddleController, PaddleMode};
pub use field::Field;
pub use state::{Arena, Ball, Paddle, Score, Side};
pub use tick::{GameEvent, TickInput, move_paddle, tick};
