//! Decorative animated text
//!
//! A root text drifts around the screen and every [`ECHO_INTERVAL`] seconds
//! spawns an echo of itself at a random spot, until its echo budget is spent.
//! Echoes drift and pulse like the root but fade out after [`ECHO_LIFETIME`].
//!
//! Any key press closes the whole group: echoes sit above the root, dispose
//! themselves and let the key bubble down; the root disposes itself and stops
//! it there, so the state beneath never sees it.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Context, Lifecycle, Propagation, State};
use crate::consts::CHAR_SIZE;
use crate::platform::InputEvent;
use crate::renderer::{Canvas, Color, Label};
use crate::{advance_pulse, pulse_opacity};

/// Seconds between echoes spawned by the root
pub const ECHO_INTERVAL: f32 = 0.6;
/// Seconds an echo lives
pub const ECHO_LIFETIME: f32 = 2.0;
/// Echoes a root spawns before it stops replicating
pub const ROOT_ECHOES: u32 = 8;
/// Drift speed (units/s)
const DRIFT_SPEED: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Role {
    Root { echoes_left: u32, spawn_timer: f32 },
    Echo { ttl: f32 },
}

pub struct TextState {
    life: Lifecycle,
    label: Label,
    /// Text extent, for bouncing off the screen edges
    size: Vec2,
    vel: Vec2,
    screen: Vec2,
    alpha: f32,
    role: Role,
}

impl TextState {
    /// Root text centred on the screen, drifting in a random direction
    pub fn title(text: &str, ctx: &mut Context<'_>) -> Self {
        let screen = ctx.settings.screen_size;
        let size = Vec2::new(ctx.font.text_width(text, CHAR_SIZE), CHAR_SIZE);
        let pos = (screen - size) / 2.0;
        let vel = random_drift(ctx);
        Self::new(
            text,
            pos,
            size,
            vel,
            screen,
            Role::Root {
                echoes_left: ROOT_ECHOES,
                spawn_timer: ECHO_INTERVAL,
            },
        )
    }

    fn echo(&self, ctx: &mut Context<'_>) -> Self {
        let room = (self.screen - self.size).max(Vec2::ONE);
        let pos = Vec2::new(
            ctx.rng.random_range(0.0..room.x),
            ctx.rng.random_range(0.0..room.y),
        );
        let vel = random_drift(ctx);
        Self::new(
            &self.label.text,
            pos,
            self.size,
            vel,
            self.screen,
            Role::Echo { ttl: ECHO_LIFETIME },
        )
    }

    fn new(text: &str, pos: Vec2, size: Vec2, vel: Vec2, screen: Vec2, role: Role) -> Self {
        Self {
            life: Lifecycle::new("TextState"),
            label: Label::new(text, pos, CHAR_SIZE),
            size,
            vel,
            screen,
            alpha: 0.0,
            role,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.role, Role::Root { .. })
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Move and bounce off the screen edges
    fn drift(&mut self, dt: f32) {
        let max = (self.screen - self.size).max(Vec2::ZERO);
        let pos = &mut self.label.pos;
        *pos += self.vel * dt;
        if pos.x < 0.0 || pos.x > max.x {
            self.vel.x = -self.vel.x;
            pos.x = pos.x.clamp(0.0, max.x);
        }
        if pos.y < 0.0 || pos.y > max.y {
            self.vel.y = -self.vel.y;
            pos.y = pos.y.clamp(0.0, max.y);
        }
    }
}

fn random_drift(ctx: &mut Context<'_>) -> Vec2 {
    Vec2::from_angle(ctx.rng.random_range(0.0..TAU)) * DRIFT_SPEED
}

impl State for TextState {
    fn lifecycle(&self) -> &Lifecycle {
        &self.life
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.life
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut Context<'_>) -> Propagation {
        if matches!(event, InputEvent::KeyPressed(_)) {
            self.dispose();
        }
        if self.is_root() {
            Propagation::Stop
        } else {
            Propagation::Bubble
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Propagation {
        self.drift(dt);
        self.alpha = advance_pulse(self.alpha, dt);
        let mut opacity = pulse_opacity(self.alpha) as f32;

        match self.role {
            Role::Root {
                echoes_left,
                spawn_timer,
            } => {
                let mut echoes_left = echoes_left;
                let mut spawn_timer = spawn_timer - dt;
                if echoes_left > 0 && spawn_timer <= 0.0 {
                    let echo = self.echo(ctx);
                    ctx.push(Box::new(echo));
                    echoes_left -= 1;
                    spawn_timer += ECHO_INTERVAL;
                }
                self.role = Role::Root {
                    echoes_left,
                    spawn_timer,
                };
            }
            Role::Echo { ttl } => {
                let ttl = ttl - dt;
                if ttl <= 0.0 {
                    self.dispose();
                }
                opacity *= (ttl / ECHO_LIFETIME).clamp(0.0, 1.0);
                self.role = Role::Echo { ttl };
            }
        }

        self.label.style.fill = Color::ORANGE.with_alpha(opacity as u8);
        Propagation::Bubble
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.draw_label(&self.label);
    }

    /// The root hides whatever it was opened over; echoes are transparent
    fn draws_state_below(&self) -> bool {
        !self.is_root()
    }
}
