//! A running match
//!
//! Two paddles and a ball inside the field. The ball is reflected within the
//! field and must not pass the left or right border; the paddles, steered by a
//! player or the AI, return it before it does. A ball that gets past a paddle
//! scores for the other side.

use glam::Vec2;

use super::state::{Context, Lifecycle, Propagation, State};
use crate::consts::CHAR_SIZE;
use crate::error::PongError;
use crate::platform::{Font, InputEvent, Key};
use crate::renderer::{Canvas, Color, Label, Style};
use crate::settings::Settings;
use crate::sim::{Arena, GameEvent, PaddleController, PaddleMode, TickInput, tick};

const FIELD_STYLE: Style = Style::outlined(Color::BLACK, Color::ORANGE.with_alpha(0xa0), 1.0);
const BALL_STYLE: Style = Style::filled(Color::GREEN);
const PADDLE_STYLE: Style = Style::filled(Color::BLUE);

pub struct GameState {
    life: Lifecycle,
    arena: Arena,
    left: PaddleController,
    right: PaddleController,
    score_label: Label,
}

impl GameState {
    pub fn new(
        settings: &Settings,
        font: &Font,
        left: PaddleMode,
        right: PaddleMode,
    ) -> Result<Self, PongError> {
        let arena = Arena::new(settings)?;
        log::info!("Starting game: {:?} vs {:?}", left, right);
        let mut game = Self {
            life: Lifecycle::new("GameState"),
            arena,
            left: PaddleController::from_mode(left, settings.left_keys),
            right: PaddleController::from_mode(right, settings.right_keys),
            score_label: Label::new(String::new(), Vec2::ZERO, CHAR_SIZE),
        };
        game.layout_score(font);
        Ok(game)
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Centre the score text just above the field
    fn layout_score(&mut self, font: &Font) {
        let text = self.arena.score.to_string();
        let width = font.text_width(&text, CHAR_SIZE);
        let field = &self.arena.field;
        self.score_label.pos = Vec2::new(field.center().x - width / 2.0, field.top - CHAR_SIZE);
        self.score_label.text = text;
    }
}

impl State for GameState {
    fn lifecycle(&self) -> &Lifecycle {
        &self.life
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.life
    }

    // TODO: push a pause menu instead of leaving the match outright
    fn handle_input(&mut self, event: &InputEvent, _ctx: &mut Context<'_>) -> Propagation {
        if event.is_released(Key::Escape) {
            log::info!("Leaving game at {}", self.arena.score);
            self.dispose();
        }
        Propagation::Stop
    }

    fn update(&mut self, dt: f32, ctx: &mut Context<'_>) -> Propagation {
        let ball = self.arena.ball.pos;
        let velocity = self.arena.ball_velocity();
        let left = self.arena.left.bounds();
        let right = self.arena.right.bounds();
        let input = TickInput {
            left: self.left.act(ball, velocity, left, right, ctx.keyboard),
            right: self.right.act(ball, velocity, right, left, ctx.keyboard),
        };

        for event in tick(&mut self.arena, &input, dt) {
            match event {
                GameEvent::Scored(side) => {
                    log::info!("{:?} scores ({})", side, self.arena.score)
                }
                GameEvent::PaddleHit(side) => log::debug!("{:?} paddle returns the ball", side),
                GameEvent::WallBounce => log::trace!("wall bounce"),
            }
        }

        self.layout_score(ctx.font);
        Propagation::Stop
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let arena = &self.arena;
        canvas.draw_rect(arena.field.as_rect(), &FIELD_STYLE);
        canvas.draw_circle(arena.ball.pos, arena.ball.radius, &BALL_STYLE);
        canvas.draw_rect(arena.left.bounds(), &PADDLE_STYLE);
        canvas.draw_rect(arena.right.bounds(), &PADDLE_STYLE);
        canvas.draw_label(&self.score_label);
    }

    /// A match covers the whole screen
    fn draws_state_below(&self) -> bool {
        false
    }
}
