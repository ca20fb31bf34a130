//! Per-frame physics step
//!
//! Variable timestep, no sub-stepping: paddles move, the ball bounces off the
//! top/bottom borders, gets reflected or scores at the left/right borders, and
//! finally advances along its (clamped) direction.

use glam::Vec2;

use super::collision::{reaches_left, reaches_right, reflect_ball_from_paddle, vertical_overlap, wall_bounce};
use super::controller::Action;
use super::state::{Arena, Paddle, Side};
use crate::{keep_in_bounds, normalize, scale};

/// Paddle intents for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Action,
    pub right: Action,
}

/// Something noteworthy that happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallBounce,
    /// The ball was returned by this side's paddle
    PaddleHit(Side),
    /// This side gained a point
    Scored(Side),
}

/// New paddle position after moving for `dt` seconds (Up decreases y)
pub fn move_paddle(pos: Vec2, action: Action, speed: f32, dt: f32) -> Vec2 {
    match action {
        Action::Up => pos - Vec2::new(0.0, speed * dt),
        Action::Down => pos + Vec2::new(0.0, speed * dt),
        Action::None => pos,
    }
}

/// Advance the arena by `dt` seconds
pub fn tick(arena: &mut Arena, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Paddles
    let (top, bottom) = (arena.field.top, arena.field.bottom);
    let clamp = arena.clamp_paddles;
    let speed = arena.paddle_speed;
    for (paddle, action) in [(&mut arena.left, input.left), (&mut arena.right, input.right)] {
        paddle.pos = move_paddle(paddle.pos, action, speed, dt);
        if clamp {
            paddle.pos.y = keep_in_bounds(paddle.pos.y, top, bottom - paddle.size.y);
        }
    }

    // Top/bottom borders
    if wall_bounce(&mut arena.ball, &arena.field) {
        events.push(GameEvent::WallBounce);
    }

    // Left/right borders
    let center = arena.field.center();
    if reaches_left(&arena.ball, &arena.field) {
        events.push(paddle_or_score(arena, Side::Left, center));
    }
    if reaches_right(&arena.ball, &arena.field) {
        events.push(paddle_or_score(arena, Side::Right, center));
    }

    let limit = arena.max_ball_dir_y;
    arena.ball.dir.y = arena.ball.dir.y.clamp(-limit, limit);
    arena.ball.pos += scale(normalize(arena.ball.dir), arena.ball_speed * dt);

    events
}

/// Reflect off `side`'s paddle, or award the point to the other side and re-serve
fn paddle_or_score(arena: &mut Arena, side: Side, center: Vec2) -> GameEvent {
    let paddle: Paddle = *arena.paddle(side);
    let ball = &mut arena.ball;
    if vertical_overlap(ball, &paddle) {
        ball.dir = reflect_ball_from_paddle(ball.dir, ball.pos.y, paddle.pos.y, paddle.size.y);
        GameEvent::PaddleHit(side)
    } else {
        let scorer = side.opponent();
        arena.score.award(scorer);
        // Serve towards whoever just scored
        ball.serve_towards(center, scorer);
        GameEvent::Scored(scorer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    fn arena() -> Arena {
        Arena::new(&Settings::default()).unwrap()
    }

    #[test]
    fn test_move_paddle() {
        let pos = Vec2::new(30.0, 240.0);
        assert_eq!(move_paddle(pos, Action::Up, 200.0, 0.5), Vec2::new(30.0, 140.0));
        assert_eq!(move_paddle(pos, Action::Down, 200.0, 0.5), Vec2::new(30.0, 340.0));
        assert_eq!(move_paddle(pos, Action::None, 200.0, 0.5), pos);
    }

    #[test]
    fn test_ball_advances_at_ball_speed() {
        let mut arena = arena();
        let events = tick(&mut arena, &TickInput::default(), 0.1);
        assert!(events.is_empty());
        assert!((arena.ball.pos.x - 445.0).abs() < 1e-3);
        assert_eq!(arena.ball.pos.y, 300.0);
    }

    #[test]
    fn test_left_miss_above_scores_for_right() {
        let mut arena = arena();
        arena.ball.pos = Vec2::new(60.0, 100.0);
        arena.ball.dir = Vec2::new(-1.0, 0.2);

        let events = tick(&mut arena, &TickInput::default(), DT);

        assert_eq!(events, vec![GameEvent::Scored(Side::Right)]);
        assert_eq!(arena.score.right, 1);
        assert_eq!(arena.score.left, 0);
        assert_eq!(arena.ball.dir, Vec2::new(1.0, 0.0));
        let expected = arena.field.center() + Vec2::new(450.0 * DT, 0.0);
        assert!((arena.ball.pos - expected).length() < 1e-3);
    }

    #[test]
    fn test_left_miss_below_scores_for_right() {
        let mut arena = arena();
        arena.ball.pos = Vec2::new(55.0, 500.0);
        arena.ball.dir = Vec2::new(-1.0, -0.1);

        let events = tick(&mut arena, &TickInput::default(), 0.0);

        assert_eq!(events, vec![GameEvent::Scored(Side::Right)]);
        assert_eq!(arena.score.right, 1);
        assert_eq!(arena.ball.dir, Vec2::new(1.0, 0.0));
        assert_eq!(arena.ball.pos, arena.field.center());
    }

    #[test]
    fn test_right_miss_scores_for_left() {
        let mut arena = arena();
        arena.ball.pos = Vec2::new(740.0, 520.0);
        arena.ball.dir = Vec2::new(1.0, 0.0);

        let events = tick(&mut arena, &TickInput::default(), 0.0);

        assert_eq!(events, vec![GameEvent::Scored(Side::Left)]);
        assert_eq!(arena.score.left, 1);
        assert_eq!(arena.ball.dir, Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_paddle_hit_reflects() {
        let mut arena = arena();
        // Left paddle spans 240..360; hit below its centre
        arena.ball.pos = Vec2::new(60.0, 330.0);
        arena.ball.dir = Vec2::new(-1.0, 0.0);

        let events = tick(&mut arena, &TickInput::default(), 0.0);

        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Left)]);
        assert_eq!(arena.ball.dir.x, 1.0);
        assert!((arena.ball.dir.y - 0.125).abs() < 1e-6);
        assert_eq!(arena.score, Default::default());
    }

    #[test]
    fn test_paddles_clamped_to_field_when_enabled() {
        let mut arena = arena();
        arena.clamp_paddles = true;
        let input = TickInput {
            left: Action::Up,
            right: Action::Down,
        };
        for _ in 0..200 {
            tick(&mut arena, &input, DT);
        }
        assert_eq!(arena.left.pos.y, arena.field.top);
        assert_eq!(arena.right.pos.y, arena.field.bottom - arena.right.size.y);
    }

    #[test]
    fn test_default_settings_leave_paddles_unclamped() {
        let mut arena = arena();
        assert!(!arena.clamp_paddles);
        let input = TickInput {
            left: Action::Up,
            right: Action::None,
        };
        tick(&mut arena, &input, 2.0);
        assert_eq!(arena.left.pos.y, 240.0 - 400.0);
        assert_eq!(arena.right.pos.y, 240.0);
    }

    proptest! {
        #[test]
        fn prop_vertical_direction_stays_clamped(
            x in 0.0f32..800.0,
            y in 0.0f32..600.0,
            dx in -5.0f32..5.0,
            dy in -5.0f32..5.0,
            dt in 0.0f32..0.1,
        ) {
            let mut arena = arena();
            arena.ball.pos = Vec2::new(x, y);
            arena.ball.dir = Vec2::new(dx, dy);
            tick(&mut arena, &TickInput::default(), dt);
            prop_assert!(arena.ball.dir.y.abs() <= 0.7);
        }
    }
}
