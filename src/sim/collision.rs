//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is tested against the field's
//! horizontal borders and against a paddle's vertical span once its leading
//! edge reaches the left or right border. The interesting rule is the paddle
//! reflection, which adds cubic "spin" depending on where the paddle was hit.

use glam::Vec2;

use super::field::Field;
use super::state::{Ball, Paddle};

/// Reflect the ball off a paddle spanning `paddle_y..paddle_y + paddle_height`.
///
/// The horizontal component reverses; the vertical component gains
/// `r * |r| * |r|` where `r` is the hit offset from the paddle centre relative
/// to half the paddle height. Edge hits (|r| near 1) deflect much more sharply
/// than centre hits, and the sign follows the side of the centre that was hit.
pub fn reflect_ball_from_paddle(dir: Vec2, ball_y: f32, paddle_y: f32, paddle_height: f32) -> Vec2 {
    let half_height = paddle_height / 2.0;
    if half_height <= 0.0 {
        return Vec2::new(-dir.x, dir.y);
    }
    let offset = ball_y - (paddle_y + half_height);
    let relative = offset / half_height;
    let spin = relative * relative.abs() * relative.abs();
    Vec2::new(-dir.x, dir.y + spin)
}

/// True if the ball's vertical extent overlaps the paddle's (strictly)
pub fn vertical_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y + ball.radius > paddle.pos.y && ball.pos.y - ball.radius < paddle.pos.y + paddle.size.y
}

/// Bounce off the top/bottom border.
///
/// Only flips when the ball is also heading further outside; a ball that
/// overshot the border during a long frame would otherwise flip every frame
/// and stick to it. Returns true if the direction changed.
pub fn wall_bounce(ball: &mut Ball, field: &Field) -> bool {
    let hits_top = ball.pos.y - ball.radius <= field.top && ball.dir.y < 0.0;
    let hits_bottom = ball.pos.y + ball.radius >= field.bottom && ball.dir.y > 0.0;
    if hits_top || hits_bottom {
        ball.dir.y = -ball.dir.y;
        true
    } else {
        false
    }
}

/// Ball moving left with its leading edge at or past the left border
pub fn reaches_left(ball: &Ball, field: &Field) -> bool {
    ball.dir.x < 0.0 && ball.pos.x - ball.radius <= field.left
}

/// Ball moving right with its leading edge at or past the right border
pub fn reaches_right(ball: &Ball, field: &Field) -> bool {
    ball.dir.x > 0.0 && ball.pos.x + ball.radius >= field.right
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Field {
        Field::new(50.0, 750.0, 50.0, 550.0).unwrap()
    }

    #[test]
    fn test_center_hit_only_flips_horizontal() {
        let dir = Vec2::new(-1.0, 0.25);
        let out = reflect_ball_from_paddle(dir, 300.0, 240.0, 120.0);
        assert_eq!(out, Vec2::new(1.0, 0.25));
    }

    #[test]
    fn test_edge_hit_is_cubic() {
        // Bottom edge: r = 1 -> +1
        let out = reflect_ball_from_paddle(Vec2::new(-1.0, 0.0), 360.0, 240.0, 120.0);
        assert!((out.y - 1.0).abs() < 1e-6);
        // Half way up: r = -0.5 -> -0.125 (cubic, not quadratic)
        let out = reflect_ball_from_paddle(Vec2::new(1.0, 0.0), 270.0, 240.0, 120.0);
        assert!((out.y + 0.125).abs() < 1e-6);
        assert_eq!(out.x, -1.0);
    }

    #[test]
    fn test_zero_height_paddle_is_guarded() {
        let out = reflect_ball_from_paddle(Vec2::new(1.0, 0.3), 10.0, 0.0, 0.0);
        assert_eq!(out, Vec2::new(-1.0, 0.3));
    }

    #[test]
    fn test_vertical_overlap() {
        let paddle = Paddle::new(Vec2::new(30.0, 240.0), Vec2::new(20.0, 120.0));
        let mut ball = Ball::new(Vec2::new(60.0, 300.0), 20.0);
        assert!(vertical_overlap(&ball, &paddle));
        // Just touching from above is not an overlap
        ball.pos.y = 220.0;
        assert!(!vertical_overlap(&ball, &paddle));
        ball.pos.y = 221.0;
        assert!(vertical_overlap(&ball, &paddle));
        ball.pos.y = 380.0;
        assert!(!vertical_overlap(&ball, &paddle));
    }

    #[test]
    fn test_wall_bounce_requires_outward_motion() {
        let field = field();
        let mut ball = Ball::new(Vec2::new(400.0, 60.0), 20.0);
        ball.dir = Vec2::new(1.0, -0.5);
        assert!(wall_bounce(&mut ball, &field));
        assert_eq!(ball.dir.y, 0.5);
        // Still overlapping the border but already heading back in
        assert!(!wall_bounce(&mut ball, &field));
        assert_eq!(ball.dir.y, 0.5);

        ball.pos.y = 540.0;
        assert!(wall_bounce(&mut ball, &field));
        assert_eq!(ball.dir.y, -0.5);
    }

    #[test]
    fn test_side_triggers_need_matching_direction() {
        let field = field();
        let mut ball = Ball::new(Vec2::new(60.0, 300.0), 20.0);
        ball.dir = Vec2::new(-1.0, 0.0);
        assert!(reaches_left(&ball, &field));
        ball.dir = Vec2::new(1.0, 0.0);
        assert!(!reaches_left(&ball, &field));

        ball.pos.x = 735.0;
        assert!(reaches_right(&ball, &field));
    }

    proptest! {
        #[test]
        fn prop_reflection_is_odd_in_offset(
            offset in 0.0f32..60.0,
            dir_x in -1.0f32..1.0,
            dir_y in -0.7f32..0.7,
        ) {
            let paddle_y = 240.0;
            let height = 120.0;
            let center = paddle_y + height / 2.0;
            let dir = Vec2::new(dir_x, dir_y);

            let below = reflect_ball_from_paddle(dir, center + offset, paddle_y, height);
            let above = reflect_ball_from_paddle(dir, center - offset, paddle_y, height);

            prop_assert_eq!(below.x, -dir_x);
            prop_assert_eq!(above.x, -dir_x);
            let spin_below = below.y - dir_y;
            let spin_above = above.y - dir_y;
            prop_assert!((spin_below + spin_above).abs() < 1e-5);
            prop_assert!(spin_below >= 0.0);
        }
    }
}
