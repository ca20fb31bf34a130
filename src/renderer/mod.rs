//! Rendering module
//!
//! States draw through the [`Canvas`] trait using a handful of primitives
//! (rectangles, circles, text labels). Backends:
//! - [`TerminalCanvas`]: cell-grid rasteriser for a raw-mode terminal
//! - [`RecordingCanvas`]: keeps the draw calls, for headless runs and tests

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(not(target_arch = "wasm32"))]
pub use terminal::TerminalCanvas;

use glam::Vec2;

use crate::Rect;

/// RGBA colour, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Highlight/field-border orange
    pub const ORANGE: Color = Color::rgb(0xfc, 0x9a, 0x04);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Fill and outline of a shape or label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f32,
}

impl Style {
    pub const fn filled(fill: Color) -> Self {
        Self {
            fill,
            outline: Color::TRANSPARENT,
            outline_thickness: 0.0,
        }
    }

    pub const fn outlined(fill: Color, outline: Color, outline_thickness: f32) -> Self {
        Self {
            fill,
            outline,
            outline_thickness,
        }
    }
}

/// A line of text positioned by its top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub char_size: f32,
    pub style: Style,
}

impl Label {
    /// Black text with a white outline, the look of every label in the game
    pub fn new(text: impl Into<String>, pos: Vec2, char_size: f32) -> Self {
        Self {
            text: text.into(),
            pos,
            char_size,
            style: Style::outlined(Color::BLACK, Color::WHITE, 4.0),
        }
    }
}

/// Drawing surface supplied by the frontend
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Rect, style: &Style);
    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &Style);
    fn draw_label(&mut self, label: &Label);
    /// Show everything drawn since the last clear
    fn present(&mut self) -> std::io::Result<()>;
}

/// A recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect(Rect, Style),
    Circle(Vec2, f32, Style),
    Label(Label),
}

/// Canvas that records draw calls instead of rendering them
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    pub frames_presented: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every label drawn so far, in draw order
    pub fn label_texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Label(label) => Some(label.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, rect: Rect, style: &Style) {
        self.commands.push(DrawCommand::Rect(rect, *style));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, style: &Style) {
        self.commands.push(DrawCommand::Circle(center, radius, *style));
    }

    fn draw_label(&mut self, label: &Label) {
        self.commands.push(DrawCommand::Label(label.clone()));
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}
