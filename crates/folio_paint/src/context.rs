//! Paint context - the main drawing API

use crate::color::Color;
use crate::primitives::*;
use serde::Serialize;

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Font settings for labels
///
/// Labels are centered horizontally on their position.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: String,
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Inter, -apple-system, BlinkMacSystemFont, sans-serif".to_string(),
            size: 12.0,
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PaintCommand {
    Clear {
        size: Size,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillCircle {
        circle: Circle,
        color: Color,
    },
    StrokeLine {
        from: Point,
        to: Point,
        style: StrokeStyle,
    },
    DrawText {
        text: String,
        position: Point,
        style: TextStyle,
        color: Color,
    },
}

/// Anything the animations can draw on
///
/// Coordinates are logical pixels; backends apply the device pixel ratio.
pub trait Canvas {
    /// Current logical size of the drawable area
    fn size(&self) -> Size;

    /// Wipe the whole surface
    fn clear(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle);

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle, color: Color);
}

/// A canvas backend that records commands instead of rasterizing them
///
/// `clear` drops everything recorded so far, so after a frame the context
/// holds exactly that frame's commands.
pub struct PaintContext {
    size: Size,
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Number of recorded commands matching a predicate
    pub fn count(&self, predicate: impl Fn(&PaintCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Canvas for PaintContext {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(PaintCommand::Clear { size: self.size });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(center, radius),
            color,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands
            .push(PaintCommand::StrokeLine { from, to, style });
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle, color: Color) {
        self.commands.push(PaintCommand::DrawText {
            text: text.to_string(),
            position,
            style: style.clone(),
            color,
        });
    }
}
