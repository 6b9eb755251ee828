//! Sized drawing surface
//!
//! Tracks the logical size of the hosting container, the device pixel
//! ratio and the resulting pixel-buffer size. Drawing goes through the
//! [`Canvas`] impl, which records into a [`PaintContext`].

use crate::color::Color;
use crate::context::{Canvas, PaintCommand, PaintContext, StrokeStyle, TextStyle};
use crate::primitives::{Point, Rect, Size};

/// A canvas kept in sync with its container's displayed size
pub struct CanvasSurface {
    logical: Size,
    device_pixel_ratio: f32,
    context: PaintContext,
    resize_count: u64,
}

impl CanvasSurface {
    pub fn new(logical: Size, device_pixel_ratio: f32) -> Self {
        let dpr = sanitize_dpr(device_pixel_ratio);
        Self {
            logical,
            device_pixel_ratio: dpr,
            context: PaintContext::new(logical),
            resize_count: 0,
        }
    }

    /// Match the container's displayed size and pixel ratio
    pub fn resize(&mut self, logical: Size, device_pixel_ratio: f32) {
        let dpr = sanitize_dpr(device_pixel_ratio);
        if self.logical == logical && self.device_pixel_ratio == dpr {
            return;
        }
        tracing::trace!(
            "CanvasSurface::resize - {}x{} @{} -> {}x{} @{}",
            self.logical.width,
            self.logical.height,
            self.device_pixel_ratio,
            logical.width,
            logical.height,
            dpr
        );
        self.logical = logical;
        self.device_pixel_ratio = dpr;
        self.context.set_size(logical);
        self.resize_count += 1;
    }

    pub fn logical_size(&self) -> Size {
        self.logical
    }

    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Backing buffer dimensions in physical pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.logical.width * self.device_pixel_ratio).max(0.0).round() as u32,
            (self.logical.height * self.device_pixel_ratio).max(0.0).round() as u32,
        )
    }

    /// Number of effective resizes since creation
    pub fn resize_count(&self) -> u64 {
        self.resize_count
    }

    /// Commands recorded since the last clear
    pub fn commands(&self) -> &[PaintCommand] {
        self.context.commands()
    }

    pub fn context(&self) -> &PaintContext {
        &self.context
    }
}

fn sanitize_dpr(dpr: f32) -> f32 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

impl Canvas for CanvasSurface {
    fn size(&self) -> Size {
        self.logical
    }

    fn clear(&mut self) {
        self.context.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.context.fill_rect(rect, color);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.context.fill_circle(center, radius, color);
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.context.stroke_line(from, to, style);
    }

    fn fill_text(&mut self, text: &str, position: Point, style: &TextStyle, color: Color) {
        self.context.fill_text(text, position, style, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_scales_by_dpr() {
        let surface = CanvasSurface::new(Size::new(300.0, 150.0), 2.0);
        assert_eq!(surface.pixel_size(), (600, 300));
        assert_eq!(surface.logical_size(), Size::new(300.0, 150.0));
    }

    #[test]
    fn test_invalid_dpr_falls_back_to_one() {
        let surface = CanvasSurface::new(Size::new(10.0, 10.0), 0.0);
        assert_eq!(surface.device_pixel_ratio(), 1.0);
        let surface = CanvasSurface::new(Size::new(10.0, 10.0), f32::NAN);
        assert_eq!(surface.device_pixel_ratio(), 1.0);
    }

    #[test]
    fn test_resize_updates_canvas_size() {
        let mut surface = CanvasSurface::new(Size::new(100.0, 100.0), 1.0);
        surface.resize(Size::new(100.0, 100.0), 1.0);
        assert_eq!(surface.resize_count(), 0);

        surface.resize(Size::new(640.0, 480.0), 1.5);
        assert_eq!(surface.resize_count(), 1);
        assert_eq!(Canvas::size(&surface), Size::new(640.0, 480.0));
        assert_eq!(surface.pixel_size(), (960, 720));

        surface.clear();
        assert_eq!(
            surface.commands(),
            &[PaintCommand::Clear {
                size: Size::new(640.0, 480.0)
            }]
        );
    }
}
