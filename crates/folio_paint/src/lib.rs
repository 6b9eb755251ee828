//! Folio Paint/Canvas API
//!
//! A small 2D drawing API modelled on HTML Canvas, used by the decorative
//! animations.
//!
//! # Features
//!
//! - Colors with alpha, parsed from CSS hex notation
//! - Shape primitives (rect, circle) and text labels
//! - The [`Canvas`] trait implemented by any drawing backend
//! - [`PaintContext`], a backend that records commands for replay or inspection
//! - [`CanvasSurface`], a sized surface tracking device pixel ratio

pub mod color;
pub mod context;
pub mod primitives;
pub mod surface;

pub use color::Color;
pub use context::{Canvas, PaintCommand, PaintContext, StrokeStyle, TextStyle};
pub use primitives::*;
pub use surface::CanvasSurface;
