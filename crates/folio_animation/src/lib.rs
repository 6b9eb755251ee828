//! Folio Animation System
//!
//! A single parameterized engine for the site's decorative canvas
//! animations: bouncing bubbles, orbiting tool badges, particle networks
//! and drifting code blocks.
//!
//! # Features
//!
//! - **Tickers**: per-display-refresh scheduling behind the [`Ticker`] trait,
//!   with a deterministic [`ManualTicker`] and a threaded [`IntervalTicker`]
//! - **Entities**: one tagged [`EntityKind`] with a single update/draw dispatch
//! - **Containers**: surfaces kept in sync with their container's size
//! - **Teardown**: [`AnimationHandle`] cancels the frame callback and the
//!   resize observer on stop or drop
//!
//! # Example
//!
//! ```rust
//! use folio_animation::{start, ManualTicker, Preset, Viewport};
//! use folio_core::ColorScheme;
//! use folio_paint::Size;
//! use std::sync::Arc;
//!
//! let viewport = Arc::new(Viewport::new(Size::new(400.0, 300.0)));
//! let ticker = Arc::new(ManualTicker::new());
//!
//! let handle = start(
//!     Preset::DataParticles.config(ColorScheme::Light).with_seed(7),
//!     viewport.clone(),
//!     ticker.clone(),
//! );
//! ticker.advance_by(3);
//! assert_eq!(handle.frames_rendered(), 3);
//!
//! handle.stop();
//! ticker.advance();
//! assert_eq!(handle.frames_rendered(), 3);
//! ```

pub mod container;
pub mod engine;
pub mod entity;
pub mod host;
pub mod presets;
pub mod ticker;

pub use container::{Container, ContainerMetrics, SharedSurface, Viewport};
pub use engine::{start, stop, AnimationConfig, AnimationHandle, FactoryContext};
pub use entity::{Entity, EntityCollection, EntityKind, Highlight, LinkStyle};
pub use host::AnimationHost;
pub use presets::Preset;
pub use ticker::{FrameInfo, IntervalTicker, ManualTicker, TickId, Ticker};
