//! Animation engine
//!
//! [`start`] builds an entity population from an [`AnimationConfig`],
//! registers a frame callback with a [`Ticker`] and a resize observer with
//! the [`Container`], and returns an [`AnimationHandle`] that undoes both.
//!
//! The entity collection is created inside `start` and moved into the frame
//! callback, so no other instance can ever observe or mutate it.

use crate::container::{Container, SharedSurface};
use crate::entity::{Entity, EntityCollection, LinkStyle};
use crate::ticker::{TickId, Ticker};
use folio_core::ListenerKey;
use folio_paint::{CanvasSurface, Size, TextStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Inputs available to an entity factory
pub struct FactoryContext<'a> {
    /// Index of the entity being created
    pub index: usize,
    /// Total number of entities
    pub count: usize,
    /// Surface size at start
    pub size: Size,
    rng: &'a mut StdRng,
}

impl FactoryContext<'_> {
    /// Uniform sample from `range`; an empty range yields its start
    pub fn random(&mut self, range: Range<f32>) -> f32 {
        if range.start < range.end {
            self.rng.random_range(range)
        } else {
            range.start
        }
    }

    /// Uniform sample in `[0, 1)`
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Pick one element, `None` for an empty slice
    pub fn pick<'b, T>(&mut self, items: &'b [T]) -> Option<&'b T> {
        if items.is_empty() {
            return None;
        }
        let index = self.rng.random_range(0..items.len());
        items.get(index)
    }

    /// Evenly spaced angle for laying entities out on a circle
    pub fn ring_angle(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.index as f32 / self.count as f32 * std::f32::consts::TAU
    }
}

/// Produces the initial state of each entity
pub type EntityFactory = Box<dyn FnMut(&mut FactoryContext<'_>) -> Entity + Send>;

/// Everything needed to start one animation
pub struct AnimationConfig {
    pub name: String,
    pub count: usize,
    factory: EntityFactory,
    /// Rotation added to the shared orbit angle each frame (radians)
    pub rotation_step: f32,
    /// Orbit radius as a fraction of half the smaller surface side
    pub orbit_scale: f32,
    pub links: Option<LinkStyle>,
    pub label_style: TextStyle,
    /// Fixed seed for reproducible layouts
    pub seed: Option<u64>,
}

impl AnimationConfig {
    pub fn new<F>(name: impl Into<String>, count: usize, factory: F) -> Self
    where
        F: FnMut(&mut FactoryContext<'_>) -> Entity + Send + 'static,
    {
        Self {
            name: name.into(),
            count,
            factory: Box::new(factory),
            rotation_step: 0.0,
            orbit_scale: 0.8,
            links: None,
            label_style: TextStyle::default(),
            seed: None,
        }
    }

    pub fn with_rotation_step(mut self, step: f32) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn with_orbit_scale(mut self, scale: f32) -> Self {
        self.orbit_scale = scale;
        self
    }

    pub fn with_links(mut self, links: LinkStyle) -> Self {
        self.links = Some(links);
        self
    }

    pub fn with_label_style(mut self, style: TextStyle) -> Self {
        self.label_style = style;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Run the factory `count` times for a surface of `size`
    pub fn build_entities(&mut self, size: Size) -> EntityCollection {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut entities = Vec::with_capacity(self.count);
        for index in 0..self.count {
            let mut ctx = FactoryContext {
                index,
                count: self.count,
                size,
                rng: &mut rng,
            };
            entities.push((self.factory)(&mut ctx));
        }

        EntityCollection::new(entities)
            .with_rotation_step(self.rotation_step)
            .with_orbit_scale(self.orbit_scale)
            .with_links(self.links)
            .with_label_style(self.label_style.clone())
    }
}

impl std::fmt::Debug for AnimationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationConfig")
            .field("name", &self.name)
            .field("count", &self.count)
            .field("rotation_step", &self.rotation_step)
            .field("orbit_scale", &self.orbit_scale)
            .field("links", &self.links)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Registrations owned by a running animation
struct Registration {
    ticker: Arc<dyn Ticker>,
    tick_id: TickId,
    container: Arc<dyn Container>,
    resize_key: ListenerKey,
}

#[derive(Default)]
struct AnimationStats {
    stopped: AtomicBool,
    frames: AtomicU64,
}

/// Handle to a running animation
///
/// Stopping is idempotent and also happens on drop, so every exit path of
/// the hosting view releases the frame callback and the resize observer.
pub struct AnimationHandle {
    name: String,
    stats: Arc<AnimationStats>,
    surface: Option<SharedSurface>,
    registration: Mutex<Option<Registration>>,
}

impl AnimationHandle {
    /// A handle for an animation that never started
    fn inert(name: String) -> Self {
        let stats = AnimationStats::default();
        stats.stopped.store(true, Ordering::SeqCst);
        Self {
            name,
            stats: Arc::new(stats),
            surface: None,
            registration: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether frames are still being produced
    pub fn is_running(&self) -> bool {
        !self.stats.stopped.load(Ordering::SeqCst)
    }

    /// Whether `start` acquired a surface at all
    pub fn is_started(&self) -> bool {
        self.surface.is_some()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.stats.frames.load(Ordering::SeqCst)
    }

    /// The surface this animation draws into
    pub fn surface(&self) -> Option<SharedSurface> {
        self.surface.clone()
    }

    /// Cancel the frame callback and remove the resize observer
    ///
    /// Waits for a frame that is already drawing; once this returns the
    /// surface is never touched by this animation again.
    pub fn stop(&self) {
        match &self.surface {
            Some(surface) => {
                let _guard = lock_surface(surface);
                self.stats.stopped.store(true, Ordering::SeqCst);
            }
            None => self.stats.stopped.store(true, Ordering::SeqCst),
        }
        let registration = self
            .registration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(reg) = registration {
            reg.ticker.cancel(reg.tick_id);
            reg.container.unobserve_resize(reg.resize_key);
            tracing::debug!(
                "animation `{}` stopped after {} frames",
                self.name,
                self.frames_rendered()
            );
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationHandle")
            .field("name", &self.name)
            .field("running", &self.is_running())
            .field("frames", &self.frames_rendered())
            .finish()
    }
}

fn lock_surface(surface: &SharedSurface) -> MutexGuard<'_, CanvasSurface> {
    surface.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Start an animation in `container`, driven by `ticker`
///
/// If the container has no drawing context the returned handle is inert:
/// nothing is scheduled and stopping it is a no-op.
pub fn start(
    mut config: AnimationConfig,
    container: Arc<dyn Container>,
    ticker: Arc<dyn Ticker>,
) -> AnimationHandle {
    let Some(surface) = container.acquire_surface() else {
        tracing::debug!(
            "animation `{}` not started: drawing context unavailable",
            config.name
        );
        return AnimationHandle::inert(config.name);
    };

    let metrics = container.metrics();
    lock_surface(&surface).resize(metrics.size, metrics.device_pixel_ratio);

    let mut entities = config.build_entities(metrics.size);
    let stats = Arc::new(AnimationStats::default());

    let resize_surface = Arc::clone(&surface);
    let resize_stats = Arc::clone(&stats);
    let resize_key = container.observe_resize(Box::new(move |metrics| {
        let mut surface = lock_surface(&resize_surface);
        if !resize_stats.stopped.load(Ordering::SeqCst) {
            surface.resize(metrics.size, metrics.device_pixel_ratio);
        }
    }));

    let frame_surface = Arc::clone(&surface);
    let frame_stats = Arc::clone(&stats);
    let tick_id = ticker.schedule(Box::new(move |_info| {
        if frame_stats.stopped.load(Ordering::SeqCst) {
            return;
        }
        let mut surface = lock_surface(&frame_surface);
        // `stop` flips the flag under this lock
        if frame_stats.stopped.load(Ordering::SeqCst) {
            return;
        }
        entities.step(&mut *surface);
        frame_stats.frames.fetch_add(1, Ordering::SeqCst);
    }));

    tracing::debug!(
        "animation `{}` started with {} entities at {}x{} @{}x",
        config.name,
        config.count,
        metrics.size.width,
        metrics.size.height,
        metrics.device_pixel_ratio
    );

    AnimationHandle {
        name: config.name,
        stats,
        surface: Some(surface),
        registration: Mutex::new(Some(Registration {
            ticker,
            tick_id,
            container,
            resize_key,
        })),
    }
}

/// Stop an animation; calling it repeatedly is harmless
pub fn stop(handle: &AnimationHandle) {
    handle.stop();
}
