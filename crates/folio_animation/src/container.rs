//! Hosting containers
//!
//! A [`Container`] is the element an animation is mounted into. It hands
//! out the drawing surface, reports its displayed size and pixel ratio,
//! and notifies resize observers.

use folio_core::{ListenerKey, Listeners};
use folio_paint::{CanvasSurface, Size};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Drawing surface shared between a container and the animation drawing into it
pub type SharedSurface = Arc<Mutex<CanvasSurface>>;

/// Resize observer callback
pub type ResizeObserver = Box<dyn Fn(&ContainerMetrics) + Send + Sync>;

/// Displayed size and pixel density of a container
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerMetrics {
    pub size: Size,
    pub device_pixel_ratio: f32,
}

impl ContainerMetrics {
    pub fn new(size: Size, device_pixel_ratio: f32) -> Self {
        Self {
            size,
            device_pixel_ratio,
        }
    }
}

/// The element hosting an animated canvas
pub trait Container: Send + Sync {
    /// Acquire the drawing surface; `None` when no drawing context is available
    fn acquire_surface(&self) -> Option<SharedSurface>;

    /// Current displayed size and pixel ratio
    fn metrics(&self) -> ContainerMetrics;

    fn observe_resize(&self, observer: ResizeObserver) -> ListenerKey;

    fn unobserve_resize(&self, key: ListenerKey);
}

/// In-process container model
///
/// Stands in for a DOM element or window: the host calls [`Viewport::resize`]
/// when the layout changes and every observer sees the new metrics.
pub struct Viewport {
    metrics: RwLock<ContainerMetrics>,
    observers: Listeners<ContainerMetrics>,
    surface: Option<SharedSurface>,
}

impl Viewport {
    /// Container with a drawing surface at 1x pixel ratio
    pub fn new(size: Size) -> Self {
        Self::with_device_pixel_ratio(size, 1.0)
    }

    pub fn with_device_pixel_ratio(size: Size, device_pixel_ratio: f32) -> Self {
        let metrics = ContainerMetrics::new(size, device_pixel_ratio);
        Self {
            metrics: RwLock::new(metrics),
            observers: Listeners::new(),
            surface: Some(Arc::new(Mutex::new(CanvasSurface::new(
                size,
                device_pixel_ratio,
            )))),
        }
    }

    /// Container whose drawing context cannot be acquired
    pub fn without_context(size: Size) -> Self {
        Self {
            metrics: RwLock::new(ContainerMetrics::new(size, 1.0)),
            observers: Listeners::new(),
            surface: None,
        }
    }

    /// Change the displayed size and notify observers
    pub fn resize(&self, size: Size) {
        let metrics = {
            let mut metrics = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
            if metrics.size == size {
                return;
            }
            metrics.size = size;
            *metrics
        };
        tracing::debug!("Viewport resized to {}x{}", size.width, size.height);
        self.observers.notify(&metrics);
    }

    /// Change the pixel ratio (e.g. window moved to another monitor)
    pub fn set_device_pixel_ratio(&self, device_pixel_ratio: f32) {
        let metrics = {
            let mut metrics = self.metrics.write().unwrap_or_else(PoisonError::into_inner);
            if metrics.device_pixel_ratio == device_pixel_ratio {
                return;
            }
            metrics.device_pixel_ratio = device_pixel_ratio;
            *metrics
        };
        self.observers.notify(&metrics);
    }

    /// Number of registered resize observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// The surface, if this container has a drawing context
    pub fn surface(&self) -> Option<SharedSurface> {
        self.surface.clone()
    }
}

impl Container for Viewport {
    fn acquire_surface(&self) -> Option<SharedSurface> {
        self.surface.clone()
    }

    fn metrics(&self) -> ContainerMetrics {
        *self.metrics.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn observe_resize(&self, observer: ResizeObserver) -> ListenerKey {
        self.observers.insert(observer)
    }

    fn unobserve_resize(&self, key: ListenerKey) {
        self.observers.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_resize_notifies_observers_once_per_change() {
        let viewport = Viewport::new(Size::new(100.0, 100.0));
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();
        let key = viewport.observe_resize(Box::new(move |m| {
            assert_eq!(m.size, Size::new(200.0, 120.0));
            calls_clone.fetch_add(1, Ordering::SeqCst);
        }));

        viewport.resize(Size::new(200.0, 120.0));
        viewport.resize(Size::new(200.0, 120.0));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        viewport.unobserve_resize(key);
        assert_eq!(viewport.observer_count(), 0);
    }

    #[test]
    fn test_without_context_has_no_surface() {
        let viewport = Viewport::without_context(Size::new(10.0, 10.0));
        assert!(viewport.acquire_surface().is_none());
        assert_eq!(viewport.metrics().size, Size::new(10.0, 10.0));
    }

    #[test]
    fn test_device_pixel_ratio_change_is_reported() {
        let viewport = Viewport::with_device_pixel_ratio(Size::new(50.0, 50.0), 1.0);
        let seen = Arc::new(Mutex::new(None));
        let seen_clone = seen.clone();
        viewport.observe_resize(Box::new(move |m| {
            *seen_clone.lock().unwrap() = Some(m.device_pixel_ratio);
        }));

        viewport.set_device_pixel_ratio(2.0);
        assert_eq!(*seen.lock().unwrap(), Some(2.0));
        assert_eq!(viewport.metrics().device_pixel_ratio, 2.0);
    }
}
