//! Theme-following animation host
//!
//! Owns at most one running animation for a container. A theme-aware
//! animation is never recolored in place: when the resolved scheme changes
//! the current instance is stopped and a fresh one is started. Animations
//! that ignore the scheme keep running untouched.

use crate::container::Container;
use crate::engine::{start, AnimationConfig, AnimationHandle};
use crate::presets::Preset;
use crate::ticker::Ticker;
use folio_core::ColorScheme;
use std::sync::Arc;

type ConfigBuilder = Box<dyn Fn(ColorScheme) -> AnimationConfig + Send + Sync>;

/// Mounts, restarts and unmounts one animation
pub struct AnimationHost {
    container: Arc<dyn Container>,
    ticker: Arc<dyn Ticker>,
    build: ConfigBuilder,
    theme_aware: bool,
    scheme: Option<ColorScheme>,
    handle: Option<AnimationHandle>,
    restarts: u64,
}

impl AnimationHost {
    pub fn new<F>(container: Arc<dyn Container>, ticker: Arc<dyn Ticker>, build: F) -> Self
    where
        F: Fn(ColorScheme) -> AnimationConfig + Send + Sync + 'static,
    {
        Self {
            container,
            ticker,
            build: Box::new(build),
            theme_aware: true,
            scheme: None,
            handle: None,
            restarts: 0,
        }
    }

    /// Host for a built-in preset, optionally with a fixed seed
    pub fn for_preset(
        preset: Preset,
        container: Arc<dyn Container>,
        ticker: Arc<dyn Ticker>,
        seed: Option<u64>,
    ) -> Self {
        let mut host = Self::new(container, ticker, move |scheme| {
            preset.config(scheme).with_optional_seed(seed)
        });
        host.theme_aware = preset.is_theme_aware();
        host
    }

    /// Start the animation for `scheme`, replacing any running instance
    pub fn mount(&mut self, scheme: ColorScheme) {
        self.unmount();
        let config = (self.build)(scheme);
        self.handle = Some(start(
            config,
            Arc::clone(&self.container),
            Arc::clone(&self.ticker),
        ));
        self.scheme = Some(scheme);
    }

    /// React to a resolved scheme change. Returns true if the animation restarted.
    pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
        if self.handle.is_none() || self.scheme == Some(scheme) {
            return false;
        }
        if !self.theme_aware {
            self.scheme = Some(scheme);
            return false;
        }
        tracing::debug!("restarting animation for {} scheme", scheme);
        self.mount(scheme);
        self.restarts += 1;
        true
    }

    /// Stop the running animation, if any
    pub fn unmount(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
        }
    }

    /// Whether scheme changes restart the animation
    pub fn is_theme_aware(&self) -> bool {
        self.theme_aware
    }

    pub fn is_mounted(&self) -> bool {
        self.handle.is_some()
    }

    /// Latest resolved scheme seen by the host
    pub fn scheme(&self) -> Option<ColorScheme> {
        self.scheme
    }

    pub fn handle(&self) -> Option<&AnimationHandle> {
        self.handle.as_ref()
    }

    /// Number of theme-driven restarts
    pub fn restart_count(&self) -> u64 {
        self.restarts
    }
}

impl Drop for AnimationHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Viewport;
    use crate::ticker::ManualTicker;
    use folio_paint::Size;

    fn host() -> (Arc<Viewport>, Arc<ManualTicker>, AnimationHost) {
        let viewport = Arc::new(Viewport::new(Size::new(200.0, 200.0)));
        let ticker = Arc::new(ManualTicker::new());
        let host = AnimationHost::for_preset(
            Preset::DesignTools,
            viewport.clone(),
            ticker.clone(),
            Some(1),
        );
        (viewport, ticker, host)
    }

    #[test]
    fn test_scheme_change_restarts_once() {
        let (viewport, ticker, mut host) = host();
        host.mount(ColorScheme::Light);
        ticker.advance_by(2);

        assert!(!host.set_scheme(ColorScheme::Light));
        assert!(host.set_scheme(ColorScheme::Dark));
        assert_eq!(host.restart_count(), 1);
        assert_eq!(host.scheme(), Some(ColorScheme::Dark));

        // Only the fresh instance is registered
        assert_eq!(ticker.active_count(), 1);
        assert_eq!(viewport.observer_count(), 1);
        assert_eq!(host.handle().map(|h| h.frames_rendered()), Some(0));
    }

    #[test]
    fn test_scheme_blind_preset_keeps_running() {
        let viewport = Arc::new(Viewport::new(Size::new(200.0, 200.0)));
        let ticker = Arc::new(ManualTicker::new());
        let mut host = AnimationHost::for_preset(
            Preset::ProfileBubbles,
            viewport.clone(),
            ticker.clone(),
            Some(1),
        );
        assert!(!host.is_theme_aware());
        host.mount(ColorScheme::Light);
        ticker.advance_by(10);

        assert!(!host.set_scheme(ColorScheme::Dark));
        assert_eq!(host.restart_count(), 0);
        assert_eq!(host.scheme(), Some(ColorScheme::Dark));
        assert_eq!(host.handle().map(|h| h.frames_rendered()), Some(10));
        assert_eq!(ticker.active_count(), 1);
        assert_eq!(viewport.observer_count(), 1);
    }

    #[test]
    fn test_set_scheme_before_mount_is_ignored() {
        let (_viewport, ticker, mut host) = host();
        assert!(!host.set_scheme(ColorScheme::Dark));
        assert!(!host.is_mounted());
        assert_eq!(ticker.active_count(), 0);
    }

    #[test]
    fn test_drop_unmounts() {
        let (viewport, ticker, mut host) = host();
        host.mount(ColorScheme::Dark);
        drop(host);
        assert_eq!(ticker.active_count(), 0);
        assert_eq!(viewport.observer_count(), 0);
    }
}
