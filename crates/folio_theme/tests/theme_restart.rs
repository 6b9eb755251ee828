use folio_animation::{AnimationHost, ManualTicker, Preset, Viewport};
use folio_paint::{PaintCommand, Size};
use folio_theme::{
    ColorScheme, MemoryStore, RootStyle, SystemSchemeSignal, ThemePreference, ThemeResolver,
};
use std::sync::{Arc, Mutex};

fn label_colors(host: &AnimationHost) -> Vec<String> {
    let surface = host.handle().and_then(|h| h.surface()).unwrap();
    let surface = surface.lock().unwrap();
    surface
        .commands()
        .iter()
        .filter_map(|c| match c {
            PaintCommand::DrawText { color, .. } => Some(color.to_css_hex()),
            _ => None,
        })
        .collect()
}

#[test]
fn theme_aware_animation_restarts_on_resolved_change() {
    let os = Arc::new(SystemSchemeSignal::new(ColorScheme::Light));
    let resolver = ThemeResolver::new(
        Arc::new(MemoryStore::new()),
        os.clone(),
        Arc::new(RootStyle::new()),
    );

    let viewport = Arc::new(Viewport::new(Size::new(300.0, 300.0)));
    let ticker = Arc::new(ManualTicker::new());
    let host = Arc::new(Mutex::new(AnimationHost::for_preset(
        Preset::DesignTools,
        viewport.clone(),
        ticker.clone(),
        None,
    )));
    host.lock().unwrap().mount(resolver.resolved());

    let host_clone = host.clone();
    resolver.subscribe(move |scheme| {
        host_clone.lock().unwrap().set_scheme(*scheme);
    });

    ticker.advance();
    assert!(label_colors(&host.lock().unwrap())
        .iter()
        .all(|c| c == "#374151"));

    // OS flips while following the system
    os.set(ColorScheme::Dark);
    ticker.advance();
    {
        let host = host.lock().unwrap();
        assert_eq!(host.restart_count(), 1);
        assert_eq!(host.scheme(), Some(ColorScheme::Dark));
        assert!(label_colors(&host).iter().all(|c| c == "#e5e7eb"));
    }

    // Explicit dark resolves to the same scheme: no restart
    resolver.set_preference(ThemePreference::Dark);
    assert_eq!(host.lock().unwrap().restart_count(), 1);

    resolver.set_preference(ThemePreference::Light);
    assert_eq!(host.lock().unwrap().restart_count(), 2);

    // Exactly one live instance throughout
    assert_eq!(ticker.active_count(), 1);
    assert_eq!(viewport.observer_count(), 1);

    host.lock().unwrap().unmount();
    assert_eq!(ticker.active_count(), 0);
    assert_eq!(viewport.observer_count(), 0);
}
