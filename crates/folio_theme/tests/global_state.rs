//! The global singleton can only be initialized once per process, so this
//! file holds a single test.

use folio_theme::{
    ColorScheme, MemoryStore, RootStyle, SystemSchemeSignal, ThemePreference, ThemeResolver,
    ThemeState, ThemeToggle,
};
use std::sync::Arc;

fn resolver(os: ColorScheme) -> ThemeResolver {
    ThemeResolver::new(
        Arc::new(MemoryStore::new()),
        Arc::new(SystemSchemeSignal::new(os)),
        Arc::new(RootStyle::new()),
    )
}

#[test]
fn global_state_lifecycle() {
    assert!(ThemeState::try_get().is_none());
    let get_before_init = std::panic::catch_unwind(ThemeState::get);
    assert!(get_before_init.is_err());

    assert!(ThemeState::init(resolver(ColorScheme::Dark)));
    assert!(!ThemeState::init(resolver(ColorScheme::Light)));

    let state = ThemeState::get();
    assert_eq!(state.resolver().resolved(), ColorScheme::Dark);

    let toggle = ThemeToggle::from_context(&state.context());
    toggle.cycle();
    assert_eq!(
        ThemeState::get().resolver().get_preference(),
        ThemePreference::Light
    );
}
