//! Document root style state
//!
//! The one place the theme system writes outside itself: the root element
//! carries exactly one of the `light`/`dark` classes and a matching
//! `color-scheme` property.

use folio_core::ColorScheme;
use smallvec::SmallVec;
use std::sync::{Arc, Mutex, PoisonError};

/// Root-element style sink
pub trait DocumentStyle: Send + Sync {
    /// Apply a resolved scheme
    fn apply_scheme(&self, scheme: ColorScheme);

    /// Scheme currently applied, if any
    fn applied_scheme(&self) -> Option<ColorScheme>;
}

impl<T: DocumentStyle + ?Sized> DocumentStyle for Arc<T> {
    fn apply_scheme(&self, scheme: ColorScheme) {
        (**self).apply_scheme(scheme)
    }

    fn applied_scheme(&self) -> Option<ColorScheme> {
        (**self).applied_scheme()
    }
}

#[derive(Debug, Default)]
struct RootState {
    classes: SmallVec<[String; 4]>,
    color_scheme: Option<ColorScheme>,
    transitions: u64,
}

/// In-process model of the root element's class list and `color-scheme`
#[derive(Debug, Default)]
pub struct RootStyle {
    state: Mutex<RootState>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root element that already carries some unrelated classes
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let style = Self::new();
        style.lock().classes = classes.into_iter().map(Into::into).collect();
        style
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RootState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn classes(&self) -> Vec<String> {
        self.lock().classes.to_vec()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.lock().classes.iter().any(|c| c == class)
    }

    /// Current `color-scheme` property
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        self.lock().color_scheme
    }

    /// Number of visible scheme changes applied so far
    pub fn transition_count(&self) -> u64 {
        self.lock().transitions
    }

    /// Attributes for the root tag, as written by the early inline script
    ///
    /// ```rust
    /// use folio_core::ColorScheme;
    /// use folio_theme::{DocumentStyle, RootStyle};
    ///
    /// let root = RootStyle::with_classes(["antialiased"]);
    /// root.apply_scheme(ColorScheme::Dark);
    /// assert_eq!(
    ///     root.html_attributes(),
    ///     r#"class="antialiased dark" style="color-scheme: dark""#
    /// );
    /// ```
    pub fn html_attributes(&self) -> String {
        let state = self.lock();
        let mut attrs = format!("class=\"{}\"", state.classes.join(" "));
        if let Some(scheme) = state.color_scheme {
            attrs.push_str(&format!(" style=\"color-scheme: {}\"", scheme));
        }
        attrs
    }
}

impl DocumentStyle for RootStyle {
    fn apply_scheme(&self, scheme: ColorScheme) {
        let mut state = self.lock();
        let class_present = state.classes.iter().any(|c| c == scheme.as_str());
        if state.color_scheme == Some(scheme) && class_present {
            return;
        }

        state.classes.retain(|c| {
            c.as_str() != ColorScheme::Light.as_str() && c.as_str() != ColorScheme::Dark.as_str()
        });
        state.classes.push(scheme.as_str().to_string());
        state.color_scheme = Some(scheme);
        state.transitions += 1;
        tracing::trace!("root style now {}", scheme);
    }

    fn applied_scheme(&self) -> Option<ColorScheme> {
        self.lock().color_scheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_scheme_class() {
        let root = RootStyle::with_classes(["font-sans", "dark"]);
        root.apply_scheme(ColorScheme::Light);
        assert_eq!(root.classes(), vec!["font-sans", "light"]);

        root.apply_scheme(ColorScheme::Dark);
        assert_eq!(root.classes(), vec!["font-sans", "dark"]);
        assert_eq!(root.color_scheme(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_reapplying_same_scheme_is_not_a_transition() {
        let root = RootStyle::new();
        root.apply_scheme(ColorScheme::Dark);
        root.apply_scheme(ColorScheme::Dark);
        assert_eq!(root.transition_count(), 1);
        assert_eq!(root.applied_scheme(), Some(ColorScheme::Dark));
    }

    #[test]
    fn test_html_attributes_before_apply() {
        let root = RootStyle::new();
        assert_eq!(root.html_attributes(), "class=\"\"");
    }
}
