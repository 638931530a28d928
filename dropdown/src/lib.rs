use serde::{Deserialize, Serialize};

/// Whether the tooltip panel is on screen.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }
}

/// A dropdown that shows or hides its tooltip text.
///
/// The widget starts hidden and only `toggle` changes its visibility; there
/// is no auto-hide. The host supplies the tooltip text and reads
/// `rendered_tooltip` to decide what to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    tooltip: String,
    visibility: Visibility,
}

impl Dropdown {
    pub fn new(tooltip: impl Into<String>) -> Self {
        Self {
            tooltip: tooltip.into(),
            visibility: Visibility::Hidden,
        }
    }

    pub fn toggle(&mut self) {
        self.visibility = self.visibility.toggled();
        tracing::trace!(visibility = ?self.visibility, "dropdown toggled");
    }

    pub const fn show(&self) -> bool {
        matches!(self.visibility, Visibility::Visible)
    }

    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }

    /// Host-side update of the tooltip text. Visibility is unchanged.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) {
        self.tooltip = tooltip.into();
    }

    pub fn rendered_tooltip(&self) -> Option<&str> {
        self.show().then_some(self.tooltip.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        for tooltip in ["", "Pick a writer", "a much longer tooltip text"] {
            let dropdown = Dropdown::new(tooltip);

            assert!(!dropdown.show());
            assert_eq!(dropdown.visibility(), Visibility::Hidden);
            assert_eq!(dropdown.rendered_tooltip(), None);
        }
    }

    #[test]
    fn test_toggle_parity() {
        for count in 0..10 {
            let mut dropdown = Dropdown::new("tip");
            for _ in 0..count {
                dropdown.toggle();
            }

            assert_eq!(dropdown.show(), count % 2 == 1, "after {count} toggles");
        }
    }

    #[test]
    fn test_rendered_tooltip_only_when_visible() {
        let mut dropdown = Dropdown::new("Writers we love");

        dropdown.toggle();
        assert_eq!(dropdown.rendered_tooltip(), Some("Writers we love"));

        dropdown.toggle();
        assert_eq!(dropdown.rendered_tooltip(), None);
    }

    #[test]
    fn test_set_tooltip_keeps_visibility() {
        let mut dropdown = Dropdown::new("old");
        dropdown.toggle();

        dropdown.set_tooltip("new");

        assert!(dropdown.show());
        assert_eq!(dropdown.tooltip(), "new");
        assert_eq!(dropdown.rendered_tooltip(), Some("new"));
    }

    #[test]
    fn test_visibility_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&Visibility::Visible).unwrap(),
            r#""visible""#
        );
    }
}
