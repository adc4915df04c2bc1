/// Light/dark display mode. Lives only for the page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

pub const DARK_MODE_CLASS: &str = "dark-mode";

impl Theme {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn from_dark_class(has_dark_class: bool) -> Self {
        if has_dark_class {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Glyph shown on the toggle button for this mode.
    #[inline]
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌞",
            Theme::Dark => "🌙",
        }
    }
}
