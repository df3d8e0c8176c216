//! The color theme enumeration for the editor pages.
//!
//! Theme names form a closed set that must match the CSS blocks shipped with
//! the host pages exactly; anything else found in storage is discarded in
//! favor of the default.

/// A valid color theme. `Mocha` is the default for missing or invalid
/// persisted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Mocha,
    Latte,
    Frappe,
    Macchiato,
    Vanilla,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Mocha,
        Theme::Latte,
        Theme::Frappe,
        Theme::Macchiato,
        Theme::Vanilla,
    ];

    /// Key under which the selection is persisted in local storage.
    pub const STORAGE_KEY: &'static str = "ctp-theme";

    /// Document-root attribute the stylesheet keys off.
    pub const ROOT_ATTRIBUTE: &'static str = "data-ctp-theme";

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Mocha => "mocha",
            Theme::Latte => "latte",
            Theme::Frappe => "frappe",
            Theme::Macchiato => "macchiato",
            Theme::Vanilla => "vanilla",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Maps a persisted value (possibly missing, possibly tampered with) to
    /// the theme to apply.
    pub fn resolve(saved: Option<&str>) -> Theme {
        saved.and_then(Theme::from_name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_resolves_to_mocha() {
        assert_eq!(Theme::resolve(None), Theme::Mocha);
    }

    #[test]
    fn unknown_value_resolves_to_mocha() {
        assert_eq!(Theme::resolve(Some("evil")), Theme::Mocha);
    }

    #[test]
    fn valid_value_resolves_to_itself() {
        assert_eq!(Theme::resolve(Some("latte")), Theme::Latte);
    }

    #[test]
    fn names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn name_matching_is_exact() {
        assert_eq!(Theme::from_name("Latte"), None);
        assert_eq!(Theme::from_name(" latte"), None);
    }
}
