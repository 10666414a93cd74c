//! Selector visibility for the chosen filter mode.

use serde::Serialize;

use crate::models::FilterMode;

/// CSS `display` value of a selector container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Block,
    None,
}

impl Visibility {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Visibility::Block
        } else {
            Visibility::None
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, Visibility::Block)
    }
}

/// Outputs of [`toggle_dropdowns`].
///
/// Both selector values are always `None`: changing the filter mode clears
/// any earlier selection, including the one in the selector that stays hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorState {
    pub country_display: Visibility,
    pub year_display: Visibility,
    pub country: Option<String>,
    pub year: Option<u16>,
}

impl SelectorState {
    pub fn country_visible(&self) -> bool {
        self.country_display.is_visible()
    }

    pub fn year_visible(&self) -> bool {
        self.year_display.is_visible()
    }
}

/// Show the selector that matches `mode` and reset both selections.
pub fn toggle_dropdowns(mode: FilterMode) -> SelectorState {
    SelectorState {
        country_display: Visibility::from_visible(mode == FilterMode::Country),
        year_display: Visibility::from_visible(mode == FilterMode::Year),
        country: None,
        year: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table() {
        let cases = [
            (FilterMode::All, false, false),
            (FilterMode::Country, true, false),
            (FilterMode::Year, false, true),
        ];

        for (mode, country, year) in cases {
            let state = toggle_dropdowns(mode);
            assert_eq!(state.country_visible(), country, "country selector for {mode}");
            assert_eq!(state.year_visible(), year, "year selector for {mode}");
        }
    }

    #[test]
    fn test_never_both_visible() {
        for mode in FilterMode::ALL {
            let state = toggle_dropdowns(mode);
            assert!(!(state.country_visible() && state.year_visible()));
        }
    }

    #[test]
    fn test_always_resets_values() {
        for mode in FilterMode::ALL {
            let state = toggle_dropdowns(mode);
            assert!(state.country.is_none());
            assert!(state.year.is_none());
        }
    }

    #[test]
    fn test_display_serializes_as_css() {
        let json = serde_json::to_value(toggle_dropdowns(FilterMode::Country)).unwrap();
        assert_eq!(json["country_display"], "block");
        assert_eq!(json["year_display"], "none");
        assert!(json["country"].is_null());
    }
}
