//! Display-rule evaluation
//!
//! Decides whether the banner renders on the current page. Total over its
//! domain: an unparsable stored mode already degraded to `AllPages` in the
//! sanitizer, and empty page lists degrade to "show everywhere" - a
//! documented fallback, not a bug.

use super::resolve::{pages_or, text_or};
use crate::contract::{DisplayMode, PageView, SettingsMap};

/// Evaluate a display rule against a page identity.
pub fn should_display(
    mode: DisplayMode,
    current_page: u64,
    selected: &[u64],
    excluded: &[u64],
    is_homepage: bool,
) -> bool {
    match mode {
        DisplayMode::AllPages => true,
        DisplayMode::HomepageOnly => is_homepage,
        DisplayMode::AllExceptHomepage => !is_homepage,
        DisplayMode::SpecificPages => selected.is_empty() || selected.contains(&current_page),
        DisplayMode::ExcludePages => excluded.is_empty() || !excluded.contains(&current_page),
    }
}

/// Evaluate the stored display rule for a page view.
///
/// A missing or unrecognized stored mode fails open to `AllPages`.
pub fn should_display_for(settings: &SettingsMap, page: PageView) -> bool {
    let mode = DisplayMode::parse(text_or(settings, "display_mode", "all_pages"))
        .unwrap_or(DisplayMode::AllPages);
    let selected = pages_or(settings, "selected_pages");
    let excluded = pages_or(settings, "excluded_pages");

    should_display(mode, page.page_id, selected, excluded, page.is_homepage)
}
