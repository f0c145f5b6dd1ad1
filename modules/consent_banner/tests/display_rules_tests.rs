//! Display-rule evaluation tests

use consent_banner::contract::{DisplayMode, PageView, SettingValue, SettingsMap};
use consent_banner::domain::display::{should_display, should_display_for};

fn page(page_id: u64, is_homepage: bool) -> PageView {
    PageView {
        page_id,
        is_homepage,
    }
}

#[test]
fn all_pages_shows_everywhere() {
    assert!(should_display(DisplayMode::AllPages, 1, &[], &[], true));
    assert!(should_display(DisplayMode::AllPages, 42, &[], &[], false));
}

#[test]
fn homepage_only_follows_the_homepage_flag() {
    assert!(should_display(DisplayMode::HomepageOnly, 1, &[], &[], true));
    assert!(!should_display(DisplayMode::HomepageOnly, 42, &[], &[], false));
}

#[test]
fn all_except_homepage_inverts_the_flag() {
    assert!(!should_display(
        DisplayMode::AllExceptHomepage,
        1,
        &[],
        &[],
        true
    ));
    assert!(should_display(
        DisplayMode::AllExceptHomepage,
        42,
        &[],
        &[],
        false
    ));
}

#[test]
fn specific_pages_matches_the_selection() {
    let selected = [2, 5];
    assert!(should_display(
        DisplayMode::SpecificPages,
        5,
        &selected,
        &[],
        false
    ));
    assert!(!should_display(
        DisplayMode::SpecificPages,
        9,
        &selected,
        &[],
        false
    ));
}

#[test]
fn empty_selection_shows_everywhere() {
    // An admin picking "specific pages" without choosing any falls back
    // to showing the banner rather than silently disabling it.
    assert!(should_display(DisplayMode::SpecificPages, 9, &[], &[], false));
    assert!(should_display(DisplayMode::ExcludePages, 9, &[], &[], false));
}

#[test]
fn exclude_pages_hides_only_the_excluded() {
    let excluded = [2, 5];
    assert!(!should_display(
        DisplayMode::ExcludePages,
        5,
        &[],
        &excluded,
        false
    ));
    assert!(should_display(
        DisplayMode::ExcludePages,
        9,
        &[],
        &excluded,
        false
    ));
}

#[test]
fn stored_mode_drives_evaluation() {
    let mut settings = SettingsMap::new();
    settings.insert(
        "display_mode".to_string(),
        SettingValue::Text("homepage_only".to_string()),
    );

    assert!(should_display_for(&settings, page(1, true)));
    assert!(!should_display_for(&settings, page(42, false)));
}

#[test]
fn unrecognized_stored_mode_fails_open() {
    let mut settings = SettingsMap::new();
    settings.insert(
        "display_mode".to_string(),
        SettingValue::Text("everywhere".to_string()),
    );

    assert!(should_display_for(&settings, page(42, false)));
}

#[test]
fn missing_mode_defaults_to_all_pages() {
    let settings = SettingsMap::new();
    assert!(should_display_for(&settings, page(42, false)));
}

#[test]
fn stored_page_lists_are_honored() {
    let mut settings = SettingsMap::new();
    settings.insert(
        "display_mode".to_string(),
        SettingValue::Text("specific_pages".to_string()),
    );
    settings.insert(
        "selected_pages".to_string(),
        SettingValue::Pages(vec![2, 5]),
    );

    assert!(should_display_for(&settings, page(2, false)));
    assert!(!should_display_for(&settings, page(9, false)));
}
