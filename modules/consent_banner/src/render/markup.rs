//! Banner markup generation

use super::escape::{html_text, url_attr};
use crate::config::Config;
use crate::contract::{BannerPosition, SettingsMap};
use crate::domain::resolve::{flag_or, number_or, text_or};
use crate::domain::sanitize::{MAX_COOKIE_DURATION, MIN_COOKIE_DURATION};

/// Build the banner's structural markup from resolved options.
///
/// Every option-derived value is escaped for its output context; the
/// consent duration rides on the buttons as a data attribute so the
/// browser client never needs a second round trip.
pub fn banner_html(settings: &SettingsMap, config: &Config) -> String {
    let position = BannerPosition::parse(text_or(settings, "banner_position", "bottom"))
        .unwrap_or_default();
    let title = html_text(text_or(settings, "banner_title", "We use cookies"));
    let message = html_text(text_or(settings, "banner_text", "")).replace('\n', "<br>");
    let accept_label = html_text(text_or(settings, "accept_text", "Accept All Cookies"));
    let duration = number_or(settings, "cookie_duration", 365)
        .clamp(MIN_COOKIE_DURATION, MAX_COOKIE_DURATION);

    let mut out = format!(
        "<div id=\"cb-banner\" class=\"cb-banner cb-position-{}\">\n  <div class=\"cb-content\">\n    <div class=\"cb-text\">\n      <p>\n        <strong class=\"cb-title\">{title}</strong><br>\n        <span class=\"cb-message\">{message}</span>\n",
        position.as_str(),
    );

    if let Some(href) = config
        .privacy_policy_url
        .as_deref()
        .and_then(url_attr)
    {
        out.push_str(&format!(
            "        <a href=\"{href}\" class=\"cb-link\" target=\"_blank\" rel=\"noopener\">Learn more</a>\n"
        ));
    }

    out.push_str("      </p>\n    </div>\n    <div class=\"cb-buttons\">\n");
    out.push_str(&format!(
        "      <button id=\"cb-accept\" class=\"cb-btn cb-accept\" data-duration=\"{duration}\">{accept_label}</button>\n"
    ));

    if flag_or(settings, "show_decline", true) {
        let decline_label = html_text(text_or(settings, "decline_text", "Decline"));
        out.push_str(&format!(
            "      <button id=\"cb-decline\" class=\"cb-btn cb-decline\" data-duration=\"{duration}\">{decline_label}</button>\n"
        ));
    }

    out.push_str("    </div>\n  </div>\n</div>\n");
    out
}
