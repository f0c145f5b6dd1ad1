//! Rendering layer - markup, stylesheet and browser client

pub mod escape;
pub mod markup;
pub mod script;
pub mod style;

use crate::config::Config;
use crate::contract::SettingsMap;

/// Render the complete banner fragment: markup, scoped stylesheet and
/// the inline consent client.
pub fn banner(settings: &SettingsMap, config: &Config) -> String {
    let mut out = markup::banner_html(settings, config);
    out.push_str("<style>\n");
    out.push_str(&style::stylesheet(settings, config));
    out.push_str("</style>\n<script>\n");
    out.push_str(&script::consent_script(&config.cookie_name, config.hide_delay_ms));
    out.push_str("</script>\n");
    out
}
