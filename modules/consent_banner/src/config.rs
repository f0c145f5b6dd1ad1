//! Configuration for the consent banner module

use serde::Deserialize;

/// Consent banner configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the consent cookie written by the browser client
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Option-store key the settings map is persisted under
    #[serde(default = "default_options_key")]
    pub options_key: String,

    /// Delay before the dismissed banner is removed from layout,
    /// matching the exit-animation length (milliseconds)
    #[serde(default = "default_hide_delay_ms")]
    pub hide_delay_ms: u64,

    /// Privacy-policy URL supplied by the host; the "Learn more" link is
    /// omitted when unset
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            options_key: default_options_key(),
            hide_delay_ms: default_hide_delay_ms(),
            privacy_policy_url: None,
        }
    }
}

fn default_cookie_name() -> String {
    "consent_banner_choice".to_string()
}

fn default_options_key() -> String {
    "consent_banner_options".to_string()
}

fn default_hide_delay_ms() -> u64 {
    500
}
