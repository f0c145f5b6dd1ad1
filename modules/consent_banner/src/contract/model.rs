//! Contract models for the consent banner
//!
//! These models are transport-agnostic and used for in-process communication.
//! NO serde derives - these are pure domain types.

use std::collections::HashMap;

/// A single stored option value.
///
/// The option store persists a flat map of these; the resolver and the
/// renderer never assume a key is present or well-typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    /// Plain text (titles, labels, font stacks, hex colors)
    Text(String),
    /// Non-negative integer (sizes, paddings, radii, durations)
    Number(u32),
    /// Boolean toggle
    Flag(bool),
    /// List of page ids
    Pages(Vec<u64>),
}

impl SettingValue {
    /// Whether the value counts as "present" for fallback resolution.
    /// An empty text value behaves like an absent key.
    pub fn is_empty(&self) -> bool {
        matches!(self, SettingValue::Text(s) if s.is_empty())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            SettingValue::Number(n) => Some(*n),
            // numeric options round-trip through form payloads as text
            SettingValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            SettingValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_pages(&self) -> Option<&[u64]> {
        match self {
            SettingValue::Pages(ids) => Some(ids),
            _ => None,
        }
    }
}

/// The flat options map the store persists as an opaque document.
pub type SettingsMap = HashMap<String, SettingValue>;

/// Device breakpoint for responsive option resolution.
///
/// Desktop covers viewports above 1024px, tablet 768-1024px and
/// mobile below 768px.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

    /// Key suffix used for device-scoped option variants.
    pub fn suffix(self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Mobile => "mobile",
        }
    }
}

/// Where the banner is anchored on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerPosition {
    Top,
    #[default]
    Bottom,
    /// Card pinned to the bottom-left corner
    BottomLeft,
    /// Card pinned to the bottom-right corner
    BottomRight,
}

impl BannerPosition {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "bottom-left" => Some(Self::BottomLeft),
            "bottom-right" => Some(Self::BottomRight),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Corner cards get borders, rounded corners and a width cap.
    pub fn is_card(self) -> bool {
        matches!(self, Self::BottomLeft | Self::BottomRight)
    }
}

/// Flex direction of the banner content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentDirection {
    #[default]
    Row,
    Column,
}

impl ContentDirection {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "row" => Some(Self::Row),
            "column" => Some(Self::Column),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "column",
        }
    }
}

/// Arrangement of the accept/decline buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonLayout {
    #[default]
    Horizontal,
    Vertical,
}

impl ButtonLayout {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Text alignment inside card banners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Which pages the banner renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    AllPages,
    HomepageOnly,
    AllExceptHomepage,
    SpecificPages,
    ExcludePages,
}

impl DisplayMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all_pages" => Some(Self::AllPages),
            "homepage_only" => Some(Self::HomepageOnly),
            "all_except_homepage" => Some(Self::AllExceptHomepage),
            "specific_pages" => Some(Self::SpecificPages),
            "exclude_pages" => Some(Self::ExcludePages),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AllPages => "all_pages",
            Self::HomepageOnly => "homepage_only",
            Self::AllExceptHomepage => "all_except_homepage",
            Self::SpecificPages => "specific_pages",
            Self::ExcludePages => "exclude_pages",
        }
    }
}

/// The visitor's stored consent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsentState {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl ConsentState {
    /// Parse a consent cookie value. An unrecognized value still counts
    /// as a decision already made, so the banner stays hidden.
    pub fn from_cookie_value(value: &str) -> Self {
        match value {
            "declined" => Self::Declined,
            _ => Self::Accepted,
        }
    }
}

/// Identity of the page a render request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub page_id: u64,
    pub is_homepage: bool,
}

/// A host page, used only to populate the admin page picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: u64,
    pub title: String,
}
