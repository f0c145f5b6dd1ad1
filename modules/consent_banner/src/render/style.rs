//! Stylesheet generation from resolved options
//!
//! The stylesheet is assembled from a declarative rule table: one section
//! per breakpoint, each section a list of (selector, declarations) pairs
//! whose values come from the responsive resolver. Presentation data
//! stays in the table; the emitter below just walks it.

use super::escape::css_value;
use crate::config::Config;
use crate::contract::{
    BannerPosition, ButtonLayout, ContentDirection, Device, SettingsMap, TextAlign,
};
use crate::domain::resolve::{
    flag_or, number_or, text_or, BANNER_PADDING_V, BORDER_WIDTH, BUTTON_PADDING_H,
    BUTTON_PADDING_V, BUTTON_RADIUS, BUTTON_SIZE, TEXT_SIZE, TITLE_SIZE,
};

const TABLET_MEDIA: &str = "@media (max-width: 1024px) and (min-width: 768px)";
const MOBILE_MEDIA: &str = "@media (max-width: 767px)";

/// One CSS rule in the table.
struct Rule {
    selector: &'static str,
    decls: Vec<(&'static str, String)>,
}

impl Rule {
    fn new(selector: &'static str) -> Self {
        Self {
            selector,
            decls: Vec::new(),
        }
    }

    fn decl(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((property, value.into()));
        self
    }

    fn decl_if(self, condition: bool, property: &'static str, value: impl Into<String>) -> Self {
        if condition {
            self.decl(property, value)
        } else {
            self
        }
    }
}

/// Per-breakpoint layout choices read from the options map.
struct Layout {
    direction: ContentDirection,
    buttons: ButtonLayout,
}

impl Layout {
    fn at(settings: &SettingsMap, device: Device) -> Self {
        let direction_key = format!("content_direction_{}", device.suffix());
        let layout_key = format!("button_layout_{}", device.suffix());
        let direction_default = match device {
            Device::Mobile => ContentDirection::Column,
            _ => ContentDirection::Row,
        };
        let layout_default = match device {
            Device::Mobile => ButtonLayout::Vertical,
            _ => ButtonLayout::Horizontal,
        };
        Self {
            direction: settings
                .get(&direction_key)
                .and_then(|v| v.as_text())
                .and_then(ContentDirection::parse)
                .unwrap_or(direction_default),
            buttons: settings
                .get(&layout_key)
                .and_then(|v| v.as_text())
                .and_then(ButtonLayout::parse)
                .unwrap_or(layout_default),
        }
    }
}

/// Build the full stylesheet for the resolved options.
pub fn stylesheet(settings: &SettingsMap, config: &Config) -> String {
    let position = BannerPosition::parse(text_or(settings, "banner_position", "bottom"))
        .unwrap_or_default();

    let mut out = String::new();
    emit_rules(&mut out, None, &base_rules(settings, position));
    emit_rules(
        &mut out,
        Some(TABLET_MEDIA),
        &breakpoint_rules(settings, position, Device::Tablet),
    );
    emit_rules(
        &mut out,
        Some(MOBILE_MEDIA),
        &breakpoint_rules(settings, position, Device::Mobile),
    );
    out.push_str(&animations(position, config.hide_delay_ms));
    out
}

fn color(settings: &SettingsMap, key: &str, default: &str) -> String {
    css_value(text_or(settings, key, default))
}

/// Base (desktop) section of the rule table.
fn base_rules(settings: &SettingsMap, position: BannerPosition) -> Vec<Rule> {
    let layout = Layout::at(settings, Device::Desktop);
    let border_width = BORDER_WIDTH.value(settings, Device::Desktop);
    let border_color = color(settings, "border_color", "#E1195B");
    let font_family = css_value(text_or(settings, "font_family", "inherit"));
    let padding_v = BANNER_PADDING_V.value(settings, Device::Desktop);

    let mut rules = vec![Rule::new(".cb-banner")
        .decl("position", "fixed")
        .decl("background", color(settings, "banner_bg_color", "#ffffff"))
        .decl_if(
            flag_or(settings, "box_shadow", true),
            "box-shadow",
            "0 4px 20px rgba(0,0,0,0.15)",
        )
        .decl_if(!position.is_card(), "padding", format!("{padding_v}px 20px"))
        .decl("z-index", "999999")
        .decl_if(font_family != "inherit", "font-family", font_family)];

    match position {
        BannerPosition::Top => rules.push(
            Rule::new(".cb-banner.cb-position-top")
                .decl("top", "0")
                .decl("left", "0")
                .decl("right", "0")
                .decl("border-bottom", format!("{border_width}px solid {border_color}"))
                .decl("animation", "cbSlideDown 0.5s ease-out"),
        ),
        BannerPosition::Bottom => rules.push(
            Rule::new(".cb-banner.cb-position-bottom")
                .decl("bottom", "0")
                .decl("left", "0")
                .decl("right", "0")
                .decl("border-top", format!("{border_width}px solid {border_color}"))
                .decl("animation", "cbSlideUp 0.5s ease-out"),
        ),
        BannerPosition::BottomLeft | BannerPosition::BottomRight => {
            let card_max_width = number_or(settings, "card_max_width", 400);
            let card_radius = number_or(settings, "card_border_radius", 12);
            let (selector, side, animation) = match position {
                BannerPosition::BottomLeft => (
                    ".cb-banner.cb-position-bottom-left",
                    "left",
                    "cbSlideInLeft 0.5s ease-out",
                ),
                _ => (
                    ".cb-banner.cb-position-bottom-right",
                    "right",
                    "cbSlideInRight 0.5s ease-out",
                ),
            };
            rules.push(
                Rule::new(selector)
                    .decl("bottom", "20px")
                    .decl(if side == "left" { "left" } else { "right" }, "20px")
                    .decl("max-width", format!("{card_max_width}px"))
                    .decl("min-width", "300px")
                    .decl("width", "auto")
                    .decl("border", format!("{border_width}px solid {border_color}"))
                    .decl("border-radius", format!("{card_radius}px"))
                    .decl("animation", animation),
            );
        }
    }

    let mut content = Rule::new(".cb-content")
        .decl("display", "flex")
        .decl("align-items", "center")
        .decl("justify-content", "space-between")
        .decl("gap", "20px")
        .decl("flex-direction", layout.direction.as_str());
    if position.is_card() {
        let align = TextAlign::parse(text_or(settings, "card_text_align", "center"))
            .unwrap_or_default();
        let pad_v = number_or(settings, "card_padding_v", 20);
        let pad_h = number_or(settings, "card_padding_h", 20);
        content = content
            .decl("width", "100%")
            .decl("padding", format!("{pad_v}px {pad_h}px"))
            .decl(
                "text-align",
                if layout.direction == ContentDirection::Column {
                    "center"
                } else {
                    align.as_str()
                },
            );
    } else {
        content = content
            .decl("max-width", "1200px")
            .decl("margin", "0 auto")
            .decl_if(
                layout.direction == ContentDirection::Column,
                "text-align",
                "center",
            );
    }
    rules.push(content);

    rules.push(Rule::new(".cb-text").decl("flex", "1"));
    rules.push(
        Rule::new(".cb-text p")
            .decl("margin", "0")
            .decl("line-height", "1.6"),
    );

    rules.push(
        Rule::new(".cb-title")
            .decl("font-size", format!("{}px", TITLE_SIZE.value(settings, Device::Desktop)))
            .decl("color", color(settings, "title_color", "#222222"))
            .decl("font-weight", "700"),
    );
    rules.push(
        Rule::new(".cb-message")
            .decl("font-size", format!("{}px", TEXT_SIZE.value(settings, Device::Desktop)))
            .decl("color", color(settings, "text_color", "#333333")),
    );
    rules.push(
        Rule::new(".cb-link")
            .decl("color", color(settings, "link_color", "#E1195B"))
            .decl("text-decoration", "underline")
            .decl("font-weight", "500"),
    );
    rules.push(
        Rule::new(".cb-link:hover")
            .decl("color", color(settings, "link_hover_color", "#48144A")),
    );

    let gap = if position.is_card() {
        number_or(settings, "card_button_gap", 10)
    } else {
        10
    };
    rules.push(
        Rule::new(".cb-buttons")
            .decl("display", "flex")
            .decl("gap", format!("{gap}px"))
            .decl("flex-shrink", "0")
            .decl(
                "flex-direction",
                match layout.buttons {
                    ButtonLayout::Vertical => "column",
                    ButtonLayout::Horizontal => "row",
                },
            )
            .decl_if(layout.buttons == ButtonLayout::Vertical, "width", "100%")
            .decl_if(
                layout.buttons == ButtonLayout::Vertical,
                "max-width",
                "400px",
            )
            .decl_if(
                layout.direction == ContentDirection::Column,
                "margin",
                "0 auto",
            ),
    );

    rules.push(button_rule(settings, Device::Desktop, layout.buttons));

    rules.push(
        Rule::new(".cb-accept")
            .decl("background", color(settings, "accept_bg_color", "#E1195B"))
            .decl("color", color(settings, "accept_text_color", "#ffffff")),
    );
    rules.push(
        Rule::new(".cb-accept:hover")
            .decl("background", color(settings, "accept_hover_bg", "#48144A"))
            .decl("color", color(settings, "accept_hover_text", "#ffffff"))
            .decl("transform", "translateY(-2px)")
            .decl("box-shadow", "0 4px 8px rgba(0,0,0,0.2)"),
    );
    rules.push(
        Rule::new(".cb-decline")
            .decl("background", color(settings, "decline_bg_color", "#f5f5f5"))
            .decl("color", color(settings, "decline_text_color", "#666666")),
    );
    rules.push(
        Rule::new(".cb-decline:hover")
            .decl("background", color(settings, "decline_hover_bg", "#e0e0e0"))
            .decl("color", color(settings, "decline_hover_text", "#333333")),
    );

    rules
}

/// Shared button rule for any breakpoint.
fn button_rule(settings: &SettingsMap, device: Device, buttons: ButtonLayout) -> Rule {
    let pad_v = BUTTON_PADDING_V.value(settings, device);
    let pad_h = BUTTON_PADDING_H.value(settings, device);
    let mut rule = Rule::new(".cb-btn")
        .decl("padding", format!("{pad_v}px {pad_h}px"))
        .decl("border-radius", format!("{}px", BUTTON_RADIUS.value(settings, device)))
        .decl("font-size", format!("{}px", BUTTON_SIZE.value(settings, device)));
    if device == Device::Desktop {
        let font_family = css_value(text_or(settings, "font_family", "inherit"));
        rule = rule
            .decl("border", "none")
            .decl("cursor", "pointer")
            .decl("font-weight", number_or(settings, "button_font_weight", 600).to_string())
            .decl("transition", "all 0.3s ease")
            .decl("white-space", "nowrap")
            .decl_if(font_family != "inherit", "font-family", font_family);
    }
    rule.decl_if(buttons == ButtonLayout::Vertical, "width", "100%")
}

/// Tablet/mobile section of the rule table.
fn breakpoint_rules(
    settings: &SettingsMap,
    position: BannerPosition,
    device: Device,
) -> Vec<Rule> {
    let layout = Layout::at(settings, device);
    let padding_v = BANNER_PADDING_V.value(settings, device);

    let mut rules = vec![Rule::new(".cb-banner").decl_if(
        !position.is_card(),
        "padding",
        format!("{padding_v}px 20px"),
    )];

    if position.is_card() && device == Device::Mobile {
        // Cards stretch to the viewport on small screens
        rules.push(
            Rule::new(".cb-banner")
                .decl("left", "10px")
                .decl("right", "10px")
                .decl("bottom", "10px")
                .decl("max-width", "calc(100% - 20px)")
                .decl("min-width", "auto"),
        );
    }

    rules.push(
        Rule::new(".cb-content")
            .decl("flex-direction", layout.direction.as_str())
            .decl_if(
                layout.direction == ContentDirection::Column,
                "text-align",
                "center",
            ),
    );

    rules.push(
        Rule::new(".cb-buttons")
            .decl(
                "flex-direction",
                match layout.buttons {
                    ButtonLayout::Vertical => "column",
                    ButtonLayout::Horizontal => "row",
                },
            )
            .decl_if(layout.buttons == ButtonLayout::Vertical, "width", "100%")
            .decl_if(
                layout.direction == ContentDirection::Column,
                "margin",
                "0 auto",
            ),
    );

    rules.push(
        Rule::new(".cb-title")
            .decl("font-size", format!("{}px", TITLE_SIZE.value(settings, device))),
    );
    rules.push(
        Rule::new(".cb-message")
            .decl("font-size", format!("{}px", TEXT_SIZE.value(settings, device))),
    );
    rules.push(button_rule(settings, device, layout.buttons));

    rules
}

/// Enter/exit keyframes for the active position, plus the dismiss rule.
fn animations(position: BannerPosition, hide_delay_ms: u64) -> String {
    let (enter, hide, from, to) = match position {
        BannerPosition::Top => ("cbSlideDown", "cbHideTop", "translateY(-100%)", "translateY(0)"),
        BannerPosition::Bottom => ("cbSlideUp", "cbHideBottom", "translateY(100%)", "translateY(0)"),
        BannerPosition::BottomLeft => {
            ("cbSlideInLeft", "cbHideLeft", "translateX(-100%)", "translateX(0)")
        }
        BannerPosition::BottomRight => {
            ("cbSlideInRight", "cbHideRight", "translateX(100%)", "translateX(0)")
        }
    };
    format!(
        "@keyframes {enter} {{\n  from {{ transform: {from}; opacity: 0; }}\n  to {{ transform: {to}; opacity: 1; }}\n}}\n\
         @keyframes {hide} {{\n  from {{ transform: {to}; opacity: 1; }}\n  to {{ transform: {from}; opacity: 0; }}\n}}\n\
         .cb-banner.cb-hide {{\n  animation: {hide} {hide_delay_ms}ms ease-out forwards;\n}}\n"
    )
}

fn emit_rules(out: &mut String, media: Option<&str>, rules: &[Rule]) {
    let indent = if media.is_some() { "  " } else { "" };
    if let Some(query) = media {
        out.push_str(query);
        out.push_str(" {\n");
    }
    for rule in rules {
        if rule.decls.is_empty() {
            continue;
        }
        out.push_str(indent);
        out.push_str(rule.selector);
        out.push_str(" {\n");
        for (property, value) in &rule.decls {
            out.push_str(indent);
            out.push_str("  ");
            out.push_str(property);
            out.push_str(": ");
            out.push_str(value);
            out.push_str(";\n");
        }
        out.push_str(indent);
        out.push_str("}\n");
    }
    if media.is_some() {
        out.push_str("}\n");
    }
}
