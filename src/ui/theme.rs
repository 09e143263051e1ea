//! Theme system for the portfolio
//! Supports both dark and light modes with a consistent blue accent
//!
//! Revealed elements fade by alpha: every style that can be revealed takes an
//! `opacity` and multiplies it into its colors.

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Font, Shadow, Theme, Vector};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const SEMIBOLD: Font = Font {
    weight: Weight::Semibold,
    ..Font::DEFAULT
};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x111827);
    pub const SECTION: Color = color!(0x1f2937);
    pub const CARD: Color = color!(0x1f2937);
    pub const CARD_RAISED: Color = color!(0x374151);
    pub const PLACEHOLDER: Color = color!(0x374151);
    pub const BORDER: Color = color!(0x1f2937);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0xd1d5db);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SECTION: Color = color!(0xf9fafb);
    pub const CARD: Color = color!(0xffffff);
    pub const CARD_RAISED: Color = color!(0xffffff);
    pub const PLACEHOLDER: Color = color!(0xe5e7eb);
    pub const BORDER: Color = color!(0xe5e7eb);
    pub const TEXT_MUTED: Color = color!(0x6b7280);
    pub const TEXT_SECONDARY: Color = color!(0x4b5563);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

/// Primary accent color (same for both modes)
pub const PRIMARY: Color = color!(0x2563eb);

/// Hover state for the accent
pub const PRIMARY_HOVER: Color = color!(0x1d4ed8);

/// Confirmation accent
pub const SUCCESS: Color = color!(0x16a34a);

/// Secondary dark button
pub const GRAPHITE: Color = color!(0x1f2937);
pub const GRAPHITE_HOVER: Color = color!(0x374151);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Alternate section band (skills)
pub fn section_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SECTION
    } else {
        light::SECTION
    }
}

pub fn card_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD
    } else {
        light::CARD
    }
}

/// Card sitting on the alternate section band
pub fn card_raised_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::CARD_RAISED
    } else {
        light::CARD_RAISED
    }
}

/// Image placeholder block
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::PLACEHOLDER
    } else {
        light::PLACEHOLDER
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Multiply a color's alpha by `opacity`
pub fn fade(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

/// Translucent accent used behind tags (`primary/10`)
pub fn primary_tint(opacity: f32) -> Color {
    fade(PRIMARY, 0.1 * opacity)
}

fn card_shadow(theme: &Theme, opacity: f32) -> Shadow {
    let alpha = if is_dark(theme) { 0.4 } else { 0.1 };
    Shadow {
        color: Color::from_rgba(0.0, 0.0, 0.0, alpha * opacity),
        offset: Vector::new(0.0, 4.0),
        blur_radius: 12.0,
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Fixed navbar with a bottom hairline
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(background(theme), 0.95))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

/// Alternate band behind the skills grid
pub fn section_band(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(section_bg(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Footer with a top hairline
pub fn footer(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(if is_dark(theme) {
            dark::BACKGROUND
        } else {
            light::BACKGROUND
        })),
        text_color: Some(text_secondary(theme)),
        border: Border {
            width: 1.0,
            color: border_color(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Card surface at the given reveal opacity
pub fn card(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(card_bg(theme), opacity))),
        text_color: Some(fade(text_primary(theme), opacity)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: fade(border_color(theme), opacity),
        },
        shadow: card_shadow(theme, opacity),
        ..Default::default()
    }
}

/// Skill tile on the alternate band
pub fn skill_tile(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(card_raised_bg(theme))),
        text_color: Some(text_secondary(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        shadow: card_shadow(theme, 0.8),
        ..Default::default()
    }
}

/// Image placeholder at the top of a card
pub fn placeholder(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(placeholder_bg(theme), opacity))),
        border: Border {
            radius: iced::border::Radius {
                top_left: 12.0,
                top_right: 12.0,
                bottom_right: 0.0,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Small rounded tag chip
pub fn tag_chip(_theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(primary_tint(opacity))),
        text_color: Some(fade(PRIMARY, opacity)),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Solid category badge over an image
pub fn category_badge(_theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(fade(PRIMARY, opacity))),
        text_color: Some(fade(Color::WHITE, opacity)),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary call-to-action
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(PRIMARY)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(PRIMARY_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Dark secondary call-to-action (GitHub, code links)
pub fn graphite_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(GRAPHITE)),
        text_color: Color::WHITE,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(GRAPHITE_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Fade a finished button style for a revealed element
pub fn fade_button(style: button::Style, opacity: f32) -> button::Style {
    let background = style.background.map(|background| match background {
        Background::Color(color) => Background::Color(fade(color, opacity)),
        other => other,
    });
    button::Style {
        background,
        text_color: fade(style.text_color, opacity),
        ..style
    }
}

/// Navbar link, accented while its page is active
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let text_color = match (active, status) {
            (true, _) => PRIMARY,
            (false, button::Status::Hovered) => PRIMARY,
            (false, _) => text_secondary(theme),
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Text link that turns accent on hover
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => PRIMARY,
        _ => text_secondary(theme),
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        ..Default::default()
    }
}

/// Accent text button inside a revealed card
pub fn card_link(opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let base = match status {
            button::Status::Hovered => PRIMARY_HOVER,
            _ => PRIMARY,
        };
        button::Style {
            background: None,
            text_color: fade(base, opacity),
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Round toggle in the navbar
pub fn toggle_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let background = match (active, status) {
            (true, _) => primary_tint(1.5),
            (false, button::Status::Hovered) => section_bg(theme),
            (false, _) => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: if active { PRIMARY } else { text_secondary(theme) },
            border: Border {
                radius: 999.0.into(),
                width: 1.0,
                color: border_color(theme),
            },
            ..Default::default()
        }
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Slim scrollbar for the page
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(fade(text_muted(theme), 0.5)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(section_bg(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
