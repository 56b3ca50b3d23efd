// SPDX-License-Identifier: MPL-2.0
//! Container styles for the toolbar and the drop target.

use crate::config::BackgroundTheme;
use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, GRAY_100, GRAY_900},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Flat color behind the drawn image.
#[must_use]
pub fn viewport_background(theme: BackgroundTheme) -> Color {
    match theme {
        BackgroundTheme::Light => GRAY_100,
        BackgroundTheme::Dark => palette::BLACK,
    }
}

/// Toolbar strip above the drop target.
pub fn toolbar_style(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..GRAY_900
            },
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Drop target; outlined with the brand color while files hover over it.
pub fn drop_target_style(
    background: BackgroundTheme,
    hovering: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let outline = if hovering {
            palette::PRIMARY_500
        } else {
            Color {
                a: opacity::TRANSPARENT,
                ..palette::PRIMARY_500
            }
        };
        container::Style {
            background: Some(Background::Color(viewport_background(background))),
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Text color for hints drawn over the viewport background.
#[must_use]
pub fn hint_text_color(background: BackgroundTheme) -> Color {
    match background {
        BackgroundTheme::Light => palette::GRAY_700,
        BackgroundTheme::Dark => palette::GRAY_200,
    }
}
