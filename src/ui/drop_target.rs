// SPDX-License-Identifier: MPL-2.0
//! The page layout: toolbar, drop target and button row.
//!
//! The drop target geometry is computed here once and shared by the view, the
//! drop hit test and the surface size given to the rendering engine.

use crate::config::BackgroundTheme;
use crate::domain::SurfaceSize;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Text};
use iced::{ContentFit, Element, Length, Point, Rectangle, Size};

/// Region of the window that accepts drops, in window coordinates.
#[must_use]
pub fn bounds(window: Size) -> Rectangle {
    let inset = spacing::XS;
    Rectangle {
        x: inset,
        y: sizing::TOOLBAR_HEIGHT + inset,
        width: (window.width - 2.0 * inset).max(0.0),
        height: (window.height - sizing::TOOLBAR_HEIGHT - sizing::BUTTON_ROW_HEIGHT - 2.0 * inset)
            .max(0.0),
    }
}

/// True when `cursor` lies over the drop target.
#[must_use]
pub fn contains(window: Size, cursor: Point) -> bool {
    bounds(window).contains(cursor)
}

/// Size of the drawing surface backing the drop target.
#[must_use]
pub fn surface_size(window: Size) -> SurfaceSize {
    let area = bounds(window);
    SurfaceSize::new(area.width, area.height)
}

/// A drawn frame ready to be shown.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub handle: &'a image::Handle,
    /// On-screen size from the viewport.
    pub size: (f32, f32),
    /// One-line summary shown in the toolbar.
    pub info: String,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub frame: Option<Frame<'a>>,
    pub hovering: bool,
    pub loading: bool,
    pub background: BackgroundTheme,
}

/// Renders the whole page.
pub fn view<'a, Message: Clone + 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let status = if ctx.loading {
        ctx.i18n.tr("loading")
    } else {
        ctx.frame
            .as_ref()
            .map(|frame| frame.info.clone())
            .unwrap_or_default()
    };
    let toolbar = Container::new(Text::new(status).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .style(theme::toolbar_style);

    let content: Element<'a, Message> = match ctx.frame {
        Some(frame) => image(frame.handle.clone())
            .width(Length::Fixed(frame.size.0))
            .height(Length::Fixed(frame.size.1))
            .content_fit(ContentFit::Fill)
            .into(),
        None => {
            let key = if ctx.hovering {
                "drop-hint-active"
            } else {
                "drop-hint"
            };
            Text::new(ctx.i18n.tr(key))
                .size(typography::TITLE_SM)
                .color(theme::hint_text_color(ctx.background))
                .into()
        }
    };
    let target = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .clip(true)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(theme::drop_target_style(ctx.background, ctx.hovering));

    // No press handler: the button is a placeholder.
    let load_button = button(Text::new(ctx.i18n.tr("load-image-button")).size(typography::BODY))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT));
    let buttons = Container::new(Row::new().push(load_button))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::BUTTON_ROW_HEIGHT))
        .padding([0.0, spacing::XS])
        .align_y(Vertical::Center);

    Column::new()
        .push(toolbar)
        .push(Container::new(target).padding(spacing::XS).height(Length::Fill))
        .push(buttons)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
