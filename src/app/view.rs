// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message};
use crate::render::DrawnImage;
use crate::ui::drop_target::{self, Frame, ViewContext};
use iced::Element;

impl App {
    pub(super) fn render(&self) -> Element<'_, Message> {
        let frame = self
            .frame
            .as_ref()
            .zip(self.engine.drawn(crate::domain::SurfaceId::VIEWPORT))
            .map(|(handle, drawn)| Frame {
                handle,
                size: drawn.display_size(),
                info: self.image_info(drawn),
            });

        drop_target::view(ViewContext {
            i18n: &self.i18n,
            frame,
            hovering: self.gesture.is_hovering(),
            loading: self.in_flight > 0,
            background: self.background,
        })
    }

    fn image_info(&self, drawn: &DrawnImage) -> String {
        let image = &drawn.image;
        let modality = image.description.modality.as_deref().unwrap_or("?");
        let columns = image.columns.to_string();
        let rows = image.rows.to_string();
        let width = format!("{:.0}", drawn.viewport.voi.width);
        let center = format!("{:.0}", drawn.viewport.voi.center);
        self.i18n.tr_with_args(
            "image-info",
            &[
                ("modality", modality),
                ("columns", columns.as_str()),
                ("rows", rows.as_str()),
                ("width", width.as_str()),
                ("center", center.as_str()),
            ],
        )
    }
}
