// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Drag-over and drop events are filtered here (hit test, gesture coalescing)
//! before the remaining drops enter the [`DropPipeline`](crate::drop_handler::DropPipeline).

use super::{App, Message};
use crate::domain::SurfaceId;
use crate::drop_handler::{self, DropEvent, DropOutcome, DropStart, DropTicket, PendingDrop, Propagation};
use crate::ui::drop_target;
use crate::ui::state::DropDecision;
use iced::widget::image;
use iced::{Point, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

/// Returns true if a drop at `cursor` lands on the drop target.
///
/// An unknown cursor position accepts the drop: several platforms stop
/// reporting motion while the OS drives a drag.
fn is_in_drop_target(cursor: Option<Point>, window_size: Size) -> bool {
    match cursor {
        Some(position) => drop_target::contains(window_size, position),
        None => true,
    }
}

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FileHovered(path) => {
                self.handle_file_hovered(&path);
                Task::none()
            }
            Message::FileDropped(path) => self.handle_file_dropped(path, Instant::now()),
            Message::FilesHoveredLeft => {
                self.gesture.on_left();
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.cursor_position = Some(position);
                Task::none()
            }
            Message::CursorLeft => {
                self.cursor_position = None;
                Task::none()
            }
            Message::WindowResized(size) => {
                self.handle_window_resized(size);
                Task::none()
            }
            Message::DropResolved { ticket, result } => {
                self.handle_drop_resolved(ticket, result);
                Task::none()
            }
        }
    }

    fn handle_file_hovered(&mut self, path: &std::path::Path) {
        let Propagation::Stop = drop_handler::handle_drag_over();
        log::trace!("dragging {} over the window", path.display());
        // No motion is reported while the OS drives the drag.
        self.cursor_position = None;
        self.gesture.on_hovered();
    }

    fn handle_file_dropped(&mut self, path: PathBuf, now: Instant) -> Task<Message> {
        if self.gesture.on_dropped(now) == DropDecision::Coalesced {
            log::debug!("ignoring additional dropped file {}", path.display());
            return Task::none();
        }
        if !is_in_drop_target(self.cursor_position, self.window_size) {
            log::debug!("ignoring {} dropped outside the drop target", path.display());
            return Task::none();
        }
        self.start_drop(DropEvent::single(path, SurfaceId::VIEWPORT))
    }

    /// Runs the first half of the pipeline and schedules the image resolution.
    pub(super) fn start_drop(&mut self, event: DropEvent) -> Task<Message> {
        let (Propagation::Stop, start) = self.pipeline.begin(&mut self.engine, event);
        match start {
            DropStart::Ignored | DropStart::Failed(_) => Task::none(),
            DropStart::Pending(PendingDrop { ticket, resolve }) => {
                self.in_flight += 1;
                Task::perform(resolve, move |result| Message::DropResolved { ticket, result })
            }
        }
    }

    fn handle_drop_resolved(
        &mut self,
        ticket: DropTicket,
        result: crate::error::Result<std::sync::Arc<crate::domain::DecodedImage>>,
    ) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if let DropOutcome::Drawn(ticket) = self.pipeline.finish(&mut self.engine, ticket, result) {
            if let Some(drawn) = self.engine.drawn(ticket.surface) {
                self.frame = Some(image::Handle::from_rgba(
                    drawn.frame.width(),
                    drawn.frame.height(),
                    drawn.frame.rgba_bytes().to_vec(),
                ));
            }
            self.last_drawn = Some(ticket.file);
        }
    }

    fn handle_window_resized(&mut self, size: Size) {
        self.window_size = size;
        // Only the surface size changes; the drawn image keeps its viewport.
        self.engine
            .resize_surface(SurfaceId::VIEWPORT, drop_target::surface_size(size));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::config::Config;
    use crate::dicom::DicomRsParser;
    use crate::application::port::DicomParser;
    use crate::domain::ImageId;
    use crate::error::Error;
    use crate::test_utils::DicomFixture;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::tempdir;

    fn app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            file_path: None,
        };
        App::from_config(flags, &Config::default()).0
    }

    fn center_of_target(app: &App) -> Point {
        let area = drop_target::bounds(app.window_size);
        Point::new(area.x + area.width / 2.0, area.y + area.height / 2.0)
    }

    #[test]
    fn unknown_cursor_accepts_the_drop() {
        assert!(is_in_drop_target(None, Size::new(800.0, 650.0)));
        assert!(!is_in_drop_target(
            Some(Point::new(5.0, 5.0)),
            Size::new(800.0, 650.0)
        ));
    }

    #[test]
    fn drop_over_the_target_starts_the_pipeline() {
        let mut app = app();
        app.cursor_position = Some(center_of_target(&app));

        let _ = app.handle_file_dropped(PathBuf::from("/tmp/a.dcm"), Instant::now());

        assert_eq!(app.in_flight, 1);
        assert!(app
            .engine
            .surface(SurfaceId::VIEWPORT)
            .is_some_and(|surface| surface.is_enabled()));
    }

    #[test]
    fn drop_outside_the_target_is_ignored() {
        let mut app = app();
        app.cursor_position = Some(Point::new(10.0, 5.0));

        let _ = app.handle_file_dropped(PathBuf::from("/tmp/a.dcm"), Instant::now());

        assert_eq!(app.in_flight, 0);
        assert!(app.engine.surface(SurfaceId::VIEWPORT).map_or(true, |s| !s.is_enabled()));
    }

    #[test]
    fn drag_entering_after_cursor_left_is_not_hit_tested_against_stale_position() {
        let mut app = app();
        let button_row = Point::new(400.0, app.window_size.height - 10.0);
        assert!(!drop_target::contains(app.window_size, button_row));

        let _ = app.update(Message::CursorMoved(button_row));
        let _ = app.update(Message::CursorLeft);
        assert!(app.cursor_position.is_none());
        let _ = app.update(Message::FileHovered(PathBuf::from("/tmp/a.dcm")));
        let _ = app.update(Message::FileDropped(PathBuf::from("/tmp/a.dcm")));

        assert_eq!(app.in_flight, 1);
    }

    #[test]
    fn hovering_clears_the_last_cursor_position() {
        let mut app = app();
        let _ = app.update(Message::CursorMoved(Point::new(10.0, 5.0)));
        let _ = app.update(Message::FileHovered(PathBuf::from("/tmp/a.dcm")));
        assert!(app.cursor_position.is_none());
    }

    #[test]
    fn files_of_one_gesture_start_a_single_drop() {
        let mut app = app();
        let now = Instant::now();
        let _ = app.update(Message::FileHovered(PathBuf::from("/tmp/a.dcm")));
        let _ = app.update(Message::FileHovered(PathBuf::from("/tmp/b.dcm")));

        let _ = app.handle_file_dropped(PathBuf::from("/tmp/a.dcm"), now);
        let _ = app.handle_file_dropped(
            PathBuf::from("/tmp/b.dcm"),
            now + Duration::from_millis(3),
        );

        assert_eq!(app.in_flight, 1);
    }

    #[test]
    fn resolved_drop_is_drawn_and_titled() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("knee.dcm");
        DicomFixture::gray16(2, 2, vec![0, 1, 2, 3]).write(&path);

        let mut app = app();
        let _ = app.handle_file_dropped(path.clone(), Instant::now());
        let image_id = ImageId::new("dicomfile", 0);
        let image = DicomRsParser.parse(&path, image_id.clone()).expect("parses");

        let _ = app.update(Message::DropResolved {
            ticket: DropTicket {
                image_id,
                surface: SurfaceId::VIEWPORT,
                file: path,
            },
            result: Ok(Arc::new(image)),
        });

        assert_eq!(app.in_flight, 0);
        assert!(app.frame.is_some());
        assert_eq!(app.title(), "knee.dcm - DICOM Drop");
    }

    #[test]
    fn failed_resolution_keeps_the_previous_state() {
        let mut app = app();
        let _ = app.handle_file_dropped(PathBuf::from("/tmp/broken.dcm"), Instant::now());

        let _ = app.update(Message::DropResolved {
            ticket: DropTicket {
                image_id: ImageId::new("dicomfile", 0),
                surface: SurfaceId::VIEWPORT,
                file: PathBuf::from("/tmp/broken.dcm"),
            },
            result: Err(Error::Dicom("not a DICOM file".into())),
        });

        assert_eq!(app.in_flight, 0);
        assert!(app.frame.is_none());
        assert_eq!(app.title(), "DICOM Drop");
    }

    #[test]
    fn resize_updates_the_surface_size() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(1000.0, 900.0)));

        let surface = app.engine.surface(SurfaceId::VIEWPORT).expect("known surface");
        assert_eq!(surface.size, drop_target::surface_size(Size::new(1000.0, 900.0)));
    }
}
