// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::DecodedImage;
use crate::drop_handler::DropTicket;
use crate::error::Error;
use iced::{Point, Size};
use std::path::PathBuf;
use std::sync::Arc;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A file is being dragged over the window (drag-over).
    FileHovered(PathBuf),
    /// A file was dropped on the window; multi-file drops arrive one per file.
    FileDropped(PathBuf),
    /// Dragged files left the window.
    FilesHoveredLeft,
    CursorMoved(Point),
    /// The cursor left the window; its last position is no longer meaningful.
    CursorLeft,
    WindowResized(Size),
    /// The image of an in-flight drop finished resolving.
    DropResolved {
        ticket: DropTicket,
        result: Result<Arc<DecodedImage>, Error>,
    },
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional DICOM file opened as if dropped on the viewport at start-up.
    pub file_path: Option<PathBuf>,
}
