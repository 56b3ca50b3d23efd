// SPDX-License-Identifier: MPL-2.0
//! The drop pipeline: register the dropped file, enable the target surface,
//! resolve the image, derive a default viewport and draw.
//!
//! Every failure is caught here, logged once at `error` level and turned into
//! [`DropOutcome::Failed`]. Nothing is retried and nothing is cleaned up.
//!
//! The pipeline is split at its only suspension point so it can run inside the
//! iced update loop:
//!
//! ```text
//! begin ──► PendingDrop { ticket, resolve } ──(await resolve)──► finish
//! ```
//!
//! [`DropPipeline::handle`] runs both halves around the await for callers that
//! own the engine across it.

use crate::application::port::{FileRegistry, ImageFuture, RenderingEngine};
use crate::domain::{DecodedImage, ImageId, SurfaceId};
use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Files of one drop gesture and the surface they were dropped on.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEvent {
    pub files: Vec<PathBuf>,
    pub surface: SurfaceId,
}

impl DropEvent {
    #[must_use]
    pub fn new(files: Vec<PathBuf>, surface: SurfaceId) -> Self {
        Self { files, surface }
    }

    /// A drop of a single file.
    #[must_use]
    pub fn single(file: impl Into<PathBuf>, surface: SurfaceId) -> Self {
        Self::new(vec![file.into()], surface)
    }
}

/// What the windowing layer should do with a drag-over or drop event once the
/// handler has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The event is consumed; no default file-open behavior runs.
    Stop,
}

/// Identifies an in-flight drop between [`DropPipeline::begin`] and
/// [`DropPipeline::finish`].
#[derive(Debug, Clone, PartialEq)]
pub struct DropTicket {
    pub image_id: ImageId,
    pub surface: SurfaceId,
    pub file: PathBuf,
}

/// A drop waiting for its image to resolve.
pub struct PendingDrop {
    pub ticket: DropTicket,
    pub resolve: ImageFuture,
}

impl fmt::Debug for PendingDrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingDrop")
            .field("ticket", &self.ticket)
            .finish_non_exhaustive()
    }
}

/// Result of the synchronous first half of the pipeline.
#[derive(Debug)]
pub enum DropStart {
    /// Nothing to do (no files).
    Ignored,
    /// Registration failed; already logged.
    Failed(Error),
    /// The image is being resolved.
    Pending(PendingDrop),
}

/// Final result of one drop.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    Drawn(DropTicket),
    Ignored,
    /// Any failure from registration to drawing; already logged.
    Failed(Error),
}

/// Reacts to files being dragged over a drop target.
#[must_use]
pub fn handle_drag_over() -> Propagation {
    Propagation::Stop
}

/// Sequences the drop steps against a file registry and a rendering engine.
#[derive(Clone)]
pub struct DropPipeline {
    registry: Arc<dyn FileRegistry>,
}

impl fmt::Debug for DropPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropPipeline").finish_non_exhaustive()
    }
}

impl DropPipeline {
    #[must_use]
    pub fn new(registry: Arc<dyn FileRegistry>) -> Self {
        Self { registry }
    }

    /// Registers the first dropped file, enables the surface and starts
    /// resolving the image.
    pub fn begin<E>(&self, engine: &mut E, event: DropEvent) -> (Propagation, DropStart)
    where
        E: RenderingEngine + ?Sized,
    {
        let DropEvent { files, surface } = event;
        let mut files = files.into_iter();
        let Some(file) = files.next() else {
            log::debug!("drop on {surface} carried no files");
            return (Propagation::Stop, DropStart::Ignored);
        };
        let extra = files.count();
        if extra > 0 {
            log::debug!("ignoring {extra} additional dropped file(s)");
        }

        let image_id = match self.registry.add(&file) {
            Ok(image_id) => image_id,
            Err(err) => {
                report_failure(&file, &err);
                return (Propagation::Stop, DropStart::Failed(err));
            }
        };
        log::debug!("registered {} as {image_id}", file.display());

        engine.enable(surface);
        let resolve = engine.load_image(&image_id);

        (
            Propagation::Stop,
            DropStart::Pending(PendingDrop {
                ticket: DropTicket {
                    image_id,
                    surface,
                    file,
                },
                resolve,
            }),
        )
    }

    /// Derives the default viewport for the resolved image and draws it.
    pub fn finish<E>(
        &self,
        engine: &mut E,
        ticket: DropTicket,
        resolved: Result<Arc<DecodedImage>>,
    ) -> DropOutcome
    where
        E: RenderingEngine + ?Sized,
    {
        match draw(engine, &ticket, resolved) {
            Ok(()) => {
                log::info!("drew {} ({})", ticket.file.display(), ticket.image_id);
                DropOutcome::Drawn(ticket)
            }
            Err(err) => {
                report_failure(&ticket.file, &err);
                DropOutcome::Failed(err)
            }
        }
    }

    /// Runs the whole pipeline for `event`, awaiting the image in between.
    pub async fn handle<E>(&self, engine: &mut E, event: DropEvent) -> (Propagation, DropOutcome)
    where
        E: RenderingEngine + ?Sized,
    {
        let (propagation, start) = self.begin(engine, event);
        let outcome = match start {
            DropStart::Ignored => DropOutcome::Ignored,
            DropStart::Failed(err) => DropOutcome::Failed(err),
            DropStart::Pending(PendingDrop { ticket, resolve }) => {
                let resolved = resolve.await;
                self.finish(engine, ticket, resolved)
            }
        };
        (propagation, outcome)
    }
}

fn draw<E>(engine: &mut E, ticket: &DropTicket, resolved: Result<Arc<DecodedImage>>) -> Result<()>
where
    E: RenderingEngine + ?Sized,
{
    let image = resolved?;
    let viewport = engine.default_viewport(ticket.surface, &image)?;
    engine.display_image(ticket.surface, image, viewport)
}

fn report_failure(file: &std::path::Path, err: &Error) {
    log::error!("failed to display {}: {err}", file.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::image::{ImageDescription, Photometric, PixelSamples, WindowLevel};
    use crate::domain::{SurfaceSize, Viewport};
    use futures_util::FutureExt;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Register(PathBuf),
        Enable(SurfaceId),
        Resolve(ImageId),
        Derive(SurfaceId, ImageId),
        Draw(SurfaceId, ImageId, Viewport),
    }

    type Journal = Arc<Mutex<Vec<Call>>>;

    struct RecordingRegistry {
        journal: Journal,
        fail: bool,
    }

    impl FileRegistry for RecordingRegistry {
        fn add(&self, path: &Path) -> Result<ImageId> {
            let mut journal = self.journal.lock().expect("journal lock");
            journal.push(Call::Register(path.to_path_buf()));
            if self.fail {
                return Err(Error::Io("registry full".into()));
            }
            let index = journal
                .iter()
                .filter(|call| matches!(call, Call::Register(_)))
                .count();
            Ok(ImageId::new("stub", index))
        }
    }

    struct RecordingEngine {
        journal: Journal,
        fail_resolve: bool,
        enabled: bool,
    }

    impl RecordingEngine {
        fn record(&self, call: Call) {
            self.journal.lock().expect("journal lock").push(call);
        }
    }

    impl RenderingEngine for RecordingEngine {
        fn enable(&mut self, surface: SurfaceId) {
            self.enabled = true;
            self.record(Call::Enable(surface));
        }

        fn load_image(&self, id: &ImageId) -> ImageFuture {
            self.record(Call::Resolve(id.clone()));
            let result = if self.fail_resolve {
                Err(Error::UnsupportedTransferSyntax("1.2.840.10008.1.2.4.50".into()))
            } else {
                Ok(Arc::new(image(id.clone())))
            };
            async move { result }.boxed()
        }

        fn default_viewport(&self, surface: SurfaceId, image: &DecodedImage) -> Result<Viewport> {
            self.record(Call::Derive(surface, image.image_id.clone()));
            if !self.enabled {
                return Err(Error::SurfaceNotEnabled(surface.to_string()));
            }
            Ok(crate::render::viewport::default_viewport(
                SurfaceSize::new(100.0, 100.0),
                image,
            ))
        }

        fn display_image(
            &mut self,
            surface: SurfaceId,
            image: Arc<DecodedImage>,
            viewport: Viewport,
        ) -> Result<()> {
            self.record(Call::Draw(surface, image.image_id.clone(), viewport));
            Ok(())
        }
    }

    fn image(image_id: ImageId) -> DecodedImage {
        DecodedImage {
            image_id,
            rows: 2,
            columns: 2,
            photometric: Photometric::Monochrome2,
            samples: PixelSamples::Gray(vec![0.0, 1.0, 2.0, 3.0]),
            min_value: 0.0,
            max_value: 3.0,
            window: WindowLevel::from_range(0.0, 3.0),
            spacing: None,
            transfer_syntax: String::new(),
            description: ImageDescription::default(),
        }
    }

    fn fixture(fail_register: bool, fail_resolve: bool) -> (DropPipeline, RecordingEngine, Journal) {
        let journal = Journal::default();
        let pipeline = DropPipeline::new(Arc::new(RecordingRegistry {
            journal: Arc::clone(&journal),
            fail: fail_register,
        }));
        let engine = RecordingEngine {
            journal: Arc::clone(&journal),
            fail_resolve,
            enabled: false,
        };
        (pipeline, engine, journal)
    }

    fn calls(journal: &Journal) -> Vec<Call> {
        journal.lock().expect("journal lock").clone()
    }

    fn drawn_count(journal: &Journal) -> usize {
        calls(journal)
            .iter()
            .filter(|call| matches!(call, Call::Draw(..)))
            .count()
    }

    #[tokio::test]
    async fn valid_drop_runs_every_step_in_order() {
        let (pipeline, mut engine, journal) = fixture(false, false);
        let event = DropEvent::single("/data/ct.dcm", SurfaceId::VIEWPORT);

        let (propagation, outcome) = pipeline.handle(&mut engine, event).await;

        let id = ImageId::new("stub", 1);
        let expected_viewport = crate::render::viewport::default_viewport(
            SurfaceSize::new(100.0, 100.0),
            &image(id.clone()),
        );
        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(
            calls(&journal),
            vec![
                Call::Register(PathBuf::from("/data/ct.dcm")),
                Call::Enable(SurfaceId::VIEWPORT),
                Call::Resolve(id.clone()),
                Call::Derive(SurfaceId::VIEWPORT, id.clone()),
                Call::Draw(SurfaceId::VIEWPORT, id.clone(), expected_viewport),
            ]
        );
        assert_eq!(
            outcome,
            DropOutcome::Drawn(DropTicket {
                image_id: id,
                surface: SurfaceId::VIEWPORT,
                file: PathBuf::from("/data/ct.dcm"),
            })
        );
    }

    #[tokio::test]
    async fn empty_drop_makes_no_calls() {
        let (pipeline, mut engine, journal) = fixture(false, false);

        let (propagation, outcome) = pipeline
            .handle(&mut engine, DropEvent::new(Vec::new(), SurfaceId::VIEWPORT))
            .await;

        assert_eq!(propagation, Propagation::Stop);
        assert_eq!(outcome, DropOutcome::Ignored);
        assert!(calls(&journal).is_empty());
    }

    #[tokio::test]
    async fn only_the_first_file_is_considered() {
        let (pipeline, mut engine, journal) = fixture(false, false);
        let event = DropEvent::new(
            vec![PathBuf::from("/a.dcm"), PathBuf::from("/b.dcm")],
            SurfaceId::VIEWPORT,
        );

        let (_, outcome) = pipeline.handle(&mut engine, event).await;

        assert!(matches!(outcome, DropOutcome::Drawn(_)));
        let registered: Vec<_> = calls(&journal)
            .into_iter()
            .filter_map(|call| match call {
                Call::Register(path) => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(registered, vec![PathBuf::from("/a.dcm")]);
    }

    #[tokio::test]
    async fn resolution_failure_fails_once_and_never_draws() {
        let (pipeline, mut engine, journal) = fixture(false, true);

        let (propagation, outcome) = pipeline
            .handle(&mut engine, DropEvent::single("/jpeg.dcm", SurfaceId::VIEWPORT))
            .await;

        assert_eq!(propagation, Propagation::Stop);
        assert!(matches!(
            outcome,
            DropOutcome::Failed(Error::UnsupportedTransferSyntax(_))
        ));
        assert_eq!(drawn_count(&journal), 0);
        assert!(!calls(&journal)
            .iter()
            .any(|call| matches!(call, Call::Derive(..))));
    }

    #[tokio::test]
    async fn registration_failure_stops_before_enabling() {
        let (pipeline, mut engine, journal) = fixture(true, false);

        let (propagation, outcome) = pipeline
            .handle(&mut engine, DropEvent::single("/x.dcm", SurfaceId::VIEWPORT))
            .await;

        assert_eq!(propagation, Propagation::Stop);
        assert!(matches!(outcome, DropOutcome::Failed(Error::Io(_))));
        assert_eq!(
            calls(&journal),
            vec![Call::Register(PathBuf::from("/x.dcm"))]
        );
    }

    /// Collects `error` records emitted on the current thread.
    mod error_log {
        use log::{Level, LevelFilter, Log, Metadata, Record};
        use std::cell::RefCell;
        use std::sync::Once;

        thread_local! {
            static ERRORS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        }

        struct ThreadErrors;

        impl Log for ThreadErrors {
            fn enabled(&self, metadata: &Metadata<'_>) -> bool {
                metadata.level() <= Level::Error
            }

            fn log(&self, record: &Record<'_>) {
                if self.enabled(record.metadata()) {
                    ERRORS.with(|errors| errors.borrow_mut().push(record.args().to_string()));
                }
            }

            fn flush(&self) {}
        }

        static LOGGER: ThreadErrors = ThreadErrors;
        static INIT: Once = Once::new();

        pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<String>) {
            INIT.call_once(|| {
                if log::set_logger(&LOGGER).is_ok() {
                    log::set_max_level(LevelFilter::Error);
                }
            });
            ERRORS.with(|errors| errors.borrow_mut().clear());
            let value = f();
            (value, ERRORS.with(|errors| errors.borrow_mut().drain(..).collect()))
        }
    }

    #[test]
    fn each_failure_is_logged_exactly_once() {
        for (fail_register, fail_resolve, file) in
            [(false, true, "/jpeg.dcm"), (true, false, "/unreadable.dcm")]
        {
            let (pipeline, mut engine, _journal) = fixture(fail_register, fail_resolve);

            let (handled, errors) = error_log::capture(|| {
                pipeline
                    .handle(&mut engine, DropEvent::single(file, SurfaceId::VIEWPORT))
                    .now_or_never()
            });

            let (_, outcome) = handled.expect("test engine resolves immediately");
            assert!(matches!(outcome, DropOutcome::Failed(_)));
            assert_eq!(errors.len(), 1, "{errors:?}");
            assert!(errors[0].contains(file));
        }
    }

    #[test]
    fn successful_and_empty_drops_log_no_error() {
        let (pipeline, mut engine, _journal) = fixture(false, false);

        let (outcomes, errors) = error_log::capture(|| {
            let drawn = pipeline
                .handle(&mut engine, DropEvent::single("/ct.dcm", SurfaceId::VIEWPORT))
                .now_or_never();
            let empty = pipeline
                .handle(&mut engine, DropEvent::new(Vec::new(), SurfaceId::VIEWPORT))
                .now_or_never();
            (drawn, empty)
        });

        assert!(matches!(outcomes.0, Some((_, DropOutcome::Drawn(_)))));
        assert!(matches!(outcomes.1, Some((_, DropOutcome::Ignored))));
        assert!(errors.is_empty(), "{errors:?}");
    }

    #[test]
    fn drag_over_is_always_consumed() {
        assert_eq!(handle_drag_over(), Propagation::Stop);
    }

    #[tokio::test]
    async fn second_drop_re_enables_and_redraws_with_fresh_state() {
        let (pipeline, mut engine, journal) = fixture(false, false);

        for file in ["/first.dcm", "/second.dcm"] {
            let (_, outcome) = pipeline
                .handle(&mut engine, DropEvent::single(file, SurfaceId::VIEWPORT))
                .await;
            assert!(matches!(outcome, DropOutcome::Drawn(_)));
        }

        let journal = calls(&journal);
        let enables = journal
            .iter()
            .filter(|call| matches!(call, Call::Enable(_)))
            .count();
        let drawn: Vec<_> = journal
            .iter()
            .filter_map(|call| match call {
                Call::Draw(_, id, _) => Some(id.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(enables, 2);
        assert_eq!(drawn, vec![ImageId::new("stub", 1), ImageId::new("stub", 2)]);
    }

    #[tokio::test]
    async fn split_halves_match_the_combined_handler() {
        let (pipeline, mut engine, journal) = fixture(false, false);

        let (propagation, start) =
            pipeline.begin(&mut engine, DropEvent::single("/ct.dcm", SurfaceId::VIEWPORT));
        assert_eq!(propagation, Propagation::Stop);
        let DropStart::Pending(PendingDrop { ticket, resolve }) = start else {
            panic!("expected a pending drop");
        };
        assert_eq!(drawn_count(&journal), 0);

        let resolved = resolve.await;
        let outcome = pipeline.finish(&mut engine, ticket.clone(), resolved);

        assert_eq!(outcome, DropOutcome::Drawn(ticket));
        assert_eq!(drawn_count(&journal), 1);
    }
}
