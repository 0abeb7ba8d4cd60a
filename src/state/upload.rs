//! Upload and preview state
//!
//! `UploadController` owns the two pieces of session state (the loaded
//! image and the selected phone model) and is the only place they change.

use tracing::debug;

use super::catalog::ModelId;
use crate::error::Error;
use crate::media::DataUri;

/// Session state consumed (read-only) by the preview
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    /// Most recently loaded image, if any
    pub image: Option<DataUri>,
    /// Always a catalog entry
    pub selected_model: ModelId,
}

/// Identifies one file read started by `UploadController::begin_read`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadTicket(u64);

/// What happened to a finished read
#[derive(Debug, Clone)]
pub enum ReadOutcome {
    /// The image replaced whatever was shown before
    Applied,
    /// The read failed; the previous image is kept
    Failed(Error),
    /// A newer read or a reset happened meanwhile; the result was dropped
    Superseded,
}

/// Owner of `UploadState`
#[derive(Debug, Default)]
pub struct UploadController {
    state: UploadState,
    /// Bumped by every `begin_read` and `reset`
    generation: u64,
}

impl UploadController {
    /// Start a session with no image and the given model selected
    pub fn new(selected_model: ModelId) -> Self {
        Self {
            state: UploadState {
                image: None,
                selected_model,
            },
            generation: 0,
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn image(&self) -> Option<&DataUri> {
        self.state.image.as_ref()
    }

    pub fn selected_model(&self) -> ModelId {
        self.state.selected_model
    }

    /// Register a new file read. Any read still in flight is superseded.
    pub fn begin_read(&mut self) -> ReadTicket {
        self.generation += 1;
        ReadTicket(self.generation)
    }

    /// Apply the result of a read started with `begin_read`
    pub fn finish_read(&mut self, ticket: ReadTicket, result: Result<DataUri, Error>) -> ReadOutcome {
        if ticket.0 != self.generation {
            debug!(ticket = ticket.0, current = self.generation, "Dropping superseded read");
            return ReadOutcome::Superseded;
        }

        match result {
            Ok(image) => {
                self.state.image = Some(image);
                ReadOutcome::Applied
            }
            Err(err) => ReadOutcome::Failed(err),
        }
    }

    /// Select a phone model. Selecting the current model changes nothing.
    pub fn select_model(&mut self, model: ModelId) {
        self.state.selected_model = model;
    }

    /// Drop the loaded image and any read still in flight.
    /// The selected model is kept.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state.image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn png(marker: u8) -> DataUri {
        DataUri::new("image/png", &[0x89, b'P', b'N', b'G', marker])
    }

    fn samsung() -> ModelId {
        "samsung-s24".parse().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let controller = UploadController::default();
        assert!(controller.image().is_none());
        assert_eq!(controller.selected_model().as_str(), "iphone15");
    }

    #[test]
    fn test_second_file_replaces_first() {
        let mut controller = UploadController::default();

        let first = controller.begin_read();
        assert!(matches!(controller.finish_read(first, Ok(png(1))), ReadOutcome::Applied));

        let second = controller.begin_read();
        assert!(matches!(controller.finish_read(second, Ok(png(2))), ReadOutcome::Applied));

        assert_eq!(controller.image(), Some(&png(2)));
    }

    #[test]
    fn test_superseded_read_is_dropped() {
        let mut controller = UploadController::default();

        let slow = controller.begin_read();
        let fast = controller.begin_read();

        assert!(matches!(controller.finish_read(fast, Ok(png(2))), ReadOutcome::Applied));
        assert!(matches!(controller.finish_read(slow, Ok(png(1))), ReadOutcome::Superseded));
        assert_eq!(controller.image(), Some(&png(2)));
    }

    #[test]
    fn test_failed_read_keeps_previous_image() {
        let mut controller = UploadController::default();
        let ticket = controller.begin_read();
        controller.finish_read(ticket, Ok(png(1)));

        let ticket = controller.begin_read();
        let err = Error::read("broken.png", io::Error::new(io::ErrorKind::Other, "unreadable"));
        assert!(matches!(controller.finish_read(ticket, Err(err)), ReadOutcome::Failed(_)));
        assert_eq!(controller.image(), Some(&png(1)));
    }

    #[test]
    fn test_model_selection_stays_in_catalog() {
        let mut controller = UploadController::default();
        let models: Vec<ModelId> = ModelId::all().collect();
        for &model in models.iter().chain(models.iter().rev()) {
            controller.select_model(model);
            assert!(ModelId::find(controller.selected_model().as_str()).is_some());
            assert_eq!(controller.selected_model(), model);
        }
    }

    #[test]
    fn test_select_same_model_is_noop() {
        let mut controller = UploadController::new(samsung());
        let before = controller.state().clone();
        controller.select_model(samsung());
        assert_eq!(controller.state(), &before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut controller = UploadController::new(samsung());
        let empty = controller.state().clone();

        controller.reset();
        assert_eq!(controller.state(), &empty);

        let ticket = controller.begin_read();
        controller.finish_read(ticket, Ok(png(1)));
        controller.reset();
        let once = controller.state().clone();
        controller.reset();
        assert_eq!(controller.state(), &once);
        assert_eq!(once, empty);
    }

    #[test]
    fn test_reset_supersedes_in_flight_read() {
        let mut controller = UploadController::default();
        let ticket = controller.begin_read();
        controller.reset();

        assert!(matches!(controller.finish_read(ticket, Ok(png(1))), ReadOutcome::Superseded));
        assert!(controller.image().is_none());
    }

    #[test]
    fn test_operations_touch_only_their_field() {
        let mut controller = UploadController::default();
        let ticket = controller.begin_read();
        controller.finish_read(ticket, Ok(png(7)));

        controller.select_model(samsung());
        assert_eq!(controller.image(), Some(&png(7)));

        let ticket = controller.begin_read();
        controller.finish_read(ticket, Ok(png(8)));
        assert_eq!(controller.selected_model(), samsung());

        controller.reset();
        assert_eq!(controller.selected_model(), samsung());
    }

    #[test]
    fn test_full_session() {
        let mut controller = UploadController::default();
        assert!(controller.image().is_none());
        assert_eq!(controller.selected_model().as_str(), "iphone15");

        controller.select_model(samsung());
        assert_eq!(controller.selected_model().as_str(), "samsung-s24");
        assert!(controller.image().is_none());

        let ticket = controller.begin_read();
        let bytes = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        let image = DataUri::from_bytes(&bytes, None);
        controller.finish_read(ticket, Ok(image));
        let uri = controller.image().map(|image| image.to_string()).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        controller.reset();
        assert!(controller.image().is_none());
        assert_eq!(controller.selected_model().as_str(), "samsung-s24");
    }
}
