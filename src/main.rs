use clap::Parser;
use iced::widget::{column, container, image, row, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod media;
mod state;
mod ui;

use error::Error;
use media::picker::{self, FileSelection};
use media::DataUri;
use state::{ModelId, ReadOutcome, ReadTicket, UploadController};

/// Startup options resolved from the command line and settings file
#[derive(Debug)]
struct Flags {
    model: ModelId,
    theme: Theme,
    image: Option<PathBuf>,
}

/// Main application state
struct CaseStudio {
    /// Loaded image and selected phone model
    controller: UploadController,
    /// What the file picker currently holds
    selection: FileSelection,
    /// Decoded copy of the loaded image for the image widget
    preview: Option<image::Handle>,
    /// Last read failure, shown under the upload card. A failed read still
    /// leaves the loaded image untouched; only this shell-level notice
    /// tells the user it happened.
    notice: Option<String>,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the upload zone or "Change image"
    PickImage,
    /// File dialog closed, `None` when cancelled
    ImagePicked(Option<PathBuf>),
    /// Background read finished
    ImageRead(ReadTicket, Result<DataUri, Error>),
    /// User clicked a model in the grid
    SelectModel(ModelId),
    /// User clicked the reset button
    Reset,
    /// "Download design" has no behavior yet
    Download,
    /// "Order now" has no behavior yet
    Order,
}

impl CaseStudio {
    /// Create a new instance of the application
    fn new(flags: Flags) -> (Self, Task<Message>) {
        info!(model = %flags.model, "Case designer started");

        let mut app = CaseStudio {
            controller: UploadController::new(flags.model),
            selection: FileSelection::default(),
            preview: None,
            notice: None,
            theme: flags.theme,
        };

        let task = match flags.image {
            Some(path) => app.select_file(path),
            None => Task::none(),
        };

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => Task::perform(picker::pick_image(), Message::ImagePicked),
            Message::ImagePicked(Some(path)) => self.select_file(path),
            Message::ImagePicked(None) => Task::none(),
            Message::ImageRead(ticket, result) => {
                self.finish_read(ticket, result);
                Task::none()
            }
            Message::SelectModel(model) => {
                debug!(%model, "Model selected");
                self.controller.select_model(model);
                Task::none()
            }
            Message::Reset => {
                self.controller.reset();
                self.selection.clear();
                self.preview = None;
                self.notice = None;
                Task::none()
            }
            Message::Download | Message::Order => {
                debug!(?message, "Action not available");
                Task::none()
            }
        }
    }

    /// Start reading a picked file unless the picker reports no change
    fn select_file(&mut self, path: PathBuf) -> Task<Message> {
        let Some(path) = self.selection.accept(path) else {
            return Task::none();
        };

        let ticket = self.controller.begin_read();
        Task::perform(picker::read_image(path), move |result| {
            Message::ImageRead(ticket, result)
        })
    }

    fn finish_read(&mut self, ticket: ReadTicket, result: Result<DataUri, Error>) {
        match self.controller.finish_read(ticket, result) {
            ReadOutcome::Applied => {
                self.notice = None;
                self.preview = match self.controller.image().map(DataUri::decode) {
                    Some(Ok(bytes)) => {
                        debug!(bytes = bytes.len(), "Preview updated");
                        Some(image::Handle::from_bytes(bytes))
                    }
                    Some(Err(err)) => {
                        warn!("Cannot display loaded image: {err}");
                        None
                    }
                    None => None,
                };
            }
            ReadOutcome::Failed(err) => {
                // Surfaced to the user on purpose, the image stays as it was
                warn!("{err}");
                self.notice = Some(err.to_string());
            }
            ReadOutcome::Superseded => {}
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let header = column![
            text("Phone Case Designer").size(40),
            text("Upload an image to create your own case").size(16),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        let left = column![
            ui::panels::upload_card(self.preview.as_ref(), self.notice.as_deref()),
            ui::panels::model_card(self.controller.selected_model()),
        ]
        .spacing(24)
        .width(Length::FillPortion(1));

        let right = container(ui::panels::preview_card(
            self.controller.state(),
            self.preview.as_ref(),
        ))
        .width(Length::FillPortion(1));

        let content = column![header, row![left, right].spacing(32)]
            .spacing(48)
            .padding(40)
            .max_width(960)
            .align_x(Alignment::Center);

        scrollable(container(content).center_x(Length::Fill)).into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// RUST_LOG wins, then --log-level, then settings, then "info"
fn init_logging(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> iced::Result {
    let cli = cli::Cli::parse();

    let loaded = match &cli.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let (settings, load_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(err) => (config::Config::default(), Some(err)),
    };

    init_logging(cli.log_level.as_deref().or(settings.log_level.as_deref()));
    if let Some(err) = load_error {
        warn!("Using default settings: {err}");
    }

    let flags = Flags {
        model: cli.model.unwrap_or_else(|| settings.default_model_id()),
        theme: settings.theme(),
        image: cli.image,
    };

    iced::application("Phone Case Designer", CaseStudio::update, CaseStudio::view)
        .theme(CaseStudio::theme)
        .window_size((1024.0, 860.0))
        .centered()
        .run_with(move || CaseStudio::new(flags))
}
