use iced::widget::{button, column, horizontal_space, row, stack, text};
use iced::{keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod state;
mod ui;

use config::Settings;
use state::gallery::Gallery;
use state::keys::{LightboxKey, WindowKeys};
use state::source::{self, LoadedSource};

/// Main application state
struct PhotoGallery {
    /// Effective settings (file + command line)
    settings: Settings,
    /// Keyboard stream the lightbox claims while open
    keys: Rc<WindowKeys>,
    /// The gallery component for the current source
    gallery: Gallery,
    /// Where the current items came from
    source: Option<LoadedSource>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Open Folder"
    OpenFolder,
    /// User clicked "Open Manifest"
    OpenManifest,
    /// Background source load finished
    SourceLoaded(Result<LoadedSource, String>),
    /// User clicked "Load More"
    LoadMore,
    /// User clicked a tile
    OpenLightbox(usize),
    /// Close button or backdrop press
    CloseLightbox,
    Next,
    Previous,
    /// Key press routed through the lightbox subscription
    Key(LightboxKey),
}

impl PhotoGallery {
    /// Create a new instance of the application
    fn new(settings: Settings, source: Option<PathBuf>) -> (Self, Task<Message>) {
        let keys = Rc::new(WindowKeys::new());
        let gallery = Gallery::new(Vec::new(), settings.initial_load_count, keys.clone());

        let (status, task) = match source {
            Some(path) => (format!("Loading {}...", path.display()), Self::load(path)),
            None => ("Ready.".to_string(), Task::none()),
        };

        (
            PhotoGallery {
                settings,
                keys,
                gallery,
                source: None,
                status,
            },
            task,
        )
    }

    fn load(path: PathBuf) -> Task<Message> {
        Task::perform(source::load_source_async(path), Message::SourceLoaded)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFolder => {
                let folder = FileDialog::new()
                    .set_title("Select Folder with Photos")
                    .pick_folder();

                if let Some(folder_path) = folder {
                    // Update status to show we're scanning
                    self.status = format!("Loading {}...", folder_path.display());
                    return Self::load(folder_path);
                }
            }
            Message::OpenManifest => {
                let manifest = FileDialog::new()
                    .set_title("Select Gallery Manifest")
                    .add_filter("Gallery manifest", &["toml"])
                    .pick_file();

                if let Some(manifest_path) = manifest {
                    // Update status to show we're reading the manifest
                    self.status = format!("Loading {}...", manifest_path.display());
                    return Self::load(manifest_path);
                }
            }
            Message::SourceLoaded(Ok(mut loaded)) => {
                // The gallery owns the items; the source keeps its label and base dir
                let items = std::mem::take(&mut loaded.items);
                // A manifest may override the first page size
                let initial = loaded
                    .initial_load_count
                    .unwrap_or(self.settings.initial_load_count);

                info!(source = %loaded.label, images = items.len(), initial, "gallery ready");

                // Replacing the gallery drops the old one and any key binding it held
                self.gallery = Gallery::new(items, initial, self.keys.clone());
                self.status = format!("Opened {}.", loaded.label);
                self.source = Some(loaded);
            }
            Message::SourceLoaded(Err(e)) => {
                // Keep the previous gallery, just report the failure
                error!(error = %e, "failed to load gallery source");
                self.status = format!("⚠️  {e}");
            }
            Message::LoadMore => {
                self.gallery.load_more();
                debug!(visible = self.gallery.visible_count(), "load more");
            }
            Message::OpenLightbox(index) => {
                // Tiles only exist for valid indices, so a miss means stale state
                if !self.gallery.open(index) {
                    warn!(index, "tile index out of range");
                }
            }
            Message::CloseLightbox => self.gallery.close(),
            Message::Next => self.gallery.next(),
            Message::Previous => self.gallery.previous(),
            // Only delivered while the lightbox subscription is active
            Message::Key(key) => self.gallery.handle_key(key),
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let label = self
            .source
            .as_ref()
            .map_or("No source", |source| source.label.as_str());

        let toolbar = row![
            button("Open Folder")
                .on_press(Message::OpenFolder)
                .padding(10),
            button("Open Manifest")
                .on_press(Message::OpenManifest)
                .padding(10),
            text(label).size(16),
            horizontal_space(),
            text(self.status.as_str()).size(14),
        ]
        .spacing(12)
        .padding(16)
        .align_y(Alignment::Center);

        let body = match &self.source {
            Some(source) if !self.gallery.is_empty() => {
                ui::grid::view(&self.gallery, source, &self.settings)
            }
            _ => ui::empty_state(),
        };

        let page = column![toolbar, body]
            .width(Length::Fill)
            .height(Length::Fill);

        match &self.source {
            Some(source) if self.gallery.lightbox().open => {
                stack![page, ui::lightbox::view(self.gallery.lightbox(), source)].into()
            }
            _ => page.into(),
        }
    }

    /// Listen to the keyboard only while the lightbox holds its binding
    fn subscription(&self) -> Subscription<Message> {
        if self.keys.is_listening() {
            keyboard::on_key_press(ui::map_key)
        } else {
            Subscription::none()
        }
    }

    fn title(&self) -> String {
        match (&self.source, self.gallery.current_index()) {
            (Some(source), Some(index)) if self.gallery.lightbox().open => {
                format!("Photo Gallery - {} - photo {}", source.label, index + 1)
            }
            (Some(source), _) => format!("Photo Gallery - {}", source.label),
            (None, _) => "Photo Gallery".to_string(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("photo_gallery=info")),
        )
        .init();

    let args = match cli::Args::from_env() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}\n\n{}", cli::USAGE);
            std::process::exit(2);
        }
    };

    if args.help {
        print!("{}", cli::USAGE);
        return Ok(());
    }

    let mut settings = match &args.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    args.apply(&mut settings);

    if args.save_settings {
        let saved = match &args.config {
            Some(path) => config::save_to_path(&settings, path),
            None => config::save(&settings),
        };
        if let Err(e) = saved {
            warn!(error = %e, "could not save settings");
        }
    }

    info!(
        initial_load = settings.initial_load_count,
        columns = settings.columns,
        "starting photo gallery"
    );

    let source = args.source;
    iced::application(PhotoGallery::title, PhotoGallery::update, PhotoGallery::view)
        .subscription(PhotoGallery::subscription)
        .theme(PhotoGallery::theme)
        .centered()
        .run_with(move || PhotoGallery::new(settings, source))
}
