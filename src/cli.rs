//! Command line arguments

use std::path::PathBuf;

use crate::config::Settings;

pub const USAGE: &str = "\
Usage: photo-gallery [OPTIONS] [SOURCE]

SOURCE is a folder of images or a .toml gallery manifest.

Options:
  --initial-load N   Photos shown before the first \"Load More\"
  --columns N        Tiles per row
  --config PATH      Settings file to read instead of the default
  --save-settings    Persist the effective settings and continue
  -h, --help         Print this help
";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub help: bool,
    pub initial_load: Option<usize>,
    pub columns: Option<usize>,
    pub config: Option<PathBuf>,
    pub save_settings: bool,
    pub source: Option<PathBuf>,
}

impl Args {
    pub fn from_env() -> Result<Self, pico_args::Error> {
        Self::parse(pico_args::Arguments::from_env())
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let parsed = Args {
            help: args.contains(["-h", "--help"]),
            initial_load: args.opt_value_from_str("--initial-load")?,
            columns: args.opt_value_from_str("--columns")?,
            config: args.opt_value_from_os_str("--config", |s| {
                Ok::<_, std::convert::Infallible>(PathBuf::from(s))
            })?,
            save_settings: args.contains("--save-settings"),
            source: args.opt_free_from_os_str(|s| {
                Ok::<_, std::convert::Infallible>(PathBuf::from(s))
            })?,
        };

        let remaining = args.finish();
        if let Some(extra) = remaining.into_iter().next() {
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected argument {}", extra.to_string_lossy()),
            });
        }

        Ok(parsed)
    }

    /// Command line values take precedence over the settings file
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(initial_load) = self.initial_load {
            settings.initial_load_count = initial_load;
        }
        if let Some(columns) = self.columns {
            settings.columns = columns;
        }
    }
}
