// src/cli.rs
use clap::{error::ErrorKind, CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;

use crate::config::{CheckConfig, PluginInfo};
use crate::health::Status;

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Args {
    /// An example string configuration option
    #[arg(short = 'e', long, env = "CHECK_EXAMPLE", default_value = "")]
    pub example: String,
}

impl Args {
    /// Parse arguments under the plugin's name and short description.
    pub fn try_parse_for<I, T>(info: &PluginInfo, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Args::command()
            .name(info.name)
            .about(info.short)
            .try_get_matches_from(args)?;
        Args::from_arg_matches(&matches)
    }

    pub fn into_config(self) -> CheckConfig {
        CheckConfig::new(self.example)
    }
}

/// Check state for a parse failure. Help and version output are not
/// failures; anything else is UNKNOWN rather than clap's usage code.
pub fn parse_error_status(err: &clap::Error) -> Status {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Status::Ok,
        _ => Status::Unknown,
    }
}
