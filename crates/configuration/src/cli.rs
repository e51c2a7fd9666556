use crate::settings::Settings;
use clap::{ArgAction, Parser};

/// Rate Calculator backend application.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "Rate Calculator",
    display_name = "Rate Calculator",
    bin_name = "rate-calculator",
    version = concat!("v", env!("CARGO_PKG_VERSION")),
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the version and exit.
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: (),

    /// Enable debug options and logging.
    #[arg(short, long)]
    pub debug: bool,

    /// The listening address to bind to.
    #[arg(long)]
    pub host: Option<String>,

    /// The listening port to bind to.
    #[arg(long)]
    pub port: Option<u16>,
}

impl Settings {
    /// Overlays command-line flags on top of file and environment settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if cli.debug {
            self.debug = true;
        }
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
    }
}
