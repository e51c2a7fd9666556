use crate::error::ConfigError;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::Cli;
pub use logging::init_tracing;
pub use settings::{defaults, Settings, LOG_LEVELS};

/// Loads the application settings.
///
/// Built-in defaults are overlaid by an optional `config.toml` in the working
/// directory and then by process environment variables (`HOST`, `PORT`,
/// `DB_HOSTNAME`, ...). The result is validated before it is returned.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = defaults()?
        // An absent config.toml is fine, the defaults and environment cover everything.
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default().try_parsing(true))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
