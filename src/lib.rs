//! # kerfbox
//!
//! Parametric generator of laser-cut boxes. Produces the SVG cut paths of
//! every part of a box: finger jointed faces, flex bands around rounded
//! corners, lids of several styles, divider walls and hinge parts.
//!
//! ## Architecture
//!
//! kerfbox is organized as a workspace with multiple crates:
//!
//! 1. **kerfbox-core** - Points, material context, units, errors
//! 2. **kerfbox-boxgen** - The geometry engine and the SVG document
//! 3. **kerfbox-settings** - JSON/TOML box configuration
//! 4. **kerfbox** - Command line binary tying them together

pub mod cli;

pub use kerfbox_boxgen::{BoxGenError, BoxParams, CornerRadii, GenericBox, LidStyle, SvgDocument};
pub use kerfbox_core::{LengthUnit, MaterialContext, ParameterError};
pub use kerfbox_settings::{BoxConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so that SVG written to stdout stays clean
/// - RUST_LOG environment variable support
/// - `info` by default, `debug` when `verbose`
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
