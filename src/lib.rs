//! # polydecor
//!
//! Decorates map polylines and polygons with repeating symbols: dashes,
//! arrow heads and markers placed at regular arc-length intervals.
//!
//! ## Architecture
//!
//! polydecor is organized as a workspace with multiple crates:
//!
//! 1. **polydecor-core** - Coordinates, pattern values, errors, map events
//! 2. **polydecor-pattern** - Segment building and pattern projection
//! 3. **polydecor-decorator** - Map projection, symbols, the decorator
//! 4. **polydecor-settings** - Decoration config files
//! 5. **polydecor** - Command line tool that integrates all crates

pub mod report;

pub use polydecor_core::{
    Error, EventFilter, GeometryError, LatLng, LatLngBounds, MapEvent, MapEventHub, MapEventKind,
    PatternError, Point, RawPatternValue, RelativeOrAbsoluteValue, Result,
};

pub use polydecor_pattern::{
    interpolate_between_points, project_pattern_on_point_path, PatternSpec, PlacementPoint,
    RawPatternSpec,
};

pub use polydecor_decorator::{
    ArrowHeadSymbol, DashSymbol, DirectionPoint, MapContext, MapProjector, MarkerSymbol, PathInput,
    Pattern, PatternDefinition, PatternLayer, PolylineDecorator, Symbol, SymbolDefinition,
    SymbolFactory, WebMercatorMap,
};

pub use polydecor_settings::{DecorationConfig, SettingsError, ViewSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Log filter applied when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging with the default configuration
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::default())
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - stderr output, keeping stdout free for reports
/// - RUST_LOG environment variable support
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let registry = tracing_subscriber::registry().with(log_filter(rust_log.as_deref()));
    let result = match format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(false),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Filter for the given `RUST_LOG` directives, falling back to
/// [`DEFAULT_LOG_FILTER`]
fn log_filter(directives: Option<&str>) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
