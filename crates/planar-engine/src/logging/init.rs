use std::sync::Once;

/// Filter applied when neither `env_filter` nor `RUST_LOG` is set.
const DEFAULT_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Logger configuration.
///
/// Log targets emitted by this crate:
/// - `planar_engine::scene::display_file`: `debug` on insert/remove and one frame summary per pass
/// - `planar_engine::object::draw`: `trace` per drawn object
/// - `planar_engine::object::drawable`: `warn` when clipping culls an object
///
/// `env_filter` takes `env_logger` directives, e.g. `"planar_engine::scene=debug"`
/// to see frame summaries without per-object tracing.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger, at most once per process.
///
/// Filter precedence: `config.env_filter`, then `RUST_LOG`, then `info`.
/// If the host application already installed a logger, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(DEFAULT_LEVEL);
        }

        builder.write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logging initialized"),
            Err(_) => log::debug!("logger already installed; keeping it"),
        }
    });
}
