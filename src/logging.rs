//! Logger set-up for the binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose output is capped at `warn` unless `RUST_LOG` says otherwise.
const NOISY_CRATES: &[&str] = &["wgpu_core", "wgpu_hal", "naga", "winit"];

/// Builds the default `RUST_LOG`-style filter.
///
/// # Examples
///
/// ```
/// use lookaway::logging::default_filter;
///
/// assert!(default_filter(true).starts_with("debug"));
/// assert!(default_filter(false).contains("naga=warn"));
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    NOISY_CRATES
        .iter()
        .fold(level.to_string().to_lowercase(), |filter, name| {
            format!("{filter},{name}=warn")
        })
}

/// Initialises the global logger.
///
/// `verbose` lowers the default level to debug. `RUST_LOG` still overrides
/// everything.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    if Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()
        .is_err()
    {
        log::debug!("logger already initialised");
    }
}
