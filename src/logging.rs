use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Local `HH:MM:SS.mmm` timestamp prepended to every log line.
pub const LOG_TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Only warnings and errors reach the terminal.
pub const LOG_LEVEL: Level = Level::WARN;

/// Install the stderr logger. Stdout is left for the device response.
pub fn init_logging() {
    // Ignore a second init (tests may race to install one)
    let _ = tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .with_target(false)
        .try_init();
}
