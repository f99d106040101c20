use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Helper macro for logging elapsed time at debug level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// debug_time!(start, "summarize");
/// // Or with additional fields:
/// debug_time!(start, "summarize", file = name);
/// ```
#[macro_export]
macro_rules! debug_time {
    ($start:expr, $name:expr) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::debug!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
///
/// Logs always go to stderr so stdout only ever carries reports.
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (true, None) => default_directive("debug"),
        (false, None) => default_directive("warn"),
        (_, Some(level)) => default_directive(level),
    };

    // CHATSUM_LOG / RUST_LOG take precedence over flags
    let filter = EnvFilter::try_from_env("CHATSUM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Expand a bare level ("debug") into a directive scoped to both chatsum crates.
fn default_directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("chatsum={level},chatsum_core={level}")
    }
}
