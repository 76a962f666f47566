use tracing_subscriber::EnvFilter;

/// Environment variable read for the log filter when none is given explicitly.
pub const LOG_ENV: &str = "USH_LOG";

/// Filter used when neither `--log` nor `USH_LOG` is set.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the log filter: an explicit directive wins, then `USH_LOG`, then `warn`.
pub fn filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::new(d),
        None => EnvFilter::try_from_env(LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    }
}

/// Install the global subscriber. Logs go to stderr, next to diagnostics.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(directive: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_explicit_directive_wins() {
        assert_eq!(filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter(Some("off")).max_level_hint(), Some(LevelFilter::OFF));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Some("off"));
        init(Some("trace"));
    }
}
