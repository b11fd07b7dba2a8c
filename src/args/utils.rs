//! Shared utilities for argument processing.

/// Environment switch that forces TRACE logging.
pub const TRACE_ENV: &str = "SHEETNAV_TRACE";

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `SHEETNAV_TRACE=1` enables TRACE level.
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var(TRACE_ENV).ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: `--verbose` wins over `--log-level`.
    ///
    /// Inputs:
    /// - `--log-level warn -v`, then `--log-level warn`.
    ///
    /// Output:
    /// - `debug` for the first, `warn` for the second.
    fn verbose_overrides_level() {
        let Ok(verbose) = crate::args::Args::try_parse_from(["sheetnav", "--log-level", "warn", "-v"])
        else {
            panic!("flags should parse");
        };
        assert_eq!(determine_log_level(&verbose), "debug");
        let Ok(plain) = crate::args::Args::try_parse_from(["sheetnav", "--log-level", "warn"]) else {
            panic!("flags should parse");
        };
        if std::env::var(TRACE_ENV).ok().as_deref() != Some("1") {
            assert_eq!(determine_log_level(&plain), "warn");
        }
    }
}
