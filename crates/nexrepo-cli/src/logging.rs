//! Log output setup
//!
//! Logs go to stderr so stdout stays clean for status lines and dry-run
//! bodies. `NEXREPO_LOG` takes an `EnvFilter` directive and wins over the
//! command-line flags.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NEXREPO_LOG";

/// Filter used when `NEXREPO_LOG` is not set
pub fn default_directive(verbose: bool, debug: bool) -> &'static str {
    if debug {
        "debug,nexrepo=trace,nexrepo_client=trace,nexrepo_core=trace"
    } else if verbose {
        "warn,nexrepo=debug,nexrepo_client=debug,nexrepo_core=debug"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, debug)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false, false), "warn");
        assert!(default_directive(true, false).contains("nexrepo_client=debug"));
        assert!(default_directive(true, true).contains("nexrepo_client=trace"));
    }

    #[test]
    fn test_directives_parse() {
        for (verbose, debug) in [(false, false), (true, false), (false, true)] {
            assert!(default_directive(verbose, debug).parse::<EnvFilter>().is_ok());
        }
    }
}
