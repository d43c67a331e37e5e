//! Logging setup.
//!
//! Logs go to the given writer (stderr in the binary). `RUST_LOG` picks the
//! level, `--verbose` forces debug, and warnings and errors are always shown.

use tracing::Subscriber;
use tracing_subscriber::filter::{FilterExt, LevelFilter};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Level filter from `--verbose` and the `RUST_LOG` directives, if any.
pub fn env_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Subscriber writing to `writer`. Events at WARN or above pass whatever
/// `directives` say.
pub fn subscriber<W>(
    verbose: bool,
    directives: Option<&str>,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter(verbose, directives).or(LevelFilter::WARN);
    tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false)
            .with_filter(filter),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(verbose: bool, directives: Option<&str>) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = subscriber(verbose, directives, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("cannot reach server");
            tracing::warn!("adding new property");
            tracing::info!("created server");
            tracing::debug!("GET manifest");
        });

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_level_is_info() {
        let out = capture(false, None);
        assert!(out.contains("cannot reach server"));
        assert!(out.contains("created server"));
        assert!(!out.contains("GET manifest"));
    }

    #[test]
    fn test_rust_log_off_keeps_warnings_and_errors() {
        let out = capture(false, Some("off"));
        assert!(out.contains("cannot reach server"), "{out}");
        assert!(out.contains("adding new property"), "{out}");
        assert!(!out.contains("created server"));
    }

    #[test]
    fn test_rust_log_error_keeps_warnings() {
        let out = capture(false, Some("error"));
        assert!(out.contains("adding new property"), "{out}");
        assert!(!out.contains("created server"));
    }

    #[test]
    fn test_verbose_overrides_rust_log() {
        let out = capture(true, Some("off"));
        assert!(out.contains("GET manifest"), "{out}");
    }
}
