use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// File-only tracing, off by default.
///
/// Writing log lines to stdout would corrupt the alternate screen, so
/// nothing is emitted unless `TOPICDECK_LOG` names a file path. `RUST_LOG`
/// controls the filter and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("TOPICDECK_LOG") else {
        return;
    };

    let path = unique_log_path(&log_path);
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("Warning: Failed to create log file: {}", path.display());
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .init();
}

/// Suffixes the configured path with `{timestamp}.{pid}` so concurrent
/// instances never write to the same file.
fn unique_log_path(base: &str) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base, timestamp, std::process::id()))
}

#[cfg(test)]
mod tests {
    use super::unique_log_path;

    #[test]
    fn unique_path_keeps_base_prefix() {
        let path = unique_log_path("/tmp/topicdeck.log");
        let s = path.to_string_lossy().into_owned();
        assert!(s.starts_with("/tmp/topicdeck.log."));
        assert!(s.ends_with(&format!(".{}", std::process::id())));
    }
}
