//! Terminal helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Colors are on unless `NO_COLOR` is set or machine output is requested.
pub fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{}:", label)
    } else {
        paint(&format!("{}:", label))
    }
}

pub fn error_prefix() -> String {
    prefix("error", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info", |s| s.blue().bold().to_string())
}

/// Initialize `tracing` diagnostics on stderr. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let default = if verbose { "covfilter=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_never_colored() {
        assert!(!use_colors("json"));
    }

    #[test]
    fn test_prefixes_carry_label() {
        assert!(error_prefix().contains("error:"));
        assert!(note_prefix().contains("note:"));
        assert!(info_prefix().contains("info:"));
    }
}
