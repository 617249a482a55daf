use crate::cli::Env;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is not set.
pub fn default_directive(env: Env) -> &'static str {
    match env {
        Env::Local | Env::Dev => "debug",
        Env::Prod => "info",
    }
}

/// Installs the global subscriber: readable text locally, JSON elsewhere.
///
/// Logs go to stderr; stdout is reserved for command output.
pub fn init(env: Env) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(env)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match env {
        Env::Local => builder.try_init(),
        Env::Dev | Env::Prod => builder.json().try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_is_quieter_than_local_and_dev() {
        assert_eq!(default_directive(Env::Local), "debug");
        assert_eq!(default_directive(Env::Dev), "debug");
        assert_eq!(default_directive(Env::Prod), "info");
    }
}
