mod cli;
mod commands;
mod picker;
mod render;
mod repl;

use std::sync::Arc;
use std::time::Duration;

use pavel_ai::{GeminiClient, GeminiConfig, PersonaVisibility, RequestAssembler, Session};
use pavel_common::PavelError;
use pavel_config::schema::{LogLevel, NetworkConfig};
use pavel_config::PavelConfig;
use tracing_subscriber::EnvFilter;

const LOG_TARGETS: [&str; 4] = ["pavel", "pavel_ai", "pavel_config", "pavel_common"];

/// Build the tracing filter: an explicit `--log-level` wins over the config.
///
/// A bare level applies to every Pavel crate; anything containing `=` is
/// passed through as a full directive list.
fn log_filter(override_level: Option<&str>, configured: LogLevel) -> String {
    let level = match override_level {
        Some(directive) if directive.contains('=') => return directive.to_string(),
        Some(level) => level,
        None => configured.as_filter(),
    };
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn init_logging(filter: &str) {
    let mut env_filter = EnvFilter::from_default_env();
    for directive in filter.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        match directive.parse::<tracing_subscriber::filter::Directive>() {
            Ok(d) => env_filter = env_filter.add_directive(d),
            Err(e) => eprintln!("ignoring log directive {directive:?}: {e}"),
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn gemini_config(network: &NetworkConfig) -> GeminiConfig {
    GeminiConfig::default()
        .with_base_url(network.base_url.clone())
        .with_connect_timeout(Duration::from_secs(network.connect_timeout_secs))
        .with_request_timeout(network.request_timeout_secs.map(Duration::from_secs))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), PavelError> {
    let args = cli::parse();

    // Config first: it decides the log level.
    let loaded = match args.config.as_deref() {
        Some(path) => pavel_config::load_config_from(path),
        None => pavel_config::load_config(),
    };
    let (mut config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (PavelConfig::default(), Some(e)),
    };

    init_logging(&log_filter(args.log_level.as_deref(), config.logging.level));
    tracing::info!("Pavel v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(tier) = args.model {
        config.model.tier = tier;
    }
    if args.hide_persona {
        config.persona.show_in_transcript = false;
    }

    if args.dump_config {
        println!("{}", pavel_config::config_to_json(&config));
        return Ok(());
    }

    let client = GeminiClient::new(gemini_config(&config.network))
        .map_err(|e| PavelError::Ai(e.to_string()))?;
    let assembler = RequestAssembler::new(Arc::new(client));
    let session = Session::new(PersonaVisibility::from_flag(
        config.persona.show_in_transcript,
    ));
    tracing::info!(
        session = %session.id(),
        model = %config.model.tier,
        "Session created"
    );

    let mut repl = repl::Repl::new(session, assembler, config.model.tier);
    repl.attach(&args.attach);
    repl.run().await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_level_applies_to_all_crates() {
        let filter = log_filter(Some("debug"), LogLevel::Error);
        assert_eq!(
            filter,
            "pavel=debug,pavel_ai=debug,pavel_config=debug,pavel_common=debug"
        );
    }

    #[test]
    fn full_directive_passes_through() {
        let filter = log_filter(Some("pavel_ai=trace,reqwest=debug"), LogLevel::Warning);
        assert_eq!(filter, "pavel_ai=trace,reqwest=debug");
    }

    #[test]
    fn config_level_used_without_override() {
        let filter = log_filter(None, LogLevel::Warning);
        assert!(filter.starts_with("pavel=warn,"));
    }

    #[test]
    fn gemini_config_maps_network_section() {
        let network = NetworkConfig {
            base_url: "http://localhost:9/models".into(),
            connect_timeout_secs: 3,
            request_timeout_secs: Some(60),
        };
        let config = gemini_config(&network);
        assert_eq!(config.base_url, "http://localhost:9/models");
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(60)));
    }
}
