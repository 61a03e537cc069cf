//! conf-check: decode a configuration document and print the runtime view.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use proxy_conf::config::{self, ConfConfig};
use proxy_conf::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "conf-check")]
#[command(about = "Validate a proxy configuration document", long_about = None)]
struct Cli {
    /// Path to the JSON configuration document.
    config: PathBuf,

    /// Log level, overriding the document's `log.logLevel`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print the normalized document instead of the runtime view.
    #[arg(long)]
    normalized: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let logging = init_logging(cli.log_level.as_deref());

    let config = match config::load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(path = %cli.config.display(), "Rejected configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging.apply_document_level(&config.log.log_level) {
        tracing::warn!(level = %config.log.log_level, "Failed to apply document log level: {}", e);
    }
    summarize(&config);

    let output = if cli.normalized {
        serde_json::to_string_pretty(&config)
    } else {
        serde_json::to_string_pretty(&runtime_view(&config))
    };

    match output {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render output: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn summarize(config: &ConfConfig) {
    for inbound in &config.inbounds {
        tracing::info!(
            tag = %inbound.tag,
            protocol = %inbound.protocol,
            ports = inbound.port.ranges().len(),
            clients = inbound.clients.len(),
            "Inbound accepted"
        );
    }
    for outbound in &config.outbounds {
        tracing::info!(
            tag = %outbound.tag,
            protocol = %outbound.protocol,
            servers = outbound.servers.len(),
            "Outbound accepted"
        );
    }
    tracing::info!(dns_servers = config.dns.servers.len(), "Configuration valid");
}

fn runtime_view(config: &ConfConfig) -> serde_json::Value {
    json!({
        "inbounds": config.inbounds.iter().map(|i| i.build()).collect::<Vec<_>>(),
        "outbounds": config.outbounds.iter().map(|o| o.build()).collect::<Vec<_>>(),
        "dns": config.dns.servers.iter().map(|s| s.build()).collect::<Vec<_>>(),
    })
}
