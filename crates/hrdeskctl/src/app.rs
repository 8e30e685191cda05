//! Command execution: config resolution, backend wiring and dispatch

use crate::cli::{join_query, Cli, Commands};
use crate::{output, repl};
use anyhow::{Context, Result};
use hrdesk_common::{ConversationService, HrDeskConfig, HttpEndpointRegistry, QueryRouter};
use std::sync::Arc;
use tracing::info;

/// Config file plus command-line overrides
pub fn resolve_config(cli: &Cli) -> Result<HrDeskConfig> {
    let mut config = HrDeskConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.api.base_url = base_url.clone();
    }
    Ok(config)
}

fn build_service(config: &HrDeskConfig) -> Result<ConversationService> {
    let registry = HttpEndpointRegistry::from_config(&config.api)
        .context("Failed to create backend client")?;
    info!("Backend: {}", registry.base_url());
    Ok(ConversationService::new(Arc::new(registry), config))
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Some(Commands::Ask { query }) => {
            let mut service = build_service(&config)?;
            let turn = service.send_message(&join_query(&query)).await;
            output::print_turn(&turn);
        }
        Some(Commands::Route { query, json }) => {
            let query = join_query(&query);
            let registry = HttpEndpointRegistry::from_config(&config.api)
                .context("Failed to create backend client")?;
            let router = QueryRouter::new(Arc::new(registry));
            let decision = output::RouteDecision::new(&query, &router.route(&query));
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                output::print_route(&decision);
            }
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        Some(Commands::Repl) | None => {
            repl::run(build_service(&config)?).await?;
        }
    }

    Ok(())
}
