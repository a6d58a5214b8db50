// Framework bootstrap for the sidedish client.

use crate::domain::ExternalSignIn;
use crate::frameworks::config::AppConfig;
use crate::interface_adapters::cli::{Cli, execute};
use crate::interface_adapters::clients::{
    ClientBuildError, LoginClient, ProviderCredentialExchange, SidedishClient,
    StaticProviderConfig,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::{LoginDeps, UserSession};
use std::process::ExitCode;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Logs go to stderr; stdout carries command output.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub fn build_state(config: &AppConfig) -> Result<AppState, ClientBuildError> {
    let menu = SidedishClient::new(&config.api_url, config.request_timeout)?;
    tracing::debug!(
        api_url = %config.api_url,
        request_timeout_ms = config.request_timeout.as_millis(),
        "menu client configured"
    );
    Ok(AppState {
        menu: Arc::new(menu),
    })
}

/// Wires the login flow collaborators for a host that owns the sign-in SDK.
pub fn build_login_deps(
    config: &AppConfig,
    session: Arc<UserSession>,
    sign_in: Arc<dyn ExternalSignIn>,
) -> Result<LoginDeps, ClientBuildError> {
    let repository = LoginClient::new(&config.auth_url, config.request_timeout)?;
    if config.client_id.is_none() {
        tracing::warn!("no sign-in client id configured; login will fail until one is set");
    }
    tracing::debug!(auth_url = %config.auth_url, "login client configured");

    Ok(LoginDeps {
        repository: Arc::new(repository),
        provider_config: Arc::new(StaticProviderConfig::new(config.client_id.clone())),
        sign_in,
        exchange: Arc::new(ProviderCredentialExchange::google()),
        session,
    })
}

pub async fn run(cli: Cli) -> ExitCode {
    init_runtime();

    let config = AppConfig::load();
    let state = match build_state(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize menu client");
            return ExitCode::FAILURE;
        }
    };

    let output = match execute(&state, cli.command).await {
        Ok(output) => output,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to render output");
            ExitCode::FAILURE
        }
    }
}
