use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habitmode_server::{
  dispatch::RequestDispatcher,
  domain::{account::AccountService, auth::AuthenticationManager},
  infrastructure::{
    config::Config,
    persistence::memory::{InMemoryAccountRepository, InMemoryTokenRepository},
    security::SecureTokenGenerator,
  },
};

fn main() -> anyhow::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // stdout carries responses, so logs go to stderr
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "habitmode_server=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
    .init();

  let config = Config::load().context("Failed to load configuration")?;
  tracing::info!("Configuration loaded successfully");

  // Wire the in-memory collaborators and the dispatcher
  let account_service = Arc::new(AccountService::new(Arc::new(
    InMemoryAccountRepository::new(),
  )));
  let auth_manager = Arc::new(AuthenticationManager::new(
    account_service.clone(),
    Arc::new(InMemoryTokenRepository::new()),
    Arc::new(SecureTokenGenerator::new(config.security.token_length_bytes)),
  ));
  let dispatcher = RequestDispatcher::new(account_service, auth_manager);

  tracing::info!("Habit Mode server ready, reading requests from stdin");
  serve(&dispatcher, config.limits.max_request_bytes)
}

/// Serves newline-delimited JSON requests from stdin, one response line
/// per well-formed request. Lines that are oversized or not valid JSON
/// are logged and skipped; transport-contract violations reported by the
/// dispatcher are logged and never answered with a Response.
fn serve(dispatcher: &RequestDispatcher, max_request_bytes: usize) -> anyhow::Result<()> {
  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();

  for line in stdin.lock().lines() {
    let line = line.context("Failed to read request line")?;
    if line.trim().is_empty() {
      continue;
    }
    if line.len() > max_request_bytes {
      tracing::warn!(bytes = line.len(), max_request_bytes, "dropping oversized request");
      continue;
    }

    let request: serde_json::Value = match serde_json::from_str(&line) {
      Ok(value) => value,
      Err(err) => {
        tracing::error!(%err, "dropping unparsable request");
        continue;
      }
    };

    match dispatcher.handle_request(&request) {
      Ok(response) => {
        serde_json::to_writer(&mut stdout, &response)
          .context("Failed to serialize response")?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
      }
      Err(fault) => {
        tracing::error!(%fault, "transport contract violation");
      }
    }
  }

  tracing::info!("stdin closed, shutting down");
  Ok(())
}
