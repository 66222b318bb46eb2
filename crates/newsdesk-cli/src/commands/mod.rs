mod headlines;
mod sources;

use std::time::Instant;

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Output wrapper carrying per-invocation metadata next to the data.
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub request_id: String,
    pub latency_ms: u64,
    pub data: Value,
}

pub async fn run(cli: &Cli) -> Result<ResponseEnvelope, CliError> {
    let started = Instant::now();

    let data = match &cli.command {
        Command::Sources => sources::run(cli.timeout_ms).await?,
        Command::Headlines(args) => headlines::run(args, cli.timeout_ms).await?,
    };

    Ok(ResponseEnvelope {
        request_id: Uuid::new_v4().to_string(),
        latency_ms: started.elapsed().as_millis() as u64,
        data,
    })
}
