//! Batch command implementation

use super::{build_valuator, valuate_checked};
use crate::config::Config;
use crate::valuation::{ValuationInput, ValuationResult, Valuator};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON file holding an array of valuation requests
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write results here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Simulation seed (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Outcome for one request of a batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    /// Position in the input array
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValuationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let content = tokio::fs::read_to_string(&self.input)
            .await
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let inputs: Vec<ValuationInput> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid batch file {}", self.input.display()))?;

        tracing::info!(requests = inputs.len(), "Running batch valuation on {:?}", self.input);

        let valuator = Arc::new(build_valuator(config, self.seed));
        let items = run_batch(valuator, inputs).await?;

        let failed = items.iter().filter(|item| item.error.is_some()).count();
        tracing::info!(total = items.len(), failed, "Batch complete");

        let json = serde_json::to_string_pretty(&items)?;
        match &self.output {
            Some(path) => tokio::fs::write(path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?,
            None => println!("{json}"),
        }
        Ok(())
    }
}

/// Valuate every request on the blocking pool.
///
/// Results come back in input order. A rejected request becomes an item with
/// `error` set and does not stop the batch.
pub async fn run_batch(
    valuator: Arc<Valuator>,
    inputs: Vec<ValuationInput>,
) -> anyhow::Result<Vec<BatchItem>> {
    let handles: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let valuator = Arc::clone(&valuator);
            tokio::task::spawn_blocking(move || valuate_checked(&valuator, &input))
        })
        .collect();

    let mut items = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        let outcome = handle.await.context("Valuation task panicked")?;
        items.push(match outcome {
            Ok(result) => BatchItem {
                index,
                result: Some(result),
                error: None,
            },
            Err(e) => BatchItem {
                index,
                result: None,
                error: Some(e.to_string()),
            },
        });
    }

    Ok(items)
}
