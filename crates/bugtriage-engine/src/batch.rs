//! Batch orchestration with per-item failure isolation
//!
//! Items are independent: they run concurrently with bounded parallelism
//! and their outcomes are reassembled in original index order. One item's
//! failure never aborts or delays the reporting of its siblings.

use crate::service::TriageService;
use bugtriage_core::{BatchItemResult, BatchSummary, BugReport, Error, Result, MAX_BATCH_SIZE};
use futures::future::BoxFuture;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

impl TriageService {
    /// Classify 1..=20 reports, isolating failures per item.
    ///
    /// Rejects the whole batch only for an invalid container size; every
    /// per-item problem (validation or pipeline failure) becomes a
    /// failure entry at that item's index.
    pub async fn triage_batch(&self, reports: &[BugReport]) -> Result<BatchSummary> {
        if reports.is_empty() || reports.len() > MAX_BATCH_SIZE {
            return Err(Error::InvalidBatchSize {
                got: reports.len(),
            });
        }

        info!(total = reports.len(), "processing triage batch");

        let concurrency = num_cpus::get().min(reports.len());
        let futures: Vec<_> = reports
            .iter()
            .enumerate()
            .map(|(index, report)| self.triage_item(index, report))
            .collect();
        let results: Vec<BatchItemResult> = stream::iter(futures)
            .buffered(concurrency)
            .collect()
            .await;

        let processed_successfully = results.iter().filter(|r| r.is_success()).count();
        let failed = reports.len() - processed_successfully;

        info!(
            total = reports.len(),
            processed = processed_successfully,
            failed,
            "batch complete"
        );

        Ok(BatchSummary {
            total_bugs: reports.len(),
            processed_successfully,
            failed,
            results,
        })
    }

    fn triage_item<'a>(&'a self, index: usize, report: &'a BugReport) -> BoxFuture<'a, BatchItemResult> {
        Box::pin(async move {
            match self.triage(report).await {
                Ok(result) => {
                    metrics::counter!("bugtriage_batch_items_total", "outcome" => "success")
                        .increment(1);
                    BatchItemResult::Success {
                        index,
                        title: report.title.trim().to_string(),
                        description: report.description.trim().to_string(),
                        category: result.category,
                        urgency: result.urgency,
                        category_confidence: result.category_confidence,
                        urgency_confidence: result.urgency_confidence,
                    }
                }
                Err(err) => {
                    metrics::counter!("bugtriage_batch_items_total", "outcome" => "failure")
                        .increment(1);
                    warn!(index, error = %err, "batch item failed");
                    BatchItemResult::Failure {
                        index,
                        error: err.to_string(),
                    }
                }
            }
        })
    }
}
