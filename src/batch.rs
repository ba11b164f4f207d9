//! Concurrent fan-out of independent requests.
//!
//! Batch samples (insert several promotions, reviews or products) start all
//! requests at once and wait for every one of them. There is no cancellation:
//! a failing request does not stop the others.

use std::future::Future;

use futures::future::join_all;

use crate::error::{AppError, Result};

/// Results of a batch, split by outcome. Indices refer to submission order.
#[derive(Debug)]
pub struct BatchOutcome<T> {
    pub succeeded: Vec<(usize, T)>,
    pub failed: Vec<(usize, AppError)>,
}

impl<T> BatchOutcome<T> {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Print every outcome, then fail if any request failed.
    ///
    /// # Errors
    ///
    /// Returns `Batch { failed, total }` when at least one request failed.
    pub fn report(self, describe: impl Fn(&T) -> String) -> Result<Vec<T>> {
        for (index, value) in &self.succeeded {
            println!("  [{}] {}", index, describe(value));
        }
        for (index, err) in &self.failed {
            println!("  [{}] failed: {}", index, err);
        }

        let total = self.total();
        if self.failed.is_empty() {
            println!("All {} requests succeeded.", total);
            Ok(self.succeeded.into_iter().map(|(_, v)| v).collect())
        } else {
            tracing::warn!("{} of {} requests failed", self.failed.len(), total);
            Err(AppError::Batch {
                failed: self.failed.len(),
                total,
            })
        }
    }
}

/// Run all futures concurrently and collect their outcomes.
pub async fn fan_out<F, T>(requests: impl IntoIterator<Item = F>) -> BatchOutcome<T>
where
    F: Future<Output = Result<T>>,
{
    let results = join_all(requests).await;

    let mut outcome = BatchOutcome {
        succeeded: Vec::new(),
        failed: Vec::new(),
    };
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => outcome.succeeded.push((index, value)),
            Err(err) => outcome.failed.push((index, err)),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_submission_order_and_splits_failures() {
        let requests = (0..4).map(|i| async move {
            if i == 2 {
                Err(AppError::InvalidRequest("bad".into()))
            } else {
                Ok(i * 10)
            }
        });
        let outcome = fan_out(requests).await;
        assert_eq!(outcome.total(), 4);
        assert_eq!(outcome.succeeded, vec![(0, 0), (1, 10), (3, 30)]);
        assert_eq!(outcome.failed[0].0, 2);
        assert!(!outcome.is_complete());

        match outcome.report(|v| v.to_string()) {
            Err(AppError::Batch { failed, total }) => assert_eq!((failed, total), (1, 4)),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[tokio::test]
    async fn complete_batch_returns_values() {
        let outcome = fan_out((1..=3).map(|i| async move { Ok::<_, AppError>(i) })).await;
        assert_eq!(outcome.report(|v| v.to_string()).unwrap(), vec![1, 2, 3]);
    }
}
