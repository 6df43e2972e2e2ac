//! Asynchronous quote lookup collaborator.
//!
//! The engine treats the quote service as opaque: it issues one request and
//! awaits one result. Retries and timeouts belong to the implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a quote source.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QuoteError {
    #[error("quote service unavailable: {0}")]
    Unavailable(String),

    #[error("malformed quote payload: {0}")]
    Malformed(String),
}

/// Source of a short quote to read to the traveller.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn fetch_quote(&self) -> Result<String, QuoteError>;
}

/// Quote source that always returns the same text.
#[derive(Clone, Debug)]
pub struct StaticQuote(pub String);

impl StaticQuote {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

#[async_trait]
impl QuoteSource for StaticQuote {
    async fn fetch_quote(&self) -> Result<String, QuoteError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::{DialogueEngine, DialogueError};
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Source that replays queued results and counts calls.
    struct ScriptedQuotes {
        results: Mutex<VecDeque<Result<String, QuoteError>>>,
        calls: AtomicUsize,
    }

    impl ScriptedQuotes {
        fn new(results: Vec<Result<String, QuoteError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteSource for ScriptedQuotes {
        async fn fetch_quote(&self) -> Result<String, QuoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(QuoteError::Unavailable("no result queued".to_string())))
        }
    }

    #[tokio::test]
    async fn static_quote_returns_its_text() {
        let source = StaticQuote::new("Not all who wander are lost.");
        assert_eq!(
            source.fetch_quote().await.unwrap(),
            "Not all who wander are lost."
        );
    }

    #[tokio::test]
    async fn engine_passes_quote_through() {
        let engine = DialogueEngine::default();
        let source = ScriptedQuotes::new(vec![Ok("Go west.".to_string())]);

        let quote = engine.quote(&source).await.unwrap();

        assert_eq!(quote, "Go west.");
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn failure_is_propagated_without_retry() {
        let engine = DialogueEngine::default();
        let source = ScriptedQuotes::new(vec![
            Err(QuoteError::Unavailable("503".to_string())),
            Ok("never reached".to_string()),
        ]);

        let error = engine.quote(&source).await.unwrap_err();

        assert!(matches!(
            error,
            DialogueError::Collaborator(QuoteError::Unavailable(ref reason)) if reason == "503"
        ));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_payload_is_reported_as_is() {
        let engine = DialogueEngine::default();
        let source = ScriptedQuotes::new(vec![Err(QuoteError::Malformed(
            "missing quote field".to_string(),
        ))]);

        let error = engine.quote(&source).await.unwrap_err();

        assert!(matches!(
            error,
            DialogueError::Collaborator(QuoteError::Malformed(ref reason))
                if reason == "missing quote field"
        ));
        assert_eq!(
            error.to_string(),
            "Collaborator failed: malformed quote payload: missing quote field"
        );
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn works_through_trait_objects() {
        let engine = DialogueEngine::default();
        let source: Box<dyn QuoteSource> = Box::new(StaticQuote::new("Adventure awaits."));

        assert_eq!(engine.quote(source.as_ref()).await.unwrap(), "Adventure awaits.");
    }
}
