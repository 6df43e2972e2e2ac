//! Turn-level error types.

use crate::quote::QuoteError;
use thiserror::Error;

/// Structural problems with an incoming request. Fatal to the turn.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DispatchError {
    #[error("Request has no type")]
    MissingRequestType,

    #[error("Unknown request type '{0}'")]
    UnknownRequestType(String),

    #[error("Intent request has no intent name")]
    MissingIntentName,

    #[error("Unknown intent '{0}'")]
    UnknownIntent(String),

    #[error("Invalid session attributes: {}", join(.violations))]
    InvalidSession { violations: Vec<AttributeViolation> },
}

/// A single inconsistency in caller-supplied session attributes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AttributeViolation {
    #[error("unknown currentState '{0}'")]
    UnknownState(String),

    #[error("unknown place '{0}'")]
    UnknownPlace(String),

    #[error("unknown activity '{0}'")]
    UnknownActivity(String),

    #[error("place is set but currentState is not new hampshire")]
    PlaceWithoutNewHampshire,

    #[error("activity is set but currentState is not california")]
    ActivityWithoutCalifornia,

    #[error("place and activity are both set")]
    PlaceAndActivity,
}

/// Failure signal returned to the caller for a turn.
#[derive(Debug, Error)]
pub enum DialogueError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Collaborator failed: {0}")]
    Collaborator(#[from] QuoteError),
}

fn join(violations: &[AttributeViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_session_lists_every_violation() {
        let error = DispatchError::InvalidSession {
            violations: vec![
                AttributeViolation::UnknownState("vermont".to_string()),
                AttributeViolation::PlaceWithoutNewHampshire,
            ],
        };

        assert_eq!(
            error.to_string(),
            "Invalid session attributes: unknown currentState 'vermont'; \
             place is set but currentState is not new hampshire"
        );
    }

    #[test]
    fn dispatch_errors_convert_transparently() {
        let error: DialogueError = DispatchError::UnknownIntent("FlyIntent".to_string()).into();

        assert!(matches!(error, DialogueError::Dispatch(_)));
        assert_eq!(error.to_string(), "Unknown intent 'FlyIntent'");
    }

    #[test]
    fn collaborator_errors_keep_their_cause() {
        let error: DialogueError = QuoteError::Unavailable("timed out".to_string()).into();

        assert!(matches!(error, DialogueError::Collaborator(_)));
        assert!(error.to_string().contains("timed out"));
    }
}
