//! Conversation transition history.
//!
//! History is immutable: recording a transition returns a new history and
//! leaves the original untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single turn that moved the conversation.
///
/// # Example
///
/// ```rust
/// use winnebago::core::StateTransition;
/// use winnebago::dialogue::ConversationState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ConversationState::Root,
///     to: ConversationState::StateChosen,
///     intent: "PickStateIntent".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.intent, "PickStateIntent");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state before the turn
    pub from: S,
    /// The state after the turn
    pub to: S,
    /// Name of the intent (or request type) that drove the turn
    pub intent: String,
    /// When the turn completed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of conversation transitions.
///
/// # Example
///
/// ```rust
/// use winnebago::core::{StateHistory, StateTransition};
/// use winnebago::dialogue::ConversationState;
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ConversationState::Root,
///         to: ConversationState::StateChosen,
///         intent: "PickStateIntent".to_string(),
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: ConversationState::StateChosen,
///         to: ConversationState::Root,
///         intent: "BackIntent".to_string(),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Root -> StateChosen -> Root
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the starting state of the first transition followed by the
    /// `to` state of every transition, in order.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed between the first and last recorded turn.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Level {
        Root,
        Branch,
        Detail,
    }

    impl State for Level {
        fn name(&self) -> &str {
            match self {
                Self::Root => "Root",
                Self::Branch => "Branch",
                Self::Detail => "Detail",
            }
        }
    }

    fn turn(from: Level, to: Level, intent: &str) -> StateTransition<Level> {
        StateTransition {
            from,
            to,
            intent: intent.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<Level> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(turn(Level::Root, Level::Branch, "NhPlaceIntent"));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(turn(Level::Root, Level::Branch, "NhPlaceIntent"))
            .record(turn(Level::Branch, Level::Detail, "MoreInfoIntent"))
            .record(turn(Level::Detail, Level::Branch, "BackIntent"));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![&Level::Root, &Level::Branch, &Level::Detail, &Level::Branch]
        );
        assert_eq!(history.last().unwrap().intent, "BackIntent");
    }

    #[test]
    fn duration_measures_first_to_last() {
        let start = Utc::now();
        let mut first = turn(Level::Root, Level::Branch, "NhPlaceIntent");
        first.timestamp = start;
        let mut second = turn(Level::Branch, Level::Detail, "MoreInfoIntent");
        second.timestamp = start + chrono::Duration::milliseconds(250);

        let history = StateHistory::new().record(first).record(second);

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history =
            StateHistory::new().record(turn(Level::Root, Level::Branch, "CaActivityIntent"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<Level> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].intent, "CaActivityIntent");
    }
}
