//! In-process driver for a single session.
//!
//! The engine itself is stateless. `Conversation` plays the caller's role:
//! it carries the attributes from one turn to the next and records where
//! each turn left the dialogue.

use super::engine::DialogueEngine;
use super::error::DialogueError;
use super::intent::{Intent, Slots};
use super::response::ResponseDescriptor;
use super::session::SessionAttributes;
use crate::core::{State, StateHistory, StateTransition};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Depth of the conversation in the content tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ConversationState {
    Root,
    StateChosen,
    PlaceOrActivityChosen,
    DetailShown,
    Ended,
}

impl State for ConversationState {
    fn name(&self) -> &str {
        match self {
            Self::Root => "Root",
            Self::StateChosen => "StateChosen",
            Self::PlaceOrActivityChosen => "PlaceOrActivityChosen",
            Self::DetailShown => "DetailShown",
            Self::Ended => "Ended",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Ended)
    }
}

/// One session driven turn by turn against a [`DialogueEngine`].
///
/// # Example
///
/// ```rust
/// use winnebago::dialogue::{slots, Conversation, ConversationState, DialogueEngine};
///
/// let engine = DialogueEngine::default();
/// let mut conversation = Conversation::new(&engine);
///
/// conversation.launch();
/// let reply = conversation
///     .say("PickStateIntent", &slots([("State", "New Hampshire")]))
///     .unwrap();
///
/// assert!(reply.speech_text.contains("granite state"));
/// assert_eq!(conversation.state(), ConversationState::StateChosen);
/// ```
pub struct Conversation<'e> {
    id: Uuid,
    engine: &'e DialogueEngine,
    attributes: SessionAttributes,
    state: ConversationState,
    history: StateHistory<ConversationState>,
}

impl<'e> Conversation<'e> {
    pub fn new(engine: &'e DialogueEngine) -> Self {
        Self {
            id: Uuid::new_v4(),
            engine,
            attributes: SessionAttributes::new(),
            state: ConversationState::Root,
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn attributes(&self) -> &SessionAttributes {
        &self.attributes
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    pub fn history(&self) -> &StateHistory<ConversationState> {
        &self.history
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_final()
    }

    /// Open the session with the welcome prompt.
    pub fn launch(&mut self) -> ResponseDescriptor {
        let turn = self.engine.launch();
        self.apply("LaunchRequest", turn.next, turn.response)
    }

    /// Send one intent. Once ended, a known intent repeats the farewell and
    /// nothing else happens; an unknown one is still a dispatch error.
    pub fn say(
        &mut self,
        intent_name: &str,
        slots: &Slots,
    ) -> Result<ResponseDescriptor, DialogueError> {
        let intent = Intent::from_name(intent_name)?;
        if self.is_ended() {
            tracing::debug!(session = %self.id, intent = %intent_name, "turn after session end");
            return Ok(self.engine.farewell(&self.attributes).response);
        }

        let turn = self.engine.step(intent, slots, &self.attributes);
        Ok(self.apply(intent.name(), turn.next, turn.response))
    }

    fn apply(
        &mut self,
        intent: &str,
        next: Option<ConversationState>,
        response: ResponseDescriptor,
    ) -> ResponseDescriptor {
        let from = self.state;
        let to = next.unwrap_or(from);
        self.history = self.history.record(StateTransition {
            from,
            to,
            intent: intent.to_string(),
            timestamp: Utc::now(),
        });
        tracing::info!(
            session = %self.id,
            %intent,
            from = from.name(),
            to = to.name(),
            "turn complete"
        );

        self.state = to;
        self.attributes = response.session_attributes.clone();
        response
    }
}
