//! Dialogue engine for the trip-planning skill.
//!
//! An incoming intent, its slot values and the caller's session attributes
//! go in; a [`ResponseDescriptor`] with speech, optional reprompt and card,
//! end-of-session flag and updated attributes comes out.
//!
//! # Key Concepts
//!
//! - **Session attributes**: the only state, owned by the caller
//! - **Intents**: a closed set; anything else is a [`DispatchError`]
//! - **Handlers**: pure functions over attributes and the catalog
//! - **Conversation**: an in-process driver that carries attributes across
//!   turns and keeps a transition history

mod conversation;
mod engine;
mod error;
mod intent;
mod response;
mod session;

pub use conversation::{Conversation, ConversationState};
pub use engine::DialogueEngine;
pub use error::{AttributeViolation, DialogueError, DispatchError};
pub use intent::{
    slots, Intent, RequestCategory, Slots, TurnRequest, CA_ACTIVITY_SLOT, MORE_INFO_SLOT,
    NH_PLACE_SLOT, STATE_SLOT,
};
pub use response::{Card, ResponseDescriptor};
pub use session::{SessionAttributes, SessionMap, ACTIVITY_KEY, CURRENT_STATE_KEY, PLACE_KEY};
