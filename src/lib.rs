//! Winnebago: a stateless dialogue engine for a voice trip planner
//!
//! Winnebago follows a "pure core, imperative shell" layout. Every turn is a
//! pure function from an intent, its slot values and the caller's session
//! attributes to a response descriptor. The content tree is static data, and
//! the only side effects (logging, the quote collaborator, JSON transport)
//! sit at the edges.
//!
//! # Core Concepts
//!
//! - **Catalog**: the authored content tree, looked up by navigation path
//! - **Session attributes**: the whole conversation state, owned by the caller
//! - **Engine**: dispatches a closed set of intents to pure handlers
//! - **Envelope**: the voice platform's JSON request and response shapes
//!
//! # Example
//!
//! ```rust
//! use winnebago::dialogue::{slots, DialogueEngine, SessionAttributes};
//!
//! let engine = DialogueEngine::default();
//!
//! let welcome = engine.handle_launch();
//! assert!(!welcome.end_session);
//!
//! let reply = engine
//!     .handle_turn(
//!         "PickStateIntent",
//!         &slots([("State", "California")]),
//!         &welcome.session_attributes,
//!     )
//!     .unwrap();
//! assert!(reply.speech_text.contains("family friendly"));
//!
//! let reply = engine
//!     .handle_turn("StartOverIntent", &Default::default(), &reply.session_attributes)
//!     .unwrap();
//! assert_eq!(reply.session_attributes, SessionAttributes::new());
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod dialogue;
pub mod envelope;
pub mod quote;

// Re-export commonly used types
pub use config::{BranchPolicy, EngineBuilder, EngineConfig};
pub use dialogue::{
    Conversation, ConversationState, DialogueEngine, DialogueError, DispatchError,
    ResponseDescriptor, SessionAttributes,
};
pub use envelope::{handle_json, EnvelopeError};
pub use quote::{QuoteError, QuoteSource, StaticQuote};
