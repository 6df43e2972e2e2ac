//! The dialogue engine: one intent in, one response out.
//!
//! Handlers never mutate the caller's attributes. Each one reads the current
//! [`SessionAttributes`], consults the catalog and returns the next
//! attributes inside the [`ResponseDescriptor`].

use super::conversation::ConversationState;
use super::error::{DialogueError, DispatchError};
use super::intent::{Intent, RequestCategory, Slots, TurnRequest};
use super::response::ResponseDescriptor;
use super::session::SessionAttributes;
use crate::catalog::{self, CatalogEntry, NavigationPath, TravelState};
use crate::config::{BranchPolicy, EngineConfig};
use crate::core::Guard;
use crate::quote::QuoteSource;

/// A handled turn and where it leaves the conversation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Turn {
    pub response: ResponseDescriptor,
    /// `None` when the conversation stays where it was.
    pub next: Option<ConversationState>,
}

impl Turn {
    fn to(next: ConversationState, response: ResponseDescriptor) -> Self {
        Self {
            response,
            next: Some(next),
        }
    }

    fn stay(response: ResponseDescriptor) -> Self {
        Self {
            response,
            next: None,
        }
    }
}

/// Guards consulted before a place or activity is accepted.
struct BranchGuards {
    new_hampshire: Guard<SessionAttributes>,
    california: Guard<SessionAttributes>,
}

impl BranchGuards {
    fn for_policy(policy: BranchPolicy) -> Self {
        match policy {
            BranchPolicy::Permissive => Self {
                new_hampshire: Guard::always("permissive"),
                california: Guard::always("permissive"),
            },
            BranchPolicy::Strict => Self {
                new_hampshire: Guard::new("new-hampshire-active", |a: &SessionAttributes| {
                    a.current_state() == Some(TravelState::NewHampshire)
                }),
                california: Guard::new("california-active", |a: &SessionAttributes| {
                    a.current_state() == Some(TravelState::California)
                }),
            },
        }
    }

    fn get(&self, state: TravelState) -> &Guard<SessionAttributes> {
        match state {
            TravelState::NewHampshire => &self.new_hampshire,
            TravelState::California => &self.california,
        }
    }
}

/// Stateless dialogue engine. Sessions live entirely in the attributes the
/// caller passes in, so one engine can serve any number of sessions.
pub struct DialogueEngine {
    config: EngineConfig,
    guards: BranchGuards,
}

impl Default for DialogueEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DialogueEngine {
    pub fn new(config: EngineConfig) -> Self {
        let guards = BranchGuards::for_policy(config.branch_policy);
        Self { config, guards }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Answer the first turn of a session.
    pub fn handle_launch(&self) -> ResponseDescriptor {
        self.launch().response
    }

    /// Answer one intent against the given attributes.
    pub fn handle_turn(
        &self,
        intent_name: &str,
        slots: &Slots,
        attributes: &SessionAttributes,
    ) -> Result<ResponseDescriptor, DialogueError> {
        let intent = Intent::from_name(intent_name).inspect_err(|error| {
            tracing::warn!(intent = %intent_name, %error, "dispatch failed");
        })?;
        let response = self.step(intent, slots, attributes).response;
        self.log_response(&response);
        Ok(response)
    }

    /// Answer a raw turn request. A session-end request has no response.
    pub fn handle_request(
        &self,
        request: &TurnRequest,
    ) -> Result<Option<ResponseDescriptor>, DialogueError> {
        tracing::debug!(
            category = ?request.category,
            intent = request.intent_name.as_deref().unwrap_or(""),
            slots = ?request.slots,
            attributes = ?request.session_attributes,
            "turn request"
        );

        let response = match request.category {
            RequestCategory::Launch => Some(self.handle_launch()),
            RequestCategory::SessionEnd => {
                tracing::debug!("session ended by platform");
                None
            }
            RequestCategory::Intent => {
                let turn = self
                    .dispatch(request)
                    .inspect_err(|error| tracing::warn!(%error, "dispatch failed"))?;
                Some(turn.response)
            }
        };

        if let Some(response) = &response {
            self.log_response(response);
        }
        Ok(response)
    }

    /// Fetch a quote from the collaborator. One request, no retry.
    pub async fn quote<Q>(&self, source: &Q) -> Result<String, DialogueError>
    where
        Q: QuoteSource + ?Sized,
    {
        match source.fetch_quote().await {
            Ok(quote) => {
                tracing::debug!(len = quote.len(), "quote received");
                Ok(quote)
            }
            Err(error) => {
                tracing::error!(%error, "quote lookup failed");
                Err(error.into())
            }
        }
    }

    fn dispatch(&self, request: &TurnRequest) -> Result<Turn, DispatchError> {
        let name = request
            .intent_name
            .as_deref()
            .ok_or(DispatchError::MissingIntentName)?;
        let intent = Intent::from_name(name)?;
        let attributes = SessionAttributes::decode(&request.session_attributes)?;
        Ok(self.step(intent, &request.slots, &attributes))
    }

    pub(crate) fn launch(&self) -> Turn {
        Turn::to(
            ConversationState::Root,
            ResponseDescriptor::from_node(&catalog::WELCOME, None, SessionAttributes::new()),
        )
    }

    /// Run the handler for `intent`.
    pub(crate) fn step(&self, intent: Intent, slots: &Slots, attributes: &SessionAttributes) -> Turn {
        let value = intent.slot().and_then(|slot| slots.get(slot)).map(String::as_str);
        tracing::debug!(
            intent = intent.name(),
            value = value.unwrap_or(""),
            state = attributes.current_state().map_or("", TravelState::as_str),
            "dispatching"
        );

        match intent {
            Intent::PickState => self.pick_state(value, attributes),
            Intent::NhPlace => self.choose_branch(TravelState::NewHampshire, value, attributes),
            Intent::CaActivity => self.choose_branch(TravelState::California, value, attributes),
            Intent::MoreInfo => self.more_info(value, attributes),
            Intent::Back => self.back(attributes),
            Intent::StartOver => self.start_over(),
            Intent::Stop | Intent::Cancel => self.farewell(attributes),
        }
    }

    fn pick_state(&self, value: Option<&str>, attributes: &SessionAttributes) -> Turn {
        match value.and_then(catalog::resolve_state) {
            Some(state) => {
                let next = attributes.with_state(state);
                let entry = catalog::lookup(&NavigationPath::State(state));
                Turn::to(ConversationState::StateChosen, respond(entry, value, next))
            }
            None => {
                tracing::debug!(value = value.unwrap_or(""), "unrecognized state");
                Turn::to(
                    ConversationState::Root,
                    ResponseDescriptor::from_node(
                        &catalog::STATE_CLARIFICATION,
                        value.filter(|v| !v.is_empty()),
                        SessionAttributes::new(),
                    ),
                )
            }
        }
    }

    /// Shared handler for New Hampshire places and California activities.
    fn choose_branch(
        &self,
        state: TravelState,
        value: Option<&str>,
        attributes: &SessionAttributes,
    ) -> Turn {
        let guard = self.guards.get(state);
        if !guard.check(attributes) {
            tracing::debug!(guard = guard.label(), "branch guard refused turn");
            return Turn::stay(self.reask(attributes));
        }

        let Some(branch) = value.and_then(|v| catalog::resolve_branch(state, v)) else {
            tracing::debug!(value = value.unwrap_or(""), "unrecognized branch value");
            return Turn::stay(ResponseDescriptor::silent(attributes.clone()));
        };

        let next = attributes.with_branch(branch);
        let entry = catalog::lookup(&NavigationPath::Branch(state, branch));
        Turn::to(
            ConversationState::PlaceOrActivityChosen,
            respond(entry, value, next),
        )
    }

    fn more_info(&self, value: Option<&str>, attributes: &SessionAttributes) -> Turn {
        let (Some(state), Some(branch)) = (attributes.current_state(), attributes.branch()) else {
            return Turn::stay(self.reask(attributes));
        };

        let action = value.map(str::to_lowercase).unwrap_or_default();
        match catalog::lookup(&NavigationPath::Detail(state, branch, &action)) {
            CatalogEntry::Authored(node) => Turn::to(
                ConversationState::DetailShown,
                ResponseDescriptor::from_node(node, None, attributes.clone()),
            ),
            CatalogEntry::NotYetAuthored => {
                tracing::debug!(branch = branch.as_str(), %action, "detail not yet authored");
                Turn::stay(ResponseDescriptor::silent(attributes.clone()))
            }
            CatalogEntry::Unhandled => {
                let menu = catalog::lookup(&NavigationPath::Branch(state, branch));
                Turn::stay(ask(menu, attributes.clone()))
            }
        }
    }

    fn back(&self, attributes: &SessionAttributes) -> Turn {
        match (attributes.current_state(), attributes.branch()) {
            (Some(state), Some(_)) => Turn::to(
                ConversationState::StateChosen,
                ask(
                    catalog::lookup(&NavigationPath::State(state)),
                    attributes.without_branch(),
                ),
            ),
            _ => self.start_over(),
        }
    }

    fn start_over(&self) -> Turn {
        Turn::to(
            ConversationState::Root,
            respond(
                catalog::lookup(&NavigationPath::Root),
                None,
                SessionAttributes::new(),
            ),
        )
    }

    pub(crate) fn farewell(&self, attributes: &SessionAttributes) -> Turn {
        Turn::to(
            ConversationState::Ended,
            ResponseDescriptor::speak(catalog::FAREWELL, attributes.clone()).ending(),
        )
    }

    /// Ask again at the level the session is on.
    fn reask(&self, attributes: &SessionAttributes) -> ResponseDescriptor {
        match attributes.current_state() {
            Some(state) => ask(catalog::lookup(&NavigationPath::State(state)), attributes.clone()),
            None => ask(catalog::lookup(&NavigationPath::Root), attributes.clone()),
        }
    }

    fn log_response(&self, response: &ResponseDescriptor) {
        if !self.config.debug_logging {
            return;
        }
        match serde_json::to_string(response) {
            Ok(json) => tracing::debug!(response = %json, "turn response"),
            Err(error) => tracing::warn!(%error, "could not serialize response"),
        }
    }
}

fn respond(entry: CatalogEntry, value: Option<&str>, next: SessionAttributes) -> ResponseDescriptor {
    match entry {
        CatalogEntry::Authored(node) => ResponseDescriptor::from_node(node, value, next),
        CatalogEntry::NotYetAuthored | CatalogEntry::Unhandled => ResponseDescriptor::silent(next),
    }
}

fn ask(entry: CatalogEntry, attributes: SessionAttributes) -> ResponseDescriptor {
    match entry {
        CatalogEntry::Authored(node) => ResponseDescriptor::ask(node, attributes),
        CatalogEntry::NotYetAuthored | CatalogEntry::Unhandled => {
            ResponseDescriptor::silent(attributes)
        }
    }
}
