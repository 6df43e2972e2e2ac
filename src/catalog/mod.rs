//! Content catalog for the trip-planning conversation.
//!
//! The catalog is a fixed tree addressed by [`NavigationPath`]:
//! state → New Hampshire place or California activity → detail action.
//! Every node is authored at build time and never mutated. [`lookup`] is a
//! total function: a path that has no content yields
//! [`CatalogEntry::Unhandled`], and content that exists in the tree but has
//! not been written yet yields [`CatalogEntry::NotYetAuthored`].
//!
//! Slot aliases live here too, so that handlers only normalize and look up.
//!
//! # Example
//!
//! ```rust
//! use winnebago::catalog::{self, Branch, CatalogEntry, NavigationPath, NhPlace, TravelState};
//!
//! let path = NavigationPath::Detail(
//!     TravelState::NewHampshire,
//!     Branch::Place(NhPlace::Hike),
//!     "stay",
//! );
//!
//! match catalog::lookup(&path) {
//!     CatalogEntry::Authored(node) => assert!(node.speech.contains("Twin Mountain KOA")),
//!     other => panic!("unexpected entry: {other:?}"),
//! }
//! ```

mod content;

use serde::{Deserialize, Serialize};

pub use content::{DESTINATION_CARD_TITLE, FAREWELL, ROOT, STATE_CLARIFICATION, WELCOME};

/// Placeholder in card bodies replaced by the spoken destination.
pub const DESTINATION_PLACEHOLDER: &str = "{destination}";

/// The two destinations offered by the skill.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TravelState {
    #[serde(rename = "new hampshire")]
    NewHampshire,
    #[serde(rename = "california")]
    California,
}

impl TravelState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewHampshire => "new hampshire",
            Self::California => "california",
        }
    }

    /// Parse the canonical (session) spelling. Slot values go through
    /// [`resolve_state`] instead.
    pub fn parse(value: &str) -> Option<Self> {
        [Self::NewHampshire, Self::California]
            .into_iter()
            .find(|state| state.as_str() == value)
    }
}

/// Places offered in New Hampshire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NhPlace {
    Hike,
    Seacoast,
}

impl NhPlace {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hike => "hike",
            Self::Seacoast => "seacoast",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [Self::Hike, Self::Seacoast]
            .into_iter()
            .find(|place| place.as_str() == value)
    }
}

/// Activities offered in California.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaActivity {
    Family,
    Adult,
}

impl CaActivity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Family => "family",
            Self::Adult => "adult",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        [Self::Family, Self::Adult]
            .into_iter()
            .find(|activity| activity.as_str() == value)
    }
}

/// Second level of the tree: a place or an activity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Branch {
    Place(NhPlace),
    Activity(CaActivity),
}

impl Branch {
    /// The state this branch belongs to.
    pub const fn state(self) -> TravelState {
        match self {
            Self::Place(_) => TravelState::NewHampshire,
            Self::Activity(_) => TravelState::California,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Place(place) => place.as_str(),
            Self::Activity(activity) => activity.as_str(),
        }
    }
}

/// Address of a node in the content tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavigationPath<'a> {
    Root,
    State(TravelState),
    Branch(TravelState, Branch),
    Detail(TravelState, Branch, &'a str),
}

/// Card attached to a node. `body` may contain [`DESTINATION_PLACEHOLDER`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CardContent {
    pub title: &'static str,
    pub body: &'static str,
    pub image_url: Option<&'static str>,
}

/// One authored point in the conversation tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavigationNode {
    pub speech: &'static str,
    pub reprompt: Option<&'static str>,
    pub card: Option<CardContent>,
}

impl NavigationNode {
    /// The question this node asks, used when the conversation returns here.
    pub fn question(&self) -> &'static str {
        self.reprompt.unwrap_or(self.speech)
    }
}

/// Result of a catalog lookup.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CatalogEntry {
    Authored(&'static NavigationNode),
    /// The path exists in the tree but its content has not been written.
    NotYetAuthored,
    /// The path is outside the tree.
    Unhandled,
}

/// Look up the content at `path`. Exact match only.
pub fn lookup(path: &NavigationPath<'_>) -> CatalogEntry {
    match *path {
        NavigationPath::Root => CatalogEntry::Authored(&ROOT),
        NavigationPath::State(state) => CatalogEntry::Authored(content::state_node(state)),
        NavigationPath::Branch(state, branch) if branch.state() == state => {
            CatalogEntry::Authored(content::branch_node(branch))
        }
        NavigationPath::Detail(state, branch, action) if branch.state() == state => {
            content::DETAILS
                .iter()
                .find(|detail| detail.branch == branch && detail.action == action)
                .map_or(CatalogEntry::Unhandled, |detail| match &detail.node {
                    Some(node) => CatalogEntry::Authored(node),
                    None => CatalogEntry::NotYetAuthored,
                })
        }
        NavigationPath::Branch(..) | NavigationPath::Detail(..) => CatalogEntry::Unhandled,
    }
}

/// Resolve a `State` slot value, ignoring case.
pub fn resolve_state(value: &str) -> Option<TravelState> {
    let normalized = value.to_lowercase();
    content::STATE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, state)| *state)
}

/// Resolve a place or activity slot value within `state`, ignoring case.
pub fn resolve_branch(state: TravelState, value: &str) -> Option<Branch> {
    let normalized = value.to_lowercase();
    content::BRANCH_ALIASES
        .iter()
        .find(|(alias, branch)| *alias == normalized && branch.state() == state)
        .map(|(_, branch)| *branch)
}

/// Detail actions available under `branch`, in menu order.
pub fn detail_actions(branch: Branch) -> impl Iterator<Item = &'static str> {
    content::DETAILS
        .iter()
        .filter(move |detail| detail.branch == branch)
        .map(|detail| detail.action)
}
