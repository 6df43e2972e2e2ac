//! Requests and the closed set of intents the engine answers.

use super::error::DispatchError;
use super::session::SessionMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Slot values keyed by slot name, already resolved upstream.
pub type Slots = BTreeMap<String, String>;

pub const STATE_SLOT: &str = "State";
pub const NH_PLACE_SLOT: &str = "NhPlace";
pub const CA_ACTIVITY_SLOT: &str = "CaActivity";
pub const MORE_INFO_SLOT: &str = "MoreInfo";

/// Build a slot map from name/value pairs.
///
/// ```rust
/// use winnebago::dialogue::slots;
///
/// let slots = slots([("State", "California")]);
/// assert_eq!(slots["State"], "California");
/// ```
pub fn slots<I, K, V>(pairs: I) -> Slots
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}

/// Kind of request delivered by the platform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RequestCategory {
    Launch,
    Intent,
    SessionEnd,
}

impl RequestCategory {
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Launch => "LaunchRequest",
            Self::Intent => "IntentRequest",
            Self::SessionEnd => "SessionEndedRequest",
        }
    }

    pub fn from_wire(name: &str) -> Result<Self, DispatchError> {
        [Self::Launch, Self::Intent, Self::SessionEnd]
            .into_iter()
            .find(|category| category.wire_name() == name)
            .ok_or_else(|| DispatchError::UnknownRequestType(name.to_string()))
    }
}

/// Intents the engine knows how to answer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Intent {
    PickState,
    NhPlace,
    CaActivity,
    MoreInfo,
    Back,
    StartOver,
    Stop,
    Cancel,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Self::PickState,
        Self::NhPlace,
        Self::CaActivity,
        Self::MoreInfo,
        Self::Back,
        Self::StartOver,
        Self::Stop,
        Self::Cancel,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::PickState => "PickStateIntent",
            Self::NhPlace => "NhPlaceIntent",
            Self::CaActivity => "CaActivityIntent",
            Self::MoreInfo => "MoreInfoIntent",
            Self::Back => "BackIntent",
            Self::StartOver => "StartOverIntent",
            Self::Stop => "AMAZON.StopIntent",
            Self::Cancel => "AMAZON.CancelIntent",
        }
    }

    /// Resolve an intent name. Names outside the closed set are a
    /// [`DispatchError`].
    pub fn from_name(name: &str) -> Result<Self, DispatchError> {
        if name.is_empty() {
            return Err(DispatchError::MissingIntentName);
        }
        Self::ALL
            .into_iter()
            .find(|intent| intent.name() == name)
            .ok_or_else(|| DispatchError::UnknownIntent(name.to_string()))
    }

    /// The slot this intent reads, if any.
    pub const fn slot(self) -> Option<&'static str> {
        match self {
            Self::PickState => Some(STATE_SLOT),
            Self::NhPlace => Some(NH_PLACE_SLOT),
            Self::CaActivity => Some(CA_ACTIVITY_SLOT),
            Self::MoreInfo => Some(MORE_INFO_SLOT),
            Self::Back | Self::StartOver | Self::Stop | Self::Cancel => None,
        }
    }
}

/// One turn as handed over by the transport layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRequest {
    pub category: RequestCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_name: Option<String>,
    #[serde(default)]
    pub slots: Slots,
    #[serde(default)]
    pub session_attributes: SessionMap,
}

impl TurnRequest {
    pub fn launch() -> Self {
        Self {
            category: RequestCategory::Launch,
            intent_name: None,
            slots: Slots::new(),
            session_attributes: SessionMap::new(),
        }
    }

    pub fn session_end(session_attributes: SessionMap) -> Self {
        Self {
            category: RequestCategory::SessionEnd,
            intent_name: None,
            slots: Slots::new(),
            session_attributes,
        }
    }

    pub fn intent(name: impl Into<String>, slots: Slots, session_attributes: SessionMap) -> Self {
        Self {
            category: RequestCategory::Intent,
            intent_name: Some(name.into()),
            slots,
            session_attributes,
        }
    }
}
