//! Session attributes carried by the caller between turns.
//!
//! On the wire the attributes are a flat string map (`currentState`,
//! `place`, `activity`, empty string meaning unset). Inside the engine they
//! are a closed record whose constructors keep one invariant: at most one of
//! `place`/`activity` is set, and it agrees with `current_state`.

use super::error::{AttributeViolation, DispatchError};
use crate::catalog::{Branch, CaActivity, NhPlace, TravelState};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Flat attribute map exchanged with the transport layer.
pub type SessionMap = BTreeMap<String, String>;

pub const CURRENT_STATE_KEY: &str = "currentState";
pub const PLACE_KEY: &str = "place";
pub const ACTIVITY_KEY: &str = "activity";

type Checked = Validation<(), NonEmptyVec<AttributeViolation>>;

/// Conversation position persisted by the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SessionMap", try_from = "SessionMap")]
pub struct SessionAttributes {
    current_state: Option<TravelState>,
    place: Option<NhPlace>,
    activity: Option<CaActivity>,
}

impl SessionAttributes {
    /// Attributes of a brand new session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> Option<TravelState> {
        self.current_state
    }

    pub fn place(&self) -> Option<NhPlace> {
        self.place
    }

    pub fn activity(&self) -> Option<CaActivity> {
        self.activity
    }

    /// The chosen place or activity, if any.
    pub fn branch(&self) -> Option<Branch> {
        self.place
            .map(Branch::Place)
            .or(self.activity.map(Branch::Activity))
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Choose a state. Any earlier place or activity is dropped.
    pub fn with_state(&self, state: TravelState) -> Self {
        Self {
            current_state: Some(state),
            place: None,
            activity: None,
        }
    }

    /// Choose a place or activity. The owning state becomes current.
    pub fn with_branch(&self, branch: Branch) -> Self {
        let mut next = self.with_state(branch.state());
        match branch {
            Branch::Place(place) => next.place = Some(place),
            Branch::Activity(activity) => next.activity = Some(activity),
        }
        next
    }

    /// Step back to the state level, keeping `current_state`.
    pub fn without_branch(&self) -> Self {
        Self {
            current_state: self.current_state,
            place: None,
            activity: None,
        }
    }

    /// Encode for the transport layer. Unset attributes become `""`.
    pub fn to_wire(&self) -> SessionMap {
        SessionMap::from([
            (
                CURRENT_STATE_KEY.to_string(),
                self.current_state.map_or("", TravelState::as_str).to_string(),
            ),
            (
                PLACE_KEY.to_string(),
                self.place.map_or("", NhPlace::as_str).to_string(),
            ),
            (
                ACTIVITY_KEY.to_string(),
                self.activity.map_or("", CaActivity::as_str).to_string(),
            ),
        ])
    }

    /// Decode caller attributes, collecting every violation.
    ///
    /// Missing keys and empty values mean unset; unrelated keys are ignored.
    pub fn from_wire(map: &SessionMap) -> Validation<Self, NonEmptyVec<AttributeViolation>> {
        let state = read(
            map,
            CURRENT_STATE_KEY,
            TravelState::parse,
            AttributeViolation::UnknownState,
        );
        let place = read(map, PLACE_KEY, NhPlace::parse, AttributeViolation::UnknownPlace);
        let activity = read(
            map,
            ACTIVITY_KEY,
            CaActivity::parse,
            AttributeViolation::UnknownActivity,
        );

        let mut checks: Vec<Checked> = Vec::new();
        checks.push(field_check(&state));
        checks.push(field_check(&place));
        checks.push(field_check(&activity));

        let current_state = state.ok().flatten();
        let place = place.ok().flatten();
        let activity = activity.ok().flatten();

        checks.push(ensure(
            place.is_none() || activity.is_none(),
            AttributeViolation::PlaceAndActivity,
        ));
        checks.push(ensure(
            place.is_none() || current_state == Some(TravelState::NewHampshire),
            AttributeViolation::PlaceWithoutNewHampshire,
        ));
        checks.push(ensure(
            activity.is_none() || current_state == Some(TravelState::California),
            AttributeViolation::ActivityWithoutCalifornia,
        ));

        Validation::all_vec(checks).map(move |_| Self {
            current_state,
            place,
            activity,
        })
    }

    /// [`Self::from_wire`] as a turn-level result.
    pub fn decode(map: &SessionMap) -> Result<Self, DispatchError> {
        match Self::from_wire(map) {
            Validation::Success(attributes) => Ok(attributes),
            Validation::Failure(violations) => Err(DispatchError::InvalidSession {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl From<SessionAttributes> for SessionMap {
    fn from(attributes: SessionAttributes) -> Self {
        attributes.to_wire()
    }
}

impl TryFrom<SessionMap> for SessionAttributes {
    type Error = DispatchError;

    fn try_from(map: SessionMap) -> Result<Self, Self::Error> {
        Self::decode(&map)
    }
}

fn read<T>(
    map: &SessionMap,
    key: &str,
    parse: fn(&str) -> Option<T>,
    unknown: fn(String) -> AttributeViolation,
) -> Result<Option<T>, AttributeViolation> {
    match map.get(key).map(String::as_str) {
        None | Some("") => Ok(None),
        Some(value) => parse(value).map(Some).ok_or_else(|| unknown(value.to_string())),
    }
}

fn field_check<T>(field: &Result<Option<T>, AttributeViolation>) -> Checked {
    match field {
        Ok(_) => Validation::success(()),
        Err(violation) => Validation::fail(violation.clone()),
    }
}

fn ensure(holds: bool, violation: AttributeViolation) -> Checked {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
