//! Voice-platform JSON envelope.
//!
//! The engine speaks in [`TurnRequest`] and [`ResponseDescriptor`]. This
//! module converts between those and the platform's request/response JSON:
//! speech wrapped in SSML, and a `Simple` or `Standard` card depending on
//! whether an image is attached.

use crate::dialogue::{
    DialogueEngine, DialogueError, DispatchError, RequestCategory, ResponseDescriptor, SessionMap,
    Slots, TurnRequest,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Dialogue(#[from] DialogueError),
}

impl From<DispatchError> for EnvelopeError {
    fn from(error: DispatchError) -> Self {
        Self::Dialogue(error.into())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestEnvelope {
    #[serde(default)]
    pub session: Option<SessionEnvelope>,
    #[serde(default)]
    pub request: Option<RequestBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionEnvelope {
    #[serde(default)]
    pub attributes: Option<SessionMap>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RequestBody {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub intent: Option<IntentBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct IntentBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotBody>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SlotBody {
    #[serde(default)]
    pub value: Option<String>,
}

impl RequestEnvelope {
    pub fn from_json(body: &str) -> Result<Self, EnvelopeError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Lift the envelope into an engine request.
    ///
    /// A missing session or attribute map is an empty session. Slots without
    /// a value are dropped.
    pub fn into_turn(self) -> Result<TurnRequest, DispatchError> {
        let request = self.request.ok_or(DispatchError::MissingRequestType)?;
        let kind = request.kind.ok_or(DispatchError::MissingRequestType)?;
        let category = RequestCategory::from_wire(&kind)?;

        let session_attributes = self
            .session
            .and_then(|session| session.attributes)
            .unwrap_or_default();

        let (intent_name, slots) = match request.intent {
            Some(intent) => {
                let slots: Slots = intent
                    .slots
                    .into_iter()
                    .filter_map(|(name, slot)| slot.value.map(|value| (name, value)))
                    .collect();
                (intent.name, slots)
            }
            None => (None, Slots::new()),
        };

        Ok(TurnRequest {
            category,
            intent_name,
            slots,
            session_attributes,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML",
            ssml: format!("<speak>{text}</speak>"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImage {
    pub small_image_url: String,
    pub large_image_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardEnvelope {
    Simple {
        title: String,
        content: String,
    },
    Standard {
        title: String,
        text: String,
        image: CardImage,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardEnvelope>,
    pub should_end_session: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub response: ResponseBody,
    pub session_attributes: SessionMap,
}

impl ResponseEnvelope {
    pub fn from_descriptor(descriptor: &ResponseDescriptor) -> Self {
        let card = descriptor.card.as_ref().map(|card| {
            match card.image_url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => CardEnvelope::Standard {
                    title: card.title.clone(),
                    text: card.body.clone(),
                    image: CardImage {
                        small_image_url: url.to_string(),
                        large_image_url: url.to_string(),
                    },
                },
                None => CardEnvelope::Simple {
                    title: card.title.clone(),
                    content: card.body.clone(),
                },
            }
        });

        Self {
            version: RESPONSE_VERSION,
            response: ResponseBody {
                output_speech: OutputSpeech::ssml(&descriptor.speech_text),
                reprompt: descriptor.reprompt_text.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                card,
                should_end_session: descriptor.end_session,
            },
            session_attributes: descriptor.session_attributes.to_wire(),
        }
    }

    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run one platform request through the engine.
///
/// Returns `Ok(None)` for a session-ended request, which takes no reply.
pub fn handle_json(
    engine: &DialogueEngine,
    body: &str,
) -> Result<Option<ResponseEnvelope>, EnvelopeError> {
    let turn = RequestEnvelope::from_json(body)?.into_turn()?;
    let response = engine.handle_request(&turn)?;
    Ok(response.as_ref().map(ResponseEnvelope::from_descriptor))
}
