//! Response descriptor produced by each turn.

use super::session::SessionAttributes;
use crate::catalog::{CardContent, NavigationNode, DESTINATION_PLACEHOLDER};
use serde::{Deserialize, Serialize};

/// Visual card shown beside the speech on capable devices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Card {
    /// Render catalog card content, filling in the destination placeholder.
    pub fn render(content: &CardContent, destination: &str) -> Self {
        Self {
            title: content.title.to_string(),
            body: content.body.replace(DESTINATION_PLACEHOLDER, destination),
            image_url: content.image_url.map(str::to_string),
        }
    }
}

/// Everything the transport layer needs to answer one turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDescriptor {
    pub speech_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    pub end_session: bool,
    pub session_attributes: SessionAttributes,
}

impl ResponseDescriptor {
    pub fn speak(speech: impl Into<String>, session_attributes: SessionAttributes) -> Self {
        Self {
            speech_text: speech.into(),
            reprompt_text: None,
            card: None,
            end_session: false,
            session_attributes,
        }
    }

    /// A turn with nothing to say. Used for content that is missing from
    /// the catalog.
    pub fn silent(session_attributes: SessionAttributes) -> Self {
        Self::speak(String::new(), session_attributes)
    }

    /// Speak a catalog node: speech, reprompt and card.
    ///
    /// `destination` fills the card placeholder; without it a card that
    /// needs one is left out.
    pub fn from_node(
        node: &NavigationNode,
        destination: Option<&str>,
        session_attributes: SessionAttributes,
    ) -> Self {
        let card = node.card.as_ref().and_then(|content| {
            match (content.body.contains(DESTINATION_PLACEHOLDER), destination) {
                (true, None) => None,
                (_, destination) => Some(Card::render(content, destination.unwrap_or_default())),
            }
        });
        Self {
            speech_text: node.speech.to_string(),
            reprompt_text: node.reprompt.map(str::to_string),
            card,
            end_session: false,
            session_attributes,
        }
    }

    /// Re-ask the question a node poses, as both speech and reprompt.
    pub fn ask(node: &NavigationNode, session_attributes: SessionAttributes) -> Self {
        Self::speak(node.question(), session_attributes).with_reprompt(node.question())
    }

    pub fn with_reprompt(mut self, reprompt: impl Into<String>) -> Self {
        self.reprompt_text = Some(reprompt.into());
        self
    }

    pub fn with_card(mut self, card: Card) -> Self {
        self.card = Some(card);
        self
    }

    /// Mark the session as finished.
    pub fn ending(mut self) -> Self {
        self.end_session = true;
        self.reprompt_text = None;
        self
    }

    pub fn is_silent(&self) -> bool {
        self.speech_text.is_empty()
    }
}
