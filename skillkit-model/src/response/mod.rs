//! Response body types.
//!
//! A [`Response`] is immutable once built; construct one with
//! [`ResponseBuilder`] or the [`Response::tell`] / [`Response::ask`]
//! shortcuts.

mod builder;
mod card;
mod directive;

pub use builder::ResponseBuilder;
pub use card::{Card, Image};
pub use directive::{AudioItem, ClearBehavior, Directive, Hint, Stream, VideoItem, VideoMetadata};

use serde::{Deserialize, Serialize};

/// The body of a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    card: Option<Card>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    should_end_session: Option<bool>,
}

impl Response {
    /// Speaks `speech` and ends the session.
    pub fn tell(speech: impl AsRef<str>) -> Self {
        ResponseBuilder::new()
            .speak(speech)
            .with_should_end_session(true)
            .build()
    }

    /// Speaks `speech`, keeps the session open and reprompts with `reprompt`
    /// if the user stays silent.
    pub fn ask(speech: impl AsRef<str>, reprompt: impl AsRef<str>) -> Self {
        ResponseBuilder::new()
            .speak(speech)
            .reprompt(reprompt)
            .with_should_end_session(false)
            .build()
    }

    /// What the device says.
    pub fn output_speech(&self) -> Option<&OutputSpeech> {
        self.output_speech.as_ref()
    }

    /// The card shown in the companion app.
    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// What the device says if the user stays silent.
    pub fn reprompt(&self) -> Option<&Reprompt> {
        self.reprompt.as_ref()
    }

    /// Directives for the device.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// `Some(true)` ends the session, `Some(false)` keeps it open, `None`
    /// leaves the decision to the platform.
    pub fn should_end_session(&self) -> Option<bool> {
        self.should_end_session
    }
}

/// Speech rendered by the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum OutputSpeech {
    /// Plain text.
    PlainText {
        /// Text to speak.
        text: String,
        /// How the speech interacts with the playback queue.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        play_behavior: Option<PlayBehavior>,
    },
    /// SSML markup wrapped in `<speak>` tags.
    #[serde(rename = "SSML")]
    Ssml {
        /// Markup to speak.
        ssml: String,
        /// How the speech interacts with the playback queue.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        play_behavior: Option<PlayBehavior>,
    },
}

impl OutputSpeech {
    /// The text or markup payload.
    pub fn content(&self) -> &str {
        match self {
            Self::PlainText { text, .. } => text,
            Self::Ssml { ssml, .. } => ssml,
        }
    }
}

/// Speech used when the user does not respond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    /// The reprompt speech.
    pub output_speech: OutputSpeech,
}

/// Queueing behavior for speech and audio streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    /// Add to the end of the queue.
    Enqueue,
    /// Stop current playback and replace the whole queue.
    ReplaceAll,
    /// Keep what is playing, replace everything queued after it.
    ReplaceEnqueued,
}
