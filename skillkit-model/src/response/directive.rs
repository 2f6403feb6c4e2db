use crate::{request::Intent, response::PlayBehavior};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An instruction for the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Directive {
    /// Play an audio stream.
    #[serde(rename = "AudioPlayer.Play")]
    AudioPlayerPlay {
        /// Queueing behavior.
        play_behavior: PlayBehavior,
        /// The stream to play.
        audio_item: AudioItem,
    },
    /// Stop the current stream.
    #[serde(rename = "AudioPlayer.Stop")]
    AudioPlayerStop,
    /// Clear the playback queue.
    #[serde(rename = "AudioPlayer.ClearQueue")]
    AudioPlayerClearQueue {
        /// What to clear.
        clear_behavior: ClearBehavior,
    },
    /// Launch the video app. This takes over the device: the session end flag
    /// must be left unset when this directive is present.
    #[serde(rename = "VideoApp.Launch")]
    VideoAppLaunch {
        /// The video to play.
        video_item: VideoItem,
    },
    /// Render a display template.
    #[serde(rename = "Display.RenderTemplate")]
    RenderTemplate {
        /// Template document.
        template: Value,
    },
    /// Show a hint on screen devices.
    Hint {
        /// The hint.
        hint: Hint,
    },
    /// Let the platform drive the next dialog turn.
    #[serde(rename = "Dialog.Delegate")]
    DialogDelegate {
        /// Intent with slot values to carry forward.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
    /// Ask the user for a slot value.
    #[serde(rename = "Dialog.ElicitSlot")]
    DialogElicitSlot {
        /// Slot to ask for.
        slot_to_elicit: String,
        /// Intent with slot values to carry forward.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
    /// Ask the user to confirm a slot value.
    #[serde(rename = "Dialog.ConfirmSlot")]
    DialogConfirmSlot {
        /// Slot to confirm.
        slot_to_confirm: String,
        /// Intent with slot values to carry forward.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
    /// Ask the user to confirm the whole intent.
    #[serde(rename = "Dialog.ConfirmIntent")]
    DialogConfirmIntent {
        /// Intent with slot values to carry forward.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        updated_intent: Option<Intent>,
    },
}

impl Directive {
    /// Returns true for directives that take over the device and so override
    /// the end-of-session flag.
    pub fn is_takeover(&self) -> bool {
        matches!(self, Self::VideoAppLaunch { .. })
    }
}

/// Audio to play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    /// The stream.
    pub stream: Stream,
}

/// An audio stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    /// Opaque token identifying the stream in later events.
    pub token: String,
    /// HTTPS URL of the stream.
    pub url: String,
    /// Where to start playing.
    #[serde(default)]
    pub offset_in_milliseconds: i64,
    /// Token of the stream this one should follow; required for `ENQUEUE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
}

/// What an `AudioPlayer.ClearQueue` clears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearBehavior {
    /// Clear the queue, keep the current stream.
    ClearEnqueued,
    /// Clear the queue and stop the current stream.
    ClearAll,
}

/// Video to launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    /// HTTPS URL of the video.
    pub source: String,
    /// Title and subtitle shown on screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<VideoMetadata>,
}

/// Video title and subtitle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Subtitle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// Hint content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Hint {
    /// Plain-text hint.
    PlainText {
        /// Hint text.
        text: String,
    },
}
