//! Device and platform state carried on the request envelope.

use crate::session::{Application, User};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// State of the device and its interfaces at the time of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// System-wide state.
    #[serde(rename = "System")]
    pub system: SystemState,
    /// Audio player state, when the device has one.
    #[serde(
        rename = "AudioPlayer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub audio_player: Option<AudioPlayerState>,
}

/// The `System` object of the context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    /// The skill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    /// The user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// The device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    /// Base URL for outbound platform API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
    /// Bearer token for outbound platform API calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_access_token: Option<String>,
}

impl SystemState {
    /// Returns the device id, if the context names a device.
    pub fn device_id(&self) -> Option<&str> {
        self.device.as_ref().map(|d| d.device_id.as_str())
    }
}

/// The device the user is talking to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device id.
    pub device_id: String,
    /// Interfaces the device supports, keyed by interface name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub supported_interfaces: Map<String, Value>,
}

impl Device {
    /// Returns true if the device advertises the named interface
    /// (e.g. `"AudioPlayer"`, `"VideoApp"`).
    pub fn supports(&self, interface: &str) -> bool {
        self.supported_interfaces.contains_key(interface)
    }
}

/// Audio player state reported by the device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    /// Token of the current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Playback offset of the current stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_in_milliseconds: Option<i64>,
    /// What the player is doing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_activity: Option<PlayerActivity>,
}

/// Audio player activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerActivity {
    /// Nothing has been played yet.
    Idle,
    /// Playback paused.
    Paused,
    /// Playing.
    Playing,
    /// Stream buffer ran empty.
    BufferUnderrun,
    /// Stream played to the end.
    Finished,
    /// Stopped by the user or a directive.
    Stopped,
}
