//! Stepwise construction of a [`Response`].

use crate::{
    request::Intent,
    response::{
        AudioItem, Card, ClearBehavior, Directive, Hint, Image, OutputSpeech, PlayBehavior,
        Reprompt, Response, Stream, VideoItem, VideoMetadata,
    },
};
use serde_json::Value;

const SPEAK_OPEN: &str = "<speak>";
const SPEAK_CLOSE: &str = "</speak>";

/// Builds a [`Response`].
///
/// Speech and reprompt are always emitted as SSML wrapped in exactly one
/// `<speak>` pair, whether or not the caller already wrapped the text.
///
/// A `VideoApp.Launch` directive takes over the device, so while one is
/// present the end-of-session flag stays unset no matter in which order
/// [`add_video_app_launch_directive`] and [`with_should_end_session`] are
/// called.
///
/// [`add_video_app_launch_directive`]: ResponseBuilder::add_video_app_launch_directive
/// [`with_should_end_session`]: ResponseBuilder::with_should_end_session
///
/// # Example
///
/// ```rust
/// use skillkit_model::ResponseBuilder;
///
/// let response = ResponseBuilder::new()
///     .speak("Hello")
///     .with_simple_card("Greeting", "Hello")
///     .with_should_end_session(true)
///     .build();
/// assert_eq!(response.output_speech().map(|s| s.content()), Some("<speak>Hello</speak>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    output_speech: Option<OutputSpeech>,
    card: Option<Card>,
    reprompt: Option<Reprompt>,
    directives: Vec<Directive>,
    should_end_session: Option<bool>,
}

impl ResponseBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output speech.
    pub fn speak(self, speech: impl AsRef<str>) -> Self {
        self.speak_with(speech, None)
    }

    /// Sets the output speech with an explicit play behavior.
    pub fn speak_with_behavior(self, speech: impl AsRef<str>, behavior: PlayBehavior) -> Self {
        self.speak_with(speech, Some(behavior))
    }

    fn speak_with(mut self, speech: impl AsRef<str>, behavior: Option<PlayBehavior>) -> Self {
        self.output_speech = Some(ssml(speech.as_ref(), behavior));
        self
    }

    /// Sets the reprompt. Keeps the session open unless a takeover directive
    /// is present.
    pub fn reprompt(self, reprompt: impl AsRef<str>) -> Self {
        self.reprompt_with(reprompt, None)
    }

    /// Sets the reprompt with an explicit play behavior.
    pub fn reprompt_with_behavior(self, reprompt: impl AsRef<str>, behavior: PlayBehavior) -> Self {
        self.reprompt_with(reprompt, Some(behavior))
    }

    fn reprompt_with(mut self, reprompt: impl AsRef<str>, behavior: Option<PlayBehavior>) -> Self {
        self.reprompt = Some(Reprompt {
            output_speech: ssml(reprompt.as_ref(), behavior),
        });
        if !self.has_takeover_directive() {
            self.should_end_session = Some(false);
        }
        self
    }

    /// Sets a simple card.
    pub fn with_simple_card(mut self, title: impl Into<String>, content: impl Into<String>) -> Self {
        self.card = Some(Card::Simple {
            title: Some(title.into()),
            content: Some(content.into()),
        });
        self
    }

    /// Sets a standard card.
    pub fn with_standard_card(
        mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        image: Option<Image>,
    ) -> Self {
        self.card = Some(Card::Standard {
            title: Some(title.into()),
            text: Some(text.into()),
            image,
        });
        self
    }

    /// Sets an account-linking card.
    pub fn with_link_account_card(mut self) -> Self {
        self.card = Some(Card::LinkAccount);
        self
    }

    /// Sets a permissions-consent card.
    pub fn with_ask_for_permissions_consent_card<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.card = Some(Card::AskForPermissionsConsent {
            permissions: permissions.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Appends a directive.
    ///
    /// Adding a takeover directive clears the end-of-session flag.
    pub fn add_directive(mut self, directive: Directive) -> Self {
        if directive.is_takeover() {
            self.should_end_session = None;
        }
        self.directives.push(directive);
        self
    }

    /// Appends an `AudioPlayer.Play` directive.
    pub fn add_audio_player_play_directive(
        self,
        play_behavior: PlayBehavior,
        token: impl Into<String>,
        url: impl Into<String>,
        offset_in_milliseconds: i64,
        expected_previous_token: Option<String>,
    ) -> Self {
        self.add_directive(Directive::AudioPlayerPlay {
            play_behavior,
            audio_item: AudioItem {
                stream: Stream {
                    token: token.into(),
                    url: url.into(),
                    offset_in_milliseconds,
                    expected_previous_token,
                },
            },
        })
    }

    /// Appends an `AudioPlayer.Stop` directive.
    pub fn add_audio_player_stop_directive(self) -> Self {
        self.add_directive(Directive::AudioPlayerStop)
    }

    /// Appends an `AudioPlayer.ClearQueue` directive.
    pub fn add_audio_player_clear_queue_directive(self, clear_behavior: ClearBehavior) -> Self {
        self.add_directive(Directive::AudioPlayerClearQueue { clear_behavior })
    }

    /// Appends a `VideoApp.Launch` directive and clears the end-of-session flag.
    pub fn add_video_app_launch_directive(
        self,
        source: impl Into<String>,
        title: Option<String>,
        subtitle: Option<String>,
    ) -> Self {
        let metadata = if title.is_some() || subtitle.is_some() {
            Some(VideoMetadata { title, subtitle })
        } else {
            None
        };
        self.add_directive(Directive::VideoAppLaunch {
            video_item: VideoItem {
                source: source.into(),
                metadata,
            },
        })
    }

    /// Appends a `Display.RenderTemplate` directive.
    pub fn add_render_template_directive(self, template: Value) -> Self {
        self.add_directive(Directive::RenderTemplate { template })
    }

    /// Appends a plain-text `Hint` directive.
    pub fn add_hint_directive(self, text: impl Into<String>) -> Self {
        self.add_directive(Directive::Hint {
            hint: Hint::PlainText { text: text.into() },
        })
    }

    /// Appends a `Dialog.Delegate` directive.
    pub fn add_delegate_directive(self, updated_intent: Option<Intent>) -> Self {
        self.add_directive(Directive::DialogDelegate { updated_intent })
    }

    /// Appends a `Dialog.ElicitSlot` directive.
    pub fn add_elicit_slot_directive(
        self,
        slot_to_elicit: impl Into<String>,
        updated_intent: Option<Intent>,
    ) -> Self {
        self.add_directive(Directive::DialogElicitSlot {
            slot_to_elicit: slot_to_elicit.into(),
            updated_intent,
        })
    }

    /// Appends a `Dialog.ConfirmSlot` directive.
    pub fn add_confirm_slot_directive(
        self,
        slot_to_confirm: impl Into<String>,
        updated_intent: Option<Intent>,
    ) -> Self {
        self.add_directive(Directive::DialogConfirmSlot {
            slot_to_confirm: slot_to_confirm.into(),
            updated_intent,
        })
    }

    /// Appends a `Dialog.ConfirmIntent` directive.
    pub fn add_confirm_intent_directive(self, updated_intent: Option<Intent>) -> Self {
        self.add_directive(Directive::DialogConfirmIntent { updated_intent })
    }

    /// Sets the end-of-session flag. Ignored while a takeover directive is
    /// present.
    pub fn with_should_end_session(mut self, should_end_session: bool) -> Self {
        if !self.has_takeover_directive() {
            self.should_end_session = Some(should_end_session);
        }
        self
    }

    /// Finishes the response.
    pub fn build(self) -> Response {
        Response {
            output_speech: self.output_speech,
            card: self.card,
            reprompt: self.reprompt,
            directives: self.directives,
            should_end_session: self.should_end_session,
        }
    }

    fn has_takeover_directive(&self) -> bool {
        self.directives.iter().any(Directive::is_takeover)
    }
}

fn ssml(speech: &str, play_behavior: Option<PlayBehavior>) -> OutputSpeech {
    OutputSpeech::Ssml {
        ssml: format!("{SPEAK_OPEN}{}{SPEAK_CLOSE}", trim_speak_tags(speech)),
        play_behavior,
    }
}

/// Trims whitespace and strips one enclosing `<speak>` pair, if present.
fn trim_speak_tags(speech: &str) -> &str {
    let trimmed = speech.trim();
    match trimmed
        .strip_prefix(SPEAK_OPEN)
        .and_then(|rest| rest.strip_suffix(SPEAK_CLOSE))
    {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}
