//! The postMessage contract with the embedded Ready Player Me creator.
//!
//! The frame is subscribed to exactly one event; everything arriving on the
//! window message bus is normalized to JSON text and interpreted through a
//! closed set of variants. Traffic that does not match the widget's source
//! tag and event name is dropped without comment, since the bus also carries
//! messages from unrelated frames.

use serde::{Deserialize, Serialize};

/// Creator endpoint; `frameApi` switches on its messaging interface.
pub const CREATOR_URL: &str = "https://demo.readyplayer.me/avatar?frameApi";

pub const WIDGET_SOURCE: &str = "readyplayerme";
pub const AVATAR_EXPORTED: &str = "v1.avatar.exported";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeRequest<'a> {
    target: &'a str,
    r#type: &'a str,
    event_name: &'a str,
}

/// The JSON posted into the frame on every load to subscribe to the
/// export event.
pub fn subscribe_request() -> String {
    let request = SubscribeRequest {
        target: WIDGET_SOURCE,
        r#type: "subscribe",
        event_name: AVATAR_EXPORTED,
    };
    // A three-&str struct cannot fail to serialize
    serde_json::to_string(&request).unwrap_or_default()
}

// Inbound shape, every field optional so oddly-shaped traffic
// deserializes instead of erroring
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct InboundMessage {
    source: Option<String>,
    event_name: Option<String>,
    data: InboundData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InboundData {
    url: Option<String>,
}

/// Everything a frame message can mean to us.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    /// The user finished an avatar; `url` is the extensionless asset
    /// identifier.
    AvatarExported { url: String },
    /// Anything else: malformed, foreign source, other event, no url.
    Unrelated,
}

/// Interpret one raw message from the window bus.
pub fn parse_widget_message(raw: &str) -> WidgetEvent {
    let message: InboundMessage = match serde_json::from_str(raw) {
        Ok(message) => message,
        Err(_) => return WidgetEvent::Unrelated,
    };

    if message.source.as_deref() != Some(WIDGET_SOURCE) {
        return WidgetEvent::Unrelated;
    }

    if message.event_name.as_deref() != Some(AVATAR_EXPORTED) {
        return WidgetEvent::Unrelated;
    }

    match message.data.url {
        Some(url) if !url.is_empty() => WidgetEvent::AvatarExported { url },
        _ => WidgetEvent::Unrelated,
    }
}

/// View state fed by the bridge: the current export and whether its
/// preview image has finished loading.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExportState {
    pub avatar_url: String,
    pub image_loaded: bool,
}

impl ExportState {
    /// Every valid export overwrites the previous one and puts the preview
    /// back into its placeholder state. Unrelated events change nothing.
    pub fn apply(&mut self, event: &WidgetEvent) {
        if let WidgetEvent::AvatarExported { url } = event {
            self.avatar_url = url.clone();
            self.image_loaded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_json(source: &str, event: &str, url: &str) -> String {
        format!(
            r#"{{"source":"{}","eventName":"{}","data":{{"url":"{}"}}}}"#,
            source, event, url
        )
    }

    #[test]
    fn subscribe_request_has_exact_shape() {
        let value: serde_json::Value = serde_json::from_str(&subscribe_request()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "target": "readyplayerme",
                "type": "subscribe",
                "eventName": "v1.avatar.exported",
            })
        );
    }

    #[test]
    fn export_event_yields_the_url() {
        let raw = export_json("readyplayerme", "v1.avatar.exported", "https://e.com/a");
        assert_eq!(
            parse_widget_message(&raw),
            WidgetEvent::AvatarExported {
                url: "https://e.com/a".into()
            }
        );
    }

    #[test]
    fn foreign_source_is_unrelated() {
        let raw = export_json("someoneelse", "v1.avatar.exported", "https://e.com/a");
        assert_eq!(parse_widget_message(&raw), WidgetEvent::Unrelated);
    }

    #[test]
    fn other_event_names_are_unrelated() {
        let raw = export_json("readyplayerme", "v1.frame.ready", "https://e.com/a");
        assert_eq!(parse_widget_message(&raw), WidgetEvent::Unrelated);
    }

    #[test]
    fn malformed_payloads_are_unrelated() {
        assert_eq!(parse_widget_message("not json at all"), WidgetEvent::Unrelated);
        assert_eq!(parse_widget_message("42"), WidgetEvent::Unrelated);
        assert_eq!(parse_widget_message(r#""just a string""#), WidgetEvent::Unrelated);
    }

    #[test]
    fn missing_url_is_unrelated() {
        let raw = r#"{"source":"readyplayerme","eventName":"v1.avatar.exported","data":{}}"#;
        assert_eq!(parse_widget_message(raw), WidgetEvent::Unrelated);
    }

    #[test]
    fn unrelated_events_leave_state_alone() {
        let mut state = ExportState {
            avatar_url: "https://e.com/old".into(),
            image_loaded: true,
        };
        state.apply(&WidgetEvent::Unrelated);
        assert_eq!(state.avatar_url, "https://e.com/old");
        assert!(state.image_loaded);
    }

    #[test]
    fn export_overwrites_url_and_resets_loaded_flag() {
        let mut state = ExportState {
            avatar_url: "https://e.com/old".into(),
            image_loaded: true,
        };
        state.apply(&WidgetEvent::AvatarExported {
            url: "https://e.com/new".into(),
        });
        assert_eq!(state.avatar_url, "https://e.com/new");
        assert!(!state.image_loaded);
    }

    #[test]
    fn second_export_wins() {
        let mut state = ExportState::default();
        state.apply(&parse_widget_message(&export_json(
            "readyplayerme",
            "v1.avatar.exported",
            "https://e.com/u1",
        )));
        state.image_loaded = true; // the first preview finished loading
        state.apply(&parse_widget_message(&export_json(
            "readyplayerme",
            "v1.avatar.exported",
            "https://e.com/u2",
        )));
        assert_eq!(state.avatar_url, "https://e.com/u2");
        assert!(!state.image_loaded);
    }
}
