// Web-specific implementations
use js_sys::{Array, Uint8Array};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, HtmlAnchorElement, HtmlIFrameElement, MessageEvent, Response, Url,
};

use crate::views::avatar::types::DownloadError;

/// A window "message" listener that stays registered for as long as this
/// value is alive; dropping it removes the listener.
pub struct MessageSubscription {
    callback: Closure<dyn FnMut(MessageEvent)>,
}

impl MessageSubscription {
    /// Register `handler` on the window message bus. The handler receives
    /// each payload normalized to JSON text.
    pub fn register(mut handler: impl FnMut(String) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            if let Some(text) = message_text(&event) {
                handler(text);
            }
        });

        if let Err(err) =
            window.add_event_listener_with_callback("message", callback.as_ref().unchecked_ref())
        {
            tracing::warn!("failed to register message listener: {:?}", err);
            return None;
        }

        Some(Self { callback })
    }
}

impl Drop for MessageSubscription {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "message",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

// The widget posts its JSON either as a plain string or as a structured
// object; normalize both to text.
fn message_text(event: &MessageEvent) -> Option<String> {
    let data = event.data();
    if let Some(text) = data.as_string() {
        return Some(text);
    }
    js_sys::JSON::stringify(&data).ok().and_then(|s| s.as_string())
}

/// Post `payload` into the iframe identified by `frame_id`. Addressed with
/// a wildcard origin; the widget does its own target filtering.
pub fn post_to_frame(frame_id: &str, payload: &str) {
    let frame = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(frame_id))
        .and_then(|element| element.dyn_into::<HtmlIFrameElement>().ok());

    if let Some(frame) = frame {
        if let Some(target) = frame.content_window() {
            if let Err(err) = target.post_message(&JsValue::from_str(payload), "*") {
                tracing::warn!("failed to post message to creator frame: {:?}", err);
            }
        }
    }
}

/// Fetch `url` and return the full response body as bytes.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, DownloadError> {
    let window = web_sys::window().ok_or(DownloadError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| DownloadError::Fetch(js_error_text(&err)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| DownloadError::Fetch("fetch did not yield a response".into()))?;

    if !response.ok() {
        return Err(DownloadError::Status(response.status()));
    }

    let buffer = response
        .array_buffer()
        .map_err(|err| DownloadError::Body(js_error_text(&err)))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|err| DownloadError::Body(js_error_text(&err)))?;

    Ok(Uint8Array::new(&buffer).to_vec())
}

/// Create a blob URL from raw data for web platform
pub fn create_blob_url(data: &[u8], mime_type: &str) -> Result<String, DownloadError> {
    let uint8_array = Uint8Array::new_with_length(data.len() as u32);
    uint8_array.copy_from(data);

    let array = Array::new();
    array.push(&uint8_array.buffer().into());

    let blob_options = BlobPropertyBag::new();
    blob_options.set_type(mime_type);

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &blob_options)
        .map_err(|err| DownloadError::ObjectUrl(js_error_text(&err)))?;
    Url::create_object_url_with_blob(&blob)
        .map_err(|err| DownloadError::ObjectUrl(js_error_text(&err)))
}

/// Release a blob URL created by [`create_blob_url`].
pub fn revoke_blob_url(url: &str) {
    if let Err(err) = Url::revoke_object_url(url) {
        tracing::warn!("failed to revoke object url: {:?}", err);
    }
}

/// Trigger a download for web platform
pub fn trigger_download(url: &str, filename: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Ok(anchor) = document.create_element("a") {
                if let Ok(anchor_element) = anchor.dyn_into::<HtmlAnchorElement>() {
                    anchor_element.set_href(url);
                    anchor_element.set_download(filename);

                    // Set display:none using setAttribute
                    let _ = anchor_element.set_attribute("style", "display: none");

                    if let Some(body) = document.body() {
                        let _ = body.append_child(&anchor_element);
                        anchor_element.click();
                        let _ = body.remove_child(&anchor_element);
                    }
                }
            }
        }
    }
}

/// Blocking, modal notice. The affordance is intentionally minimal.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
