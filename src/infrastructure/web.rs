//! Bridging card images to the host's web requests.
//!
//! Each request carries the card identifier in its context map. When the host
//! answers, the identifier is read back to build the reducer event for that
//! card. Answers without a readable identifier are dropped.

use crate::app::Event;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use uuid::Uuid;
use zellij_tile::prelude::PermissionType;

/// Host permissions the plugin asks for on load; image fetches are the only
/// host service it uses.
pub const REQUIRED_PERMISSIONS: [PermissionType; 1] = [PermissionType::WebAccess];

/// Context key holding the card identifier.
pub const CARD_ID_KEY: &str = "card_id";

/// Characters a card title may contain that are not allowed in a URL.
const URL_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL actually sent to the host for an image reference.
///
/// References keep the card title as written, so spaces and non-ASCII letters
/// are escaped here. Characters with a meaning in URLs (`/`, `?`, `:`) pass
/// through unchanged.
///
/// ```
/// use fruitstand::infrastructure::request_url;
///
/// assert_eq!(request_url("https://img.example/?Dragon Fruit"), "https://img.example/?Dragon%20Fruit");
/// ```
#[must_use]
pub fn request_url(reference: &str) -> String {
    utf8_percent_encode(reference, URL_ESCAPES).to_string()
}

/// Context map attached to the image request for card `id`.
#[must_use]
pub fn request_context(id: &Uuid) -> BTreeMap<String, String> {
    BTreeMap::from([(CARD_ID_KEY.to_string(), id.to_string())])
}

/// Turns a web request result into an image event.
///
/// Any 2xx status counts as loaded; everything else is a failure carrying the
/// status.
#[must_use]
pub fn image_event(status: u16, body: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
    let id = match context.get(CARD_ID_KEY).map(|raw| Uuid::parse_str(raw)) {
        Some(Ok(id)) => id,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "web result carried a malformed card id");
            return None;
        }
        None => {
            tracing::debug!(status = status, "web result without card id ignored");
            return None;
        }
    };

    if (200..300).contains(&status) {
        Some(Event::ImageLoaded {
            id,
            bytes: body.len(),
        })
    } else {
        Some(Event::ImageFailed {
            id,
            status: Some(status),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_round_trips_card_id() {
        let id = Uuid::new_v4();
        let context = request_context(&id);
        assert_eq!(
            image_event(200, &[0; 42], &context),
            Some(Event::ImageLoaded { id, bytes: 42 })
        );
    }

    #[test]
    fn non_success_status_is_a_failure() {
        let id = Uuid::new_v4();
        assert_eq!(
            image_event(404, b"missing", &request_context(&id)),
            Some(Event::ImageFailed {
                id,
                status: Some(404)
            })
        );
    }

    #[test]
    fn request_url_escapes_titles_but_not_the_base() {
        assert_eq!(
            request_url("https://source.unsplash.com/500x300/?Äpfel"),
            "https://source.unsplash.com/500x300/?%C3%84pfel"
        );
        assert_eq!(
            request_url("https://source.unsplash.com/500x300/?Kiwi"),
            "https://source.unsplash.com/500x300/?Kiwi"
        );
    }

    #[test]
    fn only_web_access_is_requested() {
        assert_eq!(REQUIRED_PERMISSIONS, [PermissionType::WebAccess]);
    }

    #[test]
    fn results_without_card_are_dropped() {
        assert_eq!(image_event(200, b"", &BTreeMap::new()), None);
        let context = BTreeMap::from([(CARD_ID_KEY.to_string(), "not-a-uuid".to_string())]);
        assert_eq!(image_event(200, b"", &context), None);
    }
}
