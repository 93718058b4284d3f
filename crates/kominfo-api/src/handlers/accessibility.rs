// ============================================================================
// Kominfo API - Accessibility Panel
// File: crates/kominfo-api/src/handlers/accessibility.rs
// ============================================================================
//! Panel state travels in the `a11y` cookie as base64url JSON so server
//! rendered pages can apply it before the first paint.

use axum::{
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Serialize;

use kominfo_core::domain::{AccessibilityAction, AccessibilitySettings};
use kominfo_shared::constants::ACCESSIBILITY_COOKIE;

const COOKIE_MAX_AGE_SECONDS: u32 = 365 * 24 * 3600;

/// Settings from the request cookie; missing or unreadable cookies give defaults.
pub fn settings_from_headers(headers: &HeaderMap) -> AccessibilitySettings {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| raw.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == ACCESSIBILITY_COOKIE)
        .and_then(|(_, value)| URL_SAFE_NO_PAD.decode(value).ok())
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(|json| AccessibilitySettings::from_json(&json))
        .unwrap_or_default()
}

pub fn settings_cookie(settings: &AccessibilitySettings) -> Option<HeaderValue> {
    let encoded = URL_SAFE_NO_PAD.encode(settings.to_json());
    HeaderValue::from_str(&format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        ACCESSIBILITY_COOKIE, encoded, COOKIE_MAX_AGE_SECONDS
    ))
    .ok()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityView {
    pub settings: AccessibilitySettings,
    pub classes: Vec<&'static str>,
    pub root_style: Option<String>,
    pub is_default: bool,
}

impl From<AccessibilitySettings> for AccessibilityView {
    fn from(settings: AccessibilitySettings) -> Self {
        Self {
            classes: settings.css_classes(),
            root_style: settings.root_style(),
            is_default: settings.is_default(),
            settings,
        }
    }
}

/// GET /api/accessibility
pub async fn current(headers: HeaderMap) -> Json<AccessibilityView> {
    Json(settings_from_headers(&headers).into())
}

/// POST /api/accessibility - one panel action, answers the new state and
/// refreshes the cookie
pub async fn apply(headers: HeaderMap, Json(action): Json<AccessibilityAction>) -> Response {
    let mut settings = settings_from_headers(&headers);
    settings.apply(action);

    let cookie = settings_cookie(&settings);
    let mut response = Json(AccessibilityView::from(settings)).into_response();
    if let Some(cookie) = cookie {
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use kominfo_core::domain::accessibility::{ContrastMode, Toggle};

    fn headers_with(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_round_trip_keeps_settings() {
        let mut settings = AccessibilitySettings::default();
        settings.apply(AccessibilityAction::SetContrast(ContrastMode::Dark));
        settings.apply(AccessibilityAction::Toggle(Toggle::HighlightLinks));

        let set_cookie = settings_cookie(&settings).unwrap();
        let pair = set_cookie.to_str().unwrap().split(';').next().unwrap().to_string();
        let parsed = settings_from_headers(&headers_with(&format!("theme=light; {}", pair)));

        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_garbage_cookie_gives_defaults() {
        let parsed = settings_from_headers(&headers_with("a11y=%%%not-base64"));
        assert!(parsed.is_default());

        let not_json = URL_SAFE_NO_PAD.encode("{broken");
        let parsed = settings_from_headers(&headers_with(&format!("a11y={}", not_json)));
        assert!(parsed.is_default());
    }
}
