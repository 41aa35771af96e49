//! Client-side API types and fetch helpers.
//!
//! All requests go through the shell server's `/api` proxy so the browser
//! stays same-origin with the backend. Helpers attach the bearer token when
//! one is supplied and map failures into [`ApiError`].

use serde::{Deserialize, Serialize};

use crate::app::session::User;

/// Typed client-side request failure.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never reached the backend (offline, proxy down, SSR stub)
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-success status; message is the backend's
    /// own error text when it provided one
    #[error("{1}")]
    Status(u16, String),
    /// Response body was not the expected shape
    #[error("invalid response: {0}")]
    Decode(String),
}

// =============================================================================
// Auth types
// =============================================================================

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Payload for `/auth/register` (staff-created accounts)
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =============================================================================
// Reference data types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Country {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub is_destination: bool,
    #[serde(default)]
    pub is_affiliated: bool,
}

/// Payload for `POST /locations/countries`. The UI exposes a single
/// category selector; the flags are derived from it.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct CountryCreateRequest {
    pub name: String,
    pub is_destination: bool,
    pub is_affiliated: bool,
}

impl CountryCreateRequest {
    /// `destination` and `affiliated` map to their flag; anything else
    /// (including the bulk-import default) is a national country.
    pub fn from_category(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            is_destination: category == "destination",
            is_affiliated: category == "affiliated",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct City {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub country_name: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Agency {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    /// Backing account id; used as the chat contact identity
    #[serde(default)]
    pub owner_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Hospital {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub country_id: Option<i64>,
    #[serde(default)]
    pub city_id: Option<i64>,
    #[serde(default)]
    pub max_daily_candidates: Option<i64>,
    /// Backing account id; used as the chat contact identity
    #[serde(default)]
    pub owner_id: Option<i64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AccountUser {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
}

// =============================================================================
// Booking / payment / messaging types
// =============================================================================

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub position_applied: Option<String>,
    #[serde(default)]
    pub country_traveling_to: Option<String>,
    #[serde(default)]
    pub hospital_id: Option<i64>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PendingPayment {
    pub id: i64,
    #[serde(default)]
    pub booking_id: Option<i64>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub payer_name: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: i64,
    #[serde(default)]
    pub sender_id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A stored medical report. Only the id is interpreted client-side; the
/// examination fields flow back into the wizard draft untyped.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct MedicalReport {
    pub id: i64,
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Create/update responses only need to surface the report id.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ReportIdResponse {
    pub id: i64,
}

// =============================================================================
// Fetch helpers (browser only; host builds get failing stubs)
// =============================================================================

#[cfg(target_arch = "wasm32")]
async fn do_fetch(
    method: &str,
    url: &str,
    token: Option<&str>,
    json_body: Option<String>,
    form_body: Option<web_sys::FormData>,
) -> Result<web_sys::Response, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;

    let headers = Headers::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    if let Some(token) = token {
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = json_body {
        headers
            .set("Content-Type", "application/json")
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        opts.set_body(&wasm_bindgen::JsValue::from_str(&body));
    } else if let Some(form) = form_body {
        // Content-Type left unset so the browser supplies the boundary
        opts.set_body(&form);
    }
    opts.set_headers(&headers);

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Network("not a Response".into()))?;

    if resp.ok() {
        return Ok(resp);
    }

    // Prefer the backend's own error message when the body carries one
    let status = resp.status();
    let message = match resp.text() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(text) => {
                let text = text.as_string().unwrap_or_default();
                serde_json::from_str::<serde_json::Value>(&text)
                    .ok()
                    .and_then(|v| {
                        v.get("message")
                            .or_else(|| v.get("error"))
                            .and_then(|m| m.as_str())
                            .map(str::to_string)
                    })
                    .unwrap_or_else(|| format!("request failed with status {status}"))
            }
            Err(_) => format!("request failed with status {status}"),
        },
        Err(_) => format!("request failed with status {status}"),
    };
    Err(ApiError::Status(status, message))
}

#[cfg(target_arch = "wasm32")]
async fn response_json<T: for<'de> Deserialize<'de>>(
    resp: web_sys::Response,
) -> Result<T, ApiError> {
    use wasm_bindgen_futures::JsFuture;

    let json = JsFuture::from(resp.json().map_err(|e| ApiError::Decode(format!("{e:?}")))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(format!("{e:?}")))
}

/// GET a JSON resource
#[cfg(target_arch = "wasm32")]
pub async fn get_json<T: for<'de> Deserialize<'de>>(
    url: &str,
    token: Option<&str>,
) -> Result<T, ApiError> {
    let resp = do_fetch("GET", url, token, None, None).await?;
    response_json(resp).await
}

/// POST a JSON body, decode a JSON response
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = do_fetch("POST", url, token, Some(body), None).await?;
    response_json(resp).await
}

/// PATCH a JSON body, decode a JSON response
#[cfg(target_arch = "wasm32")]
pub async fn patch_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = do_fetch("PATCH", url, token, Some(body), None).await?;
    response_json(resp).await
}

/// POST a JSON body, ignore the response body
#[cfg(target_arch = "wasm32")]
pub async fn post_json_no_response<B: Serialize>(
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<(), ApiError> {
    let body = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    do_fetch("POST", url, token, Some(body), None).await?;
    Ok(())
}

/// DELETE a resource, ignore the response body
#[cfg(target_arch = "wasm32")]
pub async fn delete(url: &str, token: Option<&str>) -> Result<(), ApiError> {
    do_fetch("DELETE", url, token, None, None).await?;
    Ok(())
}

/// POST multipart form data: text fields plus an optional file part.
#[cfg(target_arch = "wasm32")]
pub async fn post_multipart<T: for<'de> Deserialize<'de>>(
    url: &str,
    token: Option<&str>,
    fields: &[(&str, String)],
    file: Option<(&str, &str, &[u8])>,
) -> Result<T, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    if let Some((name, filename, bytes)) = file {
        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(bytes));
        let blob = web_sys::Blob::new_with_u8_array_sequence(&array)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename(name, &blob, filename)
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
    }
    let resp = do_fetch("POST", url, token, None, Some(form)).await?;
    response_json(resp).await
}

/// Fetch a binary resource (slip, bordereau, report PDF) and return an
/// object URL the browser can open.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_blob_url(url: &str, token: Option<&str>) -> Result<String, ApiError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let resp = do_fetch("GET", url, token, None, None).await?;
    let blob = JsFuture::from(resp.blob().map_err(|e| ApiError::Decode(format!("{e:?}")))?)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    let blob: web_sys::Blob = blob
        .dyn_into()
        .map_err(|_| ApiError::Decode("not a Blob".into()))?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| ApiError::Decode(format!("{e:?}")))
}

/// Open a URL in a new browser tab
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Native browser confirmation dialog
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

// ============ SSR stubs - not reachable during server rendering ============

#[cfg(not(target_arch = "wasm32"))]
pub async fn get_json<T: for<'de> Deserialize<'de>>(
    _url: &str,
    _token: Option<&str>,
) -> Result<T, ApiError> {
    Err(ApiError::Network("get_json is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    _url: &str,
    _token: Option<&str>,
    _body: &B,
) -> Result<T, ApiError> {
    Err(ApiError::Network("post_json is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn patch_json<B: Serialize, T: for<'de> Deserialize<'de>>(
    _url: &str,
    _token: Option<&str>,
    _body: &B,
) -> Result<T, ApiError> {
    Err(ApiError::Network("patch_json is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_json_no_response<B: Serialize>(
    _url: &str,
    _token: Option<&str>,
    _body: &B,
) -> Result<(), ApiError> {
    Err(ApiError::Network(
        "post_json_no_response is only available in browser".into(),
    ))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn delete(_url: &str, _token: Option<&str>) -> Result<(), ApiError> {
    Err(ApiError::Network("delete is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn post_multipart<T: for<'de> Deserialize<'de>>(
    _url: &str,
    _token: Option<&str>,
    _fields: &[(&str, String)],
    _file: Option<(&str, &str, &[u8])>,
) -> Result<T, ApiError> {
    Err(ApiError::Network("post_multipart is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_blob_url(_url: &str, _token: Option<&str>) -> Result<String, ApiError> {
    Err(ApiError::Network("fetch_blob_url is only available in browser".into()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(_url: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(_message: &str) -> bool {
    false
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_stubs_report_network_errors() {
        let err = tokio_test::block_on(get_json::<serde_json::Value>("/api/bookings", None))
            .expect_err("host stub must not succeed");
        assert!(matches!(err, ApiError::Network(_)));

        let err = tokio_test::block_on(fetch_blob_url("/api/bookings/1/slip", None))
            .expect_err("host stub must not succeed");
        assert!(matches!(err, ApiError::Network(_)));
    }

    #[test]
    fn status_error_displays_backend_message() {
        let err = ApiError::Status(403, "Not allowed".to_string());
        assert_eq!(err.to_string(), "Not allowed");
    }
}
