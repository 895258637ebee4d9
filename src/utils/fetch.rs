//! Network utilities with timeout support.
//!
//! Requests go through the Fetch API and are raced against a timer, so a
//! backend that never answers still produces an error.

use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use sous_core::FetchError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::dom;
use crate::config::FETCH_TIMEOUT_MS;

/// Result of a promise race with timeout.
#[derive(Debug)]
enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
///
/// The timer resolves to `undefined`, which is how a timeout is told apart
/// from a real result.
async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = dom::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let mut timer = None;
    let timeout_promise = Promise::new(&mut |resolve, _| {
        timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms)
            .ok();
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);

    let result = JsFuture::from(Promise::race(&race_array)).await;
    if let Some(handle) = timer {
        window.clear_timeout_with_handle(handle);
    }

    match result {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(rejection_message(&e)),
    }
}

/// Readable text for a rejected promise.
///
/// `fetch` rejects with a `TypeError` object rather than a string.
fn rejection_message(error: &JsValue) -> String {
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

/// POST `body` as JSON and parse the JSON response.
pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, FetchError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload =
        serde_json::to_string(body).map_err(|e| FetchError::JsonParseError(e.to_string()))?;
    let text = send(url, "POST", Some(&payload)).await?;
    decode_json(&text)
}

/// Parse a response body, mapping failures to [`FetchError::JsonParseError`].
fn decode_json<T: DeserializeOwned>(text: &str) -> Result<T, FetchError> {
    serde_json::from_str(text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Accept 2xx statuses only.
fn check_status(status: u16) -> Result<(), FetchError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FetchError::HttpError(status))
    }
}

/// Send a request and return the response body as text.
///
/// Non-2xx responses are errors. A JSON body sets `Content-Type`.
async fn send(url: &str, method: &str, json_body: Option<&str>) -> Result<String, FetchError> {
    let window = dom::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = json_body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            check_status(resp.status())?;

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sous_core::AskResponse;

    #[test]
    fn test_decode_ask_response() {
        let resp: AskResponse = decode_json(r#"{"reply":"Hi!","recipe":null}"#).unwrap();
        assert_eq!(resp.reply, "Hi!");
        assert_eq!(resp.recipe, None);
    }

    #[test]
    fn test_malformed_body_is_json_error() {
        let err = decode_json::<AskResponse>("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)), "got {:?}", err);

        // Valid JSON without a reply is still an error
        let err = decode_json::<AskResponse>(r#"{"recipe":null}"#).unwrap_err();
        assert!(matches!(err, FetchError::JsonParseError(_)), "got {:?}", err);
    }

    #[test]
    fn test_check_status() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(404), Err(FetchError::HttpError(404)));
        assert_eq!(check_status(500), Err(FetchError::HttpError(500)));
        assert_eq!(check_status(302), Err(FetchError::HttpError(302)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use sous_core::{AskRequest, AskResponse};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unreachable_backend_is_network_error() {
        // Port 9 (discard) is not served by anything in the test browser
        let request = AskRequest::new("recipe for soup", "sess-test");
        let err = post_json::<_, AskResponse>("http://127.0.0.1:9/ask", &request)
            .await
            .unwrap_err();

        match err {
            FetchError::NetworkError(msg) => assert!(!msg.is_empty() && msg != "Unknown error"),
            other => panic!("expected NetworkError, got {:?}", other),
        }
    }
}
