//! Movies API Bindings
//!
//! Frontend bindings to the backend JSON endpoints, plus the trait the
//! controller talks to so views can be driven without a browser.

mod movies;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{ApiError, ApiResult};
use crate::models::{ListKind, MovieSummary, PlaybackInfo};

pub use movies::HttpMovieApi;

/// Characters escaped when an item id is placed in a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

// ========================
// Endpoints
// ========================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint<'a> {
    List(ListKind),
    PlayUrl(&'a str),
}

impl Endpoint<'_> {
    pub fn path(&self) -> String {
        match self {
            Endpoint::List(ListKind::Watched) => "/api/movies/watched".to_string(),
            Endpoint::List(ListKind::Recommended) => "/api/movies/recommended".to_string(),
            Endpoint::PlayUrl(item_id) => {
                format!("/api/movies/url/{}", utf8_percent_encode(item_id, PATH_SEGMENT))
            }
        }
    }
}

// ========================
// Client Trait
// ========================

/// Read access to the movies backend
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait MovieApi: Send + Sync {
    /// Fetch one of the two movie lists, in server order
    async fn list(&self, kind: ListKind) -> ApiResult<Vec<MovieSummary>>;

    /// Fetch the playable URL for an item
    async fn play_url(&self, item_id: &str) -> ApiResult<PlaybackInfo>;
}

// ========================
// Fetch Helpers
// ========================

/// GET `url` with the browser fetch API and decode the JSON body
pub(crate) async fn fetch_json<T: DeserializeOwned>(url: &str) -> ApiResult<T> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| network_error(url, &e))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| network_error(url, &e))?;

    let status = response.status();
    let body = response.text().map_err(|e| network_error(url, &e))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| network_error(url, &e))?
        .as_string()
        .unwrap_or_default();

    decode_response(url, status, &body)
}

/// Turn a status and body into a typed result. Non-2xx is a failure.
pub(crate) fn decode_response<T: DeserializeOwned>(url: &str, status: u16, body: &str) -> ApiResult<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
        });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn network_error(url: &str, value: &JsValue) -> ApiError {
    ApiError::Network {
        url: url.to_string(),
        message: value.as_string().unwrap_or_else(|| format!("{:?}", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_paths() {
        assert_eq!(Endpoint::List(ListKind::Watched).path(), "/api/movies/watched");
        assert_eq!(Endpoint::List(ListKind::Recommended).path(), "/api/movies/recommended");
    }

    #[test]
    fn test_list_container_ids() {
        assert_eq!(ListKind::Watched.container_id(), "watched-list");
        assert_eq!(ListKind::Recommended.container_id(), "recommended-list");
    }

    #[test]
    fn test_play_url_path() {
        assert_eq!(Endpoint::PlayUrl("42").path(), "/api/movies/url/42");
        assert_eq!(
            Endpoint::PlayUrl("a1b2c3d4e5f6").path(),
            "/api/movies/url/a1b2c3d4e5f6"
        );
    }

    #[test]
    fn test_play_url_path_escapes_segment() {
        assert_eq!(Endpoint::PlayUrl("a/b c").path(), "/api/movies/url/a%2Fb%20c");
        assert_eq!(Endpoint::PlayUrl("x?y#z").path(), "/api/movies/url/x%3Fy%23z");
    }

    #[test]
    fn test_decode_ok_body() {
        let movies: Vec<MovieSummary> =
            decode_response("/w", 200, r#"[{"id": "1", "name": "One"}]"#).unwrap();
        assert_eq!(movies, vec![MovieSummary::new("1", "One")]);
    }

    #[test]
    fn test_decode_non_2xx_is_status_error() {
        let result: ApiResult<Vec<MovieSummary>> = decode_response("/w", 502, "[]");
        assert_eq!(
            result,
            Err(ApiError::Status {
                url: "/w".to_string(),
                status: 502
            })
        );
    }

    #[test]
    fn test_decode_malformed_json() {
        let result: ApiResult<PlaybackInfo> = decode_response("/u/1", 200, "<html>oops</html>");
        assert!(matches!(result, Err(ApiError::Decode { ref url, .. }) if url == "/u/1"));
    }

    #[test]
    fn test_decode_wrong_shape() {
        let result: ApiResult<Vec<MovieSummary>> = decode_response("/w", 200, r#"{"playUrl": "x"}"#);
        assert!(matches!(result, Err(ApiError::Decode { .. })));
    }
}
