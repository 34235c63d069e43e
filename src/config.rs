//! API Configuration
//!
//! Where the movies API lives. Same origin unless the host page says otherwise.

/// `<meta name="movies-api-base" content="https://host/prefix">` overrides the base URL.
pub const BASE_URL_META: &str = "movies-api-base";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from the host page, falling back to same origin.
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", BASE_URL_META))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        match base {
            Some(base) => {
                log::info!("[APP] Using movies API at {}", base);
                Self::new(base)
            }
            None => Self::default(),
        }
    }

    /// Join an absolute API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
