//! Frontend Models
//!
//! Data structures matching the movies API responses.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Movie summary as returned by the list endpoints.
///
/// The watched endpoint emits capitalised keys (`Id`, `Name`, `Genres`, `Year`),
/// the recommended endpoint lowercase ones with `id: null`. Both decode here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default, alias = "Id")]
    pub id: Option<String>,
    #[serde(default, alias = "Name", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, alias = "Genres")]
    pub genres: Option<Vec<String>>,
    // Display extras: a value of the wrong type decodes as None
    #[serde(default, alias = "Year", deserialize_with = "lenient")]
    pub year: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub rating: Option<f64>,
}

impl MovieSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            genres: None,
            year: None,
            image_url: None,
            rating: None,
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = Some(genres.into_iter().map(Into::into).collect());
        self
    }
}

/// Playable URL for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackInfo {
    #[serde(rename = "playUrl")]
    pub play_url: String,
}

/// Which list a summary belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Watched,
    Recommended,
}

impl ListKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListKind::Watched => "watched",
            ListKind::Recommended => "recommended",
        }
    }

    /// Element id of the list container
    pub fn container_id(&self) -> &'static str {
        match self {
            ListKind::Watched => "watched-list",
            ListKind::Recommended => "recommended-list",
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
