//! Movie Cards
//!
//! Detached view-models built from movie summaries. Rendering them into the
//! page is left to the list components.

use crate::models::MovieSummary;

/// "Watch" action attached to recommended cards
#[derive(Debug, Clone, PartialEq)]
pub struct WatchAction {
    /// Item to play; `None` renders the action disabled
    pub item_id: Option<String>,
}

impl WatchAction {
    pub fn is_enabled(&self) -> bool {
        self.item_id.is_some()
    }
}

/// One rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct MovieCard {
    pub title: String,
    /// Comma-joined genres, omitted when there are none
    pub genre_line: Option<String>,
    /// Year and rating, e.g. "1979 · ★ 8.4"
    pub details: Option<String>,
    pub poster_url: Option<String>,
    pub watch: Option<WatchAction>,
}

impl MovieCard {
    /// Plain-text summary of the card, used as its accessible label
    pub fn text(&self) -> String {
        match &self.genre_line {
            Some(genres) => format!("{}: {}", self.title, genres),
            None => self.title.clone(),
        }
    }
}

/// Build the card for one summary. Only recommended cards get a Watch action.
pub fn render_card(summary: &MovieSummary, is_watched: bool) -> MovieCard {
    let genre_line = summary
        .genres
        .as_ref()
        .filter(|genres| !genres.is_empty())
        .map(|genres| genres.join(", "));

    let details = match (summary.year, summary.rating) {
        (Some(year), Some(rating)) => Some(format!("{} · ★ {:.1}", year, rating)),
        (Some(year), None) => Some(year.to_string()),
        (None, Some(rating)) => Some(format!("★ {:.1}", rating)),
        (None, None) => None,
    };

    let watch = (!is_watched).then(|| WatchAction {
        item_id: summary.id.clone().filter(|id| !id.is_empty()),
    });

    MovieCard {
        title: summary.name.clone(),
        genre_line,
        details,
        poster_url: summary.image_url.clone().filter(|url| !url.is_empty()),
        watch,
    }
}
