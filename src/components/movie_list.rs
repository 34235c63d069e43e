//! Movie List Component

use leptos::prelude::*;

use crate::card::MovieCard;
use crate::components::MovieCardView;

/// Container of cards, appended to in server order
#[component]
pub fn MovieList(
    #[prop(into)] id: String,
    cards: ReadSignal<Vec<MovieCard>>,
) -> impl IntoView {
    view! {
        <div id=id class="movie-list">
            // Duplicates are kept, so cards are keyed by position
            <For
                each=move || cards.get().into_iter().enumerate()
                key=|(index, _)| *index
                children=move |(_, card)| view! { <MovieCardView card=card /> }
            />
        </div>
    }
}
