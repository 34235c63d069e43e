//! Movie Card Component
//!
//! Title, genres and, for recommendations, a "Watch" button.

use leptos::prelude::*;

use crate::card::MovieCard;
use crate::context::use_app_context;

#[component]
pub fn MovieCardView(card: MovieCard) -> impl IntoView {
    let ctx = use_app_context();
    let label = card.text();

    let watch_button = card.watch.clone().map(|action| {
        let enabled = action.is_enabled();
        let item_id = action.item_id;
        view! {
            <button
                class="watch-btn"
                disabled=!enabled
                on:click=move |ev| {
                    ev.stop_propagation();
                    if let Some(id) = item_id.clone() {
                        ctx.play(id);
                    }
                }
            >
                "Watch"
            </button>
        }
    });

    let poster = card.poster_url.clone().map(|src| {
        let alt = card.title.clone();
        view! { <img class="poster" src=src alt=alt loading="lazy" /> }
    });

    view! {
        <div class="card" aria-label=label>
            {poster}
            <h3>{card.title.clone()}</h3>
            {card.genre_line.clone().map(|genres| view! { <p>{genres}</p> })}
            {card.details.clone().map(|details| view! { <p class="details">{details}</p> })}
            {watch_button}
        </div>
    }
}
