//! Movies Frontend App
//!
//! Composition root: builds the view handles and controller, then lays out
//! the two movie lists and the video modal.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::HttpMovieApi;
use crate::components::{MovieList, VideoModal};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::ViewController;
use crate::models::ListKind;
use crate::view::{ListHandle, PlayerHandle};

#[component]
pub fn App() -> impl IntoView {
    // Views
    let watched = ListHandle::new();
    let recommended = ListHandle::new();
    let player = PlayerHandle::new();

    let api = HttpMovieApi::new(ApiConfig::from_document());
    // Failed requests stay silent in the UI; the count is exposed on the page root
    let (load_failures, set_load_failures) = signal(0u32);
    let controller = Arc::new(
        ViewController::new(api, watched, recommended, player).with_error_hook(move |failure| {
            log::debug!("[APP] Request failed: {:?}", failure.operation);
            set_load_failures.update(|count| *count += 1);
        }),
    );

    let ctx = AppContext::new(controller);
    provide_context(ctx.clone());

    // Initial load
    Effect::new(move |_| {
        ctx.initialize();
    });

    view! {
        <main class="movies-page" data-load-failures=move || load_failures.get().to_string()>
            <section class="movie-section">
                <h2>"Watched"</h2>
                <MovieList id=ListKind::Watched.container_id() cards=watched.cards() />
            </section>

            <section class="movie-section">
                <h2>"Recommended"</h2>
                <MovieList id=ListKind::Recommended.container_id() cards=recommended.cards() />
            </section>

            <VideoModal player=player />
        </main>
    }
}
