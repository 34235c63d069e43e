//! Video Modal Component
//!
//! Overlay hosting the player. Shown while a playable URL is loaded.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::PlayerHandle;

#[component]
pub fn VideoModal(player: PlayerHandle) -> impl IntoView {
    let ctx = use_app_context();
    let source = player.source();
    let visible = player.visible();

    let display = move || if visible.get() { "flex" } else { "none" };

    view! {
        <div id="video-modal" class="modal" style:display=display>
            <div class="modal-content">
                <span class="close-btn" on:click=move |_| ctx.close_player()>"×"</span>
                <video id="emby-player" controls=true autoplay=true src=move || source.get()></video>
            </div>
        </div>
    }
}
