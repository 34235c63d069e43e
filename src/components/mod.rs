//! UI Components
//!
//! Leptos components for the movie lists and the player modal.

mod movie_card;
mod movie_list;
mod video_modal;

pub use movie_card::MovieCardView;
pub use movie_list::MovieList;
pub use video_modal::VideoModal;
