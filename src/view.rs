//! View Handles
//!
//! The controller never looks elements up by id. It is handed these
//! handles at construction; the app backs them with signals.

use leptos::prelude::*;

use crate::card::MovieCard;

/// A list container that cards are appended to
pub trait ListView {
    fn append(&self, card: MovieCard);
}

/// The modal video player
pub trait PlayerView {
    fn set_source(&self, src: &str);
    fn set_visible(&self, visible: bool);
}

/// Signal-backed list container
#[derive(Clone, Copy)]
pub struct ListHandle {
    cards: RwSignal<Vec<MovieCard>>,
}

impl ListHandle {
    pub fn new() -> Self {
        Self {
            cards: RwSignal::new(Vec::new()),
        }
    }

    pub fn cards(&self) -> ReadSignal<Vec<MovieCard>> {
        self.cards.read_only()
    }
}

impl ListView for ListHandle {
    fn append(&self, card: MovieCard) {
        self.cards.update(|cards| cards.push(card));
    }
}

/// Signal-backed player and overlay
#[derive(Clone, Copy)]
pub struct PlayerHandle {
    source: RwSignal<String>,
    visible: RwSignal<bool>,
}

impl PlayerHandle {
    pub fn new() -> Self {
        Self {
            source: RwSignal::new(String::new()),
            visible: RwSignal::new(false),
        }
    }

    pub fn source(&self) -> ReadSignal<String> {
        self.source.read_only()
    }

    pub fn visible(&self) -> ReadSignal<bool> {
        self.visible.read_only()
    }
}

impl PlayerView for PlayerHandle {
    fn set_source(&self, src: &str) {
        self.source.set(src.to_string());
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}
