// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, store::QuizStore, utils::random::RandomSource};

pub type SharedStore = Arc<dyn QuizStore>;
pub type SharedRandom = Arc<dyn RandomSource>;

/// Everything a request handler may touch, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub random: SharedRandom,
    pub config: Config,
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for SharedRandom {
    fn from_ref(state: &AppState) -> Self {
        state.random.clone()
    }
}
