//! Interactive full-screen country search

mod app;
mod ui;
mod worker;

pub use app::{App, DEBOUNCE, TextInput, Toast, View, run};
pub use worker::{SearchQuery, SearchResponse, spawn_worker};
