//! Background lookup worker thread

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::client::CountrySource;
use crate::outcome::{SearchOutcome, classify};

/// Query sent to the worker thread
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub id: u64,
    pub text: String,
}

/// Response from the worker thread.
///
/// `outcome` and `error` are both `None` for a blank query (the input was
/// cleared before the query settled in the worker).
#[derive(Debug, Clone)]
pub struct SearchResponse {
    pub query_id: u64,
    pub outcome: Option<SearchOutcome>,
    pub error: Option<String>,
    pub duration: Duration,
}

impl SearchResponse {
    fn cleared(query_id: u64) -> Self {
        Self {
            query_id,
            outcome: None,
            error: None,
            duration: Duration::ZERO,
        }
    }
}

/// Spawn the lookup worker thread.
///
/// The worker drains queued queries and only services the newest one, so a
/// burst of settled queries costs a single request. The thread exits when
/// the query channel is dropped.
pub fn spawn_worker<S: CountrySource>(
    source: S,
    query_rx: Receiver<SearchQuery>,
    response_tx: Sender<SearchResponse>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(mut query) = query_rx.recv() {
            // Coalesce rapid queries - keep only the latest
            while let Ok(next) = query_rx.try_recv() {
                query = next;
            }

            let query_text = query.text.trim();

            // Blank query - nothing to look up
            if query_text.is_empty() {
                let _ = response_tx.send(SearchResponse::cleared(query.id));
                continue;
            }

            let start = Instant::now();
            let result = source.search(query_text);
            let duration = start.elapsed();

            let response = match result {
                Ok(countries) => SearchResponse {
                    query_id: query.id,
                    outcome: Some(classify(countries)),
                    error: None,
                    duration,
                },
                Err(e) => {
                    log::warn!("lookup for {query_text:?} failed: {e}");
                    SearchResponse {
                        query_id: query.id,
                        outcome: None,
                        error: Some(e.to_string()),
                        duration,
                    }
                }
            };

            let _ = response_tx.send(response);
        }
    })
}
