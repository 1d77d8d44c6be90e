use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use shared::domain::{Breed, LoadingState, SortDirection, SortOption};
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod debounce;
pub mod error;
pub mod filter;
pub mod sort;
pub mod source;

pub use debounce::Debouncer;
pub use error::FetchError;
pub use filter::filter_breeds;
pub use sort::sort_breeds;
pub use source::{BreedSource, HttpBreedSource, DEFAULT_API_URL};

/// Quiet period between the last keystroke and the search recomputation.
const SEARCH_DEBOUNCE_DELAY: Duration = Duration::from_millis(1000);

/// State changes a presentation layer re-renders on.
#[derive(Debug, Clone)]
pub enum BrowserEvent {
    LoadingChanged(LoadingState),
    RecordsUpdated { displayed: usize },
}

/// Point-in-time copy of everything the presentation layer consumes.
#[derive(Debug, Clone)]
pub struct BrowserSnapshot {
    pub search_term: String,
    pub sort_option: SortOption,
    pub sort_direction: SortDirection,
    pub loading: LoadingState,
    pub displayed: Vec<Breed>,
}

struct BrowserState {
    search_term: String,
    sort_option: SortOption,
    sort_direction: SortDirection,
    loading: LoadingState,
    /// Full fetched collection, set once by `initialize` and never mutated;
    /// `displayed` is always a filtered+sorted view derived from it.
    canonical: Arc<Vec<Breed>>,
    displayed: Vec<Breed>,
}

/// Application state controller: mediates between the fetch collaborator,
/// the debounce utility, and the sort/filter engines, and owns the state the
/// presentation layer renders.
pub struct BreedBrowser {
    source: Arc<dyn BreedSource>,
    inner: Arc<Mutex<BrowserState>>,
    events: broadcast::Sender<BrowserEvent>,
    search_debounce: Debouncer<String>,
}

impl BreedBrowser {
    pub fn new(source: Arc<dyn BreedSource>) -> Arc<Self> {
        Self::new_with_debounce_delay(source, SEARCH_DEBOUNCE_DELAY)
    }

    pub fn new_with_debounce_delay(source: Arc<dyn BreedSource>, delay: Duration) -> Arc<Self> {
        let inner = Arc::new(Mutex::new(BrowserState {
            search_term: String::new(),
            sort_option: SortOption::Name,
            sort_direction: SortDirection::Ascending,
            loading: LoadingState::Loading,
            canonical: Arc::new(Vec::new()),
            displayed: Vec::new(),
        }));
        let (events, _) = broadcast::channel(64);

        let recompute_inner = Arc::clone(&inner);
        let recompute_events = events.clone();
        let search_debounce = Debouncer::new(delay, move |term: String| {
            let inner = Arc::clone(&recompute_inner);
            let events = recompute_events.clone();
            async move {
                let mut state = inner.lock().await;
                let filtered = filter_breeds(&state.canonical, &term);
                state.displayed =
                    sort_breeds(&filtered, SortOption::Name, SortDirection::Ascending);
                state.loading = LoadingState::Ready;
                info!(term = %term, matched = state.displayed.len(), "search applied");
                let _ = events.send(BrowserEvent::LoadingChanged(LoadingState::Ready));
                let _ = events.send(BrowserEvent::RecordsUpdated {
                    displayed: state.displayed.len(),
                });
            }
            .boxed()
        });

        Arc::new(Self {
            source,
            inner,
            events,
            search_debounce,
        })
    }

    /// Fetches the catalog once. A transport failure, a payload that is not
    /// a JSON array, or an array whose elements do not decode as breeds all
    /// leave the controller in the `Error` state; there is no automatic
    /// retry.
    pub async fn initialize(&self) -> Result<(), FetchError> {
        let payload = match self.source.fetch_breeds().await {
            Ok(payload) => payload,
            Err(err) => {
                self.fail_load(&err).await;
                return Err(err);
            }
        };

        if !payload.is_array() {
            let err = FetchError::InvalidFormat;
            self.fail_load(&err).await;
            return Err(err);
        }

        let breeds: Vec<Breed> = match serde_json::from_value(payload) {
            Ok(breeds) => breeds,
            Err(err) => {
                let err = FetchError::Decode(err);
                self.fail_load(&err).await;
                return Err(err);
            }
        };

        let mut state = self.inner.lock().await;
        state.canonical = Arc::new(breeds);
        state.displayed =
            sort_breeds(&state.canonical, SortOption::Name, SortDirection::Ascending);
        state.loading = LoadingState::Ready;
        info!(total = state.canonical.len(), "breed catalog loaded");
        let displayed = state.displayed.len();
        drop(state);

        let _ = self.events.send(BrowserEvent::LoadingChanged(LoadingState::Ready));
        let _ = self.events.send(BrowserEvent::RecordsUpdated { displayed });
        Ok(())
    }

    /// Updates the search term immediately (resetting the sort to
    /// name/ascending and entering the loading state) and schedules the
    /// actual filter+sort through the debouncer. Of several rapid calls,
    /// only the last term's recomputation runs, one quiet period after the
    /// last call.
    pub async fn search(&self, term: &str) {
        {
            let mut state = self.inner.lock().await;
            state.search_term = term.to_string();
            state.sort_option = SortOption::Name;
            state.sort_direction = SortDirection::Ascending;
            state.loading = LoadingState::Loading;
        }
        let _ = self.events.send(BrowserEvent::LoadingChanged(LoadingState::Loading));
        self.search_debounce.trigger(term.to_string());
    }

    /// Selecting the current option toggles direction; a different option
    /// resets to ascending. Recomputes the displayed records synchronously
    /// from the currently filtered set.
    pub async fn change_sort_option(&self, option: SortOption) {
        let mut state = self.inner.lock().await;
        if option == state.sort_option {
            state.sort_direction = state.sort_direction.toggled();
        } else {
            state.sort_direction = SortDirection::Ascending;
        }
        state.sort_option = option;
        self.recompute_displayed(&mut state);
    }

    pub async fn change_sort_direction(&self, direction: SortDirection) {
        let mut state = self.inner.lock().await;
        state.sort_direction = direction;
        self.recompute_displayed(&mut state);
    }

    /// Resets search and sort to their defaults, restores the full canonical
    /// collection (name ascending), and discards any pending debounced
    /// search so it cannot fire late.
    pub async fn clear(&self) {
        self.search_debounce.cancel();
        let mut state = self.inner.lock().await;
        state.search_term.clear();
        state.sort_option = SortOption::Name;
        state.sort_direction = SortDirection::Ascending;
        state.displayed =
            sort_breeds(&state.canonical, SortOption::Name, SortDirection::Ascending);
        state.loading = LoadingState::Ready;
        let displayed = state.displayed.len();
        drop(state);

        let _ = self.events.send(BrowserEvent::LoadingChanged(LoadingState::Ready));
        let _ = self.events.send(BrowserEvent::RecordsUpdated { displayed });
    }

    /// Cancels any pending debounced search. Call on teardown so a late
    /// timer cannot run against a controller the presentation layer has
    /// already let go of; dropping the controller gives the same guarantee.
    pub fn close(&self) {
        self.search_debounce.cancel();
    }

    pub async fn snapshot(&self) -> BrowserSnapshot {
        let state = self.inner.lock().await;
        BrowserSnapshot {
            search_term: state.search_term.clone(),
            sort_option: state.sort_option,
            sort_direction: state.sort_direction,
            loading: state.loading,
            displayed: state.displayed.clone(),
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<BrowserEvent> {
        self.events.subscribe()
    }

    fn recompute_displayed(&self, state: &mut BrowserState) {
        let filtered = filter_breeds(&state.canonical, &state.search_term);
        state.displayed = sort_breeds(&filtered, state.sort_option, state.sort_direction);
        let _ = self.events.send(BrowserEvent::RecordsUpdated {
            displayed: state.displayed.len(),
        });
    }

    async fn fail_load(&self, err: &FetchError) {
        match err {
            FetchError::InvalidFormat => {
                warn!("breed payload is not an array; treating the load as failed")
            }
            other => warn!(error = %other, "breed catalog load failed"),
        }
        let mut state = self.inner.lock().await;
        state.loading = LoadingState::Error;
        state.displayed.clear();
        drop(state);
        let _ = self.events.send(BrowserEvent::LoadingChanged(LoadingState::Error));
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
