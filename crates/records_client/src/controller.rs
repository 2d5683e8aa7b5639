//! Pagination data controller: owns the fetched list and its load progress.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use shared::protocol::{has_next_page, Application, PageQuery};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::{error::FetchError, transport::RecordsApi};

/// Snapshot of everything a view renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState<T> {
    pub applications: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: u32,
    pub has_more: bool,
}

impl<T> Default for ControllerState<T> {
    fn default() -> Self {
        Self {
            applications: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            has_more: true,
        }
    }
}

/// Result of a `load_more` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMore {
    /// A fetch was already running or the last page was reached.
    Skipped,
    /// The next page arrived with this many records.
    Loaded(usize),
}

pub type ApplicationsController = PaginationController<Application>;

pub struct PaginationController<T> {
    api: Arc<dyn RecordsApi>,
    state: watch::Sender<ControllerState<T>>,
}

impl<T> PaginationController<T>
where
    T: DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(api: Arc<dyn RecordsApi>) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self { api, state }
    }

    pub fn state(&self) -> ControllerState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that is marked changed on every state transition.
    pub fn subscribe(&self) -> watch::Receiver<ControllerState<T>> {
        self.state.subscribe()
    }

    pub fn applications(&self) -> Vec<T> {
        self.state.borrow().applications.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn has_more(&self) -> bool {
        self.state.borrow().has_more
    }

    pub fn current_page(&self) -> u32 {
        self.state.borrow().current_page
    }

    /// Fetches `page` and either replaces or extends the list with it.
    ///
    /// Failures are recorded in the state's `error` and also returned. The
    /// previous error text is left in place on success.
    pub async fn fetch_applications(&self, page: u32, append: bool) -> Result<usize, FetchError> {
        if page == 0 {
            warn!(append, "applications: refusing to fetch page 0");
            return Err(FetchError::InvalidPage(page));
        }

        let _in_flight = InFlight::acquire(&self.state);
        debug!(page, append, "applications: fetching page");

        match self.request_page(page).await {
            Ok((records, has_more)) => {
                let received = records.len();
                self.state.send_modify(|state| {
                    if append {
                        state.applications.extend(records);
                    } else {
                        state.applications = records;
                    }
                    state.has_more = has_more;
                });
                info!(page, append, received, has_more, "applications: page loaded");
                Ok(received)
            }
            Err(err) => {
                warn!(page, append, error = %err, "applications: page fetch failed");
                let message = err.to_string();
                self.state.send_modify(|state| state.error = Some(message));
                Err(err)
            }
        }
    }

    /// Requests the page after `current_page` in append mode.
    ///
    /// The guard and the page advance happen together before the first
    /// await, so a call made while a fetch is running is a no-op.
    pub async fn load_more(&self) -> Result<LoadMore, FetchError> {
        let mut next_page = None;
        self.state.send_if_modified(|state| {
            if state.loading || !state.has_more {
                return false;
            }
            state.current_page += 1;
            next_page = Some(state.current_page);
            true
        });

        let Some(next_page) = next_page else {
            debug!("applications: load more skipped");
            return Ok(LoadMore::Skipped);
        };

        self.fetch_applications(next_page, true)
            .await
            .map(LoadMore::Loaded)
    }

    async fn request_page(&self, page: u32) -> Result<(Vec<T>, bool), FetchError> {
        let raw = self
            .api
            .get_page(PageQuery::new(page))
            .await
            .map_err(FetchError::from_transport)?;

        if !raw.is_success() {
            return Err(FetchError::RequestFailed { status: raw.status });
        }

        let records: Vec<T> = serde_json::from_slice(&raw.body).map_err(FetchError::from_decode)?;
        Ok((records, has_next_page(raw.link.as_deref())))
    }
}

/// Holds `loading` true for its lifetime, including when the owning future
/// is dropped mid-request.
struct InFlight<'a, T> {
    state: &'a watch::Sender<ControllerState<T>>,
}

impl<'a, T> InFlight<'a, T> {
    fn acquire(state: &'a watch::Sender<ControllerState<T>>) -> Self {
        state.send_modify(|state| state.loading = true);
        Self { state }
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        self.state.send_modify(|state| state.loading = false);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
