//! Client side of the applications listing: fetches `_page`/`_limit`
//! pages from the Records API and keeps the accumulated list for a view.

pub mod controller;
pub mod error;
pub mod transport;

pub use controller::{ApplicationsController, ControllerState, LoadMore, PaginationController};
pub use error::{FetchError, FALLBACK_ERROR_MESSAGE, REQUEST_FAILED_MESSAGE};
pub use transport::{HttpRecordsApi, RawPage, RecordsApi};
