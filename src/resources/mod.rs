//! Loading state for data fetched from the backend.
//!
//! A [`Resource`] remembers the last successful payload, whether a request is
//! in flight and the last error. Every fetch is tagged with a generation so
//! that a response arriving after a newer request has started is dropped
//! instead of overwriting fresher data.
//!
//! Inside a [`Dashboard`](crate::dashboard::Dashboard) each fetch runs under
//! `&mut self` and completes before the next one begins, so a ticket is never
//! overtaken there. The check only matters for callers that drive
//! [`Resource::begin`] and [`Resource::complete`] directly with several
//! fetches in flight.

use crate::api::errors::{ApiError, ApiResult};

pub mod metrics;
pub mod products;

pub use metrics::MetricsResource;
pub use products::{ProductsParams, ProductsResource};

/// Handle for one in-flight fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a fetch ticket has to be completed"]
pub struct FetchTicket {
    generation: u64,
}

impl FetchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resource<T> {
    data: T,
    is_loading: bool,
    error: Option<ApiError>,
    generation: u64,
}

impl<T> Resource<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            is_loading: false,
            error: None,
            generation: 0,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Marks a new fetch as started and clears the previous error.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        self.is_loading = true;
        self.error = None;
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Stores the outcome of `ticket`'s fetch.
    ///
    /// Returns `false` and leaves the state untouched when a newer fetch has
    /// started since the ticket was issued. On failure the previous data is
    /// kept.
    pub fn complete(&mut self, ticket: FetchTicket, result: ApiResult<T>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping stale response for generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(err) => {
                log::warn!("Fetch failed: {err}");
                self.error = Some(err);
            }
        }
        true
    }
}
