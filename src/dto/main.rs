use serde::Serialize;

use crate::dto::metrics::MetricsView;
use crate::dto::products::{ProductFormView, ProductRow};
use crate::pagination::Paginated;

/// A category checkbox of the search bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CategoryOption {
    pub name: String,
    pub selected: bool,
}

/// Current search bar values.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchBarView {
    pub name: String,
    pub categories: Vec<CategoryOption>,
    pub availability: &'static str,
}

/// Data required to render the dashboard page.
#[derive(Debug, Serialize)]
pub struct IndexPageData {
    pub search: SearchBarView,
    pub products: Paginated<ProductRow>,
    pub form: Option<ProductFormView>,
    pub metrics: Option<MetricsView>,
    /// Messages of failed fetches, shown above the affected section.
    pub products_error: Option<String>,
    pub metrics_error: Option<String>,
}
