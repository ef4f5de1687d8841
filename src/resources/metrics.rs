use crate::api::ProductReader;
use crate::domain::metrics::InventoryMetrics;
use crate::resources::Resource;

/// Inventory metrics; empty until the first successful fetch.
#[derive(Debug, Clone, Default)]
pub struct MetricsResource {
    state: Resource<Option<InventoryMetrics>>,
}

impl MetricsResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> Option<&InventoryMetrics> {
        self.state.data().as_ref()
    }

    pub fn state(&self) -> &Resource<Option<InventoryMetrics>> {
        &self.state
    }

    pub async fn refetch<A>(&mut self, api: &A) -> bool
    where
        A: ProductReader + ?Sized,
    {
        let ticket = self.state.begin();
        let result = api.fetch_metrics().await.map(Some);
        self.state.complete(ticket, result)
    }
}
