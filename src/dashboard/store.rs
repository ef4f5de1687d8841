//! Per-session dashboards kept in process memory.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

use crate::dashboard::Dashboard;

pub type SharedDashboard = Arc<AsyncMutex<Dashboard>>;

#[derive(Debug)]
struct Slot {
    dashboard: SharedDashboard,
    last_seen: Instant,
}

/// Bounded map from session id to that session's dashboard.
///
/// When the store is full the least recently used dashboard is dropped.
#[derive(Debug)]
pub struct DashboardStore {
    page_size: usize,
    capacity: usize,
    slots: Mutex<HashMap<Uuid, Slot>>,
}

impl DashboardStore {
    pub fn new(page_size: usize, capacity: usize) -> Self {
        Self {
            page_size,
            capacity: capacity.max(1),
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the dashboard for `session_id`, creating one under a fresh id
    /// when the session is unknown.
    pub fn checkout(&self, session_id: Option<Uuid>) -> (Uuid, SharedDashboard) {
        let mut slots = self.lock();
        let now = Instant::now();

        if let Some(id) = session_id {
            if let Some(slot) = slots.get_mut(&id) {
                slot.last_seen = now;
                return (id, slot.dashboard.clone());
            }
        }

        if slots.len() >= self.capacity {
            let oldest = slots
                .iter()
                .min_by_key(|(_, slot)| slot.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                log::info!("Evicting dashboard for session {oldest}");
                slots.remove(&oldest);
            }
        }

        let id = Uuid::new_v4();
        let dashboard = Arc::new(AsyncMutex::new(Dashboard::new(self.page_size)));
        slots.insert(
            id,
            Slot {
                dashboard: dashboard.clone(),
                last_seen: now,
            },
        );
        log::debug!("Created dashboard for session {id}");
        (id, dashboard)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, session_id: &Uuid) -> bool {
        self.lock().contains_key(session_id)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
