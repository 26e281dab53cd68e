use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::campus::Campus;

/// Shared handle to the one `Campus` behind the HTTP layer.
///
/// Cheap to clone. A request that mutates holds the write guard for its
/// whole duration, so its effects are visible to the next request.
#[derive(Clone)]
pub struct CampusState {
    inner: Arc<RwLock<Campus>>,
}

impl CampusState {
    pub fn new(campus: Campus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(campus)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Campus> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Campus> {
        self.inner.write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock, cost::CostModel, models::NewReading};

    fn state() -> CampusState {
        CampusState::new(Campus::new(clock::system(), CostModel::default(), "S/"))
    }

    #[tokio::test]
    async fn empty_state_has_no_readings() {
        let state = state();
        assert!(state.read().await.list_readings(None).is_empty());
    }

    #[tokio::test]
    async fn clone_shares_state() {
        let state = state();
        let clone = state.clone();

        state
            .write()
            .await
            .add_reading(NewReading {
                building: "A".to_owned(),
                room: "101".to_owned(),
                device: "Lights".to_owned(),
                energy_kwh: 2.2,
                recorded_at: None,
            })
            .unwrap();

        // Clone sees the same data
        assert_eq!(clone.read().await.list_readings(None).len(), 1);
    }
}
