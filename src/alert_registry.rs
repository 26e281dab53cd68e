use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    clock::SharedClock,
    error::{required_text, CampusError},
    models::{Alert, AlertStatus, NewAlert},
};

/// Alerts in insertion order. Only `status` ever changes after insertion.
pub struct AlertRegistry {
    alerts: Vec<Alert>,
    index: HashMap<Uuid, usize>,
    clock: SharedClock,
}

impl AlertRegistry {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            alerts: Vec::new(),
            index: HashMap::new(),
            clock,
        }
    }

    pub fn raise(&mut self, new: NewAlert) -> Result<&Alert, CampusError> {
        let alert = Alert {
            id: Uuid::new_v4(),
            alert_type: required_text("alert_type", &new.alert_type)?,
            description: required_text("description", &new.description)?,
            criticality: new.criticality,
            raised_at: new.raised_at.unwrap_or_else(|| self.clock.now()),
            status: new.status.unwrap_or(AlertStatus::Active),
        };

        let pos = self.alerts.len();
        self.index.insert(alert.id, pos);
        self.alerts.push(alert);
        Ok(&self.alerts[pos])
    }

    /// Flip `Active` ↔ `Resolved`.
    pub fn toggle(&mut self, id: Uuid) -> Result<&Alert, CampusError> {
        let pos = *self
            .index
            .get(&id)
            .ok_or_else(|| CampusError::not_found("alert", id))?;
        let alert = &mut self.alerts[pos];
        alert.status = alert.status.toggled();
        Ok(&*alert)
    }

    pub fn get(&self, id: Uuid) -> Option<&Alert> {
        self.index.get(&id).map(|&pos| &self.alerts[pos])
    }

    pub fn all(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn with_status(&self, status: AlertStatus) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(move |a| a.status == status)
    }

    pub fn active(&self) -> impl Iterator<Item = &Alert> {
        self.with_status(AlertStatus::Active)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{clock, models::Criticality};

    fn registry() -> AlertRegistry {
        AlertRegistry::new(clock::fixed(Utc.with_ymd_and_hms(2025, 9, 1, 23, 10, 0).unwrap()))
    }

    fn new_alert(alert_type: &str) -> NewAlert {
        NewAlert {
            alert_type: alert_type.to_owned(),
            description: "Lights on in A 101 at 23:10".to_owned(),
            criticality: Criticality::High,
            raised_at: None,
            status: None,
        }
    }

    #[test]
    fn raise_defaults_to_active_and_clock_time() {
        let mut reg = registry();
        let a = reg.raise(new_alert("After hours")).unwrap();
        assert_eq!(a.status, AlertStatus::Active);
        assert_eq!(a.raised_at, Utc.with_ymd_and_hms(2025, 9, 1, 23, 10, 0).unwrap());
    }

    #[test]
    fn raise_rejects_blank_type() {
        let mut reg = registry();
        assert!(reg.raise(new_alert("")).is_err());
        assert!(reg.all().is_empty());
    }

    #[test]
    fn toggle_resolves_then_reopens() {
        let mut reg = registry();
        let id = reg.raise(new_alert("After hours")).unwrap().id;
        let before = reg.get(id).unwrap().clone();

        assert_eq!(reg.toggle(id).unwrap().status, AlertStatus::Resolved);
        let after = reg.toggle(id).unwrap().clone();

        assert_eq!(after, before);
    }

    #[test]
    fn toggle_unknown_id_is_not_found() {
        let mut reg = registry();
        reg.raise(new_alert("After hours")).unwrap();
        let snapshot = reg.all().to_vec();

        let id = Uuid::new_v4();
        let err = reg.toggle(id).unwrap_err();
        assert_eq!(err, CampusError::not_found("alert", id));
        assert_eq!(reg.all(), snapshot.as_slice());
    }

    #[test]
    fn active_filters_resolved_and_keeps_order() {
        let mut reg = registry();
        let a = reg.raise(new_alert("a")).unwrap().id;
        let b = reg.raise(new_alert("b")).unwrap().id;
        let c = reg.raise(new_alert("c")).unwrap().id;
        reg.toggle(b).unwrap();

        let active: Vec<Uuid> = reg.active().map(|x| x.id).collect();
        assert_eq!(active, [a, c]);
        let resolved: Vec<Uuid> = reg.with_status(AlertStatus::Resolved).map(|x| x.id).collect();
        assert_eq!(resolved, [b]);
    }
}
