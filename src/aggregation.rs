//! Totals and chart series derived from a set of readings.
//!
//! Hour buckets use the UTC hour of each reading's timestamp.

use std::collections::HashMap;

use chrono::Timelike;

use crate::{energy::Energy, models::Reading};

const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBucket {
    /// 0..=23
    pub hour: u8,
    pub energy: Energy,
}

impl HourBucket {
    /// Zero-padded label, `"00"`..`"23"`.
    pub fn label(&self) -> String {
        format!("{:02}", self.hour)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTotal {
    pub entity: String,
    pub energy: Energy,
}

pub fn total(readings: &[Reading]) -> Energy {
    readings.iter().map(|r| r.energy).sum()
}

/// Exactly 24 buckets, hours 00 through 23. Hours with no readings are zero.
pub fn by_hour(readings: &[Reading]) -> Vec<HourBucket> {
    let mut sums = [Energy::ZERO; HOURS_PER_DAY];
    for r in readings {
        sums[r.recorded_at.hour() as usize] += r.energy;
    }

    sums.into_iter()
        .enumerate()
        .map(|(hour, energy)| HourBucket {
            hour: hour as u8,
            energy,
        })
        .collect()
}

/// Sum energy per entity key, listed in order of first occurrence.
pub fn by_entity<F>(readings: &[Reading], key: F) -> Vec<EntityTotal>
where
    F: Fn(&Reading) -> &str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<EntityTotal> = Vec::new();

    for r in readings {
        let k = key(r);
        match positions.get(k) {
            Some(&pos) => out[pos].energy += r.energy,
            None => {
                positions.insert(k, out.len());
                out.push(EntityTotal {
                    entity: k.to_owned(),
                    energy: r.energy,
                });
            }
        }
    }

    out
}

pub fn by_building(readings: &[Reading]) -> Vec<EntityTotal> {
    by_entity(readings, |r| r.building.as_str())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn reading(building: &str, hour: u32, kwh: f64) -> Reading {
        Reading {
            id: Uuid::new_v4(),
            building: building.to_owned(),
            room: "r".to_owned(),
            device: "d".to_owned(),
            recorded_at: Utc.with_ymd_and_hms(2025, 9, 1, hour, 10, 0).unwrap(),
            energy: Energy::from_kwh(kwh).unwrap(),
        }
    }

    fn campus_sample() -> Vec<Reading> {
        vec![
            reading("A", 8, 2.2),
            reading("A", 9, 3.5),
            reading("B", 10, 5.8),
            reading("Biblioteca", 11, 1.4),
            reading("Gimnasio", 12, 4.1),
        ]
    }

    #[test]
    fn empty_set_yields_zero_total_and_empty_series() {
        assert_eq!(total(&[]), Energy::ZERO);
        let hours = by_hour(&[]);
        assert_eq!(hours.len(), 24);
        assert!(hours.iter().all(|b| b.energy == Energy::ZERO));
        assert!(by_building(&[]).is_empty());
    }

    #[test]
    fn total_of_sample_is_seventeen() {
        assert_eq!(total(&campus_sample()).as_kwh(), 17.0);
    }

    #[test]
    fn by_hour_has_every_label_in_order() {
        let labels: Vec<String> = by_hour(&[reading("A", 5, 1.0)])
            .iter()
            .map(HourBucket::label)
            .collect();
        let expected: Vec<String> = (0..24).map(|h| format!("{h:02}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn by_hour_places_readings_in_utc_hour() {
        let hours = by_hour(&campus_sample());
        assert_eq!(hours[8].energy.as_kwh(), 2.2);
        assert_eq!(hours[12].energy.as_kwh(), 4.1);
        assert_eq!(hours[0].energy, Energy::ZERO);
        assert_eq!(hours[23].energy, Energy::ZERO);
    }

    #[test]
    fn by_hour_accumulates_same_hour() {
        let hours = by_hour(&[reading("A", 23, 1.25), reading("B", 23, 0.75)]);
        assert_eq!(hours[23].energy.as_kwh(), 2.0);
    }

    #[test]
    fn series_sum_to_total_exactly() {
        let readings = vec![
            reading("A", 1, 0.1),
            reading("A", 1, 0.2),
            reading("B", 2, 0.3),
            reading("C", 3, 1234.56),
            reading("B", 1, 0.07),
        ];
        let t = total(&readings);
        let hour_sum: Energy = by_hour(&readings).iter().map(|b| b.energy).sum();
        let entity_sum: Energy = by_building(&readings).iter().map(|e| e.energy).sum();
        assert_eq!(hour_sum, t);
        assert_eq!(entity_sum, t);
    }

    #[test]
    fn by_building_groups_in_first_occurrence_order() {
        let groups = by_building(&campus_sample());
        let names: Vec<&str> = groups.iter().map(|g| g.entity.as_str()).collect();
        assert_eq!(names, ["A", "B", "Biblioteca", "Gimnasio"]);
        assert_eq!(groups[0].energy.as_kwh(), 5.7);
    }

    #[test]
    fn by_entity_accepts_any_key() {
        let groups = by_entity(&campus_sample(), |r| r.device.as_str());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].energy, total(&campus_sample()));
    }
}
