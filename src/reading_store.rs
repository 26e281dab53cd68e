use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::{
    clock::SharedClock,
    energy::Energy,
    error::{required_text, CampusError},
    models::{NewReading, Reading},
};

/// Append-only collection of readings, kept in insertion order with an
/// id → position index.
pub struct ReadingStore {
    readings: Vec<Reading>,
    index: HashMap<Uuid, usize>,
    clock: SharedClock,
}

impl ReadingStore {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            readings: Vec::new(),
            index: HashMap::new(),
            clock,
        }
    }

    /// Validate, stamp and append `new`. Nothing is stored on error.
    pub fn add(&mut self, new: NewReading) -> Result<&Reading, CampusError> {
        let building = required_text("building", &new.building)?;
        let room = required_text("room", &new.room)?;
        let device = required_text("device", &new.device)?;
        let energy = Energy::from_kwh(new.energy_kwh)?;

        let reading = Reading {
            id: Uuid::new_v4(),
            building,
            room,
            device,
            recorded_at: new.recorded_at.unwrap_or_else(|| self.clock.now()),
            energy,
        };

        let pos = self.readings.len();
        self.index.insert(reading.id, pos);
        self.readings.push(reading);
        Ok(&self.readings[pos])
    }

    /// Every stored reading, in insertion order.
    pub fn all(&self) -> &[Reading] {
        &self.readings
    }

    pub fn get(&self, id: Uuid) -> Option<&Reading> {
        self.index.get(&id).map(|&pos| &self.readings[pos])
    }

    /// Readings whose building matches exactly, in insertion order.
    pub fn in_building<'a>(&'a self, building: &'a str) -> impl Iterator<Item = &'a Reading> + 'a {
        self.readings.iter().filter(move |r| r.building == building)
    }

    /// Distinct building names in order of first occurrence.
    pub fn buildings(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.readings
            .iter()
            .map(|r| r.building.as_str())
            .filter(|b| seen.insert(*b))
            .collect()
    }
}
