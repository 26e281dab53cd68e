use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    energy::Energy,
    error::{required_text, CampusError},
    models::{NewRecommendation, Recommendation},
};

#[derive(Default)]
pub struct RecommendationCatalog {
    entries: Vec<Recommendation>,
    index: HashMap<Uuid, usize>,
}

impl RecommendationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn propose(&mut self, new: NewRecommendation) -> Result<&Recommendation, CampusError> {
        let emissions = new.estimated_emissions_savings_kg;
        if !emissions.is_finite() || emissions < 0.0 {
            return Err(CampusError::validation(
                "estimated_emissions_savings_kg",
                "must be a finite, non-negative number",
            ));
        }

        let rec = Recommendation {
            id: Uuid::new_v4(),
            recommendation_type: required_text("recommendation_type", &new.recommendation_type)?,
            description: required_text("description", &new.description)?,
            estimated_energy_savings: Energy::from_kwh(new.estimated_energy_savings_kwh)?,
            estimated_emissions_savings_kg: emissions,
            applied: false,
        };

        let pos = self.entries.len();
        self.index.insert(rec.id, pos);
        self.entries.push(rec);
        Ok(&self.entries[pos])
    }

    /// Mark as applied. Applying twice is a no-op.
    pub fn apply(&mut self, id: Uuid) -> Result<&Recommendation, CampusError> {
        let pos = *self
            .index
            .get(&id)
            .ok_or_else(|| CampusError::not_found("recommendation", id))?;
        let rec = &mut self.entries[pos];
        rec.applied = true;
        Ok(&*rec)
    }

    pub fn get(&self, id: Uuid) -> Option<&Recommendation> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn all(&self) -> &[Recommendation] {
        &self.entries
    }
}
