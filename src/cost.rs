use crate::energy::Energy;

/// Reference tariff, currency units per kWh.
pub const DEFAULT_TARIFF_RATE: f64 = 0.22;
/// kg CO₂ per kWh.
pub const DEFAULT_EMISSION_FACTOR: f64 = 0.4;

/// Linear conversion of energy into money and emissions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    pub tariff_rate: f64,
    pub emission_factor: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            tariff_rate: DEFAULT_TARIFF_RATE,
            emission_factor: DEFAULT_EMISSION_FACTOR,
        }
    }
}

impl CostModel {
    pub fn new(tariff_rate: f64, emission_factor: f64) -> Self {
        Self {
            tariff_rate,
            emission_factor,
        }
    }

    pub fn cost(&self, energy: Energy) -> f64 {
        self.cost_kwh(energy.as_kwh())
    }

    /// kg CO₂
    pub fn emissions(&self, energy: Energy) -> f64 {
        self.emissions_kwh(energy.as_kwh())
    }

    /// Like [`cost`](Self::cost), for signed quantities such as a negative saving.
    pub fn cost_kwh(&self, kwh: f64) -> f64 {
        kwh * self.tariff_rate
    }

    pub fn emissions_kwh(&self, kwh: f64) -> f64 {
        kwh * self.emission_factor
    }
}
