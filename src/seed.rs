//! Sample campus data loaded at start-up when `SEED_DEMO_DATA` is on.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::{
    campus::Campus,
    error::CampusError,
    models::{Criticality, NewAlert, NewReading, NewRecommendation},
};

fn at(hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(2025, 9, 1, hour, minute, 0).single()
}

/// (building, room, device, hour, minute, kWh)
const READINGS: [(&str, &str, &str, u32, u32, f64); 5] = [
    ("A", "101", "Luces", 8, 15, 2.2),
    ("A", "101", "Aire Acond.", 9, 15, 3.5),
    ("B", "Lab 301", "Computadoras", 10, 30, 5.8),
    ("Biblioteca", "2do piso", "Iluminación", 11, 10, 1.4),
    ("Gimnasio", "Sala cardio", "Aire Acond.", 12, 20, 4.1),
];

/// (type, description, criticality, hour, minute)
const ALERTS: [(&str, &str, Criticality, u32, u32); 3] = [
    ("Uso fuera de horario", "Luces encendidas Edif. A 101 a las 23:10", Criticality::High, 23, 10),
    ("Consumo anómalo", "Aire Acond. Gimnasio +35%", Criticality::Medium, 12, 40),
    ("Standby prolongado", "PCs Lab 301 toda la noche", Criticality::High, 5, 40),
];

/// (type, description, kWh, kg CO₂)
const RECOMMENDATIONS: [(&str, &str, f64, f64); 3] = [
    ("Iluminación inteligente", "Instalar sensores de presencia en Edif. A 1er piso", 45.0, 18.0),
    ("Horario valle", "Mover renderizado del Lab 301 a 1-5am", 62.0, 24.0),
    ("Mantenimiento A/C", "Mant. preventivo al A/C del Gimnasio", 30.0, 12.0),
];

pub fn load_demo(campus: &mut Campus) -> Result<(), CampusError> {
    for (building, room, device, hour, minute, kwh) in READINGS {
        campus.add_reading(NewReading {
            building: building.to_owned(),
            room: room.to_owned(),
            device: device.to_owned(),
            energy_kwh: kwh,
            recorded_at: at(hour, minute),
        })?;
    }

    for (alert_type, description, criticality, hour, minute) in ALERTS {
        campus.raise_alert(NewAlert {
            alert_type: alert_type.to_owned(),
            description: description.to_owned(),
            criticality,
            raised_at: at(hour, minute),
            status: None,
        })?;
    }

    for (kind, description, kwh, kg) in RECOMMENDATIONS {
        campus.propose_recommendation(NewRecommendation {
            recommendation_type: kind.to_owned(),
            description: description.to_owned(),
            estimated_energy_savings_kwh: kwh,
            estimated_emissions_savings_kg: kg,
        })?;
    }

    info!(
        readings = READINGS.len(),
        alerts = ALERTS.len(),
        recommendations = RECOMMENDATIONS.len(),
        "Demo data loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{clock, cost::CostModel};

    #[test]
    fn demo_data_matches_campus_sample() {
        let mut campus = Campus::new(clock::system(), CostModel::default(), "S/");
        load_demo(&mut campus).unwrap();

        let m = campus.dashboard_metrics();
        assert_eq!(m.total.as_kwh(), 17.0);
        assert!((m.cost_estimate - 3.74).abs() < 1e-9);
        assert!((m.co2_estimate_kg - 6.8).abs() < 1e-9);
        assert_eq!(m.active_alerts, 3);
        assert_eq!(m.hourly[8].energy.as_kwh(), 2.2);
        assert_eq!(campus.list_recommendations().len(), 3);
        assert!(campus.list_recommendations().iter().all(|r| !r.applied));
    }

    #[test]
    fn demo_readings_keep_their_timestamps() {
        let mut campus = Campus::new(clock::system(), CostModel::default(), "S/");
        load_demo(&mut campus).unwrap();
        let readings = campus.list_readings(None);
        let first = &readings[0];
        assert_eq!(first.recorded_at, at(8, 15).unwrap());
        assert_eq!(first.device, "Luces");
    }
}
