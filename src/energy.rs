use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
};

use crate::error::CampusError;

/// Largest quantity a single caller-supplied value may carry (1 TWh).
pub const MAX_KWH: f64 = 1.0e9;

/// A non-negative energy quantity in kWh.
///
/// Stored as an integer count of hundredths of a kWh
/// (`round(kwh * 100.0) as i64`, e.g. 2.2 kWh → 220), so totals and
/// per-bucket sums are exact regardless of summation order. Addition
/// saturates at `i64::MAX` hundredths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Energy(i64);

impl Energy {
    pub const ZERO: Energy = Energy(0);

    /// Parse a caller-supplied kWh value. Negative, non-finite and values
    /// above [`MAX_KWH`] are rejected; the rest is rounded to the nearest
    /// 0.01 kWh.
    pub fn from_kwh(kwh: f64) -> Result<Self, CampusError> {
        if !kwh.is_finite() {
            return Err(CampusError::validation("energy_kwh", "must be a finite number"));
        }
        if kwh < 0.0 {
            return Err(CampusError::validation("energy_kwh", "must not be negative"));
        }
        if kwh > MAX_KWH {
            return Err(CampusError::validation(
                "energy_kwh",
                format!("must not exceed {MAX_KWH} kWh"),
            ));
        }
        Ok(Self((kwh * 100.0).round() as i64))
    }

    /// Negative counts are floored at zero.
    pub const fn from_centi_kwh(centi: i64) -> Self {
        if centi < 0 {
            Self(0)
        } else {
            Self(centi)
        }
    }

    pub const fn centi_kwh(self) -> i64 {
        self.0
    }

    pub fn as_kwh(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Energy {
    type Output = Energy;

    fn add(self, rhs: Energy) -> Energy {
        Energy(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Energy {
    fn add_assign(&mut self, rhs: Energy) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sum for Energy {
    fn sum<I: Iterator<Item = Energy>>(iter: I) -> Energy {
        iter.fold(Energy::ZERO, Add::add)
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} kWh", self.as_kwh())
    }
}
