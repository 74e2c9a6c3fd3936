//! # Unit Types
//!
//! Type-safe wrappers for the laboratory units used in the calculators.
//! These provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculators use a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Supported Units
//!
//! - Molar concentration: millimolar (mM), nanomolar (nM)
//! - Mass concentration: milligrams per milliliter (mg/mL), micrograms per milliliter (µg/mL)
//! - Molecular weight: kilodaltons (kDa)
//! - Volume: milliliters (mL), microliters (µL)
//!
//! ## Example
//!
//! ```rust
//! use bio_core::units::{MilliMolar, NanoMolar, MilliLiters, MicroLiters};
//!
//! let conc = MilliMolar(1.0);
//! let conc_nm: NanoMolar = conc.into();
//! assert_eq!(conc_nm.0, 1_000_000.0);
//!
//! let vol = MilliLiters(0.05);
//! let vol_ul: MicroLiters = vol.into();
//! assert_eq!(vol_ul.0, 50.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Nanomolar per millimolar conversion factor
pub const NANOMOLAR_PER_MILLIMOLAR: f64 = 1e6;

/// Microliters per milliliter conversion factor
pub const MICROLITERS_PER_MILLILITER: f64 = 1000.0;

// ============================================================================
// Molar Concentration Units
// ============================================================================

/// Molar concentration in millimolar (mM)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilliMolar(pub f64);

/// Molar concentration in nanomolar (nM)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NanoMolar(pub f64);

impl From<MilliMolar> for NanoMolar {
    fn from(mm: MilliMolar) -> Self {
        NanoMolar(mm.0 * NANOMOLAR_PER_MILLIMOLAR)
    }
}

impl From<NanoMolar> for MilliMolar {
    fn from(nm: NanoMolar) -> Self {
        MilliMolar(nm.0 / NANOMOLAR_PER_MILLIMOLAR)
    }
}

// ============================================================================
// Mass Concentration Units
// ============================================================================

/// Mass concentration in milligrams per milliliter (mg/mL)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MgPerMl(pub f64);

/// Mass concentration in micrograms per milliliter (µg/mL)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UgPerMl(pub f64);

// ============================================================================
// Molecular Weight
// ============================================================================

/// Molecular weight in kilodaltons (kDa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloDaltons(pub f64);

impl MgPerMl {
    /// Convert a mass concentration to molarity given the molecular weight.
    ///
    /// mg/mL divided by kDa gives mM. A zero molecular weight returns
    /// 0 mM instead of dividing by zero.
    ///
    /// ```rust
    /// use bio_core::units::{KiloDaltons, MgPerMl};
    ///
    /// let conc = MgPerMl(1.5);
    /// assert_eq!(conc.to_millimolar(KiloDaltons(150.0)).0, 0.01);
    /// assert_eq!(conc.to_millimolar(KiloDaltons(0.0)).0, 0.0);
    /// ```
    pub fn to_millimolar(self, molecular_weight: KiloDaltons) -> MilliMolar {
        if molecular_weight.0 == 0.0 {
            return MilliMolar(0.0);
        }
        MilliMolar(self.0 / molecular_weight.0)
    }
}

impl NanoMolar {
    /// Convert a molar concentration to µg/mL given the molecular weight.
    ///
    /// Uses nM * kDa / 1000. This is the workflow-specific form carried over
    /// from the bench protocol; it is intentionally not a textbook conversion.
    pub fn to_ug_per_ml(self, molecular_weight: KiloDaltons) -> UgPerMl {
        UgPerMl(self.0 * molecular_weight.0 / 1000.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in milliliters (mL)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilliLiters(pub f64);

/// Volume in microliters (µL)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MicroLiters(pub f64);

impl From<MilliLiters> for MicroLiters {
    fn from(ml: MilliLiters) -> Self {
        MicroLiters(ml.0 * MICROLITERS_PER_MILLILITER)
    }
}

impl From<MicroLiters> for MilliLiters {
    fn from(ul: MicroLiters) -> Self {
        MilliLiters(ul.0 / MICROLITERS_PER_MILLILITER)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(MilliMolar);
impl_arithmetic!(NanoMolar);
impl_arithmetic!(MgPerMl);
impl_arithmetic!(UgPerMl);
impl_arithmetic!(KiloDaltons);
impl_arithmetic!(MilliLiters);
impl_arithmetic!(MicroLiters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millimolar_to_nanomolar() {
        let mm = MilliMolar(2.5);
        let nm: NanoMolar = mm.into();
        assert_eq!(nm.0, 2_500_000.0);
    }

    #[test]
    fn test_molar_roundtrip() {
        let mm = MilliMolar(0.4793333);
        let roundtrip: MilliMolar = NanoMolar::from(mm).into();
        assert!((roundtrip.0 - mm.0).abs() < 1e-12);
    }

    #[test]
    fn test_volume_roundtrip() {
        let ml = MilliLiters(16.0);
        let roundtrip: MilliLiters = MicroLiters::from(ml).into();
        assert!((roundtrip.0 - ml.0).abs() < 1e-12);

        let ul = MicroLiters(50.0);
        assert_eq!(MilliLiters::from(ul).0, 0.05);
    }

    #[test]
    fn test_mass_concentration_to_molarity() {
        let conc = MgPerMl(3.0);
        let mm = conc.to_millimolar(KiloDaltons(150.0));
        assert!((mm.0 - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_zero_molecular_weight_guards() {
        // Any mass concentration over a zero molecular weight degrades to 0 mM
        assert_eq!(MgPerMl(5.0).to_millimolar(KiloDaltons(0.0)).0, 0.0);
        assert_eq!(MgPerMl(0.0).to_millimolar(KiloDaltons(0.0)).0, 0.0);
        assert_eq!(MgPerMl(-1.0).to_millimolar(KiloDaltons(0.0)).0, 0.0);
    }

    #[test]
    fn test_nanomolar_to_ug_per_ml() {
        // 100 nM of a 150 kDa protein: 100 * 150 / 1000 = 15 µg/mL
        let ug = NanoMolar(100.0).to_ug_per_ml(KiloDaltons(150.0));
        assert!((ug.0 - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_arithmetic() {
        let a = MicroLiters(900.0);
        let b = MicroLiters(7.5104);
        assert!(((a - b).0 - 892.4896).abs() < 1e-9);
        assert_eq!((a * 2.0).0, 1800.0);
        assert_eq!((a / 2.0).0, 450.0);
        assert!(((a + b).value() - 907.5104).abs() < 1e-9);
    }

    #[test]
    fn test_serialization() {
        let vol = MicroLiters(50.0);
        let json = serde_json::to_string(&vol).unwrap();
        assert_eq!(json, "50.0");

        let roundtrip: MicroLiters = serde_json::from_str(&json).unwrap();
        assert_eq!(vol, roundtrip);
    }
}
