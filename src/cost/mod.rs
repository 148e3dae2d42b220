//! Módulos de cálculo de custo de viagem.

pub mod adjustments;
pub mod advanced;
pub mod basic;
pub mod validate;

pub use adjustments::{DrivingProfile, Occupancy, AIR_CONDITIONING_ADJUSTMENT_PERCENT};
pub use advanced::*;
pub use basic::*;
pub use validate::*;

/// Erros do núcleo de cálculo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostError {
    /// Consumo (km/L) zero ou negativo
    NonPositiveConsumption,
    /// Fator de ajuste combinado zero ou negativo
    NonPositiveAdjustmentFactor,
}

impl std::fmt::Display for CostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostError::NonPositiveConsumption => {
                write!(f, "o consumo (km/L) deve ser maior que zero")
            }
            CostError::NonPositiveAdjustmentFactor => {
                write!(f, "o fator de ajuste combinado deve ser positivo")
            }
        }
    }
}

impl std::error::Error for CostError {}
