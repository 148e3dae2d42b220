use serde::{Deserialize, Serialize};

/// Ajuste aplicado ao consumo quando o ar-condicionado está ligado [%].
pub const AIR_CONDITIONING_ADJUSTMENT_PERCENT: i32 = 5;

/// Perfil de condução do motorista.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrivingProfile {
    /// Acelera com calma, antecipa trocas
    Eco,
    /// Condução do dia a dia
    Normal,
    /// Acelera forte e mantém giro alto
    Aggressive,
}

impl DrivingProfile {
    /// Ajuste de consumo associado ao perfil [%].
    pub fn adjustment_percent(&self) -> i32 {
        match self {
            DrivingProfile::Eco => -8,
            DrivingProfile::Normal => 0,
            DrivingProfile::Aggressive => 15,
        }
    }

    /// Nome fixo usado nas descrições de impacto.
    pub fn name(&self) -> &'static str {
        match self {
            DrivingProfile::Eco => "Eco",
            DrivingProfile::Normal => "Normal",
            DrivingProfile::Aggressive => "Aggressive",
        }
    }
}

/// Faixa de passageiros/carga do veículo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupancy {
    /// 1–2 pessoas
    UpToTwo,
    /// 3–4 pessoas
    ThreeToFour,
    /// 5 pessoas / carga pesada
    FiveOrHeavyLoad,
}

impl Occupancy {
    /// Ajuste de consumo associado à faixa [%].
    pub fn adjustment_percent(&self) -> i32 {
        match self {
            Occupancy::UpToTwo => 0,
            Occupancy::ThreeToFour => 5,
            Occupancy::FiveOrHeavyLoad => 10,
        }
    }

    /// Tamanho máximo do grupo, usado na divisão do valor por pessoa.
    pub fn max_people(&self) -> u32 {
        match self {
            Occupancy::UpToTwo => 2,
            Occupancy::ThreeToFour => 4,
            Occupancy::FiveOrHeavyLoad => 5,
        }
    }
}
