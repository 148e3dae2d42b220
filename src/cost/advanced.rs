use super::adjustments::{DrivingProfile, Occupancy, AIR_CONDITIONING_ADJUSTMENT_PERCENT};
use super::CostError;

/// Parâmetros da viagem informados pelo usuário.
#[derive(Debug, Clone)]
pub struct TripInputs {
    /// Distância total, ida e volta [km]
    pub distance_km: f64,
    /// Consumo do automóvel [km/L]
    pub consumption_km_per_l: f64,
    /// Preço do litro do combustível [R$/L]
    pub fuel_price_per_liter: f64,
    /// Preço total dos pedágios [R$]
    pub toll: f64,
}

/// Seleções de ajuste do modo avançado.
#[derive(Debug, Clone, Copy)]
pub struct AdjustmentSelection {
    pub driving_profile: DrivingProfile,
    pub occupancy: Occupancy,
    pub air_conditioning: bool,
}

/// Resultado do cálculo avançado.
#[derive(Debug, Clone)]
pub struct AdvancedCostResult {
    /// Custo total estimado [R$]
    pub total: f64,
    /// Limite inferior da faixa, −5% [R$]
    pub min: f64,
    /// Limite superior da faixa, +5% [R$]
    pub max: f64,
    /// Consumo após o ajuste [km/L]
    pub adjusted_consumption_km_per_l: f64,
    /// Litros necessários [L]
    pub liters_required: f64,
    /// Ajuste total aplicado [%]
    pub total_adjustment_percent: i32,
    /// Descrições dos impactos no consumo, na ordem fixa de exibição:
    /// perfil de condução, ar-condicionado, passageiros/carga.
    pub impacts: Vec<String>,
}

/// Meia largura da faixa de incerteza apresentada (±5%). Heurística de
/// apresentação, sem base estatística.
const UNCERTAINTY_BAND: f64 = 0.05;

/// Custo avançado da viagem com ajustes de consumo e pedágios.
pub fn advanced_cost(
    inputs: &TripInputs,
    selection: &AdjustmentSelection,
) -> Result<AdvancedCostResult, CostError> {
    if inputs.consumption_km_per_l <= 0.0 {
        return Err(CostError::NonPositiveConsumption);
    }

    // 1. Ajuste total
    let mut total_adjustment_percent = selection.driving_profile.adjustment_percent()
        + selection.occupancy.adjustment_percent();
    if selection.air_conditioning {
        total_adjustment_percent += AIR_CONDITIONING_ADJUSTMENT_PERCENT;
    }

    // 2. Fator total
    let factor = 1.0 + f64::from(total_adjustment_percent) / 100.0;
    if factor <= 0.0 {
        return Err(CostError::NonPositiveAdjustmentFactor);
    }

    // 3. Consumo ajustado (mais consumo = menos km/L)
    let adjusted_consumption_km_per_l = inputs.consumption_km_per_l / factor;

    // 4. Litros necessários
    let liters_required = inputs.distance_km / adjusted_consumption_km_per_l;

    // 5. Custo de combustível
    let fuel_cost = liters_required * inputs.fuel_price_per_liter;

    // 6. Somar pedágios
    let total = fuel_cost + inputs.toll;

    // 7. Faixa estimada (±5%)
    let min = total * (1.0 - UNCERTAINTY_BAND);
    let max = total * (1.0 + UNCERTAINTY_BAND);

    // 8. Detalhes dos impactos
    let mut impacts = Vec::new();
    let profile_adjustment = selection.driving_profile.adjustment_percent();
    if profile_adjustment != 0 {
        impacts.push(format!(
            "Perfil de condução {} ({}%)",
            selection.driving_profile.name(),
            signed_percent(profile_adjustment)
        ));
    }
    if selection.air_conditioning {
        impacts.push(format!(
            "Ar-condicionado (+{AIR_CONDITIONING_ADJUSTMENT_PERCENT}%)"
        ));
    }
    let occupancy_adjustment = selection.occupancy.adjustment_percent();
    if occupancy_adjustment != 0 {
        impacts.push(format!("Passageiros/carga (+{occupancy_adjustment}%)"));
    }

    Ok(AdvancedCostResult {
        total,
        min,
        max,
        adjusted_consumption_km_per_l,
        liters_required,
        total_adjustment_percent,
        impacts,
    })
}

/// Ponto médio da faixa, exibido como média e usado na divisão por pessoa.
pub fn range_midpoint(result: &AdvancedCostResult) -> f64 {
    (result.min + result.max) / 2.0
}

/// Divisão do ponto médio da faixa por 2..=máximo do grupo selecionado.
pub fn per_person_splits(result: &AdvancedCostResult, occupancy: Occupancy) -> Vec<(u32, f64)> {
    let midpoint = range_midpoint(result);
    (2..=occupancy.max_people())
        .map(|people| (people, midpoint / f64::from(people)))
        .collect()
}

/// Formata um percentual com sinal explícito para valores positivos.
pub fn signed_percent(percent: i32) -> String {
    if percent > 0 {
        format!("+{percent}")
    } else {
        percent.to_string()
    }
}
