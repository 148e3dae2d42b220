use super::adjustments::{DrivingProfile, Occupancy};

/// Validação do modo básico: os três campos preenchidos com números
/// finitos e consumo maior que zero.
pub fn is_basic_input_valid(
    distance_km: Option<f64>,
    consumption_km_per_l: Option<f64>,
    fuel_price_per_liter: Option<f64>,
) -> bool {
    is_finite(distance_km)
        && is_finite(fuel_price_per_liter)
        && consumption_km_per_l.is_some_and(|c| c.is_finite() && c > 0.0)
}

/// Validação do modo avançado: validade básica e todas as seleções
/// feitas (inclusive a escolha explícita de ar-condicionado sim/não).
/// O pedágio é opcional: campo vazio vale zero.
pub fn is_advanced_input_valid(
    distance_km: Option<f64>,
    consumption_km_per_l: Option<f64>,
    fuel_price_per_liter: Option<f64>,
    driving_profile: Option<DrivingProfile>,
    occupancy: Option<Occupancy>,
    air_conditioning: Option<bool>,
) -> bool {
    is_basic_input_valid(distance_km, consumption_km_per_l, fuel_price_per_liter)
        && driving_profile.is_some()
        && occupancy.is_some()
        && air_conditioning.is_some()
}

fn is_finite(value: Option<f64>) -> bool {
    value.is_some_and(f64::is_finite)
}
