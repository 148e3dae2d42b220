use super::CostError;

/// Custo básico da viagem.
///
/// Fórmula base:
///   Litros necessários = Distância (km) ÷ Consumo (km/L)
///   Custo combustível = Litros × Preço por litro
pub fn basic_cost(
    distance_km: f64,
    consumption_km_per_l: f64,
    fuel_price_per_liter: f64,
) -> Result<f64, CostError> {
    if consumption_km_per_l <= 0.0 {
        return Err(CostError::NonPositiveConsumption);
    }
    let liters_required = distance_km / consumption_km_per_l;
    Ok(liters_required * fuel_price_per_liter)
}

/// Divide o custo entre `people` pessoas. Usado apenas para exibição.
pub fn split_cost(cost: f64, people: u32) -> f64 {
    cost / f64::from(people)
}
