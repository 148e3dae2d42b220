use trip_cost_calculator::cost::{
    advanced_cost, basic_cost, per_person_splits, range_midpoint, split_cost,
    AdjustmentSelection, CostError, DrivingProfile, Occupancy, TripInputs,
};

fn trip(distance_km: f64, consumption_km_per_l: f64, fuel_price_per_liter: f64, toll: f64) -> TripInputs {
    TripInputs {
        distance_km,
        consumption_km_per_l,
        fuel_price_per_liter,
        toll,
    }
}

#[test]
fn basic_cost_simple_scenario() {
    let cost = basic_cost(100.0, 10.0, 5.0).expect("basic cost");
    assert!((cost - 50.0).abs() < 1e-9, "cost={cost}");
}

#[test]
fn basic_cost_matches_formula_and_is_non_negative() {
    let cases = [(0.0, 1.0, 0.0), (350.5, 11.3, 5.89), (1200.0, 8.0, 6.45)];
    for (d, c, p) in cases {
        let cost = basic_cost(d, c, p).expect("basic cost");
        assert!((cost - (d / c) * p).abs() < 1e-9, "d={d} c={c} p={p}");
        assert!(cost >= 0.0);
    }
}

#[test]
fn basic_cost_rejects_non_positive_consumption() {
    assert_eq!(
        basic_cost(100.0, 0.0, 5.0),
        Err(CostError::NonPositiveConsumption)
    );
    assert_eq!(
        basic_cost(100.0, -3.0, 5.0),
        Err(CostError::NonPositiveConsumption)
    );
}

#[test]
fn split_cost_divides_evenly() {
    assert!((split_cost(50.0, 2) - 25.0).abs() < 1e-9);
    assert!((split_cost(50.0, 5) - 10.0).abs() < 1e-9);
}

#[test]
fn advanced_eco_three_to_four_no_air_scenario() {
    let inputs = trip(200.0, 12.0, 6.0, 10.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Eco,
        occupancy: Occupancy::ThreeToFour,
        air_conditioning: false,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    assert_eq!(res.total_adjustment_percent, -3);
    assert!((res.adjusted_consumption_km_per_l - 12.0 / 0.97).abs() < 1e-4);
    assert!((res.liters_required - 16.1666).abs() < 1e-4);
    assert!((res.total - 107.0).abs() < 1e-4, "total={}", res.total);
    assert!((res.min - 101.65).abs() < 1e-4, "min={}", res.min);
    assert!((res.max - 112.35).abs() < 1e-4, "max={}", res.max);
}

#[test]
fn advanced_range_is_symmetric_five_percent_band() {
    let inputs = trip(480.0, 9.5, 6.19, 24.8);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Aggressive,
        occupancy: Occupancy::FiveOrHeavyLoad,
        air_conditioning: true,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    assert!(res.min <= res.total && res.total <= res.max);
    assert!(((res.max - res.min) - 0.10 * res.total).abs() < 1e-9);
    assert!((range_midpoint(&res) - res.total).abs() < 1e-9);
}

#[test]
fn advanced_impact_list_has_fixed_order() {
    let inputs = trip(200.0, 12.0, 6.0, 0.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Aggressive,
        occupancy: Occupancy::FiveOrHeavyLoad,
        air_conditioning: true,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    assert_eq!(res.total_adjustment_percent, 30);
    assert_eq!(
        res.impacts,
        vec![
            "Perfil de condução Aggressive (+15%)".to_string(),
            "Ar-condicionado (+5%)".to_string(),
            "Passageiros/carga (+10%)".to_string(),
        ]
    );
}

#[test]
fn advanced_eco_impact_keeps_negative_sign() {
    let inputs = trip(100.0, 10.0, 5.0, 0.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Eco,
        occupancy: Occupancy::UpToTwo,
        air_conditioning: false,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    assert_eq!(res.impacts, vec!["Perfil de condução Eco (-8%)".to_string()]);
}

#[test]
fn advanced_zero_adjustment_is_identity() {
    let inputs = trip(300.0, 14.0, 5.5, 0.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Normal,
        occupancy: Occupancy::UpToTwo,
        air_conditioning: false,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    assert_eq!(res.total_adjustment_percent, 0);
    assert!(res.impacts.is_empty());
    assert_eq!(res.adjusted_consumption_km_per_l, 14.0);
    let basic = basic_cost(300.0, 14.0, 5.5).expect("basic cost");
    assert!((res.total - basic).abs() < 1e-9);
}

#[test]
fn advanced_is_idempotent() {
    let inputs = trip(200.0, 12.0, 6.0, 10.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Eco,
        occupancy: Occupancy::ThreeToFour,
        air_conditioning: true,
    };
    let a = advanced_cost(&inputs, &selection).expect("first call");
    let b = advanced_cost(&inputs, &selection).expect("second call");
    assert_eq!(a.total, b.total);
    assert_eq!(a.min, b.min);
    assert_eq!(a.max, b.max);
    assert_eq!(a.liters_required, b.liters_required);
    assert_eq!(a.impacts, b.impacts);
}

#[test]
fn advanced_rejects_non_positive_consumption() {
    let inputs = trip(200.0, 0.0, 6.0, 0.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Normal,
        occupancy: Occupancy::UpToTwo,
        air_conditioning: false,
    };
    let err = advanced_cost(&inputs, &selection).expect_err("must reject");
    assert_eq!(err, CostError::NonPositiveConsumption);
}

#[test]
fn per_person_splits_gated_by_occupancy_bracket() {
    let inputs = trip(200.0, 12.0, 6.0, 10.0);
    let selection = AdjustmentSelection {
        driving_profile: DrivingProfile::Normal,
        occupancy: Occupancy::UpToTwo,
        air_conditioning: false,
    };
    let res = advanced_cost(&inputs, &selection).expect("advanced cost");
    let midpoint = range_midpoint(&res);

    let two = per_person_splits(&res, Occupancy::UpToTwo);
    assert_eq!(two.len(), 1);
    assert_eq!(two[0].0, 2);
    assert!((two[0].1 - midpoint / 2.0).abs() < 1e-9);

    let five: Vec<u32> = per_person_splits(&res, Occupancy::FiveOrHeavyLoad)
        .iter()
        .map(|(people, _)| *people)
        .collect();
    assert_eq!(five, vec![2, 3, 4, 5]);
}
