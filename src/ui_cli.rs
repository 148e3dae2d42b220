use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::cost::{
    self, AdjustmentSelection, DrivingProfile, Occupancy, TripInputs,
};
use crate::currency::format_brl;
use crate::i18n::{keys, Translator};

/// Opções do menu principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    BasicCalculation,
    AdvancedCalculation,
    Settings,
    Exit,
}

/// Exibe o menu principal e retorna a opção escolhida.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_BASIC));
    println!("{}", tr.t(keys::MAIN_MENU_ADVANCED));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::BasicCalculation),
            "2" => return Ok(MenuChoice::AdvancedCalculation),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// Fluxo do cálculo básico: coleta os campos, valida e exibe o custo
/// com a tabela de divisão por 2 a 5 pessoas.
pub fn handle_basic(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BASIC_HEADING));
    let distance = read_optional_f64(tr, tr.t(keys::PROMPT_DISTANCE))?;
    let consumption = read_optional_f64(tr, tr.t(keys::PROMPT_CONSUMPTION))?;
    let fuel_price = read_optional_f64(tr, tr.t(keys::PROMPT_FUEL_PRICE))?;

    if !cost::is_basic_input_valid(distance, consumption, fuel_price) {
        println!("{}", tr.t(keys::VALIDATION_BLOCKED));
        return Ok(());
    }
    let (Some(distance), Some(consumption), Some(fuel_price)) =
        (distance, consumption, fuel_price)
    else {
        return Ok(());
    };

    let total = cost::basic_cost(distance, consumption, fuel_price)?;
    println!("{} {}", tr.t(keys::RESULT_ESTIMATED_COST), format_brl(total));
    println!("{}", tr.t(keys::SPLIT_HEADING));
    for people in 2..=5 {
        print_split_line(tr, people, cost::split_cost(total, people));
    }
    Ok(())
}

/// Fluxo do cálculo avançado: campos numéricos, seleções categóricas,
/// validação e exibição da faixa, impactos, divisão e detalhes.
pub fn handle_advanced(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ADVANCED_HEADING));
    let distance = read_optional_f64(tr, tr.t(keys::PROMPT_DISTANCE))?;
    let consumption = read_optional_f64(tr, tr.t(keys::PROMPT_CONSUMPTION))?;
    let fuel_price = read_optional_f64(tr, tr.t(keys::PROMPT_FUEL_PRICE))?;
    let toll = read_optional_f64(tr, tr.t(keys::PROMPT_TOLL))?;
    let profile = read_driving_profile(tr)?;
    let occupancy = read_occupancy(tr)?;
    let air = read_air_conditioning(tr)?;

    if !cost::is_advanced_input_valid(distance, consumption, fuel_price, profile, occupancy, air)
    {
        println!("{}", tr.t(keys::VALIDATION_BLOCKED));
        return Ok(());
    }
    let (Some(distance), Some(consumption), Some(fuel_price)) =
        (distance, consumption, fuel_price)
    else {
        return Ok(());
    };
    let (Some(profile), Some(occupancy), Some(air)) = (profile, occupancy, air) else {
        return Ok(());
    };

    let inputs = TripInputs {
        distance_km: distance,
        consumption_km_per_l: consumption,
        fuel_price_per_liter: fuel_price,
        toll: toll.unwrap_or(0.0),
    };
    let selection = AdjustmentSelection {
        driving_profile: profile,
        occupancy,
        air_conditioning: air,
    };
    let result = cost::advanced_cost(&inputs, &selection)?;

    println!("{}", tr.t(keys::RESULT_ESTIMATED_COST));
    println!(
        "{} {} – {}",
        tr.t(keys::RESULT_RANGE),
        format_brl(result.min),
        format_brl(result.max)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_AVERAGE),
        format_brl(cost::range_midpoint(&result))
    );

    if !result.impacts.is_empty() {
        println!("{}", tr.t(keys::IMPACTS_HEADING));
        for impact in &result.impacts {
            println!("  • {impact}");
        }
    }

    println!("{}", tr.t(keys::SPLIT_HEADING));
    for (people, share) in cost::per_person_splits(&result, occupancy) {
        print_split_line(tr, people, share);
    }

    println!(
        "{} {:.2} km/L",
        tr.t(keys::RESULT_ADJUSTED_CONSUMPTION),
        result.adjusted_consumption_km_per_l
    );
    println!("{} {:.2} L", tr.t(keys::RESULT_LITERS), result.liters_required);
    println!(
        "{} {}%",
        tr.t(keys::RESULT_TOTAL_ADJUSTMENT),
        cost::signed_percent(result.total_adjustment_percent)
    );
    Ok(())
}

/// Menu de configurações: troca do idioma da interface.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    if sel.trim().is_empty() {
        return Ok(());
    }
    cfg.language = match sel.trim() {
        "1" => "pt-br".to_string(),
        "2" => "en-us".to_string(),
        "3" => "auto".to_string(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            cfg.language.clone()
        }
    };
    println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    Ok(())
}

fn print_split_line(tr: &Translator, people: u32, share: f64) {
    println!(
        "{} {people} {}: {} {}",
        tr.t(keys::SPLIT_DIVIDED_BY),
        tr.t(keys::SPLIT_PEOPLE),
        format_brl(share),
        tr.t(keys::SPLIT_PER_PERSON)
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

/// Lê um campo numérico opcional. Linha vazia ou não numérica equivale
/// a campo não preenchido; a validação decide se o cálculo é oferecido.
fn read_optional_f64(tr: &Translator, prompt: &str) -> Result<Option<f64>, AppError> {
    let s = read_line(prompt)?;
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) => Ok(Some(v)),
        Err(_) => {
            println!("{}", tr.t(keys::ERROR_INVALID_NUMBER));
            Ok(None)
        }
    }
}

fn read_driving_profile(tr: &Translator) -> Result<Option<DrivingProfile>, AppError> {
    println!("{}", tr.t(keys::PROFILE_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let profile = match sel.trim() {
        "1" => Some(DrivingProfile::Eco),
        "2" => Some(DrivingProfile::Normal),
        "3" => Some(DrivingProfile::Aggressive),
        _ => None,
    };
    Ok(profile)
}

fn read_occupancy(tr: &Translator) -> Result<Option<Occupancy>, AppError> {
    println!("{}", tr.t(keys::OCCUPANCY_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let occupancy = match sel.trim() {
        "1" => Some(Occupancy::UpToTwo),
        "2" => Some(Occupancy::ThreeToFour),
        "3" => Some(Occupancy::FiveOrHeavyLoad),
        _ => None,
    };
    Ok(occupancy)
}

fn read_air_conditioning(tr: &Translator) -> Result<Option<bool>, AppError> {
    println!("{}", tr.t(keys::AIR_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let air = match sel.trim() {
        "1" => Some(true),
        "2" => Some(false),
        _ => None,
    };
    Ok(air)
}
