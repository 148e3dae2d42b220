use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// Chaves de texto da interface.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_BASIC: &str = "main_menu.basic";
    pub const MAIN_MENU_ADVANCED: &str = "main_menu.advanced";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const BASIC_HEADING: &str = "basic.heading";
    pub const ADVANCED_HEADING: &str = "advanced.heading";

    pub const PROMPT_DISTANCE: &str = "prompt.distance";
    pub const PROMPT_CONSUMPTION: &str = "prompt.consumption";
    pub const PROMPT_FUEL_PRICE: &str = "prompt.fuel_price";
    pub const PROMPT_TOLL: &str = "prompt.toll";
    pub const PROMPT_SELECT: &str = "prompt.select";

    pub const PROFILE_OPTIONS: &str = "advanced.profile_options";
    pub const OCCUPANCY_OPTIONS: &str = "advanced.occupancy_options";
    pub const AIR_OPTIONS: &str = "advanced.air_options";

    pub const VALIDATION_BLOCKED: &str = "error.validation_blocked";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const RESULT_ESTIMATED_COST: &str = "result.estimated_cost";
    pub const RESULT_RANGE: &str = "result.range";
    pub const RESULT_AVERAGE: &str = "result.average";
    pub const IMPACTS_HEADING: &str = "result.impacts_heading";
    pub const SPLIT_HEADING: &str = "result.split_heading";
    pub const SPLIT_DIVIDED_BY: &str = "result.split_divided_by";
    pub const SPLIT_PEOPLE: &str = "result.split_people";
    pub const SPLIT_PER_PERSON: &str = "result.split_per_person";
    pub const RESULT_ADJUSTED_CONSUMPTION: &str = "result.adjusted_consumption";
    pub const RESULT_LITERS: &str = "result.liters";
    pub const RESULT_TOTAL_ADJUSTMENT: &str = "result.total_adjustment";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Pt,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Pt
        }
    }

}

/// Fornece os textos da interface no idioma resolvido.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// Cria o tradutor a partir do código de idioma (pt/en). Códigos
    /// desconhecidos caem em pt.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// Cria o tradutor com pacote de idioma opcional (diretório locales/
    /// ou outro indicado). Sem arquivo, usa apenas as tabelas embutidas.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Retorna o texto da chave. Sem tradução em inglês, cai no português.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| pt(key)),
            Language::Pt => pt(key),
        }
    }
}

/// Resolve o idioma na ordem: flag de linha de comando, configuração,
/// locale do sistema, pt-br.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "pt-br".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "pt" => Some("pt".into()),
        "pt-br" => Some("pt-br".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("pt") => Some("pt-br".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "pt" => Some("pt".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// Detecta o idioma a partir do locale do sistema.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// Carrega um pacote de idioma em TOML: mapa plano de key = "valor".
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) código completo (ex.: pt-br)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) código base (ex.: pt)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// Pacotes embutidos no binário para funcionar sem arquivos externos.
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "pt-br" | "pt" => parse_toml_to_map(include_str!("../locales/pt-br.toml")),
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        _ => None,
    }
}

fn pt(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Erro",
        APP_EXIT => "Encerrando a aplicação.",
        MAIN_MENU_TITLE => "\n=== Calculadora de Custo de Viagem ===",
        MAIN_MENU_BASIC => "1) Cálculo Básico",
        MAIN_MENU_ADVANCED => "2) Cálculo Avançado",
        MAIN_MENU_SETTINGS => "3) Configurações",
        MAIN_MENU_EXIT => "0) Sair",
        PROMPT_MENU_SELECT => "Escolha uma opção: ",
        INVALID_SELECTION_RETRY => "Opção inválida. Tente novamente.",
        BASIC_HEADING => "\n-- Cálculo Básico --",
        ADVANCED_HEADING => "\n-- Cálculo Avançado --",
        PROMPT_DISTANCE => "Distância da viagem (ida e volta) [km]: ",
        PROMPT_CONSUMPTION => "Consumo do automóvel [km/L]: ",
        PROMPT_FUEL_PRICE => "Preço do litro do combustível [R$]: ",
        PROMPT_TOLL => "Preço total do pedágio [R$] (vazio = sem pedágio): ",
        PROMPT_SELECT => "Escolha: ",
        PROFILE_OPTIONS => {
            "Modo de condução: 1) Eco (acelera com calma, antecipa trocas)  2) Normal (condução do dia a dia)  3) Aggressive (acelera forte e mantém giro alto)"
        }
        OCCUPANCY_OPTIONS => {
            "Passageiros/carga: 1) 1–2 pessoas  2) 3–4 pessoas  3) 5 pessoas / carga pesada"
        }
        AIR_OPTIONS => "Ar-condicionado: 1) Sim  2) Não",
        VALIDATION_BLOCKED => {
            "Preencha todos os campos para calcular; o consumo deve ser maior que zero."
        }
        ERROR_INVALID_NUMBER => "Digite um número.",
        RESULT_ESTIMATED_COST => "Custo estimado da viagem:",
        RESULT_RANGE => "Faixa estimada:",
        RESULT_AVERAGE => "Média:",
        IMPACTS_HEADING => "Impactos no consumo:",
        SPLIT_HEADING => "Divisão do valor:",
        SPLIT_DIVIDED_BY => "Dividido por",
        SPLIT_PEOPLE => "pessoas",
        SPLIT_PER_PERSON => "por pessoa",
        RESULT_ADJUSTED_CONSUMPTION => "Consumo ajustado:",
        RESULT_LITERS => "Litros necessários:",
        RESULT_TOTAL_ADJUSTMENT => "Ajuste total aplicado:",
        SETTINGS_HEADING => "\n-- Configurações --",
        SETTINGS_CURRENT_LANGUAGE => "Idioma atual:",
        SETTINGS_OPTIONS => "1) Português (pt-BR)  2) English (en-US)  3) Automático",
        SETTINGS_PROMPT_CHANGE => "Número para alterar (enter para cancelar): ",
        SETTINGS_INVALID => "Entrada inválida; idioma mantido.",
        SETTINGS_SAVED => "Idioma salvo (vale a partir da próxima execução):",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Trip Cost Calculator ===",
        MAIN_MENU_BASIC => "1) Basic Calculation",
        MAIN_MENU_ADVANCED => "2) Advanced Calculation",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select an option: ",
        INVALID_SELECTION_RETRY => "Invalid option. Please try again.",
        BASIC_HEADING => "\n-- Basic Calculation --",
        ADVANCED_HEADING => "\n-- Advanced Calculation --",
        PROMPT_DISTANCE => "Trip distance (round trip) [km]: ",
        PROMPT_CONSUMPTION => "Vehicle fuel economy [km/L]: ",
        PROMPT_FUEL_PRICE => "Fuel price per liter [R$]: ",
        PROMPT_TOLL => "Total toll cost [R$] (empty = no tolls): ",
        PROMPT_SELECT => "Select: ",
        PROFILE_OPTIONS => {
            "Driving profile: 1) Eco (gentle acceleration, early shifts)  2) Normal (everyday driving)  3) Aggressive (hard acceleration, high revs)"
        }
        OCCUPANCY_OPTIONS => {
            "Passengers/load: 1) 1–2 people  2) 3–4 people  3) 5 people / heavy load"
        }
        AIR_OPTIONS => "Air conditioning: 1) Yes  2) No",
        VALIDATION_BLOCKED => {
            "Fill in all fields before calculating; fuel economy must be greater than zero."
        }
        ERROR_INVALID_NUMBER => "Please enter a number.",
        RESULT_ESTIMATED_COST => "Estimated trip cost:",
        RESULT_RANGE => "Estimated range:",
        RESULT_AVERAGE => "Average:",
        IMPACTS_HEADING => "Consumption impacts:",
        SPLIT_HEADING => "Cost split:",
        SPLIT_DIVIDED_BY => "Split among",
        SPLIT_PEOPLE => "people",
        SPLIT_PER_PERSON => "per person",
        RESULT_ADJUSTED_CONSUMPTION => "Adjusted fuel economy:",
        RESULT_LITERS => "Liters required:",
        RESULT_TOTAL_ADJUSTMENT => "Total adjustment applied:",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Português (pt-BR)  2) English (en-US)  3) Automatic",
        SETTINGS_PROMPT_CHANGE => "Number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language saved (takes effect on next start):",
        _ => return None,
    })
}
