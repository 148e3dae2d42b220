use trip_cost_calculator::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn portuguese_is_the_default_language() {
    let tr = Translator::new("pt-br");
    assert_eq!(tr.language(), Language::Pt);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Erro");
}

#[test]
fn english_table_overrides_portuguese() {
    let tr = Translator::new("en-us");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
}

#[test]
fn unknown_codes_fall_back_to_portuguese() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language(), Language::Pt);
}

#[test]
fn cli_flag_wins_over_config() {
    assert_eq!(resolve_language("en-us", Some("pt-br")), "en-us");
}

#[test]
fn config_wins_when_flag_is_auto() {
    assert_eq!(resolve_language("auto", Some("en-us")), "en-us");
    assert_eq!(resolve_language("", Some("pt-br")), "pt-br");
}

#[test]
fn regional_variants_normalize_to_known_codes() {
    assert_eq!(resolve_language("pt-PT", None), "pt-br");
    assert_eq!(resolve_language("en_GB", Some("auto")), "en-us");
}
