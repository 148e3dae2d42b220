use clap::Parser;
use trip_cost_calculator::{app, config, i18n};

/// Calculadora de custo de viagem de carro (combustível + pedágio).
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Idioma da interface (auto/pt-br/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
}

/// Ponto de entrada: carrega a configuração, resolve o idioma e executa
/// o CLI.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("Erro: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
