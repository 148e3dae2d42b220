use crate::config::Config;
use crate::cost::CostError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// Erros possíveis durante a execução da aplicação.
#[derive(Debug)]
pub enum AppError {
    /// Erro de entrada/saída
    Io(std::io::Error),
    /// Erro ao carregar/salvar a configuração
    Config(crate::config::ConfigError),
    /// Erro do núcleo de cálculo
    Cost(CostError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            AppError::Config(e) => write!(f, "erro de configuração: {e}"),
            AppError::Cost(e) => write!(f, "erro de cálculo: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<CostError> for AppError {
    fn from(value: CostError) -> Self {
        AppError::Cost(value)
    }
}

/// Executa o laço principal do CLI.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::BasicCalculation => ui_cli::handle_basic(tr)?,
            MenuChoice::AdvancedCalculation => ui_cli::handle_advanced(tr)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
