use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Preferências persistidas da aplicação. Dados de viagem nunca são
/// gravados; apenas o idioma da interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Código de idioma (auto/pt-br/en-us)
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
        }
    }
}

/// Erros possíveis ao carregar/salvar a configuração.
#[derive(Debug)]
pub enum ConfigError {
    /// Erro de entrada/saída de arquivo
    Io(std::io::Error),
    /// Erro de leitura do TOML
    Serde(toml::de::Error),
    /// Erro de escrita do TOML
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "erro de entrada/saída: {e}"),
            ConfigError::Serde(e) => write!(f, "erro ao ler a configuração: {e}"),
            ConfigError::Serialize(e) => write!(f, "erro ao gravar a configuração: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Carrega config.toml ou cria o arquivo com os valores padrão.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Grava as preferências em config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
