//! Configuração do servidor: arquivo JSON opcional + variáveis de ambiente.
//!
//! Camadas, da mais fraca para a mais forte:
//! 1. valores padrão;
//! 2. arquivo JSON apontado por `GLOSSARY_CONFIG`;
//! 3. variáveis `GLOSSARY_*` (`GLOSSARY_BIND`, `GLOSSARY_VOCABULARY_PATH`,
//!    `GLOSSARY_ENRICHER__VOCABULARY`, ...; `__` separa níveis).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use glossary_core::EnricherConfig;
use serde::{Deserialize, Serialize};

/// Variável com o caminho do arquivo de configuração
pub const CONFIG_ENV: &str = "GLOSSARY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    /// Endereço de escuta (ex: "0.0.0.0:3000")
    pub bind: String,
    /// Arquivo JSON de vocabulários. Sem ele o servidor usa o glossário de demonstração.
    pub vocabulary_path: Option<PathBuf>,
    pub enricher: EnricherConfig,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            vocabulary_path: None,
            enricher: EnricherConfig::default(),
        }
    }
}

impl WebConfig {
    /// Carrega a configuração do processo.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var(CONFIG_ENV).ok().map(PathBuf::from);
        Self::layered(file.as_deref(), environment())
    }

    fn layered(file: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).format(FileFormat::Json));
        }
        builder.add_source(env).build()?.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("GLOSSARY")
        .prefix_separator("_")
        .separator("__")
}
