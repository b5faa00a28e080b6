//! Estado compartilhado: o motor atrás de um `RwLock` e a fonte usada nas recargas.

use std::sync::RwLock;

use glossary_core::corpus::demo_vocabulary;
use glossary_core::error::ConfigResult;
use glossary_core::{
    Enricher, GlossaryRecord, InMemorySource, JsonFileSource, Vocabulary, VocabularySource,
};
use tracing::warn;

use crate::config::WebConfig;

/// De onde o servidor lê o vocabulário.
#[derive(Debug, Clone)]
pub enum AppSource {
    File(JsonFileSource),
    /// Glossário embutido de demonstração
    Demo(InMemorySource),
}

impl AppSource {
    pub fn from_config(config: &WebConfig) -> Self {
        match &config.vocabulary_path {
            Some(path) => AppSource::File(JsonFileSource::new(path.clone())),
            None => {
                let mut vocabulary = demo_vocabulary();
                vocabulary.name = config.enricher.vocabulary.clone();
                AppSource::Demo(InMemorySource::single(vocabulary))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            AppSource::File(source) => source.path().display().to_string(),
            AppSource::Demo(_) => "demo".to_string(),
        }
    }
}

impl VocabularySource for AppSource {
    type Record = GlossaryRecord;

    fn load(&self, name: &str) -> ConfigResult<Vocabulary> {
        match self {
            AppSource::File(source) => source.load(name),
            AppSource::Demo(source) => source.load(name),
        }
    }
}

pub struct AppState {
    pub enricher: RwLock<Enricher>,
    pub source: AppSource,
}

impl AppState {
    /// Configura o motor. Se o vocabulário não puder ser carregado o servidor
    /// sobe mesmo assim, sem enriquecimento, e `/reload` pode tentar de novo.
    pub fn new(config: &WebConfig) -> Self {
        let source = AppSource::from_config(config);
        let enricher = match Enricher::configure(&source, config.enricher.clone()) {
            Ok(enricher) => enricher,
            Err(err) => {
                warn!(source = %source.describe(), error = %err, "vocabulário indisponível, seguindo sem enriquecimento");
                Enricher::empty(config.enricher.clone())
            }
        };
        Self {
            enricher: RwLock::new(enricher),
            source,
        }
    }
}
