//! # Taxonomia de Erros
//!
//! Três famílias, uma para cada fronteira do motor:
//!
//! - [`ConfigError`]: fatal para `configure`/`reload`. O chamador decide se
//!   segue sem enriquecimento.
//! - [`RecordError`]: problema em um único registro do vocabulário. É
//!   registrado em log e o registro é ignorado.
//! - [`EnrichError`]: falha interna durante varredura ou inserção de markup.
//!   Nunca escapa de [`Enricher::enrich`](crate::enricher::Enricher::enrich).

use thiserror::Error;

/// Erros que impedem a construção do índice de palavras-chave.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("vocabulary \"{0}\" not found")]
    VocabularyNotFound(String),

    #[error("cannot find field \"{field}\" in vocabulary \"{vocabulary}\"")]
    MissingField { field: String, vocabulary: String },

    #[error("vocabulary source unavailable: {0}")]
    SourceUnavailable(#[from] std::io::Error),

    #[error("malformed vocabulary document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid pattern for keyword \"{keyword}\": {source}")]
    InvalidPattern {
        keyword: String,
        #[source]
        source: regex::Error,
    },
}

/// Erro em um registro individual (recuperado localmente).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record {position} has no value for keyword field \"{field}\"")]
    MissingKeyword { position: usize, field: String },

    #[error("record {position} has a blank keyword")]
    BlankKeyword { position: usize },
}

/// Falha interna de anotação (recuperada na fronteira de `enrich`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrichError {
    #[error("span {start}..{end} is outside a text of {len} bytes")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("span {start}..{end} does not fall on char boundaries")]
    NotCharBoundary { start: usize, end: usize },

    #[error("spans {first:?} and {second:?} are not disjoint and ascending")]
    Unordered {
        first: (usize, usize),
        second: (usize, usize),
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
