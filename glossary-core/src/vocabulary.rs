//! # Fonte de Vocabulário
//!
//! O motor não sabe de onde vêm os verbetes. Ele conversa com duas
//! interfaces pequenas:
//!
//! - [`VocabularyRecord`]: um registro que devolve o valor de um campo pelo nome.
//! - [`VocabularySource`]: algo capaz de devolver todos os registros de um
//!   vocabulário nomeado, junto com as definições de campo do seu esquema.
//!
//! Este módulo também traz as implementações concretas usadas pelo servidor
//! e pelos testes: [`InMemorySource`] e [`JsonFileSource`].
//!
//! ## Formato do arquivo JSON
//!
//! ```json
//! {
//!   "vocabularies": [{
//!     "name": "Glossary",
//!     "fields": [{ "name": "Title" }, { "name": "Keywords" }, { "name": "Description" }],
//!     "records": [
//!       { "fields": { "Title": "Bentschen", "Keywords": ["Bentschen"], "Description": "..." } }
//!     ]
//!   }]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};

/// Capacidade mínima que o índice exige de um registro.
pub trait VocabularyRecord {
    /// Primeiro valor do campo `name`, se existir.
    ///
    /// Campos com vários valores ou traduções devolvem apenas o primeiro.
    fn field(&self, name: &str) -> Option<&str>;
}

/// Capacidade mínima que o motor exige da fonte de vocabulários.
pub trait VocabularySource {
    type Record: VocabularyRecord;

    /// Carrega o vocabulário `name` inteiro.
    ///
    /// Falhar aqui é fatal para `configure`: a fonte está inacessível ou o
    /// vocabulário não existe.
    fn load(&self, name: &str) -> ConfigResult<Vocabulary<Self::Record>>;
}

/// Definição de um campo no esquema do vocabulário.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Valor de um campo: um texto só ou uma lista (multi-valor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldValue::Single(value) => Some(value.as_str()),
            FieldValue::Multiple(values) => values.first().map(String::as_str),
        }
    }
}

/// Registro genérico de glossário: campos nomeados.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryRecord {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl GlossaryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Single(value.into()));
        self
    }

    pub fn with_values(mut self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Multiple(values));
        self
    }

    /// Registro com os três campos do esquema padrão.
    pub fn entry(keyword: &str, title: &str, description: &str) -> Self {
        Self::new()
            .with_field("Keywords", keyword)
            .with_field("Title", title)
            .with_field("Description", description)
    }
}

impl VocabularyRecord for GlossaryRecord {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::first)
    }
}

/// Um vocabulário carregado: nome, esquema e registros na ordem da fonte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary<R = GlossaryRecord> {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
    #[serde(default = "Vec::new")]
    pub records: Vec<R>,
}

impl<R> Vocabulary<R> {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            fields,
            records,
        }
    }

    pub fn defines_field(&self, name: &str) -> bool {
        self.fields.iter().any(|d| d.name == name)
    }
}

impl Vocabulary<GlossaryRecord> {
    /// Vocabulário com o esquema padrão `Title`/`Keywords`/`Description`.
    pub fn glossary(name: impl Into<String>, records: Vec<GlossaryRecord>) -> Self {
        Self::new(
            name,
            vec![
                FieldDefinition::new("Title"),
                FieldDefinition::new("Keywords"),
                FieldDefinition::new("Description"),
            ],
            records,
        )
    }
}

/// Fonte em memória. Útil em testes e quando o chamador já tem os registros.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    vocabularies: Vec<Vocabulary>,
}

impl InMemorySource {
    pub fn new(vocabularies: Vec<Vocabulary>) -> Self {
        Self { vocabularies }
    }

    pub fn single(vocabulary: Vocabulary) -> Self {
        Self::new(vec![vocabulary])
    }
}

impl VocabularySource for InMemorySource {
    type Record = GlossaryRecord;

    fn load(&self, name: &str) -> ConfigResult<Vocabulary> {
        self.vocabularies
            .iter()
            .find(|v| v.name == name)
            .cloned()
            .ok_or_else(|| ConfigError::VocabularyNotFound(name.to_string()))
    }
}

/// Documento JSON com vários vocabulários.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VocabularyDocument {
    #[serde(default)]
    pub vocabularies: Vec<Vocabulary>,
}

/// Fonte que lê um arquivo JSON a cada `load`, de modo que um `reload`
/// enxerga as alterações feitas no arquivo.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularySource for JsonFileSource {
    type Record = GlossaryRecord;

    fn load(&self, name: &str) -> ConfigResult<Vocabulary> {
        let raw = std::fs::read_to_string(&self.path)?;
        let document: VocabularyDocument = serde_json::from_str(&raw)?;
        debug!(
            path = %self.path.display(),
            vocabularies = document.vocabularies.len(),
            "documento de vocabulários lido"
        );
        InMemorySource::new(document.vocabularies).load(name)
    }
}
