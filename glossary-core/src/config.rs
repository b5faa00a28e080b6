//! # Configuração do Enriquecedor
//!
//! Tudo que o motor lê de fora do texto fica aqui: o nome do vocabulário,
//! os nomes dos campos do esquema, as tags do markup gerado e o alfabeto
//! usado na regra de fronteira.
//!
//! Os valores padrão reproduzem o sistema de exportação original
//! (vocabulário "Glossary", campos "Keywords"/"Title"/"Description",
//! tags `span`/`note`/`term`).
//!
//! ```rust
//! use glossary_core::config::EnricherConfig;
//!
//! let config: EnricherConfig = serde_json::from_str(r#"{ "vocabulary": "Wiener Library Glossary" }"#).unwrap();
//! assert_eq!(config.fields.keyword, "Keywords");
//! assert_eq!(config.markup.wrapper, "span");
//! ```

use serde::{Deserialize, Serialize};

/// Nomes dos campos do esquema que o índice lê de cada registro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub keyword: String,
    pub title: String,
    pub description: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            keyword: "Keywords".to_string(),
            title: "Title".to_string(),
            description: "Description".to_string(),
        }
    }
}

impl FieldNames {
    /// Os três nomes, na ordem em que são validados contra o esquema.
    pub fn all(&self) -> [&str; 3] {
        [&self.keyword, &self.title, &self.description]
    }
}

/// Vocabulário de tags inline combinado com o montador do documento final.
///
/// Uma ocorrência vira
/// `<wrapper>texto<note><term>título</term>descrição</note></wrapper>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupTags {
    pub wrapper: String,
    pub note: String,
    pub term: String,
}

impl Default for MarkupTags {
    fn default() -> Self {
        Self {
            wrapper: "span".to_string(),
            note: "note".to_string(),
            term: "term".to_string(),
        }
    }
}

impl MarkupTags {
    pub fn open_wrapper(&self) -> String {
        format!("<{}>", self.wrapper)
    }

    pub fn close_wrapper(&self) -> String {
        format!("</{}>", self.wrapper)
    }
}

/// Quais caracteres contam como "letra" na regra de fronteira.
///
/// Uma ocorrência só é aceita se não estiver colada a uma letra em nenhum dos
/// lados. Dígitos, pontuação, hífen e espaço são sempre fronteiras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryAlphabet {
    /// Qualquer caractere alfabético Unicode (`char::is_alphabetic`).
    #[default]
    Unicode,
    /// Exatamente `a-z`, `A-Z`, `ä Ä ö Ö ü Ü ß`.
    German,
}

impl BoundaryAlphabet {
    pub fn is_letter(self, c: char) -> bool {
        match self {
            BoundaryAlphabet::Unicode => c.is_alphabetic(),
            BoundaryAlphabet::German => {
                c.is_ascii_alphabetic() || matches!(c, 'ä' | 'Ä' | 'ö' | 'Ö' | 'ü' | 'Ü' | 'ß')
            }
        }
    }
}

/// Configuração completa de um [`Enricher`](crate::enricher::Enricher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnricherConfig {
    /// Nome do vocabulário pedido à fonte.
    pub vocabulary: String,
    pub fields: FieldNames,
    pub markup: MarkupTags,
    pub boundary: BoundaryAlphabet,
}

impl Default for EnricherConfig {
    fn default() -> Self {
        Self {
            vocabulary: "Glossary".to_string(),
            fields: FieldNames::default(),
            markup: MarkupTags::default(),
            boundary: BoundaryAlphabet::default(),
        }
    }
}

impl EnricherConfig {
    pub fn for_vocabulary(name: impl Into<String>) -> Self {
        Self {
            vocabulary: name.into(),
            ..Self::default()
        }
    }
}
