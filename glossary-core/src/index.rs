//! # Índice de Palavras-Chave
//!
//! Construído uma vez por vocabulário e somente leitura depois disso.
//!
//! ## Regras
//!
//! 1. **Primeiro vence**: se dois registros têm a mesma palavra-chave, fica o
//!    primeiro na ordem entregue pela fonte.
//! 2. **Ordem de processamento**: palavras-chave mais longas (em caracteres)
//!    primeiro; empates mantêm a ordem de chegada (sort estável). Assim
//!    "Neu-Bentschen" reclama seu trecho antes de "Bentschen".
//! 3. Registros sem palavra-chave são ignorados e registrados em log; título
//!    ou descrição ausentes viram texto vazio.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{BoundaryAlphabet, FieldNames};
use crate::error::{ConfigError, ConfigResult, RecordError};
use crate::scanner::KeywordMatcher;
use crate::span::Span;
use crate::vocabulary::{Vocabulary, VocabularyRecord};

/// Um verbete indexado: palavra-chave e o conteúdo da nota.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub title: String,
    pub description: String,
    #[serde(skip)]
    matcher: KeywordMatcher,
}

impl KeywordEntry {
    pub fn new(
        keyword: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        boundary: BoundaryAlphabet,
    ) -> ConfigResult<Self> {
        let keyword = keyword.into();
        let matcher = KeywordMatcher::new(&keyword, boundary)?;
        Ok(Self {
            keyword,
            title: title.into(),
            description: description.into(),
            matcher,
        })
    }

    /// Ocorrências desta palavra-chave em `text`.
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        self.matcher.find_spans(text)
    }

    fn char_len(&self) -> usize {
        self.keyword.chars().count()
    }
}

/// Mapa palavra-chave → verbete, mais a ordem de processamento.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    /// Verbetes já na ordem de processamento (mais longos primeiro)
    entries: Vec<KeywordEntry>,
    /// Palavra-chave → posição em `entries`
    positions: HashMap<String, usize>,
    /// Registros ignorados durante a construção
    skipped: Vec<RecordError>,
}

impl KeywordIndex {
    /// Índice sem verbetes: `enrich` devolve o texto intacto.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Constrói o índice a partir de um vocabulário carregado.
    ///
    /// Falha apenas se o esquema não define algum dos campos configurados.
    /// Problemas em registros individuais são registrados e pulados.
    pub fn build<R: VocabularyRecord>(
        vocabulary: &Vocabulary<R>,
        fields: &FieldNames,
        boundary: BoundaryAlphabet,
    ) -> ConfigResult<Self> {
        for field in fields.all() {
            if !vocabulary.defines_field(field) {
                return Err(ConfigError::MissingField {
                    field: field.to_string(),
                    vocabulary: vocabulary.name.clone(),
                });
            }
        }

        let mut entries: Vec<KeywordEntry> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut skipped = Vec::new();

        for (position, record) in vocabulary.records.iter().enumerate() {
            let keyword = match record.field(&fields.keyword) {
                Some(k) if !k.trim().is_empty() => k,
                Some(_) => {
                    let err = RecordError::BlankKeyword { position };
                    warn!(vocabulary = %vocabulary.name, "{err}");
                    skipped.push(err);
                    continue;
                }
                None => {
                    let err = RecordError::MissingKeyword {
                        position,
                        field: fields.keyword.clone(),
                    };
                    warn!(vocabulary = %vocabulary.name, "{err}");
                    skipped.push(err);
                    continue;
                }
            };

            if !seen.insert(keyword) {
                debug!(keyword, position, "palavra-chave repetida, mantendo o primeiro registro");
                continue;
            }

            entries.push(KeywordEntry::new(
                keyword,
                record.field(&fields.title).unwrap_or_default(),
                record.field(&fields.description).unwrap_or_default(),
                boundary,
            )?);
        }

        Ok(Self::from_entries(entries, skipped))
    }

    /// Ordena `entries` (já deduplicados) e monta o mapa de posições.
    fn from_entries(mut entries: Vec<KeywordEntry>, skipped: Vec<RecordError>) -> Self {
        // sort_by é estável: empates preservam a ordem de chegada
        entries.sort_by(|a, b| b.char_len().cmp(&a.char_len()));

        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.keyword.clone(), i))
            .collect();

        debug!(keywords = entries.len(), skipped = skipped.len(), "índice de palavras-chave construído");

        Self {
            entries,
            positions,
            skipped,
        }
    }

    /// Verbetes na ordem de processamento.
    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    /// Palavras-chave na ordem de processamento.
    pub fn processing_order(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.keyword.as_str())
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.positions.get(keyword).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registros ignorados na construção (sem palavra-chave ou em branco).
    pub fn skipped(&self) -> &[RecordError] {
        &self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{FieldDefinition, GlossaryRecord};

    fn build(records: Vec<GlossaryRecord>) -> KeywordIndex {
        let vocabulary = Vocabulary::glossary("Glossary", records);
        KeywordIndex::build(&vocabulary, &FieldNames::default(), BoundaryAlphabet::Unicode).unwrap()
    }

    #[test]
    fn test_longest_first_with_stable_ties() {
        let index = build(vec![
            GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort"),
            GlossaryRecord::entry("Poznan", "Poznan", ""),
            GlossaryRecord::entry("Neu-Bentschen", "Neu-Bentschen", ""),
            GlossaryRecord::entry("Alt-Bentschen", "Alt-Bentschen", ""),
            GlossaryRecord::entry("Zbaszyn", "Zbaszyn", ""),
        ]);
        let order: Vec<&str> = index.processing_order().collect();
        assert_eq!(
            order,
            vec!["Neu-Bentschen", "Alt-Bentschen", "Bentschen", "Zbaszyn", "Poznan"]
        );
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "Zbąszyń" tem 7 caracteres (9 bytes); "Bentschen" tem 9 caracteres
        let index = build(vec![
            GlossaryRecord::entry("Zbąszyń", "", ""),
            GlossaryRecord::entry("Bentsch", "", ""),
            GlossaryRecord::entry("Bentschen", "", ""),
        ]);
        let order: Vec<&str> = index.processing_order().collect();
        assert_eq!(order, vec!["Bentschen", "Zbąszyń", "Bentsch"]);
    }

    #[test]
    fn test_first_record_wins() {
        let index = build(vec![
            GlossaryRecord::entry("Bentschen", "Primeiro", "Der Ort"),
            GlossaryRecord::entry("Bentschen", "Segundo", "Anderer Ort"),
        ]);
        assert_eq!(index.len(), 1);
        let entry = index.get("Bentschen").unwrap();
        assert_eq!(entry.title, "Primeiro");
        assert_eq!(entry.description, "Der Ort");
    }

    #[test]
    fn test_records_without_keyword_are_skipped() {
        let index = build(vec![
            GlossaryRecord::new().with_field("Title", "Sem palavra-chave"),
            GlossaryRecord::entry("   ", "Em branco", ""),
            GlossaryRecord::new().with_field("Keywords", "Poznan"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(
            index.skipped(),
            &[
                RecordError::MissingKeyword { position: 0, field: "Keywords".to_string() },
                RecordError::BlankKeyword { position: 1 },
            ]
        );
        let poznan = index.get("Poznan").unwrap();
        assert_eq!(poznan.title, "");
        assert_eq!(poznan.description, "");
    }

    #[test]
    fn test_schema_without_field_is_fatal() {
        let vocabulary = Vocabulary::new(
            "Glossary",
            vec![FieldDefinition::new("Title"), FieldDefinition::new("Keywords")],
            vec![GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort")],
        );
        let err = KeywordIndex::build(&vocabulary, &FieldNames::default(), BoundaryAlphabet::Unicode)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { ref field, .. } if field == "Description"
        ));
        assert_eq!(
            err.to_string(),
            "cannot find field \"Description\" in vocabulary \"Glossary\""
        );
    }

    #[test]
    fn test_custom_field_names() {
        let vocabulary = Vocabulary::new(
            "Orte",
            vec![
                FieldDefinition::new("Stichwort"),
                FieldDefinition::new("Name"),
                FieldDefinition::new("Erklärung"),
            ],
            vec![GlossaryRecord::new()
                .with_field("Stichwort", "Zbaszyn")
                .with_field("Name", "Zbąszyń")
                .with_field("Erklärung", "Grenzort")],
        );
        let fields = FieldNames {
            keyword: "Stichwort".to_string(),
            title: "Name".to_string(),
            description: "Erklärung".to_string(),
        };
        let index = KeywordIndex::build(&vocabulary, &fields, BoundaryAlphabet::Unicode).unwrap();
        let entry = index.get("Zbaszyn").unwrap();
        assert_eq!(entry.title, "Zbąszyń");
        assert_eq!(entry.description, "Grenzort");
    }

    #[test]
    fn test_clone_keeps_entries_and_skipped_records() {
        let index = build(vec![
            GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort"),
            GlossaryRecord::entry("  ", "Leer", ""),
        ]);
        let copy = index.clone();
        assert_eq!(copy.skipped(), &[RecordError::BlankKeyword { position: 1 }]);
        assert_eq!(copy.processing_order().collect::<Vec<_>>(), vec!["Bentschen"]);
    }
}
