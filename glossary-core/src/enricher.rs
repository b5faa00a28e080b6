//! # Enriquecedor — Fachada do Motor
//!
//! Conecta os estágios na ordem:
//!
//! 1. **Índice** ([`KeywordIndex`]): construído em `configure`/`reload`.
//! 2. **Scanner + Resolvedor** ([`resolve`]): ocorrências aceitas, sem sobreposição.
//! 3. **Inserção** ([`splice`]): markup aplicado de trás para frente.
//!
//! ## Política de falhas
//!
//! - `configure`/`reload` propagam [`ConfigError`](crate::error::ConfigError): o chamador decide se
//!   segue sem enriquecimento.
//! - `enrich` **nunca** falha: qualquer erro interno é registrado em log e o
//!   texto original volta intacto. A exportação que consome o texto não pode
//!   ser bloqueada por uma anotação.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use glossary_core::{EnricherConfig, Enricher, GlossaryRecord, InMemorySource, Vocabulary};
//!
//! let source = InMemorySource::single(Vocabulary::glossary(
//!     "Glossary",
//!     vec![GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort Namens Bentschen")],
//! ));
//! let enricher = Enricher::configure(&source, EnricherConfig::default()).unwrap();
//!
//! assert_eq!(
//!     enricher.enrich("nach Bentschen."),
//!     "nach <span>Bentschen<note><term>Bentschen</term>Der Ort Namens Bentschen</note></span>."
//! );
//! ```

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::EnricherConfig;
use crate::error::{ConfigResult, EnrichError};
use crate::index::KeywordIndex;
use crate::resolver::resolve;
use crate::span::CommittedAnnotation;
use crate::splicer::{render_note, splice};
use crate::vocabulary::{Vocabulary, VocabularyRecord, VocabularySource};

/// Texto anotado junto com as anotações que o produziram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrichment {
    pub text: String,
    pub annotations: Vec<CommittedAnnotation>,
}

impl Enrichment {
    fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            annotations: Vec::new(),
        }
    }
}

/// Motor de anotação configurado com um vocabulário.
///
/// Depois de construído é somente leitura: `enrich` recebe `&self` e pode ser
/// chamado de várias threads ao mesmo tempo. `reload` exige `&mut self`, o
/// que obriga o chamador a serializar recargas.
#[derive(Debug, Clone)]
pub struct Enricher {
    config: EnricherConfig,
    index: KeywordIndex,
}

impl Enricher {
    /// Carrega `config.vocabulary` da fonte e constrói o índice.
    pub fn configure<S: VocabularySource>(source: &S, config: EnricherConfig) -> ConfigResult<Self> {
        let index = load_index(source, &config)?;
        Ok(Self { config, index })
    }

    /// Constrói o motor a partir de um vocabulário já carregado.
    pub fn from_vocabulary<R: VocabularyRecord>(
        vocabulary: &Vocabulary<R>,
        config: EnricherConfig,
    ) -> ConfigResult<Self> {
        let index = KeywordIndex::build(vocabulary, &config.fields, config.boundary)?;
        Ok(Self { config, index })
    }

    /// Motor sem verbetes. Útil para seguir "sem enriquecimento".
    pub fn empty(config: EnricherConfig) -> Self {
        Self {
            config,
            index: KeywordIndex::empty(),
        }
    }

    /// Reconstrói o índice a partir da fonte.
    ///
    /// O índice antigo só é substituído se a reconstrução der certo.
    pub fn reload<S: VocabularySource>(&mut self, source: &S) -> ConfigResult<()> {
        match load_index(source, &self.config) {
            Ok(index) => {
                info!(
                    vocabulary = %self.config.vocabulary,
                    before = self.index.len(),
                    after = index.len(),
                    "vocabulário recarregado"
                );
                self.index = index;
                Ok(())
            }
            Err(err) => {
                warn!(vocabulary = %self.config.vocabulary, error = %err, "recarga falhou, mantendo o índice anterior");
                Err(err)
            }
        }
    }

    pub fn config(&self) -> &EnricherConfig {
        &self.config
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    /// Anotações aceitas para `text`, em ordem crescente de início.
    pub fn annotate(&self, text: &str) -> Vec<CommittedAnnotation> {
        resolve(&self.index, text)
            .into_iter()
            .map(|candidate| CommittedAnnotation {
                span: candidate.span,
                keyword: candidate.entry.keyword.clone(),
                markup: render_note(candidate.entry, &self.config.markup),
            })
            .collect()
    }

    /// Como [`enrich`](Self::enrich), mas expõe o erro interno.
    pub fn try_enrich(&self, text: &str) -> Result<String, EnrichError> {
        self.try_enrich_detailed(text).map(|enrichment| enrichment.text)
    }

    /// Como [`enrich_detailed`](Self::enrich_detailed), mas expõe o erro interno.
    pub fn try_enrich_detailed(&self, text: &str) -> Result<Enrichment, EnrichError> {
        if self.index.is_empty() {
            return Ok(Enrichment::unchanged(text));
        }
        let annotations = self.annotate(text);
        debug!(annotations = annotations.len(), bytes = text.len(), "texto anotado");
        let enriched = splice(text, &annotations, &self.config.markup)?;
        Ok(Enrichment {
            text: enriched,
            annotations,
        })
    }

    /// Anota `text` com o glossário. Nunca falha: em erro devolve `text`.
    pub fn enrich(&self, text: &str) -> String {
        self.enrich_detailed(text).text
    }

    /// Como [`enrich`](Self::enrich), devolvendo também as anotações aplicadas.
    ///
    /// Em caso de falha interna o texto volta intacto e sem anotações.
    pub fn enrich_detailed(&self, text: &str) -> Enrichment {
        fail_open(text, self.try_enrich_detailed(text))
    }

    /// Anota vários textos em paralelo (rayon), preservando a ordem.
    pub fn enrich_batch<T>(&self, texts: &[T]) -> Vec<String>
    where
        T: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.enrich(t.as_ref())).collect()
    }
}

/// Único ponto de recuperação: erro vira o texto original, sem anotações.
fn fail_open(text: &str, result: Result<Enrichment, EnrichError>) -> Enrichment {
    result.unwrap_or_else(|err| {
        warn!(error = %err, "falha ao anotar texto, devolvendo original");
        Enrichment::unchanged(text)
    })
}

fn load_index<S: VocabularySource>(source: &S, config: &EnricherConfig) -> ConfigResult<KeywordIndex> {
    let vocabulary = source.load(&config.vocabulary)?;
    let index = KeywordIndex::build(&vocabulary, &config.fields, config.boundary)?;
    info!(
        vocabulary = %vocabulary.name,
        records = vocabulary.records.len(),
        keywords = index.len(),
        skipped = index.skipped().len(),
        "vocabulário carregado"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoundaryAlphabet, MarkupTags};
    use crate::corpus::{bentschen_vocabulary, BENTSCHEN_EXPECTED, BENTSCHEN_TEXT, TESTIMONY_EXCERPT};
    use crate::error::ConfigError;
    use crate::vocabulary::{GlossaryRecord, InMemorySource};

    fn bentschen() -> Enricher {
        Enricher::configure(
            &InMemorySource::single(bentschen_vocabulary()),
            EnricherConfig::default(),
        )
        .unwrap()
    }

    /// Remove todo markup inserido, deixando só o texto original.
    fn strip(enriched: &str, annotations: &[CommittedAnnotation], tags: &MarkupTags) -> String {
        let mut out = enriched.to_string();
        for a in annotations {
            out = out.replacen(&format!("{}{}", a.markup, tags.close_wrapper()), "", 1);
        }
        out.replace(&tags.open_wrapper(), "")
    }

    #[test]
    fn test_bentschen_scenario() {
        assert_eq!(bentschen().enrich(BENTSCHEN_TEXT), BENTSCHEN_EXPECTED);
    }

    #[test]
    fn test_enrich_is_deterministic() {
        let enricher = bentschen();
        let first = enricher.enrich(TESTIMONY_EXCERPT);
        for _ in 0..5 {
            assert_eq!(enricher.enrich(TESTIMONY_EXCERPT), first);
        }
    }

    #[test]
    fn test_character_preservation() {
        let enricher = bentschen();
        for text in [BENTSCHEN_TEXT, TESTIMONY_EXCERPT] {
            let annotations = enricher.annotate(text);
            assert!(!annotations.is_empty());
            let enriched = enricher.enrich(text);
            assert_eq!(strip(&enriched, &annotations, &enricher.config().markup), text);
        }
    }

    #[test]
    fn test_longest_match_priority() {
        let annotations = bentschen().annotate("Neu-Bentschen");
        assert_eq!(annotations.len(), 1);
        assert_eq!(annotations[0].keyword, "Neu-Bentschen");
        assert_eq!((annotations[0].span.start, annotations[0].span.end), (0, 13));
    }

    #[test]
    fn test_boundary_rejection_and_hyphen() {
        let enricher = Enricher::from_vocabulary(
            &Vocabulary::glossary("Glossary", vec![GlossaryRecord::entry("Bentschen", "Bentschen", "Ort")]),
            EnricherConfig::default(),
        )
        .unwrap();
        assert_eq!(enricher.enrich("AltBentschen"), "AltBentschen");
        assert_eq!(
            enricher.enrich("Alt-Bentschen"),
            "Alt-<span>Bentschen<note><term>Bentschen</term>Ort</note></span>"
        );
    }

    #[test]
    fn test_case_insensitive_keeps_text_case() {
        let enricher = Enricher::from_vocabulary(
            &Vocabulary::glossary("Glossary", vec![GlossaryRecord::entry("bentschen", "Bentschen", "Ort")]),
            EnricherConfig::default(),
        )
        .unwrap();
        assert_eq!(
            enricher.enrich("in BENTSCHEN"),
            "in <span>BENTSCHEN<note><term>Bentschen</term>Ort</note></span>"
        );
    }

    #[test]
    fn test_annotations_are_disjoint_on_testimony() {
        let annotations = bentschen().annotate(TESTIMONY_EXCERPT);
        for pair in annotations.windows(2) {
            assert!(pair[0].span.end < pair[1].span.start);
        }
        assert!(annotations.iter().any(|a| a.keyword == "Alt-Bentschen"));
        assert!(annotations.iter().any(|a| a.keyword == "Neu-Bentschen"));
    }

    #[test]
    fn test_empty_vocabulary_and_no_matches() {
        let empty = Enricher::empty(EnricherConfig::default());
        assert_eq!(empty.enrich(BENTSCHEN_TEXT), BENTSCHEN_TEXT);

        let text = "Wir fuhren über Hannover und Berlin.";
        assert_eq!(bentschen().enrich(text), text);
        assert_eq!(bentschen().enrich(""), "");
    }

    #[test]
    fn test_configure_errors() {
        let source = InMemorySource::single(bentschen_vocabulary());
        let missing = Enricher::configure(&source, EnricherConfig::for_vocabulary("Orte"));
        assert!(matches!(missing, Err(ConfigError::VocabularyNotFound(_))));

        let mut config = EnricherConfig::default();
        config.fields.description = "Beschreibung".to_string();
        assert!(matches!(
            Enricher::configure(&source, config),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_reload_keeps_old_index_on_failure() {
        let mut enricher = bentschen();
        let before = enricher.index().len();

        let broken = InMemorySource::default();
        assert!(enricher.reload(&broken).is_err());
        assert_eq!(enricher.index().len(), before);

        let bigger = InMemorySource::single(Vocabulary::glossary(
            "Glossary",
            vec![
                GlossaryRecord::entry("Poznan", "Poznan", "Posen"),
                GlossaryRecord::entry("Bentschen", "Bentschen", "Der Ort"),
            ],
        ));
        enricher.reload(&bigger).unwrap();
        assert_eq!(enricher.index().len(), 2);
        assert!(enricher.index().get("Neu-Bentschen").is_none());
    }

    #[test]
    fn test_enrich_batch_preserves_order() {
        let enricher = bentschen();
        let texts = vec!["nichts", BENTSCHEN_TEXT, "Neu-Bentschen", ""];
        let out = enricher.enrich_batch(&texts);
        assert_eq!(out.len(), texts.len());
        for (text, enriched) in texts.iter().zip(&out) {
            assert_eq!(enriched, &enricher.enrich(text));
        }
        assert_eq!(out[1], BENTSCHEN_EXPECTED);
    }

    #[test]
    fn test_configurable_markup_and_alphabet() {
        let config = EnricherConfig {
            markup: MarkupTags {
                wrapper: "seg".to_string(),
                note: "note".to_string(),
                term: "label".to_string(),
            },
            boundary: BoundaryAlphabet::German,
            ..EnricherConfig::default()
        };
        let enricher = Enricher::configure(&InMemorySource::single(bentschen_vocabulary()), config).unwrap();
        assert_eq!(
            enricher.enrich("éBentschen"),
            "é<seg>Bentschen<note><label>Bentschen</label>Der Ort Namens Bentschen</note></seg>"
        );
    }

    #[test]
    fn test_enrich_detailed_matches_enrich() {
        let enricher = bentschen();
        let detailed = enricher.enrich_detailed(BENTSCHEN_TEXT);
        assert_eq!(detailed.text, BENTSCHEN_EXPECTED);
        let keywords: Vec<&str> = detailed.annotations.iter().map(|a| a.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["Neu-Bentschen", "Bentschen", "Bentschen"]);
    }

    #[test]
    fn test_enricher_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Enricher>();
    }

    #[test]
    fn test_internal_error_returns_original_text() {
        let err = EnrichError::OutOfBounds { start: 2, end: 9, len: 4 };
        assert_eq!(fail_open("kurz", Err(err)), Enrichment::unchanged("kurz"));

        let ok = bentschen().try_enrich_detailed(BENTSCHEN_TEXT).unwrap();
        assert_eq!(fail_open(BENTSCHEN_TEXT, Ok(ok.clone())), ok);
    }

    #[test]
    fn test_try_enrich_agrees_with_enrich() {
        let enricher = bentschen();
        assert_eq!(enricher.try_enrich(BENTSCHEN_TEXT).unwrap(), enricher.enrich(BENTSCHEN_TEXT));
        let empty = Enricher::empty(EnricherConfig::default());
        assert_eq!(empty.try_enrich_detailed("Bentschen").unwrap(), Enrichment::unchanged("Bentschen"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        // Alfabeto pequeno para forçar sobreposições, fronteiras e hífens
        fn arb_keywords() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-cA-C-]{1,5}", 1..8)
        }

        fn arb_text() -> impl Strategy<Value = String> {
            "[a-cA-Cä .-]{0,80}"
        }

        fn enricher_for(keywords: &[String]) -> Enricher {
            let records = keywords
                .iter()
                .map(|k| GlossaryRecord::entry(k, k, "Beschreibung"))
                .collect();
            Enricher::from_vocabulary(&Vocabulary::glossary("Glossary", records), EnricherConfig::default())
                .unwrap()
        }

        proptest! {
            #[test]
            fn annotations_never_overlap(keywords in arb_keywords(), text in arb_text()) {
                let annotations = enricher_for(&keywords).annotate(&text);
                for pair in annotations.windows(2) {
                    prop_assert!(pair[0].span.end < pair[1].span.start, "{:?}", pair);
                }
                for a in &annotations {
                    prop_assert_eq!(a.span.slice(&text).to_lowercase(), a.keyword.to_lowercase());
                }
            }

            #[test]
            fn enrich_preserves_every_character(keywords in arb_keywords(), text in arb_text()) {
                let enricher = enricher_for(&keywords);
                let enrichment = enricher.enrich_detailed(&text);
                prop_assert_eq!(
                    strip(&enrichment.text, &enrichment.annotations, &enricher.config().markup),
                    text
                );
            }
        }
    }
}
