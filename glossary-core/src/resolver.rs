//! # Resolvedor de Sobreposições
//!
//! Decide quais ocorrências viram anotação.
//!
//! ## Algoritmo
//! 1. Percorre os verbetes na ordem de processamento (mais longos primeiro).
//! 2. Para cada verbete, varre o texto **original** (nunca uma versão já anotada).
//! 3. Cada ocorrência é aceita se não tocar nenhuma já aceita; senão é descartada.
//!
//! Como os mais longos chegam primeiro, "Neu-Bentschen" sempre vence o
//! "Bentschen" contido nele.
//!
//! Os spans aceitos ficam num `BTreeMap` indexado pelo início. Como são
//! disjuntos, basta comparar o candidato com o último span aceito que começa
//! até `candidate.end`: se esse não colide, nenhum outro colide.

use std::collections::BTreeMap;

use tracing::trace;

use crate::index::{KeywordEntry, KeywordIndex};
use crate::span::{CandidateMatch, Span};

/// Conjunto de spans aceitos numa única chamada de `enrich`.
#[derive(Debug, Default)]
pub struct OverlapResolver<'i> {
    committed: BTreeMap<usize, CandidateMatch<'i>>,
}

impl<'i> OverlapResolver<'i> {
    pub fn new() -> Self {
        Self {
            committed: BTreeMap::new(),
        }
    }

    /// Oferece um candidato. Retorna `true` se ele foi aceito.
    pub fn offer(&mut self, candidate: CandidateMatch<'i>) -> bool {
        if self.collides(&candidate.span) {
            trace!(
                keyword = %candidate.entry.keyword,
                start = candidate.span.start,
                "ocorrência descartada por sobreposição"
            );
            return false;
        }
        self.committed.insert(candidate.span.start, candidate);
        true
    }

    fn collides(&self, span: &Span) -> bool {
        self.committed
            .range(..=span.end)
            .next_back()
            .is_some_and(|(_, accepted)| accepted.span.overlaps(span))
    }

    /// Varre `text` com um verbete e oferece cada ocorrência.
    pub fn scan_entry(&mut self, entry: &'i KeywordEntry, text: &str) {
        for span in entry.find_spans(text) {
            self.offer(CandidateMatch { span, entry });
        }
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Spans aceitos, em ordem crescente de início.
    pub fn finish(self) -> Vec<CandidateMatch<'i>> {
        self.committed.into_values().collect()
    }
}

/// Resolve todas as ocorrências de todos os verbetes do índice em `text`.
pub fn resolve<'i>(index: &'i KeywordIndex, text: &str) -> Vec<CandidateMatch<'i>> {
    let mut resolver = OverlapResolver::new();
    for entry in index.entries() {
        resolver.scan_entry(entry, text);
    }
    resolver.finish()
}
