//! # Spans e Anotações
//!
//! Três tipos, um para cada fase do enriquecimento. Todos medem offsets no
//! mesmo espaço de coordenadas: bytes UTF-8 do texto **original**, nunca de
//! uma versão parcialmente anotada.
//!
//! 1. [`Span`]: intervalo `[start, end)` encontrado pelo scanner.
//! 2. [`CandidateMatch`]: span + verbete que o produziu (efêmero).
//! 3. [`CommittedAnnotation`]: span aceito pelo resolvedor, já com a nota renderizada.

use serde::{Deserialize, Serialize};

use crate::index::KeywordEntry;

/// Intervalo semiaberto de bytes no texto original.
///
/// # Exemplo
/// Em "nach Bentschen über", a palavra "Bentschen":
/// `Span { start: 5, end: 14 }`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Byte inicial (inclusivo)
    pub start: usize,
    /// Byte final (exclusivo)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "span vazio ou invertido: {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Teste de sobreposição em intervalo fechado.
    ///
    /// Spans que apenas se tocam (`a.end == b.start`) também colidem: duas
    /// notas coladas uma na outra nunca são emitidas.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Trecho do texto coberto por este span.
    pub fn slice<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Ocorrência candidata de um verbete, antes da resolução de conflitos.
#[derive(Debug, Clone, Copy)]
pub struct CandidateMatch<'i> {
    pub span: Span,
    pub entry: &'i KeywordEntry,
}

/// Anotação aceita: não se sobrepõe a nenhuma outra da mesma chamada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedAnnotation {
    pub span: Span,
    /// Palavra-chave do verbete que venceu este trecho
    pub keyword: String,
    /// Fragmento de nota pré-renderizado (`<note><term>…</term>…</note>`)
    pub markup: String,
}
