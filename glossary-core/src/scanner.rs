//! # Scanner de Ocorrências
//!
//! Encontra todas as ocorrências de **uma** palavra-chave em um texto.
//!
//! ## Regra de fronteira
//!
//! Uma ocorrência só conta se o caractere imediatamente antes e o
//! imediatamente depois **não** forem letras (ver
//! [`BoundaryAlphabet`]). Dígitos, espaço, pontuação e hífen são fronteiras:
//!
//! | Texto            | Palavra-chave | Casa? | Motivo                        |
//! |------------------|---------------|-------|-------------------------------|
//! | `Alt-Bentschen`  | `Bentschen`   | sim   | `-` não é letra               |
//! | `AltBentschen`   | `Bentschen`   | não   | `t` cola na ocorrência        |
//! | `Bentschen1938`  | `Bentschen`   | sim   | dígito é fronteira            |
//!
//! O crate `regex` não tem lookaround, então a regra é verificada depois de
//! cada casamento. Quando um candidato é rejeitado a busca recomeça no
//! caractere seguinte ao **início** dele, e não no fim, para não pular
//! ocorrências que começam dentro do candidato rejeitado.
//!
//! A comparação é case-insensitive (Unicode) e a palavra-chave é sempre
//! literal: metacaracteres de regex são escapados.

use regex::{Regex, RegexBuilder};

use crate::config::BoundaryAlphabet;
use crate::error::{ConfigError, ConfigResult};
use crate::span::Span;

/// Palavra-chave compilada, pronta para varrer textos.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    pattern: Regex,
    boundary: BoundaryAlphabet,
}

impl KeywordMatcher {
    pub fn new(keyword: &str, boundary: BoundaryAlphabet) -> ConfigResult<Self> {
        let pattern = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                keyword: keyword.to_string(),
                source,
            })?;
        Ok(Self { pattern, boundary })
    }

    /// Todas as ocorrências delimitadas, da esquerda para a direita.
    pub fn find_spans(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut pos = 0;

        while pos <= text.len() {
            let Some(m) = self.pattern.find_at(text, pos) else {
                break;
            };
            if m.start() == m.end() {
                break;
            }

            if self.is_delimited(text, m.start(), m.end()) {
                spans.push(Span::new(m.start(), m.end()));
                pos = m.end();
            } else {
                // Avança um caractere a partir do início do candidato rejeitado
                let step = text[m.start()..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
                pos = m.start() + step;
            }
        }

        spans
    }

    fn is_delimited(&self, text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(|c| self.boundary.is_letter(c))
            && !after.is_some_and(|c| self.boundary.is_letter(c))
    }
}

/// Atalho: compila `keyword` e varre `text` uma vez.
pub fn scan(keyword: &str, text: &str, boundary: BoundaryAlphabet) -> ConfigResult<Vec<Span>> {
    Ok(KeywordMatcher::new(keyword, boundary)?.find_spans(text))
}
