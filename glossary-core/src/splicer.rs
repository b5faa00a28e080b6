//! # Inserção de Markup
//!
//! Reescreve o texto envolvendo cada trecho aceito:
//!
//! ```text
//! Bentschen  →  <span>Bentschen<note><term>Bentschen</term>Der Ort Namens Bentschen</note></span>
//! ```
//!
//! O trecho original fica intacto dentro do wrapper, seguido da nota.
//! As anotações são aplicadas **de trás para frente**: cada inserção só
//! altera bytes depois dela, então os offsets das anotações anteriores
//! continuam válidos no texto original.
//!
//! ## Escape
//!
//! A descrição passa por [`escape_xml`]: só `& < > " '` viram entidades e o
//! resto do Unicode fica literal. O exportador antigo usava escape HTML, que
//! também trocava letras não ASCII por entidades nomeadas (`ö` → `&ouml;`) e
//! não escapava `'`; aqui a saída é XML válido sem depender de entidades HTML.

use crate::config::MarkupTags;
use crate::error::EnrichError;
use crate::index::KeywordEntry;
use crate::span::CommittedAnnotation;

/// Renderiza o fragmento de nota de um verbete.
///
/// O título entra como está; a descrição é escapada para XML.
pub fn render_note(entry: &KeywordEntry, tags: &MarkupTags) -> String {
    format!(
        "<{note}><{term}>{title}</{term}>{description}</{note}>",
        note = tags.note,
        term = tags.term,
        title = entry.title,
        description = escape_xml(&entry.description),
    )
}

/// Escapa `& < > " '` para uso em conteúdo XML.
pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Aplica as anotações (em ordem crescente de início) sobre `text`.
///
/// Antes de alterar qualquer byte verifica que cada span está dentro do
/// texto, cai em fronteiras de caractere e que os spans são disjuntos e
/// crescentes. Qualquer violação devolve erro sem produzir texto parcial.
pub fn splice(
    text: &str,
    annotations: &[CommittedAnnotation],
    tags: &MarkupTags,
) -> Result<String, EnrichError> {
    validate(text, annotations)?;

    if annotations.is_empty() {
        return Ok(text.to_string());
    }

    let open = tags.open_wrapper();
    let close = tags.close_wrapper();
    let extra: usize = annotations
        .iter()
        .map(|a| open.len() + a.markup.len() + close.len())
        .sum();

    let mut result = String::with_capacity(text.len() + extra);
    result.push_str(text);

    for annotation in annotations.iter().rev() {
        let span = annotation.span;
        let wrapped = format!("{open}{}{}{close}", span.slice(text), annotation.markup);
        result.replace_range(span.start..span.end, &wrapped);
    }

    Ok(result)
}

fn validate(text: &str, annotations: &[CommittedAnnotation]) -> Result<(), EnrichError> {
    for annotation in annotations {
        let span = annotation.span;
        if span.is_empty() || span.end > text.len() {
            return Err(EnrichError::OutOfBounds {
                start: span.start,
                end: span.end,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            return Err(EnrichError::NotCharBoundary {
                start: span.start,
                end: span.end,
            });
        }
    }

    for pair in annotations.windows(2) {
        let (first, second) = (pair[0].span, pair[1].span);
        if first.end > second.start {
            return Err(EnrichError::Unordered {
                first: (first.start, first.end),
                second: (second.start, second.end),
            });
        }
    }

    Ok(())
}
