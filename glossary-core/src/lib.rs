//! # glossary-core — Anotação de Textos com Verbetes de Glossário
//!
//! Este crate encontra, em textos narrativos livres, cada ocorrência das
//! palavras-chave de um vocabulário e insere ao redor dela uma nota com o
//! título e a descrição do verbete, sem alterar nenhum outro caractere do
//! texto.
//!
//! ## Arquitetura
//!
//! O texto passa por um pipeline linear:
//!
//! 1.  **Fonte** ([`vocabulary`]): registros com campos nomeados (externo ao motor).
//! 2.  **Índice** ([`index`]): palavra-chave → verbete, primeiro registro vence,
//!     mais longas primeiro.
//! 3.  **Scanner** ([`scanner`]): ocorrências case-insensitive que respeitam a
//!     regra de fronteira (não coladas a letras).
//! 4.  **Resolvedor** ([`resolver`]): descarta ocorrências que se sobrepõem a
//!     uma já aceita.
//! 5.  **Inserção** ([`splicer`]): markup aplicado de trás para frente.
//! 6.  **Saída**: o texto anotado.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use glossary_core::{Enricher, EnricherConfig, InMemorySource};
//! use glossary_core::corpus::{bentschen_vocabulary, BENTSCHEN_EXPECTED, BENTSCHEN_TEXT};
//!
//! // 1. Configura o motor (carrega o vocabulário e constrói o índice)
//! let source = InMemorySource::single(bentschen_vocabulary());
//! let enricher = Enricher::configure(&source, EnricherConfig::default()).unwrap();
//!
//! // 2. Anota o texto
//! assert_eq!(enricher.enrich(BENTSCHEN_TEXT), BENTSCHEN_EXPECTED);
//! ```
//!
//! ## Módulos Principais
//!
//! - [`enricher`]: fachada que conecta todos os estágios.
//! - [`config`]: nomes de campo, tags do markup e alfabeto de fronteira.
//! - [`error`]: taxonomia de erros.
//! - [`corpus`]: vocabulário e textos de demonstração.

pub mod config;
pub mod corpus;
pub mod enricher;
pub mod error;
pub mod index;
pub mod resolver;
pub mod scanner;
pub mod span;
pub mod splicer;
pub mod vocabulary;

pub use config::{BoundaryAlphabet, EnricherConfig, FieldNames, MarkupTags};
pub use enricher::{Enricher, Enrichment};
pub use error::{ConfigError, EnrichError, RecordError};
pub use index::{KeywordEntry, KeywordIndex};
pub use span::{CommittedAnnotation, Span};
pub use vocabulary::{
    GlossaryRecord, InMemorySource, JsonFileSource, Vocabulary, VocabularyRecord, VocabularySource,
};
