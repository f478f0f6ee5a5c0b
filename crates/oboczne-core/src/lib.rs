#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

pub mod dictionary;
pub mod error;
pub mod matcher;
pub mod report;
pub mod source;

pub use dictionary::{parse, parse_with, EmptyPieces, ParseOptions, VariantGroup};
pub use error::{Error, Result};
pub use matcher::{
    analyze, analyze_texts, analyze_with, build_token_set, match_group, AnalysisOptions,
    MatchResult, TokenSet, CO_OCCURRENCE_THRESHOLD,
};
pub use report::Report;
pub use source::{
    read_dictionary, read_document, CompositeExtractor, DocumentFormat, DocxExtractor,
    ExtractError, ExtractResult, Extractor, PlainTextExtractor,
};
