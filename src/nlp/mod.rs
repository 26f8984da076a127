//! Natural Language Processing components
//!
//! This module provides sentence tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::StopwordFilter;
pub use tokenizer::{words, SentenceTokenizer};
