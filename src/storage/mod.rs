//! Graph storage layer
//!
//! Provides the CSR hyperlink corpus and directory crawling.

pub mod corpus;
pub mod crawl;

pub use corpus::{Corpus, PageId};
pub use crawl::{crawl, extract_links};
