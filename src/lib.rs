//! Rule-based scoring of scraped web pages for traditional search engines
//! and generative AI answer engines.

pub mod analyze;
pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod storage;
pub mod types;
