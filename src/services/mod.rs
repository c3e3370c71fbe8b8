//! Service layer for the journal
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, edit mode, statistics and the quote source.

pub mod image;
pub mod journal;
pub mod quote;

pub use image::image_reference;
pub use journal::JournalService;
pub use quote::QuoteService;
