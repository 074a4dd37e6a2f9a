//! # Dataloader Instance
//!
//! A plain record for one labelled sequence-labelling example, plus the small pieces around it
//! that need explicit inputs: seeded corpus shuffling and an opt-in alignment check.
#![forbid(unsafe_code)]

/// Instances, corpora and their configuration
pub mod dataloader;

pub use dataloader::{AlignmentError, Config, Corpus, CorpusError, Instance};
