/// A single labelled training example
pub mod instance;

/// Length checks between the parallel fields of an instance
pub mod alignment;

/// An ordered collection of instances
pub mod corpus;

/// Loader configuration
pub mod config;

pub use alignment::AlignmentError;
pub use config::Config;
pub use corpus::{Corpus, CorpusError};
pub use instance::Instance;
