use burn::data::dataset;
use derive_new::new;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use super::{alignment, AlignmentError, Config, Instance};

/// An ordered, in-memory collection of instances
#[derive(Clone, Debug, Default, new)]
pub struct Corpus {
    instances: Vec<Instance>,
}

impl Corpus {
    /// Returns the instances in their current order
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Consumes the corpus, returning the instances
    pub fn into_inner(self) -> Vec<Instance> {
        self.instances
    }

    /// Shuffles the instances in place with a generator seeded from the config
    pub fn shuffle(&mut self, config: &Config) {
        if !config.shuffle {
            log::debug!(
                "Shuffling disabled, keeping {} instances in order",
                self.instances.len()
            );
            return;
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        self.instances.shuffle(&mut rng);

        log::debug!(
            "Shuffled {} instances with seed {}",
            self.instances.len(),
            config.seed
        );
    }

    /// Checks the alignment of every instance, stopping at the first failure
    pub fn validate(&self) -> Result<(), CorpusError> {
        for (index, instance) in self.instances.iter().enumerate() {
            alignment::check(instance).map_err(|source| {
                log::warn!("Instance {} is misaligned: {}", index, source);

                CorpusError::Misaligned { index, source }
            })?;
        }

        Ok(())
    }
}

impl From<Vec<Instance>> for Corpus {
    fn from(instances: Vec<Instance>) -> Self {
        Self { instances }
    }
}

/// Implement the Dataset trait for the corpus
impl dataset::Dataset<Instance> for Corpus {
    /// Returns a copy of the instance at the given position
    fn get(&self, index: usize) -> Option<Instance> {
        self.instances.get(index).cloned()
    }

    /// Returns the number of instances
    fn len(&self) -> usize {
        self.instances.len()
    }
}

/// Corpus Error
#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    /// An instance failed the alignment check
    #[error("instance {index} is misaligned")]
    Misaligned {
        /// Position of the instance in the corpus
        index: usize,
        /// The underlying mismatch
        #[source]
        source: AlignmentError,
    },
}
