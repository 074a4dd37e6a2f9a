/// Configuration for randomized corpus operations
///
/// The seed is passed explicitly to whatever needs randomness, so results are reproducible per
/// call instead of depending on process-wide state.
#[derive(burn::config::Config)]
pub struct Config {
    /// Seed for the random number generator
    #[config(default = 42)]
    pub seed: u64,

    /// Whether shuffling is enabled
    #[config(default = true)]
    pub shuffle: bool,
}
