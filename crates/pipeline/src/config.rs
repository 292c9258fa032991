//! Paths and policies for one pipeline run.

use crate::transforms::DedupPolicy;
use std::path::{Path, PathBuf};

pub const DEFAULT_REVIEWS_DIR: &str = "../data/raw/steam-reviews-dataset/";
pub const DEFAULT_GAME_RECOMMENDATIONS_CSV: &str =
    "../data/raw/game-recommendations-on-steam/games.csv";
pub const DEFAULT_GAMES_COMPLETE_CSV: &str =
    "../data/raw/steam-games-complete-dataset/steam_games.csv";
pub const DEFAULT_OUTPUT_CSV: &str = "../data/interim/joined_dataset.csv";

/// Where the raw datasets live, where the joined table goes, and how
/// duplicate reviews are treated.
///
/// `Default` reproduces the historical relative layout; use the `with_*`
/// setters to point elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Directory of review CSV chunks
    pub reviews_dir: PathBuf,
    /// `games.csv` from the game-recommendations dataset
    pub game_recommendations_csv: PathBuf,
    /// `steam_games.csv` from the game-complete dataset
    pub games_complete_csv: PathBuf,
    /// Destination of the fully joined table
    pub output_csv: PathBuf,
    pub dedup_policy: DedupPolicy,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            reviews_dir: PathBuf::from(DEFAULT_REVIEWS_DIR),
            game_recommendations_csv: PathBuf::from(DEFAULT_GAME_RECOMMENDATIONS_CSV),
            games_complete_csv: PathBuf::from(DEFAULT_GAMES_COMPLETE_CSV),
            output_csv: PathBuf::from(DEFAULT_OUTPUT_CSV),
            dedup_policy: DedupPolicy::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_reviews_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.reviews_dir = path.as_ref().to_path_buf();
        self
    }

    pub fn with_game_recommendations_csv(mut self, path: impl AsRef<Path>) -> Self {
        self.game_recommendations_csv = path.as_ref().to_path_buf();
        self
    }

    pub fn with_games_complete_csv(mut self, path: impl AsRef<Path>) -> Self {
        self.games_complete_csv = path.as_ref().to_path_buf();
        self
    }

    pub fn with_output_csv(mut self, path: impl AsRef<Path>) -> Self {
        self.output_csv = path.as_ref().to_path_buf();
        self
    }

    pub fn with_dedup_policy(mut self, policy: DedupPolicy) -> Self {
        self.dedup_policy = policy;
        self
    }
}
