//! # Data Loader Crate
//!
//! This crate loads the three raw storefront datasets into polars
//! `DataFrame`s with canonical column names.
//!
//! ## Main Components
//!
//! - **types**: Identifier aliases and the shared timestamp format
//! - **frame**: Strict rename / drop helpers and suffixed key joins
//! - **parser**: Price normalization, URL and epoch parsing
//! - **csv_io**: Read and write frames as CSV
//! - **datasets**: The review, game-recommendation and game-complete loaders
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::datasets::{load_reviews_dataset, load_games_complete_dataset};
//! use std::path::Path;
//!
//! let reviews = load_reviews_dataset(Path::new("data/raw/steam-reviews-dataset"))?;
//! let games = load_games_complete_dataset(Path::new("data/raw/steam_games.csv"))?;
//!
//! println!("{} reviews, {} games", reviews.height(), games.height());
//! ```

// Public modules
pub mod csv_io;
pub mod datasets;
pub mod error;
pub mod frame;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use csv_io::{read_csv, write_csv};
pub use datasets::{
    load_game_recommendations_dataset, load_games_complete_dataset, load_reviews_dataset,
};
pub use error::{DataLoadError, Result};
pub use frame::{
    column_names, drop_columns, join_frames, rename_columns, require_columns, JoinKind, Suffixes,
};
pub use types::{AppId, SteamUserId, TIMESTAMP_FORMAT};
