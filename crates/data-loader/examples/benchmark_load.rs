use data_loader::datasets::{
    load_game_recommendations_dataset, load_games_complete_dataset, load_reviews_dataset,
};
use std::path::Path;
use std::time::Instant;

fn main() {
    let raw_dir = Path::new("data/raw");

    println!("Loading storefront datasets from {}...\n", raw_dir.display());

    let start = Instant::now();
    let reviews = load_reviews_dataset(&raw_dir.join("steam-reviews-dataset"))
        .expect("Failed to load reviews");
    let recommendations =
        load_game_recommendations_dataset(&raw_dir.join("game-recommendations-on-steam/games.csv"))
            .expect("Failed to load game recommendations");
    let complete =
        load_games_complete_dataset(&raw_dir.join("steam-games-complete-dataset/steam_games.csv"))
            .expect("Failed to load game-complete catalog");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Reviews: {}", reviews.height());
    println!("Game recommendations: {}", recommendations.height());
    println!("Game-complete listings: {}", complete.height());
    println!(
        "\nPerformance: {:.0} reviews/second",
        reviews.height() as f64 / elapsed.as_secs_f64()
    );
}
