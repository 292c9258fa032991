use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::read_csv;
use metrics::{evaluate, ranked_items_from_frame, relevance_from_frame, MetricsReport};
use pipeline::{run, DedupPolicy, PipelineConfig};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// steam-prep - Steam review dataset preparation and ranking evaluation
#[derive(Parser)]
#[command(name = "steam-prep")]
#[command(about = "Join the Steam review and game datasets, and score rankings against ground truth", long_about = None)]
struct Cli {
    /// Defaults to `join` with the historical paths
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Join reviews with both game catalogs and write one CSV
    Join(JoinArgs),

    /// Compute NDCG@k, MRR@k and MAP@k for a predictions CSV
    Evaluate(EvaluateArgs),
}

#[derive(Args, Default)]
struct JoinArgs {
    /// Directory of review CSV chunks
    #[arg(long)]
    reviews_dir: Option<PathBuf>,

    /// games.csv from the game-recommendations dataset
    #[arg(long)]
    game_recommendations: Option<PathBuf>,

    /// steam_games.csv from the game-complete dataset
    #[arg(long)]
    games_complete: Option<PathBuf>,

    /// Where the joined dataset is written
    #[arg(long)]
    output: Option<PathBuf>,

    /// Which copy of a duplicated review survives
    #[arg(long, value_enum, default_value_t = DedupArg::KeepAll)]
    dedup: DedupArg,
}

#[derive(Args)]
struct EvaluateArgs {
    /// Ground-truth interactions CSV
    #[arg(long)]
    truth: PathBuf,

    /// Predicted rankings CSV
    #[arg(long)]
    predictions: PathBuf,

    /// Rank cutoff
    #[arg(long, default_value_t = metrics::DEFAULT_K)]
    k: usize,

    #[arg(long, default_value = "user_id")]
    user_col: String,

    #[arg(long, default_value = "item_id")]
    item_col: String,

    #[arg(long, default_value = metrics::DEFAULT_RANK_COLUMN)]
    rank_col: String,

    /// Graded relevance column in the truth CSV (every row counts 1.0 without it)
    #[arg(long)]
    relevance_col: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum DedupArg {
    #[default]
    KeepAll,
    KeepFirst,
    KeepLast,
}

impl From<DedupArg> for DedupPolicy {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::KeepAll => DedupPolicy::KeepAll,
            DedupArg::KeepFirst => DedupPolicy::KeepFirst,
            DedupArg::KeepLast => DedupPolicy::KeepLast,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or_else(|| Commands::Join(JoinArgs::default())) {
        Commands::Join(args) => handle_join(args)?,
        Commands::Evaluate(args) => handle_evaluate(args)?,
    }

    Ok(())
}

/// Build the run configuration, overriding defaults only where a flag was given
fn join_config(args: JoinArgs) -> PipelineConfig {
    let mut config = PipelineConfig::default().with_dedup_policy(args.dedup.into());
    if let Some(path) = args.reviews_dir {
        config = config.with_reviews_dir(path);
    }
    if let Some(path) = args.game_recommendations {
        config = config.with_game_recommendations_csv(path);
    }
    if let Some(path) = args.games_complete {
        config = config.with_games_complete_csv(path);
    }
    if let Some(path) = args.output {
        config = config.with_output_csv(path);
    }
    config
}

/// Handle the 'join' command
fn handle_join(args: JoinArgs) -> Result<()> {
    let config = join_config(args);
    info!("Running join with {:?}", config);

    let start = Instant::now();
    let summary = run(&config)?;

    println!(
        "{} Joined {} reviews with {} catalog games in {:?}",
        "✓".green(),
        summary.reviews,
        summary.catalog_games,
        start.elapsed()
    );
    println!(
        "{}Wrote {} rows x {} columns to {}",
        "• ".cyan(),
        summary.output_rows,
        summary.output_columns,
        summary.output_path.display()
    );
    Ok(())
}

/// Handle the 'evaluate' command
fn handle_evaluate(args: EvaluateArgs) -> Result<()> {
    let truth_frame = read_csv(&args.truth)
        .with_context(|| format!("Failed to read ground truth from {}", args.truth.display()))?;
    let prediction_frame = read_csv(&args.predictions).with_context(|| {
        format!("Failed to read predictions from {}", args.predictions.display())
    })?;

    let truth = relevance_from_frame(
        &truth_frame,
        &args.user_col,
        &args.item_col,
        args.relevance_col.as_deref(),
    )
    .context("Invalid ground-truth frame")?;
    let predictions =
        ranked_items_from_frame(&prediction_frame, &args.user_col, &args.item_col, &args.rank_col)
            .context("Invalid predictions frame")?;

    let report = evaluate(&truth, &predictions, args.k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &MetricsReport) {
    println!(
        "{}",
        format!("Ranking metrics at k={} ({} users)", report.k, report.users)
            .bold()
            .blue()
    );
    println!("{}NDCG@{}: {:.4}", "• ".green(), report.k, report.ndcg);
    println!("{}MRR@{}:  {:.4}", "• ".green(), report.k, report.mrr);
    println!("{}MAP@{}:  {:.4}", "• ".green(), report.k, report.map);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_default_join() {
        let cli = Cli::try_parse_from(["steam-prep"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(join_config(JoinArgs::default()), PipelineConfig::default());

        let cli = Cli::try_parse_from(["steam-prep", "join"]).unwrap();
        let Some(Commands::Join(args)) = cli.command else {
            panic!("expected join");
        };
        assert_eq!(join_config(args).dedup_policy, DedupPolicy::KeepAll);
    }

    #[test]
    fn test_join_overrides() {
        let cli = Cli::try_parse_from([
            "steam-prep",
            "join",
            "--output",
            "/tmp/joined.csv",
            "--dedup",
            "keep-last",
        ])
        .unwrap();
        let Some(Commands::Join(args)) = cli.command else {
            panic!("expected join");
        };
        let config = join_config(args);
        assert_eq!(config.output_csv, PathBuf::from("/tmp/joined.csv"));
        assert_eq!(config.dedup_policy, DedupPolicy::KeepLast);
        assert_eq!(config.reviews_dir, PipelineConfig::default().reviews_dir);
    }

    #[test]
    fn test_evaluate_defaults() {
        let cli = Cli::try_parse_from([
            "steam-prep",
            "evaluate",
            "--truth",
            "truth.csv",
            "--predictions",
            "preds.csv",
        ])
        .unwrap();
        let Some(Commands::Evaluate(args)) = cli.command else {
            panic!("expected evaluate");
        };
        assert_eq!(args.k, 10);
        assert_eq!(args.rank_col, "rank");
        assert!(args.relevance_col.is_none());
        assert!(!args.json);
    }
}
