//! CLI entry point for the book review insights tool.
//!
//! Provides subcommands for running the full report suite and for each
//! individual report family (title rankings, time trends, helpfulness
//! distributions) over a book-catalog CSV and a review CSV.

use anyhow::Result;
use book_review_insights::analyzers::{aggregate, distribution, trends};
use book_review_insights::output::{print_json, print_pretty, write_records};
use book_review_insights::pipeline;
use clap::{Args, Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "book_review_insights")]
#[command(about = "A tool to analyze book review datasets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to the book catalog CSV (optionally gzipped)
    #[arg(short, long, default_value = "books_data.csv")]
    books: PathBuf,

    /// Path to the review CSV (optionally gzipped)
    #[arg(short, long, default_value = "Books_rating.csv")]
    ratings: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write every report table as CSV
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write report CSVs into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,

        /// Minimum reviews a title needs to enter the ranked views
        #[arg(long, default_value_t = 50)]
        min_reviews: u64,

        /// Number of titles in the most-divisive report
        #[arg(short, long, default_value_t = 5)]
        top: usize,

        /// Minimum total votes for the filtered helpfulness distribution
        #[arg(long, default_value_t = 5)]
        min_votes: u32,
    },
    /// Write the ranked-by-rating title summaries to a CSV
    Summarize {
        #[command(flatten)]
        input: InputArgs,

        /// CSV file to write the ranked summaries to
        #[arg(short, long, default_value = "ranked_by_rating.csv")]
        output: PathBuf,

        /// Minimum reviews a title needs to enter the ranking
        #[arg(long, default_value_t = 50)]
        min_reviews: u64,
    },
    /// Log the most divisive titles, optionally writing them as CSV
    Divisive {
        #[command(flatten)]
        input: InputArgs,

        /// Number of titles to report
        #[arg(short, long, default_value_t = 5)]
        top: usize,

        /// Minimum reviews a title needs to be considered
        #[arg(long, default_value_t = 50)]
        min_reviews: u64,

        /// Optional CSV file to write the ranking to
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the yearly score and monthly volume trend CSVs
    Trends {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write trend CSVs into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,
    },
    /// Write the helpfulness-ratio distribution CSVs
    Helpfulness {
        #[command(flatten)]
        input: InputArgs,

        /// Directory to write distribution CSVs into
        #[arg(short, long, default_value = "reports")]
        output_dir: PathBuf,

        /// Minimum total votes for the filtered variant
        #[arg(long, default_value_t = 5)]
        min_votes: u32,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/book_review_insights.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("book_review_insights.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            output_dir,
            min_reviews,
            top,
            min_votes,
        } => {
            let enrichment = pipeline::run(&input.books, &input.ratings)?;
            let reviews = &enrichment.reviews;

            let summaries = aggregate::summarize_titles(reviews);
            let filtered = aggregate::filter_by_volume(&summaries, min_reviews);
            let by_rating = aggregate::rank_by_rating(&filtered);
            let divisive = aggregate::rank_by_divisiveness(&filtered, top);
            let scores = aggregate::score_distribution(reviews);
            let yearly = trends::yearly_average_score(reviews);
            let monthly = trends::monthly_review_counts(reviews);
            let december = trends::december_review_counts(&monthly);
            let ratios = distribution::helpfulness_ratios(reviews);
            let ratios_filtered =
                distribution::helpfulness_ratios_with_min_votes(reviews, min_votes);

            write_records(&output_dir.join("title_summaries.csv"), &filtered)?;
            write_records(&output_dir.join("ranked_by_rating.csv"), &by_rating)?;
            write_records(&output_dir.join("top_divisive.csv"), &divisive)?;
            write_records(&output_dir.join("yearly_score.csv"), &yearly)?;
            write_records(&output_dir.join("monthly_volume.csv"), &monthly)?;
            write_records(&output_dir.join("december_volume.csv"), &december)?;
            write_records(&output_dir.join("score_distribution.csv"), &scores)?;
            write_records(&output_dir.join("helpfulness_ratios.csv"), &ratios)?;
            write_records(
                &output_dir.join("helpfulness_ratios_filtered.csv"),
                &ratios_filtered,
            )?;

            print_pretty(&divisive);
            info!(
                titles = summaries.len(),
                ranked_titles = filtered.len(),
                dropped_pre_epoch = enrichment.dropped_pre_epoch,
                output_dir = %output_dir.display(),
                "Report run complete"
            );
        }
        Commands::Summarize {
            input,
            output,
            min_reviews,
        } => {
            let enrichment = pipeline::run(&input.books, &input.ratings)?;

            let summaries = aggregate::summarize_titles(&enrichment.reviews);
            let filtered = aggregate::filter_by_volume(&summaries, min_reviews);
            let by_rating = aggregate::rank_by_rating(&filtered);

            write_records(&output, &by_rating)?;
            info!(
                titles = summaries.len(),
                ranked_titles = by_rating.len(),
                min_reviews,
                output = %output.display(),
                "Ranked summaries written"
            );
        }
        Commands::Divisive {
            input,
            top,
            min_reviews,
            output,
        } => {
            let enrichment = pipeline::run(&input.books, &input.ratings)?;

            let summaries = aggregate::summarize_titles(&enrichment.reviews);
            let filtered = aggregate::filter_by_volume(&summaries, min_reviews);
            let divisive = aggregate::rank_by_divisiveness(&filtered, top);

            for (rank, summary) in divisive.iter().enumerate() {
                info!(
                    rank = rank + 1,
                    title = %summary.title,
                    rating_std_dev = summary.rating_std_dev,
                    average_rating = summary.average_rating,
                    review_count = summary.review_count,
                    "Divisive title"
                );
            }
            print_json(&divisive)?;

            if let Some(path) = output {
                write_records(&path, &divisive)?;
                info!(output = %path.display(), "Divisive ranking written");
            }
        }
        Commands::Trends { input, output_dir } => {
            let enrichment = pipeline::run(&input.books, &input.ratings)?;

            let yearly = trends::yearly_average_score(&enrichment.reviews);
            let monthly = trends::monthly_review_counts(&enrichment.reviews);
            let december = trends::december_review_counts(&monthly);

            write_records(&output_dir.join("yearly_score.csv"), &yearly)?;
            write_records(&output_dir.join("monthly_volume.csv"), &monthly)?;
            write_records(&output_dir.join("december_volume.csv"), &december)?;

            info!(
                years = yearly.len(),
                months = monthly.len(),
                output_dir = %output_dir.display(),
                "Trend tables written"
            );
        }
        Commands::Helpfulness {
            input,
            output_dir,
            min_votes,
        } => {
            let enrichment = pipeline::run(&input.books, &input.ratings)?;

            let ratios = distribution::helpfulness_ratios(&enrichment.reviews);
            let ratios_filtered =
                distribution::helpfulness_ratios_with_min_votes(&enrichment.reviews, min_votes);

            write_records(&output_dir.join("helpfulness_ratios.csv"), &ratios)?;
            write_records(
                &output_dir.join("helpfulness_ratios_filtered.csv"),
                &ratios_filtered,
            )?;

            info!(
                samples = ratios.len(),
                filtered_samples = ratios_filtered.len(),
                min_votes,
                output_dir = %output_dir.display(),
                "Helpfulness distributions written"
            );
        }
    }

    Ok(())
}
