use clap::{Parser, Subcommand};
use nr_core::{DateRangeQuery, Result, SummaryRequest, SummaryType};
use nr_scoring::{PipelineConfig, ScoringPipeline, DEFAULT_SEARCH_RESULT_CAP};
use nr_scrapers::{HttpFetcher, SearxSearch};
use nr_web::AppState;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy)]
struct HumanDuration(Duration);

fn unit_seconds(unit: char) -> Option<u64> {
    match unit {
        's' => Some(1),
        'm' => Some(60),
        'h' => Some(3600),
        'd' => Some(86400),
        _ => None,
    }
}

/// Parses `30s`, `1m`, `1h15m30s` or a bare number of seconds.
impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let too_large = || "Duration too large".to_string();
        let mut total: u64 = 0;
        let mut digits = String::new();
        let mut seen_number = false;

        for c in s.chars().filter(|c| !c.is_whitespace()) {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if digits.is_empty() {
                return Err(format!("Invalid character in duration: {}", c));
            }
            let unit = unit_seconds(c).ok_or_else(|| format!("Invalid duration unit: {}", c))?;
            let amount: u64 = digits.parse().map_err(|_| too_large())?;
            total = amount
                .checked_mul(unit)
                .and_then(|secs| total.checked_add(secs))
                .ok_or_else(too_large)?;
            digits.clear();
            seen_number = true;
        }

        if !digits.is_empty() {
            let secs: u64 = digits.parse().map_err(|_| too_large())?;
            total = total.checked_add(secs).ok_or_else(too_large)?;
            seen_number = true;
        }

        match (seen_number, total) {
            (false, _) => Err("Duration must include a number".to_string()),
            (true, 0) => Err("Duration must be greater than zero".to_string()),
            (true, secs) => Ok(HumanDuration(Duration::from_secs(secs))),
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Scores news articles by keyword relevance, source authority and sentiment", long_about = None)]
struct Cli {
    #[arg(long, env = "NR_MODEL", default_value = "dummy", global = true, help = "Model to use for inference. Available models: dummy (default), huggingface")]
    model: String,
    #[arg(long, env = "NR_MODEL_URL", global = true)]
    model_url: Option<String>,
    #[arg(long, env = "NR_API_KEY", global = true, hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "NR_SEARCH_URL", default_value = "http://localhost:8888", global = true)]
    search_url: String,
    /// Per-call limit for fetch, search and model calls (e.g. 30s, 1m)
    #[arg(long, env = "NR_TIMEOUT", default_value = "30s", global = true)]
    timeout: HumanDuration,
    /// Articles processed at once within a batch
    #[arg(long, env = "NR_CONCURRENCY", default_value_t = 4, global = true)]
    concurrency: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve {
        #[arg(long, env = "SERVER_HOST", default_value = "localhost")]
        host: String,
        #[arg(long, env = "SERVER_PORT", default_value_t = 5556)]
        port: u16,
    },
    /// Score a list of article URLs
    Score {
        #[arg(long = "url", required = true)]
        urls: Vec<String>,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long, default_value = SummaryType::Headline.as_str())]
        summary_type: String,
    },
    /// Search a publication date range and score the results
    Search {
        /// First day, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last day, YYYY-MM-DD
        #[arg(long)]
        end: String,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long, default_value = SummaryType::Headline.as_str())]
        summary_type: String,
    },
}

async fn build_pipeline(cli: &Cli) -> Result<ScoringPipeline> {
    let timeout = cli.timeout.0;
    let config = nr_inference::Config {
        model_name: Some(cli.model.clone()),
        model_url: cli.model_url.clone(),
        api_key: cli.api_key.clone(),
        timeout,
        ..nr_inference::Config::default()
    };
    let models = nr_inference::create_model(Some(config)).await?;
    info!("🧠 Inference model initialized successfully (using {})", models.name());

    let fetcher = HttpFetcher::new(timeout)?;
    let search = SearxSearch::new(&cli.search_url, timeout)?;
    info!(search_url = %cli.search_url, "🔍 Search provider configured");

    Ok(ScoringPipeline::new(
        Arc::new(fetcher),
        models.summarizer,
        models.sentiment,
        Arc::new(search),
        PipelineConfig {
            max_concurrency: cli.concurrency.max(1),
            collaborator_timeout: timeout,
            search_result_cap: DEFAULT_SEARCH_RESULT_CAP,
        },
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let pipeline = build_pipeline(&cli).await?;

    match cli.command {
        Commands::Serve { host, port } => {
            let addr = format!("{}:{}", host, port);
            nr_web::serve(AppState::new(pipeline), &addr).await?;
        }
        Commands::Score {
            urls,
            keywords,
            summary_type,
        } => {
            let request = SummaryRequest::new(urls, &summary_type, &keywords)?;
            let report = pipeline.score_urls(&request).await?.into_report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Search {
            start,
            end,
            keywords,
            summary_type,
        } => {
            let query = DateRangeQuery::parse(Some(start.as_str()), Some(end.as_str()), &keywords, &summary_type)?;
            let report = pipeline.score_date_range(&query).await?.into_report();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
