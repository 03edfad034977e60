use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use careerpath_api::{ContentStore, RestApi};
use careerpath_core::{CareerRecommender, REFERENCE_PROFILES};
use careerpath_storage::IndexManager;

/// Career stream quiz and recommendation server
#[derive(Parser, Debug)]
#[command(name = "careerpath")]
#[command(about = "Quiz scoring and career recommendation server", long_about = None)]
struct Args {
    /// Directory holding quiz/college content and the index snapshot
    #[arg(short, long, default_value = "./data")]
    data_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting CareerPath v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {:?}", args.data_dir);

    let content = Arc::new(ContentStore::load(&args.data_dir)?);
    info!("Loaded {} quiz questions", content.questions().len());

    let recommender = Arc::new(CareerRecommender::new());
    let manager = IndexManager::new(&args.data_dir);
    if let Some(report) = manager.initialize(&recommender, &REFERENCE_PROFILES)? {
        info!("Recommendation index ready ({:?})", report.source);
        for warning in &report.warnings {
            warn!("Index persistence degraded: {}", warning);
        }
    }

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(recommender, content, http_port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("CareerPath started successfully");
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
