use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use maturity_radar::assessment::{
    AnswerSet, AssessmentReport, ChartRenderer, QuestionCatalog, RawAnswers, ScoreReport, Section,
};
use maturity_radar::config::AppConfig;
use maturity_radar::error::AppError;
use maturity_radar::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    catalog: Arc<QuestionCatalog>,
    renderer: ChartRenderer,
}

#[derive(Parser, Debug)]
#[command(
    name = "Maturity Radar",
    about = "Score LGPD and CIS Controls maturity questionnaires and render radar chart reports",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an answer file offline and print the per-section summary
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct AssessArgs {
    /// JSON answer file: {"<section>": {"<question index>": <value>}}.
    /// Omitted entries score 0.
    #[arg(long)]
    answers: Option<PathBuf>,
    /// Write the rendered radar chart PNG to this path
    #[arg(long)]
    chart_out: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct AssessmentRequest {
    #[serde(default)]
    answers: RawAnswers,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        catalog: Arc::new(QuestionCatalog::standard()),
        renderer: ChartRenderer,
    };

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/questionnaire", get(questionnaire_endpoint))
        .route("/api/v1/assessment/report", post(assessment_report_endpoint))
        .layer(prometheus_layer)
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "maturity assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let raw: RawAnswers = match &args.answers {
        Some(path) => {
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)?
        }
        None => RawAnswers::new(),
    };

    let catalog = QuestionCatalog::standard();
    let answers = AnswerSet::from_raw(&catalog, &raw);
    let scores = ScoreReport::from_answers(&catalog, &answers);

    println!("Maturity assessment summary");
    for section in &scores.sections {
        println!(
            "- {}: {}/{} points ({}%)",
            section.name, section.total, section.max_score, section.percentage
        );
        println!("  answers: {:?}", section.answers);
    }

    if let Some(path) = &args.chart_out {
        let panels = maturity_radar::assessment::report::chart_panels(&scores);
        let png = ChartRenderer.render_png(&panels)?;
        std::fs::write(path, png)?;
        println!("Radar chart written to {}", path.display());
    }

    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Serves the catalog so clients can build the questionnaire form; the
/// core never produces markup.
async fn questionnaire_endpoint(State(state): State<AppState>) -> Json<Vec<Section>> {
    Json(state.catalog.sections().to_vec())
}

async fn assessment_report_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let answers = AnswerSet::from_raw(&state.catalog, &payload.answers);
    let scores = ScoreReport::from_answers(&state.catalog, &answers);
    let report = AssessmentReport::assemble(&scores, &state.renderer)?;
    Ok(Json(report))
}
