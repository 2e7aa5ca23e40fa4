use tracing_subscriber::EnvFilter;

use intake_lambda::config::IntakeConfig;
use intake_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = IntakeConfig::from_env()?;

    if let Err(e) = intake_pathways::registry::ensure_consistent() {
        if let intake_pathways::error::PathwayError::InconsistentRegistry(problems) = &e {
            for problem in problems {
                tracing::error!(
                    pathway = %problem.pathway_key,
                    question = ?problem.question_id,
                    "{problem}"
                );
            }
        }
        return Err(e.into());
    }

    tracing::info!(
        pathways = intake_pathways::all_pathways().len(),
        max_chief_complaints = config.max_chief_complaints,
        "starting intake api"
    );

    let app = intake_lambda::router(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
