//! `churn-client` -- command-line driver for the churn prediction service.
//!
//! Reads a customer attribute draft as JSON from stdin, submits it to
//! the configured prediction endpoint, and prints the verdict the way
//! the result panel renders it.  Exits non-zero on a failed request.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default                 | Description                          |
//! |------------------------|----------|-------------------------|--------------------------------------|
//! | `PREDICTION_API_URL`   | no       | `http://localhost:8000` | Base URL of the prediction service   |
//! | `REQUEST_TIMEOUT_SECS` | no       | --                      | Per-request timeout; unset = none    |

use churn_client::api::PredictionApi;
use churn_client::config::ClientConfig;
use churn_client::controller::{PredictionController, SubmitOutcome, PREDICTION_ERROR_MESSAGE};
use churn_core::customer::{CustomerField, CustomerInput};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churn_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();

    let draft: CustomerInput = match serde_json::from_reader(std::io::stdin()) {
        Ok(draft) => draft,
        Err(e) => {
            tracing::error!(error = %e, "stdin must contain a customer draft as JSON");
            std::process::exit(1);
        }
    };

    for field in draft.missing_fields() {
        tracing::warn!(%field, "Required field is empty");
    }

    tracing::info!(api_url = %config.api_url, "Submitting prediction request");

    let api = PredictionApi::from_config(&config);
    let mut controller = PredictionController::new();
    for field in CustomerField::ALL {
        controller.update_field(field, draft.get(field));
    }

    match controller.submit(&api).await {
        SubmitOutcome::Predicted(result) => {
            println!("Churn Prediction: {}", result.verdict_label());
            println!("Probability: {}", result.probability_percent());
            println!("Confidence: {}", result.confidence_percent());
        }
        SubmitOutcome::Failed => {
            eprintln!("{}", controller.error().unwrap_or(PREDICTION_ERROR_MESSAGE));
            std::process::exit(1);
        }
        SubmitOutcome::InFlight => {
            unreachable!("a fresh controller has no submission in flight")
        }
    }
}
