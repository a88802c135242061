//! Walkthrough Sample Entry Point

use std::io;
use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::config::WalkthroughConfig;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ordset=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = match WalkthroughConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: find={}, upper_bound={}",
                config.find,
                config.upper_bound
            );
            config
        }
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            WalkthroughConfig::default()
        }
    };

    let set = walkthrough::build_set(&config);
    match walkthrough::write_report(&set, &config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("Failed to write report: {error}");
            ExitCode::FAILURE
        }
    }
}
