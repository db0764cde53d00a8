use std::io::IsTerminal;
use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use placement_broker::{check_backend, Connectivity, Predictor};
use placement_cli::cli::{Args, Command};
use placement_cli::{Config, Session, Submission};
use placement_core::sample::sample_students;
use placement_core::BackendStatus;
use placement_network::{ApiClient, RemoteScorer};
use placement_presenter::{ConfettiSettings, Palette, Presenter};
use rand::rngs::StdRng;
use rand::SeedableRng;

type StdoutPresenter = Presenter<std::io::Stdout, StdRng>;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("PLACEMENT_LOG").unwrap_or_else(|_| "placement=warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?.with_overrides(&args);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_base = %config.api_base,
        "placement starting"
    );

    match args.command {
        Command::Predict { cgpa, iq, offline } => predict_once(&config, &cgpa, &iq, offline).await,
        Command::Interactive { offline } => interactive(&config, offline).await,
        Command::Stats => show_stats(&config).await,
        Command::Samples { offline } => show_samples(&config, offline).await,
        Command::Serve { host, port, dataset } => {
            placement_server::serve(SocketAddr::new(host, port), Some(&dataset)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn presenter(config: &Config) -> StdoutPresenter {
    let terminal = std::io::stdout().is_terminal();
    let confetti = if terminal && config.color && !config.confetti.is_zero() {
        ConfettiSettings {
            duration: config.confetti,
            ..ConfettiSettings::default()
        }
    } else {
        ConfettiSettings::disabled()
    };
    Presenter::new(std::io::stdout(), StdRng::from_entropy())
        .with_palette(Palette::new(terminal && config.color))
        .with_confetti(confetti)
}

fn api_client(config: &Config) -> Result<ApiClient> {
    ApiClient::new(config.api_base.clone(), config.request_timeout)
}

fn predictor(client: Option<ApiClient>) -> Predictor {
    match client {
        Some(client) => Predictor::new(Box::new(RemoteScorer::new(client))),
        None => Predictor::offline(),
    }
}

async fn predict_once(config: &Config, cgpa: &str, iq: &str, offline: bool) -> Result<ExitCode> {
    let client = if offline { None } else { Some(api_client(config)?) };
    let mut session = Session::new(predictor(client), presenter(config));
    match session.submit(cgpa, iq).await? {
        Submission::Scored(_) => Ok(ExitCode::SUCCESS),
        Submission::Rejected(_) | Submission::Busy => Ok(ExitCode::from(2)),
    }
}

async fn interactive(config: &Config, offline: bool) -> Result<ExitCode> {
    let client = if offline { None } else { Some(api_client(config)?) };
    let connectivity = match &client {
        Some(client) => check_backend(client).await,
        None => Connectivity::offline(),
    };

    let mut session = Session::new(predictor(client), presenter(config));
    session.greet(&connectivity)?;
    session.run(tokio::io::BufReader::new(tokio::io::stdin())).await?;
    Ok(ExitCode::SUCCESS)
}

async fn show_stats(config: &Config) -> Result<ExitCode> {
    let client = api_client(config)?;
    let connectivity = check_backend(&client).await;
    let mut presenter = presenter(config);
    presenter.render_status(connectivity.status)?;
    match &connectivity.stats {
        Some(stats) => presenter.render_stats(stats)?,
        None if connectivity.status == BackendStatus::Offline => {
            return Ok(ExitCode::FAILURE);
        }
        None => presenter.line("Stats unavailable")?,
    }
    Ok(ExitCode::SUCCESS)
}

async fn show_samples(config: &Config, offline: bool) -> Result<ExitCode> {
    let remote = if offline {
        None
    } else {
        match api_client(config)?.sample_data().await {
            Ok(samples) => Some(samples),
            Err(error) => {
                tracing::info!(error = %error, "sample data unavailable; using embedded rows");
                None
            }
        }
    };
    let samples = remote.unwrap_or_else(sample_students);
    presenter(config).render_samples(&samples)?;
    Ok(ExitCode::SUCCESS)
}
