//! Entropy Password CLI
//!
//! Command-line front end: fetches random bytes from the configured
//! service and prints one password per requested generation.

use chrono::{DateTime, Utc};
use clap::Parser;
use entropy_password::{
    charset::CharacterClass,
    config::FileConfig,
    generator::{Generator, PasswordLength},
    metrics::MetricsRegistry,
    session::{GenerationState, Session},
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "entropy-password", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the random-byte service.
    #[arg(long)]
    url: Option<String>,

    /// Wait budget per request, in milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Password length (8-32).
    #[arg(short, long)]
    length: Option<PasswordLength>,

    /// Exclude uppercase letters.
    #[arg(long)]
    no_uppercase: bool,
    /// Exclude lowercase letters.
    #[arg(long)]
    no_lowercase: bool,
    /// Exclude digits.
    #[arg(long)]
    no_numbers: bool,
    /// Exclude special characters.
    #[arg(long)]
    no_special: bool,

    /// Number of passwords to generate, one request each.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: u32,

    /// Print one JSON object per password.
    #[arg(long)]
    json: bool,

    /// Print Prometheus metrics to stderr before exiting.
    #[arg(long)]
    metrics: bool,
}

#[derive(Serialize)]
struct PasswordRecord<'a> {
    password: &'a str,
    length: usize,
    generated_at: DateTime<Utc>,
}

impl Cli {
    fn load_config(&self) -> Result<FileConfig, String> {
        let mut config = match self.config {
            Some(ref path) => FileConfig::from_file(path).map_err(|e| e.to_string())?,
            None => FileConfig::default(),
        };

        if let Some(ref url) = self.url {
            config.service.base_url = url.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.service.timeout_ms = timeout_ms;
        }
        if let Some(length) = self.length {
            config.password.length = length;
        }

        let disabled = [
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Numbers, self.no_numbers),
            (CharacterClass::Special, self.no_special),
        ];
        for (class, off) in disabled {
            if off {
                config.password.classes.set(class, false);
            }
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let metrics = match MetricsRegistry::new() {
        Ok(registry) => Arc::new(registry),
        Err(e) => {
            eprintln!("Failed to create metrics registry: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let generator = match Generator::from_config(&config.service) {
        Ok(generator) => generator.with_metrics(Arc::clone(&metrics)),
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(e) = ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)) {
            warn!("Failed to install Ctrl-C handler: {}", e);
        }
    }

    info!(
        "Entropy Password v{} using {}",
        entropy_password::VERSION,
        generator.source().endpoint()
    );

    let mut session = Session::new(config.password.classes, config.password.length);
    let mut failures = 0u32;

    for i in 0..cli.count {
        if stop.load(Ordering::SeqCst) {
            warn!("Interrupted after {} of {} generations", i, cli.count);
            break;
        }

        match session.run(&generator).await {
            GenerationState::Succeeded(password) => {
                if cli.json {
                    let record = PasswordRecord {
                        password: password.as_str(),
                        length: password.len(),
                        generated_at: Utc::now(),
                    };
                    match serde_json::to_string(&record) {
                        Ok(line) => println!("{}", line),
                        Err(e) => {
                            eprintln!("Failed to encode output: {}", e);
                            failures += 1;
                        }
                    }
                } else {
                    println!("{}", password);
                }
            }
            GenerationState::Failed(message) => {
                eprintln!("Error: {}", message);
                failures += 1;
            }
            GenerationState::Idle | GenerationState::Loading { .. } => {}
        }
    }

    if cli.metrics {
        match metrics.encode() {
            Ok(output) => eprint!("{}", output),
            Err(e) => warn!("Failed to encode metrics: {}", e),
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
