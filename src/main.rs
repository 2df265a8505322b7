use candidate_screening::utils::error::{ErrorSeverity, ScreeningError};
use candidate_screening::utils::logger;
use candidate_screening::{
    report, CliConfig, FetchOutcome, HttpScoringBackend, ScreeningClient, ScreeningSession,
};
use clap::Parser;
use tokio::io::{AsyncReadExt, BufReader};

fn exit_code(e: &ScreeningError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ScreeningError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

/// File and stdin input lose their trailing line break; everything else is sent as typed.
async fn read_job_description(config: &CliConfig) -> Result<String, ScreeningError> {
    if let Some(text) = &config.job_description {
        return Ok(text.clone());
    }

    let raw = match &config.job_file {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };
    Ok(raw.trim_end_matches(['\r', '\n']).to_string())
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = config.resolve_settings().unwrap_or_else(|e| fail(e));
    for (model, url) in settings.endpoints.iter() {
        tracing::debug!("{} -> {}", model, url);
    }

    let backend = HttpScoringBackend::new().with_timeout(settings.timeout);
    let client = ScreeningClient::new(backend, settings.endpoints.clone()).with_model(settings.model);

    if config.interactive {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        if let Err(e) = ScreeningSession::new(&client).run(stdin, &mut stdout).await {
            fail(e);
        }
        return;
    }

    let job_description = read_job_description(&config)
        .await
        .unwrap_or_else(|e| fail(e));
    client.set_job_description(job_description);

    let outcome = client.fetch_candidates().await;

    let rendered = report::render(&client.candidates(), config.format).unwrap_or_else(|e| fail(e));
    print!("{}", rendered);

    if let FetchOutcome::Failed { reason } = outcome {
        if config.fail_on_error {
            eprintln!("❌ {}", reason);
            std::process::exit(2);
        }
    }
}
