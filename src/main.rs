use clap::Parser;
use weather_to_postgres::utils::monitor::{StartTime, SystemMonitor};
use weather_to_postgres::utils::{logger, redact::redact_launch_args};
use weather_to_postgres::{
    CliConfig, ConfigLoader, OpenWeatherMapFetcher, PostgresConnector, ProcessEnv,
    TerminalPrompter, WeatherRun,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let start = StartTime::now();

    // .env 先載入，RUST_LOG 也可以寫在裡面
    let dotenv = dotenvy::dotenv();
    let config = CliConfig::parse();

    let guard = match logger::init_cli_logger(config.verbose, &config.log_dir) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    tracing::info!("Weather to Postgres v{}", env!("CARGO_PKG_VERSION"));
    let args: Vec<String> = std::env::args().collect();
    let program = std::env::current_exe()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| args.first().cloned().unwrap_or_default());
    tracing::info!("Launched using: {} {}", program, redact_launch_args(&args));

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let monitor = SystemMonitor::new(start, config.monitor);
    if monitor.is_enabled() {
        tracing::info!("🔍 System monitoring enabled");
    }

    let env = ProcessEnv;
    let prompter = TerminalPrompter::new();
    let loader = ConfigLoader::new(&env, &prompter, config.interactive());

    let engine = WeatherRun::new_with_monitoring(
        PostgresConnector::new(),
        OpenWeatherMapFetcher::new(),
        monitor,
    );
    let code = engine.execute(&loader).await;

    // process::exit skips destructors; flush the file log first
    drop(guard);
    std::process::exit(code);
}
