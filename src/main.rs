use chrono::NaiveTime;
use clap::Parser;

use habitd_server::ServerConfig;
use habitd_store::HabitStore;

/// Habit tracking service with daily reminder push.
#[derive(Parser, Debug)]
#[command(name = "habitd", version)]
struct Cli {
    /// HTTP/WebSocket listen port.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Local wall-clock time of the daily reminder broadcast (HH:MM).
    #[arg(long, default_value = "08:00", value_parser = parse_reminder_time)]
    reminder_time: NaiveTime,
}

fn parse_reminder_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("starting habitd");

    let store = HabitStore::new();

    let config = ServerConfig {
        port: cli.port,
        reminder_time: cli.reminder_time,
        ..Default::default()
    };

    let handle = habitd_server::start(config, store)
        .await
        .expect("failed to start server");

    tracing::info!(
        port = handle.port,
        reminder_time = %cli.reminder_time,
        "habitd ready"
    );

    // Wait for shutdown signal
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");

    tracing::info!("shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reminder_time_parses() {
        assert_eq!(
            parse_reminder_time("08:00").unwrap(),
            NaiveTime::from_hms_opt(8, 0, 0).unwrap()
        );
        assert!(parse_reminder_time("8am").is_err());
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["habitd"]);
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.reminder_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }
}
