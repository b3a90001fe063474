use clap::Parser;

use explorer::config::ServerConfig;
use explorer::lifecycle;
use explorer::observability::logging;

#[derive(Parser)]
#[command(name = "explorer")]
#[command(version, about = "web server to introspect a running container")]
struct Cli {
    /// Port number
    #[arg(long, env = "PORT", default_value_t = 5002)]
    port: u16,

    /// Emit a liveness log line every second
    #[arg(long, env = "HEARTBEAT")]
    heartbeat: bool,

    /// Seconds to wait after shutdown completes before exiting
    #[arg(long, env = "DELAY", default_value_t = 5)]
    delay: u64,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            heartbeat: cli.heartbeat,
            shutdown_delay_secs: cli.delay,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let config = ServerConfig::from(Cli::parse());
    tracing::info!(
        port = config.port,
        heartbeat = config.heartbeat,
        shutdown_delay_secs = config.shutdown_delay_secs,
        "configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
