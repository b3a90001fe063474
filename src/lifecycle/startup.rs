//! Startup and shutdown orchestration.
//!
//! # Responsibilities
//! - Spawn the signal listener and the optional heartbeat
//! - Start the HTTP server as a fire-and-forget task
//! - Wait for the exit notification, then drive the bounded drain and the
//!   post-shutdown delay
//!
//! # Design Decisions
//! - The server task is never joined before shutdown; a failed bind only
//!   ends that task
//! - Shutdown of the listener never starts before the exit notification
//! - The delay never starts before the drain has returned

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::lifecycle::heartbeat::Heartbeat;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;

/// How long in-flight requests get to complete once shutdown starts.
pub const SHUTDOWN_DEADLINE: Duration = Duration::from_secs(5);

/// Run the server until a termination signal arrives, then shut down.
///
/// Top-level orchestration entry point. Returns once the drain and the
/// configured delay window have elapsed and the process may exit. The only
/// error path is signal handler registration.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let queue = signals::os_signals()?;
    let (exit_tx, exit_rx) = oneshot::channel();
    tokio::spawn(signals::listen(queue, exit_tx));

    run_until(config, exit_rx).await;
    Ok(())
}

/// Drive the full lifecycle with an explicit exit notification.
///
/// A dropped sender counts as an exit request.
pub async fn run_until(config: ServerConfig, exit: oneshot::Receiver<()>) {
    let shutdown = Shutdown::new();

    if config.heartbeat {
        tokio::spawn(Heartbeat::default().run(shutdown.subscribe()));
    }

    let server = HttpServer::new(config.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], server.config().port));
    let drain = shutdown.subscribe();
    let mut server_task = tokio::spawn(async move {
        // A failed bind leaves the endpoints unavailable; the lifecycle
        // still runs to completion.
        let listener = match TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                tracing::error!(address = %addr, error = %e, "failed to bind listener");
                return;
            }
        };
        if let Err(e) = server.run(listener, drain).await {
            tracing::error!(error = %e, "server error");
        }
    });

    // Listening: the sole unbounded wait.
    let _ = exit.await;

    // ShuttingDown: cancels the heartbeat and starts the server drain.
    shutdown.trigger();

    // Draining, bounded by the deadline.
    if time::timeout(SHUTDOWN_DEADLINE, &mut server_task).await.is_err() {
        tracing::warn!("drain deadline exceeded, closing remaining connections");
        server_task.abort();
    }
    tracing::info!("server shut down gracefully");

    // Delaying: one progress line per second until the window closes.
    if config.shutdown_delay_secs > 0 {
        tracing::info!(
            seconds = config.shutdown_delay_secs,
            "delaying before exit"
        );
        for elapsed in 1..=config.shutdown_delay_secs {
            time::sleep(Duration::from_secs(1)).await;
            tracing::info!(elapsed, "delay");
        }
    }
}
