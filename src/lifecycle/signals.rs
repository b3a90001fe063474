//! OS signal handling.
//!
//! # Responsibilities
//! - Register interest in SIGHUP, SIGINT, SIGTERM and SIGQUIT
//! - Translate them into abstract signal kinds on a queue
//! - Collapse the queue into a single exit notification
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - SIGHUP is logged and never terminates
//! - Every other kind is a termination request, including any kind this
//!   enum may grow in the future

use tokio::sync::{mpsc, oneshot};

/// Process-level signal kinds the listener understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Reload request; logged, never terminates.
    Hangup,
    Interrupt,
    Terminate,
    Quit,
}

/// Bridge OS signals into an abstract signal queue.
///
/// The bridge task runs for the whole process lifetime and stops forwarding
/// once the receiving side is gone.
#[cfg(unix)]
pub fn os_signals() -> std::io::Result<mpsc::Receiver<Signal>> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut hangup = signal(SignalKind::hangup())?;
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;

    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        loop {
            let sig = tokio::select! {
                _ = hangup.recv() => Signal::Hangup,
                _ = interrupt.recv() => Signal::Interrupt,
                _ = terminate.recv() => Signal::Terminate,
                _ = quit.recv() => Signal::Quit,
            };
            if tx.send(sig).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Ctrl+C is the only portable termination signal on non-Unix targets.
#[cfg(not(unix))]
pub fn os_signals() -> std::io::Result<mpsc::Receiver<Signal>> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(async move {
        loop {
            if tokio::signal::ctrl_c().await.is_err() {
                break;
            }
            if tx.send(Signal::Interrupt).await.is_err() {
                break;
            }
        }
    });
    Ok(rx)
}

/// Consume the signal queue until a termination request arrives, then fire
/// the exit notification exactly once and stop listening for good.
///
/// Hangup is logged and listening continues. Anything other than hangup is
/// treated as a request to terminate.
pub async fn listen(mut signals: mpsc::Receiver<Signal>, exit: oneshot::Sender<()>) {
    while let Some(sig) = signals.recv().await {
        match sig {
            Signal::Hangup => {
                tracing::info!("received SIGHUP");
            }
            other => {
                tracing::info!(signal = ?other, "received termination signal");
                let _ = exit.send(());
                return;
            }
        }
    }
}
