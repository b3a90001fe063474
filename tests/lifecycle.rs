//! Integration tests for the lifecycle manager: signal handling, heartbeat
//! cancellation, the bounded drain and the post-shutdown delay.

use std::time::{Duration, Instant};

use explorer::config::ServerConfig;
use explorer::lifecycle::signals::{listen, Signal};
use explorer::lifecycle::{startup, Heartbeat, Shutdown};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn hangup_does_not_terminate() {
    let (tx, rx) = mpsc::channel(1);
    let (exit_tx, mut exit_rx) = oneshot::channel();
    tokio::spawn(listen(rx, exit_tx));

    tx.send(Signal::Hangup).await.unwrap();
    let fired = timeout(Duration::from_millis(100), &mut exit_rx).await;
    assert!(fired.is_err(), "hangup must not produce an exit notification");

    // The listener is still alive afterwards.
    tx.send(Signal::Terminate).await.unwrap();
    timeout(Duration::from_secs(1), exit_rx)
        .await
        .expect("exit should fire after a termination signal")
        .unwrap();
}

#[tokio::test]
async fn each_termination_signal_fires_exit_once() {
    for sig in [Signal::Interrupt, Signal::Terminate, Signal::Quit] {
        let (tx, rx) = mpsc::channel(1);
        let (exit_tx, exit_rx) = oneshot::channel();
        let task = tokio::spawn(listen(rx, exit_tx));

        tx.send(sig).await.unwrap();
        timeout(Duration::from_secs(1), exit_rx)
            .await
            .expect("exit should fire")
            .unwrap();

        // The listener stops permanently: its queue end is dropped.
        timeout(Duration::from_secs(1), task).await.unwrap().unwrap();
        assert!(
            tx.send(sig).await.is_err(),
            "listener should be gone after the first termination signal"
        );
    }
}

#[tokio::test]
async fn heartbeat_stops_within_one_interval_of_cancellation() {
    let shutdown = Shutdown::new();
    let heartbeat = Heartbeat::new(Duration::from_millis(50));
    let task = tokio::spawn(heartbeat.run(shutdown.subscribe()));

    // Runs freely until cancelled.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(!task.is_finished(), "emitter should run until cancelled");

    shutdown.trigger();
    timeout(Duration::from_millis(100), task)
        .await
        .expect("emitter should observe cancellation within one interval")
        .unwrap();
}

#[tokio::test]
async fn run_serves_until_exit_then_delays_before_returning() {
    let config = ServerConfig {
        port: 25102,
        heartbeat: true,
        shutdown_delay_secs: 1,
    };
    let (exit_tx, exit_rx) = oneshot::channel();
    let run = tokio::spawn(startup::run_until(config, exit_rx));

    tokio::time::sleep(Duration::from_millis(300)).await;

    // Binds exactly the configured port.
    let res = client()
        .get("http://127.0.0.1:25102/_/healthcheck")
        .send()
        .await
        .expect("server should be listening on the configured port");
    assert_eq!(res.status(), 200);

    let begun = Instant::now();
    exit_tx.send(()).unwrap();
    timeout(Duration::from_secs(4), run)
        .await
        .expect("lifecycle should finish after exit")
        .unwrap();

    let elapsed = begun.elapsed();
    assert!(
        elapsed >= Duration::from_secs(1),
        "the 1s delay window should have run ({elapsed:?})"
    );
}

#[tokio::test]
async fn zero_delay_returns_promptly() {
    let config = ServerConfig {
        port: 25103,
        heartbeat: false,
        shutdown_delay_secs: 0,
    };
    let (exit_tx, exit_rx) = oneshot::channel();
    let run = tokio::spawn(startup::run_until(config, exit_rx));

    tokio::time::sleep(Duration::from_millis(300)).await;

    let begun = Instant::now();
    exit_tx.send(()).unwrap();
    timeout(Duration::from_secs(2), run)
        .await
        .expect("lifecycle should finish without delay")
        .unwrap();
    assert!(
        begun.elapsed() < Duration::from_secs(1),
        "no delay window should run when shutdown_delay_secs is 0"
    );
}

#[tokio::test]
async fn drain_is_bounded_with_a_stalled_connection() {
    let config = ServerConfig {
        port: 25104,
        heartbeat: false,
        shutdown_delay_secs: 0,
    };
    let (exit_tx, exit_rx) = oneshot::channel();
    let run = tokio::spawn(startup::run_until(config, exit_rx));

    tokio::time::sleep(Duration::from_millis(300)).await;

    // A half-finished request holds its connection open through shutdown.
    let mut stalled = TcpStream::connect("127.0.0.1:25104").await.unwrap();
    stalled
        .write_all(b"GET /_/healthcheck HTTP/1.1\r\nHost: localhost\r\n")
        .await
        .unwrap();

    let begun = Instant::now();
    exit_tx.send(()).unwrap();
    timeout(Duration::from_secs(8), run)
        .await
        .expect("drain must be bounded by the deadline")
        .unwrap();
    assert!(
        begun.elapsed() < Duration::from_secs(7),
        "drain should not exceed the deadline plus scheduling slack"
    );

    drop(stalled);
}

#[tokio::test]
async fn bind_failure_does_not_abort_the_lifecycle() {
    // Occupy the port so the server task's bind fails.
    let holder = TcpListener::bind("0.0.0.0:25105").await.unwrap();

    let config = ServerConfig {
        port: 25105,
        heartbeat: false,
        shutdown_delay_secs: 0,
    };
    let (exit_tx, exit_rx) = oneshot::channel();
    let run = tokio::spawn(startup::run_until(config, exit_rx));

    tokio::time::sleep(Duration::from_millis(200)).await;
    exit_tx.send(()).unwrap();
    timeout(Duration::from_secs(2), run)
        .await
        .expect("lifecycle should complete despite the bind failure")
        .unwrap();

    drop(holder);
}
