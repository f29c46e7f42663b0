// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Graceful shutdown coordination.
//!
//! This module handles OS signals (SIGTERM, SIGINT on Unix; Ctrl+C
//! elsewhere) and exposes a future the HTTP server can await for graceful
//! shutdown.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;

// =============================================================================
// ShutdownCoordinator
// =============================================================================

/// Coordinates graceful shutdown.
///
/// The coordinator provides:
/// - A broadcast channel for notifying components of shutdown
/// - Signal handling for SIGTERM and SIGINT (Unix) or Ctrl+C (Windows)
/// - A future that resolves when shutdown is initiated
#[derive(Clone)]
pub struct ShutdownCoordinator {
    sender: broadcast::Sender<()>,
    shutdown_initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    /// Creates a new shutdown coordinator.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(1);
        Self {
            sender,
            shutdown_initiated: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribes to shutdown notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.sender.subscribe()
    }

    /// Creates a future that resolves when shutdown is signaled.
    ///
    /// This is what gets passed to the server's graceful-shutdown hook.
    pub fn shutdown_signal(&self) -> impl std::future::Future<Output = ()> + Send + 'static {
        let mut receiver = self.sender.subscribe();
        let initiated = self.shutdown_initiated.clone();

        async move {
            if initiated.load(Ordering::SeqCst) {
                return;
            }
            let _ = receiver.recv().await;
        }
    }

    /// Initiates shutdown, notifying all subscribers.
    pub fn initiate_shutdown(&self) {
        if self
            .shutdown_initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            info!("Shutdown initiated");
            let _ = self.sender.send(());
        }
    }

    /// Returns `true` if shutdown has been initiated.
    pub fn is_shutdown_initiated(&self) -> bool {
        self.shutdown_initiated.load(Ordering::SeqCst)
    }

    /// Spawns the OS signal listener.
    ///
    /// When a signal arrives, shutdown is initiated and every
    /// `shutdown_signal()` future resolves.
    pub fn listen_for_signals(&self) {
        let coordinator = self.clone();

        tokio::spawn(async move {
            wait_for_os_signal().await;
            coordinator.initiate_shutdown();
        });
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Signal Handling
// =============================================================================

#[cfg(unix)]
async fn wait_for_os_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGTERM handler");
            return std::future::pending().await;
        }
    };
    let mut sigint = match signal(SignalKind::interrupt()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to register SIGINT handler");
            return std::future::pending().await;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => info!("Received SIGTERM"),
        _ = sigint.recv() => info!("Received SIGINT"),
    }
}

#[cfg(not(unix))]
async fn wait_for_os_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        return std::future::pending().await;
    }
    info!("Received Ctrl+C");
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_shutdown_resolves_signal() {
        let coordinator = ShutdownCoordinator::new();
        let signal = coordinator.shutdown_signal();

        assert!(!coordinator.is_shutdown_initiated());
        coordinator.initiate_shutdown();
        assert!(coordinator.is_shutdown_initiated());

        // Resolves promptly once shutdown was initiated.
        tokio::time::timeout(std::time::Duration::from_secs(1), signal)
            .await
            .expect("shutdown signal did not resolve");
    }

    #[tokio::test]
    async fn test_shutdown_is_idempotent() {
        let coordinator = ShutdownCoordinator::new();

        coordinator.initiate_shutdown();
        coordinator.initiate_shutdown();

        assert!(coordinator.is_shutdown_initiated());
    }

    #[tokio::test]
    async fn test_signal_after_shutdown_resolves_immediately() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.initiate_shutdown();

        // A signal created after shutdown resolves without a broadcast.
        tokio::time::timeout(
            std::time::Duration::from_secs(1),
            coordinator.shutdown_signal(),
        )
        .await
        .expect("shutdown signal did not resolve");
    }

    #[tokio::test]
    async fn test_subscribers_are_notified() {
        let coordinator = ShutdownCoordinator::new();
        let mut rx = coordinator.subscribe();

        coordinator.initiate_shutdown();

        tokio::time::timeout(std::time::Duration::from_secs(1), rx.recv())
            .await
            .expect("subscriber was not notified")
            .expect("channel closed");
    }
}
