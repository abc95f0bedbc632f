use crate::domain::{PermissionDecision, PermissionState};
use async_trait::async_trait;
use std::fmt::Debug;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing::{info, instrument, warn};

#[async_trait]
pub trait PermissionGate: Debug + Send + Sync {
    /// Whether location access is currently allowed.
    async fn granted(&self) -> bool;

    /// Runs the platform request flow and returns the resulting grant.
    async fn request(&self) -> bool;
}

/// The retry/cancel dialog shown after a denial.
#[async_trait]
pub trait PermissionPrompt: Debug + Send + Sync {
    async fn ask_retry(&self) -> PermissionDecision;
}

/// Drives the permission flow until it settles: granted, or denied with the
/// user abandoning the request. The distance and timer logic never see the
/// intermediate states.
#[instrument(skip_all)]
pub async fn ensure_permission(gate: &dyn PermissionGate, prompt: &dyn PermissionPrompt) -> PermissionState {
    if gate.granted().await {
        return PermissionState::Granted;
    }

    let mut state = PermissionState::Pending;
    while state == PermissionState::Pending {
        if gate.request().await {
            info!("🔓 Location permission granted");
            state = PermissionState::Granted;
            continue;
        }

        warn!("🔒 Location permission denied");
        state = match prompt.ask_retry().await {
            PermissionDecision::Retry => PermissionState::Pending,
            PermissionDecision::Abandon => PermissionState::Denied,
        };
    }

    state
}

/// Stands in for the platform permission store: the grant comes from config
/// and requesting changes nothing.
#[derive(Debug)]
pub struct StaticGate {
    granted: bool,
}

impl StaticGate {
    pub fn new(granted: bool) -> Self {
        StaticGate { granted }
    }
}

#[async_trait]
impl PermissionGate for StaticGate {
    async fn granted(&self) -> bool {
        self.granted
    }

    async fn request(&self) -> bool {
        self.granted
    }
}

/// The retry/cancel dialog, terminal edition.
#[derive(Debug)]
pub struct TerminalPrompt;

#[async_trait]
impl PermissionPrompt for TerminalPrompt {
    async fn ask_retry(&self) -> PermissionDecision {
        println!("Location permission is mandatory to track distance. Retry? [y/N]");

        let mut line = String::new();
        let mut reader = BufReader::new(stdin());
        match reader.read_line(&mut line).await {
            Ok(_) if line.trim().eq_ignore_ascii_case("y") => PermissionDecision::Retry,
            _ => PermissionDecision::Abandon,
        }
    }
}
