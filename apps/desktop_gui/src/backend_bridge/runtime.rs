//! Runtime bridge between UI command queue and backend event intake.

use std::thread::{self, JoinHandle};

use client_core::{FactRepository, StoreSettings};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext, UiEvent},
};

/// Starts the backend worker thread. Startup failures are reported to the UI
/// as events; the worker then exits and later commands fail as disconnected.
pub fn launch(
    settings: anyhow::Result<StoreSettings>,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("fact store settings unavailable: {err:#}");
            send_event(
                &ui_tx,
                UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("{err:#}"),
                )),
            );
            return;
        }
    };

    let repository = match FactRepository::from_settings(&settings) {
        Ok(repository) => repository,
        Err(err) => {
            tracing::error!("failed to build fact store client: {err}");
            send_event(
                &ui_tx,
                UiEvent::Error(UiError::from_store(UiErrorContext::BackendStartup, &err)),
            );
            return;
        }
    };

    tracing::info!(
        store_url = %settings.store_url,
        table = %settings.table,
        "backend worker starting"
    );
    if let Err(err) = spawn_worker(repository, cmd_rx, ui_tx.clone()) {
        tracing::error!("failed to spawn backend worker thread: {err}");
        send_event(
            &ui_tx,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: {err}"),
            )),
        );
    }
}

/// Runs commands on a dedicated tokio runtime, one task per command so that
/// slow requests never hold up unrelated ones.
pub fn spawn_worker(
    repository: FactRepository,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("facts-backend".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!("failed to build backend runtime: {err}");
                    send_event(
                        &ui_tx,
                        UiEvent::Error(UiError::from_message(
                            UiErrorContext::BackendStartup,
                            format!("failed to build backend runtime: {err}"),
                        )),
                    );
                    return;
                }
            };

            while let Ok(cmd) = cmd_rx.recv() {
                runtime.spawn(execute(repository.clone(), cmd, ui_tx.clone()));
            }
            tracing::info!("ui command channel closed; backend worker stopping");
            runtime.shutdown_timeout(std::time::Duration::from_secs(2));
        })
}

async fn execute(repository: FactRepository, cmd: BackendCommand, ui_tx: Sender<UiEvent>) {
    let event = match cmd {
        BackendCommand::ListFacts { generation, filter } => {
            tracing::info!(generation, filter = %filter, "backend: list_facts");
            let result = repository.list_facts(filter).await;
            if let Err(err) = &result {
                tracing::error!(
                    generation,
                    filter = %filter,
                    "backend: list_facts failed: {err}"
                );
            }
            UiEvent::FactsLoaded {
                generation,
                filter,
                result,
            }
        }
        BackendCommand::CreateFact { fact } => {
            tracing::info!(category = %fact.category, "backend: create_fact");
            let result = repository.create_fact(fact).await;
            if let Err(err) = &result {
                tracing::error!("backend: create_fact failed: {err}");
            }
            UiEvent::FactCreated(result)
        }
        BackendCommand::IncrementVote { fact, column } => {
            tracing::info!(fact_id = fact.id.0, column = %column, "backend: increment_vote");
            let result = repository.increment_vote(&fact, column).await;
            if let Err(err) = &result {
                tracing::error!(
                    fact_id = fact.id.0,
                    column = %column,
                    "backend: increment_vote failed: {err}"
                );
            }
            UiEvent::VoteRecorded {
                fact_id: fact.id,
                result,
            }
        }
    };
    deliver(ui_tx, event).await;
}

/// Hands a completion event to the UI, waiting for room in the queue. The
/// controller keeps loading, upload and pending-vote flags set until the
/// matching event arrives, so completions are never dropped.
async fn deliver(ui_tx: Sender<UiEvent>, event: UiEvent) {
    let sent = tokio::task::spawn_blocking(move || ui_tx.send(event)).await;
    match sent {
        Ok(Ok(())) => {}
        Ok(Err(_)) => tracing::debug!("ui event channel closed"),
        Err(err) => tracing::error!("failed to deliver backend event: {err}"),
    }
}

/// Startup notices only; the queue is empty when these are sent.
fn send_event(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!("ui event queue full; dropping backend event")
        }
        Err(TrySendError::Disconnected(_)) => tracing::debug!("ui event channel closed"),
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
