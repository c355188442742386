//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use shared::error::StoreError;

use crate::{backend_bridge::commands::BackendCommand, controller::events::UiEvent};

/// Queues `cmd` for the worker. When it cannot be queued, returns the failure
/// event to apply so the controller does not wait on a reply that never comes.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Option<UiEvent> {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            None
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "ui->backend queue full");
            Some(cmd.into_failed_event(StoreError::Transport(
                "UI command queue is full; please retry".to_string(),
            )))
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "backend worker disconnected");
            Some(cmd.into_failed_event(StoreError::Transport(
                "backend worker disconnected (possible startup failure); restart the app"
                    .to_string(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;
    use shared::domain::CategoryFilter;

    use super::*;

    #[test]
    fn queues_command_when_worker_is_listening() {
        let (tx, rx) = bounded(1);
        let cmd = BackendCommand::ListFacts {
            generation: 1,
            filter: CategoryFilter::All,
        };
        assert!(dispatch_backend_command(&tx, cmd.clone()).is_none());
        assert_eq!(rx.try_recv().expect("queued"), cmd);
    }

    #[test]
    fn full_queue_turns_into_failed_event() {
        let (tx, _rx) = bounded(1);
        let cmd = BackendCommand::ListFacts {
            generation: 1,
            filter: CategoryFilter::All,
        };
        assert!(dispatch_backend_command(&tx, cmd.clone()).is_none());
        match dispatch_backend_command(&tx, cmd) {
            Some(UiEvent::FactsLoaded {
                generation: 1,
                result: Err(StoreError::Transport(message)),
                ..
            }) => assert!(message.contains("queue is full")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn disconnected_worker_turns_into_failed_event() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let cmd = BackendCommand::ListFacts {
            generation: 3,
            filter: CategoryFilter::All,
        };
        assert!(matches!(
            dispatch_backend_command(&tx, cmd),
            Some(UiEvent::FactsLoaded {
                generation: 3,
                result: Err(StoreError::Transport(_)),
                ..
            })
        ));
    }
}
