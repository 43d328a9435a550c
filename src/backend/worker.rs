//! Background reply worker.
//!
//! The UI loop stays synchronous; this worker owns the blocking HTTP
//! gateway on its own thread. Prompts arrive over a channel, completed
//! outcomes flow back as `AppEvent`s through the composite event
//! source.

use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread::{self, JoinHandle},
};

use crate::{
    domain::events::{AppEvent, ReplyOutcome},
    usecases::send_message::{DispatchError, OutgoingPrompt, PromptDispatcher},
};

use super::client::ReplySource;

const REPLY_WORKER_SHUTDOWN_FAILED: &str = "BACKEND_REPLY_WORKER_SHUTDOWN_FAILED";

enum WorkerCommand {
    Fetch(OutgoingPrompt),
    Shutdown,
}

/// Channel-backed dispatcher handed to the shell orchestrator.
#[derive(Debug, Clone)]
pub struct ChannelPromptDispatcher {
    command_tx: Sender<WorkerCommand>,
}

impl PromptDispatcher for ChannelPromptDispatcher {
    fn dispatch(&mut self, prompt: OutgoingPrompt) -> Result<(), DispatchError> {
        self.command_tx
            .send(WorkerCommand::Fetch(prompt))
            .map_err(|_| DispatchError::WorkerGone)
    }
}

/// Owns the worker thread; dropping it requests shutdown and joins.
#[derive(Debug)]
pub struct ReplyWorker {
    command_tx: Option<Sender<WorkerCommand>>,
    worker: Option<JoinHandle<()>>,
}

impl ReplyWorker {
    pub fn start<S>(
        source: S,
        event_tx: Sender<AppEvent>,
    ) -> Result<(Self, ChannelPromptDispatcher), ReplyWorkerStartError>
    where
        S: ReplySource + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("adgenie-backend-reply".to_owned())
            .spawn(move || run_worker(source, command_rx, event_tx))
            .map_err(ReplyWorkerStartError::WorkerSpawn)?;

        let dispatcher = ChannelPromptDispatcher {
            command_tx: command_tx.clone(),
        };

        Ok((
            Self {
                command_tx: Some(command_tx),
                worker: Some(worker),
            },
            dispatcher,
        ))
    }
}

impl Drop for ReplyWorker {
    fn drop(&mut self) {
        if let Some(command_tx) = self.command_tx.take() {
            let _ = command_tx.send(WorkerCommand::Shutdown);
        }

        if let Some(worker) = self.worker.take() {
            if let Err(error) = worker.join() {
                tracing::warn!(
                    code = REPLY_WORKER_SHUTDOWN_FAILED,
                    error = ?error,
                    "backend reply worker panicked on shutdown"
                );
            }
        }
    }
}

fn run_worker<S>(source: S, command_rx: Receiver<WorkerCommand>, event_tx: Sender<AppEvent>)
where
    S: ReplySource,
{
    while let Ok(command) = command_rx.recv() {
        let prompt = match command {
            WorkerCommand::Shutdown => break,
            WorkerCommand::Fetch(prompt) => prompt,
        };

        let outcome = match source.fetch_reply(&prompt.message, &prompt.session_id) {
            Ok(reply) => ReplyOutcome::Reply(reply),
            Err(error) => {
                tracing::warn!(error = %error, "backend request failed; reply falls back");
                ReplyOutcome::Failed
            }
        };

        if event_tx.send(AppEvent::ReplyArrived(outcome)).is_err() {
            break;
        }
    }
}

#[derive(Debug)]
pub enum ReplyWorkerStartError {
    WorkerSpawn(std::io::Error),
}

impl std::fmt::Display for ReplyWorkerStartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WorkerSpawn(source) => write!(f, "worker spawn failed: {source}"),
        }
    }
}

impl std::error::Error for ReplyWorkerStartError {}
