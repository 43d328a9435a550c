//! Backend integration layer: the HTTP chat gateway and its worker.

mod client;
mod worker;

pub use client::{HttpReplyClient, ReplySource, ReplySourceError};
pub use worker::{ChannelPromptDispatcher, ReplyWorker, ReplyWorkerStartError};

/// Returns the backend module name for smoke checks.
pub fn module_name() -> &'static str {
    "backend"
}
