use std::sync::mpsc;

use anyhow::Result;

use crate::{
    backend::{self, HttpReplyClient, ReplyWorker},
    cli::{Cli, Command},
    domain,
    infra::{self, clipboard::SystemClipboard, share::MailtoShare, speech::CommandSpeech},
    ui,
    usecases::{self, bootstrap, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                backend = backend::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let client = HttpReplyClient::new(&context.config.backend)?;
            let (event_tx, event_rx) = mpsc::channel();
            let (_reply_worker, dispatcher) = ReplyWorker::start(client, event_tx)?;

            let mut orchestrator = DefaultShellOrchestrator::new(
                dispatcher,
                SystemClipboard,
                MailtoShare,
                CommandSpeech::new(context.config.speech.command.clone()),
                context.session_id.clone(),
                &context.config.speech.default_language,
            );
            let mut event_source = ui::CompositeEventSource::new(event_rx);

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
    }

    Ok(())
}
