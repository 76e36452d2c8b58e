use anyhow::Context;
use clap::Parser;
use conference_ticket::app::App;
use conference_ticket::config::{Cli, Config};
use conference_ticket::controller::FormController;
use conference_ticket::logging;
use conference_ticket::storage::{FileStore, Persistence};
use conference_ticket::terminal::{Terminal, TerminalEvent};
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;
    logging::init(&config)?;

    let persistence = Persistence::with_key(FileStore::new(&config.store_path), &config.slot_key);
    let mut controller = FormController::new(persistence);
    controller.load_initial();

    let mut terminal = Terminal::new();
    terminal.enter().context("entering raw mode")?;
    let result = event_loop(&mut terminal, App::new(controller));
    let restored = terminal.leave().context("restoring terminal");

    finish(result, restored)
}

/// The event loop's error wins; a restore failure is attached to it.
fn finish(result: anyhow::Result<()>, restored: anyhow::Result<()>) -> anyhow::Result<()> {
    match (result, restored) {
        (Err(err), Err(restore_err)) => Err(err.context(format!("{:#}", restore_err))),
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored,
    }
}

fn event_loop(terminal: &mut Terminal, mut app: App) -> anyhow::Result<()> {
    let mut render_requested = true;

    loop {
        if render_requested {
            app.render(terminal)?;
            render_requested = false;
        }

        if !terminal.poll(Duration::from_millis(100))? {
            continue;
        }

        match terminal.read_event()? {
            TerminalEvent::Key(key_event) => {
                for event in app.handle_key(key_event) {
                    tracing::trace!(?event, "form event");
                }
                render_requested = true;
            }
            TerminalEvent::Resize { .. } => {
                render_requested = true;
            }
        }

        if app.should_exit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::finish;

    #[test]
    fn loop_error_survives_restore_failure() {
        let err = finish(
            Err(anyhow::anyhow!("event loop failed")),
            Err(anyhow::anyhow!("restoring terminal")),
        )
        .expect_err("should fail");

        let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
        assert!(chain.iter().any(|e| e == "event loop failed"));
        assert!(chain.iter().any(|e| e == "restoring terminal"));
    }

    #[test]
    fn restore_failure_alone_is_reported() {
        let err = finish(Ok(()), Err(anyhow::anyhow!("restoring terminal")))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "restoring terminal");
    }

    #[test]
    fn clean_exit() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
