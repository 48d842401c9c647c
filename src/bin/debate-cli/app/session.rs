use std::future::Future;
use std::io::Write;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use debate::config::SharedSettings;
use debate::debate::StopSignal;
use debate::DebateController;

use super::render::spawn_renderer;

type Controller = DebateController<SharedSettings>;

/// Runs the debate to its turn limit without user input.
pub async fn run_auto(mut controller: Controller, delay_ms: u64) -> anyhow::Result<()> {
    let renderer = spawn_renderer(controller.create_event_channel());
    stop_on_ctrl_c(controller.stop_signal());

    controller.start();
    while controller.is_running() {
        controller.advance().await;
        if delay_ms > 0 && controller.is_running() {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    drop(controller);
    renderer.await?;
    Ok(())
}

/// Reads commands from stdin: an empty line advances one turn.
pub async fn run_stepped(mut controller: Controller) -> anyhow::Result<()> {
    let renderer = spawn_renderer(controller.create_event_channel());
    stop_on_ctrl_c(controller.stop_signal());

    controller.start();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        prompt(controller.is_running())?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match StepCommand::parse(&line) {
            Some(StepCommand::Next) => {
                controller.advance().await;
            }
            Some(StepCommand::Stop) => controller.stop(),
            Some(StepCommand::Start) => {
                controller.start();
            }
            Some(StepCommand::Quit) => break,
            None => eprintln!("commands: <enter>/next, stop, start, quit"),
        }
        // Let the renderer print before the next prompt.
        tokio::task::yield_now().await;
    }

    controller.stop();
    drop(controller);
    renderer.await?;
    Ok(())
}

fn prompt(running: bool) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    if running {
        write!(stderr, "> ")?;
    } else {
        write!(stderr, "(stopped) start or quit > ")?;
    }
    stderr.flush()
}

fn stop_on_ctrl_c(signal: StopSignal) {
    tokio::spawn(forward_interrupts(signal, tokio::signal::ctrl_c));
}

/// Triggers `signal` on every interrupt until the interrupt source fails.
///
/// The signal is re-armed by each start, so the listener has to outlive a
/// single stop.
async fn forward_interrupts<F, Fut>(signal: StopSignal, mut next_interrupt: F)
where
    F: FnMut() -> Fut,
    Fut: Future<Output = std::io::Result<()>>,
{
    while next_interrupt().await.is_ok() {
        log::info!("Interrupted, stopping debate");
        signal.trigger();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepCommand {
    Next,
    Stop,
    Start,
    Quit,
}

impl StepCommand {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "" | "n" | "next" => Some(Self::Next),
            "s" | "stop" => Some(Self::Stop),
            "start" | "restart" => Some(Self::Start),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}
