// Author: Dustin Pilgrim
// License: MIT

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc::Sender, oneshot, watch};

use crate::core::config::SessionSettings;
use crate::core::events::Event;
use crate::core::session_msg::SessionMsg;
use crate::daemon::AnyError;
use crate::services::clock::now_ms;
use crate::{sdebug, sinfo, swarn};

pub const INPUT_HELP: &str = "[enter] start/stop  [r] restart  [l] reload  [i] info  [q] quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Toggle,
    Start,
    Stop,
    Restart,
    Reload,
    Info,
    Help,
    Quit,
}

/// Maps one line of terminal input to a command. An empty line toggles,
/// the way tapping the screen does.
pub fn parse_command(line: &str) -> Option<InputCommand> {
    match line.trim().to_lowercase().as_str() {
        "" | "t" | "toggle" => Some(InputCommand::Toggle),
        "s" | "start" => Some(InputCommand::Start),
        "x" | "stop" => Some(InputCommand::Stop),
        "r" | "restart" => Some(InputCommand::Restart),
        "l" | "reload" => Some(InputCommand::Reload),
        "i" | "info" => Some(InputCommand::Info),
        "h" | "?" | "help" => Some(InputCommand::Help),
        "q" | "quit" | "exit" => Some(InputCommand::Quit),
        _ => None,
    }
}

/// Produces fresh settings for the `reload` command.
pub type Reload = Box<dyn Fn() -> Result<SessionSettings, AnyError> + Send + Sync>;

/// Reads stdin line by line and forwards commands to the session loop.
pub async fn run_input(tx: Sender<SessionMsg>, mut shutdown: watch::Receiver<bool>, reload: Reload) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = shutdown.changed() => break,
            line = lines.next_line() => line,
        };

        let line = match line {
            Ok(Some(l)) => l,
            Ok(None) => {
                sdebug!("Input", "stdin closed");
                break;
            }
            Err(e) => {
                swarn!("Input", "failed to read stdin: {}", e);
                break;
            }
        };

        let Some(cmd) = parse_command(&line) else {
            println!("unknown command '{}'. {}", line.trim(), INPUT_HELP);
            continue;
        };

        let now_ms = now_ms();
        let msg = match cmd {
            InputCommand::Toggle => SessionMsg::Event(Event::Toggle { now_ms }),
            InputCommand::Start => SessionMsg::Event(Event::Start { now_ms }),
            InputCommand::Stop => SessionMsg::Event(Event::Stop { now_ms }),
            InputCommand::Restart => SessionMsg::Event(Event::Restart { now_ms }),
            InputCommand::Quit => SessionMsg::Quit,
            InputCommand::Reload => match reload() {
                Ok(settings) => {
                    sinfo!("Input", "configuration reloaded");
                    SessionMsg::Event(Event::Reconfigure { settings, now_ms })
                }
                Err(e) => {
                    swarn!("Input", "reload failed: {}", e);
                    println!("reload failed: {e}");
                    continue;
                }
            },
            InputCommand::Help => {
                println!("{INPUT_HELP}");
                continue;
            }
            InputCommand::Info => {
                let (reply, rx) = oneshot::channel();
                if tx.send(SessionMsg::GetInfo { reply }).await.is_err() {
                    break;
                }
                if let Ok(info) = rx.await {
                    println!("{}", info.pretty_text);
                    if !info.running {
                        println!("{INPUT_HELP}");
                    }
                }
                continue;
            }
        };

        if tx.send(msg).await.is_err() {
            break;
        }
    }
}
