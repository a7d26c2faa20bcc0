use std::sync::Arc;

use hangman::console::Console;
use hangman::{AppError, AsciiStages, ChannelAllowlist, ChannelAnnouncer, GameConfig, GameService};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

mod telemetry;

const CONSOLE_CHANNEL: &str = "hangman";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    telemetry::init_tracing();

    let config =
        GameConfig::from_env().inspect_err(|e| error!(error = %e, "invalid configuration"))?;
    let gate = ChannelAllowlist::from_env();
    if gate.is_empty() {
        warn!("HANGMAN_CHANNELS is empty; every message will be rejected");
    }

    let (announcer, mut events) = ChannelAnnouncer::new();
    let service = GameService::from_config(&config, Arc::new(announcer))
        .inspect_err(|e| error!(error = %e, "failed to start game service"))?;
    info!(
        time_limit_secs = config.time_limit.as_secs(),
        invite_ttl_secs = config.invite_ttl.as_secs(),
        "hangman console ready"
    );

    let mut console = Console::new(service.clone(), gate, AsciiStages, CONSOLE_CHANNEL);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line {
                Ok(Some(line)) => {
                    if let Some(reply) = console.handle_line(&line) {
                        println!("{reply}");
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    error!(error = %e, "stdin read failed");
                    break;
                }
            },
            Some(event) = events.recv() => println!("{}", console.render_event(&event)),
        }
    }

    // Flush announcements produced by the last lines.
    while let Ok(event) = events.try_recv() {
        println!("{}", console.render_event(&event));
    }
    service.shutdown();
    Ok(())
}
