use anyhow::Result;
use chopchop_bork::{utils::{init_tracing, log_config}, Config, Conversation, Message, Responder};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    // Keep the library quiet unless asked; replies go to stdout
    init_tracing("warn");
    log_config(&config);

    let responder = Responder::from_config(&config);
    let mut history: Conversation = Vec::new();
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();

    println!("ChopChop Bork is in the kitchen ({}). Ctrl-D to leave.", responder.model());
    loop {
        stdout.write_all(b"\n> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut turn = history.clone();
        turn.push(Message::user(line));
        match responder.respond(turn).await {
            Ok(updated) => {
                if let Some(reply) = updated.last() {
                    println!("\n{}", reply.content);
                }
                history = updated;
            }
            Err(err) => eprintln!("\nError: {err}"),
        }
    }

    Ok(())
}
