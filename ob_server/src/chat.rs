//! Minimal line protocol for chat clients.
//!
//! One message per line:
//!
//! ```text
//! HELLO <nick!user@host>    introduce yourself (required first)
//! <text>                    a chat line; lines starting with the
//!                           command prefix are dispatched
//! ```
//!
//! Engine reply lines are written back verbatim.

use anyhow::Result;
use open_bracket::EngineHandle;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

pub struct Session {
    handle: EngineHandle,
    prefix: String,
    target: String,
}

impl Session {
    pub fn new(handle: EngineHandle, prefix: String, target: String) -> Self {
        Self {
            handle,
            prefix,
            target,
        }
    }

    pub async fn run(self, stream: TcpStream) -> Result<()> {
        let (reader, mut writer) = stream.into_split();
        let mut lines = BufReader::new(reader).lines();
        let mut identity: Option<String> = None;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("HELLO ") {
                let rest = rest.trim();
                identity = Some(rest.to_string());
                let greeting = format!("Hello, {}\n", open_bracket::identity::nickname(rest));
                writer.write_all(greeting.as_bytes()).await?;
                continue;
            }

            let Some(identity) = identity.as_deref() else {
                writer
                    .write_all(b"Introduce yourself first: HELLO <nick!user@host>\n")
                    .await?;
                continue;
            };

            // Ordinary chatter is not the bot's business.
            let Some(command) = line.strip_prefix(self.prefix.as_str()) else {
                continue;
            };
            let (name, args) = split_command(command);

            let Some(reply) = self.handle.command(identity, &self.target, name, args).await
            else {
                break;
            };
            for out in &reply.lines {
                writer.write_all(out.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }
        Ok(())
    }
}

/// Split `result Final TeamA` into the command name and its arguments.
fn split_command(text: &str) -> (&str, Vec<String>) {
    let mut parts = text.split_whitespace();
    let name = parts.next().unwrap_or("");
    (name, parts.map(str::to_string).collect())
}
