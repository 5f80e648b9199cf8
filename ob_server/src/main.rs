//! Chat-style tournament tracker server.
//!
//! Interchangeable transport glue: clients speak a minimal line protocol
//! and every recognized command is forwarded to the engine actor, which
//! serializes them against the shared snapshot.

mod chat;

use std::net::SocketAddr;

use anyhow::Error;
use ctrlc::set_handler;
use log::{info, warn};
use open_bracket::{EngineActor, JsonFileStore, TournamentEngine};
use pico_args::Arguments;
use tokio::net::TcpListener;

const HELP: &str = "\
Run a chat-style tournament tracker server

USAGE:
  ob_server [OPTIONS]

OPTIONS:
  --bind     IP:PORT   Server socket bind address  [default: env SERVER_BIND or 127.0.0.1:6667]
  --records  PATH      Tournament records file     [default: env RECORDS_FILE or records.json]
  --prefix   STR       Command prefix              [default: .]

FLAGS:
  -h, --help           Print help information

ENVIRONMENT:
  SERVER_BIND          Server bind address (e.g., 0.0.0.0:6667)
  RECORDS_FILE         Path to the JSON records file
";

struct Args {
    bind: SocketAddr,
    records: String,
    prefix: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        bind: pargs.value_from_str("--bind").unwrap_or_else(|_| {
            std::env::var("SERVER_BIND")
                .unwrap_or_else(|_| "127.0.0.1:6667".to_string())
                .parse()
                .expect("Invalid SERVER_BIND address")
        }),
        records: pargs.value_from_str("--records").unwrap_or_else(|_| {
            std::env::var("RECORDS_FILE").unwrap_or_else(|_| "records.json".to_string())
        }),
        prefix: pargs
            .value_from_str("--prefix")
            .unwrap_or_else(|_| ".".to_string()),
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    info!("Loading records from {}", args.records);
    let store = Box::new(JsonFileStore::new(&args.records));
    let engine = TournamentEngine::from_store(store).with_prefix(args.prefix.clone());
    let nick = engine.bot_nick().to_string();

    let (actor, handle) = EngineActor::new(engine);
    tokio::spawn(actor.run());

    let listener = TcpListener::bind(args.bind).await?;
    info!("{nick} listening at {}", args.bind);

    loop {
        let (stream, peer) = listener.accept().await?;
        info!("connection from {peer}");
        let session = chat::Session::new(handle.clone(), args.prefix.clone(), "server".to_string());
        tokio::spawn(async move {
            if let Err(err) = session.run(stream).await {
                warn!("session {peer} ended with error: {err}");
            }
        });
    }
}
