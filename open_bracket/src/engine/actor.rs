//! Serialized command processing over an mpsc inbox.
//!
//! Chat messages can arrive close together; the actor owns the engine and
//! fully processes one command (state read, mutation, persistence
//! trigger) before receiving the next, so no two commands interleave
//! their read-modify-write sequence.

use chrono::Utc;
use log::info;
use tokio::sync::{mpsc, oneshot};

use super::commands::Reply;
use super::manager::TournamentEngine;

/// Messages the engine actor accepts.
#[derive(Debug)]
pub enum EngineMessage {
    /// A chat command to process.
    Command {
        identity: String,
        target: String,
        name: String,
        args: Vec<String>,
        response: oneshot::Sender<Reply>,
    },
}

/// Cloneable handle for submitting commands to the actor.
#[derive(Clone)]
pub struct EngineHandle {
    sender: mpsc::Sender<EngineMessage>,
}

impl EngineHandle {
    /// Submit one command and wait for its reply.
    ///
    /// Returns `None` when the actor has shut down.
    pub async fn command(
        &self,
        identity: &str,
        target: &str,
        name: &str,
        args: Vec<String>,
    ) -> Option<Reply> {
        let (response, receiver) = oneshot::channel();
        let message = EngineMessage::Command {
            identity: identity.to_string(),
            target: target.to_string(),
            name: name.to_string(),
            args,
            response,
        };
        self.sender.send(message).await.ok()?;
        receiver.await.ok()
    }
}

/// Owns the engine and drains the inbox one command at a time.
pub struct EngineActor {
    engine: TournamentEngine,
    inbox: mpsc::Receiver<EngineMessage>,
}

impl EngineActor {
    /// Pair an actor with its handle.
    pub fn new(engine: TournamentEngine) -> (Self, EngineHandle) {
        let (sender, inbox) = mpsc::channel(64);
        (Self { engine, inbox }, EngineHandle { sender })
    }

    /// Run until every handle is dropped.
    ///
    /// Persistence runs inline so a command's snapshot write lands before
    /// the next command is received.
    pub async fn run(mut self) {
        info!("engine actor running as {}", self.engine.bot_nick());
        while let Some(message) = self.inbox.recv().await {
            match message {
                EngineMessage::Command {
                    identity,
                    target,
                    name,
                    args,
                    response,
                } => {
                    let reply = self
                        .engine
                        .handle(&identity, &target, &name, &args, Utc::now());
                    let _ = response.send(reply);
                }
            }
        }
        info!("engine actor stopped");
    }
}
