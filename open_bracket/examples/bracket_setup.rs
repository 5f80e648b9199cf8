//! Seed a four-team single-elimination bracket and play it to the end.
//!
//! Run with: cargo run --example bracket_setup

use chrono::Utc;
use open_bracket::{MemoryStore, Snapshot, TournamentEngine};

fn show(engine: &mut TournamentEngine, identity: &str, name: &str, args: &[&str]) {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let reply = engine.handle(identity, "#demo", name, &args, Utc::now());
    for line in reply.lines {
        println!("{line}");
    }
}

fn main() {
    let mut state = Snapshot::default();
    state.tournament.team_size_limit = Some(1);
    state.tournament.current_round = Some("Semifinals".to_string());
    let mut engine = TournamentEngine::new(state, Box::new(MemoryStore::default()));

    for nick in ["ada", "bob", "cal", "dee"] {
        show(&mut engine, &format!("{nick}!~u@example"), "register", &[]);
    }

    engine.add_match(
        "SF1",
        None,
        vec!["ada".to_string(), "bob".to_string()],
        Some("F".to_string()),
        None,
    );
    engine.add_match(
        "SF2",
        None,
        vec!["cal".to_string(), "dee".to_string()],
        Some("F".to_string()),
        None,
    );
    engine.add_match("F", None, Vec::new(), None, None);

    show(&mut engine, "obs!~u@example", "remaining", &[]);

    // Losers confirm, so every result is authoritative immediately.
    show(&mut engine, "bob!~u@example", "result", &["SF1", "ada"]);
    show(&mut engine, "cal!~u@example", "result", &["SF2", "dee"]);
    show(&mut engine, "dee!~u@example", "result", &["F", "ada"]);

    show(&mut engine, "obs!~u@example", "teams", &[]);
    show(&mut engine, "obs!~u@example", "remaining", &[]);
}
