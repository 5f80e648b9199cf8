//! End-to-end command flows through the engine facade.

use chrono::{DateTime, Utc};
use open_bracket::{MemoryStore, Snapshot, TournamentEngine, timing};

fn now() -> DateTime<Utc> {
    timing::parse_time("2014-01-01 00:00:00").unwrap()
}

fn run(engine: &mut TournamentEngine, identity: &str, name: &str, args: &[&str]) -> Vec<String> {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    engine
        .handle(identity, "#tournament", name, &args, now())
        .lines
}

fn solo_engine() -> (TournamentEngine, MemoryStore) {
    let store = MemoryStore::default();
    let mut state = Snapshot::default();
    state.tournament.team_size_limit = Some(1);
    (
        TournamentEngine::new(state, Box::new(store.clone())),
        store,
    )
}

#[test]
fn test_one_v_one_final_confirmed_by_loser() {
    let (mut engine, store) = solo_engine();

    // Two players register themselves.
    let lines = run(&mut engine, "Alice!~a@h", "register", &[]);
    assert!(lines[0].contains("Team Alice successfully registered by Alice"));
    run(&mut engine, "Bob!~b@h", "register", &[]);

    let alice = engine.state().teams.lookup("Alice").unwrap();
    assert_eq!(alice.members, vec!["Alice"]);
    assert_eq!(alice.creator, "Alice");

    engine.add_match(
        "F",
        None,
        vec!["Alice".to_string(), "Bob".to_string()],
        None,
        None,
    );

    // Bob lost and says so: the result is authoritative immediately.
    let lines = run(&mut engine, "Bob!~b@h", "result", &["F", "Alice"]);
    assert_eq!(lines, vec!["F won by Alice. Congratulations!"]);

    let state = engine.state();
    assert_eq!(state.matches.lookup("F").unwrap().winner.as_deref(), Some("Alice"));
    let alice = state.teams.lookup("Alice").unwrap();
    assert_eq!((alice.wins, alice.games, alice.attended), (1, 1, 1));
    let bob = state.teams.lookup("Bob").unwrap();
    assert_eq!((bob.losses, bob.games, bob.attended), (1, 1, 1));
    assert!(state.unconfirmed_results.get("F").is_none());

    // The close was persisted.
    let saved = store.saved().unwrap();
    assert_eq!(saved.teams.lookup("Alice").unwrap().wins, 1);
}

#[test]
fn test_one_v_one_winner_report_stays_unconfirmed() {
    let (mut engine, _store) = solo_engine();
    run(&mut engine, "Alice!~a@h", "register", &[]);
    run(&mut engine, "Bob!~b@h", "register", &[]);
    engine.add_match(
        "F",
        None,
        vec!["Alice".to_string(), "Bob".to_string()],
        None,
        None,
    );

    // Alice claims her own win; nobody against their interest has spoken.
    let lines = run(&mut engine, "Alice!~a@h", "result", &["F", "Alice"]);
    assert_eq!(
        lines,
        vec!["Result must be confirmed by an admin or a loser in the match"]
    );

    let state = engine.state();
    assert!(state.matches.lookup("F").unwrap().is_open());
    assert_eq!(
        state.unconfirmed_results.get("F"),
        Some(&"Alice".to_string())
    );
    assert_eq!(state.teams.lookup("Alice").unwrap().games, 0);

    // The unconfirmed view shows the pending claim.
    let lines = run(&mut engine, "Carol!~c@h", "unconfirmed", &[]);
    assert_eq!(lines, vec!["F: Alice (unconfirmed)"]);
}

#[test]
fn test_admin_confirms_after_contested_claims() {
    let store = MemoryStore::default();
    let mut state = Snapshot::default();
    state.tournament.team_size_limit = Some(1);
    state.bot.admins.insert("ops".to_string());
    let mut engine = TournamentEngine::new(state, Box::new(store));

    run(&mut engine, "Alice!~a@h", "register", &[]);
    run(&mut engine, "Bob!~b@h", "register", &[]);
    engine.add_match(
        "F",
        None,
        vec!["Alice".to_string(), "Bob".to_string()],
        None,
        None,
    );

    // A bystander cannot close anything; their claim is merely recorded.
    let lines = run(&mut engine, "Carol!~c@h", "result", &["F", "Bob"]);
    assert_eq!(
        lines,
        vec!["Result must be confirmed by an admin or a loser in the match"]
    );
    assert!(engine.state().matches.lookup("F").unwrap().is_open());

    // The admin's report supersedes the recorded claim and closes the
    // match with the admin's winner.
    let lines = run(&mut engine, "ops!~o@h", "result", &["F", "Alice"]);
    assert_eq!(lines, vec!["F won by Alice. Congratulations!"]);
    let state = engine.state();
    assert_eq!(state.matches.lookup("F").unwrap().winner.as_deref(), Some("Alice"));
    assert!(state.unconfirmed_results.get("F").is_none());
}

#[test]
fn test_winner_advances_into_next_match() {
    let (mut engine, _store) = solo_engine();
    for player in ["A!~x@h", "B!~x@h", "C!~x@h", "D!~x@h"] {
        run(&mut engine, player, "register", &[]);
    }
    engine.add_match(
        "SF1",
        None,
        vec!["A".to_string(), "B".to_string()],
        Some("F".to_string()),
        None,
    );
    engine.add_match(
        "SF2",
        None,
        vec!["C".to_string(), "D".to_string()],
        Some("F".to_string()),
        None,
    );
    engine.add_match("F", None, Vec::new(), None, None);

    run(&mut engine, "B!~x@h", "result", &["SF1", "A"]);
    run(&mut engine, "C!~x@h", "result", &["SF2", "D"]);

    assert_eq!(engine.state().matches.lookup("F").unwrap().teams, vec!["A", "D"]);

    // The final is the only match left.
    let lines = run(&mut engine, "A!~x@h", "remaining", &[]);
    assert_eq!(lines, vec!["F: A vs D - time TBA"]);

    run(&mut engine, "A!~x@h", "result", &["F", "D"]);
    let d = engine.state().teams.lookup("D").unwrap();
    assert_eq!((d.wins, d.games), (2, 2));
    let lines = run(&mut engine, "A!~x@h", "remaining", &[]);
    assert_eq!(lines, vec!["No remaining matches"]);
}

#[test]
fn test_result_validation_messages() {
    let (mut engine, _store) = solo_engine();
    run(&mut engine, "Alice!~a@h", "register", &[]);
    engine.add_match("F", None, vec!["Alice".to_string()], None, None);

    assert_eq!(
        run(&mut engine, "Alice!~a@h", "result", &["F"]),
        vec!["Expected: <command> <match-id> <winning-team-name>"]
    );
    assert_eq!(
        run(&mut engine, "Alice!~a@h", "result", &["Ghost", "Alice"]),
        vec!["Unable to find match Ghost"]
    );
    assert_eq!(
        run(&mut engine, "Alice!~a@h", "result", &["F", "Nobody"]),
        vec!["Unable to find team Nobody"]
    );
}

#[test]
fn test_closed_match_rejects_late_report() {
    let (mut engine, _store) = solo_engine();
    run(&mut engine, "Alice!~a@h", "register", &[]);
    run(&mut engine, "Bob!~b@h", "register", &[]);
    engine.add_match(
        "F",
        None,
        vec!["Alice".to_string(), "Bob".to_string()],
        None,
        None,
    );
    run(&mut engine, "Bob!~b@h", "result", &["F", "Alice"]);

    assert_eq!(
        run(&mut engine, "Alice!~a@h", "result", &["F", "Bob"]),
        vec!["Match F is already closed"]
    );
    // Post-closure counters unchanged by the rejected report.
    let state = engine.state();
    assert_eq!(state.teams.lookup("Alice").unwrap().wins, 1);
    assert_eq!(state.teams.lookup("Bob").unwrap().losses, 1);
}

#[test]
fn test_reload_picks_up_persisted_records() {
    let mut persisted = Snapshot::default();
    persisted.tournament.team_size_limit = Some(1);
    persisted
        .teams
        .create_team("Carry", vec!["Carry".to_string()], "Carry");
    persisted.rules.push("double elimination is a lie".to_string());
    let store = MemoryStore::new(persisted);

    let mut engine = TournamentEngine::new(Snapshot::default(), Box::new(store));
    assert_eq!(
        run(&mut engine, "a!b@c", "teams", &[]),
        vec!["No teams registered"]
    );

    assert_eq!(run(&mut engine, "a!b@c", "reload", &[]), vec!["Records reloaded"]);
    assert_eq!(run(&mut engine, "a!b@c", "teams", &[]), vec!["Teams: Carry"]);
    assert_eq!(
        run(&mut engine, "a!b@c", "rules", &[]),
        vec!["1. double elimination is a lie"]
    );
}
