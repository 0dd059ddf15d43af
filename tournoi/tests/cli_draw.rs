//! CLI tests for one-shot draw commands.
//!
//! Spawns the tournoi binary in a temp directory and verifies exit codes, the
//! state file, and the audit journal.

use std::process::Command;

use tournoi::core::geography::Geography;
use tournoi::core::types::MatchType;
use tournoi::exit_codes;
use tournoi::io::state_store::load_state;
use tournoi::test_support::TempTournament;

fn tournoi(temp: &TempTournament, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tournoi"))
        .current_dir(temp.root())
        .args(args)
        .output()
        .expect("run tournoi")
}

#[test]
fn kpessekou_writes_default_state_and_journal() {
    let temp = TempTournament::new().expect("temp");

    let out = tournoi(&temp, &["kpessekou", "--seed", "11"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Playoff city 1:"));

    let state = load_state(&temp.state_path, &Geography::togo());
    assert_eq!(state.history.len(), 1);
    assert_eq!(state.history[0].match_type, MatchType::Kpessekou);
    assert_eq!(state.used_cities.len(), 2);

    let lines = temp.journal_lines().expect("journal");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(" - INFO: Match Kpessekou : "));
}

#[test]
fn zobibi_accepts_names_and_numbers() {
    let temp = TempTournament::new().expect("temp");

    let out = tournoi(&temp, &["zobibi", "maritime", "4", "--seed", "2"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));

    let state = load_state(&temp.state_path, &Geography::togo());
    let record = &state.history[0];
    assert_eq!(record.region1, "Maritime");
    assert_eq!(record.region2, "Kara");
    assert_ne!(record.city1, record.city2);
}

#[test]
fn zobibi_with_same_region_is_invalid() {
    let temp = TempTournament::new().expect("temp");

    let out = tournoi(&temp, &["zobibi", "Kara", "kara"]);
    assert_eq!(out.status.code(), Some(exit_codes::INVALID));
    assert!(!temp.state_path.exists());
}

#[test]
fn stats_reads_existing_history() {
    let temp = TempTournament::new().expect("temp");
    for seed in ["1", "2", "3"] {
        let out = tournoi(&temp, &["kpessekou", "--seed", seed]);
        assert_eq!(out.status.code(), Some(exit_codes::OK));
    }

    let out = tournoi(&temp, &["stats"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total matches played: 3"));
    assert!(stdout.contains("- Kpessekou: 3"));
    assert!(stdout.contains("- Zobibi: 0"));
}

#[test]
fn config_file_redirects_paths() {
    let temp = TempTournament::new().expect("temp");
    std::fs::write(
        temp.root().join("tournoi.toml"),
        "state_path = \"saison/etat.json\"\njournal_path = \"saison/journal.log\"\n",
    )
    .expect("write config");

    let out = tournoi(&temp, &["kpessekou"]);
    assert_eq!(out.status.code(), Some(exit_codes::OK));
    assert!(temp.root().join("saison/etat.json").is_file());
    assert!(temp.root().join("saison/journal.log").is_file());
    assert!(!temp.state_path.exists());
}

#[test]
fn menu_runs_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;

    let temp = TempTournament::new().expect("temp");
    let mut child = Command::new(env!("CARGO_BIN_EXE_tournoi"))
        .current_dir(temp.root())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn tournoi");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"1\n3\n4\n")
        .expect("write stdin");
    let out = child.wait_with_output().expect("wait");

    assert_eq!(out.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Total matches played: 1"));
    assert_eq!(temp.journal_lines().expect("journal").len(), 1);
}
