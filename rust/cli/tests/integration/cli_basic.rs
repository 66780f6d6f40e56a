use serial_test::serial;

use crate::helpers::cli_runner::{CliRunner, clear_player_env};
use crate::helpers::sessions::{TWO_HANDS, TWO_HANDS_REPLIES};

#[test]
#[serial]
fn help_and_version_exit_zero() {
    let cli = CliRunner::new();
    let help = cli.run(&["--help"]);
    assert_eq!(help.exit_code, 0);
    assert!(help.stdout.contains("Usage"));
    assert!(help.stdout.contains("replay"));

    let version = cli.run(&["--version"]);
    assert_eq!(version.exit_code, 0);
    assert!(version.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
#[serial]
fn unknown_subcommand_exits_two() {
    let res = CliRunner::new().run(&["deal"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(!res.stderr.is_empty());
}

#[test]
#[serial]
fn replay_answers_like_a_live_session() {
    clear_player_env();
    let cli = CliRunner::new();
    let path = cli.write_file("session.txt", TWO_HANDS);
    let res = cli.run(&["replay", "--input", path.to_str().unwrap()]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, TWO_HANDS_REPLIES);
    assert!(res.stderr.is_empty());
}

#[test]
#[serial]
fn replay_warns_about_protocol_faults() {
    clear_player_env();
    let cli = CliRunner::new();
    let path = cli.write_file("faulty.txt", "new_hand\ncard_player 1X\nplay? 12 x\n");
    let res = cli.run(&["replay", "--input", path.to_str().unwrap()]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "stand\n");
    assert!(res.stderr.contains("2 protocol fault(s)"), "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn replay_of_missing_file_exits_two() {
    clear_player_env();
    let cli = CliRunner::new();
    let missing = cli.dir().join("nope.txt");
    let res = cli.run(&["replay", "--input", missing.to_str().unwrap()]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Error:"), "stderr: {}", res.stderr);
    assert_eq!(res.stderr.matches("nope.txt").count(), 1);
}

#[test]
#[serial]
fn invalid_flags_are_configuration_errors() {
    clear_player_env();
    let cli = CliRunner::new();
    for args in [
        ["cfg", "--flat-bet", "0"],
        ["cfg", "--pair-match", "suits"],
        ["cfg", "--insurance", "sometimes"],
        ["cfg", "--bet-policy", "martingale"],
    ] {
        let res = cli.run(&args);
        assert_eq!(res.exit_code, 2, "args {:?}", args);
        assert!(
            res.stderr.contains("Invalid configuration"),
            "args {:?}, stderr: {}",
            args,
            res.stderr
        );
    }
}

#[test]
#[serial]
fn unknown_strategy_exits_two() {
    clear_player_env();
    let cli = CliRunner::new();
    let path = cli.write_file("session.txt", "bet?\n");
    let res = cli.run(&[
        "replay",
        "--input",
        path.to_str().unwrap(),
        "--strategy",
        "basic",
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("basic"));
}

#[test]
#[serial]
fn play_speaks_the_protocol_on_stdin_and_stdout() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play"], TWO_HANDS);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, TWO_HANDS_REPLIES);
}

#[test]
#[serial]
fn verbose_diagnostics_stay_off_stdout() {
    let cli = CliRunner::new();
    let res = cli.run_with_input(&["play", "--verbose"], TWO_HANDS);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, TWO_HANDS_REPLIES);
    assert!(res.stderr.contains("session finished"), "stderr: {}", res.stderr);
}

#[test]
#[serial]
fn play_with_empty_input_exits_zero() {
    let res = CliRunner::new().run_with_input(&["play"], "");
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.is_empty());
}
