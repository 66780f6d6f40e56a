use std::fs;

use serial_test::serial;

use crate::helpers::cli_runner::{CliRunner, clear_player_env};
use crate::helpers::sessions::{TWO_HANDS, TWO_HANDS_PLAYER_CARDS, TWO_HANDS_REPLIES};

#[test]
#[serial]
fn transcript_and_cards_log_are_written() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file("session.txt", TWO_HANDS);
    let transcript = cli.dir().join("logs/nested/transcript.txt");
    let cards = cli.dir().join("logs/cards.txt");

    let res = cli.run(&[
        "replay",
        "--input",
        input.to_str().unwrap(),
        "--transcript",
        transcript.to_str().unwrap(),
        "--cards-log",
        cards.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 0, "stderr: {}", res.stderr);
    assert_eq!(res.stdout, TWO_HANDS_REPLIES);

    // Everything up to and including `bye`; the trailing query is never read.
    let expected_transcript = TWO_HANDS.trim_end_matches("bet?\n");
    assert_eq!(fs::read_to_string(&transcript).unwrap(), expected_transcript);
    assert_eq!(fs::read_to_string(&cards).unwrap(), TWO_HANDS_PLAYER_CARDS);
}

#[test]
#[serial]
fn replaying_a_transcript_reproduces_it() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file("session.txt", TWO_HANDS);
    let first = cli.dir().join("first.txt");
    let second = cli.dir().join("second.txt");

    let res = cli.run(&[
        "replay",
        "--input",
        input.to_str().unwrap(),
        "--transcript",
        first.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 0);
    let res = cli.run(&[
        "replay",
        "--input",
        first.to_str().unwrap(),
        "--transcript",
        second.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, TWO_HANDS_REPLIES);
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
}

#[test]
#[serial]
fn cards_log_skips_dealer_and_unreadable_cards() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file(
        "session.txt",
        "new_hand\ncard_dealer_up KS\ncard_player 9C\ncard_player ??\ncard_dealer_hole 2H\ncard_player 2D\n",
    );
    let cards = cli.dir().join("cards.txt");

    let res = cli.run(&[
        "replay",
        "--input",
        input.to_str().unwrap(),
        "--cards-log",
        cards.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.is_empty());
    assert_eq!(fs::read_to_string(&cards).unwrap(), "9C\n2D\n");
}

#[test]
#[serial]
fn side_channel_paths_come_from_the_environment() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file("session.txt", "new_hand\ncard_player 5S\nbye\n");
    let cards = cli.dir().join("env-cards.txt");
    unsafe {
        std::env::set_var("ACEFIVE_CARDS_LOG", &cards);
    }

    let res = cli.run(&["replay", "--input", input.to_str().unwrap()]);
    clear_player_env();
    assert_eq!(res.exit_code, 0);
    assert_eq!(fs::read_to_string(&cards).unwrap(), "5S\n");
}

#[test]
#[serial]
fn unwritable_transcript_path_is_an_error() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file("session.txt", "bet?\n");
    // A regular file cannot be used as a parent directory.
    let blocker = cli.write_file("blocker", "");
    let transcript = blocker.join("transcript.txt");

    let res = cli.run(&[
        "replay",
        "--input",
        input.to_str().unwrap(),
        "--transcript",
        transcript.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
    assert!(res.stderr.contains("Error:"));
}

#[test]
#[serial]
fn cards_log_normalises_two_digit_tens() {
    clear_player_env();
    let cli = CliRunner::new();
    let input = cli.write_file(
        "session.txt",
        "new_hand 1 0\ncard_player 10H\ncard_dealer_up 10C\ncard_player 10D\nplay? 20 10\n",
    );
    let cards = cli.dir().join("cards.txt");

    let res = cli.run(&[
        "replay",
        "--input",
        input.to_str().unwrap(),
        "--cards-log",
        cards.to_str().unwrap(),
    ]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "stand\n");
    assert!(!res.stderr.contains("protocol fault"), "stderr: {}", res.stderr);
    assert_eq!(fs::read_to_string(&cards).unwrap(), "TH\nTD\n");
}
