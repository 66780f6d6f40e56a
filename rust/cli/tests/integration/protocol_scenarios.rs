use std::io::Cursor;

use acefive_ai::insurance::InsurancePolicy;
use acefive_ai::play::PlayRules;
use acefive_ai::{StrategyOptions, create_strategy};
use acefive_cli::CliError;
use acefive_cli::dispatcher::{Dispatcher, Step};
use acefive_cli::logging::capture;
use acefive_cli::transcript::Transcript;
use acefive_engine::protocol::{Action, Reply};
use tracing::Level;

fn dispatcher_with(options: StrategyOptions) -> Dispatcher {
    let strategy = create_strategy("ace-five", &options).expect("ace-five strategy");
    Dispatcher::new(strategy, 32, Transcript::disabled())
}

fn dispatcher() -> Dispatcher {
    dispatcher_with(StrategyOptions::default())
}

fn session(lines: &[&str]) -> String {
    let mut input = Cursor::new(lines.join("\n") + "\n");
    let mut out = Vec::new();
    dispatcher()
        .run(&mut input, &mut out)
        .expect("session should not fail");
    String::from_utf8(out).expect("utf-8 replies")
}

const STAND: Step = Step::Reply(Reply::Play(Action::Stand));

#[test]
fn soft_sixteen_against_four_doubles() {
    let out = session(&[
        "shuffling",
        "new_hand",
        "card_player AH",
        "card_player 5D",
        "play? -16 4",
    ]);
    assert_eq!(out, "double\n");
}

#[test]
fn hard_twenty_against_ten_stands() {
    let out = session(&[
        "shuffling",
        "new_hand",
        "card_player TH",
        "card_player TD",
        "play? 20 10",
    ]);
    assert_eq!(out, "stand\n");
}

#[test]
fn eights_split_and_resplit_against_every_upcard() {
    for dealer in 2..=11 {
        let play = format!("play? 16 {}", dealer);
        let out = session(&[
            "shuffling",
            "new_hand 1 0",
            "card_player 8H",
            "card_dealer_up 9C",
            "card_player 8D",
            &play,
            "player_split_ok1",
            "card_player 8S 1",
            &play,
        ]);
        assert_eq!(out, "split\nsplit\n", "dealer {}", dealer);
    }
}

#[test]
fn split_hand_plays_on_with_its_new_second_card() {
    let out = session(&[
        "new_hand",
        "card_player 8H",
        "card_player 8D",
        "play? 16 10",
        "player_split_ok",
        "card_player 3S",
        "play? 11 10",
    ]);
    assert_eq!(out, "split\ndouble\n");
}

#[test]
fn flat_bet_regardless_of_count() {
    let mut lines = vec!["shuffling", "bet?"];
    lines.extend(std::iter::repeat_n("card_dealer 5H", 6));
    lines.push("bet?");
    lines.extend(std::iter::repeat_n("card_player AS", 12));
    lines.push("bet?");
    assert_eq!(session(&lines), "1\n1\n1\n");
}

#[test]
fn insurance_is_always_declined() {
    let mut lines = vec!["shuffling", "insurance?"];
    lines.extend(std::iter::repeat_n("card_dealer 5C", 10));
    lines.push("insurance?");
    assert_eq!(session(&lines), "no\nno\n");
}

#[test]
fn malformed_play_stands_and_leaves_state_alone() {
    let mut d = dispatcher();
    for line in ["shuffling", "new_hand", "card_player 5H", "card_player 7D"] {
        d.handle_line(line);
    }
    let before = d.table().clone();

    let (step, logs) = capture(|| d.handle_line("play? 12 x"));
    assert_eq!(step, STAND);
    assert_eq!(d.table(), &before);
    assert_eq!(d.summary().protocol_faults, 1);
    assert!(
        logs.iter()
            .any(|e| e.level == Level::WARN && e.message.contains("malformed play query")),
        "expected a warning, got {:?}",
        logs
    );

    for bad in ["play?", "play? 12", "play? twelve 4", "play? 12 4 4"] {
        assert_eq!(d.handle_line(bad), STAND, "line {:?}", bad);
        assert_eq!(d.table(), &before);
    }
}

#[test]
fn unknown_queries_never_touch_state() {
    let mut d = dispatcher();
    for line in ["shuffling", "card_dealer 5H", "new_hand", "card_player 9H"] {
        d.handle_line(line);
    }
    let before = d.table().clone();
    for query in ["surrender?", "even_money?", "what?"] {
        assert_eq!(d.handle_line(query), Step::Reply(Reply::Decline));
        assert_eq!(d.table(), &before);
    }
}

#[test]
fn invalid_command_is_logged_without_a_reply() {
    let mut d = dispatcher();
    let (step, logs) = capture(|| d.handle_line("invalid_command"));
    assert_eq!(step, Step::Continue);
    assert!(logs.iter().any(|e| e.level == Level::WARN));

    assert_eq!(session(&["bet?", "invalid_command", "insurance?"]), "1\nno\n");
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let mut input = Cursor::new("shuffling\nnew_hand\ncard_player 5H");
    let mut out = Vec::new();
    let mut d = dispatcher();
    let summary = d.run(&mut input, &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(summary.lines, 3);
    assert_eq!(summary.hands, 1);
    assert_eq!(d.table().shoe.count(), 1);
}

#[test]
fn garbled_bytes_are_a_protocol_fault_not_a_stream_failure() {
    let mut input = Cursor::new(
        b"new_hand\ncard_player \xff\xfe\ncard_player 9H\nplay? \xff 4\nbet?\n".to_vec(),
    );
    let mut out = Vec::new();
    let mut d = dispatcher();
    let summary = d.run(&mut input, &mut out).expect("session survives bad bytes");
    assert_eq!(String::from_utf8(out).unwrap(), "stand\n1\n");
    assert_eq!(summary.protocol_faults, 2);
    assert_eq!(d.table().hand.cards_dealt(), 2);
}

#[test]
fn lines_after_bye_are_not_read() {
    assert_eq!(session(&["bet?", "bye", "bet?", "insurance?"]), "1\n");
}

#[test]
fn count_survives_new_hands_and_resets_on_shuffle() {
    let mut d = dispatcher();
    for line in [
        "shuffling",
        "new_hand",
        "card_player 5H",
        "card_dealer 5S",
        "card_player AH",
        "new_hand",
        "card_player 5C",
    ] {
        d.handle_line(line);
    }
    assert_eq!(d.table().shoe.count(), 2);
    assert_eq!(d.table().hand.cards_dealt(), 1);
    d.handle_line("shuffling");
    assert_eq!(d.table().shoe.count(), 0);
}

#[test]
fn configured_surrender_and_insurance_reach_the_wire() {
    let options = StrategyOptions {
        rules: PlayRules {
            surrender_hard16_vs_ten: true,
            ..PlayRules::default()
        },
        insurance: InsurancePolicy::Always,
        ..StrategyOptions::default()
    };
    let mut input =
        Cursor::new("new_hand\ncard_player TH\ncard_player 6D\nplay? 16 10\ninsurance?\n");
    let mut out = Vec::new();
    dispatcher_with(options).run(&mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "surrender\nyes\n");
}

#[test]
fn every_reply_is_flushed_before_the_next_read() {
    use std::io::Write;

    #[derive(Default)]
    struct FlushCounter {
        data: Vec<u8>,
        flushes: usize,
    }

    impl Write for FlushCounter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.data.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    let mut input = Cursor::new("bet?\ninsurance?\nshuffling\nplay? 20 10\n");
    let mut out = FlushCounter::default();
    dispatcher().run(&mut input, &mut out).unwrap();
    assert_eq!(out.flushes, 3);
    assert_eq!(String::from_utf8(out.data).unwrap(), "1\nno\nstand\n");
}

#[test]
fn closed_reply_stream_is_fatal() {
    struct Closed;

    impl std::io::Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut input = Cursor::new("bet?\n");
    let result = dispatcher().run(&mut input, &mut Closed);
    assert!(matches!(result, Err(CliError::Io(_))));
}
