//! Decision parsing and channel source tests.

use core::time::Duration;
use std::sync::mpsc::Receiver;
use std::thread::{self, JoinHandle};

use bjtable::{
    Action, Card, DecisionError, DecisionHandle, DecisionRequest, DecisionSource, GameOptions,
    GameSession, Rank, Shoe, Status, Suit, channel,
};

#[derive(Debug, Clone, Copy)]
enum Answer {
    Reply(&'static str, &'static str),
    Cancel,
}

/// Answers each incoming request with the next batch of `script`, checking
/// the request is for the expected player. Returns the requests it saw.
fn relay(
    handle: DecisionHandle,
    requests: Receiver<DecisionRequest>,
    script: Vec<(&'static str, Vec<Answer>)>,
) -> JoinHandle<Vec<DecisionRequest>> {
    thread::spawn(move || {
        let mut seen = Vec::new();
        for (expected, answers) in script {
            let request = requests.recv().unwrap();
            assert_eq!(request.player_id, expected);
            for answer in answers {
                match answer {
                    Answer::Reply(player_id, action) => {
                        handle.reply(&request, player_id, action);
                    }
                    Answer::Cancel => {
                        handle.cancel(&request);
                    }
                }
            }
            seen.push(request);
        }
        seen
    })
}

fn stacked_session(draws: &[Card], players: &[&str]) -> GameSession {
    let mut session =
        GameSession::with_shoe(GameOptions::default(), "dealer", Shoe::stacked(draws));
    for id in players {
        session.add_player(*id).unwrap();
    }
    session
}

#[test]
fn actions_parse_case_insensitively() {
    assert_eq!("hit".parse::<Action>().unwrap(), Action::Hit);
    assert_eq!(" HIT ".parse::<Action>().unwrap(), Action::Hit);
    assert_eq!("Stay".parse::<Action>().unwrap(), Action::Stay);
    assert_eq!("stand".parse::<Action>().unwrap(), Action::Stay);
    assert_eq!(
        "split".parse::<Action>().unwrap_err(),
        DecisionError::Unrecognized("split".to_string())
    );
}

#[test]
fn channel_source_only_accepts_the_requested_player() {
    let (handle, requests, mut source) = channel();
    let relay = relay(
        handle,
        requests,
        vec![
            (
                "alice",
                vec![Answer::Reply("bob", "hit"), Answer::Reply("alice", "stay")],
            ),
            ("alice", vec![Answer::Reply("alice", "fold")]),
        ],
    );

    assert_eq!(source.request_action("alice").unwrap(), Action::Stay);
    assert_eq!(
        source.request_action("alice").unwrap_err(),
        DecisionError::Unrecognized("fold".to_string())
    );

    let seen = relay.join().unwrap();
    assert_eq!(seen[0].seq, 0);
    assert_eq!(seen[1].seq, 1);
}

#[test]
fn cancel_unblocks_a_waiting_request() {
    let (handle, requests, mut source) = channel();
    let canceller = thread::spawn(move || {
        let request = requests.recv().unwrap();
        thread::sleep(Duration::from_millis(50));
        handle.cancel(&request)
    });

    assert_eq!(
        source.request_action("alice").unwrap_err(),
        DecisionError::Cancelled
    );
    assert!(canceller.join().unwrap());
}

#[test]
fn cancel_after_a_reply_does_not_reach_the_next_request() {
    let (handle, requests, mut source) = channel();
    let relay = relay(
        handle,
        requests,
        vec![
            (
                "alice",
                vec![Answer::Reply("alice", "stay"), Answer::Cancel],
            ),
            ("bob", vec![Answer::Reply("bob", "hit")]),
        ],
    );

    assert_eq!(source.request_action("alice").unwrap(), Action::Stay);
    assert_eq!(source.request_action("bob").unwrap(), Action::Hit);
    relay.join().unwrap();
}

#[test]
fn hangup_counts_as_cancellation() {
    let (handle, requests, mut source) = channel();
    drop(handle);
    assert_eq!(
        source.request_action("alice").unwrap_err(),
        DecisionError::Cancelled
    );

    drop(requests);
    assert_eq!(
        source.request_action("alice").unwrap_err(),
        DecisionError::Cancelled
    );
}

#[test]
fn cancelled_player_stays_mid_round() {
    let mut session = stacked_session(
        &[
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ],
        &["alice"],
    );

    let (handle, requests, mut source) = channel();
    let canceller = thread::spawn(move || {
        let request = requests.recv().unwrap();
        thread::sleep(Duration::from_millis(50));
        handle.cancel(&request);
    });

    session.play_round(&mut source, &mut ()).unwrap();
    canceller.join().unwrap();

    let alice = session.player("alice").unwrap();
    assert_eq!(alice.hand().unwrap().len(), 2);
    assert_eq!(alice.status(), Status::Lost);
    assert_eq!(session.dealer().status(), Status::Won);
}

#[test]
fn extra_replies_do_not_carry_into_the_next_round() {
    let mut session = stacked_session(
        &[
            // Round one: alice 15, dealer 18, alice hits a king and busts.
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::King, Suit::Hearts),
            // Round two: alice 17, dealer 18.
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Eight, Suit::Diamonds),
            Card::new(Rank::Two, Suit::Clubs),
        ],
        &["alice"],
    );

    let (handle, requests, mut source) = channel();
    let relay = relay(
        handle,
        requests,
        vec![
            (
                "alice",
                vec![Answer::Reply("alice", "hit"), Answer::Reply("alice", "hit")],
            ),
            ("alice", vec![Answer::Reply("alice", "stay")]),
        ],
    );

    session.play_round(&mut source, &mut ()).unwrap();
    assert_eq!(session.player("alice").unwrap().hand().unwrap().len(), 3);
    assert_eq!(session.player("alice").unwrap().status(), Status::Lost);

    session.reset();
    session.play_round(&mut source, &mut ()).unwrap();
    let seen = relay.join().unwrap();

    let alice = session.player("alice").unwrap();
    assert_eq!(alice.hand().unwrap().len(), 2);
    assert_eq!(alice.status(), Status::Lost);
    assert_eq!(session.dealer().status(), Status::Won);
    assert_eq!(session.cards_remaining(), 1);
    assert_eq!(seen.len(), 2);
}

#[test]
fn channel_source_drives_a_round_from_another_thread() {
    let mut session = stacked_session(
        &[
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Ten, Suit::Spades),
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Five, Suit::Clubs),
        ],
        &["alice"],
    );

    let (handle, requests, mut source) = channel();
    let relay = relay(
        handle,
        requests,
        vec![
            ("alice", vec![Answer::Reply("alice", "hit")]),
            ("alice", vec![Answer::Reply("alice", "stay")]),
        ],
    );

    let summary = session.play_round(&mut source, &mut ()).unwrap();
    relay.join().unwrap();

    assert_eq!(session.player("alice").unwrap().hand().unwrap().len(), 3);
    assert_eq!(session.player("alice").unwrap().status(), Status::Won);
    assert_eq!(summary.winners, ["alice"]);
}
