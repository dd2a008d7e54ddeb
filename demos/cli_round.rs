//! CLI blackjack round example.
//!
//! Player moves are read from stdin on a separate thread and relayed to the
//! round through a decision channel. Set `RUST_LOG=debug` to see engine logs.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    CardCatalog, CardView, GameOptions, GameSession, ParticipantSnapshot, Rank, RoundEvent,
    RoundObserver, Snapshot, Suit, channel,
};

const PLAYER: &str = "you";

struct TablePrinter;

impl RoundObserver for TablePrinter {
    fn on_update(&mut self, event: &RoundEvent, snapshot: &Snapshot) {
        match event {
            RoundEvent::Dealt | RoundEvent::HoleCardRevealed | RoundEvent::Completed => {
                print_table(snapshot);
            }
            RoundEvent::CardDrawn { participant_id } => {
                println!("{participant_id} draws.");
                print_table(snapshot);
            }
            RoundEvent::StatusChanged => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Blackjack round example (type 'q' to stop waiting and stay)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let catalog = CardCatalog::new();
    let mut session = GameSession::new(&catalog, GameOptions::default(), "dealer", seed);
    if let Err(err) = session.add_player(PLAYER) {
        println!("Seat error: {err}");
        return;
    }

    let (handle, requests, mut decisions) = channel();
    thread::spawn(move || {
        let mut lines = io::stdin().lock().lines();
        for request in requests {
            print!("[h]it or [s]tay: ");
            let _ = io::stdout().flush();

            let Some(Ok(line)) = lines.next() else {
                break;
            };
            let sent = match line.trim().to_lowercase().as_str() {
                "h" => handle.reply(&request, PLAYER, "hit"),
                "s" => handle.reply(&request, PLAYER, "stay"),
                "q" | "quit" => handle.cancel(&request),
                other => handle.reply(&request, PLAYER, other),
            };
            if !sent {
                break;
            }
        }
    });

    match session.play_round(&mut decisions, &mut TablePrinter) {
        Ok(summary) => {
            if summary.winners.iter().any(|id| id == PLAYER) {
                println!("You win.");
            } else {
                println!("Dealer wins.");
            }
        }
        Err(err) => println!("Round aborted: {err}"),
    }
}

fn print_table(snapshot: &Snapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);
    print_participant(&snapshot.dealer);
    for player in &snapshot.players {
        print_participant(player);
    }
    println!();
}

fn print_participant(participant: &ParticipantSnapshot) {
    let cards = participant
        .hand
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{:>8}: {cards} | {:?}", participant.id, participant.status);
}

fn format_card(card: &CardView) -> String {
    let Some(card) = card.visible() else {
        return "??".to_string();
    };

    let suit = match card.suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    };

    let rank = match card.rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => other.number().to_string(),
    };

    format!("{rank}{suit}")
}
