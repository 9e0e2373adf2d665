//! Self-Playing Game
//!
//! This example wires the crate the way a presentation layer would and lets
//! a simple solver play against a random code.
//!
//! Key concepts:
//! - Configuration and a random secret via `new_game`
//! - A store that serializes dispatch and notifies subscribers
//! - The solver only ever sees scores, never the secret
//!
//! Run with: RUST_LOG=debug cargo run --example play
//! Optionally set CODEBREAKER_CONFIG="code_length = 4\nalphabet_size = 6"

use codebreaker::config::{new_game, GameConfig};
use codebreaker::core::{score, Code, Color};
use codebreaker::session::{Action, Session};
use codebreaker::store::{SessionStore, Store};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

const MAX_ATTEMPTS: usize = 12;

/// First code, in counting order, that would have earned every score seen
/// so far.
fn next_candidate(state: &Session) -> Option<Code> {
    let len = state.code_length();
    let size = state.alphabet().size();
    let mut digits = vec![0usize; len];

    loop {
        let candidate: Code = digits.iter().map(|d| Color(*d as u8)).collect();
        let consistent = state
            .history()
            .rounds()
            .all(|(guess, seen)| score(&candidate, guess).ok() == Some(*seen));
        if consistent {
            return Some(candidate);
        }

        // Advance like an odometer in base `size`
        let mut position = len;
        loop {
            if position == 0 {
                return None;
            }
            position -= 1;
            digits[position] += 1;
            if digits[position] < size {
                break;
            }
            digits[position] = 0;
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::var("CODEBREAKER_CONFIG") {
        Ok(source) => GameConfig::from_toml(&source.replace("\\n", "\n"))?,
        Err(_) => GameConfig::default(),
    };

    println!("=== Codebreaker ===\n");
    println!(
        "Code length: {}, colors: {}\n",
        config.code_length, config.alphabet_size
    );

    let store = SessionStore::new(new_game(&config, &mut rand::rng())?);

    let printed = AtomicUsize::new(0);
    store.subscribe(move |state| {
        // Listeners also fire on guess edits; print each round once
        if printed.swap(state.attempts(), Ordering::SeqCst) == state.attempts() {
            return;
        }
        if let Some((guess, result)) = state.history().last() {
            println!(
                "  #{:<2} {}  bulls: {}  cows: {}",
                state.attempts(),
                guess,
                result.bulls,
                result.cows
            );
        }
    });

    while !store.state().is_solved() && store.state().attempts() < MAX_ATTEMPTS {
        let Some(candidate) = next_candidate(&store.state()) else {
            println!("No code fits the scores so far");
            break;
        };
        store.dispatch(Action::SetGuess(candidate))?;
        store.dispatch(Action::SubmitGuess)?;
    }

    let state = store.state();
    println!("\nSecret was {}", state.code());
    if state.is_solved() {
        println!("Cracked in {} attempts", state.attempts());
    } else {
        println!("Gave up after {} attempts", state.attempts());
    }

    Ok(())
}
