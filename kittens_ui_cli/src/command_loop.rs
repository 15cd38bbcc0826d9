use std::{io::BufRead, str::FromStr, thread};

use kittens_core::{card::CardKind, DispatchOutcome, GameSession};
use kittens_core::{pacing::Pacer, presentation::Presentation, server::GameServer};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::cli_player::{format_prompt, CliAction, RULES};

pub type Input = mpsc::UnboundedReceiver<String>;

static WAIT_FOR_TURN: &str = "! Wait for your turn.";

/// Forwards stdin lines from a dedicated thread, so lines typed during a
/// replay are already queued when the action returns.
pub fn spawn_stdin_reader() -> Input {
    let (typed, input) = mpsc::unbounded_channel();
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if typed.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!("stdin closed: {}", err);
                    break;
                }
            }
        }
    });
    input
}

/// Reads commands until the input ends or the human quits.
pub async fn run_commands<S, P, T>(
    session: &GameSession<S, P, T>,
    input: &mut Input,
    name: Option<String>,
) where
    S: GameServer,
    P: Presentation,
    T: Pacer,
{
    if !start(session, input, name).await {
        return;
    }

    loop {
        println!("{}", format_prompt(&session.snapshot(), session.may_act()));
        let Some(line) = input.recv().await else {
            return;
        };
        match CliAction::from_str(&line) {
            Ok(CliAction::Quit) => return,
            Ok(CliAction::Rules) => println!("{}", RULES),
            Ok(CliAction::CardEffects) => println!("{}", CardKind::rules()),
            Ok(CliAction::NewGame) => {
                if !start(session, input, None).await {
                    return;
                }
            }
            Ok(CliAction::Draw) => {
                let outcome = session.draw().await;
                report(session, input, outcome);
            }
            Ok(CliAction::Play(index)) => {
                let outcome = session.play_card(index).await;
                report(session, input, outcome);
            }
            Err(_) => println!("Unknown command: {}", line.trim()),
        }
    }
}

/// Asks for player names until the server starts a game. Returns `false`
/// when the input ends first.
async fn start<S, P, T>(
    session: &GameSession<S, P, T>,
    input: &mut Input,
    mut names: Option<String>,
) -> bool
where
    S: GameServer,
    P: Presentation,
    T: Pacer,
{
    loop {
        let line = match names.take() {
            Some(line) => line,
            None => {
                println!("Enter your name:");
                match input.recv().await {
                    Some(line) => line,
                    None => return false,
                }
            }
        };
        match session.start_game(&line).await {
            Ok(_) => return true,
            Err(err) => println!("! {}", err),
        }
    }
}

/// Drops every line that arrived while an action was in flight. Those were
/// typed against a table that has changed since.
fn discard_typed_ahead(input: &mut Input) -> usize {
    let mut dropped = 0;
    while let Ok(line) = input.try_recv() {
        debug!("dropped {:?}, typed while busy", line);
        dropped += 1;
    }
    dropped
}

/// What the human is told after an action. Failures are already narrated by
/// the session and a batch that was not applied passes silently.
fn outcome_notice(outcome: &DispatchOutcome, dropped: usize) -> Option<&'static str> {
    match outcome {
        DispatchOutcome::Rejected => Some(WAIT_FOR_TURN),
        _ if dropped > 0 => Some(WAIT_FOR_TURN),
        DispatchOutcome::NotApplied => {
            debug!("action not applied");
            None
        }
        DispatchOutcome::Applied { .. } | DispatchOutcome::Failed(_) => None,
    }
}

fn report<S, P, T>(session: &GameSession<S, P, T>, input: &mut Input, outcome: DispatchOutcome)
where
    S: GameServer,
    P: Presentation,
    T: Pacer,
{
    let dropped = discard_typed_ahead(input);
    if let Some(notice) = outcome_notice(&outcome, dropped) {
        println!("{}", notice);
    }

    let state = session.snapshot();
    if !state.is_over() {
        return;
    }
    match state.winner() {
        Some(winner) => println!("*** {} wins! ***", winner.name()),
        None => println!("*** Game over ***"),
    }
}
