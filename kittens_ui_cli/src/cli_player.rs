use std::str::FromStr;

use kittens_core::{card::Card, game_state::LocalGameState};

pub static RULES: &str = "
*** Exploding Kittens ***
A card game for one human against computer opponents. On your turn you may play any number of cards from
your hand and then end the turn by drawing from the deck. Drawing an Exploding Kitten makes you explode and
drop out, unless you hold a Defuse, which is spent to put the kitten back into the deck. Skip ends your turn
without drawing. The last player who has not exploded wins. Press c to see what each card does.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CliAction {
    Quit,
    Rules,
    CardEffects,
    NewGame,
    Draw,
    Play(usize),
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseActionError;

impl CliAction {
    pub fn info(&self, hand: &[Card]) -> String {
        match self {
            CliAction::Quit => "quit".to_string(),
            CliAction::Rules => "display rules".to_string(),
            CliAction::CardEffects => "display card effects".to_string(),
            CliAction::NewGame => "start a new game".to_string(),
            CliAction::Draw => "draw a card and end your turn".to_string(),
            CliAction::Play(index) => match hand.get(*index) {
                Some(card) if card.kind().map_or(true, |k| k.is_playable()) => {
                    format!("play {}", card.name)
                }
                Some(card) => format!("play {} (no effect when played)", card.name),
                None => "play an unknown card".to_string(),
            },
        }
    }

    pub fn cmd_str(&self) -> String {
        match self {
            CliAction::Quit => "q".to_string(),
            CliAction::Rules => "r".to_string(),
            CliAction::CardEffects => "c".to_string(),
            CliAction::NewGame => "n".to_string(),
            CliAction::Draw => "d".to_string(),
            CliAction::Play(index) => index.to_string(),
        }
    }

    /// Commands worth offering for the given table.
    pub fn offered(state: &LocalGameState, may_act: bool) -> Vec<CliAction> {
        let mut actions = vec![CliAction::Quit, CliAction::Rules, CliAction::CardEffects];
        if state.is_over() {
            actions.push(CliAction::NewGame);
            return actions;
        }
        if may_act {
            actions.push(CliAction::Draw);
            let hand_size = state.current().map(|p| p.cards().len()).unwrap_or(0);
            actions.extend((0..hand_size).map(CliAction::Play));
        }
        actions
    }
}

impl FromStr for CliAction {
    type Err = ParseActionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "q" => Ok(CliAction::Quit),
            "r" => Ok(CliAction::Rules),
            "c" => Ok(CliAction::CardEffects),
            "n" => Ok(CliAction::NewGame),
            "d" => Ok(CliAction::Draw),
            other => usize::from_str(other)
                .map(CliAction::Play)
                .map_err(|_| ParseActionError),
        }
    }
}

pub fn format_prompt(state: &LocalGameState, may_act: bool) -> String {
    let hand = state.current().map(|p| p.cards()).unwrap_or(&[]);
    let mut lines = vec![];
    for action in CliAction::offered(state, may_act) {
        lines.push(format!("- [{}]: {}", action.cmd_str(), action.info(hand)));
    }
    lines.join("\n")
}
