use std::{collections::VecDeque, sync::Arc, time::Duration};

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use crate::{
    card::Card,
    error::ClientError,
    events::{Move, MoveBatchReply, MoveKind, StartGameReply},
    game_state::LocalGameState,
    pacing::Pacer,
    player::SeatIndex,
    presentation::Presentation,
    server::GameServer,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Render(LocalGameState),
    Arrival(SeatIndex),
    PlayEffect(SeatIndex, String),
    DiscardTop(String),
    Message(String),
    Affordance(bool),
    Request(String),
}

/// Notices from the presentation and the server, in the order they happened.
pub type Journal = Arc<Mutex<Vec<Notice>>>;

pub struct RecordingPresentation {
    journal: Journal,
}

impl RecordingPresentation {
    pub fn new() -> Self {
        RecordingPresentation::with_journal(Journal::default())
    }

    pub fn with_journal(journal: Journal) -> Self {
        RecordingPresentation { journal }
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.journal
            .lock()
            .iter()
            .filter(|n| !matches!(n, Notice::Request(_)))
            .cloned()
            .collect()
    }

    pub fn renders(&self) -> Vec<LocalGameState> {
        self.journal
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Render(state) => Some(state.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn affordances(&self) -> Vec<bool> {
        self.journal
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Affordance(enabled) => Some(*enabled),
                _ => None,
            })
            .collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.journal.lock().iter().rev().find_map(|n| match n {
            Notice::Message(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn push(&self, notice: Notice) {
        self.journal.lock().push(notice);
    }
}

impl Presentation for RecordingPresentation {
    fn render(&self, state: &LocalGameState) {
        self.push(Notice::Render(state.clone()));
    }

    fn show_arrival_effect(&self, seat: SeatIndex) {
        self.push(Notice::Arrival(seat));
    }

    fn show_play_effect(&self, seat: SeatIndex, card_image: &str) {
        self.push(Notice::PlayEffect(seat, card_image.to_string()));
    }

    fn set_discard_top(&self, card_image: &str) {
        self.push(Notice::DiscardTop(card_image.to_string()));
    }

    fn set_message(&self, text: &str) {
        self.push(Notice::Message(text.to_string()));
    }

    fn set_action_affordance(&self, enabled: bool) {
        self.push(Notice::Affordance(enabled));
    }
}

#[derive(Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        RecordingPacer::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, delay: Duration) {
        self.pauses.lock().push(delay);
    }
}

pub enum Scripted {
    Reply(MoveBatchReply),
    Fail(ClientError),
    Hang,
}

/// Answers requests from a queue of scripted replies. When `hold` is set the
/// next batch request waits until it is notified.
pub struct ScriptedServer {
    journal: Journal,
    start: Mutex<Option<Result<StartGameReply, ClientError>>>,
    replies: Mutex<VecDeque<Scripted>>,
    hold: Option<Arc<Notify>>,
}

impl ScriptedServer {
    pub fn new(journal: Journal) -> Self {
        ScriptedServer {
            journal,
            start: Mutex::new(None),
            replies: Mutex::new(VecDeque::new()),
            hold: None,
        }
    }

    pub fn on_start(self, reply: StartGameReply) -> Self {
        *self.start.lock() = Some(Ok(reply));
        self
    }

    pub fn then(self, reply: Scripted) -> Self {
        self.replies.lock().push_back(reply);
        self
    }

    pub fn held_by(mut self, hold: Arc<Notify>) -> Self {
        self.hold = Some(hold);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.journal
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notice::Request(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    async fn next_reply(&self, request: String) -> Result<MoveBatchReply, ClientError> {
        self.journal.lock().push(Notice::Request(request));
        if let Some(hold) = &self.hold {
            hold.notified().await;
        }
        let next = self.replies.lock().pop_front();
        match next {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Fail(err)) => Err(err),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Ok(MoveBatchReply::default()),
        }
    }
}

#[async_trait]
impl GameServer for ScriptedServer {
    async fn start_game(&self, players: &str) -> Result<StartGameReply, ClientError> {
        self.journal
            .lock()
            .push(Notice::Request(format!("start_game {}", players)));
        let scripted = self.start.lock().take();
        scripted.unwrap_or_else(|| Err(ClientError::Server("no game scripted".to_string())))
    }

    async fn draw_card(&self) -> Result<MoveBatchReply, ClientError> {
        self.next_reply("draw_card".to_string()).await
    }

    async fn play_card(&self, card_index: usize) -> Result<MoveBatchReply, ClientError> {
        self.next_reply(format!("play_card {}", card_index)).await
    }
}

pub fn draw(player: &str, card: Card) -> Move {
    Move {
        player: Some(player.to_string()),
        kind: Some(MoveKind::Draw),
        card: Some(card),
        ..Move::default()
    }
}

pub fn ai_draw(player: &str) -> Move {
    Move {
        player: Some(player.to_string()),
        kind: Some(MoveKind::AiDraw),
        ..Move::default()
    }
}

pub fn play(player: &str, card: Card) -> Move {
    Move {
        player: Some(player.to_string()),
        kind: Some(MoveKind::Play),
        card: Some(card),
        ..Move::default()
    }
}

pub fn turn_to(seat: i64) -> Move {
    Move {
        new_current_player: Some(seat),
        ..Move::default()
    }
}
