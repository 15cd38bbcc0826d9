use std::future::Future;

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::{
    card::Card,
    config::ClientConfig,
    error::ClientError,
    events::{MoveBatchReply, StartGameReply},
    game_state::LocalGameState,
    gate::ActionGate,
    move_processor::{MoveProcessor, ReplaySummary},
    pacing::Pacer,
    player::SeatIndex,
    presentation::Presentation,
    server::GameServer,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The server accepted the action and its batch has been replayed.
    Applied { moves: usize },
    /// The gate was closed, nothing was sent.
    Rejected,
    /// The server answered without a move batch.
    NotApplied,
    /// The round trip itself failed.
    Failed(ClientError),
}

/// One game as seen from the human's seat. All mutation of the local state
/// goes through here and the gate lets only one action in at a time.
pub struct GameSession<S, P, T> {
    server: S,
    presentation: P,
    pacer: T,
    config: ClientConfig,
    gate: ActionGate,
    state: Mutex<LocalGameState>,
}

impl<S, P, T> GameSession<S, P, T>
where
    S: GameServer,
    P: Presentation,
    T: Pacer,
{
    pub fn new(server: S, presentation: P, pacer: T, config: ClientConfig) -> Self {
        GameSession {
            server,
            presentation,
            pacer,
            config,
            gate: ActionGate::new(),
            state: Mutex::new(LocalGameState::default()),
        }
    }

    pub fn snapshot(&self) -> LocalGameState {
        self.state.lock().clone()
    }

    pub fn may_act(&self) -> bool {
        self.gate.may_act(&self.state.lock())
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_closed()
    }

    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    pub fn server(&self) -> &S {
        &self.server
    }

    /// Starts a new game, discarding the previous one once the server agrees.
    pub async fn start_game(&self, player_names: &str) -> Result<ReplaySummary, ClientError> {
        let player_names = player_names.trim();
        if player_names.is_empty() {
            return Err(ClientError::EmptyPlayerName);
        }
        let pass = self
            .gate
            .acquire_unchecked()
            .ok_or(ClientError::GameInProgress)?;

        self.presentation.set_action_affordance(false);
        let result = self.start_game_inner(player_names).await;

        drop(pass);
        self.publish_affordance();
        result
    }

    async fn start_game_inner(&self, player_names: &str) -> Result<ReplaySummary, ClientError> {
        let reply = self.round_trip(self.server.start_game(player_names)).await?;
        let (players, current_player, moves) = match reply {
            StartGameReply::Rejected { error } => return Err(ClientError::Server(error)),
            StartGameReply::Started {
                players,
                current_player,
                moves,
            } => (players, current_player, moves.unwrap_or_default()),
        };

        let state = LocalGameState::from_snapshot(players, current_player)?;
        info!(
            "game started with {} seats, {} opening moves",
            state.players().len(),
            moves.len()
        );
        *self.state.lock() = state;
        self.presentation.render(&self.state.lock());

        let summary = self.processor().replay(&self.state, &moves).await;
        if !moves.is_empty() {
            self.presentation.render(&self.state.lock());
        }
        Ok(summary)
    }

    pub async fn draw(&self) -> DispatchOutcome {
        let Some(pass) = self.gate.try_acquire(&self.state.lock()) else {
            debug!("draw ignored, gate closed");
            return DispatchOutcome::Rejected;
        };
        self.presentation.set_action_affordance(false);

        let outcome = match self.round_trip(self.server.draw_card()).await {
            Ok(reply) => self.apply_reply(reply).await,
            Err(err) => self.absorb_failure(err),
        };

        drop(pass);
        self.publish_affordance();
        info!("draw finished: {:?}", outcome);
        outcome
    }

    /// Plays the card at `hand_index` of the current human seat. The card
    /// leaves the local hand before the request is sent and comes back if the
    /// server does not apply the play.
    pub async fn play_card(&self, hand_index: usize) -> DispatchOutcome {
        let Some(pass) = self.gate.try_acquire(&self.state.lock()) else {
            debug!("play of card {} ignored, gate closed", hand_index);
            return DispatchOutcome::Rejected;
        };
        self.presentation.set_action_affordance(false);

        let taken = self.take_optimistically(hand_index);
        self.presentation.render(&self.state.lock());

        let outcome = match self.round_trip(self.server.play_card(hand_index)).await {
            Ok(reply) => self.apply_reply(reply).await,
            Err(err) => self.absorb_failure(err),
        };

        if !matches!(outcome, DispatchOutcome::Applied { .. }) {
            if let Some((seat, card)) = taken {
                self.state.lock().return_to_hand(seat, hand_index, card);
                self.presentation.render(&self.state.lock());
            }
        }

        drop(pass);
        self.publish_affordance();
        info!("play of card {} finished: {:?}", hand_index, outcome);
        outcome
    }

    fn take_optimistically(&self, hand_index: usize) -> Option<(SeatIndex, Card)> {
        let mut state = self.state.lock();
        let seat = state.current_player()?;
        let card = state.take_from_hand(seat, hand_index);
        if card.is_none() {
            warn!("hand index {} is not in the local hand", hand_index);
        }
        card.map(|card| (seat, card))
    }

    async fn apply_reply(&self, reply: MoveBatchReply) -> DispatchOutcome {
        let Some(moves) = reply.moves else {
            warn!("server reply carried no move batch");
            return DispatchOutcome::NotApplied;
        };
        if let Some(current) = reply.current_player {
            self.state.lock().set_current_player(current);
        }

        let summary = self.processor().replay(&self.state, &moves).await;
        if summary.unresolved > 0 {
            debug!("{} moves without a known seat", summary.unresolved);
        }
        self.presentation.render(&self.state.lock());
        DispatchOutcome::Applied { moves: moves.len() }
    }

    fn absorb_failure(&self, err: ClientError) -> DispatchOutcome {
        if let ClientError::MalformedResponse(reason) = &err {
            warn!("undecodable reply: {}", reason);
            return DispatchOutcome::NotApplied;
        }
        warn!("request failed: {}", err);
        self.presentation
            .set_message(&format!("Connection problem: {}", err));
        DispatchOutcome::Failed(err)
    }

    async fn round_trip<R, F>(&self, request: F) -> Result<R, ClientError>
    where
        F: Future<Output = Result<R, ClientError>>,
    {
        match self.config.request_timeout {
            Some(limit) => tokio::time::timeout(limit, request)
                .await
                .map_err(|_| ClientError::Timeout(limit))?,
            None => request.await,
        }
    }

    fn processor(&self) -> MoveProcessor<'_, P, T> {
        MoveProcessor::new(&self.presentation, &self.pacer, self.config.pacing)
    }

    fn publish_affordance(&self) {
        let enabled = self.may_act();
        self.presentation.set_action_affordance(enabled);
    }
}
