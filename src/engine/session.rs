//! Game session: the state machine driving one board.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::board::{Area, Board, StackPosition};
use crate::cards::{AssetLookup, Card, CardKey, SpritePaths};
use crate::core::{AreaIndex, BoardConfig, ConfigError, GameRng, GameRngState, PlayError};
use crate::deck::{build_deck, riffle_shuffle};
use crate::events::{BackingSlot, GameObserver, NullObserver};
use crate::rules::{evaluate, Outcome, PlacementResolver};

/// Where the session is in its round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No deck on the board; a new round must be started.
    #[default]
    Idle,
    /// A shuffled deck sits in the source area.
    Started,
    /// The deck has been dealt out.
    Dealt,
}

/// A successful draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMove {
    pub card: CardKey,
    pub from: AreaIndex,
    pub to: AreaIndex,
    /// Set when this move resolved the round.
    pub outcome: Option<Outcome>,
}

/// Builder for creating a `PatienceGame`.
pub struct PatienceGameBuilder<O = NullObserver> {
    config: BoardConfig,
    rng: Option<GameRng>,
    assets: Box<dyn AssetLookup>,
    observer: O,
}

impl Default for PatienceGameBuilder<NullObserver> {
    fn default() -> Self {
        Self {
            config: BoardConfig::standard(),
            rng: None,
            assets: Box::new(SpritePaths),
            observer: NullObserver,
        }
    }
}

impl PatienceGameBuilder<NullObserver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: GameObserver> PatienceGameBuilder<O> {
    pub fn config(mut self, config: BoardConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the session RNG. Without a seed (or state) the RNG is seeded from entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(GameRng::new(seed));
        self
    }

    /// Resume the session RNG from a captured state.
    pub fn rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = Some(GameRng::from_state(state));
        self
    }

    pub fn assets(mut self, assets: impl AssetLookup + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    pub fn observer<P: GameObserver>(self, observer: P) -> PatienceGameBuilder<P> {
        PatienceGameBuilder {
            config: self.config,
            rng: self.rng,
            assets: self.assets,
            observer,
        }
    }

    /// Validate the configuration and build an idle session.
    pub fn build(self) -> Result<PatienceGame<O>, ConfigError> {
        let board = Board::new(&self.config)?;

        Ok(PatienceGame {
            board,
            resolver: PlacementResolver::new(&self.config),
            config: self.config,
            assets: self.assets,
            rng: self.rng.unwrap_or_else(GameRng::from_entropy),
            observer: self.observer,
            phase: RoundPhase::Idle,
            last_moved: None,
            deck: Vec::new(),
            outcome: None,
            moves: 0,
        })
    }
}

/// One game session.
///
/// Owns the board, the pending deck order, the RNG and the observer.
/// Every operation either succeeds or returns a `PlayError` having changed
/// nothing.
///
/// ```
/// use rust_patience::{EventLog, PatienceGameBuilder, RoundPhase};
///
/// let mut game = PatienceGameBuilder::new()
///     .seed(7)
///     .observer(EventLog::new())
///     .build()
///     .unwrap();
///
/// game.start_round().unwrap();
/// assert_eq!(game.phase(), RoundPhase::Started);
/// assert_eq!(game.board().source().len(), 52);
///
/// let first = game.draw_next().unwrap();
/// assert_eq!(first.from, game.board().source_index());
/// ```
pub struct PatienceGame<O: GameObserver = NullObserver> {
    config: BoardConfig,
    board: Board,
    resolver: PlacementResolver,
    assets: Box<dyn AssetLookup>,
    rng: GameRng,
    observer: O,

    phase: RoundPhase,
    last_moved: Option<AreaIndex>,
    /// Shuffled order awaiting the deal. Empty once dealt.
    deck: Vec<CardKey>,
    outcome: Option<Outcome>,
    moves: u32,
}

impl<O: GameObserver> PatienceGame<O> {
    // === Operations ===

    /// Build and shuffle a fresh deck and stack it face-up in the source area.
    ///
    /// The last card of the shuffled deck ends up on top.
    pub fn start_round(&mut self) -> Result<(), PlayError> {
        if self.phase != RoundPhase::Idle {
            return self.reject(PlayError::RoundInProgress);
        }

        let mut round_rng = self.rng.fork();
        let cards = riffle_shuffle(
            build_deck(self.assets.as_ref()),
            self.config.shuffle_passes,
            &mut round_rng,
        );

        self.board.clear();
        self.deck = cards.iter().map(Card::key).collect();
        let source = self.board.source_mut();
        for card in cards {
            source.insert(card, StackPosition::Top);
        }

        self.last_moved = None;
        self.outcome = None;
        self.moves = 0;
        self.phase = RoundPhase::Started;

        info!(
            cards = self.deck.len(),
            round_seed = round_rng.seed(),
            passes = self.config.shuffle_passes,
            "Round started"
        );
        self.observer.on_round_started();
        Ok(())
    }

    /// Spread the round's deck across the deal areas in deck order.
    ///
    /// Only allowed once per round and before any draw, while the source
    /// area still holds the whole deck.
    pub fn deal_round(&mut self) -> Result<(), PlayError> {
        match self.phase {
            RoundPhase::Idle => return self.reject(PlayError::RoundNotStarted),
            RoundPhase::Dealt => return self.reject(PlayError::AlreadyDealt),
            RoundPhase::Started => {}
        }
        if self.last_moved.is_some() {
            return self.reject(PlayError::DealAfterDraw);
        }

        let cards = self.board.source_mut().take_all();
        debug_assert!(cards.iter().map(Card::key).eq(self.deck.iter().copied()));

        let targets = self.config.deal_areas();
        let dealt = cards.len();
        self.board.deal_round_robin(cards, &targets);

        self.deck.clear();
        self.last_moved = None;
        self.phase = RoundPhase::Dealt;

        info!(cards = dealt, areas = targets.len(), layout = ?self.config.deal_layout, "Deck dealt");
        self.observer.on_dealt();
        Ok(())
    }

    /// Move the top card of the current area to the bottom of its rank's area.
    ///
    /// The current area is the source area until the first move of the
    /// round, then wherever the last card went.
    pub fn draw_next(&mut self) -> Result<CardMove, PlayError> {
        let from = self.current_area();

        let Some(top) = self.board.area(from).and_then(Area::top) else {
            let err = if self.last_moved.is_none() {
                PlayError::EmptySource
            } else {
                PlayError::EmptyArea { area: from }
            };
            return self.reject(err);
        };
        let key = top.key();

        let slot = BackingSlot::for_area(from, self.board.source_index());
        self.observer.on_backing_slot_should_hide(from, slot);

        let to = match self.resolver.resolve(key.rank) {
            Ok(to) => to,
            Err(err) => return self.reject(err),
        };

        let Some(card) = self.board.move_top(from, to, StackPosition::Bottom) else {
            return self.reject(PlayError::EmptyArea { area: from });
        };
        card.mark_placed();
        self.observer.on_card_moved(from, to, card);

        self.last_moved = Some(to);
        self.moves += 1;
        debug!(card = %key, %from, %to, moves = self.moves, "Card moved");

        let outcome = evaluate(&self.board);
        if let Some(outcome) = outcome {
            self.outcome = Some(outcome);
            info!(%outcome, moves = self.moves, "Round resolved");
            self.observer.on_game_resolved(outcome.is_victory());
        }

        Ok(CardMove {
            card: key,
            from,
            to,
            outcome,
        })
    }

    /// Discard the board and all round state.
    pub fn restart(&mut self) {
        self.board.clear();
        self.deck.clear();
        self.last_moved = None;
        self.outcome = None;
        self.moves = 0;
        self.phase = RoundPhase::Idle;

        info!("Game restarted");
        self.observer.on_restarted();
    }

    fn reject<T>(&self, err: PlayError) -> Result<T, PlayError> {
        if err.is_warning() {
            warn!(error = %err, phase = ?self.phase, "Move aborted");
        } else {
            info!(error = %err, phase = ?self.phase, "Action ignored");
        }
        Err(err)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// True when a new deck is needed before play can continue.
    #[must_use]
    pub fn is_played(&self) -> bool {
        self.phase == RoundPhase::Idle
    }

    #[must_use]
    pub fn last_moved(&self) -> Option<AreaIndex> {
        self.last_moved
    }

    /// The area the next draw is taken from.
    #[must_use]
    pub fn current_area(&self) -> AreaIndex {
        self.last_moved.unwrap_or_else(|| self.board.source_index())
    }

    /// Shuffled deck order awaiting the deal.
    #[must_use]
    pub fn deck(&self) -> &[CardKey] {
        &self.deck
    }

    /// Most recent resolution this round.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Successful draws this round.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Session RNG state, for reproducing the next rounds.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::StackPosition;
    use crate::cards::{NoAssets, Rank, Suit};
    use crate::core::DealLayout;
    use crate::events::{EventLog, GameEvent};

    fn game(seed: u64) -> PatienceGame<EventLog> {
        PatienceGameBuilder::new()
            .seed(seed)
            .observer(EventLog::new())
            .build()
            .unwrap()
    }

    /// A started game whose source area holds exactly `ranks` (last on top).
    fn rigged(ranks: &[Rank]) -> PatienceGame<EventLog> {
        let mut game = game(1);
        game.start_round().unwrap();
        game.board.clear();
        let source = game.board.source_index();
        for (i, rank) in ranks.iter().enumerate() {
            let card = Card::new(Suit::ALL[i % 4], *rank);
            game.board.place(card, source, StackPosition::Top).unwrap();
        }
        game.observer_mut().drain();
        game
    }

    #[test]
    fn test_builder_defaults() {
        let game = PatienceGameBuilder::new().build().unwrap();

        assert_eq!(game.config(), &BoardConfig::standard());
        assert_eq!(game.phase(), RoundPhase::Idle);
        assert!(game.is_played());
        assert!(game.board().is_empty());
        assert_eq!(game.current_area(), AreaIndex::new(12));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let result = PatienceGameBuilder::new().config(BoardConfig::new(13, 3)).build();
        assert!(matches!(result, Err(ConfigError::SourceNotLast { source_index: 3 })));
    }

    #[test]
    fn test_start_round() {
        let mut game = game(42);
        game.start_round().unwrap();

        assert_eq!(game.phase(), RoundPhase::Started);
        assert!(!game.is_played());
        assert_eq!(game.board().source().len(), 52);
        assert_eq!(game.board().card_count(), 52);
        assert_eq!(game.deck().len(), 52);
        assert_eq!(game.last_moved(), None);

        let top = game.board().source().top().unwrap().key();
        assert_eq!(Some(&top), game.deck().last());
        assert_eq!(game.observer().events(), &[GameEvent::RoundStarted]);
    }

    #[test]
    fn test_start_round_twice_is_rejected() {
        let mut game = game(42);
        game.start_round().unwrap();
        let board = game.board().clone();

        assert_eq!(game.start_round(), Err(PlayError::RoundInProgress));
        assert_eq!(game.board(), &board);
        assert_eq!(game.observer().events().len(), 1);
    }

    #[test]
    fn test_deal_before_start_is_rejected() {
        let mut game = game(42);
        assert_eq!(game.deal_round(), Err(PlayError::RoundNotStarted));
        assert!(game.observer().is_empty());
    }

    #[test]
    fn test_deal_round_spreads_deck_over_rank_areas() {
        let mut game = game(42);
        game.start_round().unwrap();
        let order = game.deck().to_vec();

        game.deal_round().unwrap();

        assert_eq!(game.phase(), RoundPhase::Dealt);
        assert!(game.deck().is_empty());
        assert!(game.board().source().is_empty());
        assert_eq!(game.board().card_count(), 52);

        for (i, key) in order.iter().enumerate() {
            assert_eq!(game.board().locate(*key), Some(AreaIndex::new((i % 12) as u8)));
        }
        assert_eq!(game.observer().events().last(), Some(&GameEvent::Dealt));
    }

    #[test]
    fn test_deal_twice_is_rejected() {
        let mut game = game(42);
        game.start_round().unwrap();
        game.deal_round().unwrap();
        assert_eq!(game.deal_round(), Err(PlayError::AlreadyDealt));
    }

    #[test]
    fn test_deal_after_draw_is_rejected() {
        let mut game = game(42);
        game.start_round().unwrap();
        game.draw_next().unwrap();
        let board = game.board().clone();

        assert_eq!(game.deal_round(), Err(PlayError::DealAfterDraw));
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_all_areas_layout_fills_source() {
        let mut game = PatienceGameBuilder::new()
            .seed(3)
            .config(BoardConfig::standard().with_deal_layout(DealLayout::AllAreas))
            .build()
            .unwrap();
        game.start_round().unwrap();
        game.deal_round().unwrap();

        for area in game.board().areas() {
            assert_eq!(area.len(), 4, "{}", area.index());
        }
    }

    #[test]
    fn test_draw_on_fresh_session_is_silent_noop() {
        let mut game = game(42);

        assert_eq!(game.draw_next(), Err(PlayError::EmptySource));
        assert!(game.observer().is_empty());
        assert_eq!(game.moves(), 0);
        assert_eq!(game.last_moved(), None);
    }

    #[test]
    fn test_draw_after_rank_area_deal_is_noop() {
        let mut game = game(42);
        game.start_round().unwrap();
        game.deal_round().unwrap();
        let board = game.board().clone();

        assert_eq!(game.draw_next(), Err(PlayError::EmptySource));
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn test_draw_moves_top_card_to_bottom_of_rank_area() {
        let mut game = rigged(&[Rank::Two, Rank::Three, Rank::Five]);

        let mv = game.draw_next().unwrap();

        assert_eq!(mv.card.rank, Rank::Five);
        assert_eq!(mv.from, AreaIndex::new(12));
        assert_eq!(mv.to, AreaIndex::new(4));
        assert_eq!(game.last_moved(), Some(AreaIndex::new(4)));

        let area = game.board().area(AreaIndex::new(4)).unwrap();
        assert_eq!(area.cards()[0].key(), mv.card);
        assert!(area.cards()[0].placed);
        assert_eq!(game.board().source().len(), 2);
    }

    #[test]
    fn test_draw_notifications_in_order() {
        let mut game = rigged(&[Rank::Two, Rank::Five]);
        let mv = game.draw_next().unwrap();

        assert_eq!(
            game.observer().events(),
            &[
                GameEvent::BackingSlotHidden {
                    area: AreaIndex::new(12),
                    slot: BackingSlot::King,
                },
                GameEvent::CardMoved {
                    from: AreaIndex::new(12),
                    to: AreaIndex::new(4),
                    card: mv.card,
                },
                GameEvent::GameResolved { is_victory: false },
            ]
        );
    }

    #[test]
    fn test_king_goes_to_bottom_of_source() {
        let mut game = rigged(&[Rank::Ace, Rank::King]);

        let mv = game.draw_next().unwrap();

        assert_eq!(mv.to, AreaIndex::new(12));
        assert_eq!(game.last_moved(), Some(AreaIndex::new(12)));
        let source = game.board().source();
        assert_eq!(source.cards()[0].rank, Rank::King);
        assert!(source.cards()[0].placed);
        assert_eq!(source.top().map(|c| c.rank), Some(Rank::Ace));
        assert_eq!(mv.outcome, None);
    }

    #[test]
    fn test_draw_follows_last_moved_area() {
        // Five lands in area 4 on top of a dealt Seven; the next draw takes the Seven.
        let mut game = rigged(&[Rank::Five]);
        game.board
            .place(Card::new(Suit::Clubs, Rank::Seven), AreaIndex::new(4), StackPosition::Top)
            .unwrap();

        game.draw_next().unwrap();
        let second = game.draw_next().unwrap();

        assert_eq!(second.from, AreaIndex::new(4));
        assert_eq!(second.card.rank, Rank::Seven);
        assert_eq!(second.to, AreaIndex::new(6));
        assert_eq!(game.current_area(), AreaIndex::new(6));
    }

    #[test]
    fn test_draw_from_emptied_area_is_noop() {
        let mut game = rigged(&[Rank::Five]);
        game.last_moved = Some(AreaIndex::new(7));

        assert_eq!(
            game.draw_next(),
            Err(PlayError::EmptyArea { area: AreaIndex::new(7) })
        );
        assert_eq!(game.board().source().len(), 1);
        assert!(game.observer().is_empty());
    }

    #[test]
    fn test_unresolvable_rank_leaves_card_in_place() {
        let mut game = PatienceGameBuilder::new()
            .seed(1)
            .config(BoardConfig::new(7, 6))
            .assets(NoAssets)
            .observer(EventLog::new())
            .build()
            .unwrap();
        game.board
            .place(Card::new(Suit::Hearts, Rank::Jack), AreaIndex::new(6), StackPosition::Top)
            .unwrap();
        let board = game.board().clone();

        assert_eq!(
            game.draw_next(),
            Err(PlayError::UnresolvableRank { token: "J".into() })
        );
        assert_eq!(game.board(), &board);
        assert_eq!(game.last_moved(), None);
        assert_eq!(game.moves(), 0);
        assert!(!game.board().source().cards()[0].placed);
        assert!(game.observer().resolutions().is_empty());
    }

    #[test]
    fn test_victory_when_last_unplaced_card_moves() {
        let mut game = rigged(&[Rank::Three]);
        let mv = game.draw_next().unwrap();

        assert_eq!(mv.outcome, Some(Outcome::Victory));
        assert_eq!(game.outcome(), Some(Outcome::Victory));
        assert_eq!(game.observer().resolutions(), vec![true]);
    }

    #[test]
    fn test_restart_discards_everything() {
        let mut game = game(42);
        game.start_round().unwrap();
        game.draw_next().unwrap();

        game.restart();

        assert_eq!(game.phase(), RoundPhase::Idle);
        assert!(game.is_played());
        assert!(game.board().is_empty());
        assert!(game.deck().is_empty());
        assert_eq!(game.last_moved(), None);
        assert_eq!(game.outcome(), None);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.observer().events().last(), Some(&GameEvent::Restarted));

        game.start_round().unwrap();
        assert_eq!(game.board().card_count(), 52);
    }

    #[test]
    fn test_rounds_from_same_seed_match() {
        let mut a = game(99);
        let mut b = game(99);
        a.start_round().unwrap();
        b.start_round().unwrap();
        assert_eq!(a.deck(), b.deck());

        a.restart();
        b.restart();
        a.start_round().unwrap();
        b.start_round().unwrap();
        assert_eq!(a.deck(), b.deck());
    }

    #[test]
    fn test_successive_rounds_differ() {
        let mut game = game(99);
        game.start_round().unwrap();
        let first = game.deck().to_vec();

        game.restart();
        game.start_round().unwrap();

        assert_ne!(game.deck(), first.as_slice());
    }

    #[test]
    fn test_rng_state_resumes_session() {
        let mut original = game(5);
        original.start_round().unwrap();
        original.restart();
        let state = original.rng_state();

        let mut resumed = PatienceGameBuilder::new().rng_state(&state).build().unwrap();
        original.start_round().unwrap();
        resumed.start_round().unwrap();

        assert_eq!(original.deck(), resumed.deck());
    }
}
