//! Game integration tests.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slaprs::{
    ActionError, BoardSnapshot, Card, CardError, DECK_SIZE, Deck, DeckError, Detection,
    DisplaySink, EndReason, Game, GameOptions, GameState, InputSource, Key, Notice, Penalty,
    PileEvent, Policy, Rank, Reaction, Side, TurnEngine, award_pile, detect, slap_winner,
};

const WAIT: Duration = Duration::from_secs(1);

const fn card(rank: Rank) -> Card {
    Card::new(rank)
}

fn deck(ranks: &[Rank]) -> Deck {
    let cards: Vec<Card> = ranks.iter().copied().map(Card::new).collect();
    Deck::from_top(&cards)
}

fn ranks(deck: &Deck) -> Vec<Rank> {
    deck.iter().map(|card| card.rank()).collect()
}

const fn slap_after(ms: u64) -> Reaction {
    Reaction::Pressed {
        key: Key::Slap,
        elapsed: Duration::from_millis(ms),
    }
}

fn quiet_game(player: &[Rank], opponent: &[Rank]) -> Game {
    let options = GameOptions::default()
        .with_wait_time(WAIT)
        .with_show_intro(false);
    let mut game = Game::new(options, 1);
    game.player_deck = deck(player);
    game.opponent_deck = deck(opponent);
    game
}

#[derive(Debug, PartialEq, Eq)]
struct ScriptEnded;

#[derive(Debug, Default)]
struct Script {
    keys: VecDeque<Key>,
    reactions: VecDeque<Reaction>,
    /// Keys pressed just after each slap window closes.
    late: VecDeque<Key>,
    /// Keys waiting to be read, ahead of `keys`.
    buffered: VecDeque<Key>,
    deadlines: Vec<Duration>,
}

impl Script {
    fn new(keys: &[Key], reactions: &[Reaction]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            reactions: reactions.iter().copied().collect(),
            ..Self::default()
        }
    }

    fn with_late_key(mut self, key: Key) -> Self {
        self.late.push_back(key);
        self
    }
}

impl InputSource for Script {
    type Error = ScriptEnded;

    fn read_key(&mut self) -> Result<Key, ScriptEnded> {
        self.buffered
            .pop_front()
            .or_else(|| self.keys.pop_front())
            .ok_or(ScriptEnded)
    }

    fn read_key_with_deadline(&mut self, deadline: Duration) -> Result<Reaction, ScriptEnded> {
        self.deadlines.push(deadline);
        let reaction = self.reactions.pop_front().ok_or(ScriptEnded)?;
        self.buffered.extend(self.late.pop_front());
        Ok(reaction)
    }

    fn discard_pending(&mut self) -> Result<(), ScriptEnded> {
        self.buffered.clear();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    Board(BoardSnapshot),
    Notice(Notice),
    Pause(Duration),
}

#[derive(Debug, Default)]
struct Recorder {
    shown: Vec<Shown>,
}

impl Recorder {
    fn notices(&self) -> Vec<Notice> {
        self.shown
            .iter()
            .filter_map(|shown| match shown {
                Shown::Notice(notice) => Some(*notice),
                Shown::Board(_) | Shown::Pause(_) => None,
            })
            .collect()
    }

    fn last_board(&self) -> Option<BoardSnapshot> {
        self.shown.iter().rev().find_map(|shown| match shown {
            Shown::Board(board) => Some(*board),
            Shown::Notice(_) | Shown::Pause(_) => None,
        })
    }
}

impl DisplaySink for Recorder {
    type Error = Infallible;

    fn render(&mut self, board: &BoardSnapshot) -> Result<(), Infallible> {
        self.shown.push(Shown::Board(*board));
        Ok(())
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Infallible> {
        self.shown.push(Shown::Notice(*notice));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> Result<(), Infallible> {
        self.shown.push(Shown::Pause(duration));
        Ok(())
    }
}

#[test]
fn card_parsing_and_matching() {
    assert_eq!(Card::parse("10").unwrap().rank(), Rank::Ten);
    assert_eq!(Card::parse("A").unwrap().rank(), Rank::Ace);
    assert_eq!(Card::parse("1"), Err(CardError::InvalidRank));
    assert_eq!(Card::parse("k"), Err(CardError::InvalidRank));
    assert!(card(Rank::Seven).matches(card(Rank::Seven)));
    assert!(!card(Rank::Seven).matches(card(Rank::Eight)));
    assert_eq!(card(Rank::Jack).to_string(), "J");
}

#[test]
fn full_deck_has_four_of_each_rank() {
    let full = Deck::full();
    assert_eq!(full.len(), DECK_SIZE);
    assert_eq!(full.rank_counts(), [4; 13]);
    assert!(Deck::empty().is_empty());
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut shuffled = Deck::full();
    shuffled.shuffle(&mut rng);

    assert_eq!(shuffled.len(), DECK_SIZE);
    assert_eq!(shuffled.rank_counts(), Deck::full().rank_counts());
    assert_ne!(shuffled, Deck::full());
}

#[test]
fn draw_then_add_bottom_rotates_by_one() {
    let mut pile = deck(&[Rank::Two, Rank::Three, Rank::Four]);
    let top = pile.draw_top().unwrap();
    pile.add_bottom(top);
    assert_eq!(ranks(&pile), [Rank::Three, Rank::Four, Rank::Two]);

    pile.insert_top(card(Rank::King));
    assert_eq!(pile.top(), Some(card(Rank::King)));
}

#[test]
fn deck_errors() {
    let mut empty = Deck::empty();
    assert_eq!(empty.draw_top(), Err(DeckError::EmptyDeck));
    assert_eq!(empty.peek_from_top(0), Err(DeckError::IndexOutOfRange));

    let pile = deck(&[Rank::Two, Rank::Three]);
    assert_eq!(pile.peek_from_top(1), Ok(card(Rank::Three)));
    assert_eq!(pile.peek_from_top(-2), Ok(card(Rank::Two)));
    assert_eq!(pile.peek_from_top(2), Err(DeckError::IndexOutOfRange));
    assert_eq!(pile.peek_from_top(-3), Err(DeckError::IndexOutOfRange));
}

#[test]
fn penalize_moves_three_cards_reversed() {
    let mut source = deck(&[Rank::Two, Rank::Three, Rank::Four]);
    let mut pile = deck(&[Rank::King]);

    Deck::penalize(&mut source, &mut pile).unwrap();

    assert!(source.is_empty());
    assert_eq!(
        ranks(&pile),
        [Rank::Four, Rank::Three, Rank::Two, Rank::King]
    );
}

#[test]
fn penalize_with_two_cards_moves_nothing() {
    let mut source = deck(&[Rank::Two, Rank::Three]);
    let mut pile = Deck::empty();

    assert_eq!(
        Deck::penalize(&mut source, &mut pile),
        Err(DeckError::InsufficientCards)
    );
    assert_eq!(source.len(), 2);
    assert!(pile.is_empty());
}

#[test]
fn detector_classifies_pile_tops() {
    assert_eq!(detect(&Deck::empty()), Detection::NoEvent);
    assert_eq!(detect(&deck(&[Rank::Ace])), Detection::NoEvent);
    assert_eq!(detect(&deck(&[Rank::Ace, Rank::Ace])), Detection::Double);
    assert_eq!(
        detect(&deck(&[Rank::Two, Rank::Five, Rank::Two])),
        Detection::Sandwich
    );
    assert_eq!(
        detect(&deck(&[Rank::Two, Rank::Three, Rank::Four])),
        Detection::NoEvent
    );
    // Only the top three cards count.
    assert_eq!(
        detect(&deck(&[Rank::Two, Rank::Three, Rank::Four, Rank::Two])),
        Detection::NoEvent
    );

    let triple = detect(&deck(&[Rank::Ace, Rank::Ace, Rank::Ace]));
    assert_eq!(triple, Detection::DoubleAndSandwich);
    assert_eq!(
        triple.events().collect::<Vec<_>>(),
        [PileEvent::Double, PileEvent::Sandwich]
    );
    assert_eq!(Detection::NoEvent.events().count(), 0);
    assert!(triple.is_event());
    assert!(!Detection::NoEvent.is_event());
}

#[test]
fn slap_window_is_strict() {
    let just_in_time = Reaction::Pressed {
        key: Key::Slap,
        elapsed: WAIT - Duration::from_nanos(1),
    };
    let on_the_deadline = Reaction::Pressed {
        key: Key::Slap,
        elapsed: WAIT,
    };
    let wrong_key = Reaction::Pressed {
        key: Key::Draw,
        elapsed: Duration::ZERO,
    };

    assert_eq!(slap_winner(just_in_time, WAIT), Side::Player);
    assert_eq!(slap_winner(on_the_deadline, WAIT), Side::Opponent);
    assert_eq!(slap_winner(wrong_key, WAIT), Side::Opponent);
    assert_eq!(slap_winner(Reaction::TimedOut, WAIT), Side::Opponent);
}

#[test]
fn award_pile_empties_the_pile() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut pile = deck(&[Rank::Queen, Rank::King]);
    let mut winner = deck(&[Rank::Two]);

    assert_eq!(award_pile(&mut pile, &mut winner, &mut rng), 2);
    assert!(pile.is_empty());
    assert_eq!(winner.len(), 3);

    let mut oldest_first = deck(&[Rank::Queen, Rank::King]).take_oldest_first();
    assert_eq!(oldest_first.remove(0).rank(), Rank::King);
}

#[test]
fn key_mapping() {
    assert_eq!(Key::from_char('d'), Key::Draw);
    assert_eq!(Key::from_char('s'), Key::Slap);
    assert_eq!(Key::from_char('i'), Key::Instructions);
    assert_eq!(Key::from_char('q'), Key::Quit);
    assert_eq!(Key::from_char('D'), Key::CapsLockDraw);
    assert_eq!(Key::from_char('x'), Key::Other);
}

#[test]
fn fresh_game_deals_evenly() {
    let game = Game::new(GameOptions::default(), 42);
    assert_eq!(game.player_deck.len(), 26);
    assert_eq!(game.opponent_deck.len(), 26);
    assert!(game.discard_pile.is_empty());
    assert!(game.cards_conserved());

    let board = game.snapshot();
    assert_eq!(board.top_card, None);
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "🃏 computer 26");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "🃏 you 26");
    assert!(text.ends_with("Press q to quit"));
}

#[test]
fn same_seed_same_deal() {
    let a = Game::new(GameOptions::default(), 7);
    let b = Game::new(GameOptions::default(), 7);
    assert_eq!(a.player_deck, b.player_deck);
    assert_eq!(a.opponent_deck, b.opponent_deck);
}

#[test]
fn direct_actions_check_turn() {
    let mut game = quiet_game(&[Rank::Two], &[Rank::Three]);

    assert_eq!(game.draw(Side::Opponent), Err(ActionError::NotYourTurn));
    assert_eq!(game.draw(Side::Player), Ok(Detection::NoEvent));
    assert_eq!(game.discard_pile.top(), Some(card(Rank::Two)));

    game.end_turn();
    assert_eq!(game.state(), GameState::OpponentTurn);
    assert_eq!(game.turns(), 1);

    game.quit();
    assert_eq!(game.state(), GameState::GameOver(EndReason::ExitedEarly));
    assert_eq!(game.draw(Side::Opponent), Err(ActionError::GameOver));
    assert_eq!(game.false_slap(Side::Opponent), Err(ActionError::GameOver));
}

#[test]
fn drawing_from_an_empty_deck_is_an_error() {
    let mut game = quiet_game(&[], &[Rank::Two]);
    assert_eq!(game.draw(Side::Player), Err(ActionError::EmptyDeck));
    assert!(game.discard_pile.is_empty());
}

#[test]
fn penalty_is_at_least_one_card() {
    let options = GameOptions::default().with_penalty_cards(0);
    assert_eq!(options.penalty_cards, 1);

    let mut game = quiet_game(&[Rank::Two, Rank::Three], &[Rank::Four]);
    game.options.penalty_cards = 0;
    assert_eq!(
        game.false_slap(Side::Player),
        Ok(Penalty::Paid { cards: 1 })
    );
    assert_eq!(game.player_deck.len(), 1);
    assert_eq!(game.discard_pile.top(), Some(card(Rank::Two)));
}

#[test]
fn game_ends_only_at_turn_entry() {
    let mut game = quiet_game(&[], &[Rank::Two]);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.enter_turn(),
        GameState::GameOver(EndReason::PlayerLost)
    );

    let mut game = quiet_game(&[Rank::Two], &[]);
    assert_eq!(game.enter_turn(), GameState::PlayerTurn);
    game.draw(Side::Player).unwrap();
    // The human is now empty, but it is not their turn.
    game.end_turn();
    assert_eq!(game.enter_turn(), GameState::GameOver(EndReason::PlayerWon));
}

#[test]
fn false_slap_with_too_few_cards_forfeits_the_deck() {
    let mut game = quiet_game(&[Rank::Two, Rank::Three], &[Rank::Four]);

    assert_eq!(
        game.false_slap(Side::Player),
        Ok(Penalty::Forfeited { cards: 2 })
    );
    assert!(game.player_deck.is_empty());
    assert_eq!(game.discard_pile.len(), 2);
    assert_eq!(
        game.enter_turn(),
        GameState::GameOver(EndReason::PlayerLost)
    );
}

#[test]
fn double_won_by_human() {
    let game = quiet_game(
        &[Rank::Seven, Rank::Two, Rank::Four],
        &[Rank::Seven, Rank::Three, Rank::Five],
    );
    let mut input = Script::new(&[Key::Draw, Key::Quit], &[slap_after(100)]);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::ExitedEarly);
    assert_eq!(summary.turns, 2);
    assert_eq!(summary.slaps_won, 1);
    assert_eq!(summary.slaps_lost, 0);
    assert_eq!(summary.player_cards, 4);
    assert_eq!(summary.opponent_cards, 2);
    assert_eq!(input.deadlines, [WAIT]);

    let notices = display.notices();
    assert_eq!(
        notices,
        [
            Notice::SlapResult {
                event: PileEvent::Double,
                winner: Side::Player,
            },
            Notice::GameOver(EndReason::ExitedEarly),
        ]
    );
    assert_eq!(
        display.last_board(),
        Some(BoardSnapshot {
            opponent_cards: 2,
            top_card: None,
            player_cards: 4,
        })
    );
}

#[test]
fn slap_after_the_deadline_is_not_a_false_slap() {
    let game = quiet_game(
        &[Rank::Seven, Rank::Two, Rank::Four],
        &[Rank::Seven, Rank::Three, Rank::Five],
    );
    let mut input =
        Script::new(&[Key::Draw, Key::Quit], &[Reaction::TimedOut]).with_late_key(Key::Slap);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::ExitedEarly);
    assert_eq!(summary.slaps_lost, 1);
    assert_eq!(summary.penalties, 0);
    assert_eq!(summary.player_cards, 2);
    assert_eq!(summary.opponent_cards, 4);
    assert!(input.buffered.is_empty());
    assert_eq!(
        display.notices(),
        [
            Notice::SlapResult {
                event: PileEvent::Double,
                winner: Side::Opponent,
            },
            Notice::GameOver(EndReason::ExitedEarly),
        ]
    );
}

#[test]
fn board_is_held_after_turns_and_results() {
    let game = quiet_game(
        &[Rank::Seven, Rank::Two, Rank::Four],
        &[Rank::Seven, Rank::Three, Rank::Five],
    );
    let turn_pause = game.options.turn_pause;
    let result_pause = game.options.result_pause;
    let mut input = Script::new(&[Key::Draw, Key::Quit], &[slap_after(100)]);
    let mut display = Recorder::default();

    TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    let board = |opponent_cards, top_card, player_cards| {
        Shown::Board(BoardSnapshot {
            opponent_cards,
            top_card,
            player_cards,
        })
    };
    assert_eq!(
        display.shown,
        [
            board(3, None, 3),
            board(3, Some(card(Rank::Seven)), 2),
            Shown::Pause(turn_pause),
            board(2, Some(card(Rank::Seven)), 2),
            board(2, None, 4),
            Shown::Notice(Notice::SlapResult {
                event: PileEvent::Double,
                winner: Side::Player,
            }),
            Shown::Pause(result_pause),
            Shown::Pause(turn_pause),
            Shown::Notice(Notice::GameOver(EndReason::ExitedEarly)),
        ]
    );
}

#[test]
fn late_slap_gives_sandwich_to_opponent() {
    let game = quiet_game(
        &[Rank::Nine, Rank::Nine, Rank::Ace],
        &[Rank::Six, Rank::Two],
    );
    let mut input = Script::new(
        &[Key::Draw, Key::Draw, Key::Quit],
        &[Reaction::Pressed {
            key: Key::Slap,
            elapsed: WAIT,
        }],
    );
    let mut display = Recorder::default();
    let mut engine = TurnEngine::new(game, &mut input, &mut display);

    let summary = engine.run().unwrap();

    assert_eq!(summary.slaps_lost, 1);
    let game = engine.game();
    assert_eq!(game.player_deck.len(), 1);
    // The opponent kept one card, won 9, 6, 9, then drew once more.
    assert_eq!(game.opponent_deck.len(), 3);
    assert_eq!(game.discard_pile.len(), 1);
    assert_eq!(game.total_cards(), 5);
    drop(engine);
    assert!(display.notices().contains(&Notice::SlapResult {
        event: PileEvent::Sandwich,
        winner: Side::Opponent,
    }));
}

#[test]
fn triple_opens_double_then_sandwich() {
    // The penalty stacks 5, A, A so the top reads A, A, 5; drawing the next
    // ace makes three in a row.
    let game = quiet_game(
        &[Rank::Five, Rank::Ace, Rank::Ace, Rank::Ace, Rank::Nine],
        &[Rank::Two, Rank::Three],
    );
    let mut input = Script::new(
        &[Key::Slap, Key::Draw, Key::Quit],
        &[slap_after(10), Reaction::TimedOut],
    );
    let mut display = Recorder::default();
    let mut engine = TurnEngine::new(game, &mut input, &mut display);

    let summary = engine.run().unwrap();

    assert_eq!(summary.penalties, 1);
    assert_eq!(summary.slaps_won, 1);
    assert_eq!(summary.slaps_lost, 1);
    assert_eq!(engine.game().player_deck.len(), 5);
    // The empty-pile Sandwich hands over nothing; the opponent then draws.
    assert_eq!(engine.game().opponent_deck.len(), 1);
    drop(engine);

    assert_eq!(
        display.notices(),
        [
            Notice::Penalty {
                side: Side::Player,
                cards: 3,
            },
            Notice::SlapResult {
                event: PileEvent::Double,
                winner: Side::Player,
            },
            Notice::SlapResult {
                event: PileEvent::Sandwich,
                winner: Side::Opponent,
            },
            Notice::GameOver(EndReason::ExitedEarly),
        ]
    );
}

#[test]
fn penalty_of_exactly_three_cards_loses_on_reentry() {
    let game = quiet_game(&[Rank::Two, Rank::Three, Rank::Four], &[Rank::Five]);
    let mut input = Script::new(&[Key::Slap], &[]);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::PlayerLost);
    assert_eq!(summary.turns, 0);
    assert_eq!(summary.player_cards, 0);
}

#[test]
fn insufficient_penalty_waits_for_a_key() {
    let game = quiet_game(&[Rank::Two], &[Rank::Five]);
    let mut input = Script::new(&[Key::Slap, Key::Other], &[]);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::PlayerLost);
    assert!(input.keys.is_empty());
    assert_eq!(
        display.notices(),
        [
            Notice::InsufficientCards { side: Side::Player },
            Notice::PressAnyKey,
            Notice::GameOver(EndReason::PlayerLost),
        ]
    );
}

#[test]
fn stray_keys_keep_the_turn() {
    let game = quiet_game(&[Rank::Two], &[Rank::Three, Rank::Four]);
    let mut input = Script::new(
        &[
            Key::Other,
            Key::CapsLockDraw,
            Key::Instructions,
            Key::Draw,
            Key::Draw,
        ],
        &[],
    );
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    // The key after the instructions only dismisses them, so the next draw
    // is the human's single card.
    assert_eq!(summary.reason, EndReason::PlayerLost);
    assert_eq!(summary.turns, 2);
    assert_eq!(
        display.notices()[..4],
        [
            Notice::WrongKey,
            Notice::CapsLock,
            Notice::Instructions,
            Notice::InstructionsPrompt,
        ]
    );
}

#[test]
fn quit_from_instructions() {
    let game = quiet_game(&[Rank::Two], &[Rank::Three]);
    let mut input = Script::new(&[Key::Instructions, Key::Quit], &[]);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::ExitedEarly);
    assert_eq!(summary.player_cards, 1);
}

#[test]
fn opponent_running_out_wins_the_game() {
    let game = quiet_game(&[Rank::Two, Rank::Three], &[Rank::Four]);
    let mut input = Script::new(&[Key::Draw, Key::Draw], &[]);
    let mut display = Recorder::default();

    let summary = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(summary.reason, EndReason::PlayerWon);
    assert_eq!(summary.turns, 3);
    assert_eq!(
        display.notices(),
        [Notice::GameOver(EndReason::PlayerWon)]
    );
}

#[test]
fn intro_reads_two_keys_before_the_board() {
    let options = GameOptions::default().with_show_intro(true);
    let game = Game::new(options, 5);
    let mut input = Script::new(&[Key::Other, Key::Other, Key::Quit], &[]);
    let mut display = Recorder::default();

    TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap();

    assert_eq!(
        display.shown[..4],
        [
            Shown::Notice(Notice::StartPrompt),
            Shown::Notice(Notice::Instructions),
            Shown::Notice(Notice::PressAnyKey),
            Shown::Board(BoardSnapshot {
                opponent_cards: 26,
                top_card: None,
                player_cards: 26,
            }),
        ]
    );
}

#[test]
fn input_failure_is_reported() {
    let game = quiet_game(&[Rank::Two], &[Rank::Three]);
    let mut input = Script::new(&[], &[]);
    let mut display = Recorder::default();

    let err = TurnEngine::new(game, &mut input, &mut display)
        .run()
        .unwrap_err();
    assert_eq!(err, slaprs::EngineError::Input(ScriptEnded));
}

#[derive(Debug)]
struct Drawer {
    slap_first: bool,
}

impl Policy for Drawer {
    fn next_key(&mut self, _game: &Game) -> Key {
        if std::mem::take(&mut self.slap_first) {
            Key::Slap
        } else {
            Key::Draw
        }
    }
}

#[test]
fn custom_opponent_policy_is_dispatched() {
    let game = quiet_game(
        &[Rank::Two, Rank::Three],
        &[Rank::Four, Rank::Five, Rank::Six, Rank::Seven],
    );
    let mut input = Script::new(&[Key::Draw, Key::Quit], &[]);
    let mut display = Recorder::default();

    let summary = TurnEngine::with_opponent(
        game,
        &mut input,
        &mut display,
        Drawer { slap_first: true },
    )
    .run()
    .unwrap();

    assert_eq!(summary.opponent_cards, 0);
    // The opponent's own false slap is not counted against the human.
    assert_eq!(summary.penalties, 0);
    assert!(display.notices().contains(&Notice::Penalty {
        side: Side::Opponent,
        cards: 3,
    }));
}

#[derive(Debug, Default)]
struct Alternating {
    slap: bool,
}

impl InputSource for Alternating {
    type Error = Infallible;

    fn read_key(&mut self) -> Result<Key, Infallible> {
        Ok(Key::Draw)
    }

    fn read_key_with_deadline(&mut self, _deadline: Duration) -> Result<Reaction, Infallible> {
        self.slap = !self.slap;
        Ok(if self.slap {
            slap_after(1)
        } else {
            Reaction::TimedOut
        })
    }
}

#[test]
fn cards_are_conserved_through_play() {
    let game = Game::new(GameOptions::default().with_show_intro(false), 11);
    let mut display = Recorder::default();
    let mut engine = TurnEngine::new(game, Alternating::default(), &mut display);

    for _ in 0..500 {
        let state = engine.step().unwrap();
        assert_eq!(engine.game().total_cards(), DECK_SIZE);
        if matches!(state, GameState::GameOver(_)) {
            break;
        }
    }
}
