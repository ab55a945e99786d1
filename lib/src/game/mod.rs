use crate::player::*;
use crate::primitives::*;
use crate::rules::*;
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use rand::prelude::*;

pub mod observation;

pub use observation::*;

pub const N_CARDS_SKAT : usize = 2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EGameState {
    Ongoing,
    EarlyAbort,
    Finished,
}

/// The full table: three seated players, their cards and the round/game
/// bookkeeping. The engine is the only mutator of card ownership; each card
/// is in exactly one hand, the trick, a won pile or the skat at any time.
pub struct SGame {
    aplayer: EnumMap<EPlayerIndex, Box<dyn TPlayer>>,
    ahand: EnumMap<EPlayerIndex, SHand>,
    mapepiveccard_won: EnumMap<EPlayerIndex, Vec<ECard>>,
    veccard_skat: ArrayVec<ECard, N_CARDS_SKAT>,
    stich: SStich,
    rules: SRules,
    an_points: EnumMap<EPlayerIndex, isize>,
    epi_dealer: EPlayerIndex,
    epi_declarer: EPlayerIndex,
    n_round: usize,
    n_tricks_played: usize,
    n_rounds_max: usize,
    b_retry_on_illegal: bool,
    egamestate: EGameState,
    // snapshot taken when the most recent trick was resolved; the terminal
    // transitions at game end refer to it
    oobservablestate_after: Option<SObservableState>,
    rng: StdRng,
}

impl SGame {
    pub fn new(n_rounds_max: usize, b_retry_on_illegal: bool) -> SGame {
        debug!("Constructing new fully random game.");
        SGame::new_with_players(
            EPlayerIndex::map_from_fn(|_epi| -> Box<dyn TPlayer> {
                Box::new(SPlayerRandom::new())
            }),
            n_rounds_max,
            b_retry_on_illegal,
        )
    }

    pub fn new_with_seed(n_rounds_max: usize, b_retry_on_illegal: bool, n_seed: u64) -> SGame {
        SGame::new_with_players_and_rng(
            EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
                Box::new(SPlayerRandom::new_with_seed(n_seed.wrapping_add(epi.to_usize().as_num::<u64>())))
            }),
            n_rounds_max,
            b_retry_on_illegal,
            StdRng::seed_from_u64(n_seed),
        )
    }

    pub fn new_with_players(
        aplayer: EnumMap<EPlayerIndex, Box<dyn TPlayer>>,
        n_rounds_max: usize,
        b_retry_on_illegal: bool,
    ) -> SGame {
        SGame::new_with_players_and_rng(aplayer, n_rounds_max, b_retry_on_illegal, StdRng::from_os_rng())
    }

    pub fn new_with_players_and_rng(
        aplayer: EnumMap<EPlayerIndex, Box<dyn TPlayer>>,
        n_rounds_max: usize,
        b_retry_on_illegal: bool,
        rng: StdRng,
    ) -> SGame {
        let mut game = SGame {
            aplayer,
            ahand: EPlayerIndex::map_from_fn(|_epi| SHand::new_from_vec(SHandVector::new())),
            mapepiveccard_won: EPlayerIndex::map_from_fn(|_epi| Vec::new()),
            veccard_skat: ArrayVec::new(),
            stich: SStich::new(EPlayerIndex::EPI0),
            rules: SRules::new(EFarbe::Clubs),
            an_points: EPlayerIndex::map_from_fn(|_epi| 0),
            epi_dealer: EPlayerIndex::EPI0,
            epi_declarer: EPlayerIndex::EPI0,
            n_round: 0,
            n_tricks_played: 0,
            n_rounds_max,
            b_retry_on_illegal,
            egamestate: EGameState::Ongoing,
            oobservablestate_after: None,
            rng,
        };
        game.reset_seats();
        game.reset_cards(game.epi_dealer.wrapping_add(1));
        game
    }

    pub fn observable_state(&self) -> SObservableState {
        SObservableState::new(
            self.mapepiveccard_won.clone(),
            self.stich.clone(),
            self.epi_dealer,
            self.epi_declarer,
        )
    }

    pub fn rules(&self) -> &SRules {
        &self.rules
    }

    pub fn efarbe_trumpf(&self) -> EFarbe {
        self.rules.efarbe_trumpf()
    }

    pub fn stich(&self) -> &SStich {
        &self.stich
    }

    pub fn points(&self) -> &EnumMap<EPlayerIndex, isize> {
        &self.an_points
    }

    pub fn round(&self) -> usize {
        self.n_round
    }

    pub fn rounds_max(&self) -> usize {
        self.n_rounds_max
    }

    pub fn gamestate(&self) -> EGameState {
        self.egamestate
    }

    pub fn player(&self, epi: EPlayerIndex) -> &dyn TPlayer {
        self.aplayer[epi].as_ref()
    }

    pub fn game_winner(&self) -> Result<EPlayerIndex, Error> {
        if self.n_round <= self.n_rounds_max {
            bail!("Game is not finished yet");
        }
        let mut epi_best = EPlayerIndex::EPI0;
        for epi in EPlayerIndex::values().skip(1) {
            if self.an_points[epi] > self.an_points[epi_best] {
                epi_best = epi;
            }
        }
        Ok(epi_best)
    }

    /// Asks the current player for one card and advances the table by that
    /// card. Resolves the trick if this was its third card. Round settlement
    /// is driven by `step_by_round`.
    pub fn step_by_trick(&mut self) {
        assert_eq!(EGameState::Ongoing, self.egamestate);
        assert!(self.n_tricks_played < N_CARDS_PER_PLAYER);
        let epi_current = unwrap!(self.stich.current_playerindex());
        debug!("Round {}, trick {}: {}", self.n_round, self.n_tricks_played, self.stich);
        debug!(
            "Current player: {} (dealer {}, declarer {})",
            epi_current, self.epi_dealer, self.epi_declarer,
        );
        let observablestate_before = self.observable_state();
        let (card_played, b_legal) = loop {
            let card = self.aplayer[epi_current].ask_for_card(
                &observablestate_before,
                &self.ahand[epi_current],
                epi_current,
            );
            let b_legal = self.rules.card_is_allowed(&self.stich, &self.ahand[epi_current], card);
            debug!("Player {} wants to play {} (legal: {})", epi_current, card, b_legal);
            if b_legal || !self.b_retry_on_illegal {
                break (card, b_legal);
            }
        };
        if !b_legal {
            // uncorrected illegal play ends the game as a game event, not an
            // error: the offender is punished through the reward signal
            if self.ahand[epi_current].contains(card_played) {
                self.ahand[epi_current].play_card(card_played);
            }
            self.egamestate = EGameState::EarlyAbort;
            let observablestate_after = self.observable_state();
            for epi in EPlayerIndex::values() {
                self.aplayer[epi].put_transition(
                    if epi==epi_current { -1 } else { 0 },
                    &observablestate_after,
                    &self.ahand[epi],
                    epi,
                );
            }
            debug!("Early game abort, resetting cards");
            self.reset_cards(self.epi_dealer.wrapping_add(1));
            return;
        }
        self.ahand[epi_current].play_card(card_played);
        self.stich.push(card_played);
        if self.stich.is_full() {
            let epi_winner = self.rules.winner_index(SFullStich::new(&self.stich));
            debug!("End of trick reached: {} -- winner: {}", self.stich, epi_winner);
            let stich = std::mem::replace(&mut self.stich, SStich::new(epi_winner));
            self.mapepiveccard_won[epi_winner].extend(stich.into_iter().map(|(_epi, card)| card));
            self.n_tricks_played += 1;
            let observablestate_after = self.observable_state();
            // ordinary trick: everyone learns the new state with zero reward;
            // round and game boundaries deliver their own transitions instead
            if self.n_round != self.n_rounds_max && self.n_tricks_played != N_CARDS_PER_PLAYER {
                for epi in EPlayerIndex::values() {
                    self.aplayer[epi].put_transition(0, &observablestate_after, &self.ahand[epi], epi);
                }
            }
            self.oobservablestate_after = Some(observablestate_after);
        }
        #[cfg(debug_assertions)] {
            if self.n_tricks_played < N_CARDS_PER_PLAYER {
                self.assert_card_conservation();
            }
        }
    }

    /// Plays tricks until the round is settled or the game aborts. On round
    /// completion the declarer receives the skat, the round is settled, and
    /// the seats rotate onwards unless the game is over.
    pub fn step_by_round(&mut self) {
        assert_eq!(EGameState::Ongoing, self.egamestate);
        let n_round_starting = self.n_round;
        while self.n_round==n_round_starting {
            self.step_by_trick();
            if EGameState::EarlyAbort==self.egamestate {
                return;
            }
            if self.n_tricks_played==N_CARDS_PER_PLAYER {
                debug!("End of round reached");
                self.mapepiveccard_won[self.epi_declarer].extend(self.veccard_skat.iter().copied());
                let b_declarer_win = declarer_wins(&self.mapepiveccard_won[self.epi_declarer]);
                let n_payout = payout_round(&self.rules, &self.mapepiveccard_won[self.epi_declarer]);
                debug!(
                    "Declarer {} has won: {} (payout {})",
                    self.epi_declarer, b_declarer_win, n_payout,
                );
                self.an_points[self.epi_declarer] += n_payout;
                debug!("New game points: {}", self.an_points.iter().join(", "));
                self.n_round += 1;
                if self.n_round <= self.n_rounds_max {
                    self.epi_declarer = self.epi_declarer.wrapping_add(1);
                    self.epi_dealer = self.epi_dealer.wrapping_add(1);
                    self.n_tricks_played = 0;
                    self.reset_cards(self.epi_dealer.wrapping_add(1));
                }
            }
        }
    }

    /// Plays rounds until the game is decided, then notifies every player of
    /// the terminal reward.
    pub fn step_by_game(&mut self) {
        while EGameState::Ongoing==self.egamestate {
            self.step_by_round();
            if EGameState::EarlyAbort==self.egamestate {
                return;
            }
            if self.n_round > self.n_rounds_max {
                let epi_winner = unwrap!(self.game_winner());
                let observablestate_after = unwrap!(self.oobservablestate_after.clone());
                for epi in EPlayerIndex::values() {
                    self.aplayer[epi].put_transition(
                        if epi==epi_winner { 1 } else { -1 },
                        &observablestate_after,
                        &self.ahand[epi],
                        epi,
                    );
                }
                self.egamestate = EGameState::Finished;
                debug!("Game finished -- winner: {}", epi_winner);
            }
        }
    }

    /// Starts the game over: fresh points, freshly drawn seats, fresh deal,
    /// and runs it to its end.
    pub fn run_new_game(&mut self) {
        self.an_points = EPlayerIndex::map_from_fn(|_epi| 0);
        self.reset_seats();
        self.egamestate = EGameState::Ongoing;
        self.n_round = 0;
        self.n_tricks_played = 0;
        self.oobservablestate_after = None;
        self.reset_cards(self.epi_dealer.wrapping_add(1));
        self.step_by_game();
    }

    fn reset_seats(&mut self) {
        self.epi_declarer = EPlayerIndex::wrapped_from_usize(self.rng.random_range(0..EPlayerIndex::SIZE));
        self.epi_dealer = EPlayerIndex::wrapped_from_usize(self.rng.random_range(0..EPlayerIndex::SIZE));
    }

    fn reset_cards(&mut self, epi_first: EPlayerIndex) {
        self.stich = SStich::new(epi_first);
        for veccard_won in self.mapepiveccard_won.iter_mut() {
            veccard_won.clear();
        }
        let mut veccard = shuffled_deck(&mut self.rng);
        assert_eq!(veccard.len(), EPlayerIndex::SIZE*N_CARDS_PER_PLAYER + N_CARDS_SKAT);
        for epi in EPlayerIndex::values() {
            self.ahand[epi] = SHand::new_from_iter(veccard.drain(..N_CARDS_PER_PLAYER));
            debug!("Hand {}: {}", epi, SDisplayCardSlice(self.ahand[epi].cards().as_slice()));
        }
        self.veccard_skat = veccard.iter().copied().collect();
        assert_eq!(self.veccard_skat.len(), N_CARDS_SKAT);
        debug!("Skat: {}", SDisplayCardSlice(self.veccard_skat.as_slice()));
        #[cfg(debug_assertions)] self.assert_card_conservation();
    }

    // every card belongs to exactly one of hand/trick/won pile/skat
    #[cfg(debug_assertions)]
    fn assert_card_conservation(&self) {
        let mut mapcardn = ECard::map_from_fn(|_card| 0usize);
        for epi in EPlayerIndex::values() {
            for &card in self.ahand[epi].cards().iter() {
                mapcardn[card] += 1;
            }
            for &card in self.mapepiveccard_won[epi].iter() {
                mapcardn[card] += 1;
            }
        }
        for (_epi, &card) in self.stich.iter() {
            mapcardn[card] += 1;
        }
        for &card in self.veccard_skat.iter() {
            mapcardn[card] += 1;
        }
        assert!(mapcardn.iter().all(|&n_count| 1==n_count));
    }
}

#[test]
fn test_trick_steps() {
    let mut game = SGame::new_with_seed(/*n_rounds_max*/1000, /*b_retry_on_illegal*/true, /*n_seed*/0);
    let n_round_initial = game.round();
    game.step_by_trick();
    assert_eq!(game.round(), n_round_initial);
    assert_eq!(game.stich().size(), 1);
    game.step_by_trick();
    assert_eq!(game.round(), n_round_initial);
    assert_eq!(game.stich().size(), 2);
    game.step_by_trick(); // completes the trick
    assert_eq!(game.round(), n_round_initial);
    assert_eq!(game.stich().size(), 0);
    assert_eq!(game.stich().first_playerindex(), unwrap!(game.stich().current_playerindex()));
}

#[test]
fn test_whole_game() {
    let mut game = SGame::new_with_seed(/*n_rounds_max*/1000, /*b_retry_on_illegal*/true, /*n_seed*/123);
    game.run_new_game();
    assert_eq!(game.gamestate(), EGameState::Finished);
    assert_eq!(game.round(), game.rounds_max()+1);
    let epi_winner = unwrap!(game.game_winner());
    for epi in EPlayerIndex::values() {
        assert!(game.points()[epi] <= game.points()[epi_winner]);
        let slctransition = game.player(epi).transitions();
        assert!(!slctransition.is_empty());
        assert_eq!(
            unwrap!(slctransition.last()).n_reward,
            if epi==epi_winner { 1 } else { -1 },
        );
    }
}

#[test]
fn test_role_rotation() {
    let mut game = SGame::new_with_seed(/*n_rounds_max*/10, /*b_retry_on_illegal*/true, /*n_seed*/5);
    let observablestate_initial = game.observable_state();
    for n_rounds_completed in 1..=5 {
        game.step_by_round();
        let observablestate = game.observable_state();
        assert_eq!(
            observablestate.epi_dealer,
            observablestate_initial.epi_dealer.wrapping_add(n_rounds_completed),
        );
        assert_eq!(
            observablestate.epi_declarer,
            observablestate_initial.epi_declarer.wrapping_add(n_rounds_completed),
        );
        assert_eq!(
            unwrap!(game.stich().current_playerindex()),
            observablestate.epi_dealer.wrapping_add(1),
        );
    }
}

#[cfg(debug_assertions)]
#[test]
fn test_conservation() {
    let mut game = SGame::new_with_seed(/*n_rounds_max*/5, /*b_retry_on_illegal*/true, /*n_seed*/9);
    for _ in 0..9 {
        game.step_by_trick();
        game.assert_card_conservation();
    }
}

#[test]
fn test_no_player_bias() {
    // with uniformly random play on all three seats, each seat's share of
    // game wins must stay near one third
    let n_games = 100;
    let mut mapepin_won = EPlayerIndex::map_from_fn(|_epi| 0isize);
    let mut game = SGame::new_with_seed(/*n_rounds_max*/10, /*b_retry_on_illegal*/true, /*n_seed*/17);
    for _ in 0..n_games {
        game.run_new_game();
        mapepin_won[unwrap!(game.game_winner())] += 1;
    }
    let f_sigma = (n_games as f64 * 2./9.).sqrt();
    let n_tolerance = (4. * f_sigma).ceil() as isize;
    for epi in EPlayerIndex::values() {
        assert!((mapepin_won[epi] - n_games/3).abs() <= n_tolerance, "{:?}", mapepin_won);
    }
}

#[test]
fn test_early_abort() {
    use std::{cell::RefCell, rc::Rc};
    struct SPlayerCheat {
        vecn_reward: Rc<RefCell<Vec<isize>>>,
    }
    impl TPlayer for SPlayerCheat {
        fn ask_for_card(&mut self, _observablestate: &SObservableState, hand: &SHand, _epi: EPlayerIndex) -> ECard {
            // always answers with a card it does not even hold
            unwrap!(<ECard as PlainEnum>::values().find(|&card| !hand.contains(card)))
        }
        fn put_transition(&mut self, n_reward: isize, _observablestate_new: &SObservableState, _hand: &SHand, _epi: EPlayerIndex) {
            self.vecn_reward.borrow_mut().push(n_reward);
        }
        fn transitions(&self) -> &[STransition] {
            &[]
        }
        fn name(&self) -> &str {
            "cheat"
        }
    }
    let vecn_reward = Rc::new(RefCell::new(Vec::new()));
    let mut game = SGame::new_with_players(
        EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
            if EPlayerIndex::EPI0==epi {
                Box::new(SPlayerCheat{vecn_reward: Rc::clone(&vecn_reward)})
            } else {
                Box::new(SPlayerRandom::new_with_seed(2))
            }
        }),
        /*n_rounds_max*/10,
        /*b_retry_on_illegal*/false,
    );
    for _ in 0..EPlayerIndex::SIZE {
        if EGameState::EarlyAbort==game.gamestate() {
            break;
        }
        game.step_by_trick();
    }
    assert_eq!(game.gamestate(), EGameState::EarlyAbort);
    assert_eq!(vecn_reward.borrow().as_slice(), [-1]);
    // cards are reset so that the game can be restarted explicitly
    assert!(game.ahand.iter().all(|hand| hand.cards().len()==N_CARDS_PER_PLAYER));
    assert!(game.stich().is_empty());
    // scores are untouched by an abort
    assert!(game.points().iter().all(|&n_points| 0==n_points));
    // a restart runs afresh, meets the cheat again and aborts anew
    game.run_new_game();
    assert_eq!(game.gamestate(), EGameState::EarlyAbort);
}
