use crate::game::observation::*;
use crate::player::*;
use crate::primitives::*;
use crate::util::*;
use rand::prelude::*;

/// Uniformly random policy: picks any card from its hand, legal or not, and
/// relies on the engine's validation. Records every transition it is
/// notified about, so a training harness can drain the experience afterwards.
pub struct SPlayerRandom {
    rng: StdRng,
    transitionrecorder: STransitionRecorder,
}

impl SPlayerRandom {
    pub fn new() -> Self {
        Self::new_with_rng(StdRng::from_os_rng())
    }

    pub fn new_with_seed(n_seed: u64) -> Self {
        Self::new_with_rng(StdRng::seed_from_u64(n_seed))
    }

    fn new_with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            transitionrecorder: STransitionRecorder::default(),
        }
    }
}

impl Default for SPlayerRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl TPlayer for SPlayerRandom {
    fn ask_for_card(&mut self, observablestate: &SObservableState, hand: &SHand, epi: EPlayerIndex) -> ECard {
        assert!(!hand.cards().is_empty());
        let card = *unwrap!(hand.cards().choose(&mut self.rng));
        self.transitionrecorder.record_action(
            SPlayerState::new(observablestate, hand, epi),
            card,
        );
        card
    }

    fn put_transition(&mut self, n_reward: isize, observablestate_new: &SObservableState, hand: &SHand, epi: EPlayerIndex) {
        self.transitionrecorder.record_outcome(
            n_reward,
            SPlayerState::new(observablestate_new, hand, epi),
        );
    }

    fn transitions(&self) -> &[STransition] {
        self.transitionrecorder.transitions()
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[test]
fn test_playerrandom_picks_from_hand() {
    let mut playerrandom = SPlayerRandom::new_with_seed(3);
    let hand = SHand::new_from_iter([ECard::CJ, ECard::H7, ECard::DT]);
    let observablestate = SObservableState::new(
        EPlayerIndex::map_from_fn(|_epi| Vec::new()),
        SStich::new(EPlayerIndex::EPI0),
        /*epi_dealer*/EPlayerIndex::EPI2,
        /*epi_declarer*/EPlayerIndex::EPI0,
    );
    for _ in 0..20 {
        let card = playerrandom.ask_for_card(&observablestate, &hand, EPlayerIndex::EPI0);
        assert!(hand.contains(card));
        playerrandom.put_transition(0, &observablestate, &hand, EPlayerIndex::EPI0);
    }
    assert_eq!(playerrandom.transitions().len(), 20);
}
