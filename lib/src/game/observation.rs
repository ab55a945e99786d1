use crate::primitives::*;
use crate::util::*;

/// Everything every player may see: the piles won so far, the trick on the
/// table and the current seat assignment. Handed to players by value; the
/// engine keeps the only mutable copy of the underlying state.
#[derive(Clone, Debug, new)]
pub struct SObservableState {
    pub mapepiveccard_won: EnumMap<EPlayerIndex, Vec<ECard>>,
    pub stich: SStich,
    pub epi_dealer: EPlayerIndex,
    pub epi_declarer: EPlayerIndex,
}

/// One player's view of an observable state: the same public information,
/// re-grouped relative to the viewer's alliance. The declarer plays alone;
/// the other two seats form the opposing alliance.
#[derive(Clone, Debug)]
pub struct SPlayerState {
    pub veccard_hand: Vec<ECard>,
    pub vectplepicard_stich: Vec<(EPlayerIndex, ECard)>,
    pub veccard_stich_friendly: Vec<ECard>,
    pub veccard_stich_hostile: Vec<ECard>,
    pub veccard_won_friendly: Vec<ECard>,
    pub veccard_won_hostile: Vec<ECard>,
    pub b_declarer: bool,
}

impl SPlayerState {
    pub fn new(observablestate: &SObservableState, hand: &SHand, epi_self: EPlayerIndex) -> Self {
        let b_declarer = epi_self==observablestate.epi_declarer;
        let is_friendly = |epi: EPlayerIndex| {
            if b_declarer {
                epi==epi_self
            } else {
                epi!=observablestate.epi_declarer
            }
        };
        let partition_cards = |itcard: &mut dyn Iterator<Item=(EPlayerIndex, ECard)>| {
            let mut veccard_friendly = Vec::new();
            let mut veccard_hostile = Vec::new();
            for (epi, card) in itcard {
                if is_friendly(epi) {
                    veccard_friendly.push(card);
                } else {
                    veccard_hostile.push(card);
                }
            }
            (veccard_friendly, veccard_hostile)
        };
        let (veccard_stich_friendly, veccard_stich_hostile) = partition_cards(
            &mut observablestate.stich.iter().map(|(epi, &card)| (epi, card))
        );
        let (veccard_won_friendly, veccard_won_hostile) = partition_cards(
            &mut EPlayerIndex::values().flat_map(|epi|
                observablestate.mapepiveccard_won[epi].iter().map(move |&card| (epi, card))
            )
        );
        SPlayerState {
            veccard_hand: hand.cards().to_vec(),
            vectplepicard_stich: observablestate.stich.iter().map(|(epi, &card)| (epi, card)).collect(),
            veccard_stich_friendly,
            veccard_stich_hostile,
            veccard_won_friendly,
            veccard_won_hostile,
            b_declarer,
        }
    }
}

/// A labeled experience sample: the state a player acted in, the card it
/// chose, the reward observed and the state that followed.
#[derive(Clone, Debug, new)]
pub struct STransition {
    pub playerstate_before: SPlayerState,
    pub playerstate_after: SPlayerState,
    pub n_reward: isize,
    pub card_action: ECard,
}

/// Collaborator-side bookkeeping: the engine announces rewards together with
/// the state they refer to, and each player pairs that with the action it
/// most recently reported.
#[derive(Debug, Default)]
pub struct STransitionRecorder {
    otplplayerstatecard_last: Option<(SPlayerState, ECard)>,
    vectransition: Vec<STransition>,
}

impl STransitionRecorder {
    pub fn record_action(&mut self, playerstate: SPlayerState, card: ECard) {
        self.otplplayerstatecard_last = Some((playerstate, card));
    }

    pub fn record_outcome(&mut self, n_reward: isize, playerstate_after: SPlayerState) {
        if let Some((playerstate_before, card_action)) = self.otplplayerstatecard_last.take() {
            self.vectransition.push(STransition::new(
                playerstate_before,
                playerstate_after,
                n_reward,
                card_action,
            ));
        }
    }

    pub fn transitions(&self) -> &[STransition] {
        &self.vectransition
    }
}

#[cfg(test)]
fn observablestate_for_test() -> SObservableState {
    use crate::primitives::card::ECard::*;
    let mut stich = SStich::new(EPlayerIndex::EPI1);
    stich.push(HA); // EPI1, the declarer
    stich.push(H7); // EPI2
    SObservableState::new(
        EPlayerIndex::map_from_fn(|epi| match epi {
            EPlayerIndex::EPI0 => vec![C7, S8, SK],
            EPlayerIndex::EPI1 => vec![DT, DA, D9],
            EPlayerIndex::EPI2 => vec![],
        }),
        stich,
        /*epi_dealer*/EPlayerIndex::EPI0,
        /*epi_declarer*/EPlayerIndex::EPI1,
    )
}

#[test]
fn test_playerstate_declarer_view() {
    use crate::primitives::card::ECard::*;
    let observablestate = observablestate_for_test();
    let hand = SHand::new_from_iter([CJ, CT]);
    let playerstate = SPlayerState::new(&observablestate, &hand, EPlayerIndex::EPI1);
    assert!(playerstate.b_declarer);
    assert_eq!(playerstate.veccard_hand, [CJ, CT]);
    assert_eq!(playerstate.veccard_stich_friendly, [HA]);
    assert_eq!(playerstate.veccard_stich_hostile, [H7]);
    assert_eq!(playerstate.veccard_won_friendly, [DT, DA, D9]);
    assert_eq!(playerstate.veccard_won_hostile, [C7, S8, SK]);
    assert_eq!(
        playerstate.vectplepicard_stich,
        [(EPlayerIndex::EPI1, HA), (EPlayerIndex::EPI2, H7)],
    );
}

#[test]
fn test_playerstate_defender_view() {
    use crate::primitives::card::ECard::*;
    let observablestate = observablestate_for_test();
    let hand = SHand::new_from_iter([S7]);
    let playerstate = SPlayerState::new(&observablestate, &hand, EPlayerIndex::EPI0);
    assert!(!playerstate.b_declarer);
    // both defenders are friendly to each other
    assert_eq!(playerstate.veccard_stich_friendly, [H7]);
    assert_eq!(playerstate.veccard_stich_hostile, [HA]);
    assert_eq!(playerstate.veccard_won_friendly, [C7, S8, SK]);
    assert_eq!(playerstate.veccard_won_hostile, [DT, DA, D9]);
}

#[test]
fn test_transitionrecorder() {
    use crate::primitives::card::ECard::*;
    let observablestate = observablestate_for_test();
    let hand = SHand::new_from_iter([S7, CJ]);
    let playerstate = SPlayerState::new(&observablestate, &hand, EPlayerIndex::EPI0);
    let mut transitionrecorder = STransitionRecorder::default();
    // an outcome without a recorded action is dropped
    transitionrecorder.record_outcome(0, playerstate.clone());
    assert!(transitionrecorder.transitions().is_empty());
    transitionrecorder.record_action(playerstate.clone(), S7);
    transitionrecorder.record_outcome(-1, playerstate.clone());
    // a second outcome for the same action is dropped as well
    transitionrecorder.record_outcome(0, playerstate);
    let slctransition = transitionrecorder.transitions();
    assert_eq!(slctransition.len(), 1);
    assert_eq!(slctransition[0].n_reward, -1);
    assert_eq!(slctransition[0].card_action, S7);
}
