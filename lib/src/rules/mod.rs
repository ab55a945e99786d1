use crate::primitives::*;
use crate::util::*;
use std::cmp::Ordering;
use arrayvec::ArrayVec;

pub mod card_points;
pub mod payout;

pub use self::{card_points::*, payout::*};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum VTrumpfOrFarbe {
    Trumpf,
    Farbe(EFarbe),
}

pub const N_CARDS_TRUMPF : usize = EFarbe::SIZE + ESchlag::SIZE - 1;

/// The fixed rule set of the engine: a single trump suit whose cards, together
/// with all four Jacks, outrank everything else. There is no game-type
/// selection; the trump suit is chosen once per game instance.
#[derive(Clone, Debug)]
pub struct SRules {
    efarbe_trumpf: EFarbe,
    veccard_trumpf_in_descending_order: ArrayVec<ECard, N_CARDS_TRUMPF>,
}

impl SRules {
    pub fn new(efarbe_trumpf: EFarbe) -> Self {
        let veccard_trumpf_in_descending_order : ArrayVec<ECard, N_CARDS_TRUMPF> = itertools::chain(
            [EFarbe::Clubs, EFarbe::Spades, EFarbe::Hearts, EFarbe::Diamonds].into_iter()
                .map(|efarbe| ECard::new(efarbe, ESchlag::Jack)),
            [ESchlag::Ace, ESchlag::Ten, ESchlag::King, ESchlag::Queen, ESchlag::Nine, ESchlag::Eight, ESchlag::Seven].into_iter()
                .map(|eschlag| ECard::new(efarbe_trumpf, eschlag)),
        ).collect();
        assert_eq!(veccard_trumpf_in_descending_order.len(), N_CARDS_TRUMPF);
        Self {
            efarbe_trumpf,
            veccard_trumpf_in_descending_order,
        }
    }

    pub fn efarbe_trumpf(&self) -> EFarbe {
        self.efarbe_trumpf
    }

    pub fn trumpforfarbe(&self, card: ECard) -> VTrumpfOrFarbe {
        if ESchlag::Jack==card.schlag() || self.efarbe_trumpf==card.farbe() {
            VTrumpfOrFarbe::Trumpf
        } else {
            VTrumpfOrFarbe::Farbe(card.farbe())
        }
    }

    pub fn trumpfs_in_descending_order(&self) -> impl Iterator<Item=ECard>+'_ {
        self.veccard_trumpf_in_descending_order.iter().copied()
    }

    pub fn compare_cards(&self, card_fst: ECard, card_snd: ECard) -> Option<Ordering> {
        let find_trumpf = |card: ECard| {
            self.veccard_trumpf_in_descending_order.iter()
                .position(|&card_trumpf| card_trumpf==card)
        };
        match (find_trumpf(card_fst), find_trumpf(card_snd)) {
            (Some(i_fst), Some(i_snd)) => Some(i_snd.cmp(&i_fst)),
            (Some(_i_fst), None) => Some(Ordering::Greater),
            (None, Some(_i_snd)) => Some(Ordering::Less),
            (None, None) => if_then_some!(
                card_fst.farbe()==card_snd.farbe(),
                card_fst.schlag().cmp(&card_snd.schlag())
            ),
        }
    }

    pub fn all_allowed_cards(&self, stich: &SStich, hand: &SHand) -> SHandVector {
        assert!(!hand.cards().is_empty());
        if stich.is_empty() {
            hand.cards().clone()
        } else {
            let trumpforfarbe_first = self.trumpforfarbe(*stich.first());
            let veccard_same_farbe : SHandVector = hand.cards().iter().copied()
                .filter(|&card| self.trumpforfarbe(card)==trumpforfarbe_first)
                .collect();
            if veccard_same_farbe.is_empty() {
                hand.cards().clone()
            } else {
                veccard_same_farbe
            }
        }
    }

    pub fn card_is_allowed(&self, stich: &SStich, hand: &SHand, card: ECard) -> bool {
        self.all_allowed_cards(stich, hand).contains(&card)
    }

    pub fn winner_index(&self, stich: SFullStich) -> EPlayerIndex {
        let mut epi_best = stich.get().first_playerindex();
        for (epi, card) in stich.get().iter().skip(1) {
            if let Some(Ordering::Less) = self.compare_cards(stich.get()[epi_best], *card) {
                epi_best = epi;
            }
        }
        epi_best
    }
}

#[cfg(test)]
use crate::primitives::card::ECard::*;

#[test]
fn test_trumpforfarbe() {
    let rules = SRules::new(EFarbe::Clubs);
    assert_eq!(rules.trumpforfarbe(CJ), VTrumpfOrFarbe::Trumpf);
    assert_eq!(rules.trumpforfarbe(DJ), VTrumpfOrFarbe::Trumpf);
    assert_eq!(rules.trumpforfarbe(C7), VTrumpfOrFarbe::Trumpf);
    assert_eq!(rules.trumpforfarbe(SA), VTrumpfOrFarbe::Farbe(EFarbe::Spades));
    assert_eq!(rules.trumpforfarbe(H9), VTrumpfOrFarbe::Farbe(EFarbe::Hearts));
}

#[test]
fn test_trumpfs_in_descending_order() {
    assert_eq!(
        SRules::new(EFarbe::Clubs).trumpfs_in_descending_order().collect::<Vec<_>>(),
        [CJ, SJ, HJ, DJ, CA, CT, CK, CQ, C9, C8, C7],
    );
    assert_eq!(
        SRules::new(EFarbe::Hearts).trumpfs_in_descending_order().collect::<Vec<_>>(),
        [CJ, SJ, HJ, DJ, HA, HT, HK, HQ, H9, H8, H7],
    );
}

#[test]
fn test_compare_cards() {
    let rules = SRules::new(EFarbe::Clubs);
    let assert_gt = |card_fst, card_snd| {
        assert_eq!(rules.compare_cards(card_fst, card_snd), Some(Ordering::Greater));
        assert_eq!(rules.compare_cards(card_snd, card_fst), Some(Ordering::Less));
    };
    assert_gt(CJ, SJ);
    assert_gt(SJ, HJ);
    assert_gt(HJ, DJ);
    assert_gt(DJ, CA);
    assert_gt(CA, CT);
    assert_gt(CT, CK);
    assert_gt(C7, SA); // every trump beats every non-trump
    assert_gt(ST, SK);
    assert_gt(HA, HT);
    assert_eq!(rules.compare_cards(H7, S8), None);
    assert_eq!(rules.compare_cards(DA, H9), None);
}

#[test]
fn test_all_allowed_cards() {
    let rules = SRules::new(EFarbe::Clubs);
    let hand = SHand::new_from_iter([CJ, HT, D9, CT, SK]);
    {
        // leading: everything goes
        let stich = SStich::new(EPlayerIndex::EPI0);
        assert_eq!(rules.all_allowed_cards(&stich, &hand).as_slice(), hand.cards().as_slice());
    }
    {
        // Jack led: trump must be followed, Jacks included
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(DJ);
        assert_eq!(rules.all_allowed_cards(&stich, &hand).as_slice(), [CJ, CT]);
    }
    {
        // trump suit led
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(C8);
        assert_eq!(rules.all_allowed_cards(&stich, &hand).as_slice(), [CJ, CT]);
    }
    {
        // plain suit led: only that suit's non-Jacks follow
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(HA);
        assert_eq!(rules.all_allowed_cards(&stich, &hand).as_slice(), [HT]);
    }
    {
        // cannot follow: free discard of the whole hand
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(SA);
        let hand_no_spades = SHand::new_from_iter([CJ, HT, D9]);
        assert_eq!(rules.all_allowed_cards(&stich, &hand_no_spades).as_slice(), hand_no_spades.cards().as_slice());
        assert!(!rules.card_is_allowed(&stich, &hand, D9));
        assert!(rules.card_is_allowed(&stich, &hand, SK));
    }
    {
        // a foreign Jack does not count as its printed suit
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(SA);
        let hand_spade_jack_only = SHand::new_from_iter([SJ, H8, D7]);
        assert_eq!(
            rules.all_allowed_cards(&stich, &hand_spade_jack_only).as_slice(),
            hand_spade_jack_only.cards().as_slice(),
        );
    }
}

#[test]
fn test_all_allowed_cards_soundness() {
    // over random deals: either the returned cards all follow the led
    // trump-or-suit, or the hand contains no such card and is returned whole
    use rand::{SeedableRng, rngs::StdRng};
    let rules = SRules::new(EFarbe::Clubs);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mut veccard = shuffled_deck(&mut rng);
        let hand = SHand::new_from_iter(veccard.drain(..N_CARDS_PER_PLAYER));
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        stich.push(unwrap!(veccard.pop()));
        let trumpforfarbe_first = rules.trumpforfarbe(*stich.first());
        let veccard_allowed = rules.all_allowed_cards(&stich, &hand);
        assert!(!veccard_allowed.is_empty());
        if hand.cards().iter().any(|&card| rules.trumpforfarbe(card)==trumpforfarbe_first) {
            assert!(veccard_allowed.iter().all(|&card| rules.trumpforfarbe(card)==trumpforfarbe_first));
        } else {
            assert_eq!(veccard_allowed.as_slice(), hand.cards().as_slice());
        }
    }
}

#[test]
fn test_winner_index() {
    let rules = SRules::new(EFarbe::Clubs);
    let winner = |epi_first: EPlayerIndex, acard: [ECard; 3]| {
        let mut stich = SStich::new(epi_first);
        for card in acard {
            stich.push(card);
        }
        rules.winner_index(SFullStich::new(&stich))
    };
    use EPlayerIndex::*;
    // highest card of the led suit wins if no trump is involved
    assert_eq!(winner(EPI0, [H9, HA, HK]), EPI1);
    // off-suit discards never win
    assert_eq!(winner(EPI1, [S7, DA, HA]), EPI1);
    // any trump beats the led suit
    assert_eq!(winner(EPI2, [HA, C7, H9]), EPI0);
    // Jacks are trump, highest Jack wins
    assert_eq!(winner(EPI0, [DJ, CJ, SJ]), EPI1);
    // a Jack tops plain trump cards
    assert_eq!(winner(EPI0, [CA, DJ, CT]), EPI1);
    // Jack led forces trump; winner is the better trump
    assert_eq!(winner(EPI1, [HJ, C9, CT]), EPI1);
}

#[test]
fn test_winner_index_totality() {
    // every legally completed trick has a winner among its three players
    use rand::{SeedableRng, rngs::StdRng};
    let rules = SRules::new(EFarbe::Clubs);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let mut veccard = shuffled_deck(&mut rng);
        let mut ahand = EPlayerIndex::map_from_fn(|_epi| SHand::new_from_iter(veccard.drain(..N_CARDS_PER_PLAYER)));
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        for _ in 0..EPlayerIndex::SIZE {
            let epi = unwrap!(stich.current_playerindex());
            let card = *unwrap!(rules.all_allowed_cards(&stich, &ahand[epi]).first());
            ahand[epi].play_card(card);
            stich.push(card);
        }
        let epi_winner = rules.winner_index(SFullStich::new(&stich));
        assert!(stich.get(epi_winner).is_some());
    }
}
