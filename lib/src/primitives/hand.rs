use crate::primitives::card::*;
use arrayvec::ArrayVec;
use crate::util::*;
use std::fmt;
use itertools::Itertools;

pub const N_CARDS_PER_PLAYER : usize = 10;

pub type SHandVector = ArrayVec<ECard, N_CARDS_PER_PLAYER>;

#[derive(Clone, Debug)]
pub struct SHand {
    veccard: SHandVector,
}

impl SHand {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        let mut mapcardb = ECard::map_from_fn(|_card| false);
        for card in self.veccard.iter() {
            verify!(!mapcardb[*card]);
            mapcardb[*card] = true;
        }
    }

    pub fn new_from_vec(veccard: SHandVector) -> SHand {
        let hand = SHand {veccard};
        #[cfg(debug_assertions)]hand.assert_invariant();
        hand
    }
    pub fn new_from_iter(itcard: impl IntoIterator<Item=ECard>) -> SHand {
        Self::new_from_vec(itcard.into_iter().collect())
    }
    pub fn contains(&self, card_check: ECard) -> bool {
        self.veccard
            .iter()
            .any(|&card| card==card_check)
    }
    pub fn play_card(&mut self, card: ECard) {
        self.veccard.remove(unwrap!(self.veccard.iter().position(|&card_hand| card_hand==card)));
        #[cfg(debug_assertions)]self.assert_invariant();
    }
    pub fn add_card(&mut self, card: ECard) {
        debug_assert!(!self.contains(card));
        self.veccard.push(card);
        #[cfg(debug_assertions)]self.assert_invariant();
    }

    pub fn cards(&self) -> &SHandVector {
        &self.veccard
    }
}

pub struct SDisplayCardSlice<'slccard>(pub &'slccard [ECard]);

impl fmt::Display for SDisplayCardSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

pub struct SDisplayCardSliceNumbered<'slccard>(pub &'slccard [ECard]);

impl fmt::Display for SDisplayCardSliceNumbered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter()
            .enumerate()
            .format_with(", ", |(i_card, card), formatter| {
                formatter(&format_args!("{}. {}", i_card+1, card))
            })
        )
    }
}

#[test]
fn test_hand() {
    use super::card::ECard::*;
    let hand = SHand::new_from_iter([CJ, HK, S7]);
    let hand2 = {
        let mut hand2 = hand.clone();
        hand2.play_card(ECard::new(EFarbe::Hearts, ESchlag::King));
        hand2
    };
    assert_eq!(hand.cards().len()-1, hand2.cards().len());
    assert!(hand2.contains(CJ));
    assert!(hand2.contains(S7));
    assert!(!hand2.contains(HK));
}

#[test]
fn test_display_card_slice_numbered() {
    use super::card::ECard::*;
    assert_eq!(
        format!("{}", SDisplayCardSliceNumbered(&[CJ, HT, D9, DT, SK])),
        "1. \u{2663}J, 2. \u{2665}T, 3. \u{2666}9, 4. \u{2666}T, 5. \u{2660}K",
    );
}
