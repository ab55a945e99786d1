use crate::primitives::*;

pub fn points_card(card: ECard) -> isize {
    match card.schlag() {
        ESchlag::Seven | ESchlag::Eight | ESchlag::Nine => 0,
        ESchlag::Jack => 2,
        ESchlag::Queen => 3,
        ESchlag::King => 4,
        ESchlag::Ten => 10,
        ESchlag::Ace => 11,
    }
}

pub fn points_cards(slccard: &[ECard]) -> isize {
    slccard.iter()
        .map(|&card| points_card(card))
        .sum()
}

pub fn points_stich(stich: &SStich) -> isize {
    stich.iter()
        .map(|(_epi, &card)| points_card(card))
        .sum()
}

#[test]
fn test_points_cards() {
    use crate::primitives::card::ECard::*;
    assert_eq!(points_cards(&[CJ, HT, D9, DT, SK]), 2 + 10 + 0 + 10 + 4);
    assert_eq!(
        <ECard as plain_enum::PlainEnum>::values().map(points_card).sum::<isize>(),
        120,
    );
}
