use crate::primitives::*;
use crate::rules::{card_points::*, SRules};
use crate::util::*;

pub const N_POINTS_TO_WIN : isize = 61;

pub fn base_value_farbe(efarbe: EFarbe) -> isize {
    match efarbe {
        EFarbe::Diamonds => 9,
        EFarbe::Hearts => 10,
        EFarbe::Spades => 11,
        EFarbe::Clubs => 12,
    }
}

/// 1 plus the length of the unbroken run of trumps, descending from the Clubs
/// Jack, that the declarer's pile either has completely ("with") or lacks
/// completely ("without").
pub fn game_level(rules: &SRules, slccard_won: &[ECard]) -> usize {
    let contains = |card: ECard| slccard_won.contains(&card);
    let mut itcard_trumpf_descending = rules.trumpfs_in_descending_order();
    let b_with = contains(unwrap!(itcard_trumpf_descending.next()));
    itcard_trumpf_descending
        .take_while(|&card| b_with==contains(card))
        .count()
        + 1 // consumed by next()
}

pub fn game_value(rules: &SRules, slccard_won: &[ECard]) -> isize {
    base_value_farbe(rules.efarbe_trumpf()) * game_level(rules, slccard_won).as_num::<isize>()
}

pub fn declarer_wins(slccard_won_declarer: &[ECard]) -> bool {
    points_cards(slccard_won_declarer) >= N_POINTS_TO_WIN
}

/// Point change for the declarer at round end. The two defenders' running
/// totals are untouched by round settlement.
pub fn payout_round(rules: &SRules, slccard_won_declarer: &[ECard]) -> isize {
    let n_game_value = game_value(rules, slccard_won_declarer);
    if declarer_wins(slccard_won_declarer) {
        n_game_value
    } else {
        -2 * n_game_value
    }
}

#[cfg(test)]
use crate::primitives::card::ECard::*;

#[test]
fn test_game_level() {
    let rules = SRules::new(EFarbe::Clubs);
    // "with": run of held top trumps
    assert_eq!(game_level(&rules, &[CJ, SJ, HJ, H7]), 3);
    assert_eq!(game_level(&rules, &[CJ, SJ, HJ, DJ, CA]), 5);
    assert_eq!(game_level(&rules, &[CJ, HJ]), 1);
    // "without": run of missing top trumps
    assert_eq!(game_level(&rules, &[SJ, H7]), 1);
    assert_eq!(game_level(&rules, &[DJ, CA]), 3);
    // a pile holding no trump at all misses the full hierarchy
    assert_eq!(game_level(&rules, &[H7, H8]), N_CARDS_TRUMPF);
    // all trumps held
    assert_eq!(
        game_level(&rules, &rules.trumpfs_in_descending_order().collect::<Vec<_>>()),
        N_CARDS_TRUMPF,
    );
}

#[cfg(test)]
use crate::rules::N_CARDS_TRUMPF;

#[test]
fn test_game_value() {
    assert_eq!(game_value(&SRules::new(EFarbe::Clubs), &[CJ, SJ, H7]), 12*2);
    assert_eq!(game_value(&SRules::new(EFarbe::Hearts), &[CJ, SJ, HJ, S7]), 10*3);
}

#[test]
fn test_payout_round() {
    let rules = SRules::new(EFarbe::Clubs);
    // 61 points: declarer wins the game value
    let veccard_61 = [CA, SA, HA, DA, CT, SK, HQ];
    assert_eq!(points_cards(&veccard_61), 61);
    assert!(declarer_wins(&veccard_61));
    assert_eq!(payout_round(&rules, &veccard_61), 4*12);
    // 60 points: declarer loses twice the game value
    let veccard_60 = [CA, SA, HA, DA, CT, SK, DJ];
    assert_eq!(points_cards(&veccard_60), 60);
    assert!(!declarer_wins(&veccard_60));
    assert_eq!(payout_round(&rules, &veccard_60), -2*3*12);
}
