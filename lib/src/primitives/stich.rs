use crate::primitives::*;
use crate::util::*;
use std::fmt;

pub type SStich = SPlayersInRound<ECard>;

#[derive(Copy, Clone)]
pub struct SFullStich<'stich>(&'stich SStich);

impl<'stich> SFullStich<'stich> {
    pub fn new(stich: &'stich SStich) -> Self {
        assert!(stich.is_full());
        Self(stich)
    }
    pub fn get(&self) -> &SStich {
        self.0
    }
}

impl fmt::Display for SStich {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for epi in EPlayerIndex::values() {
            if epi==self.first_playerindex() {
                write!(f, ">")?;
            } else {
                write!(f, " ")?;
            }
            match self.get(epi) {
                None => {write!(f, "__")?;}
                Some(card) => {write!(f, "{}", card)?;}
            }
        }
        write!(f, "")
    }
}

#[test]
fn test_stich() {
    use crate::primitives::card::ECard::*;
    let acard = [D7, D8, D9];
    for epi_first in EPlayerIndex::values() {
        for n_size in 0..EPlayerIndex::SIZE+1 {
            let mut stich = SStich::new(epi_first);
            for &card in acard.iter().take(n_size) {
                stich.push(card);
            }
            assert_eq!(stich.size(), n_size);
            assert_eq!(stich.first_playerindex(), epi_first);
            assert_eq!(stich.size(), stich.iter().count());
            for (epi, card) in stich.iter() {
                assert_eq!(stich.get(epi), Some(card));
                assert_eq!(stich[epi], *card);
            }
        }
    }
    {
        let mut stich = SStich::new(EPlayerIndex::EPI2);
        stich.push(ECard::new(EFarbe::Clubs, ESchlag::Jack));
        stich.push(ECard::new(EFarbe::Hearts, ESchlag::Seven));
        assert!(stich[EPlayerIndex::EPI2]==ECard::new(EFarbe::Clubs, ESchlag::Jack));
        assert!(stich[EPlayerIndex::EPI0]==ECard::new(EFarbe::Hearts, ESchlag::Seven));
        assert_eq!(stich.iter().count(), 2);
    }
}
