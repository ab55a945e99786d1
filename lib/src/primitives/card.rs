use crate::util::*;
use std::{
    fmt,
    str::FromStr,
};
use serde::{Serializer};

plain_enum_mod!(modefarbe, EFarbe {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
});

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        } )
    }
}

plain_enum_mod!(modeschlag, ESchlag {
    Seven,
    Eight,
    Nine,
    Queen,
    King,
    Ten,
    Ace,
    Jack,
});

impl fmt::Display for ESchlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub enum ECard {
    D7, D8, D9, DQ, DK, DT, DA, DJ,
    H7, H8, H9, HQ, HK, HT, HA, HJ,
    S7, S8, S9, SQ, SK, ST, SA, SJ,
    C7, C8, C9, CQ, CK, CT, CA, CJ,
}

impl ECard {
    pub const fn new(efarbe: EFarbe, eschlag: ESchlag) -> ECard {
        unsafe {
            std::mem::transmute(efarbe as u8 * (ESchlag::SIZE as u8) + eschlag as u8)
        }
    }
    pub const fn farbe(self) -> EFarbe {
        unsafe{ std::mem::transmute(self as usize / ESchlag::SIZE) }
    }
    pub const fn schlag(self) -> ESchlag {
        unsafe{ std::mem::transmute(self as usize % ESchlag::SIZE) }
    }

    fn char_farbe_ascii(self) -> char {
        match self.farbe() {
            EFarbe::Diamonds => 'D',
            EFarbe::Hearts => 'H',
            EFarbe::Spades => 'S',
            EFarbe::Clubs => 'C',
        }
    }

    fn char_schlag(self) -> char {
        match self.schlag() {
            ESchlag::Seven => '7',
            ESchlag::Eight => '8',
            ESchlag::Nine => '9',
            ESchlag::Queen => 'Q',
            ESchlag::King => 'K',
            ESchlag::Ten => 'T',
            ESchlag::Ace => 'A',
            ESchlag::Jack => 'J',
        }
    }

    pub fn to_onehot(self) -> EnumMap<ECard, bool> {
        ECard::map_from_fn(|card| card==self)
    }

    pub fn from_onehot(mapcardb: &EnumMap<ECard, bool>) -> Result<ECard, Error> {
        let mut ocard_single = None;
        for card in <ECard as PlainEnum>::values() {
            if mapcardb[card] {
                if ocard_single.is_some() {
                    bail!("Not a card encoding: more than one bit set.");
                }
                ocard_single = Some(card);
            }
        }
        ocard_single.ok_or_else(|| format_err!("Not a card encoding: no bit set."))
    }
}

unsafe impl PlainEnum for ECard {
    const SIZE : usize = EFarbe::SIZE*ESchlag::SIZE;
    type EnumMapArray<T> = [T; ECard::SIZE];
    unsafe fn from_usize(n: usize) -> Self {
        debug_assert!(n < Self::SIZE);
        std::mem::transmute(n.as_num::<u8>())
    }
    fn to_usize(self) -> usize {
        (self as u8).as_num::<usize>()
    }
}

impl fmt::Debug for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}",
            match self.farbe() {
                EFarbe::Diamonds => "\u{2666}",
                EFarbe::Hearts => "\u{2665}",
                EFarbe::Spades => "\u{2660}",
                EFarbe::Clubs => "\u{2663}",
            },
            self.char_schlag(),
        )
    }
}

impl FromStr for ECard {
    type Err = &'static str;
    fn from_str(str_card: &str) -> Result<Self, Self::Err> {
        let mut itchar = str_card.trim().chars();
        let efarbe = match itchar.next() {
            Some('D') => EFarbe::Diamonds,
            Some('H') => EFarbe::Hearts,
            Some('S') => EFarbe::Spades,
            Some('C') => EFarbe::Clubs,
            _ => return Err("Could not parse card suit"),
        };
        let eschlag = match itchar.next() {
            Some('7') => ESchlag::Seven,
            Some('8') => ESchlag::Eight,
            Some('9') => ESchlag::Nine,
            Some('Q') => ESchlag::Queen,
            Some('K') => ESchlag::King,
            Some('T') => ESchlag::Ten,
            Some('A') => ESchlag::Ace,
            Some('J') => ESchlag::Jack,
            _ => return Err("Could not parse card rank"),
        };
        if itchar.next().is_some() {
            return Err("Trailing input after card");
        }
        Ok(ECard::new(efarbe, eschlag))
    }
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(&format_args!("{}{}", self.char_farbe_ascii(), self.char_schlag()))
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        String::deserialize(deserializer)?
            .parse::<ECard>()
            .map_err(serde::de::Error::custom)
    }
}

pub fn multihot(itcard: impl IntoIterator<Item=ECard>) -> EnumMap<ECard, bool> {
    let mut mapcardb = ECard::map_from_fn(|_card| false);
    for card in itcard {
        mapcardb[card] = true;
    }
    mapcardb
}

pub fn shuffled_deck(rng: &mut impl rand::Rng) -> Vec<ECard> {
    use rand::seq::SliceRandom;
    let mut veccard = <ECard as PlainEnum>::values().collect::<Vec<_>>();
    veccard.shuffle(rng);
    veccard
}

#[test]
fn test_farbe_schlag_enumerators() {
    assert_eq!(EFarbe::values().count(), 4);
    assert_eq!(ESchlag::values().count(), 8);
    assert_eq!(<ECard as PlainEnum>::values().count(), 32);
}

#[test]
fn test_card_ctor() {
    macro_rules! explicit_test{($($efarbe:ident, $eschlag:ident, $card:ident)+) => {{
        $({
            const CARD : ECard = ECard::new(EFarbe::$efarbe, ESchlag::$eschlag);
            assert_eq!(CARD, ECard::$card);
            assert_eq!(CARD.farbe(), EFarbe::$efarbe);
            assert_eq!(CARD.schlag(), ESchlag::$eschlag);
        })+
    }}}
    explicit_test!(
        Diamonds, Seven, D7
        Diamonds, Eight, D8
        Diamonds, Nine, D9
        Diamonds, Queen, DQ
        Diamonds, King, DK
        Diamonds, Ten, DT
        Diamonds, Ace, DA
        Diamonds, Jack, DJ
        Hearts, Seven, H7
        Hearts, Eight, H8
        Hearts, Nine, H9
        Hearts, Queen, HQ
        Hearts, King, HK
        Hearts, Ten, HT
        Hearts, Ace, HA
        Hearts, Jack, HJ
        Spades, Seven, S7
        Spades, Eight, S8
        Spades, Nine, S9
        Spades, Queen, SQ
        Spades, King, SK
        Spades, Ten, ST
        Spades, Ace, SA
        Spades, Jack, SJ
        Clubs, Seven, C7
        Clubs, Eight, C8
        Clubs, Nine, C9
        Clubs, Queen, CQ
        Clubs, King, CK
        Clubs, Ten, CT
        Clubs, Ace, CA
        Clubs, Jack, CJ
    )
}

#[test]
fn test_farbe_schlag_ordering() {
    assert!(EFarbe::Diamonds < EFarbe::Hearts);
    assert!(EFarbe::Hearts < EFarbe::Spades);
    assert!(EFarbe::Spades < EFarbe::Clubs);
    assert!(ESchlag::Seven < ESchlag::Eight);
    assert!(ESchlag::Eight < ESchlag::Nine);
    assert!(ESchlag::Nine < ESchlag::Queen);
    assert!(ESchlag::Queen < ESchlag::King);
    assert!(ESchlag::King < ESchlag::Ten);
    assert!(ESchlag::Ten < ESchlag::Ace);
    assert!(ESchlag::Ace < ESchlag::Jack);
}

#[test]
fn test_serialization() {
    macro_rules! test_card(($($card:ident)*) => {
        $(
            let card = ECard::$card;
            serde_test::assert_tokens(&card, &[
                serde_test::Token::Str(stringify!($card)),
            ]);
        )*
    });
    test_card!(
        D7 D8 D9 DQ DK DT DA DJ
        H7 H8 H9 HQ HK HT HA HJ
        S7 S8 S9 SQ SK ST SA SJ
        C7 C8 C9 CQ CK CT CA CJ
    );
}

#[test]
fn test_onehot() {
    for card in <ECard as PlainEnum>::values() {
        let mapcardb = card.to_onehot();
        assert_eq!(mapcardb.iter().filter(|&&b| b).count(), 1);
        assert_eq!(unwrap!(ECard::from_onehot(&mapcardb)), card);
    }
    assert!(ECard::from_onehot(&ECard::map_from_fn(|_card| false)).is_err());
    assert!(ECard::from_onehot(&multihot([ECard::CJ, ECard::D7])).is_err());
}

#[test]
fn test_shuffled_deck() {
    use rand::{SeedableRng, rngs::StdRng};
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let veccard = shuffled_deck(&mut rng);
        assert_eq!(veccard.len(), 32);
        let mapcardb = multihot(veccard.iter().copied());
        assert!(mapcardb.iter().all(|&b| b));
    }
}
