pub mod card;
pub mod eplayerindex;
pub mod hand;
pub mod stich;

pub use self::{card::*, eplayerindex::*, hand::*, stich::*};
