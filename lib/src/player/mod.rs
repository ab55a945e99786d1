use crate::game::observation::*;
use crate::primitives::*;

pub mod playerrandom;

pub use self::playerrandom::SPlayerRandom;

/// Capability contract between the engine and a seat at the table. The
/// engine re-validates whatever `ask_for_card` returns, so implementations
/// are free to answer with any card; `put_transition` is a notification and
/// may be ignored. Hands are owned by the engine and passed in read-only.
pub trait TPlayer {
    fn ask_for_card(&mut self, observablestate: &SObservableState, hand: &SHand, epi: EPlayerIndex) -> ECard;

    fn put_transition(&mut self, n_reward: isize, observablestate_new: &SObservableState, hand: &SHand, epi: EPlayerIndex);

    fn transitions(&self) -> &[STransition];

    fn name(&self) -> &str;
}
