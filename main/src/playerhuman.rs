use halfskat_lib::game::*;
use halfskat_lib::player::*;
use halfskat_lib::primitives::*;
use halfskat_lib::util::*;
use std::io::Write;
use termcolor::{Color, ColorSpec, ColorChoice, StandardStream, WriteColor};

/// Console seat: shows the table, reads a card number from stdin and
/// re-prompts until the input denotes a card of the hand. Legality of the
/// chosen card is the engine's business (it re-queries on an illegal pick).
pub struct SPlayerHuman {
    transitionrecorder: STransitionRecorder,
}

impl SPlayerHuman {
    pub fn new() -> Self {
        Self {
            transitionrecorder: STransitionRecorder::default(),
        }
    }
}

impl Default for SPlayerHuman {
    fn default() -> Self {
        Self::new()
    }
}

fn print_hand_colored(slccard: &[ECard]) -> std::io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for (i_card, card) in slccard.iter().enumerate() {
        if 0<i_card {
            write!(stdout, ", ")?;
        }
        write!(stdout, "{}. ", i_card+1)?;
        let mut colorspec = ColorSpec::new();
        if let EFarbe::Diamonds | EFarbe::Hearts = card.farbe() {
            colorspec.set_fg(Some(Color::Red));
        }
        stdout.set_color(&colorspec)?;
        write!(stdout, "{}", card)?;
        stdout.reset()?;
    }
    writeln!(stdout)
}

impl TPlayer for SPlayerHuman {
    fn ask_for_card(&mut self, observablestate: &SObservableState, hand: &SHand, epi: EPlayerIndex) -> ECard {
        let playerstate = SPlayerState::new(observablestate, hand, epi);
        println!();
        println!("Current trick: {}", observablestate.stich);
        print!("Played by:");
        for (epi_stich, _card) in playerstate.vectplepicard_stich.iter() {
            print!(" {}", epi_stich);
        }
        println!();
        println!("You are declarer: {}", playerstate.b_declarer);
        println!("Your current cards:");
        unwrap!(print_hand_colored(hand.cards()));
        print!("Enter card to play (1-{}): ", hand.cards().len());
        unwrap!(std::io::stdout().flush());
        let card = loop {
            let mut str_input = String::new();
            unwrap!(std::io::stdin().read_line(&mut str_input));
            match str_input.trim().parse::<usize>() {
                Ok(n_card) if 1<=n_card && n_card<=hand.cards().len() => {
                    break hand.cards()[n_card-1];
                },
                _ => {
                    print!("Enter a valid number. Try again: ");
                    unwrap!(std::io::stdout().flush());
                },
            }
        };
        self.transitionrecorder.record_action(playerstate, card);
        card
    }

    fn put_transition(&mut self, n_reward: isize, observablestate_new: &SObservableState, hand: &SHand, epi: EPlayerIndex) {
        if 0!=n_reward {
            println!("Game over. Your reward: {}", n_reward);
        }
        self.transitionrecorder.record_outcome(
            n_reward,
            SPlayerState::new(observablestate_new, hand, epi),
        );
    }

    fn transitions(&self) -> &[STransition] {
        self.transitionrecorder.transitions()
    }

    fn name(&self) -> &str {
        "human"
    }
}
