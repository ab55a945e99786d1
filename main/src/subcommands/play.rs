use crate::playerhuman::SPlayerHuman;
use halfskat_lib::game::*;
use halfskat_lib::player::*;
use halfskat_lib::primitives::*;
use halfskat_lib::util::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::App<'static> {
    clap::App::new(str_subcommand)
        .about("Play a game on the console against two random players")
        .arg(clap::Arg::new("rounds")
            .long("rounds")
            .takes_value(true)
            .default_value("3")
            .help("Round limit of the game"))
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let n_rounds_max = unwrap!(clapmatches.value_of("rounds")).parse::<usize>()?;
    let mut game = SGame::new_with_players(
        EPlayerIndex::map_from_fn(|epi| -> Box<dyn TPlayer> {
            if EPlayerIndex::EPI0==epi {
                Box::new(SPlayerHuman::new())
            } else {
                Box::new(SPlayerRandom::new())
            }
        }),
        n_rounds_max,
        /*b_retry_on_illegal*/true,
    );
    game.run_new_game();
    println!();
    println!("Final points:");
    for epi in EPlayerIndex::values() {
        println!("{} ({}): {}", epi, game.player(epi).name(), game.points()[epi]);
    }
    println!("Winner: {}", game.game_winner()?);
    Ok(())
}
