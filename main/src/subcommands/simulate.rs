use halfskat_lib::game::*;
use halfskat_lib::primitives::*;
use halfskat_lib::util::*;

pub fn subcommand(str_subcommand: &'static str) -> clap::App<'static> {
    clap::App::new(str_subcommand)
        .about("Run games between three random players and report seat statistics")
        .arg(clap::Arg::new("games")
            .long("games")
            .takes_value(true)
            .default_value("100")
            .help("Number of games to run"))
        .arg(clap::Arg::new("rounds")
            .long("rounds")
            .takes_value(true)
            .default_value("10")
            .help("Round limit per game"))
        .arg(clap::Arg::new("seed")
            .long("seed")
            .takes_value(true)
            .help("Seed for deck shuffling and seat assignment"))
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let n_games = unwrap!(clapmatches.value_of("games")).parse::<usize>()?;
    let n_rounds_max = unwrap!(clapmatches.value_of("rounds")).parse::<usize>()?;
    let on_seed = clapmatches.value_of("seed")
        .map(|str_seed| str_seed.parse::<u64>())
        .transpose()?;
    let mut game = match on_seed {
        Some(n_seed) => SGame::new_with_seed(n_rounds_max, /*b_retry_on_illegal*/true, n_seed),
        None => SGame::new(n_rounds_max, /*b_retry_on_illegal*/true),
    };
    let mut mapepin_won = EPlayerIndex::map_from_fn(|_epi| 0usize);
    for i_game in 0..n_games {
        game.run_new_game();
        let epi_winner = game.game_winner()?;
        mapepin_won[epi_winner] += 1;
        info!("Game {} finished, winner: {}", i_game, epi_winner);
    }
    println!("Games won per seat ({} games, {} rounds each):", n_games, n_rounds_max+1);
    for epi in EPlayerIndex::values() {
        println!(
            "{}: {} ({} transitions recorded)",
            epi,
            mapepin_won[epi],
            game.player(epi).transitions().len(),
        );
    }
    Ok(())
}
