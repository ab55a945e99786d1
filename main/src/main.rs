mod playerhuman;
mod subcommands;

use halfskat_lib::util::*;

fn main() -> Result<(), Error> {
    halfskat_logging::init_logging()?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::App::new("halfskat")
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (play, "play")
        (simulate, "simulate")
    );
    Ok(())
}
