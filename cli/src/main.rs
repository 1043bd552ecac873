mod commands;
mod terminal;

use commands::{CommandLine, Commands, grades, run};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.quiet);

    match commands.command {
        Commands::Run {
            dir,
            archive_dir,
            log,
        } => {
            print::header("archiving csv files", commands.quiet);
            run::run(dir, archive_dir, log, commands.quiet)
        }
        Commands::Grades { out } => {
            print::header("grade generator", commands.quiet);
            grades::grades(out, commands.quiet)
        }
    }
}
