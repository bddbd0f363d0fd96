mod cli;

use std::process::ExitCode;

use clap::Parser;
use splitgram::{error_handling::Location, grammar::SAMPLE_DESCRIPTION, parser};

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let notation = cli.notation();

    let built = match &cli.file {
        Some(path) => parser::parse_file(path, &notation),
        None => parser::build_grammar(SAMPLE_DESCRIPTION, &notation, &Location::default()),
    };

    match built {
        Ok(grammar) => {
            match cli.format {
                cli::Format::Table => println!("{}", grammar.table()),
                cli::Format::Rules => print!("{}", grammar),
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
