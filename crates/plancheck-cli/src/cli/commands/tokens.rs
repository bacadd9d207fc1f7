use plancheck_filters::tokens::{decode, encode};

use super::exit_codes;
use crate::cli::args::{TokensArgs, TokensSub};

pub fn run(args: TokensArgs) -> anyhow::Result<i32> {
    match args.cmd {
        TokensSub::Encode { tokens } => println!("{}", encode(&tokens)),
        TokensSub::Decode { text } => {
            for t in decode(&text) {
                println!("{}", t);
            }
        }
    }
    Ok(exit_codes::OK)
}
