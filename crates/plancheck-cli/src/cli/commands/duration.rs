use plancheck_filters::duration::{classify, range_of, range_of_name, DurationBucket};

use super::exit_codes;
use crate::cli::args::{DurationArgs, DurationSub};

pub fn run(args: DurationArgs) -> anyhow::Result<i32> {
    match args.cmd {
        DurationSub::Classify { minutes } => {
            match classify(Some(minutes)) {
                Some(bucket) => println!("{}", bucket),
                None => println!("none"),
            }
            Ok(exit_codes::OK)
        }
        DurationSub::Range { bucket } => match range_of_name(&bucket) {
            Ok(range) => {
                println!("{}", range);
                Ok(exit_codes::OK)
            }
            Err(e) => {
                eprintln!("error: {}", e);
                Ok(exit_codes::FAILED)
            }
        },
        DurationSub::List => {
            for bucket in DurationBucket::ALL {
                println!("{:<10} {:<10} {}", bucket.slug(), bucket.label(), range_of(bucket));
            }
            Ok(exit_codes::OK)
        }
    }
}
