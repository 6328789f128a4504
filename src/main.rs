//! # qanoon-prep
//!
//! Preparation pipeline for the qanoon.om legal text collection:
//! turns scraped Arabic decrees, fatwas and decisions into chunked
//! JSONL train/validation datasets for continued pretraining.
//!
//! ```sh
//! qanoon-prep 0.2.0
//! qanoon.om corpus preparation tool.
//!
//! USAGE:
//!     qanoon-prep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     clean      Clean the raw collection (strip download/English header lines)
//!     help       Prints this message or the help of the given subcommand(s)
//!     prepare    Prepare CPT train/val JSONL from a cleaned collection
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use qanoon_prep::error::Error;
use qanoon_prep::pipelines::{CleanCorpus, Pipeline, PrepareCpt};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::QanoonPrep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::QanoonPrep::Clean(c) => {
            let pipeline = CleanCorpus::new(c.into_config());
            pipeline.run()?;
        }
        cli::QanoonPrep::Prepare(p) => {
            let pipeline = PrepareCpt::new(p.into_config()?);
            pipeline.run()?;
        }
    };
    Ok(())
}
