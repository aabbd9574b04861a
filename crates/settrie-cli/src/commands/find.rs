//! `settrie find` (§6 `find`).

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry;

pub struct FindArgs {
    pub image: PathBuf,
    pub set: String,
}

impl FindArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        FindArgs {
            image: m.get_one::<String>("image").unwrap().into(),
            set: m.get_one::<String>("set").unwrap().clone(),
        }
    }
}

pub fn run(args: FindArgs) {
    let handle = image_file::load(&args.image);
    let label = registry::find(handle, &args.set);
    registry::destroy_settrie(handle);
    if label.is_empty() {
        eprintln!("not found");
        std::process::exit(1);
    }
    println!("{label}");
}
