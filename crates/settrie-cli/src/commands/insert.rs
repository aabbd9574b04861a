//! `settrie insert` (§6 `insert`).

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry;

pub struct InsertArgs {
    pub image: PathBuf,
    pub set: String,
    pub label: String,
}

impl InsertArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        InsertArgs {
            image: m.get_one::<String>("image").unwrap().into(),
            set: m.get_one::<String>("set").unwrap().clone(),
            label: m.get_one::<String>("label").unwrap().clone(),
        }
    }
}

pub fn run(args: InsertArgs) {
    let handle = image_file::load(&args.image);
    registry::insert(handle, &args.set, &args.label);
    if let Err(e) = image_file::save(handle, &args.image) {
        eprintln!("error: failed to save image {}: {e}", args.image.display());
        std::process::exit(1);
    }
    registry::destroy_settrie(handle);
    // silent on success, like `cargo check`
}
