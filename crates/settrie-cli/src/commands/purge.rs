//! `settrie purge` (§6 `purge`).

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry;

pub struct PurgeArgs {
    pub image: PathBuf,
    pub dry_run: bool,
}

impl PurgeArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        PurgeArgs {
            image: m.get_one::<String>("image").unwrap().into(),
            dry_run: m.get_flag("dry_run"),
        }
    }
}

pub fn run(args: PurgeArgs) {
    let handle = image_file::load(&args.image);
    let reclaimed = registry::purge(handle, args.dry_run);
    println!("{reclaimed}");
    if !args.dry_run {
        if let Err(e) = image_file::save(handle, &args.image) {
            eprintln!("error: failed to save image {}: {e}", args.image.display());
            std::process::exit(1);
        }
    }
    registry::destroy_settrie(handle);
}
