//! `settrie subsets` / `settrie supersets` (§6 `subsets`/`supersets`,
//! `iterator_next`/`destroy_iterator`).

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry::{self, Handle};

pub struct QueryArgs {
    pub image: PathBuf,
    pub set: String,
}

impl QueryArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        QueryArgs {
            image: m.get_one::<String>("image").unwrap().into(),
            set: m.get_one::<String>("set").unwrap().clone(),
        }
    }
}

pub fn run_subsets(args: QueryArgs) {
    run(args, registry::subsets);
}

pub fn run_supersets(args: QueryArgs) {
    run(args, registry::supersets);
}

fn run(args: QueryArgs, query: impl Fn(Handle, &str) -> Handle) {
    let handle = image_file::load(&args.image);
    let iter_handle = query(handle, &args.set);
    while let Some(label) = registry::iterator_next(iter_handle) {
        println!("{label}");
    }
    registry::destroy_iterator(iter_handle);
    registry::destroy_settrie(handle);
}
