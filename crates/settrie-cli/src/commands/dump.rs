//! `settrie dump` (§6 `next_set_id`/`set_name`/`elements`).
//!
//! Walks the trie one `next_set_id` step at a time rather than through a
//! query iterator, to exercise that part of the registry surface too -- the
//! same entry point the original binding's pickling support drove.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry::{self, Handle};

pub struct DumpArgs {
    pub image: PathBuf,
}

impl DumpArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        DumpArgs { image: m.get_one::<String>("image").unwrap().into() }
    }
}

pub fn run(args: DumpArgs) {
    let handle = image_file::load(&args.image);
    let mut previous = -1i64;
    loop {
        let id = registry::next_set_id(handle, previous);
        if id < 0 {
            break;
        }
        let label = registry::set_name(handle, id);
        let tokens = collect_elements(handle, id);
        println!("{label}\t{{{}}}", tokens.join(", "));
        previous = id;
    }
    registry::destroy_settrie(handle);
}

fn collect_elements(handle: Handle, id: i64) -> Vec<String> {
    let iter_handle = registry::elements(handle, id);
    if iter_handle == 0 {
        return Vec::new();
    }
    let mut tokens = Vec::new();
    while let Some(token) = registry::iterator_next(iter_handle) {
        tokens.push(token);
    }
    registry::destroy_iterator(iter_handle);
    tokens
}
