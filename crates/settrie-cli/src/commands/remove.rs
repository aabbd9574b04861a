//! `settrie remove` (§6 `remove`).

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::image_file;
use crate::registry::{self, RemoveKey};

pub struct RemoveArgs {
    pub image: PathBuf,
    pub label: Option<String>,
    pub id: Option<i64>,
}

impl RemoveArgs {
    pub fn from_matches(m: &ArgMatches) -> Self {
        RemoveArgs {
            image: m.get_one::<String>("image").unwrap().into(),
            label: m.get_one::<String>("label").cloned(),
            id: m.get_one::<String>("id").and_then(|s| s.parse().ok()),
        }
    }
}

pub fn run(args: RemoveArgs) {
    let key = match (&args.label, args.id) {
        (Some(label), _) => RemoveKey::Label(label),
        (None, Some(id)) => RemoveKey::Id(id),
        (None, None) => {
            eprintln!("error: remove requires --label or --id");
            std::process::exit(1);
        }
    };

    let handle = image_file::load(&args.image);
    let code = registry::remove(handle, key);
    if code != 0 {
        registry::destroy_settrie(handle);
        eprintln!("not found");
        std::process::exit(1);
    }
    if let Err(e) = image_file::save(handle, &args.image) {
        eprintln!("error: failed to save image {}: {e}", args.image.display());
        std::process::exit(1);
    }
    registry::destroy_settrie(handle);
}
