//! Thin command-line front end over `settrie-core`, via the handle-based
//! registry in `crate::registry` -- a concrete demonstration of the binding
//! contract (§6), not part of the core's own tested surface.

mod cli;
mod commands;
mod registry;
mod setlit;

fn main() {
    let matches = cli::build_cli().get_matches();
    match matches.subcommand() {
        Some(("insert", m)) => commands::insert::run(commands::insert::InsertArgs::from_matches(m)),
        Some(("find", m)) => commands::find::run(commands::find::FindArgs::from_matches(m)),
        Some(("subsets", m)) => commands::query::run_subsets(commands::query::QueryArgs::from_matches(m)),
        Some(("supersets", m)) => {
            commands::query::run_supersets(commands::query::QueryArgs::from_matches(m))
        }
        Some(("remove", m)) => commands::remove::run(commands::remove::RemoveArgs::from_matches(m)),
        Some(("purge", m)) => commands::purge::run(commands::purge::PurgeArgs::from_matches(m)),
        Some(("dump", m)) => commands::dump::run(commands::dump::DumpArgs::from_matches(m)),
        _ => unreachable!("clap should have caught this"),
    }
}
