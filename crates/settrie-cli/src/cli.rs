//! Command-line surface: `clap` `Command`/`Arg` builders over the registry
//! operations in `crate::registry` (§6).

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("settrie")
        .about("Trie-based container of labeled sets, with subset/superset queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(insert_command())
        .subcommand(find_command())
        .subcommand(subsets_command())
        .subcommand(supersets_command())
        .subcommand(remove_command())
        .subcommand(purge_command())
        .subcommand(dump_command())
}

fn image_arg() -> Arg {
    Arg::new("image")
        .long("image")
        .value_name("PATH")
        .help("Binary image file to load the trie from, and save mutations back to")
        .required(true)
}

fn set_arg() -> Arg {
    Arg::new("set").value_name("SET").help("Set literal, e.g. \"{1, 2, 'x'}\"").required(true)
}

fn label_arg() -> Arg {
    Arg::new("label").value_name("LABEL").help("Label to attach to the set").required(true)
}

pub fn insert_command() -> Command {
    Command::new("insert")
        .about("Insert a labeled set into the trie")
        .arg(image_arg())
        .arg(set_arg())
        .arg(label_arg())
}

pub fn find_command() -> Command {
    Command::new("find")
        .about("Print the label of the set exactly matching a set literal")
        .arg(image_arg())
        .arg(set_arg())
}

pub fn subsets_command() -> Command {
    Command::new("subsets")
        .about("Print the labels of every stored subset of a set literal")
        .arg(image_arg())
        .arg(set_arg())
}

pub fn supersets_command() -> Command {
    Command::new("supersets")
        .about("Print the labels of every stored superset of a set literal")
        .arg(image_arg())
        .arg(set_arg())
}

pub fn remove_command() -> Command {
    Command::new("remove")
        .about("Remove a stored set, by label or by id")
        .arg(image_arg())
        .arg(Arg::new("label").long("label").value_name("LABEL").conflicts_with("id"))
        .arg(Arg::new("id").long("id").value_name("ID").conflicts_with("label"))
}

pub fn purge_command() -> Command {
    Command::new("purge")
        .about("Reclaim dead nodes left behind by prior removals")
        .arg(image_arg())
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Report how many nodes would be reclaimed, without rewriting the image"),
        )
}

pub fn dump_command() -> Command {
    Command::new("dump").about("List every stored (label, set) pair").arg(image_arg())
}
