use anyhow::Result;

use super::{
    args::{Command, CommonArgs},
    commands::{
        CommandResult,
        check_duplicates::check_duplicates,
        find::find,
        generate::{complete, extract, generate},
        init::init,
        scan::scan,
        validate::validate,
    },
};

/// Dispatch to the command handler.
pub fn run(common: &CommonArgs, command: &Command) -> Result<CommandResult> {
    match command {
        Command::Scan(args) => scan(common, args),
        Command::Generate(args) => generate(common, args),
        Command::Extract(args) => extract(common, args),
        Command::Complete(args) => complete(common, args),
        Command::Validate(args) => validate(common, args),
        Command::CheckDuplicates(args) => check_duplicates(common, args),
        Command::Find(args) => find(common, args),
        Command::Init => init(common),
    }
}
