use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, InitSummary, helper};
use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config},
    core::export::write_json,
};

pub fn init(common: &CommonArgs) -> Result<CommandResult> {
    let root = helper::resolve_root(common)?;
    let config_path = root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    write_json(&config_path, &Config::default())?;
    Ok(CommandResult::new(CommandSummary::Init(InitSummary {
        path: config_path,
    })))
}
