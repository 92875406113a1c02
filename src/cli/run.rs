//! Dispatches parsed arguments to the matching command handler.

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, build::build, init::init, lookup::lookup, update::update,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Update(cmd)) => update(cmd),
        Some(Command::Build(cmd)) => build(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
