//! `config` command.

use anyhow::Result;

use crate::context::Context;

/// Print the effective configuration as TOML on stdout.
pub fn show(ctx: &Context) -> Result<()> {
    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
