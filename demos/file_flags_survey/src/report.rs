//! Renders the resolved configuration.

use std::io::{self, Write};

use crate::config::Configuration;

const MASK: &str = "********";

/// Writes a human-readable summary of `config`; secrets are masked.
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn write_report<W: Write>(out: &mut W, config: &Configuration) -> io::Result<()> {
    let db = &config.db_credentials;
    let password = if db.password.is_empty() { "" } else { MASK };
    writeln!(out, "Configuration loaded:")?;
    writeln!(out, "  Addr:       {}", config.addr)?;
    writeln!(out, "  ServerName: {}", config.server_name)?;
    writeln!(out, "  Author:     {}", config.author)?;
    writeln!(out, "  Debug:      {}", config.debug)?;
    writeln!(out, "  Required:   {}", config.required)?;
    writeln!(out, "  Year:       {}", config.year)?;
    writeln!(out, "  DBCredentials:")?;
    writeln!(out, "    Username: {}", db.username)?;
    writeln!(out, "    Password: {password}")?;
    writeln!(out, "    Host:     {}", db.host)?;
    writeln!(out, "    DBName:   {}", db.db_name)?;
    Ok(())
}

/// Writes the summary to standard output.
///
/// # Errors
///
/// Returns an error if standard output cannot be written.
pub fn print_report(config: &Configuration) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_report(&mut stdout, config)
}
