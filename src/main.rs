mod help;
mod install;
mod manifest;
mod render;
mod templates;
mod view;

use crate::install::Install;
use crate::templates::TemplateStore;
use crate::view::View;
use anyhow::{anyhow, Result};
use clap::{FromArgMatches, Parser};
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use std::path::PathBuf;

/// Generate a license file for your project.
#[derive(Parser)]
#[clap(name = "license-generator", version)]
pub(crate) struct Opts {
    #[clap(subcommand)]
    sub_command: Option<SubCommand>,
}

#[derive(Parser)]
enum SubCommand {
    /// Use this command to generate a license file.
    #[clap(visible_alias = "i")]
    Install(Install),
    /// Use this command to view the content of a license.
    View(View),
}

fn file_logger(cache_dir: Option<PathBuf>) -> Result<LoggerHandle> {
    let path = cache_dir
        .ok_or_else(|| anyhow!("could not determine cache directory"))?
        .join("license-generator");

    Ok(Logger::try_with_env_or_str("info")?
        .log_to_file(FileSpec::default().suppress_timestamp().directory(path))
        .write_mode(WriteMode::BufferAndFlush)
        .start()?)
}

/// Logging never stops a command; without a usable cache directory warnings go to stderr.
fn start_logging() -> Option<LoggerHandle> {
    match file_logger(dirs::cache_dir()) {
        Ok(handle) => Some(handle),
        Err(err) => {
            let handle = Logger::try_with_str("warn").ok()?.log_to_stderr().start().ok()?;
            log::warn!("file logging disabled: {err:#}");
            Some(handle)
        }
    }
}

fn main() -> Result<()> {
    let _logger = start_logging();

    let store = TemplateStore::from_env();
    let mut command = help::command(&store);
    let matches = command.clone().get_matches();
    let opt = Opts::from_arg_matches(&matches).unwrap_or_else(|err| err.exit());

    match opt.sub_command {
        Some(SubCommand::Install(val)) => val.run(&store)?,
        Some(SubCommand::View(val)) => val.run(&store)?,
        None => command.print_help()?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Opts::command().debug_assert();
    }

    #[test]
    fn install_alias_parses() {
        let opt = Opts::try_parse_from([
            "license-generator",
            "i",
            "mit",
            "-y",
            "2014",
            "-n",
            "John Doe",
        ])
        .unwrap();

        assert!(matches!(opt.sub_command, Some(SubCommand::Install(_))));
    }

    #[test]
    fn install_requires_a_license() {
        assert!(Opts::try_parse_from(["license-generator", "install"]).is_err());
    }

    #[test]
    fn view_license_is_optional() {
        let opt = Opts::try_parse_from(["license-generator", "view"]).unwrap();

        assert!(matches!(opt.sub_command, Some(SubCommand::View(_))));
    }

    #[test]
    fn no_subcommand_is_accepted() {
        let opt = Opts::try_parse_from(["license-generator"]).unwrap();

        assert!(opt.sub_command.is_none());
    }

    #[test]
    fn file_logger_needs_a_cache_dir() {
        let err = file_logger(None).err().unwrap();

        assert!(err.to_string().contains("cache directory"));
    }
}
