//! kdeconfig CLI
//!
//! Main entry point for the kdeconfig command-line tool. Results are written
//! to stdout as JSON; diagnostics go to stderr.

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use kdeconfig::{
    logging, ConfigSetter, FailureReport, GroupPath, KdeConfigError, RequestParams, ToolsConfig,
    ValueType,
};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kdeconfig")]
#[command(about = "kdeconfig - Idempotently set KDE configuration entries", long_about = None)]
#[command(version = kdeconfig::version())]
struct Cli {
    /// Reader binary (default: kreadconfig5, env: KDECONFIG_READ_BIN)
    #[arg(long, global = true)]
    read_bin: Option<String>,

    /// Writer binary (default: kwriteconfig5, env: KDECONFIG_WRITE_BIN)
    #[arg(long, global = true)]
    write_bin: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EntryArgs {
    /// Configuration file, e.g. kwinrc
    #[arg(short, long)]
    file: PathBuf,

    /// Group to look in; repeat for nested groups
    #[arg(short, long = "group", required = true)]
    groups: Vec<String>,

    /// Key to look for
    #[arg(short, long)]
    key: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Set, enable/disable or delete an entry
    Set {
        #[command(flatten)]
        entry: EntryArgs,

        /// Value to set
        #[arg(long)]
        value: Option<String>,

        /// Type marker passed along with --value
        #[arg(long = "type", value_enum, requires = "value")]
        value_type: Option<ValueType>,

        /// Boolean value to set: true or false
        #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
        enabled: Option<bool>,

        /// Delete the entry
        #[arg(long)]
        delete: bool,
    },

    /// Print the current value of an entry
    Get {
        #[command(flatten)]
        entry: EntryArgs,
    },

    /// Apply JSON parameters read from a file, or stdin with "-"
    Apply {
        /// Path to the parameters file
        #[arg(default_value = "-")]
        params: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let report = match err.downcast_ref::<KdeConfigError>() {
                Some(e) => FailureReport::from(e),
                None => FailureReport::new(err.to_string()),
            };
            let chain = format!("{:#}", err);
            tracing::error!(error = %chain, "kdeconfig failed");
            if let Err(e) = emit(&report, pretty) {
                eprintln!("✗ {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.verbose)?;

    let mut tools = ToolsConfig::from_env(ToolsConfig::ENV_PREFIX)?;
    tools.merge(ToolsConfig::overrides(cli.read_bin, cli.write_bin));
    tools.validate()?;

    let setter = ConfigSetter::new(tools);

    match cli.command {
        Commands::Set {
            entry,
            value,
            value_type,
            enabled,
            delete,
        } => {
            let params = RequestParams {
                file: Some(entry.file),
                group: Some(GroupPath::Many(entry.groups)),
                key: Some(entry.key),
                value,
                value_type,
                delete: delete.then_some(true),
                enabled,
            };
            let result = setter.apply(&params.into_request()?)?;
            emit(&result, cli.pretty)?;
        }
        Commands::Get { entry } => {
            let value = setter.read(&entry.file, &entry.groups, &entry.key)?;
            println!("{}", value);
        }
        Commands::Apply { params } => {
            let input = read_params(&params)?;
            let request = RequestParams::from_json(&input)?.into_request()?;
            let result = setter.apply(&request)?;
            emit(&result, cli.pretty)?;
        }
    }

    Ok(())
}

fn read_params(source: &str) -> anyhow::Result<String> {
    if source == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read parameters from stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read parameters file: {}", source))
    }
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
