//! wildgrep - Minimal Recursive Wildcard Search
//!
//! Usage: `wildgrep [-i|-w] <keyword> <path>`

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::process;
use wildgrep::{Application, InputValidator, RawArguments, SearchConfig};

/// Build the CLI. Built-in help and version flags are disabled so `-h` and
/// `-V` can be searched for like any other keyword.
fn command() -> Command {
    Command::new("wildgrep")
        .version(wildgrep::VERSION)
        .about("Search files for lines containing a wildcard keyword")
        .long_about(
            "wildgrep searches a file, or every non-hidden file under a directory, for lines \
             containing KEYWORD. `*` in the keyword matches any run of characters. Only the \
             last three arguments are read: [FLAG] KEYWORD PATH, where FLAG is -i \
             (case-insensitive) or -w (whole word; keywords with spaces never match). \
             --help and --version are honored only as the sole argument.",
        )
        .override_usage("wildgrep [-i|-w] <KEYWORD> <PATH>")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("args")
                .help("[FLAG] KEYWORD PATH")
                .value_name("ARGS")
                .num_args(1..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
}

fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for traversal details)
    env_logger::init();

    let mut cli = command();
    let matches = cli.get_matches_mut();

    let tokens: Vec<String> = matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    // help and version are only recognised as the sole token
    if let [only] = tokens.as_slice() {
        match only.as_str() {
            "-h" | "--help" => {
                cli.print_long_help()?;
                println!();
                return Ok(());
            }
            "-V" | "--version" => {
                print!("{}", cli.render_version());
                return Ok(());
            }
            _ => {}
        }
    }

    let config = SearchConfig::default();
    let arguments = RawArguments::from_tokens(tokens);
    let request = match InputValidator::new(&config).validate(&arguments) {
        Ok(request) => request,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let app = Application::new(request, config)?;
    let output = app.run().with_context(|| {
        format!(
            "search under {} aborted",
            app.request().root_path().display()
        )
    })?;

    println!("{output}");
    Ok(())
}
