//! Weft CLI
//!
//! Builds a static site from a TOML description.
//!
//! ## Usage
//!
//! ```bash
//! weft build --config site.toml --output public
//! weft build --keep-going --minify
//! weft routes
//! ```
//!
//! `WEFT_OUTPUT_DIR` and `WEFT_BASE_URL` override the file; command-line flags
//! override both. Set `RUST_LOG` or pass `-v` (repeatable) for logs.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "weft")]
#[command(about = "Static site builder", long_about = None)]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
	/// Render every page and write the site
	Build {
		/// Site description file
		#[arg(short, long, value_name = "PATH", default_value = "site.toml")]
		config: PathBuf,

		/// Output directory (overrides the file and WEFT_OUTPUT_DIR)
		#[arg(short, long, value_name = "DIR")]
		output: Option<PathBuf>,

		/// Write every artifact possible and report all failures at the end
		#[arg(long)]
		keep_going: bool,

		/// Collapse whitespace in rendered pages
		#[arg(long)]
		minify: bool,
	},

	/// Print each page path and the file it is written to
	Routes {
		/// Site description file
		#[arg(short, long, value_name = "PATH", default_value = "site.toml")]
		config: PathBuf,
	},
}

fn log_filter(verbosity: u8) -> EnvFilter {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn main() {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_env_filter(log_filter(cli.verbosity))
		.with_writer(std::io::stderr)
		.init();

	let result = match cli.command {
		Commands::Build {
			config,
			output,
			keep_going,
			minify,
		} => commands::run_build(&commands::BuildArgs {
			config,
			output,
			keep_going,
			minify,
		}),
		Commands::Routes { config } => commands::run_routes(&config),
	};

	if let Err(e) = result {
		eprintln!("Error: {e:#}");
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_build_defaults() {
		let cli = Cli::try_parse_from(["weft", "build"]).unwrap();
		match cli.command {
			Commands::Build {
				config,
				output,
				keep_going,
				minify,
			} => {
				assert_eq!(config, PathBuf::from("site.toml"));
				assert_eq!(output, None);
				assert!(!keep_going);
				assert!(!minify);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[rstest]
	fn test_build_flags_and_verbosity() {
		let cli = Cli::try_parse_from([
			"weft", "-vv", "build", "--config", "docs.toml", "-o", "public", "--keep-going", "--minify",
		])
		.unwrap();
		assert_eq!(cli.verbosity, 2);
		assert!(matches!(
			cli.command,
			Commands::Build { keep_going: true, minify: true, ref output, .. } if output.as_deref() == Some(std::path::Path::new("public"))
		));
	}

	#[rstest]
	fn test_unknown_command_is_rejected() {
		assert!(Cli::try_parse_from(["weft", "serve"]).is_err());
	}
}
