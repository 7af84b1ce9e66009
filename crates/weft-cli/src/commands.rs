//! Subcommand implementations.

use anyhow::Context;
use chrono::Utc;
use colored::Colorize;
use std::path::{Path, PathBuf};
use weft_site::{BuildError, BuildPolicy, FileSystemOutput, SiteConfig};

/// Options of `weft build`.
#[derive(Debug, Clone)]
pub struct BuildArgs {
	pub config: PathBuf,
	pub output: Option<PathBuf>,
	pub keep_going: bool,
	pub minify: bool,
}

fn load(path: &Path) -> anyhow::Result<SiteConfig> {
	SiteConfig::load(path).with_context(|| format!("cannot load {}", path.display()))
}

/// Applies command-line flags over the loaded configuration.
pub fn configure(mut config: SiteConfig, args: &BuildArgs) -> SiteConfig {
	if let Some(output) = &args.output {
		config.output_dir = output.clone();
	}
	if args.minify {
		config.minify = true;
	}
	config
}

pub fn run_build(args: &BuildArgs) -> anyhow::Result<()> {
	let config = configure(load(&args.config)?, args);
	let policy = if args.keep_going {
		BuildPolicy::KeepGoing
	} else {
		BuildPolicy::FailFast
	};
	let website = config.to_website().policy(policy).lastmod(Utc::now());
	let output = FileSystemOutput::new(&config.output_dir);

	match website.build(&output) {
		Ok(report) => {
			for artifact in &report.artifacts {
				println!("{} {}", "Wrote:".green(), artifact.path);
			}
			println!(
				"{} {} page(s) into {}",
				"Built".green().bold(),
				report.page_count(),
				config.output_dir.display()
			);
			Ok(())
		}
		Err(BuildError::Partial { failures }) => {
			for failure in &failures {
				eprintln!("{}: {failure}", "Failed".red());
			}
			anyhow::bail!("{} artifact(s) could not be written", failures.len())
		}
		Err(err) => Err(err).context("build aborted"),
	}
}

/// Lines printed by `weft routes`.
pub fn route_lines(config: &SiteConfig) -> Vec<String> {
	config
		.to_website()
		.routes()
		.into_iter()
		.map(|(path, file)| format!("{path} -> {file}"))
		.collect()
}

pub fn run_routes(config: &Path) -> anyhow::Result<()> {
	let config = load(config)?;
	for line in route_lines(&config) {
		println!("{line}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::fs;

	const SITE: &str = r#"
		[site]
		site_name = "Docs"

		[[pages]]
		path = ""
		body = ["Home"]

		[[pages]]
		path = "guide/intro"
		title = "Intro"
	"#;

	fn args(config: PathBuf, output: PathBuf) -> BuildArgs {
		BuildArgs {
			config,
			output: Some(output),
			keep_going: false,
			minify: true,
		}
	}

	#[rstest]
	fn test_route_lines() {
		let config = SiteConfig::from_toml_str(SITE).unwrap();
		assert_eq!(
			route_lines(&config),
			vec!["/ -> index.html", "/guide/intro -> guide/intro.html"]
		);
	}

	#[rstest]
	fn test_flags_override_config() {
		let config = SiteConfig::from_toml_str(SITE).unwrap();
		let config = configure(config, &args(PathBuf::from("site.toml"), PathBuf::from("out")));
		assert_eq!(config.output_dir, PathBuf::from("out"));
		assert!(config.minify);
	}

	#[rstest]
	fn test_run_build_writes_site() {
		let dir = tempfile::tempdir().unwrap();
		let config_path = dir.path().join("site.toml");
		fs::write(&config_path, SITE).unwrap();
		let out = dir.path().join("public");

		run_build(&args(config_path, out.clone())).unwrap();

		assert!(out.join("index.html").is_file());
		assert!(out.join("guide/intro.html").is_file());
		assert!(out.join("robots.txt").is_file());
		assert!(!out.join("sitemap.xml").exists());
	}

	#[rstest]
	fn test_missing_config_fails() {
		let dir = tempfile::tempdir().unwrap();
		let result = run_build(&args(dir.path().join("absent.toml"), dir.path().join("out")));
		assert!(result.is_err());
	}
}
