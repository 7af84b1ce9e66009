//! Error types for site builds and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for build operations
pub type Result<T, E = BuildError> = std::result::Result<T, E>;

/// Build pipeline errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BuildError {
	/// Writing an artifact failed
	#[error("failed to write {path}: {source}")]
	Io {
		/// Destination of the failed write
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// An artifact path escapes the output root or is otherwise unusable
	#[error("invalid output path: {0}")]
	InvalidPath(String),

	/// `KeepGoing` build finished with failures
	#[error("{} artifact(s) failed to write: {}", .failures.len(), failed_paths(.failures))]
	Partial {
		/// Every failed artifact, in build order
		failures: Vec<BuildError>,
	},
}

impl BuildError {
	/// Output path the error refers to, when there is one.
	pub fn path(&self) -> Option<String> {
		match self {
			Self::Io { path, .. } => Some(path.display().to_string()),
			Self::InvalidPath(path) => Some(path.clone()),
			Self::Partial { .. } => None,
		}
	}
}

fn failed_paths(failures: &[BuildError]) -> String {
	failures
		.iter()
		.filter_map(BuildError::path)
		.collect::<Vec<_>>()
		.join(", ")
}

/// Configuration loading errors
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The configuration file could not be read
	#[error("failed to read {path}: {source}")]
	Read {
		/// Configuration file path
		path: PathBuf,
		/// Underlying I/O error
		#[source]
		source: std::io::Error,
	},

	/// The file is not valid TOML or does not match the schema
	#[error("failed to parse configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// Values parsed but are inconsistent
	#[error("invalid configuration: {0}")]
	Invalid(String),
}
