//! Destinations for build artifacts.

use crate::error::{BuildError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock};

/// Where a build writes its artifacts.
///
/// `relative` is a `/`-separated path below the output root, such as
/// `blog/post.html` or `sitemap.xml`.
pub trait OutputTarget: Send + Sync {
	/// Writes one artifact, replacing any previous content.
	fn write(&self, relative: &str, contents: &[u8]) -> Result<()>;
}

/// Writes artifacts below a directory, creating parents as needed.
#[derive(Debug, Clone)]
pub struct FileSystemOutput {
	root: PathBuf,
}

impl FileSystemOutput {
	/// Output rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Output directory
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Joins `relative` to the root, rejecting absolute paths and any `..`
	/// component.
	pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
		let relative = relative.trim_start_matches('/');
		let candidate = Path::new(relative);
		let safe = !relative.is_empty()
			&& candidate
				.components()
				.all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
		if !safe {
			tracing::warn!(path = relative, "path traversal attempt blocked in FileSystemOutput");
			return Err(BuildError::InvalidPath(relative.to_string()));
		}
		Ok(self.root.join(candidate))
	}
}

impl OutputTarget for FileSystemOutput {
	fn write(&self, relative: &str, contents: &[u8]) -> Result<()> {
		let path = self.resolve(relative)?;
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent).map_err(|source| BuildError::Io {
				path: path.clone(),
				source,
			})?;
		}
		fs::write(&path, contents).map_err(|source| BuildError::Io {
			path: path.clone(),
			source,
		})?;
		tracing::debug!(path = %path.display(), bytes = contents.len(), "artifact written");
		Ok(())
	}
}

/// Keeps artifacts in memory. Useful for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryOutput {
	files: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryOutput {
	/// Empty output.
	pub fn new() -> Self {
		Self::default()
	}

	/// Contents of an artifact as UTF-8 text.
	pub fn get(&self, relative: &str) -> Option<String> {
		self.files
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.get(relative)
			.map(|bytes| String::from_utf8_lossy(bytes).into_owned())
	}

	/// Written paths in sorted order.
	pub fn paths(&self) -> Vec<String> {
		self.files
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.keys()
			.cloned()
			.collect()
	}
}

impl OutputTarget for MemoryOutput {
	fn write(&self, relative: &str, contents: &[u8]) -> Result<()> {
		self.files
			.write()
			.unwrap_or_else(PoisonError::into_inner)
			.insert(relative.trim_start_matches('/').to_string(), contents.to_vec());
		Ok(())
	}
}
