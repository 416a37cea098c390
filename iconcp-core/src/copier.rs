//! Copying the icon set from the source root to the destination root

use std::{
    fmt,
    fs::{self, File, FileTimes},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    catalog::{icon_file_name, ICON_SIZES},
    config::CopyConfig,
    error::{IconError, IconResult},
};

/// Line written after every size has been handled
pub const DONE_LINE: &str = "Done!";

/// What happened to one icon size
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The icon was copied; `bytes` is the length of the destination file
    Copied { file_name: String, bytes: u64 },
    /// No icon exists at `source`
    Missing { source: PathBuf },
}

impl fmt::Display for CopyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyOutcome::Copied { file_name, bytes } => {
                write!(f, "Copied {} ({} bytes)", file_name, bytes)
            },
            CopyOutcome::Missing { source } => write!(f, "MISSING: {}", source.display()),
        }
    }
}

/// Outcomes of a completed run, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub outcomes: Vec<CopyOutcome>,
}

impl CopySummary {
    /// Copied icons as `(file name, bytes)`
    pub fn copied(&self) -> impl Iterator<Item = (&str, u64)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CopyOutcome::Copied { file_name, bytes } => Some((file_name.as_str(), *bytes)),
            CopyOutcome::Missing { .. } => None,
        })
    }

    /// Source paths that did not exist
    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            CopyOutcome::Missing { source } => Some(source.as_path()),
            CopyOutcome::Copied { .. } => None,
        })
    }
}

/// Copies every catalog icon that exists at the source root
#[derive(Debug, Clone)]
pub struct Copier {
    config: CopyConfig,
}

impl Copier {
    pub fn new(config: CopyConfig) -> Self {
        Self { config }
    }

    /// Run the full pass, writing one status line per size and a final
    /// [`DONE_LINE`] to `out`.
    ///
    /// The destination root is created first and is left in place if a later
    /// step fails. Lines already written stay written.
    pub fn run<W: Write>(&self, out: &mut W) -> IconResult<CopySummary> {
        self.ensure_destination()?;

        let mut summary = CopySummary { outcomes: Vec::with_capacity(ICON_SIZES.len()) };
        for &size in &ICON_SIZES {
            let outcome = self.copy_icon(size)?;
            writeln!(out, "{}", outcome).map_err(IconError::Output)?;
            summary.outcomes.push(outcome);
        }
        writeln!(out, "{}", DONE_LINE).map_err(IconError::Output)?;
        out.flush().map_err(IconError::Output)?;

        info!(
            copied = summary.copied().count(),
            missing = summary.missing().count(),
            "Icon copy finished"
        );
        Ok(summary)
    }

    /// Create the destination root and any missing parents
    pub fn ensure_destination(&self) -> IconResult<()> {
        let path = &self.config.destination_root;
        if path.is_dir() {
            debug!("Destination directory already exists: {}", path.display());
            return Ok(());
        }
        info!("Creating destination directory (and parents): {}", path.display());
        fs::create_dir_all(path).map_err(|source| IconError::CreateDestination {
            path: path.clone(),
            source,
        })
    }

    /// Copy the icon of one size, or report it missing
    pub fn copy_icon(&self, size: u32) -> IconResult<CopyOutcome> {
        let file_name = icon_file_name(size);
        let source = self.config.source_root.join(&file_name);
        let destination = self.config.destination_root.join(&file_name);

        if !source.exists() {
            warn!("Icon missing at source: {}", source.display());
            return Ok(CopyOutcome::Missing { source });
        }

        debug!("Copying {} -> {}", source.display(), destination.display());
        copy_with_times(&source, &destination)?;

        let bytes = fs::metadata(&destination)
            .map_err(|source| IconError::Metadata { path: destination.clone(), source })?
            .len();
        Ok(CopyOutcome::Copied { file_name, bytes })
    }
}

/// Copy contents and permission bits, then carry over access and
/// modification times.
fn copy_with_times(from: &Path, to: &Path) -> IconResult<()> {
    let copy_error = |source: io::Error| IconError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(from).map_err(copy_error)?;
    if is_same_file(from, to) {
        return Err(IconError::SameFile { from: from.to_path_buf(), to: to.to_path_buf() });
    }
    fs::copy(from, to).map_err(copy_error)?;

    let mut times = FileTimes::new();
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }

    apply_times(to, times)
        .map_err(|source| IconError::PreserveTimes { path: to.to_path_buf(), source })
}

#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

// The copy may carry read-only permission bits; a read handle is enough to
// change times as the owner.
#[cfg(unix)]
fn apply_times(path: &Path, times: FileTimes) -> io::Result<()> {
    File::open(path)?.set_times(times)
}

// Setting times needs a write handle here, so a read-only copy is made
// writable for the duration and restored afterwards.
#[cfg(not(unix))]
#[allow(clippy::permissions_set_readonly_false)]
fn apply_times(path: &Path, times: FileTimes) -> io::Result<()> {
    let mut permissions = fs::metadata(path)?.permissions();
    let readonly = permissions.readonly();
    if readonly {
        permissions.set_readonly(false);
        fs::set_permissions(path, permissions.clone())?;
    }
    let result = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|file| file.set_times(times));
    if readonly {
        permissions.set_readonly(true);
        fs::set_permissions(path, permissions)?;
    }
    result
}
