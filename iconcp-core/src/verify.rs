//! Checking that a root holds the complete icon set

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    catalog::{icon_file_name, ICON_SIZES},
    error::{IconError, IconResult},
};

/// Line written once every icon has been found
pub const ALL_PRESENT_LINE: &str = "All files exist!";

/// An icon found during verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconFile {
    pub size:  u32,
    pub path:  PathBuf,
    pub bytes: u64,
}

/// Read every catalog icon under `root`, writing `{file}: {N} bytes` per
/// icon and [`ALL_PRESENT_LINE`] at the end. The first absent icon is
/// fatal. Nothing is created or modified.
pub fn verify_icons<W: Write>(root: &Path, out: &mut W) -> IconResult<Vec<IconFile>> {
    let mut found = Vec::with_capacity(ICON_SIZES.len());
    for &size in &ICON_SIZES {
        let file_name = icon_file_name(size);
        let path = root.join(&file_name);
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(IconError::MissingIcon { path });
            },
            Err(source) => return Err(IconError::Metadata { path, source }),
        };
        if !metadata.is_file() {
            return Err(IconError::MissingIcon { path });
        }

        let bytes = fs::read(&path)
            .map_err(|source| IconError::ReadIcon { path: path.clone(), source })?
            .len() as u64;

        debug!("Found {} ({} bytes)", path.display(), bytes);
        writeln!(out, "{}: {} bytes", file_name, bytes).map_err(IconError::Output)?;
        found.push(IconFile { size, path, bytes });
    }
    writeln!(out, "{}", ALL_PRESENT_LINE).map_err(IconError::Output)?;
    info!(count = found.len(), "All icons present in {}", root.display());
    Ok(found)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn populate(root: &Path, skip: Option<u32>) {
        for &size in ICON_SIZES.iter().filter(|&&size| Some(size) != skip) {
            fs::write(root.join(icon_file_name(size)), vec![1u8; size as usize]).unwrap();
        }
    }

    #[test]
    fn test_complete_set() {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), None);

        let mut out = Vec::new();
        let found = verify_icons(temp_dir.path(), &mut out).unwrap();
        assert_eq!(found.len(), ICON_SIZES.len());
        assert!(found.iter().all(|icon| icon.bytes == u64::from(icon.size)));

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "icon-72x72.png: 72 bytes");
        assert_eq!(lines[7], "icon-512x512.png: 512 bytes");
        assert_eq!(lines[8], ALL_PRESENT_LINE);
    }

    #[test]
    fn test_missing_icon_stops_verification() {
        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), Some(144));

        let mut out = Vec::new();
        let err = verify_icons(temp_dir.path(), &mut out).unwrap_err();
        match err {
            IconError::MissingIcon { path } => {
                assert_eq!(path, temp_dir.path().join("icon-144x144.png"));
            },
            other => panic!("unexpected error: {other}"),
        }
        // 72, 96 and 128 were reported before the gap
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_icon_fails() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        populate(temp_dir.path(), None);
        let locked = temp_dir.path().join(icon_file_name(96));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        if fs::File::open(&locked).is_ok() {
            // Privileged users read through mode 000
            return;
        }

        let mut out = Vec::new();
        let err = verify_icons(temp_dir.path(), &mut out).unwrap_err();
        match err {
            IconError::ReadIcon { path, .. } => assert_eq!(path, locked),
            other => panic!("unexpected error: {other}"),
        }
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().collect::<Vec<_>>(), ["icon-72x72.png: 72 bytes"]);
    }

    #[test]
    fn test_directory_is_not_an_icon() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(icon_file_name(72))).unwrap();

        let err = verify_icons(temp_dir.path(), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, IconError::MissingIcon { .. }));
    }
}
