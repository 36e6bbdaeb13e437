// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use crate::backlight::{BrightnessStore, DeviceLister};
use crate::core::error::BacklightError;

/// Backlight access through the kernel's sysfs pseudo-files.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sysfs;

impl BrightnessStore for Sysfs {
    fn get(&self, path: &Path) -> Result<u32, BacklightError> {
        let contents = fs::read_to_string(path).map_err(|source| BacklightError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        contents.trim().parse().map_err(|_| BacklightError::Malformed {
            path: path.to_path_buf(),
            contents,
        })
    }

    fn set(&mut self, path: &Path, value: u32) -> Result<(), BacklightError> {
        fs::write(path, value.to_string()).map_err(|source| BacklightError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DeviceLister for Sysfs {
    fn list(&self, class_dir: &Path) -> Option<Vec<String>> {
        let entries = fs::read_dir(class_dir).ok()?;

        let mut devices: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| !name.starts_with('.'))
            .collect();

        devices.sort();
        Some(devices)
    }
}
