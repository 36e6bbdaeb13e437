// Author: Dustin Pilgrim
// License: MIT

use std::path::{Path, PathBuf};

use crate::core::error::BacklightError;

#[cfg(test)]
pub mod memory;
pub mod sysfs;

/// Reads and writes a single integer brightness value at a path.
pub trait BrightnessStore {
    fn get(&self, path: &Path) -> Result<u32, BacklightError>;
    fn set(&mut self, path: &Path, value: u32) -> Result<(), BacklightError>;
}

/// Enumerates the backlight devices under a class directory.
pub trait DeviceLister {
    /// `None` when the directory cannot be read.
    fn list(&self, class_dir: &Path) -> Option<Vec<String>>;
}

/// The two brightness files of one backlight device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePaths {
    pub brightness: PathBuf,
    pub max_brightness: PathBuf,
}

impl DevicePaths {
    pub fn new(class_dir: &Path, device: &str) -> Self {
        let base = class_dir.join(device);
        Self {
            brightness: base.join("brightness"),
            max_brightness: base.join("max_brightness"),
        }
    }
}
