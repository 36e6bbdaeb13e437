// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::backlight::{BrightnessStore, DeviceLister, DevicePaths};
use crate::core::error::BacklightError;

/// In-memory stand-in for sysfs, used to drive the command paths in tests.
#[derive(Debug, Default)]
pub struct MemoryBacklight {
    values: HashMap<PathBuf, u32>,
    devices: Option<Vec<String>>,
    pub writes: usize,
    pub read_only: bool,
}

impl MemoryBacklight {
    pub fn with_device(paths: &DevicePaths, current: u32, max: u32) -> Self {
        let mut backlight = Self::default();
        backlight.values.insert(paths.brightness.clone(), current);
        backlight.values.insert(paths.max_brightness.clone(), max);
        backlight
    }

    pub fn with_devices(mut self, names: &[&str]) -> Self {
        self.devices = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    pub fn value(&self, path: &Path) -> Option<u32> {
        self.values.get(path).copied()
    }
}

impl BrightnessStore for MemoryBacklight {
    fn get(&self, path: &Path) -> Result<u32, BacklightError> {
        self.values.get(path).copied().ok_or_else(|| BacklightError::Read {
            path: path.to_path_buf(),
            source: io::Error::from(io::ErrorKind::NotFound),
        })
    }

    fn set(&mut self, path: &Path, value: u32) -> Result<(), BacklightError> {
        if self.read_only || !self.values.contains_key(path) {
            return Err(BacklightError::Write {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.values.insert(path.to_path_buf(), value);
        self.writes += 1;
        Ok(())
    }
}

impl DeviceLister for MemoryBacklight {
    fn list(&self, _class_dir: &Path) -> Option<Vec<String>> {
        self.devices.clone()
    }
}
