/**
 * MIT License
 *
 * mpegscan - Copyright (c) 2021 Larry Hao
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, read_to_string};
use std::path::{Path, PathBuf};

pub const FILE_NAME: &str = "config.toml";
pub const MAX_FRAMES: usize = 16;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Frame headers printed per file
    pub max_frames: usize,
    #[serde(skip)]
    pub max_frames_from_cli: Option<usize>,
    /// Also print headers that hit a reserved or forbidden value
    pub show_invalid_frames: bool,
    #[serde(skip)]
    pub show_invalid_frames_from_cli: bool,
    pub show_tags: bool,
    #[serde(skip)]
    pub hide_tags_from_cli: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_frames: MAX_FRAMES,
            max_frames_from_cli: None,
            show_invalid_frames: false,
            show_invalid_frames_from_cli: false,
            show_tags: true,
            hide_tags_from_cli: false,
        }
    }
}

impl Settings {
    pub fn save(&self) -> Result<()> {
        let mut path = get_app_config_path()?;
        path.push(FILE_NAME);
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let string = toml::to_string(self)?;
        fs::write(path, string)?;
        Ok(())
    }

    /// Load the saved settings, falling back to defaults if there are none yet.
    pub fn load(&mut self) -> Result<()> {
        let mut path = get_app_config_path()?;
        path.push(FILE_NAME);
        self.load_from(&path)
    }

    pub fn load_from(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            info!("no config at {}, using defaults", path.display());
            *self = Self::default();
            return Ok(());
        }

        let string = read_to_string(path)?;
        let config: Self = toml::from_str(&string)?;
        *self = config;
        Ok(())
    }

    pub fn max_frames(&self) -> usize {
        self.max_frames_from_cli.unwrap_or(self.max_frames)
    }

    pub fn show_invalid_frames(&self) -> bool {
        self.show_invalid_frames || self.show_invalid_frames_from_cli
    }

    pub fn show_tags(&self) -> bool {
        self.show_tags && !self.hide_tags_from_cli
    }
}

pub fn get_app_config_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow!("failed to find os config dir."))?;
    path.push("mpegscan");

    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}
