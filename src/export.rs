// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::figures::Figure;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialise figures as the JSON array handed to the dashboard.
pub fn figures_to_json(figures: &[Figure], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(figures)?
    } else {
        serde_json::to_string(figures)?
    };
    Ok(json)
}

/// Write figures to `figures_<timestamp>.json` inside `output_dir`.
pub fn export_figures_json(figures: &[Figure], output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let path = output_dir.join(format!("figures_{}.json", timestamp));
    let json = figures_to_json(figures, true)?;
    fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
