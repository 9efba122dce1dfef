// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Layout configs consumed by the dashboard's charting library.
//!
//! Field names are serialised verbatim, so renaming anything here breaks the
//! renderer.

use serde::{Deserialize, Serialize};

const LEGEND_Y_SINGLE_COMPANY: f64 = 1.16;
const LEGEND_Y_CROSS_COMPANY: f64 = 1.19;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XAxis {
    pub showline: bool,
    pub showgrid: bool,
    pub showticklabels: bool,
    pub ticks: String,
    pub dtick: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxis {
    pub showline: bool,
    pub showgrid: bool,
    pub showticklabels: bool,
    pub ticks: String,
    pub rangemode: String,
    pub autotick: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    pub legend: Legend,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
}

fn base(title: &str, legend_y: f64) -> Layout {
    Layout {
        title: title.to_string(),
        legend: Legend {
            orientation: "h".to_string(),
            x: -0.01,
            y: legend_y,
            font: Font { size: 10 },
        },
        xaxis: XAxis {
            showline: true,
            showgrid: true,
            showticklabels: true,
            ticks: "outside".to_string(),
            dtick: 1,
        },
        yaxis: YAxis {
            showline: true,
            showgrid: true,
            showticklabels: true,
            ticks: "outside".to_string(),
            rangemode: "tozero".to_string(),
            autotick: true,
        },
    }
}

/// Layout for several metrics of one company.
pub fn single_company(title: &str) -> Layout {
    base(title, LEGEND_Y_SINGLE_COMPANY)
}

/// Layout for one metric across all companies. The legend sits slightly
/// higher to fit six entries.
pub fn cross_company(title: &str) -> Layout {
    base(title, LEGEND_Y_CROSS_COMPANY)
}
