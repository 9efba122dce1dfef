// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "lines")]
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceType {
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dash {
    Dot,
}

/// Explicit line style. Series without one get a color from the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dash: Option<Dash>,
}

impl Line {
    pub fn new(color: impl Into<String>, width: u32) -> Self {
        Self {
            color: color.into(),
            width,
            dash: None,
        }
    }

    pub fn dotted(mut self) -> Self {
        self.dash = Some(Dash::Dot);
        self
    }
}

/// One plotted line: fiscal years on x, metric values on y.
///
/// `y` holds `None` for missing observations, which serialise as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub x: Vec<i32>,
    pub y: Vec<Option<f64>>,
    pub mode: Mode,
    #[serde(rename = "type")]
    pub trace_type: TraceType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<Line>,
}

impl Series {
    pub fn lines(name: impl Into<String>, x: Vec<i32>, y: Vec<Option<f64>>) -> Self {
        Self {
            x,
            y,
            mode: Mode::Lines,
            trace_type: TraceType::Scatter,
            name: name.into(),
            line: None,
        }
    }

    pub fn with_line(mut self, line: Line) -> Self {
        self.line = Some(line);
        self
    }

    /// Points with a finite value, for renderers that cannot draw gaps.
    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .filter_map(|(&x, y)| y.filter(|y| y.is_finite()).map(|y| (x, y)))
    }
}
