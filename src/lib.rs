// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Chart descriptors for the European construction top 6 dashboard.
//!
//! Load a [`Dataset`] once, then ask a [`FigureBuilder`] for the 20 figures
//! the dashboard renders:
//!
//! ```no_run
//! use construction_top6::{Dataset, FigureBuilder};
//!
//! let dataset = Dataset::from_path("data/construction_top_6_europe_2020.csv")?;
//! let figures = FigureBuilder::new(&dataset).build_all();
//! assert_eq!(figures.len(), 20);
//! # Ok::<(), construction_top6::DataError>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod figures;
pub mod layout;
pub mod models;
pub mod render;
pub mod series;

pub use dataset::Dataset;
pub use error::DataError;
pub use figures::{chart_plan, Chart, Figure, FigureBuilder};
pub use layout::Layout;
pub use models::{Company, FinancialRecord, Metric};
pub use series::Series;
