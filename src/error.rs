// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Errors raised while loading the dataset or resolving identifiers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// Company code outside the six tracked companies.
    #[error("Unknown company: {0}")]
    UnknownCompany(String),

    /// Metric name with no matching column.
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    /// Required column missing from the CSV header.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A row that could not be parsed into a record.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, DataError>;
