// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::{DataError, Result};
use crate::models::{Company, FinancialRecord, Metric};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Immutable snapshot of the company/year table.
///
/// Built once and only read afterwards, so it can be shared behind an `Arc`
/// between concurrent figure builds.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<FinancialRecord>,
    by_company: HashMap<Company, Vec<usize>>,
}

/// Row count and year span of one company.
#[derive(Debug, Clone, PartialEq)]
pub struct CompanySummary {
    pub company: Company,
    pub rows: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
}

/// Columns that must be present in the CSV header.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = vec!["company", "year"];
    columns.extend(Metric::ALL.iter().map(|m| m.column()));
    columns
}

impl Dataset {
    /// Build a dataset from rows that are already parsed, in dataset order.
    pub fn from_records(records: Vec<FinancialRecord>) -> Self {
        let mut by_company: HashMap<Company, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            match Company::from_code(&record.company) {
                Some(company) => by_company.entry(company).or_default().push(idx),
                None => debug!(
                    company = %record.company,
                    year = record.year,
                    "row for untracked company kept but not charted"
                ),
            }
        }
        Self {
            records,
            by_company,
        }
    }

    /// Load the CSV at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            rows = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV from any reader. Every column in [`required_columns`] must be
    /// present; extra columns are ignored.
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(rdr);

        let headers = reader.headers()?.clone();
        for column in required_columns() {
            if !headers.iter().any(|h| h == column) {
                return Err(DataError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        let mut row = StringRecord::new();
        while reader.read_record(&mut row)? {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let record: FinancialRecord =
                row.deserialize(Some(&headers))
                    .map_err(|e| DataError::MalformedRow {
                        line,
                        message: e.to_string(),
                    })?;
            // `inf` and `NaN` parse as f64 but cannot be plotted
            if let Some(metric) = Metric::ALL
                .into_iter()
                .find(|m| m.value(&record).is_some_and(|v| !v.is_finite()))
            {
                return Err(DataError::MalformedRow {
                    line,
                    message: format!("non-finite value in column {}", metric.column()),
                });
            }
            records.push(record);
        }

        Ok(Self::from_records(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows of one company in dataset order. Empty if the company has no rows.
    pub fn rows(&self, company: Company) -> impl Iterator<Item = &FinancialRecord> + '_ {
        self.by_company
            .get(&company)
            .map(|idx| idx.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.records[i])
    }

    pub fn years(&self, company: Company) -> Vec<i32> {
        self.rows(company).map(|r| r.year).collect()
    }

    /// Values of `metric` for `company`, aligned with [`Dataset::years`].
    pub fn values(&self, company: Company, metric: Metric) -> Vec<Option<f64>> {
        self.rows(company).map(|r| metric.value(r)).collect()
    }

    pub fn summary(&self) -> Vec<CompanySummary> {
        Company::ALL
            .into_iter()
            .map(|company| {
                let years = self.years(company);
                CompanySummary {
                    company,
                    rows: years.len(),
                    first_year: years.iter().copied().min(),
                    last_year: years.iter().copied().max(),
                }
            })
            .collect()
    }
}
