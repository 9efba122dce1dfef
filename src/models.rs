// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::error::DataError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six construction companies tracked by the dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Company {
    Vinci,
    Acs,
    Bouygues,
    Eiffage,
    Skanska,
    Strabag,
}

impl Company {
    pub const ALL: [Company; 6] = [
        Company::Vinci,
        Company::Acs,
        Company::Bouygues,
        Company::Eiffage,
        Company::Skanska,
        Company::Strabag,
    ];

    /// Code used in the `company` column of the dataset.
    pub fn code(self) -> &'static str {
        match self {
            Company::Vinci => "vinci",
            Company::Acs => "acs",
            Company::Bouygues => "bouygues",
            Company::Eiffage => "eiffage",
            Company::Skanska => "skanska",
            Company::Strabag => "strabag",
        }
    }

    /// Exact match on the dataset code. Rows are filtered with this, so
    /// rows tagged `VINCI` or `Vinci` do not belong to any tracked company.
    pub fn from_code(code: &str) -> Option<Company> {
        Company::ALL.into_iter().find(|c| c.code() == code)
    }

    /// Legend label, the upper-cased code.
    pub fn label(self) -> String {
        self.code().to_uppercase()
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Company {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase();
        Company::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| DataError::UnknownCompany(s.to_string()))
    }
}

/// Numeric columns of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Revenue,
    Ebit,
    NetIncomeToShareholders,
    MarketCapitalisation,
    BalanceSheetTotal,
    EquityToOwner,
    Employees,
    NetIncomeRatio,
    EquityRatio,
    GrowthRevenue,
    GrowthNetIncome,
    GrowthEquity,
    GrowthMarketCapitalisation,
}

impl Metric {
    pub const ALL: [Metric; 13] = [
        Metric::Revenue,
        Metric::Ebit,
        Metric::NetIncomeToShareholders,
        Metric::MarketCapitalisation,
        Metric::BalanceSheetTotal,
        Metric::EquityToOwner,
        Metric::Employees,
        Metric::NetIncomeRatio,
        Metric::EquityRatio,
        Metric::GrowthRevenue,
        Metric::GrowthNetIncome,
        Metric::GrowthEquity,
        Metric::GrowthMarketCapitalisation,
    ];

    /// Header of the CSV column holding this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Revenue => "revenue",
            Metric::Ebit => "ebit",
            Metric::NetIncomeToShareholders => "net_income_to_shareholders",
            Metric::MarketCapitalisation => "market_capitalisation_31_dec",
            Metric::BalanceSheetTotal => "balance_sheet_tot_31_dec",
            Metric::EquityToOwner => "equity_to_owner_31_dec",
            Metric::Employees => "employees_31_dec",
            Metric::NetIncomeRatio => "net_income_ratio",
            Metric::EquityRatio => "equity_ratio_31_dec",
            Metric::GrowthRevenue => "growth_revenue",
            Metric::GrowthNetIncome => "growth_net_income",
            Metric::GrowthEquity => "growth_equity",
            Metric::GrowthMarketCapitalisation => "growth_market_capitalisation",
        }
    }

    pub fn value(self, record: &FinancialRecord) -> Option<f64> {
        match self {
            Metric::Revenue => record.revenue,
            Metric::Ebit => record.ebit,
            Metric::NetIncomeToShareholders => record.net_income_to_shareholders,
            Metric::MarketCapitalisation => record.market_capitalisation_31_dec,
            Metric::BalanceSheetTotal => record.balance_sheet_tot_31_dec,
            Metric::EquityToOwner => record.equity_to_owner_31_dec,
            Metric::Employees => record.employees_31_dec,
            Metric::NetIncomeRatio => record.net_income_ratio,
            Metric::EquityRatio => record.equity_ratio_31_dec,
            Metric::GrowthRevenue => record.growth_revenue,
            Metric::GrowthNetIncome => record.growth_net_income,
            Metric::GrowthEquity => record.growth_equity,
            Metric::GrowthMarketCapitalisation => record.growth_market_capitalisation,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Metric::ALL
            .into_iter()
            .find(|m| m.column() == key)
            .ok_or_else(|| DataError::UnknownMetric(s.to_string()))
    }
}

/// One (company, year) row of the source CSV.
///
/// Empty cells load as `None`; growth rates are typically empty for the
/// first year of a company's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub company: String,
    pub year: i32,
    pub revenue: Option<f64>,
    pub ebit: Option<f64>,
    pub net_income_to_shareholders: Option<f64>,
    pub market_capitalisation_31_dec: Option<f64>,
    pub balance_sheet_tot_31_dec: Option<f64>,
    pub equity_to_owner_31_dec: Option<f64>,
    pub employees_31_dec: Option<f64>,
    pub net_income_ratio: Option<f64>,
    pub equity_ratio_31_dec: Option<f64>,
    pub growth_revenue: Option<f64>,
    pub growth_net_income: Option<f64>,
    pub growth_equity: Option<f64>,
    pub growth_market_capitalisation: Option<f64>,
}
