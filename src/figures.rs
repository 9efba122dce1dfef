// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

use crate::dataset::Dataset;
use crate::layout::{self, Layout};
use crate::models::{Company, Metric};
use crate::series::{Line, Series};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const INCOME_STATEMENT_TITLE: &str = "Trend - Revenue | EBIT | Net Profit [€]";
pub const BALANCE_SHEET_TITLE: &str = "Trend - Market Capitalisation | Equity [€]";

/// Number of descriptors returned by [`FigureBuilder::build_all`].
pub const FIGURE_COUNT: usize = 20;

struct TraceStyle {
    metric: Metric,
    name: &'static str,
    color: &'static str,
    width: u32,
    dotted: bool,
}

// Market cap is drawn identically in both per-company charts so they read as a pair.
const MARKET_CAP_TRACE: TraceStyle = TraceStyle {
    metric: Metric::MarketCapitalisation,
    name: "Market Capital.",
    color: "rgb(179,179,179)",
    width: 3,
    dotted: true,
};

const INCOME_STATEMENT_TRACES: [TraceStyle; 4] = [
    TraceStyle {
        metric: Metric::Revenue,
        name: "Revenue",
        color: "royalblue",
        width: 2,
        dotted: false,
    },
    TraceStyle {
        metric: Metric::Ebit,
        name: "EBIT",
        color: "rgb(252,141,98)",
        width: 2,
        dotted: false,
    },
    TraceStyle {
        metric: Metric::NetIncomeToShareholders,
        name: "Net Profit",
        color: "firebrick",
        width: 2,
        dotted: false,
    },
    MARKET_CAP_TRACE,
];

const BALANCE_SHEET_TRACES: [TraceStyle; 3] = [
    TraceStyle {
        metric: Metric::BalanceSheetTotal,
        name: "Total Assets",
        color: "#990099",
        width: 2,
        dotted: false,
    },
    TraceStyle {
        metric: Metric::EquityToOwner,
        name: "Equity",
        color: "#109618",
        width: 2,
        dotted: false,
    },
    MARKET_CAP_TRACE,
];

/// Cross-company charts in dashboard order. The first two are shown before
/// the per-company pairs, the rest after.
const CROSS_COMPANY_CHARTS: [(Metric, &str); 8] = [
    (Metric::Revenue, "Trend - Revenue Top 6 Companies [€]"),
    (Metric::Employees, "Trend - Employees Top 6 Companies"),
    (Metric::NetIncomeRatio, "Trend - Net Profit Margin Top 6 Companies [%]"),
    (Metric::EquityRatio, "Trend - Equity Ratio Top 6 Companies [%]"),
    (Metric::GrowthRevenue, "Growth - Revenue Top 6 Companies [%]"),
    (Metric::GrowthNetIncome, "Growth - Net Profit Top 6 Companies [%]"),
    (Metric::GrowthEquity, "Growth - Equity Top 6 Companies [%]"),
    (
        Metric::GrowthMarketCapitalisation,
        "Growth - Market Capitalisation Top 6 Companies [%]",
    ),
];
const CROSS_COMPANY_LEADING: usize = 2;

/// A chart descriptor: the series to plot and how to lay them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Series>,
    pub layout: Layout,
}

/// One entry of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    CrossCompany { metric: Metric, title: &'static str },
    IncomeStatement(Company),
    BalanceSheet(Company),
}

impl Chart {
    pub fn title(&self) -> &'static str {
        match self {
            Chart::CrossCompany { title, .. } => *title,
            Chart::IncomeStatement(_) => INCOME_STATEMENT_TITLE,
            Chart::BalanceSheet(_) => BALANCE_SHEET_TITLE,
        }
    }

    /// File-name friendly identifier.
    pub fn slug(&self) -> String {
        match self {
            Chart::CrossCompany { metric, .. } => format!("all_{}", metric.column()),
            Chart::IncomeStatement(company) => format!("{}_income_statement", company.code()),
            Chart::BalanceSheet(company) => format!("{}_balance_sheet", company.code()),
        }
    }
}

fn cross_company_chart(&(metric, title): &(Metric, &'static str)) -> Chart {
    Chart::CrossCompany { metric, title }
}

/// The fixed sequence of charts the dashboard renders.
pub fn chart_plan() -> Vec<Chart> {
    let (leading, trailing) = CROSS_COMPANY_CHARTS.split_at(CROSS_COMPANY_LEADING);

    let mut plan = Vec::with_capacity(FIGURE_COUNT);
    plan.extend(leading.iter().map(cross_company_chart));
    for company in Company::ALL {
        plan.push(Chart::IncomeStatement(company));
        plan.push(Chart::BalanceSheet(company));
    }
    plan.extend(trailing.iter().map(cross_company_chart));
    plan
}

/// Turns a [`Dataset`] into chart descriptors. Holds no state besides the
/// borrowed dataset; every call recomputes from it.
pub struct FigureBuilder<'a> {
    dataset: &'a Dataset,
}

impl<'a> FigureBuilder<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    fn styled_series(&self, company: Company, styles: &[TraceStyle]) -> Vec<Series> {
        let years = self.dataset.years(company);
        styles
            .iter()
            .map(|style| {
                let mut line = Line::new(style.color, style.width);
                if style.dotted {
                    line = line.dotted();
                }
                Series::lines(
                    style.name,
                    years.clone(),
                    self.dataset.values(company, style.metric),
                )
                .with_line(line)
            })
            .collect()
    }

    /// Revenue, EBIT, net profit and market cap of one company.
    pub fn income_statement(&self, company: Company) -> Vec<Series> {
        self.styled_series(company, &INCOME_STATEMENT_TRACES)
    }

    /// Total assets, equity and market cap of one company.
    pub fn balance_sheet(&self, company: Company) -> Vec<Series> {
        self.styled_series(company, &BALANCE_SHEET_TRACES)
    }

    /// One series per company for `metric`, in [`Company::ALL`] order.
    /// Companies without rows keep an empty entry.
    pub fn comparison(&self, metric: Metric) -> Vec<Series> {
        Company::ALL
            .into_iter()
            .map(|company| {
                Series::lines(
                    company.label(),
                    self.dataset.years(company),
                    self.dataset.values(company, metric),
                )
            })
            .collect()
    }

    pub fn build(&self, chart: &Chart) -> Figure {
        debug!(chart = %chart.slug(), "building figure");
        match *chart {
            Chart::CrossCompany { metric, .. } => Figure {
                data: self.comparison(metric),
                layout: layout::cross_company(chart.title()),
            },
            Chart::IncomeStatement(company) => Figure {
                data: self.income_statement(company),
                layout: layout::single_company(chart.title()),
            },
            Chart::BalanceSheet(company) => Figure {
                data: self.balance_sheet(company),
                layout: layout::single_company(chart.title()),
            },
        }
    }

    /// All dashboard figures in presentation order.
    pub fn build_all(&self) -> Vec<Figure> {
        chart_plan().iter().map(|chart| self.build(chart)).collect()
    }
}

#[cfg(test)]
#[path = "figures_test.rs"]
mod figures_test;
