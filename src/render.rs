// SPDX-FileCopyrightText: 2025 Joost van der Laan <joost@fashionunited.com>
//
// SPDX-License-Identifier: AGPL-3.0-only

//! Static SVG previews of the dashboard figures.
//!
//! Only an approximation of what the dashboard shows: dash styles are not
//! reproduced and missing values are skipped rather than drawn as gaps.

use crate::figures::{Chart, Figure};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use plotters::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

// Colors the dashboard assigns to series without an explicit line style
const COLOR_BLUE: RGBColor = RGBColor(31, 119, 180);
const COLOR_ORANGE: RGBColor = RGBColor(255, 127, 14);
const COLOR_GREEN: RGBColor = RGBColor(44, 160, 44);
const COLOR_RED: RGBColor = RGBColor(214, 39, 40);
const COLOR_PURPLE: RGBColor = RGBColor(148, 103, 189);
const COLOR_BROWN: RGBColor = RGBColor(140, 86, 75);

const AUTO_COLORS: [RGBColor; 6] = [
    COLOR_BLUE,
    COLOR_ORANGE,
    COLOR_GREEN,
    COLOR_RED,
    COLOR_PURPLE,
    COLOR_BROWN,
];

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;

/// Parse the CSS color forms used in line styles.
pub fn parse_color(color: &str) -> Option<RGBColor> {
    let color = color.trim();
    match color {
        "royalblue" => return Some(RGBColor(65, 105, 225)),
        "firebrick" => return Some(RGBColor(178, 34, 34)),
        _ => {}
    }

    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(RGBColor(channel(0)?, channel(2)?, channel(4)?));
    }

    let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels: Vec<u8> = inner
        .split(',')
        .map(|c| c.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Some(RGBColor(*r, *g, *b)),
        _ => None,
    }
}

/// Year span and value span of all plotted points. The value span always
/// includes zero, like the dashboard's `tozero` range mode.
pub fn plot_bounds(figure: &Figure) -> ((i32, i32), (f64, f64)) {
    let points: Vec<(i32, f64)> = figure.data.iter().flat_map(|s| s.points()).collect();

    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).fold(0.0, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(0.0, f64::max);

    let pad = (y_max - y_min).abs() * 0.05;
    let (y_min, y_max) = if pad == 0.0 {
        (y_min, y_min + 1.0)
    } else {
        (if y_min < 0.0 { y_min - pad } else { y_min }, y_max + pad)
    };

    ((x_min, x_max.max(x_min + 1)), (y_min, y_max))
}

/// Draw one figure as an SVG file at `path`.
pub fn render_figure(figure: &Figure, path: &Path) -> Result<()> {
    let ((x_min, x_max), (y_min, y_max)) = plot_bounds(figure);

    let root = SVGBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&figure.layout.title, ("sans-serif", 24).into_font().color(&BLACK))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(90)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_labels((x_max - x_min + 1) as usize)
        .x_label_formatter(&|x| x.to_string())
        .draw()?;

    for (i, series) in figure.data.iter().enumerate() {
        let (color, width) = match &series.line {
            Some(line) => (
                parse_color(&line.color).unwrap_or(AUTO_COLORS[i % AUTO_COLORS.len()]),
                line.width,
            ),
            None => (AUTO_COLORS[i % AUTO_COLORS.len()], 2),
        };
        let style = color.stroke_width(width);

        chart
            .draw_series(LineSeries::new(series.points(), style))?
            .label(series.name.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render every figure to `<index>_<slug>.svg` inside `output_dir`.
pub fn render_all(figures: &[Figure], plan: &[Chart], output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let progress = ProgressBar::new(figures.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")?
            .progress_chars("=>-"),
    );

    let mut paths = Vec::with_capacity(figures.len());
    for (i, (figure, chart)) in figures.iter().zip(plan).enumerate() {
        let path = output_dir.join(format!("{:02}_{}.svg", i, chart.slug()));
        progress.set_message(chart.slug());
        render_figure(figure, &path)
            .with_context(|| format!("Failed to render {}", path.display()))?;
        paths.push(path);
        progress.inc(1);
    }
    progress.finish_with_message("Rendering complete");

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::figures::{chart_plan, FigureBuilder, FIGURE_COUNT};
    use crate::layout;
    use crate::models::FinancialRecord;
    use crate::series::Series;
    use anyhow::Result;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("royalblue"), Some(RGBColor(65, 105, 225)));
        assert_eq!(parse_color("#109618"), Some(RGBColor(16, 150, 24)));
        assert_eq!(parse_color("rgb(252,141,98)"), Some(RGBColor(252, 141, 98)));
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("#12"), None);
    }

    #[test]
    fn test_plot_bounds_include_zero_and_negatives() {
        let figure = Figure {
            data: vec![
                Series::lines("VINCI", vec![2010, 2011], vec![Some(10.0), Some(-10.0)]),
                Series::lines("ACS", vec![2009, 2012], vec![None, Some(30.0)]),
            ],
            layout: layout::cross_company("Growth"),
        };

        let ((x_min, x_max), (y_min, y_max)) = plot_bounds(&figure);
        assert_eq!((x_min, x_max), (2010, 2012));
        assert_relative_eq!(y_min, -12.0);
        assert_relative_eq!(y_max, 32.0);
    }

    #[test]
    fn test_plot_bounds_for_empty_figure() {
        let figure = Figure {
            data: vec![Series::lines("STRABAG", vec![], vec![])],
            layout: layout::cross_company("Empty"),
        };

        let ((x_min, x_max), (y_min, y_max)) = plot_bounds(&figure);
        assert!(x_max > x_min);
        assert_relative_eq!(y_min, 0.0);
        assert_relative_eq!(y_max, 1.0);
    }

    #[test]
    fn test_plot_bounds_ignore_infinite_values() {
        let figure = Figure {
            data: vec![Series::lines(
                "EIFFAGE",
                vec![2015, 2016, 2017],
                vec![Some(f64::INFINITY), Some(20.0), Some(f64::NAN)],
            )],
            layout: layout::cross_company("Growth"),
        };

        let ((x_min, x_max), (y_min, y_max)) = plot_bounds(&figure);
        assert_eq!((x_min, x_max), (2016, 2017));
        assert_relative_eq!(y_min, 0.0);
        assert_relative_eq!(y_max, 21.0);
    }

    #[test]
    fn test_render_all_writes_one_svg_per_chart() -> Result<()> {
        let records = vec![
            FinancialRecord {
                company: "vinci".to_string(),
                year: 2018,
                revenue: Some(43519.0),
                ebit: Some(3997.0),
                market_capitalisation_31_dec: Some(43400.0),
                ..Default::default()
            },
            FinancialRecord {
                company: "vinci".to_string(),
                year: 2019,
                revenue: Some(48053.0),
                ebit: Some(4857.0),
                market_capitalisation_31_dec: Some(58200.0),
                growth_revenue: Some(10.4),
                ..Default::default()
            },
            FinancialRecord {
                company: "skanska".to_string(),
                year: 2019,
                revenue: Some(16000.0),
                employees_31_dec: Some(34000.0),
                ..Default::default()
            },
        ];
        let dataset = Dataset::from_records(records);
        let figures = FigureBuilder::new(&dataset).build_all();
        let dir = tempfile::tempdir()?;
        let output_dir = dir.path().join("svg");

        let paths = render_all(&figures, &chart_plan(), &output_dir)?;

        assert_eq!(paths.len(), FIGURE_COUNT);
        let names: Vec<String> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names[0], "00_all_revenue.svg");
        assert_eq!(names[1], "01_all_employees_31_dec.svg");
        assert_eq!(names[2], "02_vinci_income_statement.svg");
        assert_eq!(names[19], "19_all_growth_market_capitalisation.svg");
        for path in &paths {
            assert!(path.starts_with(&output_dir));
            let svg = fs::read_to_string(path)?;
            assert!(svg.contains("<svg"), "{} is not an SVG", path.display());
        }
        Ok(())
    }
}
