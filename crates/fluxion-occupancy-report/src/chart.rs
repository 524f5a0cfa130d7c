// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use anyhow::Result;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use fluxion_occupancy::{DailyTotal, RollingPoint};
use plotters::prelude::*;
use std::path::Path;

pub const ROLLING_TITLE: &str = "Consumo acumulado 24h — Before vs After";
pub const DAILY_TITLE: &str = "Consumo diário — Before vs After";

const BEFORE_COLOR: RGBColor = RGBColor(31, 119, 180);
const AFTER_COLOR: RGBColor = RGBColor(255, 127, 14);

/// One plotted line
struct Line<'a> {
    label: &'a str,
    color: RGBColor,
    points: Vec<(DateTime<Utc>, f64)>,
}

/// Render the rolling 24 h before/after sums as an SVG line chart.
///
/// Points without a complete window are skipped. Returns `false` without
/// writing anything when no complete window exists.
pub fn draw_rolling_chart(points: &[RollingPoint], path: &Path, size: (u32, u32)) -> Result<bool> {
    let complete: Vec<(DateTime<Utc>, f64, f64)> = points
        .iter()
        .filter_map(|p| Some((p.timestamp.and_utc(), p.before_kwh?, p.after_kwh?)))
        .collect();

    if complete.is_empty() {
        return Ok(false);
    }

    let lines = [
        Line {
            label: "kwh_before",
            color: BEFORE_COLOR,
            points: complete.iter().map(|(t, b, _)| (*t, *b)).collect(),
        },
        Line {
            label: "kwh_after",
            color: AFTER_COLOR,
            points: complete.iter().map(|(t, _, a)| (*t, *a)).collect(),
        },
    ];

    draw_lines(
        path,
        size,
        ROLLING_TITLE,
        "kWh (24h)",
        "%m-%d %H:%M",
        Duration::hours(1),
        &lines,
    )?;
    Ok(true)
}

/// Render daily before/after totals as an SVG line chart.
///
/// Returns `false` without writing anything when there are no days.
pub fn draw_daily_chart(totals: &[DailyTotal], path: &Path, size: (u32, u32)) -> Result<bool> {
    if totals.is_empty() {
        return Ok(false);
    }

    let at_midnight = |day: &DailyTotal| day.date.and_time(NaiveTime::MIN).and_utc();
    let lines = [
        Line {
            label: "Before",
            color: BEFORE_COLOR,
            points: totals.iter().map(|d| (at_midnight(d), d.before_kwh)).collect(),
        },
        Line {
            label: "After",
            color: AFTER_COLOR,
            points: totals.iter().map(|d| (at_midnight(d), d.after_kwh)).collect(),
        },
    ];

    draw_lines(
        path,
        size,
        DAILY_TITLE,
        "kWh/dia",
        "%Y-%m-%d",
        Duration::days(1),
        &lines,
    )?;
    Ok(true)
}

fn draw_lines(
    path: &Path,
    size: (u32, u32),
    caption: &str,
    y_desc: &str,
    x_format: &str,
    min_span: Duration,
    lines: &[Line<'_>],
) -> Result<()> {
    let all_points = || lines.iter().flat_map(|line| line.points.iter());

    let Some(first_time) = all_points().map(|(t, _)| *t).min() else {
        return Ok(());
    };
    let mut last_time = all_points().map(|(t, _)| *t).max().unwrap_or(first_time);
    // A single point still needs a non-empty axis
    if last_time <= first_time {
        last_time = first_time + min_span;
    }

    let max_value = all_points()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = if max_value > 0.0 { max_value * 1.1 } else { 1.0 };

    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(first_time..last_time, 0.0..y_max)?;

    chart
        .configure_mesh()
        .y_desc(y_desc)
        .x_labels(10)
        .y_labels(8)
        .x_label_formatter(&|dt| dt.format(x_format).to_string())
        .label_style(("sans-serif", 12))
        .draw()?;

    for line in lines {
        let color = line.color;
        chart
            .draw_series(LineSeries::new(line.points.iter().copied(), color.stroke_width(2)))?
            .label(line.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32, before: f64, after: f64) -> DailyTotal {
        DailyTotal {
            date: NaiveDate::from_ymd_opt(2024, 9, d).unwrap(),
            before_kwh: before,
            after_kwh: after,
        }
    }

    #[test]
    fn test_daily_chart_writes_svg() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("daily.svg");

        let written = draw_daily_chart(
            &[day(1, 13.3, 11.1), day(2, 32.4, 19.8), day(3, 32.4, 21.0)],
            &path,
            (1000, 400),
        )
        .unwrap();

        assert!(written);
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Before"));
    }

    #[test]
    fn test_single_day_chart_is_drawn() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("single.svg");

        assert!(draw_daily_chart(&[day(1, 10.0, 8.0)], &path, (600, 300)).unwrap());
        assert!(path.exists());
    }

    #[test]
    fn test_nothing_to_draw_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let daily = tmp.path().join("daily.svg");
        let rolling = tmp.path().join("rolling.svg");

        let incomplete = [RollingPoint {
            timestamp: NaiveDate::from_ymd_opt(2024, 9, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            before_kwh: None,
            after_kwh: None,
        }];

        assert!(!draw_daily_chart(&[], &daily, (600, 300)).unwrap());
        assert!(!draw_rolling_chart(&incomplete, &rolling, (600, 300)).unwrap());
        assert!(!daily.exists());
        assert!(!rolling.exists());
    }
}
