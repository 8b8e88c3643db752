//! Risk trend chart.
//!
//! Inline SVG line chart for the 7-day average-score series; no external
//! chart library, matching the rest of the asset-free UI.

use leptos::*;

use crate::api::RiskTrendPoint;
use crate::format::{format_score, format_short_date};

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 180.0;
const PAD: f64 = 24.0;

/// Map a value series to SVG point coordinates.
///
/// X spreads evenly across the plot area; Y scales to the series min/max
/// with a guard for flat series.
fn chart_points(values: &[f64], width: f64, height: f64, pad: f64) -> Vec<(f64, f64)> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < f64::EPSILON {
        1.0
    } else {
        max - min
    };
    let step = if values.len() > 1 {
        (width - 2.0 * pad) / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = pad + step * i as f64;
            let y = height - pad - (v - min) / range * (height - 2.0 * pad);
            (x, y)
        })
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 7-day average risk score line chart.
#[component]
pub fn TrendChart(trends: Vec<RiskTrendPoint>) -> impl IntoView {
    let values: Vec<f64> = trends.iter().map(|t| t.average_score).collect();
    let points = chart_points(&values, WIDTH, HEIGHT, PAD);
    let line = polyline(&points);

    // Close the polygon along the bottom for the area fill.
    let area = match (points.first(), points.last()) {
        (Some(first), Some(last)) => format!(
            "{:.1},{:.1} {} {:.1},{:.1}",
            first.0,
            HEIGHT - PAD,
            line,
            last.0,
            HEIGHT - PAD
        ),
        _ => String::new(),
    };

    let first_label = trends.first().map(|t| format_short_date(&t.date));
    let last_label = trends.last().map(|t| format_short_date(&t.date));
    let latest_score = values.last().copied().map(format_score);

    view! {
        <svg
            class="trend-chart"
            viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            role="img"
            aria-label="Average risk score over the last 7 days"
        >
            <line class="trend-axis" x1=PAD y1={HEIGHT - PAD} x2={WIDTH - PAD} y2={HEIGHT - PAD}/>
            <line class="trend-axis" x1=PAD y1=PAD x2=PAD y2={HEIGHT - PAD}/>
            <polygon class="trend-fill" points=area/>
            <polyline class="trend-line" points=line/>
            {first_label.map(|l| view! {
                <text class="trend-label" x=PAD y={HEIGHT - 6.0}>{l}</text>
            })}
            {last_label.map(|l| view! {
                <text class="trend-label" x={WIDTH - PAD - 30.0} y={HEIGHT - 6.0}>{l}</text>
            })}
            {latest_score.map(|s| view! {
                <text class="trend-label" x={WIDTH - PAD - 30.0} y=PAD>{s}</text>
            })}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_span_plot_area() {
        let values = [10.0, 20.0, 30.0];
        let points = chart_points(&values, WIDTH, HEIGHT, PAD);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].0, PAD);
        assert_eq!(points[2].0, WIDTH - PAD);
        // Highest value sits at the top of the plot area.
        assert!((points[2].1 - PAD).abs() < 1e-9);
        // Lowest value sits at the bottom.
        assert!((points[0].1 - (HEIGHT - PAD)).abs() < 1e-9);
    }

    #[test]
    fn x_is_monotonic_and_y_bounded() {
        let values = [5.0, 40.0, 12.0, 33.0, 8.0];
        let points = chart_points(&values, WIDTH, HEIGHT, PAD);
        for pair in points.windows(2) {
            assert!(pair[1].0 > pair[0].0);
        }
        for (_, y) in &points {
            assert!(*y >= PAD && *y <= HEIGHT - PAD);
        }
    }

    #[test]
    fn flat_series_does_not_divide_by_zero() {
        let values = [25.0; 7];
        let points = chart_points(&values, WIDTH, HEIGHT, PAD);
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|(_, y)| y.is_finite()));
    }

    #[test]
    fn empty_series_yields_no_points() {
        assert!(chart_points(&[], WIDTH, HEIGHT, PAD).is_empty());
        assert_eq!(polyline(&[]), "");
    }
}
