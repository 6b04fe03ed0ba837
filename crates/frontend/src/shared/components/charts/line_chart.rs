use super::{coord, grid_values, nice_max, series_color, ChartBox};
use crate::shared::components::table::format_compact;
use contracts::dashboards::d100_overview::dto::ChartSeries;
use leptos::prelude::*;

const GRID_LINES: usize = 3;

/// Points of a series spread evenly across the plot width.
///
/// A single point is drawn in the middle of the plot.
pub fn line_points(series: &ChartSeries, chart: &ChartBox, max: f64) -> Vec<(f64, f64)> {
    let n = series.points.len();
    if n == 0 {
        return Vec::new();
    }
    let step = if n > 1 {
        chart.plot_width() / (n - 1) as f64
    } else {
        0.0
    };
    let offset = if n > 1 { 0.0 } else { chart.plot_width() / 2.0 };

    series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            (
                chart.padding_left + offset + step * i as f64,
                chart.y_for(p.value, max),
            )
        })
        .collect()
}

/// `points` attribute of an SVG polyline
pub fn polyline_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", coord(*x), coord(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn LineChart(
    series: Vec<ChartSeries>,
    #[prop(optional)]
    width: Option<f64>,
    #[prop(optional)]
    height: Option<f64>,
    /// Unit prefix for axis labels, e.g. "$"
    #[prop(optional)]
    unit: &'static str,
) -> impl IntoView {
    let chart = ChartBox::new(width.unwrap_or(560.0), height.unwrap_or(220.0));
    let max = nice_max(series.iter().map(|s| s.max_value()).fold(0.0, f64::max));
    let labels: Vec<(f64, String)> = series
        .first()
        .map(|s| {
            line_points(s, &chart, max)
                .into_iter()
                .zip(s.points.iter())
                .map(|((x, _), p)| (x, p.name.clone()))
                .collect()
        })
        .unwrap_or_default();
    let view_box = format!("0 0 {} {}", chart.width, chart.height);

    view! {
        <div class="chart chart--line">
            <div class="chart__legend">
                {series.iter().enumerate().map(|(i, s)| view! {
                    <span class="chart__legend-item">
                        <span class="chart__legend-dot" style=format!("background: {};", series_color(i))></span>
                        {s.name.clone()}
                    </span>
                }).collect_view()}
            </div>
            <svg class="chart__svg" viewBox=view_box role="img" aria-label="Line chart">
                {grid_values(max, GRID_LINES).into_iter().map(|v| {
                    let y = chart.y_for(v, max);
                    view! {
                        <line
                            class="chart__grid"
                            x1=coord(chart.padding_left) x2=coord(chart.width)
                            y1=coord(y) y2=coord(y)
                        />
                        <text class="chart__axis-label" x=coord(chart.padding_left - 6.0) y=coord(y + 4.0) text-anchor="end">
                            {format!("{}{}", unit, format_compact(v))}
                        </text>
                    }
                }).collect_view()}
                {series.iter().enumerate().map(|(i, s)| {
                    let points = polyline_attr(&line_points(s, &chart, max));
                    view! {
                        <polyline
                            class="chart__line"
                            class:chart__line--dashed={i > 0}
                            points=points
                            fill="none"
                            stroke=series_color(i)
                        />
                    }
                }).collect_view()}
                {labels.into_iter().map(|(x, label)| view! {
                    <text class="chart__axis-label" x=coord(x) y=coord(chart.height - 6.0) text-anchor="middle">
                        {label}
                    </text>
                }).collect_view()}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_overview::dto::ChartPoint;

    fn s(values: &[f64]) -> ChartSeries {
        ChartSeries {
            name: "s".into(),
            points: values.iter().map(|v| ChartPoint::new("p", *v)).collect(),
        }
    }

    #[test]
    fn test_line_points_span_plot() {
        let chart = ChartBox::new(232.0, 124.0);
        let pts = line_points(&s(&[0.0, 10.0, 20.0]), &chart, 20.0);
        assert_eq!(pts, vec![(32.0, 100.0), (132.0, 50.0), (232.0, 0.0)]);
    }

    #[test]
    fn test_single_point_is_centered() {
        let chart = ChartBox::new(232.0, 124.0);
        assert_eq!(line_points(&s(&[5.0]), &chart, 10.0), vec![(132.0, 50.0)]);
        assert!(line_points(&s(&[]), &chart, 10.0).is_empty());
    }

    #[test]
    fn test_polyline_attr() {
        assert_eq!(polyline_attr(&[(1.0, 2.0), (3.5, 4.25)]), "1.00,2.00 3.50,4.25");
        assert_eq!(polyline_attr(&[]), "");
    }
}
