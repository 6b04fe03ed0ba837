use super::{coord, grid_values, nice_max, series_color, ChartBox};
use crate::shared::components::table::format_compact;
use contracts::dashboards::d100_overview::dto::ChartSeries;
use leptos::prelude::*;

const GRID_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub series: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Grouped bars: one group per category, one bar per series inside a group.
///
/// Categories are taken from the first series; a series shorter than the
/// first one simply has no bar for the missing categories.
pub fn bar_rects(series: &[ChartSeries], chart: &ChartBox, max: f64) -> Vec<BarRect> {
    let Some(first) = series.first() else {
        return Vec::new();
    };
    let groups = first.points.len();
    if groups == 0 {
        return Vec::new();
    }

    let group_width = chart.plot_width() / groups as f64;
    let bar_width = group_width * 0.6 / series.len() as f64;
    let group_offset = group_width * 0.2;

    let mut rects = Vec::new();
    for (s, serie) in series.iter().enumerate() {
        for (g, point) in serie.points.iter().take(groups).enumerate() {
            let y = chart.y_for(point.value, max);
            rects.push(BarRect {
                series: s,
                x: chart.padding_left + g as f64 * group_width + group_offset + s as f64 * bar_width,
                y,
                width: bar_width,
                height: chart.plot_height() - y,
            });
        }
    }
    rects
}

#[component]
pub fn BarChart(
    series: Vec<ChartSeries>,
    #[prop(optional)]
    width: Option<f64>,
    #[prop(optional)]
    height: Option<f64>,
) -> impl IntoView {
    let chart = ChartBox::new(width.unwrap_or(420.0), height.unwrap_or(180.0));
    let max = nice_max(series.iter().map(|s| s.max_value()).fold(0.0, f64::max));
    let rects = bar_rects(&series, &chart, max);
    let labels: Vec<String> = series
        .first()
        .map(|s| s.points.iter().map(|p| p.name.clone()).collect())
        .unwrap_or_default();
    let group_width = chart.plot_width() / labels.len().max(1) as f64;
    let view_box = format!("0 0 {} {}", chart.width, chart.height);

    view! {
        <div class="chart chart--bar">
            <svg class="chart__svg" viewBox=view_box role="img" aria-label="Bar chart">
                {grid_values(max, GRID_LINES).into_iter().map(|v| {
                    let y = chart.y_for(v, max);
                    view! {
                        <line
                            class="chart__grid"
                            x1=coord(chart.padding_left) x2=coord(chart.width)
                            y1=coord(y) y2=coord(y)
                        />
                        <text class="chart__axis-label" x=coord(chart.padding_left - 6.0) y=coord(y + 4.0) text-anchor="end">
                            {format_compact(v)}
                        </text>
                    }
                }).collect_view()}
                {rects.into_iter().map(|r| view! {
                    <rect
                        class="chart__bar"
                        x=coord(r.x) y=coord(r.y) width=coord(r.width) height=coord(r.height) rx="3"
                        fill=series_color(r.series)
                    />
                }).collect_view()}
                {labels.into_iter().enumerate().map(|(i, label)| view! {
                    <text
                        class="chart__axis-label"
                        x=coord(chart.padding_left + group_width * (i as f64 + 0.5))
                        y=coord(chart.height - 6.0)
                        text-anchor="middle"
                    >
                        {label}
                    </text>
                }).collect_view()}
            </svg>
            <div class="chart__legend">
                {series.into_iter().enumerate().map(|(i, s)| view! {
                    <span class="chart__legend-item">
                        <span class="chart__legend-dot" style=format!("background: {};", series_color(i))></span>
                        {s.name}
                    </span>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_overview::dto::ChartPoint;

    fn s(name: &str, values: &[f64]) -> ChartSeries {
        ChartSeries {
            name: name.into(),
            points: values
                .iter()
                .enumerate()
                .map(|(i, v)| ChartPoint::new(&format!("c{i}"), *v))
                .collect(),
        }
    }

    #[test]
    fn test_bar_rects_grouped_layout() {
        let chart = ChartBox::new(232.0, 124.0);
        let rects = bar_rects(&[s("a", &[10.0, 20.0]), s("b", &[5.0, 0.0])], &chart, 20.0);
        assert_eq!(rects.len(), 4);

        // группа 0, серия a: половина высоты
        assert_eq!(rects[0].height, 50.0);
        assert_eq!(rects[0].y, 50.0);
        // группа 1, серия a: полная высота
        assert_eq!(rects[1].height, 100.0);
        // нулевое значение — нулевая высота
        assert_eq!(rects[3].height, 0.0);
        // серия b стоит правее серии a в той же группе
        assert!(rects[2].x > rects[0].x);
        assert!((rects[2].x - rects[0].x - rects[0].width).abs() < 1e-9);
        assert!((rects[0].width - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_bar_rects_empty() {
        let chart = ChartBox::new(200.0, 100.0);
        assert!(bar_rects(&[], &chart, 10.0).is_empty());
        assert!(bar_rects(&[s("a", &[])], &chart, 10.0).is_empty());
    }
}
