use super::{coord, series_color};
use crate::shared::components::table::format_money;
use contracts::dashboards::d100_overview::dto::ChartSeries;
use leptos::prelude::*;

const RADIUS: f64 = 40.0;
const STROKE: f64 = 14.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSegment {
    /// Length of the visible arc along the circumference
    pub dash: f64,
    /// Offset from the start of the circle (negative dashoffset)
    pub offset: f64,
    pub fraction: f64,
}

/// Splits a circle of length `circumference` into segments proportional to
/// the values. Negative values count as zero; an all-zero series yields no
/// visible arcs.
pub fn donut_segments(values: &[f64], circumference: f64) -> Vec<DonutSegment> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    let mut offset = 0.0;
    values
        .iter()
        .map(|v| {
            let fraction = if total > 0.0 { v.max(0.0) / total } else { 0.0 };
            let dash = fraction * circumference;
            let segment = DonutSegment {
                dash,
                offset,
                fraction,
            };
            offset += dash;
            segment
        })
        .collect()
}

#[component]
pub fn DonutChart(
    series: ChartSeries,
    /// Currency prefix for legend values
    #[prop(optional)]
    currency: &'static str,
) -> impl IntoView {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let values: Vec<f64> = series.points.iter().map(|p| p.value).collect();
    let segments = donut_segments(&values, circumference);
    let total = series.total();

    view! {
        <div class="chart chart--donut">
            <svg class="chart__svg chart__svg--donut" viewBox="0 0 100 100" role="img" aria-label=series.name.clone()>
                <circle class="chart__donut-track" cx="50" cy="50" r=coord(RADIUS) fill="none" stroke-width=coord(STROKE) />
                {segments.iter().enumerate().map(|(i, seg)| view! {
                    <circle
                        class="chart__donut-segment"
                        cx="50" cy="50" r=coord(RADIUS)
                        fill="none"
                        stroke=series_color(i)
                        stroke-width=coord(STROKE)
                        stroke-dasharray=format!("{} {}", coord(seg.dash), coord(circumference - seg.dash))
                        stroke-dashoffset=coord(-seg.offset)
                        transform="rotate(-90 50 50)"
                    />
                }).collect_view()}
                <text class="chart__donut-total" x="50" y="54" text-anchor="middle">
                    {format_money(total, currency)}
                </text>
            </svg>
            <ul class="chart__legend chart__legend--list">
                {series.points.into_iter().zip(segments).enumerate().map(|(i, (point, seg))| view! {
                    <li class="chart__legend-item">
                        <span class="chart__legend-dot" style=format!("background: {};", series_color(i))></span>
                        <span class="chart__legend-name">{point.name}</span>
                        <span class="chart__legend-value">{format_money(point.value, currency)}</span>
                        <span class="chart__legend-share">{format!("{:.1}%", seg.fraction * 100.0)}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_cover_circle() {
        let segs = donut_segments(&[1.0, 1.0, 2.0], 100.0);
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0], DonutSegment { dash: 25.0, offset: 0.0, fraction: 0.25 });
        assert_eq!(segs[1].offset, 25.0);
        assert_eq!(segs[2].offset, 50.0);
        assert_eq!(segs[2].dash, 50.0);
        let sum: f64 = segs.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_and_negative_values() {
        let segs = donut_segments(&[0.0, 0.0], 100.0);
        assert!(segs.iter().all(|s| s.dash == 0.0));
        let segs = donut_segments(&[-5.0, 5.0], 100.0);
        assert_eq!(segs[0].dash, 0.0);
        assert_eq!(segs[1].dash, 100.0);
    }
}
