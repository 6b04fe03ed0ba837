//! Lightweight SVG charts fed with `ChartPoint` series.
//!
//! Geometry is computed by pure functions in each module; components only
//! turn the computed shapes into SVG elements. Colors come from the
//! `--chart-N` CSS variables so both theme modes apply.

pub mod bar_chart;
pub mod donut_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use donut_chart::DonutChart;
pub use line_chart::LineChart;

/// Drawing area of a chart in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBox {
    pub width: f64,
    pub height: f64,
    /// Space left for axis labels on the left and at the bottom
    pub padding_left: f64,
    pub padding_bottom: f64,
}

impl ChartBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding_left: 32.0,
            padding_bottom: 24.0,
        }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.padding_left).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.padding_bottom).max(0.0)
    }

    /// Y coordinate of `value` on a 0..=max scale
    pub fn y_for(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.plot_height();
        }
        let ratio = (value / max).clamp(0.0, 1.0);
        self.plot_height() * (1.0 - ratio)
    }
}

/// Число для SVG-атрибута, два знака после точки
pub fn coord(v: f64) -> String {
    format!("{:.2}", v)
}

/// CSS color for the series with index `i`
pub fn series_color(i: usize) -> String {
    format!("var(--chart-{})", i % 6 + 1)
}

/// Rounds the maximum up to a "nice" value so gridlines fall on round numbers
pub fn nice_max(max: f64) -> f64 {
    if max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let normalized = max / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Значения горизонтальных линий сетки: 0, max/n, ..., max
pub fn grid_values(max: f64, lines: usize) -> Vec<f64> {
    if lines == 0 {
        return vec![0.0];
    }
    (0..=lines).map(|i| max * i as f64 / lines as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(27.0), 50.0);
        assert_eq!(nice_max(23.0), 25.0);
        assert_eq!(nice_max(72.0), 100.0);
        assert_eq!(nice_max(0.0), 1.0);
    }

    #[test]
    fn test_y_for_scale() {
        let b = ChartBox::new(232.0, 124.0);
        assert_eq!(b.plot_height(), 100.0);
        assert_eq!(b.y_for(0.0, 50.0), 100.0);
        assert_eq!(b.y_for(50.0, 50.0), 0.0);
        assert_eq!(b.y_for(25.0, 50.0), 50.0);
        assert_eq!(b.y_for(80.0, 50.0), 0.0);
        assert_eq!(b.y_for(10.0, 0.0), 100.0);
    }

    #[test]
    fn test_coord() {
        assert_eq!(coord(12.0), "12.00");
        assert_eq!(coord(1.0 / 3.0), "0.33");
    }

    #[test]
    fn test_grid_values() {
        assert_eq!(grid_values(30.0, 3), vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(grid_values(30.0, 0), vec![0.0]);
    }
}
