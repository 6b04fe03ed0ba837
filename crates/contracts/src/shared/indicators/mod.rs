use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as the key of a KPI card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl IndicatorStatus {
    /// Derives the status from the change against the previous period.
    /// Changes within ±0.5% are treated as flat.
    pub fn from_change(change_percent: Option<f64>) -> Self {
        match change_percent {
            Some(pct) if pct > 0.5 => IndicatorStatus::Good,
            Some(pct) if pct < -0.5 => IndicatorStatus::Bad,
            Some(_) => IndicatorStatus::Neutral,
            None => IndicatorStatus::Warning,
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// A single indicator as rendered by a KPI card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub id: IndicatorId,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
    /// Primary numeric value (`None` when data is unavailable).
    pub value: Option<f64>,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: Option<f64>,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub subtitle: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_change() {
        assert_eq!(IndicatorStatus::from_change(Some(11.01)), IndicatorStatus::Good);
        assert_eq!(IndicatorStatus::from_change(Some(-0.03)), IndicatorStatus::Neutral);
        assert_eq!(IndicatorStatus::from_change(Some(-4.2)), IndicatorStatus::Bad);
        assert_eq!(IndicatorStatus::from_change(None), IndicatorStatus::Warning);
    }

    #[test]
    fn test_value_format_is_tagged() {
        let json = serde_json::to_value(ValueFormat::Money { currency: "$".into() }).unwrap();
        assert_eq!(json["kind"], "Money");
        assert_eq!(json["currency"], "$");
    }
}
