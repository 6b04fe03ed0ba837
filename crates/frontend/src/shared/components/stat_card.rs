use crate::shared::components::table::{format_money, format_number_int, format_number_with_decimals};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, IndicatorValue, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            if val.fract() == 0.0 {
                format!("{}{}", currency, format_number_int(val))
            } else {
                format_money(val, currency)
            }
        }
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals))
        }
        ValueFormat::Integer => format_number_int(val),
    }
}

/// Change badge text and modifier class
fn change_parts(pct: f64) -> (String, &'static str) {
    let (sign, cls) = if pct > 0.5 {
        ("+", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("-", "stat-card__change stat-card__change--down")
    } else if pct < 0.0 {
        ("-", "stat-card__change stat-card__change--flat")
    } else {
        ("+", "stat-card__change stat-card__change--flat")
    };
    (format!("{}{:.2}%", sign, pct.abs()), cls)
}

#[component]
pub fn StatCard(
    indicator: IndicatorValue,
) -> impl IntoView {
    let status_class = match indicator.status {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = match indicator.value {
        Some(v) => format_value(v, &indicator.format),
        None => "—".to_string(),
    };

    let change_view = indicator.change_percent.map(|pct| {
        let (text, cls) = change_parts(pct);
        view! { <span class=cls>{text}</span> }
    });

    let subtitle_view = indicator.subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class=status_class>
            <div class="stat-card__header">
                <div class="stat-card__label">{indicator.label}</div>
                <div class="stat-card__icon">{icon(&indicator.icon)}</div>
            </div>
            <div class="stat-card__value">
                {formatted}
                {change_view}
            </div>
            {subtitle_view}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(3781.0, &ValueFormat::Integer), "3,781");
        assert_eq!(
            format_value(695.0, &ValueFormat::Money { currency: "$".into() }),
            "$695"
        );
        assert_eq!(
            format_value(58211.5, &ValueFormat::Money { currency: "$".into() }),
            "$58,211.50"
        );
        assert_eq!(format_value(30.1, &ValueFormat::Percent { decimals: 1 }), "30.1%");
    }

    #[test]
    fn test_change_parts() {
        assert_eq!(change_parts(11.01).0, "+11.01%");
        assert_eq!(change_parts(-0.03), ("-0.03%".to_string(), "stat-card__change stat-card__change--flat"));
        assert!(change_parts(-4.0).1.ends_with("--down"));
    }
}
