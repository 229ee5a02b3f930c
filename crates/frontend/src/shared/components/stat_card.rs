use crate::shared::icons::icon;
use crate::shared::number_format::{format_number_int, format_number_with_decimals};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let formatted = if val.abs() >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0)
            } else {
                format_number_with_decimals(val, 2)
            };
            format!("{} {}", formatted, currency)
        }
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals as usize),
        ValueFormat::Percent { decimals } => {
            format!(
                "{}%",
                format_number_with_decimals(val, *decimals as usize)
            )
        }
        ValueFormat::Integer => format_number_int(val),
    }
}

fn status_class(status: IndicatorStatus) -> &'static str {
    match status {
        IndicatorStatus::Good => "stat-card--good",
        IndicatorStatus::Warning => "stat-card--warning",
        IndicatorStatus::Bad => "stat-card--bad",
        IndicatorStatus::Neutral => "stat-card--neutral",
    }
}

/// KPI tile: label, icon and one formatted value.
/// `None` renders as a loading placeholder.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    /// Primary numeric value (None = still loading)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Traffic-light accent
    #[prop(optional, into)]
    status: MaybeProp<IndicatorStatus>,
) -> impl IntoView {
    view! {
        <div class=move || {
            format!("stat-card {}", status_class(status.get().unwrap_or(IndicatorStatus::Neutral)))
        }>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || match value.get() {
                        Some(v) => format_value(v, &format),
                        None => "—".to_string(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_compacts_millions() {
        let fmt = ValueFormat::Money {
            currency: "EUR".into(),
        };
        assert_eq!(format_value(1_250_000.0, &fmt), "1.3M EUR");
        assert_eq!(format_value(1250.5, &fmt), "1 250.50 EUR");
    }

    #[test]
    fn percent_and_integer() {
        assert_eq!(
            format_value(93.456, &ValueFormat::Percent { decimals: 1 }),
            "93.5%"
        );
        assert_eq!(format_value(10432.0, &ValueFormat::Integer), "10 432");
    }
}
