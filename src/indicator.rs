use yew::prelude::*;

use crate::catalog::CellValue;

/// What a single matrix cell turns into on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indicator {
    Included,
    Excluded,
    Text(String),
    Missing,
}

impl Indicator {
    pub fn render(value: Option<&CellValue>) -> Self {
        match value {
            Some(CellValue::Flag(true)) => Indicator::Included,
            Some(CellValue::Flag(false)) => Indicator::Excluded,
            Some(CellValue::Text(text)) => Indicator::Text(text.clone()),
            None => Indicator::Missing,
        }
    }

    /// Plain-text form, used for accessible labels.
    pub fn symbol(&self) -> &str {
        match self {
            Indicator::Included => "✓",
            Indicator::Excluded => "✗",
            Indicator::Text(text) => text,
            Indicator::Missing => "—",
        }
    }

    pub fn aria_label(&self) -> &str {
        match self {
            Indicator::Included => "Included",
            Indicator::Excluded => "Not included",
            Indicator::Text(text) => text,
            Indicator::Missing => "Not specified",
        }
    }
}

impl From<&CellValue> for Indicator {
    fn from(value: &CellValue) -> Self {
        Indicator::render(Some(value))
    }
}

#[derive(Properties, PartialEq)]
pub struct IndicatorProps {
    pub indicator: Indicator,
}

#[function_component(IndicatorIcon)]
pub fn indicator_icon(props: &IndicatorProps) -> Html {
    let label = props.indicator.aria_label().to_string();

    let symbol = props.indicator.symbol().to_string();
    let body = match &props.indicator {
        Indicator::Included => html! {
            <svg class="icon icon-check" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
                <path d="M20 6 9 17l-5-5" fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        },
        Indicator::Excluded => html! {
            <svg class="icon icon-cross" viewBox="0 0 24 24" width="24" height="24" aria-hidden="true">
                <path d="M18 6 6 18M6 6l12 12" fill="none" stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round" />
            </svg>
        },
        Indicator::Text(_) => html! { <span class="indicator-text">{symbol}</span> },
        Indicator::Missing => html! { <span class="indicator-missing">{symbol}</span> },
    };

    html! {
        <div class="indicator" role="img" aria-label={label}>
            {body}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booleans_map_to_icons() {
        assert_eq!(Indicator::from(&CellValue::Flag(true)), Indicator::Included);
        assert_eq!(Indicator::from(&CellValue::Flag(false)), Indicator::Excluded);
        assert_eq!(Indicator::Included.symbol(), "✓");
        assert_eq!(Indicator::Excluded.symbol(), "✗");
    }

    #[test]
    fn text_passes_through_verbatim() {
        let basic = Indicator::from(&CellValue::Text("Basic".into()));
        assert_eq!(basic, Indicator::Text("Basic".into()));
        assert_eq!(basic.symbol(), "Basic");

        let drone = Indicator::from(&CellValue::Text("Drone / Pro".into()));
        assert_eq!(drone.symbol(), "Drone / Pro");
        assert_eq!(drone.aria_label(), "Drone / Pro");
    }

    #[test]
    fn missing_value_falls_back_to_dash() {
        let missing = Indicator::render(None);
        assert_eq!(missing, Indicator::Missing);
        assert_eq!(missing.symbol(), "—");
    }

    #[test]
    fn rendering_is_idempotent() {
        let value = CellValue::Flag(true);
        assert_eq!(Indicator::from(&value), Indicator::from(&value));
    }
}
