use yew::prelude::*;

use crate::indicator::{Indicator, IndicatorIcon};

#[derive(Properties, PartialEq)]
pub struct CommonFeaturesProps {
    pub features: Vec<String>,
}

#[function_component(CommonFeatures)]
pub fn common_features(props: &CommonFeaturesProps) -> Html {
    if props.features.is_empty() {
        return html! {};
    }

    html! {
        <div class="common-features">
            <div class="common-features-title">
                <span class="common-features-flame">{"🔥"}</span>
                <h3>{"Common For All Plans"}</h3>
            </div>
            <div class="common-features-grid">
                {
                    props.features.iter().map(|feature| html! {
                        <div key={feature.clone()} class="common-feature">
                            <div class="common-feature-badge">
                                <IndicatorIcon indicator={Indicator::Included} />
                            </div>
                            <span>{feature.clone()}</span>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
