use yew::prelude::*;

use crate::gesture::IndicatorState;
use crate::util::px;

#[derive(Properties, PartialEq, Clone)]
pub struct PullIndicatorProps {
    pub state: IndicatorState,
}

#[function_component(PullIndicator)]
pub fn pull_indicator(props: &PullIndicatorProps) -> Html {
    let state = props.state;
    html! {
        <div
            class={classes!("pull-indicator", state.active.then_some("active"))}
            style={format!("top:{};", px(state.top_px))}
        >
            { state.label.text() }
        </div>
    }
}
