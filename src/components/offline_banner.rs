use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OfflineBannerProps {
    pub offline: bool,
}

#[function_component(OfflineBanner)]
pub fn offline_banner(props: &OfflineBannerProps) -> Html {
    html! {
        <div class={classes!("offline-indicator", props.offline.then_some("show"))}>
            {"You are offline"}
        </div>
    }
}
