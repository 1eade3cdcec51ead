use crate::model::Status;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusToastProps {
    pub status: Status,
}

#[function_component(StatusToast)]
pub fn status_toast(props: &StatusToastProps) -> Html {
    html! {<div class="toast" style="position:absolute; bottom:24px; left:50%; transform:translateX(-50%); background:rgba(22,27,34,0.9); color:#f0f6fc; border:1px solid #30363d; border-radius:8px; padding:8px 16px; font-size:14px; pointer-events:none;">
        { props.status.to_string() }
    </div>}
}
