use crate::model::Notification;
use crate::util::format_point;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NotificationBannerProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn NotificationBanner(props: &NotificationBannerProps) -> Html {
    let Some(note) = props.notification else {
        return html! {};
    };
    let detail = match note {
        Notification::DuplicatePoint { point } => {
            format!("A point already exists at {}.", format_point(point))
        }
    };
    let dismiss_btn = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div role="alert" style="position:absolute; top:12px; left:50%; transform:translateX(-50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; color:#f0f6fc; padding:12px 18px; border-radius:10px; display:flex; align-items:center; gap:12px; font-size:14px;">
            <div>
                <div style="font-weight:600; color:#f85149;">{ note.to_string() }</div>
                <div style="font-size:12px; opacity:0.8;">{ detail }</div>
            </div>
            <button onclick={dismiss_btn}>{"OK"}</button>
        </div>
    }
}
