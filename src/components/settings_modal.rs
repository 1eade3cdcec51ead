use crate::settings::NotifyStyle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub show_grid: bool,
    pub on_toggle_grid: Callback<()>,
    pub notify_style: NotifyStyle,
    pub on_set_notify_style: Callback<NotifyStyle>,
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let toggle_grid_cb = {
        let cb = props.on_toggle_grid.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let style_cb = |style: NotifyStyle| {
        let cb = props.on_set_notify_style.clone();
        Callback::from(move |_| cb.emit(style))
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; color:#f0f6fc; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:440px; display:flex; flex-direction:column; gap:14px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h3 style="margin:0; font-size:18px;">{"Settings"}</h3>
                <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
            </div>
            <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                <input type="checkbox" checked={props.show_grid} onclick={toggle_grid_cb} />
                <span>{"Show Grid"}</span>
            </label>
            <div style="display:flex; flex-direction:column; gap:6px;">
                <span style="font-weight:500;">{"Duplicate point warning"}</span>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="radio" name="notify-style" checked={props.notify_style == NotifyStyle::Toast} onclick={style_cb(NotifyStyle::Toast)} />
                    <span>{"Banner"}</span>
                </label>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
                    <input type="radio" name="notify-style" checked={props.notify_style == NotifyStyle::Modal} onclick={style_cb(NotifyStyle::Modal)} />
                    <span>{"Alert dialog"}</span>
                </label>
            </div>
            <button onclick={close_cb}>{"Done"}</button>
        </div>
    </div>}
}
