use super::{
    controls_panel::ControlsPanel, drawing_view::DrawingView,
    notification_banner::NotificationBanner, points_panel::PointsPanel,
    settings_modal::SettingsModal, status_toast::StatusToast,
};
use crate::model::{DrawingAction, DrawingState};
use crate::settings::{NotifyStyle, Settings};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let drawing = use_reducer(DrawingState::default);
    let settings = use_state(Settings::load_or_default);
    let open_settings = use_state(|| false);

    // Persist settings changes
    {
        let settings = settings.clone();
        use_effect_with(*settings, move |_| {
            if let Err(e) = settings.save() {
                log::warn!("could not persist settings: {e}");
            }
            || ()
        });
    }

    // Modal style: raise a blocking alert for a rejected click, then clear it
    {
        let drawing = drawing.clone();
        let style = settings.notify_style;
        use_effect_with(drawing.version, move |_| {
            if style == NotifyStyle::Modal {
                if let Some(note) = drawing.notification {
                    if let Some(win) = web_sys::window() {
                        if let Err(e) = win.alert_with_message(&note.to_string()) {
                            log::warn!("alert failed: {e:?}");
                        }
                    }
                    drawing.dispatch(DrawingAction::DismissNotification);
                }
            }
            || ()
        });
    }

    let dismiss_cb = {
        let drawing = drawing.clone();
        Callback::from(move |()| drawing.dispatch(DrawingAction::DismissNotification))
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(true))
    };
    let close_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |()| open_settings.set(false))
    };
    let toggle_grid_cb = {
        let settings = settings.clone();
        Callback::from(move |()| {
            settings.set(Settings {
                show_grid: !settings.show_grid,
                ..*settings
            });
        })
    };
    let set_notify_style_cb = {
        let settings = settings.clone();
        Callback::from(move |notify_style: NotifyStyle| {
            settings.set(Settings {
                notify_style,
                ..*settings
            });
        })
    };

    let banner = match settings.notify_style {
        NotifyStyle::Toast => drawing.notification,
        NotifyStyle::Modal => None,
    };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; font-family:sans-serif;">
        <DrawingView drawing={drawing.clone()} settings={*settings} />
        <PointsPanel points={drawing.interaction.points().to_vec()} circle={drawing.interaction.circle()} />
        <ControlsPanel on_open_settings={open_settings_cb} />
        <NotificationBanner notification={banner} on_dismiss={dismiss_cb} />
        <StatusToast status={drawing.interaction.status()} />
        <SettingsModal show={*open_settings} on_close={close_settings_cb} show_grid={settings.show_grid} on_toggle_grid={toggle_grid_cb} notify_style={settings.notify_style} on_set_notify_style={set_notify_style_cb} />
    </div>}
}
