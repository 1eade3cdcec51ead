pub mod app;
pub mod controls_panel;
pub mod drawing_view;
pub mod notification_banner;
pub mod points_panel;
pub mod settings_modal;
pub mod status_toast;
