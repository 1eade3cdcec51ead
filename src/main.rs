use wasm_bindgen::JsValue;

mod components;
mod geometry;
mod model;
mod settings;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger unavailable: {e}")));
    }
    log::info!("circumcircle canvas v{}", env!("CARGO_PKG_VERSION"));
    yew::Renderer::<App>::new().render();
}
