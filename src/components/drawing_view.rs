use std::f64::consts::PI;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};
use yew::prelude::*;

use crate::model::{DrawingAction, DrawingState};
use crate::settings::Settings;
use crate::state::{SurfaceRect, grid_lines};
use crate::util::clog;

const BACKGROUND: &str = "#f9f9f9";
const GRID_STROKE: &str = "#ddd";
const MARKER_FILL: &str = "red";
const CIRCLE_STROKE: &str = "blue";

#[derive(Properties, PartialEq, Clone)]
pub struct DrawingViewProps {
    pub drawing: UseReducerHandle<DrawingState>,
    pub settings: Settings,
}

/// Canvas click listener, removed again when the view unmounts.
struct ClickListener {
    canvas: HtmlCanvasElement,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

impl ClickListener {
    fn attach(canvas: &HtmlCanvasElement, callback: Closure<dyn FnMut(MouseEvent)>) -> Option<Self> {
        let added =
            canvas.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        match added {
            Ok(()) => Some(Self {
                canvas: canvas.clone(),
                callback,
            }),
            Err(e) => {
                log::error!("failed to attach click listener: {e:?}");
                None
            }
        }
    }

    fn detach(self) {
        if let Err(e) = self
            .canvas
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach click listener: {e:?}");
        }
    }
}

fn fit_to_window(canvas: &HtmlCanvasElement, window: &Window) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(600.0);
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn paint(canvas: &HtmlCanvasElement, state: &DrawingState, settings: &Settings) {
    if !canvas.is_connected() {
        return;
    }
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let w = f64::from(canvas.width());
    let h = f64::from(canvas.height());

    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, w, h);

    if settings.show_grid {
        ctx.set_stroke_style_str(GRID_STROKE);
        ctx.set_line_width(1.0);
        for x in grid_lines(w, settings.grid_spacing) {
            ctx.begin_path();
            ctx.move_to(x, 0.0);
            ctx.line_to(x, h);
            ctx.stroke();
        }
        for y in grid_lines(h, settings.grid_spacing) {
            ctx.begin_path();
            ctx.move_to(0.0, y);
            ctx.line_to(w, y);
            ctx.stroke();
        }
    }

    ctx.set_fill_style_str(MARKER_FILL);
    for p in state.interaction.points() {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, settings.marker_radius, 0.0, PI * 2.0).is_ok() {
            ctx.fill();
        }
    }

    if let Some(circle) = state.interaction.circle() {
        ctx.set_stroke_style_str(CIRCLE_STROKE);
        ctx.set_line_width(1.0);
        ctx.begin_path();
        if ctx
            .arc(circle.center.x, circle.center.y, circle.radius, 0.0, PI * 2.0)
            .is_ok()
        {
            ctx.stroke();
        }
    }
}

#[function_component(DrawingView)]
pub fn drawing_view(props: &DrawingViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let drawing_ref = use_mut_ref(|| props.drawing.clone());
    let settings_ref = use_mut_ref(|| props.settings);

    // On each click or settings change, refresh the shared handles then redraw
    {
        let drawing_ref = drawing_ref.clone();
        let settings_ref = settings_ref.clone();
        let draw_ref = draw_ref.clone();
        let handle = props.drawing.clone();
        let settings = props.settings;
        use_effect_with((props.drawing.version, settings), move |_| {
            *drawing_ref.borrow_mut() = handle;
            *settings_ref.borrow_mut() = settings;
            if let Some(f) = &*draw_ref.borrow() {
                f();
            }
            || ()
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        let drawing_ref = drawing_ref.clone();
        let settings_ref = settings_ref.clone();

        use_effect_with((), move |_| {
            let listener = match (web_sys::window(), canvas_ref.cast::<HtmlCanvasElement>()) {
                (Some(window), Some(canvas)) => {
                    // Sized once; the surface does not follow later window resizes.
                    fit_to_window(&canvas, &window);
                    clog(&format!("canvas mounted at {}x{}", canvas.width(), canvas.height()));

                    let draw_closure: Rc<dyn Fn()> = {
                        let canvas = canvas.clone();
                        let drawing_ref = drawing_ref.clone();
                        let settings_ref = settings_ref.clone();
                        Rc::new(move || {
                            let handle = drawing_ref.borrow();
                            let settings = *settings_ref.borrow();
                            paint(&canvas, &handle, &settings);
                        })
                    };
                    *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
                    (draw_closure)();

                    let click_cb = {
                        let canvas = canvas.clone();
                        let drawing_ref = drawing_ref.clone();
                        Closure::wrap(Box::new(move |e: MouseEvent| {
                            let rect = SurfaceRect::from_dom_rect(&canvas.get_bounding_client_rect());
                            let point = rect.to_surface(f64::from(e.client_x()), f64::from(e.client_y()));
                            if !rect.contains(point) {
                                return;
                            }
                            let handle = drawing_ref.borrow().clone();
                            handle.dispatch(DrawingAction::Click(point));
                        }) as Box<dyn FnMut(MouseEvent)>)
                    };
                    ClickListener::attach(&canvas, click_cb)
                }
                _ => {
                    log::error!("drawing surface unavailable: no window or canvas");
                    None
                }
            };

            let draw_ref_cleanup = draw_ref_setup.clone();
            move || {
                *draw_ref_cleanup.borrow_mut() = None;
                if let Some(listener) = listener {
                    listener.detach();
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} id="drawing-canvas" style="display:block; width:100vw; height:100vh; cursor:pointer;"></canvas>
    }
}
