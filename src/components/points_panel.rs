use crate::model::{Circle, MAX_POINTS, Point};
use crate::util::{format_circle, format_point};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PointsPanelProps {
    pub points: Vec<Point>,
    pub circle: Option<Circle>,
}

#[function_component]
pub fn PointsPanel(props: &PointsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;";
    let label_style = "flex:1; font-weight:500;";
    let value_style = "text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); color:#f0f6fc; border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:8px; font-size:13px;">
            { for (0..MAX_POINTS).map(|i| {
                let value = props.points.get(i).map_or_else(|| "-".to_string(), |p| format_point(*p));
                html! {
                    <div style={row_style}>
                        <span style={format!("{} color:#f85149;", label_style)}>{ format!("Point {}", i + 1) }</span>
                        <span style={value_style}>{ value }</span>
                    </div>
                }
            }) }
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Circle"}</span>
                <span style={value_style}>{ props.circle.map_or_else(|| "-".to_string(), format_circle) }</span>
            </div>
        </div>
    }
}
