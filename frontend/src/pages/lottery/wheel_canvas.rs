use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use shared::{Outcome, SegmentTable};

const WHEEL_SIZE: u32 = 420;
const WIN_COLOR: &str = "#dc2626";
const RETRY_COLOR: &str = "#f59e0b";
// Alternating fills for the losing zones
const LOSE_COLORS: [&str; 4] = ["#8b5cf6", "#06b6d4", "#ec4899", "#6366f1"];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub table: SegmentTable,
    pub rotation: f64,
    /// 0 snaps the wheel without a transition
    pub transition_ms: u32,
    pub is_spinning: bool,
}

/// Wheel angles start at 12 o'clock and run clockwise; canvas angles start at 3 o'clock.
fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn segment_color(outcome: Outcome, index: usize) -> &'static str {
    match outcome {
        Outcome::Win => WIN_COLOR,
        Outcome::Retry => RETRY_COLOR,
        Outcome::Lose => LOSE_COLORS[index % LOSE_COLORS.len()],
    }
}

fn draw_wheel(context: &CanvasRenderingContext2d, table: &SegmentTable, size: f64, dark: bool) {
    let center = size / 2.0;
    let radius = center - 10.0;

    context.clear_rect(0.0, 0.0, size, size);

    // Outer ring
    context.begin_path();
    context.set_fill_style_str(if dark { "#1a1c2e" } else { "#f0f2ff" });
    let _ = context.arc(center, center, radius + 8.0, 0.0, 2.0 * PI);
    context.fill();

    for (index, seg) in table.segments().iter().enumerate() {
        context.begin_path();
        context.set_fill_style_str(segment_color(seg.outcome, index));
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, to_canvas_radians(seg.start), to_canvas_radians(seg.end));
        context.close_path();
        context.fill();

        context.set_stroke_style_str(if dark { "rgba(255, 255, 255, 0.3)" } else { "rgba(255, 255, 255, 0.8)" });
        context.set_line_width(2.0);
        context.stroke();
    }

    // Labels run outward along each segment's center line
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 14px sans-serif");
    context.set_text_align("right");
    context.set_text_baseline("middle");
    for seg in table.segments() {
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(to_canvas_radians(seg.midpoint()));
        let _ = context.fill_text(&seg.label, radius - 14.0, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#ffffff" });
    let _ = context.arc(center, center, radius * 0.12, 0.0, 2.0 * PI);
    context.fill();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.table.clone(), move |table| {
            let context = canvas_ref
                .cast::<HtmlCanvasElement>()
                .and_then(|canvas| canvas.get_context("2d").ok().flatten())
                .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());

            if let Some(context) = context {
                let is_dark_mode = window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|el| el.class_list().contains("dark"))
                    .unwrap_or(false);
                draw_wheel(&context, table, WHEEL_SIZE as f64, is_dark_mode);
            } else {
                log::warn!("Wheel canvas is not available, skipping draw");
            }
            || ()
        });
    }

    let transition = if props.transition_ms == 0 {
        "none".to_string()
    } else {
        format!("transform {}ms cubic-bezier(0.25,0.1,0.25,1)", props.transition_ms)
    };
    let style = format!("transform: rotate({}deg); transition: {};", props.rotation, transition);

    html! {
        <div class="relative mx-auto w-full max-w-[420px] aspect-square">
            <div class={crate::styles::WHEEL_POINTER}></div>
            <div
                class={classes!("w-full", "h-full", "rounded-full", props.is_spinning.then_some("shadow-[0_0_30px_rgba(255,215,130,0.6)]"))}
                style={style}
            >
                <canvas
                    ref={canvas_ref}
                    width={WHEEL_SIZE.to_string()}
                    height={WHEEL_SIZE.to_string()}
                    class="w-full h-full"
                />
            </div>
        </div>
    }
}
