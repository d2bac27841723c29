//! Chart Components
//!
//! Energy trend line and department energy bars, drawn on HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::{DepartmentMetric, TrendPoint};

const TREND_COLOR: &str = "#6366f1"; // indigo-500
const LOW_ENERGY_COLOR: &str = "#ef4444"; // red-500
const HEALTHY_ENERGY_COLOR: &str = "#10b981"; // emerald-500
const GRID_COLOR: &str = "#e2e8f0"; // slate-200
const LABEL_COLOR: &str = "#64748b"; // slate-500

/// Departments below this energy are drawn red
pub const LOW_ENERGY_THRESHOLD: f64 = 40.0;

/// Both charts share the 0-100 battery scale
const SCALE_MAX: f64 = 100.0;

/// Plot area inside the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
struct Area {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Area {
    fn within(canvas_width: f64, canvas_height: f64) -> Self {
        let (left, right, top, bottom) = (40.0, 16.0, 16.0, 32.0);
        Self {
            left,
            top,
            width: (canvas_width - left - right).max(0.0),
            height: (canvas_height - top - bottom).max(0.0),
        }
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Canvas y for a value on the 0-100 scale (canvas y grows downward)
    fn y_for(&self, value: f64) -> f64 {
        let clamped = value.clamp(0.0, SCALE_MAX);
        self.top + (1.0 - clamped / SCALE_MAX) * self.height
    }

    /// Canvas x for point `index` of `count`, spread edge to edge
    fn x_for(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + (index as f64 / (count - 1) as f64) * self.width
    }

    /// Left edge and width of bar `index` of `count`
    fn bar_slot(&self, index: usize, count: usize) -> (f64, f64) {
        let slot = self.width / count.max(1) as f64;
        let bar = slot * 0.6;
        (self.left + slot * index as f64 + (slot - bar) / 2.0, bar)
    }
}

pub fn energy_color(energy: f64) -> &'static str {
    if energy < LOW_ENERGY_THRESHOLD {
        LOW_ENERGY_COLOR
    } else {
        HEALTHY_ENERGY_COLOR
    }
}

/// Day labels are ISO dates; show month/day only
fn short_day(day: &str) -> &str {
    if day.len() == 10 && day.as_bytes()[4] == b'-' {
        &day[5..]
    } else {
        day
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_grid(ctx: &CanvasRenderingContext2d, area: &Area, canvas_width: f64) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");

    for step in 0..=4 {
        let value = step as f64 * 25.0;
        let y = area.y_for(value);
        ctx.begin_path();
        ctx.move_to(area.left, y);
        ctx.line_to(canvas_width - 16.0, y);
        ctx.stroke();
        let _ = ctx.fill_text(&format!("{}", value), 8.0, y + 4.0);
    }
}

/// Line chart of an employee's battery history
#[component]
pub fn TrendChart(#[prop(into)] points: Signal<Vec<TrendPoint>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let points = points.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_trend(&canvas, &points);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="480" height="180" class="w-full h-44" />
    }
}

fn draw_trend(canvas: &HtmlCanvasElement, points: &[TrendPoint]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = Area::within(width, height);

    ctx.clear_rect(0.0, 0.0, width, height);
    draw_grid(&ctx, &area, width);

    if points.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No history yet", width / 2.0 - 45.0, height / 2.0);
        return;
    }

    ctx.set_stroke_style(&TREND_COLOR.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = area.x_for(i, points.len());
        let y = area.y_for(point.battery);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    ctx.set_fill_style(&TREND_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            area.x_for(i, points.len()),
            area.y_for(point.battery),
            4.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("11px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let x = area.x_for(i, points.len());
        let _ = ctx.fill_text(short_day(&point.day), x - 14.0, height - 10.0);
    }
}

/// Bar chart of per-department energy
#[component]
pub fn DepartmentChart(#[prop(into)] departments: Signal<Vec<DepartmentMetric>>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let departments = departments.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_departments(&canvas, &departments);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="480" height="220" class="w-full h-56" />
    }
}

fn draw_departments(canvas: &HtmlCanvasElement, departments: &[DepartmentMetric]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let area = Area::within(width, height);

    ctx.clear_rect(0.0, 0.0, width, height);
    draw_grid(&ctx, &area, width);

    for (i, dept) in departments.iter().enumerate() {
        let (x, bar_width) = area.bar_slot(i, departments.len());
        let y = area.y_for(dept.energy);

        ctx.set_fill_style(&energy_color(dept.energy).into());
        ctx.fill_rect(x, y, bar_width, area.bottom() - y);

        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&dept.dept_name, x, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_color_threshold() {
        assert_eq!(energy_color(39.9), LOW_ENERGY_COLOR);
        assert_eq!(energy_color(40.0), HEALTHY_ENERGY_COLOR);
        assert_eq!(energy_color(100.0), HEALTHY_ENERGY_COLOR);
    }

    #[test]
    fn test_y_scale() {
        let area = Area::within(480.0, 180.0);
        assert_eq!(area.y_for(100.0), area.top);
        assert_eq!(area.y_for(0.0), area.bottom());
        assert_eq!(area.y_for(150.0), area.top);
        assert_eq!(area.y_for(-5.0), area.bottom());
    }

    #[test]
    fn test_x_spread() {
        let area = Area::within(480.0, 180.0);
        assert_eq!(area.x_for(0, 7), area.left);
        assert_eq!(area.x_for(6, 7), area.left + area.width);
        assert_eq!(area.x_for(0, 1), area.left + area.width / 2.0);
    }

    #[test]
    fn test_bars_stay_inside_area() {
        let area = Area::within(480.0, 220.0);
        for i in 0..3 {
            let (x, w) = area.bar_slot(i, 3);
            assert!(x >= area.left);
            assert!(x + w <= area.left + area.width + 1e-9);
        }
    }

    #[test]
    fn test_short_day() {
        assert_eq!(short_day("2024-05-03"), "05-03");
        assert_eq!(short_day("Mon"), "Mon");
    }
}
