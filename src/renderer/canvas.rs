//! `DrawSurface` backed by the browser's 2D canvas context

use glam::DVec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::DrawSurface;

impl DrawSurface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn set_fill_color(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn ellipse(&mut self, center: DVec2, radius_x: f64, radius_y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::ellipse(
            self,
            center.x,
            center.y,
            radius_x,
            radius_y,
            0.0,
            0.0,
            std::f64::consts::TAU,
        )
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }
}
