//! Canvas2D implementation of the core drawing surface.

use glam::Vec2;
use wasm_bindgen::{Clamped, JsValue};
use web_sys as web;

use moonrise_core::{CubicBezier, GradientStop, Rect, Rgba, Surface};

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self { ctx, width, height }
    }

    fn try_edit_pixels(&self, edit: &mut dyn FnMut(&mut [u8], u32)) -> Result<(), JsValue> {
        let image =
            self.ctx
                .get_image_data(0.0, 0.0, self.width as f64, self.height as f64)?;
        let mut data = image.data().0;
        edit(&mut data, self.width);
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(&data[..]),
            self.width,
            self.height,
        )?;
        self.ctx.put_image_data(&image, 0.0, 0.0)?;
        Ok(())
    }
}

fn css_color(color: Rgba) -> String {
    if color.a >= 1.0 {
        format!("rgb({}, {}, {})", color.r, color.g, color.b)
    } else {
        format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, color.a)
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_vertical_gradient(&mut self, stops: &[GradientStop]) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, self.height as f64);
        for stop in stops {
            if let Err(e) = gradient.add_color_stop(stop.offset, &css_color(stop.color)) {
                log::error!("gradient stop error: {:?}", e);
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_hill(&mut self, curve: &CubicBezier, color: Rgba) {
        self.ctx.save();
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.begin_path();
        self.ctx.move_to(curve.start.x as f64, curve.start.y as f64);
        self.ctx.bezier_curve_to(
            curve.c1.x as f64,
            curve.c1.y as f64,
            curve.c2.x as f64,
            curve.c2.y as f64,
            curve.end.x as f64,
            curve.end.y as f64,
        );
        self.ctx.fill();
        self.ctx.restore();
    }

    fn fill_glow_circle(&mut self, center: Vec2, radius: f32, color: Rgba, blur: f64) {
        let css = css_color(color.with_alpha(1.0));
        self.ctx.save();
        self.ctx.set_global_alpha(color.a as f64);
        self.ctx.set_fill_style_str(&css);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius.max(0.0) as f64,
            0.0,
            std::f64::consts::TAU,
        ) {
            log::error!("arc error: {:?}", e);
        }
        self.ctx.set_shadow_blur(blur);
        self.ctx.set_shadow_color(&css);
        self.ctx.close_path();
        self.ctx.fill();
        self.ctx.restore();
    }

    fn edit_pixels(&mut self, edit: &mut dyn FnMut(&mut [u8], u32)) {
        if let Err(e) = self.try_edit_pixels(edit) {
            log::error!("pixel pass error: {:?}", e);
        }
    }
}
