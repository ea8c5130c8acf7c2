//! Canvas2D compositor.
//!
//! Glow layers combine under `lighter` so overlaps brighten instead of
//! occluding. The image variant clips its flickers to the image shape with a
//! two-stage composite: shapes onto an offscreen mask canvas, `source-in`
//! against the image, then the masked result onto the visible canvas.

use anyhow::anyhow;
use glam::Vec2;
use hero_core::{cover_fit, HeroEngine, PulseStyle, Rect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;

pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    mask_canvas: web::HtmlCanvasElement,
    mask_ctx: web::CanvasRenderingContext2d,
    image: Option<web::HtmlImageElement>,
    image_rect: Rect,
    css_size: Vec2,
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("context cast: {:?}", e))
}

impl Surface {
    pub fn new(
        document: &web::Document,
        canvas: web::HtmlCanvasElement,
    ) -> anyhow::Result<Self> {
        let ctx = context_2d(&canvas)?;
        let mask_canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("mask canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("mask canvas cast: {:?}", e))?;
        let mask_ctx = context_2d(&mask_canvas)?;
        Ok(Self {
            canvas,
            ctx,
            mask_canvas,
            mask_ctx,
            image: None,
            image_rect: Rect::ZERO,
            css_size: Vec2::ZERO,
        })
    }

    pub fn set_image(&mut self, image: web::HtmlImageElement) {
        self.image = Some(image);
        self.refit();
    }

    pub fn image(&self) -> Option<&web::HtmlImageElement> {
        self.image.as_ref()
    }

    pub fn image_rect(&self) -> Rect {
        self.image_rect
    }

    pub fn has_image(&self) -> bool {
        self.image
            .as_ref()
            .map(|i| i.complete() && i.natural_width() > 0)
            .unwrap_or(false)
    }

    /// Size the backing store against the device pixel ratio and keep the
    /// mask canvas in CSS pixels to match feature coordinates.
    pub fn resize(&mut self, viewport: &Viewport) {
        let (pw, ph) = viewport.backing_size();
        self.canvas.set_width(pw);
        self.canvas.set_height(ph);
        let css = self.canvas.style();
        let _ = css.set_property("width", &format!("{}px", viewport.css.x as i32));
        let _ = css.set_property("height", &format!("{}px", viewport.css.y as i32));
        let _ = self
            .ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0);

        self.mask_canvas.set_width((viewport.css.x as u32).max(1));
        self.mask_canvas.set_height((viewport.css.y as u32).max(1));

        self.css_size = viewport.css;
        self.refit();
    }

    fn refit(&mut self) {
        if let Some(image) = &self.image {
            let size = Vec2::new(image.natural_width() as f32, image.natural_height() as f32);
            self.image_rect = cover_fit(size, self.css_size);
        }
    }

    /// Draw one frame. Tolerates the image being absent or still loading:
    /// the procedural network covers until features exist.
    pub fn render(&self, engine: &HeroEngine, network_alpha: f32) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, self.css_size.x as f64, self.css_size.y as f64);
        if network_alpha <= hero_core::constants::NETWORK_VISIBLE_EPS {
            return;
        }

        if engine.has_features() && self.has_image() {
            self.render_image_mode(engine, network_alpha);
        } else {
            self.render_procedural(engine, network_alpha);
        }

        let _ = ctx.set_global_composite_operation("source-over");
        ctx.set_global_alpha(1.0);
    }

    fn render_procedural(&self, engine: &HeroEngine, alpha: f32) {
        let ctx = &self.ctx;
        let sim = &engine.network;
        let _ = ctx.set_global_composite_operation("lighter");
        ctx.set_global_alpha(1.0);

        let threshold = sim.config().connection_distance;
        for connection in &sim.connections {
            let fade = (1.0 - connection.dist / threshold).max(0.0);
            ctx.set_stroke_style_str(&format!(
                "rgba({}, {:.3})",
                CONNECTION_RGB,
                fade * CONNECTION_ALPHA * alpha
            ));
            ctx.set_line_width(1.0);
            ctx.begin_path();
            let a = sim.position(connection.a);
            let b = sim.position(connection.b);
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        }

        let time = engine.time();
        for (i, particle) in sim.particles.iter().enumerate() {
            let pos = sim.position(i);
            let shimmer = particle.shimmer.brightness(time);
            let dot_alpha =
                (PARTICLE_BASE_ALPHA + PARTICLE_SHIMMER_ALPHA * shimmer) * alpha;
            ctx.set_fill_style_str(&format!("rgba({}, {:.3})", PARTICLE_RGB, dot_alpha));
            ctx.begin_path();
            let _ = ctx.arc(
                pos.x as f64,
                pos.y as f64,
                particle.radius as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();

            if particle.glow > 0.02 {
                let halo = (particle.radius * (3.0 + particle.glow * GLOW_HALO_SCALE)) as f64;
                self.fill_glow(ctx, pos, halo, particle.glow * alpha);
            }
        }

        for pulse in &sim.pulses {
            let from = sim.position(pulse.from);
            let to = sim.position(pulse.to);
            match pulse.style {
                PulseStyle::Trail => {
                    let spark = pulse.trail_pos(from, to);
                    self.fill_glow(ctx, spark, 6.0, pulse.life * alpha);
                }
                PulseStyle::Flash => {
                    ctx.set_stroke_style_str(&format!(
                        "rgba({}, {:.3})",
                        PULSE_RGB,
                        pulse.life * 0.7 * alpha
                    ));
                    ctx.set_line_width(1.5);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    let mid = (from + to) * 0.5 + pulse.bend;
                    ctx.quadratic_curve_to(mid.x as f64, mid.y as f64, to.x as f64, to.y as f64);
                    ctx.stroke();
                }
            }
        }
    }

    fn render_image_mode(&self, engine: &HeroEngine, alpha: f32) {
        let Some(image) = &self.image else {
            return;
        };
        let ctx = &self.ctx;
        let rect = self.image_rect;

        // Base layer: `screen` keeps the image's black background transparent
        // against the dark page.
        let _ = ctx.set_global_composite_operation("screen");
        ctx.set_global_alpha(IMAGE_BASE_ALPHA * alpha as f64);
        let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );

        // Node breathing, a faint rhythm under the flickers.
        let _ = ctx.set_global_composite_operation("lighter");
        ctx.set_global_alpha(1.0);
        let time = engine.time();
        for node in &engine.features().nodes {
            let breath = 0.5 + 0.5 * (time * node.freq + node.phase).sin();
            ctx.set_fill_style_str(&format!(
                "rgba(255, 255, 255, {:.3})",
                0.08 * breath * alpha
            ));
            ctx.begin_path();
            let _ = ctx.arc(
                node.pos.x as f64,
                node.pos.y as f64,
                NODE_SHIMMER_RADIUS,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }

        // Flickers must only light up where the image has shape: draw them
        // onto the mask, intersect with the image, then blend the result.
        let mask = &self.mask_ctx;
        let _ = mask.set_global_composite_operation("source-over");
        mask.clear_rect(0.0, 0.0, self.css_size.x as f64, self.css_size.y as f64);
        for flicker in &engine.flickers.flickers {
            if let Ok(gradient) = mask.create_radial_gradient(
                flicker.pos.x as f64,
                flicker.pos.y as f64,
                0.0,
                flicker.pos.x as f64,
                flicker.pos.y as f64,
                flicker.radius as f64,
            ) {
                let _ = gradient
                    .add_color_stop(0.0, &format!("rgba(255, 255, 255, {:.3})", flicker.life));
                let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
                mask.set_fill_style_canvas_gradient(&gradient);
                mask.begin_path();
                let _ = mask.arc(
                    flicker.pos.x as f64,
                    flicker.pos.y as f64,
                    flicker.radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                mask.fill();
            }
        }
        let _ = mask.set_global_composite_operation("source-in");
        let _ = mask.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );

        let _ = ctx.set_global_composite_operation("lighter");
        ctx.set_global_alpha(alpha as f64);
        let _ = ctx.draw_image_with_html_canvas_element(&self.mask_canvas, 0.0, 0.0);
    }

    fn fill_glow(&self, ctx: &web::CanvasRenderingContext2d, at: Vec2, radius: f64, alpha: f32) {
        if let Ok(gradient) =
            ctx.create_radial_gradient(at.x as f64, at.y as f64, 0.0, at.x as f64, at.y as f64, radius)
        {
            let _ = gradient.add_color_stop(
                0.0,
                &format!("rgba({}, {:.3})", PULSE_RGB, alpha.clamp(0.0, 1.0)),
            );
            let _ = gradient.add_color_stop(1.0, &format!("rgba({}, 0)", PULSE_RGB));
            ctx.set_fill_style_canvas_gradient(&gradient);
            ctx.begin_path();
            let _ = ctx.arc(at.x as f64, at.y as f64, radius, 0.0, std::f64::consts::TAU);
            ctx.fill();
        }
    }
}
