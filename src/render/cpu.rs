use crate::avatar::scene::{FigureScene, Paint, SCENE_HEIGHT, SCENE_WIDTH};
use crate::compose::layer::{OverlayTreatment, ViewPlan};
use crate::foundation::core::{Affine, Rgb8};
use crate::foundation::error::{CroquisError, CroquisResult};
use crate::wardrobe::item::ItemId;
use std::collections::HashMap;
use std::sync::Arc;

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha**; the flag makes this explicit at API
/// boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

#[derive(Clone)]
struct ImagePaint {
    paint: vello_cpu::Image,
    w: u32,
    h: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct GradientKey {
    base: [u8; 3],
    edge: [u8; 3],
}

/// Color matrix applied to garment overlays on the back view: full
/// desaturation, brightness 0.9, opacity 0.8.
const BACK_VIEW_MATRIX: [f32; 20] = [
    0.1913, 0.6437, 0.0650, 0.0, 0.0, //
    0.1913, 0.6437, 0.0650, 0.0, 0.0, //
    0.1913, 0.6437, 0.0650, 0.0, 0.0, //
    0.0, 0.0, 0.0, 0.8, 0.0,
];

/// CPU raster backend.
///
/// Holds a reusable `vello_cpu` context plus per-item garment paints and
/// generated skin gradients. Garment images must be registered before a view
/// render can composite them; unregistered garments are skipped, not errors.
pub struct CpuRasterizer {
    ctx: Option<vello_cpu::RenderContext>,
    garment_cache: HashMap<ItemId, ImagePaint>,
    gradient_cache: HashMap<GradientKey, vello_cpu::Image>,
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuRasterizer {
    pub fn new() -> Self {
        Self {
            ctx: None,
            garment_cache: HashMap::new(),
            gradient_cache: HashMap::new(),
        }
    }

    /// Decode and cache a garment image for later compositing.
    #[tracing::instrument(skip(self, bytes), fields(item = ?id, len = bytes.len()))]
    pub fn register_item_image(&mut self, id: ItemId, bytes: &[u8]) -> CroquisResult<()> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| CroquisError::render(format!("decode garment image: {e}")))?;
        let rgba = decoded.to_rgba8();
        let (w, h) = rgba.dimensions();
        let mut data = rgba.into_raw();
        premultiply_rgba8_in_place(&mut data);
        let paint = rgba_premul_to_image(&data, w, h)?;
        self.garment_cache.insert(id, ImagePaint { paint, w, h });
        Ok(())
    }

    /// Drop a cached garment image, e.g. after closet removal.
    pub fn evict_item_image(&mut self, id: ItemId) {
        self.garment_cache.remove(&id);
    }

    pub fn has_item_image(&self, id: ItemId) -> bool {
        self.garment_cache.contains_key(&id)
    }

    /// Rasterize a figure scene at the given output height. Width follows
    /// from the scene aspect ratio.
    #[tracing::instrument(skip(self, scene), fields(ops = scene.ops.len(), height_px))]
    pub fn render_figure(
        &mut self,
        scene: &FigureScene,
        height_px: u32,
    ) -> CroquisResult<FrameRGBA> {
        let (width_px, w16, h16, scale) = surface_geometry(height_px)?;

        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        self.with_ctx_mut(w16, h16, |this, ctx| {
            draw_figure_ops(this, ctx, scene, scale)?;
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: width_px,
            height: height_px,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    /// Rasterize a full view plan: figure underneath, then each garment
    /// overlay in plan order, treated and composited over the frame.
    #[tracing::instrument(skip(self, plan), fields(view = ?plan.view, overlays = plan.overlays.len()))]
    pub fn render_view(&mut self, plan: &ViewPlan, height_px: u32) -> CroquisResult<FrameRGBA> {
        let mut frame = self.render_figure(&plan.figure, height_px)?;
        let (_, w16, h16, _) = surface_geometry(height_px)?;

        let mut scratch = vello_cpu::Pixmap::new(w16, h16);
        let mut treated = Vec::new();
        for overlay in &plan.overlays {
            let Some(img) = self.garment_cache.get(&overlay.item_id).cloned() else {
                tracing::debug!(item = ?overlay.item_id, "garment image not registered; skipping overlay");
                continue;
            };

            // Destination rect in pixels; height keeps the image aspect.
            let dst_left = overlay.region.left * f64::from(frame.width);
            let dst_top = overlay.region.top * f64::from(frame.height);
            let dst_w = overlay.region.width * f64::from(frame.width);
            let px_scale = dst_w / f64::from(img.w.max(1));

            clear_pixmap_to_transparent(&mut scratch);
            self.with_ctx_mut(w16, h16, |_, ctx| {
                ctx.set_transform(affine_to_cpu(
                    Affine::translate((dst_left, dst_top)) * Affine::scale(px_scale),
                ));
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(img.paint.clone());
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(img.w),
                    f64::from(img.h),
                ));
                ctx.flush();
                ctx.render_to_pixmap(&mut scratch);
                Ok(())
            })?;

            let src = scratch.data_as_u8_slice();
            match overlay.treatment {
                OverlayTreatment::None => premul_over_in_place(&mut frame.data, src)?,
                OverlayTreatment::DesaturateDim => {
                    treated.resize(src.len(), 0);
                    color_matrix_rgba8_premul(src, &mut treated, BACK_VIEW_MATRIX);
                    premul_over_in_place(&mut frame.data, &treated)?;
                }
            }
        }

        Ok(frame)
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> CroquisResult<R>,
    ) -> CroquisResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Generated radial skin gradient covering the scene space, cached per
    /// color pair. Matches the source art's gradient: `base` at the upper
    /// chest fading to `edge` toward the extremities.
    fn skin_gradient_paint(&mut self, base: Rgb8, edge: Rgb8) -> CroquisResult<vello_cpu::Image> {
        let key = GradientKey {
            base: [base.r, base.g, base.b],
            edge: [edge.r, edge.g, edge.b],
        };
        if let Some(img) = self.gradient_cache.get(&key).cloned() {
            return Ok(img);
        }

        let (w, h) = (SCENE_WIDTH as usize, SCENE_HEIGHT as usize);
        let (cx, cy) = (SCENE_WIDTH * 0.5, SCENE_HEIGHT * 0.2);
        let radius = SCENE_HEIGHT * 0.8;
        let mut bytes = vec![0u8; w * h * 4];
        for y in 0..h {
            for x in 0..w {
                let dx = x as f64 + 0.5 - cx;
                let dy = y as f64 + 0.5 - cy;
                let t = ((dx * dx + dy * dy).sqrt() / radius).clamp(0.0, 1.0) as f32;
                let lerp = |a: u8, b: u8| -> u8 {
                    (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
                        .round()
                        .clamp(0.0, 255.0) as u8
                };
                let idx = (y * w + x) * 4;
                bytes[idx] = lerp(base.r, edge.r);
                bytes[idx + 1] = lerp(base.g, edge.g);
                bytes[idx + 2] = lerp(base.b, edge.b);
                bytes[idx + 3] = 255;
            }
        }
        let img = rgba_premul_to_image(&bytes, w as u32, h as u32)?;
        self.gradient_cache.insert(key, img.clone());
        Ok(img)
    }
}

fn draw_figure_ops(
    raster: &mut CpuRasterizer,
    ctx: &mut vello_cpu::RenderContext,
    scene: &FigureScene,
    scale: f64,
) -> CroquisResult<()> {
    let tr = affine_to_cpu(Affine::scale(scale));
    for op in &scene.ops {
        ctx.set_transform(tr);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let path = bezpath_to_cpu(&op.path);
        match op.paint {
            Paint::Solid { color, alpha } => {
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    color.r, color.g, color.b, 255,
                ));
                if alpha < 1.0 {
                    ctx.push_opacity_layer(alpha);
                }
                ctx.fill_path(&path);
                if alpha < 1.0 {
                    ctx.pop_layer();
                }
            }
            Paint::SkinRadial { base, edge } => {
                let img = raster.skin_gradient_paint(base, edge)?;
                ctx.set_paint(img);
                ctx.fill_path(&path);
            }
        }
    }
    Ok(())
}

/// Output geometry for a given height: pixel width from the scene aspect,
/// both dimensions checked against the raster target's u16 limit.
fn surface_geometry(height_px: u32) -> CroquisResult<(u32, u16, u16, f64)> {
    if height_px == 0 {
        return Err(CroquisError::render("output height must be nonzero"));
    }
    let scale = f64::from(height_px) / SCENE_HEIGHT;
    let width_px = (SCENE_WIDTH * scale).round() as u32;
    let w16: u16 = width_px
        .try_into()
        .map_err(|_| CroquisError::render(format!("output width {width_px} exceeds u16")))?;
    let h16: u16 = height_px
        .try_into()
        .map_err(|_| CroquisError::render(format!("output height {height_px} exceeds u16")))?;
    Ok((width_px, w16, h16, scale))
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &crate::foundation::core::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CroquisResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CroquisError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CroquisError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CroquisError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(
    bytes_premul: &[u8],
    width: u32,
    height: u32,
) -> CroquisResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

fn color_matrix_rgba8_premul(src: &[u8], dst: &mut [u8], m: [f32; 20]) {
    debug_assert_eq!(src.len(), dst.len());
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let pr = s[0] as f32 / 255.0;
        let pg = s[1] as f32 / 255.0;
        let pb = s[2] as f32 / 255.0;
        let pa = s[3] as f32 / 255.0;

        // Convert premul -> straight for matrix application.
        let inv_a = if pa > 0.0 { 1.0 / pa } else { 0.0 };
        let r = pr * inv_a;
        let g = pg * inv_a;
        let b = pb * inv_a;
        let a = pa;

        let out_r = (m[0] * r + m[1] * g + m[2] * b + m[3] * a + m[4]).clamp(0.0, 1.0);
        let out_g = (m[5] * r + m[6] * g + m[7] * b + m[8] * a + m[9]).clamp(0.0, 1.0);
        let out_b = (m[10] * r + m[11] * g + m[12] * b + m[13] * a + m[14]).clamp(0.0, 1.0);
        let out_a = (m[15] * r + m[16] * g + m[17] * b + m[18] * a + m[19]).clamp(0.0, 1.0);

        // Convert straight -> premul.
        let pr = (out_r * out_a).clamp(0.0, 1.0);
        let pg = (out_g * out_a).clamp(0.0, 1.0);
        let pb = (out_b * out_a).clamp(0.0, 1.0);

        d[0] = (pr * 255.0).round().clamp(0.0, 255.0) as u8;
        d[1] = (pg * 255.0).round().clamp(0.0, 255.0) as u8;
        d[2] = (pb * 255.0).round().clamp(0.0, 255.0) as u8;
        d[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    }
}

fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> CroquisResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CroquisError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let sa = s[3] as u16;
        if sa == 0 {
            continue;
        }
        let inv = 255u16 - sa;
        d[3] = add_sat_u8(sa as u8, mul_div255_u8(d[3] as u16, inv));
        for c in 0..3 {
            let dc = mul_div255_u8(d[c] as u16, inv);
            d[c] = add_sat_u8(s[c], dc);
        }
    }
    Ok(())
}

fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((x * y) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY_MATRIX: [f32; 20] = [
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ];

    #[test]
    fn color_matrix_identity_is_identity() {
        let src = [120u8, 60, 30, 200, 0, 0, 0, 0];
        let mut dst = [0u8; 8];
        color_matrix_rgba8_premul(&src, &mut dst, IDENTITY_MATRIX);
        for (s, d) in src.iter().zip(dst.iter()) {
            assert!(s.abs_diff(*d) <= 1, "{s} vs {d}");
        }
    }

    #[test]
    fn back_view_matrix_desaturates_and_dims() {
        // Opaque pure red premul.
        let src = [255u8, 0, 0, 255];
        let mut dst = [0u8; 4];
        color_matrix_rgba8_premul(&src, &mut dst, BACK_VIEW_MATRIX);
        // Gray output: equal channels, alpha reduced to 80%.
        assert_eq!(dst[0], dst[1]);
        assert_eq!(dst[1], dst[2]);
        assert_eq!(dst[3], 204);
    }

    #[test]
    fn premul_over_skips_transparent_source() {
        let mut dst = [10u8, 20, 30, 255];
        premul_over_in_place(&mut dst, &[0, 0, 0, 0]).unwrap();
        assert_eq!(dst, [10, 20, 30, 255]);

        premul_over_in_place(&mut dst, &[100, 100, 100, 255]).unwrap();
        assert_eq!(dst, [100, 100, 100, 255]);
    }

    #[test]
    fn premul_over_rejects_length_mismatch() {
        let mut dst = [0u8; 8];
        assert!(premul_over_in_place(&mut dst, &[0u8; 4]).is_err());
    }

    #[test]
    fn surface_geometry_keeps_scene_aspect() {
        let (w, w16, h16, scale) = surface_geometry(600).unwrap();
        assert_eq!((w, w16, h16), (200, 200, 600));
        assert!((scale - 1.0).abs() < 1e-9);

        let (w, ..) = surface_geometry(300).unwrap();
        assert_eq!(w, 100);

        assert!(surface_geometry(0).is_err());
        assert!(surface_geometry(200_000).is_err());
    }

    #[test]
    fn premultiply_zeroes_color_under_zero_alpha() {
        let mut px = [200u8, 150, 100, 0, 255, 255, 255, 255];
        premultiply_rgba8_in_place(&mut px);
        assert_eq!(&px[..4], &[0, 0, 0, 0]);
        assert_eq!(&px[4..], &[255, 255, 255, 255]);
    }
}
