use kurbo::{Affine, Circle, Point, Rect, Shape};

use crate::foundation::core::HandPosition;
use crate::foundation::error::{ClockwallError, ClockwallResult};
use crate::render::{FrameRGBA, RenderSettings, WallRenderer};
use crate::wall::frame::WallFrame;

const CIRCLE_TOLERANCE: f64 = 0.1;

/// CPU rasterizer for the wall.
///
/// Each cell is drawn as a face disc, hour and minute bars rotated about
/// the center, a hub disc, and (when present) a thinner second hand with a
/// counterweight tail. Output is premultiplied RGBA8.
pub struct CpuRenderer {
    settings: RenderSettings,
}

impl CpuRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    fn draw_cell(
        &self,
        ctx: &mut vello_cpu::RenderContext,
        center: Point,
        radius: f64,
        pos: HandPosition,
    ) {
        let s = &self.settings;

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        set_paint(ctx, s.face_rgba);
        ctx.fill_path(&bezpath_to_cpu(
            &Circle::new(center, radius).to_path(CIRCLE_TOLERANCE),
        ));

        // Hour and minute are identical bars; only the angle differs.
        let bar = Rect::new(-0.075 * radius, -0.95 * radius, 0.075 * radius, 0.0);
        for angle in [pos.hour, pos.minute].into_iter().flatten() {
            ctx.set_transform(hand_transform(center, angle));
            set_paint(ctx, s.hand_rgba);
            ctx.fill_path(&bezpath_to_cpu(&bar.to_path(CIRCLE_TOLERANCE)));
        }

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        set_paint(ctx, s.hand_rgba);
        ctx.fill_path(&bezpath_to_cpu(
            &Circle::new(center, 0.1 * radius).to_path(CIRCLE_TOLERANCE),
        ));

        if let Some(angle) = pos.second {
            // Thin hand with a counterweight tail past the hub.
            let needle = Rect::new(-0.02 * radius, -0.95 * radius, 0.02 * radius, 0.25 * radius);
            ctx.set_transform(hand_transform(center, angle));
            set_paint(ctx, s.second_hand_rgba);
            ctx.fill_path(&bezpath_to_cpu(&needle.to_path(CIRCLE_TOLERANCE)));
        }
    }
}

impl WallRenderer for CpuRenderer {
    #[tracing::instrument(skip(self, frame))]
    fn render_frame(&mut self, frame: &WallFrame) -> ClockwallResult<FrameRGBA> {
        let grid = frame.grid();
        let d = self.settings.cell_diameter_px;

        let width_u16: u16 = (u64::from(grid.cols) * u64::from(d))
            .try_into()
            .map_err(|_| ClockwallError::render("wall width exceeds u16 pixels"))?;
        let height_u16: u16 = (u64::from(grid.rows) * u64::from(d))
            .try_into()
            .map_err(|_| ClockwallError::render("wall height exceeds u16 pixels"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
        let [r, g, b, a] = self.settings.clear_rgba;
        clear_pixmap(&mut pixmap, premul_rgba8(r, g, b, a));

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        let radius = f64::from(d) / 2.0;
        for (cell, pos) in frame.iter_cells() {
            let center = Point::new(
                f64::from(cell.x) * f64::from(d) + radius,
                f64::from(cell.y) * f64::from(d) + radius,
            );
            self.draw_cell(&mut ctx, center, radius, pos);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(width_u16),
            height: u32::from(height_u16),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

/// Local hand space points up (12 o'clock); rotation is clockwise on
/// screen because y grows downward.
fn hand_transform(center: Point, angle_deg: f64) -> vello_cpu::kurbo::Affine {
    affine_to_cpu(Affine::translate(center.to_vec2()) * Affine::rotate(angle_deg.to_radians()))
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, rgba: [u8; 4]) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
        rgba[0], rgba[1], rgba[2], rgba[3],
    ));
}

fn premul_rgba8(r: u8, g: u8, b: u8, a: u8) -> [u8; 4] {
    let af = (a as u16) + 1;
    let premul = |c: u8| -> u8 { (((c as u16) * af) >> 8) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, rgba: [u8; 4]) {
    let data = pixmap.data_as_u8_slice_mut();
    for px in data.chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}
