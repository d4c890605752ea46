use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::core::{Color, LineStyle, MarkerShape};
use crate::error::{PlotGridError, PlotGridResult};
use crate::render::{MarkerPrimitive, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotGridResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotGridResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotGridError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) {
        self.clear_color = color;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotGridResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            apply_color(context, rect.fill_color);
            if rect.border_width > 0.0 {
                context
                    .fill_preserve()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
                apply_color(context, rect.border_color);
                context.set_dash(&[], 0.0);
                context.set_line_width(rect.border_width);
                context
                    .stroke()
                    .map_err(|err| map_backend_error("failed to stroke rectangle border", err))?;
            } else {
                context
                    .fill()
                    .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
            }
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_dash(&dash_pattern(line.style, line.stroke_width), 0.0);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }
        context.set_dash(&[], 0.0);

        for marker in &frame.markers {
            draw_marker(context, marker)?;
            stats.markers_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            let font_description =
                FontDescription::from_string(&format!("Sans {}", text.font_size_px));
            layout.set_font_description(Some(&font_description));
            layout.set_text(&text.text);

            let (text_width, _text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };

            apply_color(context, text.color);
            context.move_to(x, text.y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotGridResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotGridResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    let (red, green, blue, alpha) = color.to_rgba_f64();
    context.set_source_rgba(red, green, blue, alpha);
}

fn dash_pattern(style: LineStyle, stroke_width: f64) -> Vec<f64> {
    let unit = stroke_width.max(1.0);
    match style {
        LineStyle::Solid => Vec::new(),
        LineStyle::Dashed => vec![unit * 3.0, unit * 2.0],
        LineStyle::Dotted => vec![unit, unit * 1.5],
        LineStyle::DashDot => vec![unit * 3.0, unit * 1.5, unit, unit * 1.5],
    }
}

fn draw_marker(context: &Context, marker: &MarkerPrimitive) -> PlotGridResult<()> {
    let radius = marker.size / 2.0;
    match marker.shape {
        MarkerShape::Plus | MarkerShape::Cross => {
            apply_color(context, marker.fill_color);
            context.set_dash(&[], 0.0);
            context.set_line_width(open_marker_stroke_width(marker));
            if marker.shape == MarkerShape::Plus {
                context.move_to(marker.x - radius, marker.y);
                context.line_to(marker.x + radius, marker.y);
                context.move_to(marker.x, marker.y - radius);
                context.line_to(marker.x, marker.y + radius);
            } else {
                context.move_to(marker.x - radius, marker.y - radius);
                context.line_to(marker.x + radius, marker.y + radius);
                context.move_to(marker.x - radius, marker.y + radius);
                context.line_to(marker.x + radius, marker.y - radius);
            }
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke marker", err))?;
            return Ok(());
        }
        MarkerShape::Circle => {
            context.new_sub_path();
            context.arc(marker.x, marker.y, radius, 0.0, 2.0 * PI);
            context.close_path();
        }
        MarkerShape::Square => {
            context.rectangle(
                marker.x - radius,
                marker.y - radius,
                marker.size,
                marker.size,
            );
        }
        MarkerShape::Diamond => {
            close_polygon(
                context,
                &[
                    (marker.x, marker.y - radius),
                    (marker.x + radius, marker.y),
                    (marker.x, marker.y + radius),
                    (marker.x - radius, marker.y),
                ],
            );
        }
        MarkerShape::TriangleUp => {
            close_polygon(
                context,
                &[
                    (marker.x, marker.y - radius),
                    (marker.x + radius, marker.y + radius),
                    (marker.x - radius, marker.y + radius),
                ],
            );
        }
        MarkerShape::TriangleDown => {
            close_polygon(
                context,
                &[
                    (marker.x, marker.y + radius),
                    (marker.x + radius, marker.y - radius),
                    (marker.x - radius, marker.y - radius),
                ],
            );
        }
        MarkerShape::Star => {
            let mut vertices = Vec::with_capacity(10);
            for step in 0..10 {
                let vertex_radius = if step % 2 == 0 { radius } else { radius * 0.4 };
                let angle = -PI / 2.0 + f64::from(step) * PI / 5.0;
                vertices.push((
                    marker.x + vertex_radius * angle.cos(),
                    marker.y + vertex_radius * angle.sin(),
                ));
            }
            close_polygon(context, &vertices);
        }
    }

    apply_color(context, marker.fill_color);
    if marker.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
        apply_color(context, marker.border_color);
        context.set_dash(&[], 0.0);
        context.set_line_width(marker.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke marker border", err))?;
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
    }
    Ok(())
}

fn close_polygon(context: &Context, vertices: &[(f64, f64)]) {
    let mut points = vertices.iter();
    if let Some(&(x, y)) = points.next() {
        context.move_to(x, y);
    }
    for &(x, y) in points {
        context.line_to(x, y);
    }
    context.close_path();
}

fn open_marker_stroke_width(marker: &MarkerPrimitive) -> f64 {
    if marker.border_width > 0.0 {
        marker.border_width
    } else {
        (marker.size / 5.0).max(1.0)
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotGridError {
    PlotGridError::InvalidData(format!("{prefix}: {err}"))
}
