use std::f32::consts::PI;

use glam::Vec2;

use crate::config::Theme;
use crate::fish::aquarium::Aquarium;
use crate::fish::{Bubble, Motif};
use crate::render::canvas::{Canvas, Glyph};
use crate::sim::pointer::PointerState;

/// Edge of the bait marker box in pixels.
pub const MARKER_SIZE: f32 = 24.0;

/// Paint one frame: background, fish, bubbles, then the bait marker on top.
/// `pointer` is `None` when the aquarium ignores the cursor.
pub fn draw_frame<C: Canvas + ?Sized>(
    canvas: &mut C,
    aquarium: &Aquarium,
    pointer: Option<&PointerState>,
    theme: &Theme,
) {
    let dims = aquarium.dimensions();
    canvas.set_fill(theme.background);
    canvas.fill_rect(Vec2::ZERO, Vec2::new(dims.width, dims.height));

    for motif in &aquarium.motifs {
        draw_motif(canvas, motif, theme);
    }

    canvas.set_fill(theme.bubble);
    for bubble in &aquarium.bubbles {
        draw_bubble(canvas, bubble);
    }

    if let Some(p) = pointer.filter(|p| p.hovering) {
        canvas.set_fill(theme.marker);
        canvas.fill_glyph(
            Glyph::Bait,
            p.position() - Vec2::splat(MARKER_SIZE * 0.5),
            MARKER_SIZE,
        );
    }
}

/// Fish swimming toward -x are mirrored instead of rotated past vertical,
/// so they never render belly-up.
fn draw_motif<C: Canvas + ?Sized>(canvas: &mut C, motif: &Motif, theme: &Theme) {
    let half = motif.size * 0.5;

    canvas.save();
    canvas.set_fill(theme.motif.with_alpha(motif.transparency));
    canvas.translate(motif.center());
    if motif.facing_left() {
        canvas.scale(Vec2::new(-1.0, 1.0));
        canvas.rotate(PI - motif.heading);
    } else {
        canvas.rotate(motif.heading);
    }
    canvas.fill_glyph(Glyph::Fish, Vec2::splat(-half), motif.size);
    canvas.restore();
}

fn draw_bubble<C: Canvas + ?Sized>(canvas: &mut C, bubble: &Bubble) {
    canvas.fill_circle(bubble.pos, bubble.radius);
}
