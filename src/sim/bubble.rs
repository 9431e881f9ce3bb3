use crate::fish::Bubble;
use crate::sizing::Dimensions;

/// Phase step per tick of the sideways wobble.
const DRIFT_FREQUENCY: f32 = 0.1;
/// Peak sideways wobble in pixels per tick.
const DRIFT_AMPLITUDE: f32 = 0.5;

/// Advance one bubble by a tick, respawning it at the bottom once it has
/// cleared the top edge.
pub fn update(bubble: &mut Bubble, dims: Dimensions, rng: &mut fastrand::Rng) {
    if bubble.pos.y < -bubble.radius {
        *bubble = Bubble::spawn(rng, dims);
        return;
    }

    bubble.pos.x += (bubble.count * DRIFT_FREQUENCY).sin() * DRIFT_AMPLITUDE;
    bubble.pos.y -= bubble.velocity;
    bubble.count += 1.0;
}
