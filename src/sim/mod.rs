pub mod bubble;
pub mod motif;
pub mod pointer;

use crate::fish::aquarium::Aquarium;
use pointer::PointerState;

/// Run the simulation for one tick: fish first, then bubbles.
/// `pointer` is `None` when the aquarium ignores the cursor.
pub fn tick(aquarium: &mut Aquarium, pointer: Option<&PointerState>, rng: &mut fastrand::Rng) {
    let dims = aquarium.dimensions();

    for m in &mut aquarium.motifs {
        motif::update(m, dims, pointer, rng);
    }

    for b in &mut aquarium.bubbles {
        bubble::update(b, dims, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Spacing;
    use crate::sizing::Dimensions;

    #[test]
    fn tick_moves_every_particle() {
        let mut rng = fastrand::Rng::with_seed(11);
        let mut aquarium =
            Aquarium::populate(Dimensions::new(800.0, 600.0), &Spacing::default(), &mut rng);
        let bubbles = aquarium.bubbles.clone();
        let motifs = aquarium.motifs.clone();

        tick(&mut aquarium, None, &mut rng);

        for (before, after) in bubbles.iter().zip(&aquarium.bubbles) {
            assert_ne!(before.pos, after.pos);
        }
        for (before, after) in motifs.iter().zip(&aquarium.motifs) {
            assert_ne!(before.pos, after.pos);
        }
    }

    #[test]
    fn empty_aquarium_ticks_quietly() {
        let mut rng = fastrand::Rng::with_seed(12);
        let mut aquarium = Aquarium::empty(Dimensions::default());
        tick(&mut aquarium, None, &mut rng);
        assert!(aquarium.bubbles.is_empty());
    }
}
