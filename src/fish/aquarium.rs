use crate::config::Spacing;
use crate::fish::{Bubble, Motif};
use crate::sizing::Dimensions;

/// Every particle alive on one surface. Rebuilt from scratch on resize.
pub struct Aquarium {
    dims: Dimensions,
    pub bubbles: Vec<Bubble>,
    pub motifs: Vec<Motif>,
}

/// One particle per `spacing` pixels, rounded down.
pub fn pool_size(dimension: f32, spacing: f32) -> usize {
    (dimension / spacing).floor().max(0.0) as usize
}

impl Aquarium {
    /// Fill both pools for a surface of `dims`, scattering initial positions.
    pub fn populate(dims: Dimensions, spacing: &Spacing, rng: &mut fastrand::Rng) -> Self {
        if !dims.is_ready() {
            return Self::empty(dims);
        }

        let bubbles = (0..pool_size(dims.width, spacing.bubble))
            .map(|_| Bubble::scattered(rng, dims))
            .collect();
        let motifs = (0..pool_size(dims.width, spacing.motif))
            .map(|_| Motif::scattered(rng, dims))
            .collect();

        Self {
            dims,
            bubbles,
            motifs,
        }
    }

    /// No particles; what a zero-area surface gets.
    pub fn empty(dims: Dimensions) -> Self {
        Self {
            dims,
            bubbles: Vec::new(),
            motifs: Vec::new(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_scale_with_width() {
        let spacing = Spacing {
            bubble: 100.0,
            motif: 200.0,
        };
        let mut rng = fastrand::Rng::with_seed(7);
        let aquarium = Aquarium::populate(Dimensions::new(800.0, 600.0), &spacing, &mut rng);
        assert_eq!(aquarium.bubbles.len(), 8);
        assert_eq!(aquarium.motifs.len(), 4);
    }

    #[test]
    fn pool_size_rounds_down() {
        assert_eq!(pool_size(850.0, 100.0), 8);
        assert_eq!(pool_size(99.0, 100.0), 0);
        assert_eq!(pool_size(0.0, 100.0), 0);
    }

    #[test]
    fn unattached_surface_gets_no_particles() {
        let mut rng = fastrand::Rng::with_seed(7);
        let aquarium = Aquarium::populate(Dimensions::default(), &Spacing::default(), &mut rng);
        assert!(aquarium.bubbles.is_empty());
        assert!(aquarium.motifs.is_empty());
    }

    #[test]
    fn collapsed_surface_keeps_its_dimensions() {
        // Wide but zero height, as when the window is minimized.
        let dims = Dimensions::new(800.0, 0.0);
        let mut rng = fastrand::Rng::with_seed(7);
        let aquarium = Aquarium::populate(dims, &Spacing::default(), &mut rng);
        assert!(aquarium.bubbles.is_empty());
        assert!(aquarium.motifs.is_empty());
        assert_eq!(aquarium.dimensions(), dims);
    }

    #[test]
    fn initial_fish_are_spread_out() {
        let mut rng = fastrand::Rng::with_seed(8);
        let dims = Dimensions::new(4000.0, 600.0);
        let aquarium = Aquarium::populate(dims, &Spacing::default(), &mut rng);
        assert_eq!(aquarium.motifs.len(), 20);
        let on_screen = aquarium
            .motifs
            .iter()
            .filter(|m| m.pos.x > 0.0 && m.pos.x < dims.width - m.size)
            .count();
        assert!(on_screen > 0);
    }
}
