//! Random drifting position for the companion bubble.

use std::time::Duration;

use rand::Rng;

pub const WANDER_INTERVAL: Duration = Duration::from_secs(10);

/// Cells kept clear on every side of the bounds.
const MARGIN: u16 = 2;

/// Position of a floating widget inside a `width` x `height` area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wanderer {
    pub x: u16,
    pub y: u16,
}

impl Wanderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to a random spot where a widget of `size` fits inside the bounds.
    pub fn relocate<R: Rng>(&mut self, rng: &mut R, bounds: (u16, u16), size: (u16, u16)) {
        let (max_x, max_y) = Self::max_origin(bounds, size);
        let min_x = MARGIN.min(max_x);
        let min_y = MARGIN.min(max_y);

        self.x = rng.gen_range(min_x..=max_x);
        self.y = rng.gen_range(min_y..=max_y);
    }

    /// Pull the position back inside bounds after a resize.
    pub fn clamp(&mut self, bounds: (u16, u16), size: (u16, u16)) {
        let (max_x, max_y) = Self::max_origin(bounds, size);
        self.x = self.x.min(max_x);
        self.y = self.y.min(max_y);
    }

    fn max_origin(bounds: (u16, u16), size: (u16, u16)) -> (u16, u16) {
        let max_x = bounds.0.saturating_sub(size.0).saturating_sub(MARGIN);
        let max_y = bounds.1.saturating_sub(size.1).saturating_sub(MARGIN);
        (max_x, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_relocate_stays_inside_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut wanderer = Wanderer::new();
        for _ in 0..200 {
            wanderer.relocate(&mut rng, (80, 24), (30, 3));
            assert!(wanderer.x >= MARGIN && wanderer.x + 30 <= 80 - MARGIN);
            assert!(wanderer.y >= MARGIN && wanderer.y + 3 <= 24 - MARGIN);
        }
    }

    #[test]
    fn test_tiny_bounds_pin_to_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut wanderer = Wanderer::new();
        wanderer.relocate(&mut rng, (10, 2), (30, 3));
        assert_eq!(wanderer, Wanderer { x: 0, y: 0 });
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut wanderer = Wanderer { x: 70, y: 40 };
        wanderer.clamp((60, 20), (20, 3));
        assert_eq!(wanderer, Wanderer { x: 38, y: 15 });
    }
}
