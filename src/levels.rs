use crate::maze::Dimensions;

/// A difficulty level and the maze dimensions it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    id: u32,
    dimensions: Dimensions,
}

/// Level used when an unknown level id is requested.
pub const DEFAULT_LEVEL: u32 = 3;

/// Read-only level table, easiest first. Sides must be odd; `Dimensions::from_odd`
/// enforces that at compile time.
static LEVELS: [Level; 10] = [
    Level::new(1, Dimensions::from_odd(11, 11)),
    Level::new(2, Dimensions::from_odd(15, 15)),
    Level::new(3, Dimensions::from_odd(21, 21)),
    Level::new(4, Dimensions::from_odd(25, 25)),
    Level::new(5, Dimensions::from_odd(31, 31)),
    Level::new(6, Dimensions::from_odd(35, 35)),
    Level::new(7, Dimensions::from_odd(41, 41)),
    Level::new(8, Dimensions::from_odd(45, 45)),
    Level::new(9, Dimensions::from_odd(51, 51)),
    Level::new(10, Dimensions::from_odd(55, 55)),
];

impl Level {
    const fn new(id: u32, dimensions: Dimensions) -> Self {
        Level { id, dimensions }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn all() -> &'static [Level] {
        &LEVELS
    }

    pub fn get(id: u32) -> Option<Level> {
        LEVELS.iter().find(|level| level.id == id).copied()
    }

    /// Looks up a level, silently falling back to [`DEFAULT_LEVEL`] for unknown ids.
    /// The returned level carries the id actually used.
    pub fn resolve(id: u32) -> Level {
        Level::get(id).unwrap_or_else(|| {
            tracing::debug!(requested = id, fallback = DEFAULT_LEVEL, "unknown level");
            LEVELS[DEFAULT_LEVEL as usize - 1]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_levels() {
        let first = Level::resolve(1);
        assert_eq!(first.id(), 1);
        assert_eq!(
            (first.dimensions().width(), first.dimensions().height()),
            (11, 11)
        );
        let last = Level::resolve(10);
        assert_eq!(
            (last.dimensions().width(), last.dimensions().height()),
            (55, 55)
        );
    }

    #[test]
    fn test_unknown_level_falls_back() {
        for id in [0, 11, 99, u32::MAX] {
            let level = Level::resolve(id);
            assert_eq!(level.id(), DEFAULT_LEVEL);
            assert_eq!(level.dimensions().width(), 21);
            assert_eq!(level.dimensions().height(), 21);
        }
        assert_eq!(Level::get(0), None);
    }

    #[test]
    fn test_table_is_ordered_by_difficulty() {
        let levels = Level::all();
        assert_eq!(levels.len(), 10);
        for (idx, level) in levels.iter().enumerate() {
            assert_eq!(level.id() as usize, idx + 1);
        }
        assert!(levels.windows(2).all(|w| {
            w[0].dimensions().room_count() < w[1].dimensions().room_count()
        }));
    }
}
