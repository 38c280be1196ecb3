use std::fmt;

/// How a firearm fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShootingManner {
    SingleShots,
    ShortBursts,
    LongBursts,
}

/// Interchangeable firing behaviour, chosen per firearm at construction
pub trait ShootingStrategy: fmt::Debug {
    fn manner(&self) -> ShootingManner;

    /// Appends the description of the volley to `line`.
    fn shoot(&self, line: &mut String);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleShotsStrategy;

impl ShootingStrategy for SingleShotsStrategy {
    fn manner(&self) -> ShootingManner {
        ShootingManner::SingleShots
    }

    fn shoot(&self, line: &mut String) {
        line.push_str("firing single shots...");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShortBurstsStrategy;

impl ShootingStrategy for ShortBurstsStrategy {
    fn manner(&self) -> ShootingManner {
        ShootingManner::ShortBursts
    }

    fn shoot(&self, line: &mut String) {
        line.push_str("firing short bursts...");
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LongBurstsStrategy;

impl ShootingStrategy for LongBurstsStrategy {
    fn manner(&self) -> ShootingManner {
        ShootingManner::LongBursts
    }

    fn shoot(&self, line: &mut String) {
        line.push_str("firing long bursts...");
    }
}

/// Factory method for shooting strategies. `None` yields no strategy.
#[must_use]
pub fn create_shooting_strategy(
    manner: Option<ShootingManner>,
) -> Option<Box<dyn ShootingStrategy>> {
    match manner? {
        ShootingManner::SingleShots => Some(Box::new(SingleShotsStrategy)),
        ShootingManner::ShortBursts => Some(Box::new(ShortBurstsStrategy)),
        ShootingManner::LongBursts => Some(Box::new(LongBurstsStrategy)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_maps_each_manner() {
        for manner in [
            ShootingManner::SingleShots,
            ShootingManner::ShortBursts,
            ShootingManner::LongBursts,
        ] {
            let strategy = create_shooting_strategy(Some(manner)).unwrap();
            assert_eq!(strategy.manner(), manner);
        }
        assert!(create_shooting_strategy(None).is_none());
    }

    #[test]
    fn test_strategies_append_to_the_line() {
        for (manner, volley) in [
            (ShootingManner::SingleShots, "firing single shots..."),
            (ShootingManner::ShortBursts, "firing short bursts..."),
            (ShootingManner::LongBursts, "firing long bursts..."),
        ] {
            let mut line = String::from("RPK : ");
            create_shooting_strategy(Some(manner)).unwrap().shoot(&mut line);
            assert_eq!(line, format!("RPK : {volley}"));
        }
    }
}
