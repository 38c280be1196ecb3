use crate::error::{ArmoryError, Result};
use crate::journal::Journal;
use crate::strategy::{create_shooting_strategy, ShootingManner, ShootingStrategy};

/// The known firearm variants. The numeric value is the factory discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FirearmKind {
    Colt1911 = 1,
    Rpk = 2,
    VssVintorez = 3,
}

impl FirearmKind {
    pub const ALL: [FirearmKind; 3] = [Self::Colt1911, Self::Rpk, Self::VssVintorez];

    #[must_use]
    pub fn discriminant(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Colt1911 => "Colt M1911",
            Self::Rpk => "RPK",
            Self::VssVintorez => "VSS Vintorez",
        }
    }

    /// Calibre in millimetres.
    #[must_use]
    pub fn calibre_mm(self) -> f64 {
        match self {
            Self::Colt1911 => 11.43,
            Self::Rpk => 7.62,
            Self::VssVintorez => 9.00,
        }
    }

    /// Rounds per magazine.
    #[must_use]
    pub fn ammunition(self) -> u8 {
        match self {
            Self::Colt1911 => 7,
            Self::Rpk => 75,
            Self::VssVintorez => 10,
        }
    }

    /// Weight in grams.
    #[must_use]
    pub fn weight_g(self) -> u16 {
        match self {
            Self::Colt1911 => 1120,
            Self::Rpk => 7100,
            Self::VssVintorez => 3700,
        }
    }

    #[must_use]
    pub fn default_manner(self) -> ShootingManner {
        match self {
            Self::Colt1911 => ShootingManner::SingleShots,
            Self::Rpk => ShootingManner::LongBursts,
            Self::VssVintorez => ShootingManner::ShortBursts,
        }
    }
}

impl TryFrom<u8> for FirearmKind {
    type Error = ArmoryError;

    fn try_from(discriminant: u8) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminant() == discriminant)
            .ok_or(ArmoryError::UnrecognizedVariant { discriminant })
    }
}

/// A firearm sample with fixed attributes and a pluggable shooting strategy
#[derive(Debug)]
pub struct Firearm {
    kind: FirearmKind,
    calibre_mm: f64,
    ammunition: u8,
    weight_g: u16,
    strategy: Option<Box<dyn ShootingStrategy>>,
}

impl Firearm {
    /// Builds a sample of `kind` with its default shooting strategy.
    #[must_use]
    pub fn new(kind: FirearmKind) -> Self {
        Self {
            kind,
            calibre_mm: kind.calibre_mm(),
            ammunition: kind.ammunition(),
            weight_g: kind.weight_g(),
            strategy: create_shooting_strategy(Some(kind.default_manner())),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FirearmKind {
        self.kind
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind.name()
    }

    #[must_use]
    pub fn calibre_mm(&self) -> f64 {
        self.calibre_mm
    }

    #[must_use]
    pub fn ammunition(&self) -> u8 {
        self.ammunition
    }

    #[must_use]
    pub fn weight_g(&self) -> u16 {
        self.weight_g
    }

    #[must_use]
    pub fn shooting_manner(&self) -> Option<ShootingManner> {
        self.strategy.as_ref().map(|strategy| strategy.manner())
    }

    pub fn set_shooting_manner(&mut self, strategy: Option<Box<dyn ShootingStrategy>>) {
        self.strategy = strategy;
    }

    /// Announces the type, then fires with the current strategy.
    ///
    /// The sequence is fixed here; only the volley varies with the strategy.
    pub fn shoot(&self, journal: &mut Journal) {
        let mut line = format!("{} : ", self.type_name());
        match &self.strategy {
            Some(strategy) => strategy.shoot(&mut line),
            None => line.push_str("no shooting strategy defined"),
        }
        journal.line(line);
    }

    pub fn reload(&self, journal: &mut Journal) {
        journal.line(format!("Reloading the {}", self.type_name()));
    }

    pub fn clean(&self, journal: &mut Journal) {
        journal.line(format!("Cleaning the {}", self.type_name()));
    }

    pub fn decommission(&self, journal: &mut Journal) {
        journal.line(format!("Removing the {} sample...", self.type_name()));
    }
}

/// Factory method: builds the firearm matching `discriminant` and narrates it.
///
/// # Errors
///
/// Returns `ArmoryError::UnrecognizedVariant` for a discriminant outside 1..=3.
pub fn create_firearm(discriminant: u8, journal: &mut Journal) -> Result<Firearm> {
    let kind = FirearmKind::try_from(discriminant)?;
    journal.line(format!("Creating a {} sample...", kind.name()));
    Ok(Firearm::new(kind))
}
