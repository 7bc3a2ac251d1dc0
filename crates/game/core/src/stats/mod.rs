//! Character statistics.
//!
//! [`Stats`] is an immutable value: every mutation returns a new instance, so
//! the bounds are checked in exactly two places. Construction validates and
//! rejects out-of-range input; derivation (`with_health`, `with_mana`) clamps
//! and never fails.
//!
//! ```text
//! 0 ≤ health ≤ max_health      max_health > 0
//! 0 ≤ mana   ≤ max_mana        max_mana   ≥ 0
//! attack_power ≥ 0             defense    ≥ 0
//! ```

mod error;

pub use error::StatsError;

/// Unvalidated stat values, as they appear in data files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawStats {
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense: i32,
    pub mana: i32,
    pub max_mana: i32,
}

/// Validated, immutable character statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawStats"))]
pub struct Stats {
    health: i32,
    max_health: i32,
    attack_power: i32,
    defense: i32,
    mana: i32,
    max_mana: i32,
}

impl Stats {
    /// Validates and creates a stats value.
    pub const fn new(
        health: i32,
        max_health: i32,
        attack_power: i32,
        defense: i32,
        mana: i32,
        max_mana: i32,
    ) -> Result<Self, StatsError> {
        if max_health <= 0 {
            return Err(StatsError::NonPositiveMaxHealth(max_health));
        }
        if health < 0 || health > max_health {
            return Err(StatsError::HealthOutOfRange { health, max_health });
        }
        if attack_power < 0 {
            return Err(StatsError::NegativeAttackPower(attack_power));
        }
        if defense < 0 {
            return Err(StatsError::NegativeDefense(defense));
        }
        if max_mana < 0 {
            return Err(StatsError::NegativeMaxMana(max_mana));
        }
        if mana < 0 || mana > max_mana {
            return Err(StatsError::ManaOutOfRange { mana, max_mana });
        }

        Ok(Self {
            health,
            max_health,
            attack_power,
            defense,
            mana,
            max_mana,
        })
    }

    /// Creates stats at full health and full mana.
    pub const fn full(
        max_health: i32,
        attack_power: i32,
        defense: i32,
        max_mana: i32,
    ) -> Result<Self, StatsError> {
        Self::new(
            max_health,
            max_health,
            attack_power,
            defense,
            max_mana,
            max_mana,
        )
    }

    /// Returns a copy with health clamped into `[0, max_health]`.
    #[must_use]
    pub fn with_health(self, health: i32) -> Self {
        Self {
            health: health.clamp(0, self.max_health),
            ..self
        }
    }

    /// Returns a copy with mana clamped into `[0, max_mana]`.
    #[must_use]
    pub fn with_mana(self, mana: i32) -> Self {
        Self {
            mana: mana.clamp(0, self.max_mana),
            ..self
        }
    }

    #[inline]
    pub const fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub const fn max_health(&self) -> i32 {
        self.max_health
    }

    #[inline]
    pub const fn attack_power(&self) -> i32 {
        self.attack_power
    }

    #[inline]
    pub const fn defense(&self) -> i32 {
        self.defense
    }

    #[inline]
    pub const fn mana(&self) -> i32 {
        self.mana
    }

    #[inline]
    pub const fn max_mana(&self) -> i32 {
        self.max_mana
    }

    #[inline]
    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    #[inline]
    pub const fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Returns the unvalidated view of these stats.
    pub const fn to_raw(self) -> RawStats {
        RawStats {
            health: self.health,
            max_health: self.max_health,
            attack_power: self.attack_power,
            defense: self.defense,
            mana: self.mana,
            max_mana: self.max_mana,
        }
    }
}

impl TryFrom<RawStats> for Stats {
    type Error = StatsError;

    fn try_from(raw: RawStats) -> Result<Self, Self::Error> {
        Self::new(
            raw.health,
            raw.max_health,
            raw.attack_power,
            raw.defense,
            raw.mana,
            raw.max_mana,
        )
    }
}

impl From<Stats> for RawStats {
    fn from(stats: Stats) -> Self {
        stats.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warrior() -> Stats {
        Stats::full(150, 40, 30, 0).unwrap()
    }

    #[test]
    fn full_starts_at_maximums() {
        let stats = Stats::full(80, 60, 10, 100).unwrap();
        assert_eq!(stats.health(), 80);
        assert_eq!(stats.mana(), 100);
        assert!(stats.is_alive());
    }

    #[test]
    fn construction_rejects_out_of_range_values() {
        assert_eq!(
            Stats::new(151, 150, 40, 30, 0, 0),
            Err(StatsError::HealthOutOfRange {
                health: 151,
                max_health: 150,
            })
        );
        assert_eq!(
            Stats::new(-1, 150, 40, 30, 0, 0),
            Err(StatsError::HealthOutOfRange {
                health: -1,
                max_health: 150,
            })
        );
        assert_eq!(
            Stats::new(0, 0, 40, 30, 0, 0),
            Err(StatsError::NonPositiveMaxHealth(0))
        );
        assert_eq!(
            Stats::new(10, 10, -1, 0, 0, 0),
            Err(StatsError::NegativeAttackPower(-1))
        );
        assert_eq!(
            Stats::new(10, 10, 0, -3, 0, 0),
            Err(StatsError::NegativeDefense(-3))
        );
        assert_eq!(
            Stats::new(10, 10, 0, 0, 0, -1),
            Err(StatsError::NegativeMaxMana(-1))
        );
        assert_eq!(
            Stats::new(10, 10, 0, 0, 11, 10),
            Err(StatsError::ManaOutOfRange {
                mana: 11,
                max_mana: 10,
            })
        );
    }

    #[test]
    fn zero_health_is_a_valid_dead_state() {
        let stats = Stats::new(0, 10, 0, 0, 0, 0).unwrap();
        assert!(stats.is_dead());
        assert!(!stats.is_alive());
    }

    #[test]
    fn with_health_clamps_extremes() {
        let stats = warrior();
        assert_eq!(stats.with_health(i32::MAX).health(), 150);
        assert_eq!(stats.with_health(i32::MIN).health(), 0);
        assert_eq!(stats.with_health(75).health(), 75);
    }

    #[test]
    fn with_mana_clamps_extremes() {
        let stats = Stats::full(80, 60, 10, 100).unwrap();
        assert_eq!(stats.with_mana(-50).mana(), 0);
        assert_eq!(stats.with_mana(1_000).mana(), 100);
        assert_eq!(warrior().with_mana(10).mana(), 0);
    }

    #[test]
    fn derivation_leaves_original_untouched() {
        let stats = warrior();
        let wounded = stats.with_health(10);
        assert_eq!(stats.health(), 150);
        assert_eq!(wounded.health(), 10);
        assert_eq!(wounded.attack_power(), stats.attack_power());
    }

    #[test]
    fn raw_round_trip_revalidates() {
        let raw = RawStats {
            health: 200,
            ..warrior().to_raw()
        };
        assert!(Stats::try_from(raw).is_err());
        assert_eq!(Stats::try_from(warrior().to_raw()), Ok(warrior()));
    }
}
