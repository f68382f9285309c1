//! Creature aggregate - the sole domain entity.
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: all state is encapsulated behind accessors
//! - **Newtypes**: `CreatureName`, `RaceName`, `ImageUrl` for validated strings
//! - **Domain events**: mutations return outcome enums (`TrainOutcome`, etc.)
//! - **Valid by construction**: `new()` takes pre-validated types
//!
//! # Invariants
//!
//! - `level >= 1` and `0 <= experience < LEVEL_THRESHOLD` after every mutation
//! - `0 <= health <= max_health` after every mutation
//! - `id` and `owner_id` never change after creation
//! - `version` moves only forward, bumped by persistence adapters on save

use chrono::{DateTime, Utc};

use crate::events::{ExperienceGain, RestOutcome, TrainOutcome};
use crate::ids::{CreatureId, UserId};
use crate::value_objects::{CharacterClass, CreatureName, ImageUrl, RaceName};

/// Experience required to advance one level (fixed, independent of level).
pub const LEVEL_THRESHOLD: i32 = 100;

/// Training is refused at or below this health.
pub const MIN_TRAINING_HEALTH: i32 = 5;

/// Stats every freshly created creature starts with.
pub const STARTING_MAX_HEALTH: i32 = 100;
pub const STARTING_ATTACK: i32 = 10;
pub const STARTING_DEFENSE: i32 = 10;

const LEVEL_UP_ATTACK_BONUS: i32 = 2;
const LEVEL_UP_DEFENSE_BONUS: i32 = 2;
const LEVEL_UP_MAX_HEALTH_BONUS: i32 = 5;
const LEVEL_UP_HEAL: i32 = 5;

const TRAIN_HEALTH_COST: i32 = 15;
const TRAIN_EXPERIENCE: i32 = 20;
const REST_HEAL: i32 = 15;

/// A user-owned creature with progression stats and a combat marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Creature {
    // Identity
    id: CreatureId,
    owner_id: UserId,

    // Descriptive attributes (newtypes)
    name: CreatureName,
    race: RaceName,
    class: CharacterClass,
    image_url: Option<ImageUrl>,

    // Progression
    level: i32,
    experience: i32,
    attack_base: i32,
    defense_base: i32,
    max_health: i32,
    health: i32,

    // Transient battle marker
    in_combat: bool,

    // Optimistic concurrency token
    version: u64,

    created_at: DateTime<Utc>,
}

impl Creature {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new level-1 creature at full health.
    ///
    /// `name` and `race` must be pre-validated newtypes - validation happens
    /// when creating them, not here. `now` comes from the caller's clock so
    /// creation is reproducible in tests.
    pub fn new(
        owner_id: UserId,
        name: CreatureName,
        race: RaceName,
        class: CharacterClass,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CreatureId::new(),
            owner_id,
            name,
            race,
            class,
            image_url: None,
            level: 1,
            experience: 0,
            attack_base: STARTING_ATTACK,
            defense_base: STARTING_DEFENSE,
            max_health: STARTING_MAX_HEALTH,
            health: STARTING_MAX_HEALTH,
            in_combat: false,
            version: 0,
            created_at: now,
        }
    }

    /// Replace the generated id. Test fixture helper.
    pub fn with_id(mut self, id: CreatureId) -> Self {
        self.id = id;
        self
    }

    /// Replace the starting combat stats. Test fixture helper.
    pub fn with_combat_stats(mut self, attack_base: i32, defense_base: i32, max_health: i32) -> Self {
        self.attack_base = attack_base;
        self.defense_base = defense_base;
        self.max_health = max_health;
        self.health = max_health;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> CreatureId {
        self.id
    }

    #[inline]
    pub fn owner_id(&self) -> UserId {
        self.owner_id
    }

    #[inline]
    pub fn name(&self) -> &CreatureName {
        &self.name
    }

    #[inline]
    pub fn race(&self) -> &RaceName {
        &self.race
    }

    #[inline]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    #[inline]
    pub fn image_url(&self) -> Option<&ImageUrl> {
        self.image_url.as_ref()
    }

    #[inline]
    pub fn level(&self) -> i32 {
        self.level
    }

    #[inline]
    pub fn experience(&self) -> i32 {
        self.experience
    }

    #[inline]
    pub fn attack_base(&self) -> i32 {
        self.attack_base
    }

    #[inline]
    pub fn defense_base(&self) -> i32 {
        self.defense_base
    }

    #[inline]
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    #[inline]
    pub fn health(&self) -> i32 {
        self.health
    }

    #[inline]
    pub fn in_combat(&self) -> bool {
        self.in_combat
    }

    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // =========================================================================
    // Descriptive updates
    // =========================================================================

    pub fn rename(&mut self, name: CreatureName) {
        self.name = name;
    }

    pub fn set_race(&mut self, race: RaceName) {
        self.race = race;
    }

    pub fn set_class(&mut self, class: CharacterClass) {
        self.class = class;
    }

    pub fn set_image_url(&mut self, image_url: Option<ImageUrl>) {
        self.image_url = image_url;
    }

    // =========================================================================
    // Progression
    // =========================================================================

    /// Add experience, levelling up while the fixed threshold is crossed.
    ///
    /// Each level-up grants +2 attack, +2 defense, +5 max health and heals
    /// 5 points (capped at the new max). A single large reward may cross
    /// several thresholds in one call. Deterministic: same state and amount
    /// always produce the same result.
    pub fn gain_experience(&mut self, amount: i32) -> ExperienceGain {
        self.experience += amount.max(0);
        let mut levels_gained = 0;
        while self.experience >= LEVEL_THRESHOLD {
            self.experience -= LEVEL_THRESHOLD;
            self.level += 1;
            levels_gained += 1;
            self.attack_base += LEVEL_UP_ATTACK_BONUS;
            self.defense_base += LEVEL_UP_DEFENSE_BONUS;
            self.max_health += LEVEL_UP_MAX_HEALTH_BONUS;
            self.health = (self.health + LEVEL_UP_HEAL).min(self.max_health);
        }
        ExperienceGain {
            experience_gained: amount.max(0),
            levels_gained,
            new_level: self.level,
        }
    }

    /// Train: pay health, earn experience.
    ///
    /// Refused while in combat or when health is at or below the training
    /// floor; refusals leave the creature untouched. Health never drops
    /// below 1 from training.
    pub fn train(&mut self) -> TrainOutcome {
        if self.in_combat {
            return TrainOutcome::InCombat;
        }
        if self.health <= MIN_TRAINING_HEALTH {
            return TrainOutcome::Exhausted {
                health: self.health,
            };
        }
        let before = self.health;
        self.health = (self.health - TRAIN_HEALTH_COST).max(1);
        let health_cost = before - self.health;
        let gain = self.gain_experience(TRAIN_EXPERIENCE);
        TrainOutcome::Trained { health_cost, gain }
    }

    /// Rest: recover health, capped at max. No experience change.
    pub fn rest(&mut self) -> RestOutcome {
        if self.in_combat {
            return RestOutcome::InCombat;
        }
        if self.health >= self.max_health {
            return RestOutcome::AlreadyFull;
        }
        let before = self.health;
        self.health = (self.health + REST_HEAL).min(self.max_health);
        RestOutcome::Rested {
            amount_healed: self.health - before,
            new_health: self.health,
        }
    }

    // =========================================================================
    // Combat support
    // =========================================================================

    /// Apply battle damage, clamping health at 0.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn enter_combat(&mut self) {
        self.in_combat = true;
    }

    pub fn leave_combat(&mut self) {
        self.in_combat = false;
    }

    /// Force health back into `[0, max_health]`.
    pub fn clamp_health(&mut self) {
        self.health = self.health.clamp(0, self.max_health);
    }

    // =========================================================================
    // Persistence support
    // =========================================================================

    /// Advance the concurrency token. Called by persistence adapters on a
    /// successful save; never by domain logic.
    pub fn bump_version(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Creature {
        Creature::new(
            UserId::new(),
            CreatureName::new("Gwaihir").unwrap(),
            RaceName::new("Eagle").unwrap(),
            CharacterClass::Ranger,
            Utc::now(),
        )
    }

    #[test]
    fn test_new_creature_defaults() {
        let c = fixture();
        assert_eq!(c.level(), 1);
        assert_eq!(c.experience(), 0);
        assert_eq!(c.max_health(), STARTING_MAX_HEALTH);
        assert_eq!(c.health(), STARTING_MAX_HEALTH);
        assert_eq!(c.attack_base(), STARTING_ATTACK);
        assert_eq!(c.defense_base(), STARTING_DEFENSE);
        assert!(!c.in_combat());
        assert_eq!(c.version(), 0);
    }

    #[test]
    fn test_gain_experience_below_threshold() {
        let mut c = fixture();
        let gain = c.gain_experience(99);
        assert_eq!(gain.levels_gained, 0);
        assert_eq!(c.level(), 1);
        assert_eq!(c.experience(), 99);
    }

    #[test]
    fn test_gain_experience_levels_up_and_grows_stats() {
        let mut c = fixture();
        c.take_damage(50);
        let gain = c.gain_experience(100);
        assert_eq!(gain.levels_gained, 1);
        assert_eq!(gain.new_level, 2);
        assert_eq!(c.experience(), 0);
        assert_eq!(c.attack_base(), STARTING_ATTACK + 2);
        assert_eq!(c.defense_base(), STARTING_DEFENSE + 2);
        assert_eq!(c.max_health(), STARTING_MAX_HEALTH + 5);
        assert_eq!(c.health(), 55);
    }

    #[test]
    fn test_large_reward_crosses_several_thresholds() {
        let mut c = fixture();
        let gain = c.gain_experience(250);
        assert_eq!(gain.levels_gained, 2);
        assert_eq!(c.level(), 3);
        assert_eq!(c.experience(), 50);
        assert_eq!(c.max_health(), STARTING_MAX_HEALTH + 10);
    }

    #[test]
    fn test_experience_invariant_holds_after_every_gain() {
        let mut c = fixture();
        for amount in [20, 20, 20, 20, 20, 250, 99, 1] {
            c.gain_experience(amount);
            assert!(c.experience() >= 0 && c.experience() < LEVEL_THRESHOLD);
        }
    }

    #[test]
    fn test_level_up_heal_is_capped_at_max() {
        let mut c = fixture();
        let gain = c.gain_experience(100);
        assert_eq!(gain.levels_gained, 1);
        // Was at full health: +5 max, +5 heal keeps it full.
        assert_eq!(c.health(), c.max_health());
    }

    #[test]
    fn test_train_costs_health_and_earns_experience() {
        let mut c = fixture();
        let outcome = c.train();
        assert!(matches!(
            outcome,
            TrainOutcome::Trained {
                health_cost: 15,
                ..
            }
        ));
        assert_eq!(c.health(), 85);
        assert_eq!(c.experience(), 20);
    }

    #[test]
    fn test_train_floors_health_at_one() {
        let mut c = fixture();
        c.take_damage(90); // health 10
        let outcome = c.train();
        assert!(matches!(outcome, TrainOutcome::Trained { health_cost: 9, .. }));
        assert_eq!(c.health(), 1);
    }

    #[test]
    fn test_train_refused_when_exhausted() {
        let mut c = fixture();
        c.take_damage(95); // health 5, at the floor
        let before = c.clone();
        assert!(matches!(c.train(), TrainOutcome::Exhausted { health: 5 }));
        assert_eq!(c, before);
    }

    #[test]
    fn test_train_refused_in_combat() {
        let mut c = fixture();
        c.enter_combat();
        assert!(matches!(c.train(), TrainOutcome::InCombat));
        assert_eq!(c.experience(), 0);
    }

    #[test]
    fn test_rest_heals_capped_at_max() {
        let mut c = fixture();
        c.take_damage(50);
        assert!(matches!(
            c.rest(),
            RestOutcome::Rested {
                amount_healed: 15,
                new_health: 65
            }
        ));
        let mut near_full = fixture();
        near_full.take_damage(10);
        assert!(matches!(
            near_full.rest(),
            RestOutcome::Rested {
                amount_healed: 10,
                new_health: 100
            }
        ));
    }

    #[test]
    fn test_rest_at_full_health_is_a_no_op() {
        let mut c = fixture();
        assert!(matches!(c.rest(), RestOutcome::AlreadyFull));
        assert_eq!(c.health(), c.max_health());
    }

    #[test]
    fn test_rest_refused_in_combat() {
        let mut c = fixture();
        c.take_damage(50);
        c.enter_combat();
        assert!(matches!(c.rest(), RestOutcome::InCombat));
        assert_eq!(c.health(), 50);
    }

    #[test]
    fn test_take_damage_clamps_at_zero() {
        let mut c = fixture();
        c.take_damage(250);
        assert_eq!(c.health(), 0);
        assert!(c.is_defeated());
    }

    #[test]
    fn test_health_invariant_holds_across_mixed_mutations() {
        let mut c = fixture();
        for _ in 0..20 {
            c.train();
            c.take_damage(7);
            c.rest();
            assert!(c.health() >= 0 && c.health() <= c.max_health());
        }
    }
}
