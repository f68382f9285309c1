//! Turn-based battle simulator.
//!
//! Resolution is one synchronous pass with no suspension points: both
//! creatures are already marked in-combat by the fight use case, the rounds
//! run entirely in memory, and nothing is persisted here.

use std::sync::Arc;

use menagerie_domain::{BattleDecision, BattleReport, Creature};

use crate::infrastructure::ports::RandomPort;

/// Hard cap on simulated rounds.
pub const MAX_ROUNDS: u32 = 30;

/// Experience rewards, applied to both creatures regardless of caller.
pub const WINNER_EXPERIENCE: i32 = 30;
pub const LOSER_EXPERIENCE: i32 = 10;

/// Per-hit damage variance is drawn from `[0, DAMAGE_VARIANCE_MAX]`.
const DAMAGE_VARIANCE_MAX: i32 = 2;

/// Resolves fights between two creatures and applies experience rewards.
pub struct CombatSimulator {
    rng: Arc<dyn RandomPort>,
}

impl CombatSimulator {
    pub fn new(rng: Arc<dyn RandomPort>) -> Self {
        Self { rng }
    }

    /// Run the battle to completion and hand out rewards.
    ///
    /// Each round the attacker strikes first; a felled opponent takes no
    /// counter-swing that round. If both still stand at the round cap, the
    /// higher remaining health wins, and an exact tie goes to the attacker
    /// (the attacker initiated the fight).
    pub fn resolve(&self, attacker: &mut Creature, opponent: &mut Creature) -> BattleReport {
        let mut rounds = 0;
        while attacker.health() > 0 && opponent.health() > 0 && rounds < MAX_ROUNDS {
            rounds += 1;

            opponent.take_damage(self.strike(attacker.attack_base(), opponent.defense_base()));
            if opponent.is_defeated() {
                break;
            }

            attacker.take_damage(self.strike(opponent.attack_base(), attacker.defense_base()));
        }

        let (attacker_won, decided_by) = if opponent.is_defeated() {
            (true, BattleDecision::Knockout)
        } else if attacker.is_defeated() {
            (false, BattleDecision::Knockout)
        } else if attacker.health() > opponent.health() {
            (true, BattleDecision::HigherHealth)
        } else if attacker.health() < opponent.health() {
            (false, BattleDecision::HigherHealth)
        } else {
            (true, BattleDecision::TieBreak)
        };

        let (winner, loser) = if attacker_won {
            (&mut *attacker, &mut *opponent)
        } else {
            (&mut *opponent, &mut *attacker)
        };
        winner.gain_experience(WINNER_EXPERIENCE);
        loser.gain_experience(LOSER_EXPERIENCE);

        BattleReport {
            winner: winner.id(),
            loser: loser.id(),
            rounds,
            attacker_won,
            decided_by,
        }
    }

    /// One hit: `max(1, attack - defense/2 + variance)`.
    fn strike(&self, attack: i32, defense: i32) -> i32 {
        (attack - defense / 2 + self.rng.gen_range(0, DAMAGE_VARIANCE_MAX)).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use menagerie_domain::{CharacterClass, CreatureName, RaceName, UserId};

    use crate::infrastructure::clock::{FixedRandom, SeededRandom};

    fn creature(name: &str) -> Creature {
        Creature::new(
            UserId::new(),
            CreatureName::new(name).unwrap(),
            RaceName::new("Warg").unwrap(),
            CharacterClass::Knight,
            Utc::now(),
        )
    }

    fn simulator(variance: i32) -> CombatSimulator {
        CombatSimulator::new(Arc::new(FixedRandom(variance)))
    }

    #[test]
    fn test_equal_creatures_zero_variance_is_a_knockout_in_twenty_rounds() {
        // atk 10 vs def 10: every hit lands for 10 - 5 + 0 = 5 damage. The
        // opponent strikes second and falls first.
        let mut attacker = creature("Anborn");
        let mut opponent = creature("Mablung");

        let report = simulator(0).resolve(&mut attacker, &mut opponent);

        assert!(report.attacker_won);
        assert_eq!(report.decided_by, BattleDecision::Knockout);
        assert_eq!(report.rounds, 20);
        assert_eq!(opponent.health(), 0);
        assert_eq!(attacker.health(), 5);
    }

    #[test]
    fn test_round_cap_tie_goes_to_the_attacker() {
        // 200 max health outlasts the 30-round cap at 5 damage per hit;
        // both end at 50 and the tie-break favors the initiator.
        let mut attacker = creature("Beleg").with_combat_stats(10, 10, 200);
        let mut opponent = creature("Turin").with_combat_stats(10, 10, 200);

        let report = simulator(0).resolve(&mut attacker, &mut opponent);

        assert_eq!(report.rounds, MAX_ROUNDS);
        assert!(report.attacker_won);
        assert_eq!(report.decided_by, BattleDecision::TieBreak);
        assert_eq!(attacker.health(), 50);
        assert_eq!(opponent.health(), 50);
    }

    #[test]
    fn test_round_cap_higher_health_wins() {
        // Same offense both ways, but the opponent soaks less damage thanks
        // to higher defense, so the attacker ends lower.
        let mut attacker = creature("Lobelia").with_combat_stats(10, 10, 300);
        let mut opponent = creature("Otho").with_combat_stats(10, 16, 300);

        let report = simulator(0).resolve(&mut attacker, &mut opponent);

        assert_eq!(report.rounds, MAX_ROUNDS);
        assert!(!report.attacker_won);
        assert_eq!(report.decided_by, BattleDecision::HigherHealth);
        assert_eq!(report.winner, opponent.id());
    }

    #[test]
    fn test_damage_never_drops_below_one() {
        // Massive defense would make the raw formula negative.
        let mut attacker = creature("Pippin").with_combat_stats(1, 100, 100);
        let mut opponent = creature("Troll").with_combat_stats(1, 100, 100);

        let report = simulator(0).resolve(&mut attacker, &mut opponent);

        // 30 rounds of chip damage: both lose exactly 30 health... except the
        // attacker strikes first, so on an even board it is still a tie.
        assert_eq!(report.rounds, MAX_ROUNDS);
        assert_eq!(attacker.health(), 70);
        assert_eq!(opponent.health(), 70);
    }

    #[test]
    fn test_rewards_go_to_both_creatures() {
        let mut attacker = creature("Eomer");
        let mut opponent = creature("Grima");

        let report = simulator(0).resolve(&mut attacker, &mut opponent);

        assert!(report.attacker_won);
        assert_eq!(attacker.experience(), WINNER_EXPERIENCE);
        assert_eq!(opponent.experience(), LOSER_EXPERIENCE);
    }

    #[test]
    fn test_seeded_battles_are_reproducible() {
        let run = |seed: u64| {
            let mut attacker = creature("Fili");
            let mut opponent = creature("Kili");
            let sim = CombatSimulator::new(Arc::new(SeededRandom::new(seed)));
            let report = sim.resolve(&mut attacker, &mut opponent);
            (report.rounds, attacker.health(), opponent.health())
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_max_variance_still_respects_damage_formula() {
        let mut attacker = creature("Gimli");
        let mut opponent = creature("Legolas");

        // Variance pinned at 2: every hit is 10 - 5 + 2 = 7.
        let report = simulator(2).resolve(&mut attacker, &mut opponent);

        // 100 / 7 -> the opponent falls on round 15 (15 * 7 = 105).
        assert_eq!(report.rounds, 15);
        assert!(report.attacker_won);
        assert_eq!(attacker.health(), 100 - 14 * 7);
    }
}
