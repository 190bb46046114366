//! Combat and trade arithmetic.
//!
//! Pure functions over cards and kill lists. `Game` calls these; the
//! presentation layer may call them too, to preview an action.

use crate::cards::Card;

/// May `weapon` be used against `target`?
///
/// True iff a weapon is equipped, the target is a monster, and either the
/// weapon has no kills yet or the target is strictly weaker than the most
/// recent kill.
#[must_use]
pub fn can_use_weapon(weapon: Option<&Card>, slain: &[i32], target: &Card) -> bool {
    if weapon.is_none() || !target.is_monster() {
        return false;
    }
    match (slain.last(), target.value()) {
        (None, _) => true,
        (Some(&last), Some(value)) => value < last,
        (Some(_), None) => false,
    }
}

/// Damage taken from a monster of `monster_value`, optionally blocked by
/// a weapon of `weapon_value`. Never negative.
#[must_use]
pub fn damage(monster_value: i32, weapon_value: Option<i32>) -> i32 {
    match weapon_value {
        Some(block) => (monster_value - block).max(0),
        None => monster_value,
    }
}

/// Health a merchant pays for a weapon.
///
/// An unused weapon sells for its own value; a used one for its weakest
/// kill.
#[must_use]
pub fn sell_value(weapon: &Card, slain: &[i32]) -> i32 {
    slain
        .iter()
        .copied()
        .min()
        .unwrap_or_else(|| weapon.value().unwrap_or(0))
}
