// ABOUTME: Proportional calorie rescaling for diet plans and macro aggregation
// ABOUTME: Pure functions with no I/O; persistence is the caller's responsibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Planforge Contributors

//! # Plan Rescaler and Macro Aggregator
//!
//! [`rescale`] proportionally adjusts every nutritional quantity of a diet
//! plan to a new calorie target. [`aggregate`] folds per-meal macros into the
//! plan-level totals.
//!
//! Rounding rule: every scaled quantity is rounded **half away from zero**
//! (`f64::round`). Scaled item values therefore sum only approximately to the
//! scaled meal total; no reconciliation step redistributes rounding drift.

use crate::errors::{AppError, AppResult};
use crate::models::{DietPlan, MacroBreakdown, MacroTotals, Meal, NutritionItem};

/// Lowest accepted calorie target
pub const MIN_CALORIE_TARGET: u32 = 1000;

/// Highest accepted calorie target
pub const MAX_CALORIE_TARGET: u32 = 5000;

/// Fixed message for calorie targets outside the accepted range
pub const CALORIE_RANGE_MESSAGE: &str = "Invalid calories value. Must be between 1000 and 5000.";

/// Validate a calorie target against the accepted policy range
///
/// # Errors
///
/// Returns `ValueOutOfRange` when the target falls outside
/// [`MIN_CALORIE_TARGET`]..=[`MAX_CALORIE_TARGET`].
pub fn validate_calorie_target(calories: u32) -> AppResult<()> {
    if (MIN_CALORIE_TARGET..=MAX_CALORIE_TARGET).contains(&calories) {
        Ok(())
    } else {
        Err(AppError::out_of_range(CALORIE_RANGE_MESSAGE))
    }
}

/// Proportionally rescale a diet plan to a new calorie target
///
/// Produces a new plan whose `total_calories` equals the target, with every
/// meal's calories and macros (and every item's calories and present macros)
/// scaled by `target / plan.total_calories`. Absent optional fields stay
/// absent; they are never coerced to zero and then scaled. The plan's
/// `target_macros` is recomputed by aggregating the already-scaled meals, not
/// by scaling the original aggregate.
///
/// The input plan is never mutated.
///
/// # Errors
///
/// - `ValueOutOfRange` when the target is outside the accepted range
/// - `InvalidState` when the plan's stored total is zero, which would make
///   the scale factor undefined
pub fn rescale(plan: &DietPlan, new_calorie_target: u32) -> AppResult<DietPlan> {
    validate_calorie_target(new_calorie_target)?;

    if plan.total_calories == 0 {
        return Err(AppError::invalid_state(
            "Cannot rescale a plan whose stored calorie total is zero",
        ));
    }

    let factor = f64::from(new_calorie_target) / f64::from(plan.total_calories);

    let meals: Vec<Meal> = plan.meals.iter().map(|m| scale_meal(m, factor)).collect();
    let target_macros = aggregate(&meals);

    Ok(DietPlan {
        id: plan.id,
        user_id: plan.user_id.clone(),
        name: plan.name.clone(),
        description: plan.description.clone(),
        goal: plan.goal.clone(),
        total_calories: new_calorie_target,
        target_macros,
        meals,
        restrictions: plan.restrictions.clone(),
    })
}

/// Fold per-meal macros into plan-level totals
///
/// Absent fiber on a meal counts as zero here; the aggregate is a total, so
/// this is the one place absent-as-zero is correct. Summation is commutative,
/// so the result is insensitive to meal ordering.
#[must_use]
pub fn aggregate(meals: &[Meal]) -> MacroTotals {
    meals.iter().fold(MacroTotals::default(), |acc, meal| {
        MacroTotals {
            protein: acc.protein + meal.macros.protein,
            carbs: acc.carbs + meal.macros.carbs,
            fat: acc.fat + meal.macros.fat,
            fiber: acc.fiber + meal.macros.fiber.unwrap_or(0),
        }
    })
}

/// Scale a single quantity, rounding half away from zero
///
/// The float-to-int cast saturates, so a product beyond `u32::MAX` clamps to
/// `u32::MAX` instead of wrapping. Unreachable for range-checked targets and
/// realistic plan totals, but the clamp keeps a corrupt stored plan from
/// producing garbage values.
fn scale(value: u32, factor: f64) -> u32 {
    (f64::from(value) * factor).round() as u32
}

/// Scale a meal's denormalized totals, macros, and items
fn scale_meal(meal: &Meal, factor: f64) -> Meal {
    Meal {
        name: meal.name.clone(),
        items: meal.items.iter().map(|i| scale_item(i, factor)).collect(),
        total_calories: scale(meal.total_calories, factor),
        macros: MacroBreakdown {
            protein: scale(meal.macros.protein, factor),
            carbs: scale(meal.macros.carbs, factor),
            fat: scale(meal.macros.fat, factor),
            fiber: meal.macros.fiber.map(|f| scale(f, factor)),
        },
    }
}

/// Scale a nutrition item's calories and present macros
fn scale_item(item: &NutritionItem, factor: f64) -> NutritionItem {
    NutritionItem {
        name: item.name.clone(),
        quantity: item.quantity.clone(),
        calories: scale(item.calories, factor),
        protein: item.protein.map(|v| scale(v, factor)),
        carbs: item.carbs.map(|v| scale(v, factor)),
        fat: item.fat.map(|v| scale(v, factor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_rounds_half_away_from_zero() {
        // 5 * 1.5 = 7.5 rounds to 8 under half-away-from-zero
        assert_eq!(scale(5, 1.5), 8);
        assert_eq!(scale(3, 0.5), 2);
        assert_eq!(scale(100, 1.0), 100);
    }

    #[test]
    fn test_scale_saturates_instead_of_wrapping() {
        // A plan with total_calories 1 yields factors up to 5000; the cast
        // clamps at u32::MAX rather than wrapping around
        assert_eq!(scale(u32::MAX, 2.0), u32::MAX);
        assert_eq!(scale(1_000_000_000, 5000.0), u32::MAX);
    }

    #[test]
    fn test_validate_calorie_target_bounds() {
        assert!(validate_calorie_target(1000).is_ok());
        assert!(validate_calorie_target(5000).is_ok());
        assert!(validate_calorie_target(999).is_err());
        assert!(validate_calorie_target(5001).is_err());
    }
}
