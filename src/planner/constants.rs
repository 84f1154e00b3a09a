/// Share of the daily budget given to breakfast.
pub const BREAKFAST_RATIO: f64 = 1.0 / 2.0;

/// Share of the daily budget given to lunch.
pub const LUNCH_RATIO: f64 = 1.0 / 3.0;

/// Share of the daily budget given to dinner.
pub const DINNER_RATIO: f64 = 1.0 / 6.0;

/// Largest per-meal target the selector accepts by default.
///
/// The selection table grows with items × target, so this bounds memory.
pub const DEFAULT_MAX_TARGET: u32 = 10_000;

/// Hard cap on any configured target limit.
pub const MAX_TARGET_CEILING: u32 = 100_000;

// ─────────────────────────────────────────────────────────────────────────────
// BMR (Mifflin-St Jeor style)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 9.99;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 4.92;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Unit conversion
// ─────────────────────────────────────────────────────────────────────────────

pub const UNITS_CM_TO_IN: f64 = 0.393701;
pub const UNITS_KG_TO_LB: f64 = 2.20462;
pub const UNITS_LB_TO_KG: f64 = 1.0 / UNITS_KG_TO_LB;
pub const UNITS_IN_TO_CM: f64 = 1.0 / UNITS_CM_TO_IN;
pub const INCHES_PER_FOOT: f64 = 12.0;
