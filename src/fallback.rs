//! Deterministic static plan substituted when remote generation fails.

use crate::types::{Macros, Meal, Plan};

const BASE_KCAL: f64 = 2000.0;
const BASE_PROTEIN: f64 = 180.0;
const BASE_CARBS: f64 = 220.0;
const BASE_FAT: f64 = 50.0;

/// Fixed note carried by every fallback plan. Callers can match on this to
/// detect a degraded outcome.
pub const FALLBACK_NOTES: &str = "This is a static fallback plan used when the OpenAI API call \
     fails or is rate limited (HTTP 429). Once your OpenAI quota is \
     available again, the API will start returning fully \
     AI-generated plans instead.";

/// Build the fallback plan. Pure function of the two targets: calling it
/// twice with identical inputs yields identical output.
///
/// Only the headline `totals` block scales from the baseline profile; the
/// three meals themselves are fixed and are not rescaled to match the
/// computed totals.
pub fn fallback_plan(calories: i64, protein_g: i64) -> Plan {
    let scale = if calories != 0 {
        calories as f64 / BASE_KCAL
    } else {
        1.0
    };
    let protein_scale = if protein_g != 0 {
        protein_g as f64 / BASE_PROTEIN
    } else {
        1.0
    };

    // Truncation toward zero, matching integer-cast semantics.
    let totals = Macros {
        kcal: (BASE_KCAL * scale) as i64,
        protein: (BASE_PROTEIN * protein_scale) as i64,
        carbs: (BASE_CARBS * scale) as i64,
        fat: (BASE_FAT * scale) as i64,
    };

    Plan {
        meals: vec![
            Meal {
                name: "Fallback Breakfast".to_string(),
                ingredients: vec![
                    "rolled oats (80g)".to_string(),
                    "whey protein (1 scoop)".to_string(),
                    "banana (1 medium)".to_string(),
                    "water or low-fat milk".to_string(),
                ],
                macros: Macros {
                    kcal: 500,
                    protein: 40,
                    carbs: 65,
                    fat: 8,
                },
                prep: "Microwave oats with water or milk, then stir in \
                       whey protein and sliced banana."
                    .to_string(),
            },
            Meal {
                name: "Fallback Lunch".to_string(),
                ingredients: vec![
                    "chicken breast (150g)".to_string(),
                    "rice (100g dry)".to_string(),
                    "mixed veggies (frozen, 100g)".to_string(),
                ],
                macros: Macros {
                    kcal: 650,
                    protein: 55,
                    carbs: 75,
                    fat: 12,
                },
                prep: "Grill or pan-cook chicken, cook rice, heat veggies. \
                       Serve together and season to taste."
                    .to_string(),
            },
            Meal {
                name: "Fallback Dinner".to_string(),
                ingredients: vec![
                    "93% lean ground turkey (150g)".to_string(),
                    "whole wheat pasta (90g dry)".to_string(),
                    "tomato sauce (100g)".to_string(),
                ],
                macros: Macros {
                    kcal: 700,
                    protein: 55,
                    carbs: 80,
                    fat: 16,
                },
                prep: "Brown turkey in a pan, boil pasta, add tomato sauce. \
                       Combine and season with salt, pepper, and herbs."
                    .to_string(),
            },
        ],
        totals,
        shopping_list: vec![
            "rolled oats".to_string(),
            "whey protein".to_string(),
            "bananas".to_string(),
            "chicken breast".to_string(),
            "rice".to_string(),
            "mixed frozen veggies".to_string(),
            "93% lean ground turkey".to_string(),
            "whole wheat pasta".to_string(),
            "tomato sauce".to_string(),
        ],
        notes: FALLBACK_NOTES.to_string(),
    }
}
