//! Prompt composition for the remote planner.

use crate::types::Request;

const SYSTEM_PROMPT: &str =
    "You are a nutrition planner. You ALWAYS respond with valid JSON only.";

/// System instruction sent with every generation request.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Natural-language instruction embedding the request targets plus the
/// schema the model must return.
pub fn compose(request: &Request) -> String {
    format!(
        "Build a 1-day meal plan at about {} kcal and {} g protein. \
         Avoid these foods: {:?}. Budget: ${} per day. \
         Return JSON with keys: \
         meals (array of {{name, ingredients, macros:{{kcal,protein,carbs,fat}}, prep}}), \
         totals ({{kcal,protein,carbs,fat}}), \
         shopping_list (array of strings), \
         notes (string).",
        request.calories, request.protein_g, request.dislikes, request.budget_per_day_usd
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Request;

    #[test]
    fn prompt_embeds_targets_and_schema() {
        let request = Request {
            calories: 2500,
            protein_g: 190,
            dislikes: vec!["olives".to_string()],
            budget_per_day_usd: 12.5,
        };
        let prompt = compose(&request);

        assert!(prompt.contains("2500 kcal"));
        assert!(prompt.contains("190 g protein"));
        assert!(prompt.contains("olives"));
        assert!(prompt.contains("$12.5 per day"));
        assert!(prompt.contains("shopping_list"));
        assert!(prompt.contains("macros:{kcal,protein,carbs,fat}"));
    }

    #[test]
    fn system_prompt_demands_json() {
        assert!(system_prompt().contains("valid JSON only"));
    }
}
