//! Keyword classification of user queries into fixed advice categories.

/// Categories with their trigger keywords, checked in priority order.
/// The first category with any keyword present wins.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    ("crop_selection", &["crop", "plant", "grow", "harvest"]),
    ("fertilizer_advice", &["fertilizer", "nutrient", "npk", "compost"]),
    ("water_management", &["water", "irrigat", "moisture", "drain"]),
    (
        "problem_solving",
        &["problem", "issue", "disease", "pest", "yellow", "brown"],
    ),
    (
        "soil_analysis",
        &["soil type", "test", "analysis", "ph", "texture"],
    ),
    ("soil_improvement", &["improve", "amend", "quality", "health"]),
];

pub fn classify_query(query: &str) -> &'static str {
    let query = query.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| query.contains(keyword)) {
            return category;
        }
    }
    "general_advice"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_question() {
        assert_eq!(classify_query("What crop should I plant?"), "crop_selection");
    }

    #[test]
    fn test_fertilizer_question() {
        assert_eq!(classify_query("How much fertilizer?"), "fertilizer_advice");
    }

    #[test]
    fn test_water_question() {
        assert_eq!(
            classify_query("When should I irrigate my field?"),
            "water_management"
        );
    }

    #[test]
    fn test_problem_question() {
        assert_eq!(
            classify_query("My leaves are turning yellow"),
            "problem_solving"
        );
    }

    #[test]
    fn test_improvement_question() {
        assert_eq!(
            classify_query("How do I amend sandy ground?"),
            "soil_improvement"
        );
    }

    #[test]
    fn test_first_matching_category_wins() {
        // Mentions both crops and fertilizer; crop_selection has priority.
        assert_eq!(
            classify_query("Which crop needs the least fertilizer?"),
            "crop_selection"
        );
    }

    #[test]
    fn test_unmatched_falls_back_to_general_advice() {
        assert_eq!(classify_query("Good morning!"), "general_advice");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(classify_query("NPK ratios?"), "fertilizer_advice");
    }
}
