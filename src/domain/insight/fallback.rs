use crate::domain::expert::Expert;

/// Deterministic insight used whenever generation is unavailable
pub fn fallback_insight(expert: &Expert, topic: &str) -> String {
    format!(
        "This expert's focus on {} makes them a strong match for your interest in {}.",
        expert.category, topic
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_template() {
        let expert = Expert::new(9, "Kim", "Data Science", "Models things.");

        assert_eq!(
            fallback_insight(&expert, "machine learning"),
            "This expert's focus on Data Science makes them a strong match for your interest in machine learning."
        );
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let expert = Expert::new(9, "Kim", "Data Science", "Models things.");
        assert_eq!(fallback_insight(&expert, "ml"), fallback_insight(&expert, "ml"));
    }
}
