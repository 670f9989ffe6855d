// Prompt constants and prompt-building for roadmap generation.
// The service issues exactly one prompt shape; both halves live here.

use crate::roadmap::models::CareerProfile;

/// System instruction sent with every generation call.
pub const ROADMAP_SYSTEM: &str = "You are an expert tech career counselor. \
    Create a detailed, actionable 4-week study plan based on the user's profile. \
    Be realistic about what can be achieved with the given daily hours. \
    Focus on free, high-quality resources. \
    You MUST respond with valid JSON only, matching this shape: \
    {\"summary\": string, \"skill_gaps\": [string], \
    \"study_plan\": [{\"week_number\": int, \"focus_area\": string, \"tasks\": [string]}], \
    \"learning_resources\": [string], \"next_steps\": [string]}. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// User prompt: labeled profile fields followed by the generation instruction.
const ROADMAP_PROMPT_TEMPLATE: &str = "\
User Profile:
Degree: {degree}
Skills: {skills}
Target Role: {target_role}
Daily Hours: {daily_hours}

Generate a career roadmap.";

/// Renders the fixed prompt template with the validated profile fields.
pub fn build_roadmap_prompt(profile: &CareerProfile) -> String {
    ROADMAP_PROMPT_TEMPLATE
        .replace("{degree}", &profile.degree)
        .replace("{skills}", &profile.skills.join(", "))
        .replace("{target_role}", &profile.target_role)
        .replace("{daily_hours}", &profile.daily_hours.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_labeled_fields() {
        let profile = CareerProfile {
            degree: "CS".to_string(),
            skills: vec!["Python".to_string(), "Git".to_string()],
            target_role: "Backend Engineer".to_string(),
            daily_hours: 2,
        };
        let prompt = build_roadmap_prompt(&profile);
        assert!(prompt.contains("Degree: CS"));
        assert!(prompt.contains("Skills: Python, Git"));
        assert!(prompt.contains("Target Role: Backend Engineer"));
        assert!(prompt.contains("Daily Hours: 2"));
        assert!(prompt.ends_with("Generate a career roadmap."));
    }

    #[test]
    fn test_prompt_handles_empty_skill_list() {
        let profile = CareerProfile {
            degree: "Self-taught".to_string(),
            skills: vec![],
            target_role: "Data Analyst".to_string(),
            daily_hours: 1,
        };
        let prompt = build_roadmap_prompt(&profile);
        assert!(prompt.contains("Skills: \n"));
    }
}
