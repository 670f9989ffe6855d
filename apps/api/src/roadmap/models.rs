use serde::{Deserialize, Serialize};

/// User-supplied input describing current skills and the target role.
///
/// Only presence and type correctness are enforced; values are opaque and
/// flow straight into the prompt text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerProfile {
    /// The user's current degree or major.
    pub degree: String,
    /// List of current skills.
    pub skills: Vec<String>,
    /// The role the user wants to achieve.
    pub target_role: String,
    /// Hours available per day for study.
    pub daily_hours: u32,
}

/// One week of the study plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlan {
    pub week_number: u32,
    pub focus_area: String,
    pub tasks: Vec<String>,
}

/// The structured study plan returned by the model.
///
/// Deserialization doubles as shape validation: a response missing any field
/// (or with a wrong type) fails to parse and is treated as a failed
/// generation. There is no partial-roadmap return path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRoadmap {
    /// A brief encouraging summary of the plan.
    pub summary: String,
    /// Skills needed for the target role that are missing.
    pub skill_gaps: Vec<String>,
    /// 4-week study plan.
    pub study_plan: Vec<WeeklyPlan>,
    /// Curated list of 3-5 high quality, free learning resources.
    pub learning_resources: Vec<String>,
    /// Immediate next 3 actions to take.
    pub next_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_from_request_body() {
        let json = serde_json::json!({
            "degree": "CS",
            "skills": ["Python"],
            "target_role": "Backend Engineer",
            "daily_hours": 2
        });
        let profile: CareerProfile = serde_json::from_value(json).unwrap();
        assert_eq!(profile.degree, "CS");
        assert_eq!(profile.skills, vec!["Python"]);
        assert_eq!(profile.daily_hours, 2);
    }

    #[test]
    fn test_profile_missing_field_fails() {
        let json = serde_json::json!({
            "degree": "CS",
            "skills": ["Python"],
            "daily_hours": 2
        });
        let result: Result<CareerProfile, _> = serde_json::from_value(json);
        assert!(result.is_err(), "profile without target_role must fail");
    }

    #[test]
    fn test_roadmap_missing_field_fails_shape_validation() {
        // No next_steps — must be a failed generation, not a partial roadmap
        let json = serde_json::json!({
            "summary": "You can do this.",
            "skill_gaps": ["SQL"],
            "study_plan": [],
            "learning_resources": ["MDN"]
        });
        let result: Result<CareerRoadmap, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_roadmap_wrong_type_fails_shape_validation() {
        let json = serde_json::json!({
            "summary": "ok",
            "skill_gaps": "SQL",
            "study_plan": [],
            "learning_resources": [],
            "next_steps": []
        });
        let result: Result<CareerRoadmap, _> = serde_json::from_value(json);
        assert!(result.is_err(), "skill_gaps as a bare string must fail");
    }

    #[test]
    fn test_roadmap_round_trips_unchanged() {
        let roadmap = CareerRoadmap {
            summary: "A focused month gets you interview-ready.".to_string(),
            skill_gaps: vec!["REST APIs".to_string(), "SQL".to_string()],
            study_plan: vec![WeeklyPlan {
                week_number: 1,
                focus_area: "Fundamentals".to_string(),
                tasks: vec!["Finish the HTTP crash course".to_string()],
            }],
            learning_resources: vec!["freeCodeCamp".to_string()],
            next_steps: vec!["Set up a daily schedule".to_string()],
        };
        let json = serde_json::to_string(&roadmap).unwrap();
        let recovered: CareerRoadmap = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered.study_plan[0].week_number, 1);
        assert_eq!(recovered.summary, roadmap.summary);
    }
}
