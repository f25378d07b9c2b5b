use serde::{Deserialize, Serialize};

/// A job posting as supplied by the job-corpus provider. Read-only input to the matcher.
///
/// Skill lists keep whatever casing the provider used; the matcher normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_logo: Option<String>,
    #[serde(default)]
    pub company_website: Option<String>,
}

impl JobPosting {
    /// Minimal posting with only the fields the scorer needs. Employer and listing details
    /// stay empty.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        required_skills: Vec<String>,
        preferred_skills: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            required_skills,
            preferred_skills,
            experience_level: String::new(),
            location: None,
            salary_range: None,
            company_id: None,
            company_name: None,
            company_logo: None,
            company_website: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_json_fills_defaults() {
        let job: JobPosting = serde_json::from_str(r#"{"id": 7, "title": "Backend Developer"}"#)
            .unwrap();
        assert_eq!(job.id, 7);
        assert!(job.required_skills.is_empty());
        assert!(job.preferred_skills.is_empty());
        assert_eq!(job.description, "");
        assert!(job.location.is_none());
        assert!(job.company_name.is_none());
    }

    #[test]
    fn test_full_json_deserializes_correctly() {
        let json = r#"{
            "id": 3,
            "title": "DevOps Engineer",
            "description": "Automate deployments and infrastructure.",
            "required_skills": ["AWS", "Docker"],
            "preferred_skills": ["terraform"],
            "experience_level": "Mid",
            "location": "Austin, TX",
            "salary_range": "$120k - $150k",
            "company_id": 4,
            "company_name": "Amazon",
            "company_logo": "",
            "company_website": "https://amazon.com",
            "posted_by": "admin"
        }"#;

        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert_eq!(job.required_skills, vec!["AWS", "Docker"]);
        assert_eq!(job.location.as_deref(), Some("Austin, TX"));
        assert_eq!(job.company_id, Some(4));
        assert_eq!(job.company_website.as_deref(), Some("https://amazon.com"));
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let result = serde_json::from_str::<JobPosting>(r#"{"id": 1}"#);
        assert!(result.is_err());
    }
}
