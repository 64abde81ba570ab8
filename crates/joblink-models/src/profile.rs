//! User and company profiles.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Profile of an Employee or Employer account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserProfile {
    #[serde(default)]
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// Employee-specific free-form skill list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<i32>,

    /// Employer-specific
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

/// Profile of a Company account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CompanyProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    #[serde(default)]
    pub company_name: String,

    #[serde(default)]
    pub company_email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
}

/// Publicly visible slice of any account's profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PublicProfile {
    pub id: i64,

    #[serde(default)]
    pub name: String,

    #[serde(default, alias = "job_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,

    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// One education row on a profile.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EducationEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub school: String,

    #[serde(default)]
    pub degree: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,

    pub start_year: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_year: Option<i32>,

    #[serde(default)]
    pub is_current: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Capability flags the backend computes for the current user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct UserPermissions {
    #[serde(default)]
    pub can_create_jobs: bool,
    #[serde(default)]
    pub can_apply_to_jobs: bool,
    #[serde(default)]
    pub can_view_applications: bool,
    #[serde(default, alias = "job_role", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_profile_defaults() {
        let profile: PublicProfile = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(profile.education.is_empty());
        assert!(profile.role.is_none());
    }

    #[test]
    fn test_education_entry_round_trip() {
        let entry = EducationEntry {
            id: None,
            school: "MIT".into(),
            degree: "BSc".into(),
            field_of_study: Some("CS".into()),
            start_year: 2019,
            end_year: Some(2023),
            is_current: false,
            description: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: EducationEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.school, "MIT");
        assert_eq!(back.end_year, Some(2023));
    }
}
