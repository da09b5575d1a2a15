use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_EXPERIENCE_YEARS: u8 = 50;

/// The fixed set of professions offered by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    #[serde(rename = "Data Analyst")]
    DataAnalyst,
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Student")]
    Student,
}

impl Profession {
    pub const ALL: [Profession; 4] = [
        Profession::DataAnalyst,
        Profession::SoftwareEngineer,
        Profession::ProjectManager,
        Profession::Student,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Profession::DataAnalyst => "Data Analyst",
            Profession::SoftwareEngineer => "Software Engineer",
            Profession::ProjectManager => "Project Manager",
            Profession::Student => "Student",
        }
    }
}

/// Industries a user can pick as career interests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "IT")]
    It,
    Healthcare,
    Finance,
    Education,
    Engineering,
    Others,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::It,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Engineering,
        Industry::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Industry::It => "IT",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::Engineering => "Engineering",
            Industry::Others => "Others",
        }
    }
}

/// The user's self-reported career identity. Set once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub profession: Profession,
    pub experience_years: u8,
    pub career_goals: String,
    /// Selection order is kept; duplicates are dropped on intake.
    pub career_interests: Vec<Industry>,
}

/// Raw intake form as submitted by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: String,
    pub profession: Profession,
    #[serde(default)]
    pub experience_years: u8,
    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub career_interests: Vec<Industry>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Please fill all required fields.")]
    MissingRequired,

    #[error("experience_years must be between 0 and 50, got {0}")]
    ExperienceOutOfRange(u8),
}

impl ProfileForm {
    /// Validates required fields and normalizes the form into a `Profile`.
    pub fn into_profile(self) -> Result<Profile, ProfileError> {
        let name = self.name.trim();
        let career_goals = self.career_goals.trim();
        if name.is_empty() || career_goals.is_empty() {
            return Err(ProfileError::MissingRequired);
        }
        if self.experience_years > MAX_EXPERIENCE_YEARS {
            return Err(ProfileError::ExperienceOutOfRange(self.experience_years));
        }

        let mut career_interests = Vec::with_capacity(self.career_interests.len());
        for industry in self.career_interests {
            if !career_interests.contains(&industry) {
                career_interests.push(industry);
            }
        }

        Ok(Profile {
            name: name.to_string(),
            profession: self.profession,
            experience_years: self.experience_years,
            career_goals: career_goals.to_string(),
            career_interests,
        })
    }
}
