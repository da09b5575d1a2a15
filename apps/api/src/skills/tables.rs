//! Fixed profession and industry skill tables.

use crate::models::profile::{Industry, Profession};

pub fn profession_skills(profession: Profession) -> &'static [&'static str] {
    match profession {
        Profession::DataAnalyst => &["Python", "SQL", "Data Visualization", "Statistics"],
        Profession::SoftwareEngineer => {
            &["Python", "Algorithms", "Data Structures", "System Design"]
        }
        Profession::ProjectManager => {
            &["Leadership", "Project Planning", "Risk Management", "Agile"]
        }
        Profession::Student => &["Time Management", "Research", "Presentation Skills"],
    }
}

pub fn industry_skills(industry: Industry) -> &'static [&'static str] {
    match industry {
        Industry::It => &["Cloud Computing", "Machine Learning", "Python"],
        Industry::Healthcare => &["Medical Terminology", "Patient Care", "Data Compliance"],
        Industry::Finance => &["Financial Modeling", "Risk Analysis", "Excel"],
        Industry::Education => &["Curriculum Planning", "Teaching Skills", "Assessment Design"],
        Industry::Engineering => &["CAD", "Mathematics", "Project Management"],
        Industry::Others => &[],
    }
}
