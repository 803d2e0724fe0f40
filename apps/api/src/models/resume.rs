use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Header block: who the résumé belongs to and how to reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub university: String,
    pub location: String,
    pub degree: String,
    /// Kept as text so "3.8/4.0" and "3.80" render exactly as typed.
    pub gpa: Option<String>,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub dates: String,
    pub bullets: Vec<String>,
    /// Ask the suggestion service to phrase this entry's bullets.
    pub assist: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub context: String,
    pub date: String,
    pub bullets: Vec<String>,
    pub assist: bool,
}

/// Everything the résumé form collects.
///
/// Jobs and projects are open-ended lists; the classic form submits two slots of each.
/// Skills are keyed by category and iterate in category order so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    pub personal: PersonalInfo,
    pub education: Education,
    pub jobs: Vec<JobEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: BTreeMap<String, Vec<String>>,
}

impl ResumeData {
    /// Returns a copy with every bullet trimmed and blank bullets dropped,
    /// blank optional fields collapsed to `None` and empty skill groups removed.
    pub fn normalized(&self) -> ResumeData {
        let personal = PersonalInfo {
            name: self.personal.name.trim().to_string(),
            phone: self.personal.phone.trim().to_string(),
            email: self.personal.email.trim().to_string(),
            linkedin: non_blank(self.personal.linkedin.as_deref()),
            github: non_blank(self.personal.github.as_deref()),
        };

        let education = Education {
            gpa: non_blank(self.education.gpa.as_deref()),
            bullets: clean_bullets(&self.education.bullets),
            ..self.education.clone()
        };

        let jobs = self
            .jobs
            .iter()
            .map(|job| JobEntry {
                bullets: clean_bullets(&job.bullets),
                ..job.clone()
            })
            .collect();

        let projects = self
            .projects
            .iter()
            .map(|project| ProjectEntry {
                bullets: clean_bullets(&project.bullets),
                ..project.clone()
            })
            .collect();

        let skills = self
            .skills
            .iter()
            .filter_map(|(category, items)| {
                let category = category.trim();
                let items = clean_bullets(items);
                (!category.is_empty() && !items.is_empty()).then(|| (category.to_string(), items))
            })
            .collect();

        ResumeData {
            personal,
            education,
            jobs,
            projects,
            skills,
        }
    }
}

/// Trims each line and drops the ones left empty, preserving order.
pub fn clean_bullets<S: AsRef<str>>(bullets: &[S]) -> Vec<String> {
    bullets
        .iter()
        .map(|b| b.as_ref().trim())
        .filter(|b| !b.is_empty())
        .map(String::from)
        .collect()
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
