use chrono::{DateTime, SecondsFormat, Utc};

use crate::models::resume::{JobEntry, ProjectEntry, ResumeData};
use crate::render::skeleton::{JOB_ENTRY, PROJECT_ENTRY, RESUME_SKELETON, STYLESHEET};
use crate::render::template::{fill, RenderContext};
use crate::render::{bullet_items, contact_line, escape_html, ProfileLink, RenderError};

/// Renders a résumé into a complete HTML document.
///
/// Every job and project entry supplied is rendered, including wholly empty ones,
/// and the Experience and Projects headings are always present.
pub fn render_resume(resume: &ResumeData, generated_at: DateTime<Utc>) -> Result<String, RenderError> {
    let resume = resume.normalized();
    let context = build_context(&resume, generated_at)?;
    fill(RESUME_SKELETON, &context)
}

fn build_context(resume: &ResumeData, generated_at: DateTime<Utc>) -> Result<RenderContext, RenderError> {
    let personal = &resume.personal;
    if personal.name.is_empty() {
        return Err(RenderError::MissingField("name"));
    }

    let mut ctx = RenderContext::new();
    ctx.insert_text(
        "generated_at",
        &generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    );
    ctx.insert_markup("stylesheet", STYLESHEET);
    ctx.insert_text("name", &personal.name);
    ctx.insert_markup(
        "contact_line",
        contact_line(
            &personal.phone,
            &personal.email,
            &[
                ProfileLink {
                    field: "linkedin",
                    url: personal.linkedin.as_deref(),
                },
                ProfileLink {
                    field: "github",
                    url: personal.github.as_deref(),
                },
            ],
        )?,
    );

    let education = &resume.education;
    ctx.insert_text("university", &education.university);
    ctx.insert_text("education_location", &education.location);
    ctx.insert_text("degree", &education.degree);
    ctx.insert_markup(
        "gpa",
        education
            .gpa
            .as_deref()
            .map(|gpa| format!(", GPA: {}", escape_html(gpa)))
            .unwrap_or_default(),
    );
    ctx.insert_text("education_dates", &education.dates);
    ctx.insert_markup("education_bullets", bullet_items(&education.bullets));

    ctx.insert_markup("skills", skill_items(resume));

    let mut experience = String::new();
    for job in &resume.jobs {
        experience.push_str(&render_job(job)?);
    }
    ctx.insert_markup("experience_entries", experience);

    let mut projects = String::new();
    for project in &resume.projects {
        projects.push_str(&render_project(project)?);
    }
    ctx.insert_markup("project_entries", projects);

    Ok(ctx)
}

fn skill_items(resume: &ResumeData) -> String {
    resume
        .skills
        .iter()
        .map(|(category, items)| {
            format!(
                "<li><strong>{}:</strong> {}</li>",
                escape_html(category),
                escape_html(&items.join(", "))
            )
        })
        .collect()
}

fn render_job(job: &JobEntry) -> Result<String, RenderError> {
    let mut ctx = RenderContext::new();
    ctx.insert_text("title", &job.title);
    ctx.insert_text("dates", &job.dates);
    ctx.insert_text("company", &job.company);
    ctx.insert_text("location", &job.location);
    ctx.insert_markup("bullets", bullet_items(&job.bullets));
    fill(JOB_ENTRY, &ctx)
}

fn render_project(project: &ProjectEntry) -> Result<String, RenderError> {
    let mut ctx = RenderContext::new();
    ctx.insert_text("name", &project.name);
    ctx.insert_text("date", &project.date);
    ctx.insert_text("context", &project.context);
    ctx.insert_markup("bullets", bullet_items(&project.bullets));
    fill(PROJECT_ENTRY, &ctx)
}
