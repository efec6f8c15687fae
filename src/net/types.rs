//! Wire DTOs for the portal REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Closed enumerations are
//! real Rust enums so an unknown value fails decoding instead of leaking
//! through as a stray string.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// `{ "data": ... }` wrapper used by the task endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// How a task submission is checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verification {
    Manual,
    Auto,
}

/// Kind of task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    #[serde(rename = "jstask")]
    JsTask,
    #[serde(rename = "htmltask")]
    HtmlTask,
    #[serde(rename = "htmlcssacademy")]
    HtmlCssAcademy,
    #[serde(rename = "cv:markdown")]
    CvMarkdown,
    #[serde(rename = "cv:html")]
    CvHtml,
    #[serde(rename = "codewars:stage1")]
    CodewarsStage1,
    #[serde(rename = "codewars:stage2")]
    CodewarsStage2,
    #[serde(rename = "test")]
    Test,
    #[serde(rename = "interview")]
    Interview,
    #[serde(rename = "codejam")]
    Codejam,
}

/// A task as returned by `/api/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub created_date: String,
    pub updated_date: String,
    pub name: String,
    pub description_url: Option<String>,
    pub description: Option<String>,
    pub github_pr_required: Option<bool>,
    pub verification: Verification,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub github_repo_name: String,
    pub source_github_repo_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial task body for create/update. Unset fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_pr_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<Verification>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_github_repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Hire / not-hire verdict attached to a feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    Hire,
    NotHire,
}

/// Approximate English level. `Unknown` is sent when the mentor did not pick one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishLevel {
    #[default]
    Unknown,
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl EnglishLevel {
    /// Levels offered in the feedback form, lowest first.
    pub const SELECTABLE: [EnglishLevel; 6] = [
        EnglishLevel::A1,
        EnglishLevel::A2,
        EnglishLevel::B1,
        EnglishLevel::B2,
        EnglishLevel::C1,
        EnglishLevel::C2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            EnglishLevel::Unknown => "UNKNOWN",
            EnglishLevel::A1 => "A1",
            EnglishLevel::A2 => "A2",
            EnglishLevel::B1 => "B1",
            EnglishLevel::B2 => "B2",
            EnglishLevel::C1 => "C1",
            EnglishLevel::C2 => "C2",
        }
    }
}

/// Soft skill identifiers understood by the feedback endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoftSkillId {
    #[serde(rename = "skill.soft.responsible")]
    Responsible,
    #[serde(rename = "skill.soft.team")]
    Team,
    #[serde(rename = "skill.soft.communicable")]
    Communicable,
    #[serde(rename = "skill.soft.self-improve")]
    SelfImprove,
}

/// Qualitative soft skill level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoftSkillValue {
    #[default]
    None,
    Poor,
    Fair,
    Good,
    Great,
    Excellent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftSkillEntry {
    pub id: SoftSkillId,
    pub value: SoftSkillValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackContent {
    pub suggestions: String,
    pub recommendation_comment: String,
    pub soft_skills: Vec<SoftSkillEntry>,
}

/// Body of a create-feedback request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentFeedback {
    pub recommendation: Recommendation,
    pub content: FeedbackContent,
    pub english_level: EnglishLevel,
}

/// A student assigned to the current mentor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorStudent {
    pub id: i64,
    pub github_id: String,
    pub name: String,
}

/// Course membership entry from `/api/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRole {
    pub course_id: i64,
    pub alias: String,
    pub name: String,
    #[serde(default)]
    pub mentor_id: Option<i64>,
}

/// The signed-in user as returned by `/api/session`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub github_id: String,
    #[serde(default)]
    pub courses: Vec<CourseRole>,
}
