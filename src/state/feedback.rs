//! Student feedback form state, validation and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The feedback page keeps a [`FeedbackForm`] in a signal and hands it to
//! [`submit_feedback`] on submit. Submission never mutates the form, so a
//! failed request leaves every entered value in place.
//!
//! DESIGN
//! ======
//! Star ratings are converted with a lookup table, not arithmetic, so the
//! wire levels can be audited at a glance.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use std::collections::BTreeMap;

use crate::net::api::PortalApi;
use crate::net::http::Transport;
use crate::net::types::{
    CreateStudentFeedback, EnglishLevel, FeedbackContent, MentorStudent, Recommendation, SoftSkillEntry,
    SoftSkillId, SoftSkillValue,
};
use crate::state::notice::NoticeKind;
use crate::util::routes::mentor_students_route;

pub const SUCCESS_MESSAGE: &str = "Feedback successfully sent";
pub const ERROR_MESSAGE: &str = "Error occurred while creating feedback. Please try later.";
pub const REQUIRED_MESSAGE: &str = "Required";

/// Soft skills rated on the form, in display order.
pub const SOFT_SKILLS: [(SoftSkillId, &str); 4] = [
    (SoftSkillId::Responsible, "Responsible"),
    (SoftSkillId::Team, "Good team player"),
    (SoftSkillId::Communicable, "Communicable"),
    (SoftSkillId::SelfImprove, "Self-improving"),
];

/// Highest star rating the form offers.
pub const MAX_RATING: u8 = 5;

// Index = star count.
const RATING_LEVELS: [SoftSkillValue; 6] = [
    SoftSkillValue::None,
    SoftSkillValue::Poor,
    SoftSkillValue::Fair,
    SoftSkillValue::Good,
    SoftSkillValue::Great,
    SoftSkillValue::Excellent,
];

/// Map a star rating to its qualitative level. Unrated or out-of-range is `None`.
pub fn convert_soft_skill_value(rating: Option<u8>) -> SoftSkillValue {
    rating
        .and_then(|r| RATING_LEVELS.get(usize::from(r)).copied())
        .unwrap_or(SoftSkillValue::None)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    StudentId,
    Recommendation,
    RecommendationComment,
}

pub type FormErrors = BTreeMap<FormField, &'static str>;

/// Raw values as entered on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub student_id: Option<i64>,
    pub recommendation: Option<Recommendation>,
    pub recommendation_comment: Option<String>,
    pub suggestions: Option<String>,
    pub english_level: Option<EnglishLevel>,
    pub ratings: BTreeMap<SoftSkillId, u8>,
}

impl FeedbackForm {
    /// Required-field check; an empty map means the form may be sent.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.student_id.is_none() {
            errors.insert(FormField::StudentId, REQUIRED_MESSAGE);
        }
        if self.recommendation.is_none() {
            errors.insert(FormField::Recommendation, REQUIRED_MESSAGE);
        }
        if self.recommendation_comment.as_deref().is_none_or(str::is_empty) {
            errors.insert(FormField::RecommendationComment, REQUIRED_MESSAGE);
        }
        errors
    }

    /// Validate and build the request body together with the target student.
    ///
    /// # Errors
    ///
    /// Returns the per-field errors when a required value is missing.
    pub fn to_payload(&self) -> Result<(i64, CreateStudentFeedback), FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let (Some(student_id), Some(recommendation), Some(comment)) =
            (self.student_id, self.recommendation, self.recommendation_comment.clone())
        else {
            return Err(errors);
        };

        let soft_skills = SOFT_SKILLS
            .iter()
            .map(|(id, _)| SoftSkillEntry {
                id: *id,
                value: convert_soft_skill_value(self.ratings.get(id).copied()),
            })
            .collect();

        let payload = CreateStudentFeedback {
            recommendation,
            content: FeedbackContent {
                suggestions: self.suggestions.clone().unwrap_or_default(),
                recommendation_comment: comment,
                soft_skills,
            },
            english_level: self.english_level.unwrap_or(EnglishLevel::Unknown),
        };
        Ok((student_id, payload))
    }

    pub fn set_rating(&mut self, id: SoftSkillId, rating: u8) {
        if rating == 0 {
            self.ratings.remove(&id);
        } else {
            self.ratings.insert(id, rating.min(MAX_RATING));
        }
    }
}

/// Student to pre-select once the mentor's student list has loaded.
///
/// `None` while the list is loading or empty; otherwise the numeric
/// `studentId` query value, or no selection when it is absent or not a number.
pub fn preselected_student(query_student_id: Option<&str>, students: Option<&[MentorStudent]>) -> Option<Option<i64>> {
    let students = students?;
    if students.is_empty() {
        return None;
    }
    Some(query_student_id.and_then(|raw| raw.trim().parse::<i64>().ok()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// What pressing submit should do, decided before anything is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// A request is already in flight; the press is ignored.
    Busy,
    /// Required values are missing; show these errors and stay idle.
    Invalid(FormErrors),
    /// Clear shown errors, enter `Submitting` and send.
    Send,
}

/// Gate a submit press on the current status and form contents.
pub fn begin_submit(status: SubmitStatus, form: &FeedbackForm) -> SubmitAttempt {
    if status == SubmitStatus::Submitting {
        return SubmitAttempt::Busy;
    }
    let errors = form.validate();
    if errors.is_empty() { SubmitAttempt::Send } else { SubmitAttempt::Invalid(errors) }
}

/// Result of one submit attempt, for the page to apply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blocked locally; nothing was sent.
    Invalid(FormErrors),
    /// Stored; navigate to `redirect`.
    Sent { redirect: String },
    /// The request failed; stay on the page.
    Failed,
}

impl SubmitOutcome {
    pub fn status(&self) -> SubmitStatus {
        match self {
            SubmitOutcome::Invalid(_) => SubmitStatus::Idle,
            SubmitOutcome::Sent { .. } => SubmitStatus::Success,
            SubmitOutcome::Failed => SubmitStatus::Failed,
        }
    }

    /// Status the page rests in after applying this outcome.
    ///
    /// A failure passes straight back to `Idle` so the mentor can retry.
    pub fn settled_status(&self) -> SubmitStatus {
        match self.status() {
            SubmitStatus::Failed => SubmitStatus::Idle,
            other => other,
        }
    }

    pub fn notice(&self) -> Option<(NoticeKind, &'static str)> {
        match self {
            SubmitOutcome::Invalid(_) => None,
            SubmitOutcome::Sent { .. } => Some((NoticeKind::Success, SUCCESS_MESSAGE)),
            SubmitOutcome::Failed => Some((NoticeKind::Error, ERROR_MESSAGE)),
        }
    }

    pub fn redirect(&self) -> Option<&str> {
        match self {
            SubmitOutcome::Sent { redirect } => Some(redirect),
            _ => None,
        }
    }
}

/// Course the feedback is filed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackCourse {
    pub id: i64,
    pub alias: String,
}

/// Validate `form`, send it, and describe what the page should do next.
///
/// Failure detail is logged, never shown.
pub async fn submit_feedback<T: Transport>(
    api: &PortalApi<T>,
    course: &FeedbackCourse,
    form: &FeedbackForm,
) -> SubmitOutcome {
    let (student_id, payload) = match form.to_payload() {
        Ok(built) => built,
        Err(errors) => return SubmitOutcome::Invalid(errors),
    };
    match api.create_student_feedback(course.id, student_id, &payload).await {
        Ok(created) => {
            log::info!("feedback created: id={} student={student_id} course={}", created.id, course.alias);
            SubmitOutcome::Sent { redirect: mentor_students_route(&course.alias) }
        }
        Err(e) => {
            log::warn!("feedback submit failed: student={student_id} course={} error={e}", course.alias);
            SubmitOutcome::Failed
        }
    }
}
