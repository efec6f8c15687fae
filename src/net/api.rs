//! REST helpers for the mentor-facing endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; pages decide whether a failure
//! becomes a notice, an empty list, or a redirect.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use super::http::{ApiError, ApiRequest, Transport, send_json};
use super::types::{CreateStudentFeedback, DataEnvelope, MentorStudent, Session};

const SESSION_ENDPOINT: &str = "/api/session";

fn mentor_students_endpoint(mentor_id: i64) -> String {
    format!("/api/mentor/{mentor_id}/students")
}

fn student_feedback_endpoint(course_id: i64, student_id: i64) -> String {
    format!("/api/course/{course_id}/students/{student_id}/feedbacks")
}

/// Identifier of a freshly created feedback record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedFeedback {
    pub id: i64,
}

pub struct PortalApi<T> {
    transport: T,
}

impl<T: Transport> PortalApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch the signed-in user's session from `/api/session`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn fetch_session(&self) -> Result<Session, ApiError> {
        let envelope: DataEnvelope<Session> = send_json(&self.transport, ApiRequest::get(SESSION_ENDPOINT)).await?;
        Ok(envelope.data)
    }

    /// Fetch the students assigned to `mentor_id`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn fetch_mentor_students(&self, mentor_id: i64) -> Result<Vec<MentorStudent>, ApiError> {
        let request = ApiRequest::get(mentor_students_endpoint(mentor_id));
        let envelope: DataEnvelope<Vec<MentorStudent>> = send_json(&self.transport, request).await?;
        Ok(envelope.data)
    }

    /// Create a feedback for `student_id` in `course_id`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn create_student_feedback(
        &self,
        course_id: i64,
        student_id: i64,
        payload: &CreateStudentFeedback,
    ) -> Result<CreatedFeedback, ApiError> {
        let request = ApiRequest::post(student_feedback_endpoint(course_id, student_id), payload)?;
        send_json(&self.transport, request).await
    }
}
