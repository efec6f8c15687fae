//! Signed-in user session and course context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once by the app shell from `/api/session` and provided via context.
//! Course pages resolve their course from the `course` query alias and look
//! up the user's mentor id for that course here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{CourseRole, Session};

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    pub fn course_by_alias(&self, alias: &str) -> Option<&CourseRole> {
        self.session.as_ref()?.courses.iter().find(|c| c.alias == alias)
    }

    pub fn github_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.github_id.as_str())
    }
}

/// Mentor id the user holds in `course_id`, if they mentor there.
pub fn mentor_id(session: &Session, course_id: i64) -> Option<i64> {
    session
        .courses
        .iter()
        .find(|c| c.course_id == course_id)
        .and_then(|c| c.mentor_id)
}
