//! Students assigned to the signed-in mentor.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use crate::net::types::MentorStudent;

/// `items` stays `None` until the first load settles.
#[derive(Clone, Debug, Default)]
pub struct MentorStudentsState {
    pub items: Option<Vec<MentorStudent>>,
    pub loading: bool,
}

impl MentorStudentsState {
    /// Loaded and empty: the mentor has nobody to review.
    pub fn no_data(&self) -> bool {
        self.items.as_ref().is_some_and(Vec::is_empty)
    }
}
