//! Route builders for in-app navigation.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Mentor's student list for a course.
pub fn mentor_students_route(course_alias: &str) -> String {
    format!("/course/mentor/students?course={course_alias}")
}
