use super::*;

fn session() -> Session {
    Session {
        github_id: "mentor-1".to_owned(),
        courses: vec![
            CourseRole { course_id: 11, alias: "js-fe-2021".to_owned(), name: "JS FE".to_owned(), mentor_id: Some(501) },
            CourseRole { course_id: 12, alias: "nodejs-2021".to_owned(), name: "Node.js".to_owned(), mentor_id: None },
        ],
    }
}

#[test]
fn mentor_id_found_for_mentored_course() {
    assert_eq!(mentor_id(&session(), 11), Some(501));
}

#[test]
fn mentor_id_missing_for_student_only_or_unknown_course() {
    assert_eq!(mentor_id(&session(), 12), None);
    assert_eq!(mentor_id(&session(), 99), None);
}

#[test]
fn course_by_alias_requires_loaded_session() {
    let empty = SessionState::default();
    assert!(empty.course_by_alias("js-fe-2021").is_none());
    assert_eq!(empty.github_id(), None);

    let loaded = SessionState { session: Some(session()), loading: false };
    assert_eq!(loaded.course_by_alias("nodejs-2021").map(|c| c.course_id), Some(12));
    assert_eq!(loaded.github_id(), Some("mentor-1"));
}
