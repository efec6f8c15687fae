use super::*;

fn task_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "createdDate": "2021-02-01T10:00:00.000Z",
        "updatedDate": "2021-02-03T12:30:00.000Z",
        "name": "Songbird",
        "descriptionUrl": "https://github.com/rolling-scopes-school/tasks/songbird.md",
        "description": null,
        "githubPrRequired": true,
        "verification": "manual",
        "type": "jstask",
        "githubRepoName": "songbird",
        "sourceGithubRepoUrl": "https://github.com/rolling-scopes-school/songbird",
        "tags": ["js", "stage2"]
    })
}

// =============================================================
// Task
// =============================================================

#[test]
fn task_decodes_server_representation() {
    let task: Task = serde_json::from_value(task_json(17)).unwrap();
    assert_eq!(task.id, 17);
    assert_eq!(task.name, "Songbird");
    assert_eq!(task.description, None);
    assert_eq!(task.github_pr_required, Some(true));
    assert_eq!(task.verification, Verification::Manual);
    assert_eq!(task.task_type, TaskType::JsTask);
    assert_eq!(task.tags, vec!["js".to_owned(), "stage2".to_owned()]);
}

#[test]
fn task_decodes_without_tags() {
    let mut json = task_json(1);
    json.as_object_mut().unwrap().remove("tags");
    let task: Task = serde_json::from_value(json).unwrap();
    assert!(task.tags.is_empty());
}

#[test]
fn task_with_unknown_type_is_rejected() {
    let mut json = task_json(1);
    json["type"] = serde_json::json!("stage-interview");
    assert!(serde_json::from_value::<Task>(json).is_err());
}

#[test]
fn task_type_uses_colon_wire_names() {
    assert_eq!(serde_json::to_value(TaskType::CvMarkdown).unwrap(), "cv:markdown");
    assert_eq!(serde_json::to_value(TaskType::CodewarsStage2).unwrap(), "codewars:stage2");
    assert_eq!(serde_json::from_value::<TaskType>(serde_json::json!("codejam")).unwrap(), TaskType::Codejam);
}

#[test]
fn task_patch_omits_unset_fields() {
    let patch = TaskPatch {
        name: Some("Virtual keyboard".to_owned()),
        verification: Some(Verification::Auto),
        task_type: Some(TaskType::HtmlTask),
        ..TaskPatch::default()
    };
    assert_eq!(
        serde_json::to_value(&patch).unwrap(),
        serde_json::json!({ "name": "Virtual keyboard", "verification": "auto", "type": "htmltask" })
    );
}

#[test]
fn empty_task_patch_is_empty_object() {
    assert_eq!(serde_json::to_value(TaskPatch::default()).unwrap(), serde_json::json!({}));
}

// =============================================================
// Feedback
// =============================================================

#[test]
fn create_feedback_serializes_expected_shape() {
    let payload = CreateStudentFeedback {
        recommendation: Recommendation::NotHire,
        content: FeedbackContent {
            suggestions: String::new(),
            recommendation_comment: "Solid".to_owned(),
            soft_skills: vec![SoftSkillEntry { id: SoftSkillId::SelfImprove, value: SoftSkillValue::Great }],
        },
        english_level: EnglishLevel::B2,
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({
            "recommendation": "notHire",
            "content": {
                "suggestions": "",
                "recommendationComment": "Solid",
                "softSkills": [{ "id": "skill.soft.self-improve", "value": "Great" }]
            },
            "englishLevel": "b2"
        })
    );
}

#[test]
fn english_level_default_is_unknown() {
    assert_eq!(EnglishLevel::default(), EnglishLevel::Unknown);
    assert_eq!(serde_json::to_value(EnglishLevel::Unknown).unwrap(), "unknown");
}

#[test]
fn english_level_selectable_excludes_unknown() {
    assert!(!EnglishLevel::SELECTABLE.contains(&EnglishLevel::Unknown));
    assert_eq!(EnglishLevel::SELECTABLE[0].label(), "A1");
    assert_eq!(EnglishLevel::SELECTABLE[5].label(), "C2");
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_decodes_optional_mentor_id() {
    let session: Session = serde_json::from_value(serde_json::json!({
        "githubId": "mentor-1",
        "courses": [
            { "courseId": 11, "alias": "js-fe-2021", "name": "JS FE", "mentorId": 501 },
            { "courseId": 12, "alias": "nodejs-2021", "name": "Node.js" }
        ]
    }))
    .unwrap();
    assert_eq!(session.courses[0].mentor_id, Some(501));
    assert_eq!(session.courses[1].mentor_id, None);
}
