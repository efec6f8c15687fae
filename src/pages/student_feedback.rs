//! Mentor feedback ("recommendation letter") page for one student.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/course/mentor/feedback?course={alias}[&studentId={id}]`.
//! Loads the mentor's students for the course, pre-selects the student named
//! in the query once that list is non-empty, and submits the form through
//! [`submit_feedback`]. Success navigates to the mentor's student list; a
//! failure shows a generic notice and leaves the form as entered.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(feature = "csr")]
use crate::components::notice_toast::show_notice;
use crate::components::page_layout::PageLayout;
use crate::components::rating_stars::RatingStars;
use crate::components::user_search::UserSearch;
use crate::net::types::{CourseRole, EnglishLevel, Recommendation};
use crate::state::feedback::{
    FeedbackCourse, FeedbackForm, FormErrors, FormField, SOFT_SKILLS, SubmitAttempt, SubmitStatus, begin_submit,
    preselected_student,
};
#[cfg(feature = "csr")]
use crate::state::feedback::{SubmitOutcome, submit_feedback};
use crate::state::notice::NoticeState;
use crate::state::session::{SessionState, mentor_id};
use crate::state::students::MentorStudentsState;

#[cfg(feature = "csr")]
fn portal_api() -> crate::net::api::PortalApi<crate::net::http::GlooTransport> {
    crate::net::api::PortalApi::new(crate::net::http::GlooTransport::default())
}

fn toggle_class(active: bool) -> &'static str {
    if active { "toggle-button toggle-button--active" } else { "toggle-button" }
}

#[component]
pub fn StudentFeedbackPage(course: CourseRole) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let form = RwSignal::new(FeedbackForm::default());
    let errors = RwSignal::new(FormErrors::new());
    let status = RwSignal::new(SubmitStatus::Idle);
    let students = RwSignal::new(MentorStudentsState { items: None, loading: true });

    let feedback_course = FeedbackCourse { id: course.course_id, alias: course.alias.clone() };
    let mentor = session.with_untracked(|s| s.session.as_ref().and_then(|s| mentor_id(s, course.course_id)));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let items = match mentor {
            Some(mentor_id) => match portal_api().fetch_mentor_students(mentor_id).await {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("mentor students load failed: mentor={mentor_id} error={e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        students.set(MentorStudentsState { items: Some(items), loading: false });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = mentor;
    }

    // Runs when the student list settles; later query edits do not override a manual pick.
    Effect::new(move || {
        let state = students.get();
        let raw = query.with_untracked(|q| q.get("studentId"));
        if let Some(selection) = preselected_student(raw.as_deref(), state.items.as_deref()) {
            form.update(|f| f.student_id = selection);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        match begin_submit(status.get_untracked(), &current) {
            SubmitAttempt::Busy => return,
            SubmitAttempt::Invalid(found) => {
                errors.set(found);
                return;
            }
            SubmitAttempt::Send => errors.set(FormErrors::new()),
        }
        status.set(SubmitStatus::Submitting);

        #[cfg(feature = "csr")]
        {
            let course = feedback_course.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = submit_feedback(&portal_api(), &course, &current).await;
                if let Some((kind, message)) = outcome.notice() {
                    show_notice(notices, kind, message);
                }
                if let SubmitOutcome::Invalid(found) = &outcome {
                    errors.set(found.clone());
                }
                status.set(outcome.settled_status());
                if let Some(route) = outcome.redirect() {
                    navigate(route, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, &feedback_course, &navigate, notices);
        }
    };

    let students_loading = Signal::derive(move || students.get().loading);
    let no_data = Signal::derive(move || students.get().no_data());
    let github_id = Signal::derive(move || session.get().github_id().map(str::to_owned));
    let student_options = Signal::derive(move || students.get().items.unwrap_or_default());
    let selected_student = Signal::derive(move || form.get().student_id);
    let on_select = Callback::new(move |id: Option<i64>| form.update(|f| f.student_id = id));

    view! {
        <PageLayout title="Recommendation Letter" loading=students_loading no_data=no_data github_id=github_id>
            <div class="alert alert--info">
                <div>"This feedback is very important for RS School process."</div>
                <div>"Please spend 5 minutes to complete it. Thank you!"</div>
            </div>
            <div class="alert alert--warning">
                "If you recommend to \"Hire\", we will attach the feedback to student's CV and it will be public."
            </div>
            <form class="feedback-form" on:submit=on_submit.clone()>
                <label class="feedback-form__label">"Student"</label>
                <UserSearch students=student_options selected=selected_student on_select=on_select/>
                <FieldError errors=errors field=FormField::StudentId/>

                <h5 class="feedback-form__section">"Recommended To"</h5>
                <div class="toggle-group">
                    <button
                        type="button"
                        class=move || toggle_class(form.get().recommendation == Some(Recommendation::Hire))
                        on:click=move |_| form.update(|f| f.recommendation = Some(Recommendation::Hire))
                    >
                        "Hire"
                    </button>
                    <button
                        type="button"
                        class=move || toggle_class(form.get().recommendation == Some(Recommendation::NotHire))
                        on:click=move |_| form.update(|f| f.recommendation = Some(Recommendation::NotHire))
                    >
                        "Not Hire"
                    </button>
                </div>
                <FieldError errors=errors field=FormField::Recommendation/>

                <label class="feedback-form__label">
                    "What was good"
                    <textarea
                        class="feedback-form__textarea"
                        rows="7"
                        prop:value=move || form.get().recommendation_comment.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.recommendation_comment = Some(value));
                        }
                    ></textarea>
                </label>
                <FieldError errors=errors field=FormField::RecommendationComment/>

                <label class="feedback-form__label">
                    "What could be improved"
                    <textarea
                        class="feedback-form__textarea"
                        rows="3"
                        prop:value=move || form.get().suggestions.unwrap_or_default()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.suggestions = Some(value));
                        }
                    ></textarea>
                </label>

                <h5 class="feedback-form__section">"English"</h5>
                <span class="feedback-form__hint">"Approximate English level"</span>
                <div class="toggle-group">
                    {EnglishLevel::SELECTABLE
                        .into_iter()
                        .map(|level| {
                            view! {
                                <button
                                    type="button"
                                    class=move || toggle_class(form.get().english_level == Some(level))
                                    on:click=move |_| form.update(|f| f.english_level = Some(level))
                                >
                                    {level.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <h5 class="feedback-form__section">"Soft Skills"</h5>
                <div class="feedback-form__skills">
                    {SOFT_SKILLS
                        .into_iter()
                        .map(|(id, name)| {
                            let value = Signal::derive(move || form.get().ratings.get(&id).copied().unwrap_or(0));
                            let on_rate = Callback::new(move |rating: u8| form.update(|f| f.set_rating(id, rating)));
                            view! {
                                <div class="feedback-form__skill">
                                    <span class="feedback-form__skill-name">{name}</span>
                                    <RatingStars value=value on_rate=on_rate/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || status.get() == SubmitStatus::Submitting
                >
                    "Submit"
                </button>
            </form>
        </PageLayout>
    }
}

#[component]
fn FieldError(errors: RwSignal<FormErrors>, field: FormField) -> impl IntoView {
    view! {
        <Show when=move || errors.get().contains_key(&field)>
            <p class="form-error">{move || errors.get().get(&field).copied().unwrap_or_default()}</p>
        </Show>
    }
}
