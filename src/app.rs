//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_query_map,
};

use crate::components::notice_toast::NoticeToasts;
use crate::pages::student_feedback::StudentFeedbackPage;
use crate::state::schedule_settings::ScheduleSettingsStore;
use crate::state::{notice::NoticeState, session::SessionState};
use crate::util::storage::default_store;

/// Root application component.
///
/// Loads the session once, provides shared state contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState { session: None, loading: true });
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(notices);
    provide_context(StoredValue::new_local(ScheduleSettingsStore::open(default_store())));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::PortalApi::new(crate::net::http::GlooTransport::default());
        let loaded = match api.fetch_session().await {
            Ok(s) => Some(s),
            Err(e) => {
                log::warn!("session load failed: {e}");
                None
            }
        };
        session.set(SessionState { session: loaded, loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mentor-client.css"/>
        <Title text="Mentor Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=(StaticSegment("course"), StaticSegment("mentor"), StaticSegment("feedback"))
                    view=StudentFeedbackRoute
                />
            </Routes>
        </Router>
        <NoticeToasts/>
    }
}

/// Resolves the `course` query alias against the session before mounting the page.
#[component]
fn StudentFeedbackRoute() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let query = use_query_map();

    let course = move || {
        let alias = query.with(|q| q.get("course"))?;
        session.with(|s| s.course_by_alias(&alias).cloned())
    };

    view! {
        <Show
            when=move || !session.get().loading
            fallback=|| view! { <p class="page-layout__placeholder">"Loading..."</p> }
        >
            {move || match course() {
                Some(course) => view! { <StudentFeedbackPage course=course/> }.into_any(),
                None => view! { <p class="page-error">"Course not found."</p> }.into_any(),
            }}
        </Show>
    }
}
