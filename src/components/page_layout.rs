//! Simple page frame with title bar, loading and no-data states.

use leptos::prelude::*;

use crate::state::schedule_settings::SharedScheduleSettings;

#[component]
pub fn PageLayout(
    #[prop(into)] title: String,
    loading: Signal<bool>,
    no_data: Signal<bool>,
    github_id: Signal<Option<String>>,
    children: ChildrenFn,
) -> impl IntoView {
    let timezone = expect_context::<SharedScheduleSettings>().with_value(|s| s.timezone());

    view! {
        <div class="page-layout">
            <header class="page-layout__header toolbar">
                <span class="toolbar__title">{title}</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__timezone">{timezone}</span>
                <span class="toolbar__self">{move || github_id.get().unwrap_or_default()}</span>
            </header>
            <main class="page-layout__content">
                <Show
                    when=move || !loading.get() && !no_data.get()
                    fallback=move || {
                        view! {
                            <p class="page-layout__placeholder">
                                {move || if loading.get() { "Loading..." } else { "No data" }}
                            </p>
                        }
                    }
                >
                    {children()}
                </Show>
            </main>
        </div>
    }
}
