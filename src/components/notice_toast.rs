//! Toast stack for transient success/error notices.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Queue a notice and remove it again after [`crate::state::notice::NOTICE_TTL_MS`].
pub fn show_notice(notices: RwSignal<NoticeState>, kind: NoticeKind, message: &str) {
    let mut id = 0;
    notices.update(|n| id = n.push(kind, message));

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[component]
pub fn NoticeToasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = format!("notice {}", notice.kind.css_modifier());
                        view! {
                            <div class=class role="status" on:click=move |_| notices.update(|n| n.dismiss(id))>
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
