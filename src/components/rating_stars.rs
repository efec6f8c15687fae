//! Five-star rating input.

use leptos::prelude::*;

use crate::state::feedback::MAX_RATING;

/// Clicking the currently selected star clears the rating.
#[component]
pub fn RatingStars(value: Signal<u8>, on_rate: Callback<u8>) -> impl IntoView {
    view! {
        <div class="rating-stars" role="radiogroup">
            {(1..=MAX_RATING)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if value.get() >= star { "rating-stars__star rating-stars__star--on" } else { "rating-stars__star" }
                            }
                            aria-label=format!("{star} stars")
                            on:click=move |_| {
                                let next = if value.get_untracked() == star { 0 } else { star };
                                on_rate.run(next);
                            }
                        >
                            "★"
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
