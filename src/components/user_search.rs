//! Filterable student picker.

#[cfg(test)]
#[path = "user_search_test.rs"]
mod user_search_test;

use leptos::prelude::*;

use crate::net::types::MentorStudent;

pub fn student_label(student: &MentorStudent) -> String {
    format!("{} ({})", student.name, student.github_id)
}

/// Case-insensitive match on name or GitHub id; a blank query keeps everyone.
pub fn filter_students(students: &[MentorStudent], query: &str) -> Vec<MentorStudent> {
    let needle = query.trim().to_lowercase();
    students
        .iter()
        .filter(|s| {
            needle.is_empty() || s.name.to_lowercase().contains(&needle) || s.github_id.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn UserSearch(
    students: Signal<Vec<MentorStudent>>,
    selected: Signal<Option<i64>>,
    on_select: Callback<Option<i64>>,
) -> impl IntoView {
    let filter = RwSignal::new(String::new());

    view! {
        <div class="user-search">
            <input
                class="user-search__filter"
                type="search"
                placeholder="Search student"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <select
                class="user-search__select"
                on:change=move |ev| on_select.run(event_target_value(&ev).parse::<i64>().ok())
            >
                <option value="" selected=move || selected.get().is_none()>
                    "Select student"
                </option>
                {move || {
                    let current = selected.get();
                    filter_students(&students.get(), &filter.get())
                        .into_iter()
                        .map(|student| {
                            let is_selected = current == Some(student.id);
                            let value = student.id.to_string();
                            let label = student_label(&student);
                            view! {
                                <option value=value selected=is_selected>
                                    {label}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
        </div>
    }
}
