//! Schedule view preferences persisted per browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The schedule page reads eight independent preferences (timezone, done-task
//! limit, display toggles, tag palette, hidden columns and event types). Each
//! is stored as JSON under its own stable key and falls back to a declared
//! default when absent or unreadable.
//!
//! DESIGN
//! ======
//! Values are read lazily on first access and cached; setters write through
//! to the durable store before updating the cache. [`ScheduleSettingsStore::settings`]
//! hands out a shared [`ScheduleSettings`] bundle and only rebuilds it when a
//! constituent value differs from the last observed one, so dependents can
//! compare by pointer.

#[cfg(test)]
#[path = "schedule_settings_test.rs"]
mod schedule_settings_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::prelude::StoredValue;
use leptos::reactive::owner::LocalStorage as ArenaLocal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::storage::{PreferenceStore, load_json, save_json};
use crate::util::timezone::detect_timezone;

// Stored keys. Renaming any of these orphans existing user values.
pub const TIMEZONE_KEY: &str = "scheduleTimezone";
pub const LIMIT_FOR_DONE_TASK_KEY: &str = "scheduleLimitForDoneTask";
pub const IS_SPLITTED_BY_WEEK_KEY: &str = "scheduleIsSplitedByWeek";
pub const ARE_PASSED_EVENTS_HIDDEN_KEY: &str = "scheduleArePassedEventsHidden";
pub const ARE_DONE_TASKS_HIDDEN_KEY: &str = "scheduleAreDoneTasksHidden";
pub const TAG_COLORS_KEY: &str = "scheduleTagColors";
pub const COLUMNS_HIDDEN_KEY: &str = "scheduleColumnsHidden";
pub const EVENT_TYPES_HIDDEN_KEY: &str = "scheduleEventTypesHidden";

pub const DEFAULT_LIMIT_FOR_DONE_TASK: u32 = 100;

/// Built-in tag palette used until the user picks their own colors.
pub const DEFAULT_TAG_COLORS: &[(&str, &str)] = &[
    ("coding", "#ff7b00"),
    ("cross-check", "#3b9ead"),
    ("deadline", "#ff0000"),
    ("interview", "#8c5ab7"),
    ("lecture", "#2c8fd1"),
    ("meetup", "#a7b61a"),
    ("self-study", "#7a8185"),
    ("test", "#63ab91"),
    ("webinar", "#e34c8c"),
    ("workshop", "#ffbd00"),
];

pub fn default_tag_colors() -> BTreeMap<String, String> {
    DEFAULT_TAG_COLORS
        .iter()
        .map(|(tag, color)| ((*tag).to_owned(), (*color).to_owned()))
        .collect()
}

/// Current values of every schedule preference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSettings {
    pub timezone: String,
    pub limit_for_done_task: u32,
    pub is_splitted_by_week: bool,
    pub are_passed_events_hidden: bool,
    pub are_done_tasks_hidden: bool,
    pub tag_colors: BTreeMap<String, String>,
    pub columns_hidden: Vec<String>,
    pub event_types_hidden: Vec<String>,
}

/// One lazily loaded, write-through preference.
struct Preference<T> {
    key: &'static str,
    default: fn() -> T,
    cached: RefCell<Option<T>>,
}

impl<T: Clone + Serialize + DeserializeOwned> Preference<T> {
    fn new(key: &'static str, default: fn() -> T) -> Self {
        Self { key, default, cached: RefCell::new(None) }
    }

    fn get(&self, store: &dyn PreferenceStore) -> T {
        let cached = self.cached.borrow().clone();
        if let Some(value) = cached {
            return value;
        }
        let value = load_json(store, self.key).unwrap_or_else(self.default);
        *self.cached.borrow_mut() = Some(value.clone());
        value
    }

    fn set(&self, store: &dyn PreferenceStore, value: T) {
        if let Err(e) = save_json(store, self.key, &value) {
            log::warn!("preference write failed: key={} error={e}", self.key);
        }
        *self.cached.borrow_mut() = Some(value);
    }
}

/// Store handle provided to the component tree by [`crate::app::App`].
///
/// The store holds `Rc`s, so it lives in the thread-local arena.
pub type SharedScheduleSettings = StoredValue<ScheduleSettingsStore, ArenaLocal>;

/// Getter/setter facade over the eight schedule preferences.
pub struct ScheduleSettingsStore {
    store: Rc<dyn PreferenceStore>,
    timezone: Preference<String>,
    limit_for_done_task: Preference<u32>,
    is_splitted_by_week: Preference<bool>,
    are_passed_events_hidden: Preference<bool>,
    are_done_tasks_hidden: Preference<bool>,
    tag_colors: Preference<BTreeMap<String, String>>,
    columns_hidden: Preference<Vec<String>>,
    event_types_hidden: Preference<Vec<String>>,
    last: RefCell<Option<Rc<ScheduleSettings>>>,
}

impl ScheduleSettingsStore {
    /// Bind the preferences to `store`. Nothing is read until first access.
    pub fn open(store: Rc<dyn PreferenceStore>) -> Self {
        Self {
            store,
            timezone: Preference::new(TIMEZONE_KEY, detect_timezone),
            limit_for_done_task: Preference::new(LIMIT_FOR_DONE_TASK_KEY, || DEFAULT_LIMIT_FOR_DONE_TASK),
            is_splitted_by_week: Preference::new(IS_SPLITTED_BY_WEEK_KEY, || false),
            are_passed_events_hidden: Preference::new(ARE_PASSED_EVENTS_HIDDEN_KEY, || false),
            are_done_tasks_hidden: Preference::new(ARE_DONE_TASKS_HIDDEN_KEY, || false),
            tag_colors: Preference::new(TAG_COLORS_KEY, default_tag_colors),
            columns_hidden: Preference::new(COLUMNS_HIDDEN_KEY, Vec::new),
            event_types_hidden: Preference::new(EVENT_TYPES_HIDDEN_KEY, Vec::new),
            last: RefCell::new(None),
        }
    }

    /// Shared bundle of all current values.
    ///
    /// Returns the previously handed out `Rc` when nothing changed since the
    /// last call, otherwise a freshly built one.
    pub fn settings(&self) -> Rc<ScheduleSettings> {
        let current = ScheduleSettings {
            timezone: self.timezone(),
            limit_for_done_task: self.limit_for_done_task(),
            is_splitted_by_week: self.is_splitted_by_week(),
            are_passed_events_hidden: self.are_passed_events_hidden(),
            are_done_tasks_hidden: self.are_done_tasks_hidden(),
            tag_colors: self.tag_colors(),
            columns_hidden: self.columns_hidden(),
            event_types_hidden: self.event_types_hidden(),
        };

        let mut last = self.last.borrow_mut();
        if let Some(prev) = last.as_ref() {
            if **prev == current {
                return Rc::clone(prev);
            }
        }
        let fresh = Rc::new(current);
        *last = Some(Rc::clone(&fresh));
        fresh
    }

    pub fn timezone(&self) -> String {
        self.timezone.get(self.store.as_ref())
    }

    pub fn set_timezone(&self, value: impl Into<String>) {
        self.timezone.set(self.store.as_ref(), value.into());
    }

    pub fn limit_for_done_task(&self) -> u32 {
        self.limit_for_done_task.get(self.store.as_ref())
    }

    pub fn set_limit_for_done_task(&self, value: u32) {
        self.limit_for_done_task.set(self.store.as_ref(), value);
    }

    pub fn is_splitted_by_week(&self) -> bool {
        self.is_splitted_by_week.get(self.store.as_ref())
    }

    pub fn set_is_splitted_by_week(&self, value: bool) {
        self.is_splitted_by_week.set(self.store.as_ref(), value);
    }

    pub fn are_passed_events_hidden(&self) -> bool {
        self.are_passed_events_hidden.get(self.store.as_ref())
    }

    pub fn set_are_passed_events_hidden(&self, value: bool) {
        self.are_passed_events_hidden.set(self.store.as_ref(), value);
    }

    pub fn are_done_tasks_hidden(&self) -> bool {
        self.are_done_tasks_hidden.get(self.store.as_ref())
    }

    pub fn set_are_done_tasks_hidden(&self, value: bool) {
        self.are_done_tasks_hidden.set(self.store.as_ref(), value);
    }

    pub fn tag_colors(&self) -> BTreeMap<String, String> {
        self.tag_colors.get(self.store.as_ref())
    }

    pub fn set_tag_colors(&self, value: BTreeMap<String, String>) {
        self.tag_colors.set(self.store.as_ref(), value);
    }

    pub fn columns_hidden(&self) -> Vec<String> {
        self.columns_hidden.get(self.store.as_ref())
    }

    pub fn set_columns_hidden(&self, value: Vec<String>) {
        self.columns_hidden.set(self.store.as_ref(), value);
    }

    pub fn event_types_hidden(&self) -> Vec<String> {
        self.event_types_hidden.get(self.store.as_ref())
    }

    pub fn set_event_types_hidden(&self, value: Vec<String>) {
        self.event_types_hidden.set(self.store.as_ref(), value);
    }
}
