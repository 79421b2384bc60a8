//! Local mirrors of remote record lists.
//!
//! A [`Collection`] only changes after the backend has answered: views fetch,
//! then [`replace`](Collection::replace); mutate, then
//! [`upsert`](Collection::upsert) or [`remove`](Collection::remove).

use store::models::{Notification, Project, Task, TrashItem};
use store::Page;

use crate::filter::{FieldValue, Filterable};

/// A record with a backend identifier.
pub trait Record {
    fn id(&self) -> &str;
}

macro_rules! impl_record {
    ($($ty:ty),*) => {
        $(impl Record for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_record!(Page, Project, Task, Notification, TrashItem);

impl Filterable for Project {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "title" => Some(FieldValue::Text(self.title.clone())),
            "assignee" => self.assignee.as_ref().map(|a| FieldValue::Text(a.name.clone())),
            "status" => Some(FieldValue::Text(self.status.as_str().to_string())),
            "priority" => Some(FieldValue::Text(self.priority.as_str().to_string())),
            "startDate" => self.start_date.map(FieldValue::Date),
            "endDate" => self.end_date.map(FieldValue::Date),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Mirror a fresh fetch.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// A fetch failed: stop loading, keep what we had.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Replace the record with the same id, or prepend a new one.
    pub fn upsert(&mut self, item: T) {
        match self.items.iter_mut().find(|i| i.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.insert(0, item),
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Apply `f` to every record matching `pred`. Returns how many changed.
    pub fn update_where(&mut self, pred: impl Fn(&T) -> bool, mut f: impl FnMut(&mut T)) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|i| pred(&**i)) {
            f(item);
            changed += 1;
        }
        changed
    }
}

/// A destructive action waiting for the user's yes or no.
#[derive(Clone, Debug, PartialEq)]
pub enum Confirmation<T> {
    Idle,
    Pending(T),
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Confirmation<T> {
    pub fn request(&mut self, subject: T) {
        *self = Self::Pending(subject);
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            Self::Pending(subject) => Some(subject),
            Self::Idle => None,
        }
    }

    /// Take the subject to act on.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Pending(subject) => Some(subject),
            Self::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }
}
