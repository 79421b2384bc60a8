//! Composable record filters for list views.
//!
//! A [`FilterComposer`] holds an ordered list of active entries, each bound
//! to one [`FilterField`]. An entry with an empty value constrains nothing.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    /// Case-insensitive substring.
    Text,
    /// Exact match against one of the options.
    Select(Vec<String>),
    /// Calendar date, compared as `YYYY-MM-DD`.
    Date,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FilterField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FilterField {
    pub fn text(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Text,
        }
    }

    pub fn select<'a>(id: &str, label: &str, options: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Select(options.into_iter().map(str::to_string).collect()),
        }
    }

    pub fn date(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            kind: FieldKind::Date,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterEntry {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter field: {0}")]
    UnknownField(String),
    #[error("filter already active: {0}")]
    AlreadyActive(String),
}

/// A record value as seen by a filter.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(DateTime<Utc>),
}

/// Records the composer can filter.
pub trait Filterable {
    /// The value of `field` on this record, or `None` when it has none.
    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterComposer {
    fields: Vec<FilterField>,
    entries: Vec<FilterEntry>,
}

impl FilterComposer {
    pub fn new(fields: Vec<FilterField>) -> Self {
        Self {
            fields,
            entries: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[FilterField] {
        &self.fields
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    pub fn field(&self, id: &str) -> Option<&FilterField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn add(&mut self, field_id: &str) -> Result<(), FilterError> {
        if self.field(field_id).is_none() {
            return Err(FilterError::UnknownField(field_id.to_string()));
        }
        if self.entries.iter().any(|e| e.field == field_id) {
            return Err(FilterError::AlreadyActive(field_id.to_string()));
        }
        self.entries.push(FilterEntry {
            field: field_id.to_string(),
            value: String::new(),
        });
        Ok(())
    }

    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.value = value.into();
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Inactive fields whose label contains `search`, ignoring case.
    pub fn available(&self, search: &str) -> Vec<&FilterField> {
        let needle = search.to_lowercase();
        self.fields
            .iter()
            .filter(|f| !self.entries.iter().any(|e| e.field == f.id))
            .filter(|f| f.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.entries
            .iter()
            .filter(|e| !e.value.is_empty())
            .all(|entry| {
                let Some(field) = self.field(&entry.field) else {
                    return true;
                };
                let Some(value) = record.field_value(&entry.field) else {
                    return false;
                };
                match (&field.kind, value) {
                    (FieldKind::Text, FieldValue::Text(text)) => {
                        text.to_lowercase().contains(&entry.value.to_lowercase())
                    }
                    (FieldKind::Select(_), FieldValue::Text(text)) => text == entry.value,
                    (FieldKind::Date, FieldValue::Date(date)) => {
                        date.format("%Y-%m-%d").to_string() == entry.value
                    }
                    _ => false,
                }
            })
    }

    /// The records satisfying every entry that has a value, in input order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Row {
        title: &'static str,
        status: &'static str,
        assignee: Option<&'static str>,
        due: Option<DateTime<Utc>>,
    }

    impl Filterable for Row {
        fn field_value(&self, field: &str) -> Option<FieldValue> {
            match field {
                "title" => Some(FieldValue::Text(self.title.into())),
                "status" => Some(FieldValue::Text(self.status.into())),
                "assignee" => self.assignee.map(|a| FieldValue::Text(a.into())),
                "due" => self.due.map(FieldValue::Date),
                _ => None,
            }
        }
    }

    fn composer() -> FilterComposer {
        FilterComposer::new(vec![
            FilterField::text("title", "Project name"),
            FilterField::text("assignee", "Assignee"),
            FilterField::select("status", "Status", ["planning", "active"]),
            FilterField::date("due", "Due date"),
        ])
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                title: "Website Redesign",
                status: "active",
                assignee: Some("Ada"),
                due: Some(Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap()),
            },
            Row {
                title: "Mobile app",
                status: "planning",
                assignee: None,
                due: None,
            },
            Row {
                title: "Web scraper",
                status: "planning",
                assignee: Some("Grace"),
                due: None,
            },
        ]
    }

    #[test]
    fn test_empty_entries_impose_nothing() {
        let mut c = composer();
        c.add("title").unwrap();
        c.add("status").unwrap();
        assert_eq!(c.apply(&rows()).len(), 3);
    }

    #[test]
    fn test_result_is_a_subset_matching_every_entry() {
        let mut c = composer();
        c.add("title").unwrap();
        c.set_value(0, "WEB");
        assert_eq!(c.apply(&rows()).len(), 2);

        c.add("status").unwrap();
        c.set_value(1, "planning");
        let rows = rows();
        let hits = c.apply(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Web scraper");
    }

    #[test]
    fn test_missing_value_excludes_record() {
        let mut c = composer();
        c.add("assignee").unwrap();
        c.set_value(0, "a");
        let rows = rows();
        let titles: Vec<_> = c.apply(&rows).iter().map(|r| r.title).collect();
        assert_eq!(titles, ["Website Redesign", "Web scraper"]);
    }

    #[test]
    fn test_date_matches_calendar_day() {
        let mut c = composer();
        c.add("due").unwrap();
        c.set_value(0, "2024-05-01");
        assert_eq!(c.apply(&rows()).len(), 1);
        c.set_value(0, "2024-05-02");
        assert!(c.apply(&rows()).is_empty());
    }

    #[test]
    fn test_select_is_exact() {
        let mut c = composer();
        c.add("status").unwrap();
        c.set_value(0, "activ");
        assert!(c.apply(&rows()).is_empty());
    }

    #[test]
    fn test_duplicate_and_unknown_fields_rejected() {
        let mut c = composer();
        c.add("title").unwrap();
        assert_eq!(c.add("title"), Err(FilterError::AlreadyActive("title".into())));
        assert_eq!(c.add("nope"), Err(FilterError::UnknownField("nope".into())));
        assert_eq!(c.entries().len(), 1);
    }

    #[test]
    fn test_available_hides_active_and_searches_labels() {
        let mut c = composer();
        c.add("status").unwrap();
        let labels: Vec<_> = c.available("").iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Project name", "Assignee", "Due date"]);
        let labels: Vec<_> = c.available("DUE").iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["Due date"]);
    }

    #[test]
    fn test_remove_entry() {
        let mut c = composer();
        c.add("title").unwrap();
        c.set_value(0, "zzz");
        assert!(c.apply(&rows()).is_empty());
        c.remove(0);
        c.remove(5);
        assert_eq!(c.apply(&rows()).len(), 3);
        assert_eq!(c.available("").len(), 4);
    }
}
