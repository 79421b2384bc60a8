//! # Domain models for the workspace
//!
//! Every record the backend hands us, shaped the way the JSON API spells it
//! (`_id`, camelCase keys) so they can be deserialized straight from a
//! response body and sent back unchanged in a PATCH.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The signed-in user returned by `/api/auth/me` and the login/register endpoints. |
//! | [`Page`] | A page: title, optional icon and cover, public flag, and an ordered list of [`Block`]s. |
//! | [`Block`] | One content unit inside a page. The per-type fields live in the tagged [`BlockKind`] union. |
//! | [`PagePatch`] | Partial page fields, merged locally by [`Page::apply`] and sent as the PATCH body. |
//! | [`Project`] / [`Task`] | Remote-backed records with status/priority enums and an optional [`Assignee`]. |
//! | [`Notification`] | One inbox entry. |
//! | [`TrashItem`] | A soft-deleted page or project. |
//! | [`SearchResults`] | The grouped result of `/api/search`. |
//!
//! Blocks of a type this client does not edit decode to [`BlockKind::Other`]
//! with their raw fields, so one unfamiliar block never fails a whole page.
//! Block identifiers are synthesized at deserialization when the backend omits
//! them; [`Page::normalize_blocks`] additionally repairs duplicates so block
//! order is always a total order over unique ids.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Public projection of a user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_pic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

fn default_role() -> String {
    "user".to_string()
}

impl UserInfo {
    /// Name to show in the sidebar, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Stable identifier of a block within its page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    /// Synthesize a fresh identifier for a block the backend did not name.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress label of a checklist block or a task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::NotStarted, Self::InProgress, Self::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not started",
            Self::InProgress => "In progress",
            Self::Done => "Done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Tag of a block, without its fields. Used when creating blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlockType {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    #[default]
    Todo,
}

/// Per-type block fields. Serialized inline next to `_id` with a `type` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BlockKind {
    #[serde(rename = "heading1")]
    Heading1 {
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "heading2")]
    Heading2 {
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "heading3")]
    Heading3 {
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "paragraph")]
    Paragraph {
        #[serde(default)]
        content: String,
    },
    #[serde(rename = "todo")]
    Todo {
        #[serde(default)]
        content: String,
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        status: TaskStatus,
        #[serde(default, rename = "dueDate")]
        due_date: Option<DateTime<Utc>>,
    },
    /// Any other block, kept verbatim and sent back unchanged on save.
    #[serde(skip)]
    Other {
        tag: Option<String>,
        fields: Map<String, Value>,
    },
}

impl BlockKind {
    pub fn empty(block_type: BlockType) -> Self {
        let content = String::new();
        match block_type {
            BlockType::Heading1 => Self::Heading1 { content },
            BlockType::Heading2 => Self::Heading2 { content },
            BlockType::Heading3 => Self::Heading3 { content },
            BlockType::Paragraph => Self::Paragraph { content },
            BlockType::Todo => Self::Todo {
                content,
                checked: false,
                status: TaskStatus::NotStarted,
                due_date: None,
            },
        }
    }

    /// `None` for blocks of a type this client does not know.
    pub fn block_type(&self) -> Option<BlockType> {
        match self {
            Self::Heading1 { .. } => Some(BlockType::Heading1),
            Self::Heading2 { .. } => Some(BlockType::Heading2),
            Self::Heading3 { .. } => Some(BlockType::Heading3),
            Self::Paragraph { .. } => Some(BlockType::Paragraph),
            Self::Todo { .. } => Some(BlockType::Todo),
            Self::Other { .. } => None,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Heading1 { content }
            | Self::Heading2 { content }
            | Self::Heading3 { content }
            | Self::Paragraph { content }
            | Self::Todo { content, .. } => content,
            Self::Other { fields, .. } => fields.get("content").and_then(Value::as_str).unwrap_or(""),
        }
    }

    fn set_content(&mut self, new_content: String) {
        match self {
            Self::Heading1 { content }
            | Self::Heading2 { content }
            | Self::Heading3 { content }
            | Self::Paragraph { content }
            | Self::Todo { content, .. } => *content = new_content,
            Self::Other { fields, .. } => {
                fields.insert("content".to_string(), Value::String(new_content));
            }
        }
    }
}

/// One content unit of a page.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
}

#[derive(Serialize)]
struct KnownBlock<'a> {
    #[serde(rename = "_id")]
    id: &'a BlockId,
    #[serde(flatten)]
    kind: &'a BlockKind,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let BlockKind::Other { tag, fields } = &self.kind else {
            return KnownBlock {
                id: &self.id,
                kind: &self.kind,
            }
            .serialize(serializer);
        };
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("_id", &self.id)?;
        if let Some(tag) = tag {
            map.serialize_entry("type", tag)?;
        }
        for (key, value) in fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let id = match fields.remove("_id") {
            Some(Value::String(id)) => BlockId(id),
            _ => BlockId::generate(),
        };
        let kind = match BlockKind::deserialize(Value::Object(fields.clone())) {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!("Keeping block {} verbatim: {}", id, e);
                let tag = match fields.remove("type") {
                    Some(Value::String(tag)) => Some(tag),
                    Some(other) => {
                        fields.insert("type".to_string(), other);
                        None
                    }
                    None => None,
                };
                BlockKind::Other { tag, fields }
            }
        };
        Ok(Self { id, kind })
    }
}

/// Partial block fields. `checked` and `status` are reconciled on apply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockUpdate {
    pub content: Option<String>,
    pub checked: Option<bool>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl BlockUpdate {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn due_date(due_date: Option<DateTime<Utc>>) -> Self {
        Self {
            due_date: Some(due_date),
            ..Self::default()
        }
    }
}

impl Block {
    /// A new block of the given type with a synthesized id and empty fields.
    pub fn new(block_type: BlockType) -> Self {
        Self {
            id: BlockId::generate(),
            kind: BlockKind::empty(block_type),
        }
    }

    pub fn with_content(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: BlockId(id.into()),
            kind,
        }
    }

    pub fn content(&self) -> &str {
        self.kind.content()
    }

    pub fn is_todo(&self) -> bool {
        matches!(self.kind, BlockKind::Todo { .. })
    }

    /// Merge `update` into this block.
    ///
    /// A status wins over a completion flag when both are present; otherwise
    /// whichever one is set drives the other. Todo-only fields are ignored on
    /// other block types.
    pub fn apply(&mut self, update: &BlockUpdate) {
        if let Some(new_content) = &update.content {
            self.kind.set_content(new_content.clone());
        }
        if let BlockKind::Todo {
            checked,
            status,
            due_date,
            ..
        } = &mut self.kind
        {
            if let Some(new_status) = update.status {
                *status = new_status;
                *checked = new_status == TaskStatus::Done;
            } else if let Some(new_checked) = update.checked {
                *checked = new_checked;
                *status = if new_checked {
                    TaskStatus::Done
                } else {
                    TaskStatus::NotStarted
                };
            }
            if let Some(new_due) = update.due_date {
                *due_date = new_due;
            }
        }
    }

    /// The check toggle of a todo block. Returns the update it applied, or
    /// `None` for block types without a completion flag.
    pub fn toggle_checked(&mut self) -> Option<BlockUpdate> {
        let BlockKind::Todo { checked, .. } = &self.kind else {
            return None;
        };
        let update = BlockUpdate {
            checked: Some(!*checked),
            ..BlockUpdate::default()
        };
        self.apply(&update);
        Some(update)
    }
}

/// A page with its ordered block content.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub content: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Re-synthesize ids of blocks whose id repeats an earlier block's.
    /// Returns how many blocks were renamed.
    pub fn normalize_blocks(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut renamed = 0;
        for block in &mut self.content {
            while !seen.insert(block.id.clone()) {
                block.id = BlockId::generate();
                renamed += 1;
            }
        }
        renamed
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.content.iter().position(|b| &b.id == id)
    }

    /// Merge the set fields of `patch` into this page.
    pub fn apply(&mut self, patch: &PagePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(icon) = &patch.icon {
            self.icon = icon.clone();
        }
        if let Some(cover) = &patch.cover_image {
            self.cover_image = cover.clone();
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
    }
}

/// Partial page fields. `Some(None)` clears an optional field (sent as `null`).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Block>>,
}

impl PagePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn content(content: Vec<Block>) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }
}

/// Body of `POST /api/pages`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewPage {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<Block>>,
}

/// Sidebar/dashboard projection of a page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Page> for PageSummary {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title.clone(),
            icon: page.icon.clone(),
            updated_at: page.updated_at,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    Completed,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        Self::Planning,
        Self::Active,
        Self::Completed,
        Self::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Reference to the user a project or task is assigned to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Assignee {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/projects`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub priority: Priority,
}

impl NewProject {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Partial project fields for `PATCH /api/projects/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl ProjectPatch {
    /// Build a single-field patch from a table cell edit.
    pub fn field(field: &str, value: &str) -> Option<Self> {
        let mut patch = Self::default();
        match field {
            "title" => patch.title = Some(value.to_string()),
            "description" => patch.description = Some(value.to_string()),
            "status" => patch.status = Some(ProjectStatus::parse(value)?),
            "priority" => patch.priority = Some(Priority::parse(value)?),
            _ => return None,
        }
        Some(patch)
    }
}

impl From<&Project> for ProjectPatch {
    fn from(project: &Project) -> Self {
        Self {
            title: Some(project.title.clone()),
            description: Some(project.description.clone()),
            status: Some(project.status),
            priority: Some(project.priority),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/tasks`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Partial task fields for `PATCH /api/tasks/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TaskAssigned,
    TaskDue,
    Meeting,
    Mention,
    ProjectUpdate,
    Comment,
    #[serde(other)]
    Other,
}

impl NotificationKind {
    /// Glyph shown next to the notification in the inbox.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::TaskAssigned | Self::TaskDue => "\u{1F4CB}",
            Self::Meeting => "\u{1F4C5}",
            Self::Mention => "@",
            Self::ProjectUpdate => "\u{1F4C1}",
            Self::Comment => "\u{1F4AC}",
            Self::Other => "\u{1F514}",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_type: Option<String>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashItemType {
    Project,
    Page,
}

impl TrashItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Page => "page",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeletedBy {
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub item_type: TrashItemType,
    pub deleted_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_by: Option<DeletedBy>,
}

/// Grouped hits returned by `/api/search`. Missing groups are empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub pages: Vec<PageSummary>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.pages.len() + self.projects.len() + self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Colour scheme preference, persisted under [`crate::storage::THEME_KEY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
