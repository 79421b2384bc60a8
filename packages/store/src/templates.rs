//! Starter content offered by the "new page" picker.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Block, BlockKind, NewPage, TaskStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageTemplate {
    Empty,
    Database,
    AiGenerated,
    TasksTracker,
    Projects,
    DocumentHub,
    Brainstorm,
}

impl PageTemplate {
    pub const ALL: [PageTemplate; 7] = [
        Self::Empty,
        Self::Database,
        Self::AiGenerated,
        Self::TasksTracker,
        Self::Projects,
        Self::DocumentHub,
        Self::Brainstorm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "Empty page",
            Self::Database => "Database",
            Self::AiGenerated => "AI Generated Page",
            Self::TasksTracker => "Tasks Tracker",
            Self::Projects => "Projects",
            Self::DocumentHub => "Document Hub",
            Self::Brainstorm => "Brainstorm",
        }
    }

    /// The create-page request for this template. Blocks get fresh ids.
    pub fn to_new_page(&self) -> NewPage {
        self.to_new_page_at(Utc::now())
    }

    /// As [`to_new_page`](Self::to_new_page), with seeded due dates relative
    /// to `now`.
    pub fn to_new_page_at(&self, now: DateTime<Utc>) -> NewPage {
        match self {
            Self::Empty => NewPage {
                title: "Untitled".to_string(),
                icon: None,
                content: None,
            },
            Self::Database => filled(
                "New Database",
                "\u{1F5C4}\u{FE0F}",
                vec![
                    heading1("Database"),
                    paragraph("A new database to organize your items."),
                    todo("Item 1", TaskStatus::NotStarted),
                    todo("Item 2", TaskStatus::NotStarted),
                    todo("Item 3", TaskStatus::NotStarted),
                ],
            ),
            Self::AiGenerated => filled(
                "AI Generated Page",
                "\u{2728}",
                vec![
                    heading1("AI Generated Content"),
                    paragraph("This page was created with Flux AI."),
                    heading2("Summary"),
                    paragraph("Here is a summary of your request..."),
                ],
            ),
            Self::TasksTracker => filled(
                "Tasks Tracker",
                "\u{2705}",
                vec![
                    heading1("Tasks Tracker"),
                    paragraph("Stay organized with tasks, your way."),
                    heading2("To Do"),
                    due(todo("Review project proposal", TaskStatus::NotStarted), now),
                    todo("Email marketing team", TaskStatus::NotStarted),
                    heading2("In Progress"),
                    todo("Schedule team meeting", TaskStatus::InProgress),
                    todo("Update documentation", TaskStatus::InProgress),
                    heading2("Done"),
                    todo("Setup project repo", TaskStatus::Done),
                ],
            ),
            Self::Projects => filled(
                "Projects",
                "\u{1F3AF}",
                vec![
                    heading1("Projects Board"),
                    paragraph("Manage projects start to finish."),
                    heading2("Active Projects"),
                    due(todo("Q4 Roadmap", TaskStatus::InProgress), now + Duration::days(30)),
                    todo("Website Redesign", TaskStatus::NotStarted),
                    heading2("Backlog"),
                    todo("Mobile App Launch", TaskStatus::NotStarted),
                    todo("User Research", TaskStatus::NotStarted),
                ],
            ),
            Self::DocumentHub => filled(
                "Document Hub",
                "\u{1F4C4}",
                vec![
                    heading1("Document Hub"),
                    paragraph("Collaborate on docs in one hub."),
                    heading2("Engineering"),
                    paragraph("\u{1F4C4} API Documentation"),
                    paragraph("\u{1F4C4} Architecture Overview"),
                    heading2("Product"),
                    paragraph("\u{1F4C4} Product Requirements (PRD)"),
                    paragraph("\u{1F4C4} User Stories"),
                    heading2("Design"),
                    paragraph("\u{1F4C4} Design System"),
                ],
            ),
            Self::Brainstorm => filled(
                "Brainstorm Session",
                "\u{1F4A1}",
                vec![
                    heading1("Brainstorm Session"),
                    paragraph("Spark new ideas together."),
                    heading2("The Goal"),
                    paragraph("Generate ideas for the next marketing campaign."),
                    heading2("Ideas"),
                    todo("Viral TikTok challenge", TaskStatus::NotStarted),
                    todo("Partnership with influencers", TaskStatus::NotStarted),
                    todo("Interactive webinar series", TaskStatus::NotStarted),
                    heading2("Action Items"),
                    todo("Research competitors", TaskStatus::NotStarted),
                ],
            ),
        }
    }
}

fn filled(title: &str, icon: &str, content: Vec<Block>) -> NewPage {
    NewPage {
        title: title.to_string(),
        icon: Some(icon.to_string()),
        content: Some(content),
    }
}

fn block(kind: BlockKind) -> Block {
    Block {
        id: crate::models::BlockId::generate(),
        kind,
    }
}

fn heading1(text: &str) -> Block {
    block(BlockKind::Heading1 { content: text.to_string() })
}

fn heading2(text: &str) -> Block {
    block(BlockKind::Heading2 { content: text.to_string() })
}

fn paragraph(text: &str) -> Block {
    block(BlockKind::Paragraph { content: text.to_string() })
}

fn todo(text: &str, status: TaskStatus) -> Block {
    block(BlockKind::Todo {
        content: text.to_string(),
        checked: status == TaskStatus::Done,
        status,
        due_date: None,
    })
}

fn due(mut block: Block, date: DateTime<Utc>) -> Block {
    if let BlockKind::Todo { due_date, .. } = &mut block.kind {
        *due_date = Some(date);
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template_sends_no_content() {
        let page = PageTemplate::Empty.to_new_page();
        assert_eq!(page.title, "Untitled");
        assert!(page.content.is_none());
    }

    #[test]
    fn test_template_todos_are_consistent() {
        for template in PageTemplate::ALL {
            for b in template.to_new_page().content.unwrap_or_default() {
                if let BlockKind::Todo { checked, status, .. } = b.kind {
                    assert_eq!(checked, status == TaskStatus::Done);
                }
            }
        }
    }

    #[test]
    fn test_seeded_due_dates_follow_now() {
        let now = Utc::now();
        let due_dates = |template: PageTemplate| -> Vec<DateTime<Utc>> {
            template
                .to_new_page_at(now)
                .content
                .unwrap_or_default()
                .into_iter()
                .filter_map(|b| match b.kind {
                    BlockKind::Todo { due_date, .. } => due_date,
                    _ => None,
                })
                .collect()
        };
        assert_eq!(due_dates(PageTemplate::TasksTracker), [now]);
        assert_eq!(due_dates(PageTemplate::Projects), [now + Duration::days(30)]);
        assert!(due_dates(PageTemplate::Brainstorm).is_empty());
    }

    #[test]
    fn test_every_template_but_empty_has_content() {
        for template in PageTemplate::ALL {
            let page = template.to_new_page();
            assert_eq!(page.content.is_some(), template != PageTemplate::Empty, "{template:?}");
            assert!(!page.title.is_empty());
        }
    }
}
