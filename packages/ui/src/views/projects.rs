use dioxus::prelude::*;
use store::models::{NewProject, Priority, Project, ProjectStatus};

use super::{ConfirmDialog, ModalOverlay, RequireAuth, Spinner};
use crate::advanced_filter::AdvancedFilter;
use crate::collection::{Collection, Confirmation};
use crate::filter::{FilterComposer, FilterField};
use crate::{use_auth, use_session};

/// Fields the projects grid can be filtered by.
pub fn project_filters() -> FilterComposer {
    FilterComposer::new(vec![
        FilterField::text("title", "Project name"),
        FilterField::text("assignee", "Assignee"),
        FilterField::select("status", "Status", ProjectStatus::ALL.iter().map(|s| s.as_str())),
        FilterField::select("priority", "Priority", Priority::ALL.iter().map(|p| p.as_str())),
        FilterField::date("startDate", "Start date"),
        FilterField::date("endDate", "End date"),
    ])
}

pub(crate) fn status_badge(status: ProjectStatus) -> &'static str {
    match status {
        ProjectStatus::Active => "badge green",
        ProjectStatus::Completed => "badge blue",
        ProjectStatus::Planning | ProjectStatus::Archived => "badge",
    }
}

pub(crate) fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Urgent => "badge red",
        Priority::High => "badge orange",
        Priority::Low | Priority::Medium => "badge",
    }
}

/// Load the user's projects into `projects` whenever the signed-in user
/// changes.
pub(crate) fn use_projects() -> Signal<Collection<Project>> {
    let session = use_session();
    let auth = use_auth();
    let mut projects = use_signal(Collection::<Project>::default);

    let _loader = use_resource(move || {
        let signed_in = auth().user.is_some();
        let client = session.client();
        async move {
            if !signed_in {
                return;
            }
            match client.list_projects().await {
                Ok(items) => projects.write().replace(items),
                Err(e) => {
                    tracing::error!("Failed to fetch projects: {}", e);
                    projects.write().fetch_failed();
                }
            }
        }
    });

    projects
}

/// Project grid with filters, creation, and deletion.
#[component]
pub fn ProjectsView(on_open_project: EventHandler<String>, on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let mut projects = use_projects();
    let composer = use_signal(project_filters);
    let mut show_create = use_signal(|| false);
    let mut confirm = use_signal(Confirmation::<Project>::default);

    let create = {
        let session = session.clone();
        move |(title, description): (String, String)| {
            let client = session.client();
            spawn(async move {
                match client.create_project(&NewProject::new(title, description)).await {
                    Ok(project) => {
                        tracing::info!("Created project {}", project.id);
                        projects.write().upsert(project);
                        show_create.set(false);
                    }
                    Err(e) => tracing::error!("Failed to create project: {}", e),
                }
            });
        }
    };

    let delete = move |_| {
        let Some(project) = confirm.write().confirm() else {
            return;
        };
        let client = session.client();
        spawn(async move {
            match client.delete_project(&project.id).await {
                Ok(()) => {
                    projects.write().remove(&project.id);
                }
                Err(e) => tracing::error!("Failed to delete project {}: {}", project.id, e),
            }
        });
    };

    let list = projects.read();
    let visible: Vec<Project> = composer.read().apply(list.items()).into_iter().cloned().collect();
    let loading = list.is_loading();
    drop(list);

    rsx! {
        RequireAuth {
            on_login,
            if loading {
                Spinner {}
            } else {
                div {
                    class: "p-4 md:p-8 min-h-screen",
                    div {
                        class: "flex flex-col md:flex-row items-start md:items-center justify-between mb-8 gap-4",
                        h1 { class: "text-2xl md:text-3xl font-bold", "Projects" }
                        button {
                            class: "btn primary",
                            onclick: move |_| show_create.set(true),
                            "+ New Project"
                        }
                    }

                    div {
                        class: "mb-6 overflow-x-auto",
                        AdvancedFilter { composer }
                    }

                    div {
                        class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4 md:gap-6",
                        for project in visible {
                            div {
                                key: "{project.id}",
                                class: "project-card relative group p-6 rounded-xl",
                                div {
                                    class: "block cursor-pointer",
                                    onclick: {
                                        let id = project.id.clone();
                                        move |_| on_open_project.call(id.clone())
                                    },
                                    div {
                                        class: "flex items-start justify-between mb-3",
                                        h3 { class: "text-lg font-semibold pr-8", "{project.title}" }
                                        span { class: status_badge(project.status), "{project.status.as_str()}" }
                                    }
                                    p { class: "text-sm text-gray-500 mb-4 line-clamp-2", "{project.description}" }
                                    div {
                                        class: "flex items-center justify-between text-xs text-gray-500",
                                        span { class: priority_badge(project.priority), "{project.priority.as_str()}" }
                                        if let Some(assignee) = &project.assignee {
                                            span { "{assignee.name}" }
                                        }
                                    }
                                }
                                button {
                                    class: "card-delete absolute top-4 right-4 opacity-0 group-hover:opacity-100 p-2 rounded",
                                    title: "Delete project",
                                    onclick: {
                                        let project = project.clone();
                                        move |evt: MouseEvent| {
                                            evt.stop_propagation();
                                            confirm.write().request(project.clone());
                                        }
                                    },
                                    "\u{1F5D1}\u{FE0F}"
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_create() {
            CreateProjectModal {
                on_close: move |_| show_create.set(false),
                on_create: create,
            }
        }

        if let Some(project) = confirm.read().pending() {
            ConfirmDialog {
                message: format!("Are you sure you want to delete \"{}\"?", project.title),
                on_confirm: delete,
                on_cancel: move |_| confirm.write().cancel(),
            }
        }
    }
}

#[component]
fn CreateProjectModal(on_close: EventHandler<()>, on_create: EventHandler<(String, String)>) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let t = title().trim().to_string();
        if t.is_empty() {
            return;
        }
        on_create.call((t, description()));
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div {
                class: "p-6",
                h2 { class: "text-xl font-bold mb-4", "Create New Project" }
                form {
                    class: "space-y-4",
                    onsubmit: submit,
                    div {
                        label { class: "block text-sm font-medium mb-2", "Title" }
                        input {
                            r#type: "text",
                            class: "form-input w-full",
                            required: true,
                            placeholder: "Project title",
                            value: "{title}",
                            oninput: move |evt| title.set(evt.value()),
                        }
                    }
                    div {
                        label { class: "block text-sm font-medium mb-2", "Description" }
                        textarea {
                            class: "form-input w-full",
                            rows: 3,
                            placeholder: "Project description",
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    div {
                        class: "flex gap-2 justify-end",
                        button { r#type: "button", class: "btn secondary", onclick: move |_| on_close.call(()), "Cancel" }
                        button { r#type: "submit", class: "btn primary", "Create" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FieldKind;

    #[test]
    fn test_project_filters_offer_every_status() {
        let composer = project_filters();
        let status = composer.field("status").unwrap();
        assert_eq!(
            status.kind,
            FieldKind::Select(vec![
                "planning".into(),
                "active".into(),
                "completed".into(),
                "archived".into()
            ])
        );
        assert_eq!(composer.available("date").len(), 2);
    }

    #[test]
    fn test_status_filter_narrows_projects() {
        let mut composer = project_filters();
        let projects = vec![
            Project {
                id: "p1".into(),
                title: "Launch".into(),
                description: String::new(),
                status: ProjectStatus::Active,
                priority: Priority::High,
                assignee: None,
                start_date: None,
                end_date: None,
                created_at: None,
                updated_at: None,
            },
            Project {
                id: "p2".into(),
                title: "Archive".into(),
                description: String::new(),
                status: ProjectStatus::Planning,
                priority: Priority::Low,
                assignee: None,
                start_date: None,
                end_date: None,
                created_at: None,
                updated_at: None,
            },
        ];
        composer.add("status").unwrap();
        composer.set_value(0, "active");
        let kept: Vec<&str> = composer.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(kept, vec!["p1"]);
    }
}
