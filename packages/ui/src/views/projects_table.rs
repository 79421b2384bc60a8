use dioxus::prelude::*;
use store::models::{Priority, Project, ProjectPatch, ProjectStatus};

use super::projects::use_projects;
use super::{ConfirmDialog, RequireAuth, Spinner};
use crate::collection::Confirmation;
use crate::use_session;

/// Projects as an editable table. Each cell edit sends a one-field PATCH and
/// the row is replaced with the server's copy.
#[component]
pub fn ProjectsTableView(on_open_project: EventHandler<String>, on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let mut projects = use_projects();
    let mut confirm = use_signal(Confirmation::<Project>::default);

    let update_cell = use_callback({
        let session = session.clone();
        move |(id, field, value): (String, &'static str, String)| {
            let Some(patch) = ProjectPatch::field(field, &value) else {
                tracing::warn!("Ignoring invalid {} value {:?}", field, value);
                return;
            };
            let client = session.client();
            spawn(async move {
                match client.update_project(&id, &patch).await {
                    Ok(updated) => projects.write().upsert(updated),
                    Err(e) => tracing::error!("Failed to update project {}: {}", id, e),
                }
            });
        }
    });

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
    let rows = list.items().to_vec();
    let loading = list.is_loading();
    drop(list);

    rsx! {
        RequireAuth {
            on_login,
            if loading {
                Spinner {}
            } else {
                div {
                    class: "p-8",
                    h1 { class: "text-3xl font-bold mb-6", "Projects Database" }
                    div {
                        class: "overflow-x-auto",
                        table {
                            class: "data-table w-full border-collapse",
                            thead {
                                tr {
                                    th { class: "w-8 p-2" }
                                    th { "Name" }
                                    th { "Status" }
                                    th { "Priority" }
                                    th { "Assignee" }
                                    th { class: "w-16" }
                                }
                            }
                            tbody {
                                for (idx, row) in rows.into_iter().enumerate() {
                                    tr {
                                        key: "{row.id}",
                                        td { class: "p-2 text-center text-gray-400", {(idx + 1).to_string()} }
                                        td {
                                            input {
                                                r#type: "text",
                                                class: "cell-input",
                                                value: "{row.title}",
                                                placeholder: "Empty name",
                                                onchange: {
                                                    let id = row.id.clone();
                                                    move |evt: FormEvent| update_cell.call((id.clone(), "title", evt.value()))
                                                },
                                            }
                                        }
                                        td {
                                            select {
                                                class: "cell-input",
                                                value: "{row.status.as_str()}",
                                                onchange: {
                                                    let id = row.id.clone();
                                                    move |evt: FormEvent| update_cell.call((id.clone(), "status", evt.value()))
                                                },
                                                for status in ProjectStatus::ALL {
                                                    option { value: "{status.as_str()}", selected: status == row.status, "{status.as_str()}" }
                                                }
                                            }
                                        }
                                        td {
                                            select {
                                                class: "cell-input",
                                                value: "{row.priority.as_str()}",
                                                onchange: {
                                                    let id = row.id.clone();
                                                    move |evt: FormEvent| update_cell.call((id.clone(), "priority", evt.value()))
                                                },
                                                for priority in Priority::ALL {
                                                    option { value: "{priority.as_str()}", selected: priority == row.priority, "{priority.as_str()}" }
                                                }
                                            }
                                        }
                                        td {
                                            span {
                                                class: "text-sm text-gray-600",
                                                {row.assignee.as_ref().map(|a| a.name.clone()).unwrap_or_else(|| "Unassigned".to_string())}
                                            }
                                        }
                                        td {
                                            class: "flex gap-1",
                                            button {
                                                class: "p-1 rounded text-gray-400",
                                                title: "Open",
                                                onclick: {
                                                    let id = row.id.clone();
                                                    move |_| on_open_project.call(id.clone())
                                                },
                                                "\u{2197}"
                                            }
                                            button {
                                                class: "p-1 rounded text-gray-400",
                                                title: "Delete project",
                                                onclick: {
                                                    let row = row.clone();
                                                    move |_| confirm.write().request(row.clone())
                                                },
                                                "\u{1F5D1}\u{FE0F}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if confirm.read().pending().is_some() {
            ConfirmDialog {
                message: "Delete this project?",
                on_confirm: delete,
                on_cancel: move |_| confirm.write().cancel(),
            }
        }
    }
}
