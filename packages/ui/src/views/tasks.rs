use dioxus::prelude::*;
use store::models::{NewTask, Task, TaskPatch};
use store::TaskStatus;

use super::{ConfirmDialog, RequireAuth, Spinner};
use crate::collection::{Collection, Confirmation};
use crate::time::{date_input_value, parse_date_input};
use crate::{use_auth, use_session};

/// Status tab of the tasks list. `None` shows every task.
pub fn tasks_in_tab(tasks: &[Task], tab: Option<TaskStatus>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| tab.is_none_or(|s| t.status == s))
        .cloned()
        .collect()
}

#[component]
pub fn TasksView(on_login: EventHandler<()>) -> Element {
    let session = use_session();
    let auth = use_auth();
    let mut tasks = use_signal(Collection::<Task>::default);
    let mut tab = use_signal(|| Option::<TaskStatus>::None);
    let mut new_title = use_signal(String::new);
    let mut confirm = use_signal(Confirmation::<Task>::default);

    let _loader = use_resource({
        let session = session.clone();
        move || {
            let signed_in = auth().user.is_some();
            let client = session.client();
            async move {
                if !signed_in {
                    return;
                }
                match client.list_tasks().await {
                    Ok(items) => tasks.write().replace(items),
                    Err(e) => {
                        tracing::error!("Failed to fetch tasks: {}", e);
                        tasks.write().fetch_failed();
                    }
                }
            }
        }
    });

    let create = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let title = new_title().trim().to_string();
            if title.is_empty() {
                return;
            }
            let task = NewTask {
                title,
                status: tab().unwrap_or_default(),
                ..NewTask::default()
            };
            let client = session.client();
            spawn(async move {
                match client.create_task(&task).await {
                    Ok(created) => {
                        tasks.write().upsert(created);
                        new_title.set(String::new());
                    }
                    Err(e) => tracing::error!("Failed to create task: {}", e),
                }
            });
        }
    };

    let update = use_callback({
        let session = session.clone();
        move |(id, patch): (String, TaskPatch)| {
            let client = session.client();
            spawn(async move {
                match client.update_task(&id, &patch).await {
                    Ok(updated) => tasks.write().upsert(updated),
                    Err(e) => tracing::error!("Failed to update task {}: {}", id, e),
                }
            });
        }
    });

    let delete = move |_| {
        let Some(task) = confirm.write().confirm() else {
            return;
        };
        let client = session.client();
        spawn(async move {
            match client.delete_task(&task.id).await {
                Ok(()) => {
                    tasks.write().remove(&task.id);
                }
                Err(e) => tracing::error!("Failed to delete task {}: {}", task.id, e),
            }
        });
    };

    let list = tasks.read();
    let loading = list.is_loading();
    let visible = tasks_in_tab(list.items(), tab());
    drop(list);

    let tabs: Vec<(Option<TaskStatus>, &'static str)> = std::iter::once((None, "All"))
        .chain(TaskStatus::ALL.into_iter().map(|s| (Some(s), s.as_str())))
        .collect();

    rsx! {
        RequireAuth {
            on_login,
            if loading {
                Spinner {}
            } else {
                div {
                    class: "max-w-4xl mx-auto p-8",
                    h1 { class: "text-3xl font-bold mb-6", "Tasks" }

                    div {
                        class: "tabs flex gap-2 mb-6 border-b",
                        for (status, label) in tabs {
                            button {
                                key: "{label}",
                                class: if tab() == status { "tab active" } else { "tab" },
                                onclick: move |_| tab.set(status),
                                "{label}"
                            }
                        }
                    }

                    form {
                        class: "flex gap-2 mb-6",
                        onsubmit: create,
                        input {
                            r#type: "text",
                            class: "form-input flex-1",
                            placeholder: "New task",
                            value: "{new_title}",
                            oninput: move |evt| new_title.set(evt.value()),
                        }
                        button { r#type: "submit", class: "btn primary", "Add" }
                    }

                    if visible.is_empty() {
                        div { class: "text-center py-12 text-gray-500", "No tasks" }
                    }

                    div {
                        class: "space-y-1",
                        for task in visible {
                            div {
                                key: "{task.id}",
                                class: "task-row group flex items-center gap-3 px-3 py-2 rounded",
                                div {
                                    class: if task.status == TaskStatus::Done { "todo-check checked" } else { "todo-check" },
                                    role: "checkbox",
                                    aria_checked: "{task.status == TaskStatus::Done}",
                                    onclick: {
                                        let id = task.id.clone();
                                        let next = if task.status == TaskStatus::Done { TaskStatus::NotStarted } else { TaskStatus::Done };
                                        move |_| update.call((id.clone(), TaskPatch { status: Some(next), ..TaskPatch::default() }))
                                    },
                                    if task.status == TaskStatus::Done { "\u{2713}" }
                                }
                                span {
                                    class: if task.status == TaskStatus::Done { "flex-1 line-through text-gray-400" } else { "flex-1" },
                                    "{task.title}"
                                }
                                input {
                                    r#type: "date",
                                    class: "text-xs text-gray-500 bg-transparent",
                                    value: "{date_input_value(task.due_date)}",
                                    onchange: {
                                        let id = task.id.clone();
                                        move |evt: FormEvent| {
                                            let patch = TaskPatch { due_date: Some(parse_date_input(&evt.value())), ..TaskPatch::default() };
                                            update.call((id.clone(), patch));
                                        }
                                    },
                                }
                                select {
                                    class: "text-xs bg-transparent",
                                    value: "{task.status.as_str()}",
                                    onchange: {
                                        let id = task.id.clone();
                                        move |evt: FormEvent| {
                                            if let Some(status) = TaskStatus::parse(&evt.value()) {
                                                update.call((id.clone(), TaskPatch { status: Some(status), ..TaskPatch::default() }));
                                            }
                                        }
                                    },
                                    for status in TaskStatus::ALL {
                                        option { value: "{status.as_str()}", selected: status == task.status, "{status.as_str()}" }
                                    }
                                }
                                button {
                                    class: "opacity-0 group-hover:opacity-100 p-1 rounded text-gray-400",
                                    title: "Delete task",
                                    onclick: {
                                        let task = task.clone();
                                        move |_| confirm.write().request(task.clone())
                                    },
                                    "\u{1F5D1}\u{FE0F}"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(task) = confirm.read().pending() {
            ConfirmDialog {
                message: format!("Delete \"{}\"?", task.title),
                on_confirm: delete,
                on_cancel: move |_| confirm.write().cancel(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::models::Priority;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task {
            id: id.into(),
            title: id.into(),
            status,
            priority: Priority::Medium,
            assignee: None,
            due_date: None,
            project: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_tabs_filter_by_status() {
        let tasks = vec![
            task("a", TaskStatus::NotStarted),
            task("b", TaskStatus::Done),
            task("c", TaskStatus::InProgress),
            task("d", TaskStatus::Done),
        ];
        let ids = |tab| -> Vec<String> { tasks_in_tab(&tasks, tab).into_iter().map(|t| t.id).collect() };
        assert_eq!(ids(None), vec!["a", "b", "c", "d"]);
        assert_eq!(ids(Some(TaskStatus::Done)), vec!["b", "d"]);
        assert_eq!(ids(Some(TaskStatus::InProgress)), vec!["c"]);
    }
}
