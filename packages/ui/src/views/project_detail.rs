use dioxus::prelude::*;
use store::models::{Priority, Project, ProjectPatch, ProjectStatus};

use super::projects::{priority_badge, status_badge};
use super::{ConfirmDialog, RequireAuth, Spinner};
use crate::time::date_input_value;
use crate::{use_auth, use_session};

/// One project: read-only summary, an edit form, and deletion.
#[component]
pub fn ProjectDetailView(
    project_id: String,
    /// Called after deletion, or when the project cannot be loaded.
    on_back: EventHandler<()>,
    on_login: EventHandler<()>,
) -> Element {
    let mut id_signal = use_signal(|| project_id.clone());
    if *id_signal.peek() != project_id {
        id_signal.set(project_id.clone());
    }

    let session = use_session();
    let auth = use_auth();
    let mut project = use_signal(|| Option::<Project>::None);
    let mut loading = use_signal(|| true);
    let mut form = use_signal(|| Option::<ProjectPatch>::None);
    let mut confirm_delete = use_signal(|| false);

    let _loader = use_resource({
        let session = session.clone();
        move || {
            let id = id_signal();
            let signed_in = auth().user.is_some();
            let client = session.client();
            async move {
                if !signed_in {
                    return;
                }
                match client.get_project(&id).await {
                    Ok(p) => project.set(Some(p)),
                    Err(e) if e.status().is_some() => {
                        tracing::warn!("Project {} unavailable: {}", id, e);
                        on_back.call(());
                    }
                    Err(e) => tracing::error!("Failed to fetch project {}: {}", id, e),
                }
                loading.set(false);
            }
        }
    });

    let save = {
        let session = session.clone();
        move |_| {
            let Some(patch) = form() else {
                return;
            };
            let id = id_signal();
            let client = session.client();
            spawn(async move {
                match client.update_project(&id, &patch).await {
                    Ok(updated) => {
                        project.set(Some(updated));
                        form.set(None);
                    }
                    Err(e) => tracing::error!("Failed to update project {}: {}", id, e),
                }
            });
        }
    };

    let delete = move |_| {
        confirm_delete.set(false);
        let id = id_signal();
        let client = session.client();
        spawn(async move {
            match client.delete_project(&id).await {
                Ok(()) => on_back.call(()),
                Err(e) => tracing::error!("Failed to delete project {}: {}", id, e),
            }
        });
    };

    rsx! {
        RequireAuth {
            on_login,
            if loading() {
                Spinner {}
            } else if let Some(p) = project() {
                div {
                    class: "max-w-4xl mx-auto p-8",
                    button {
                        class: "back-link flex items-center gap-2 text-gray-500 mb-6",
                        onclick: move |_| on_back.call(()),
                        "\u{2190} Back to projects"
                    }

                    if let Some(patch) = form() {
                        ProjectForm {
                            patch,
                            on_change: move |p| form.set(Some(p)),
                            on_save: save,
                            on_cancel: move |_| form.set(None),
                        }
                    } else {
                        div {
                            class: "flex items-start justify-between mb-6",
                            div {
                                h1 { class: "text-4xl font-bold mb-2", "{p.title}" }
                                div {
                                    class: "flex items-center gap-3",
                                    span { class: status_badge(p.status), "{p.status.as_str()}" }
                                    span { class: priority_badge(p.priority), "{p.priority.as_str()}" }
                                }
                            }
                            div {
                                class: "flex gap-2",
                                button {
                                    class: "btn secondary",
                                    onclick: {
                                        let patch = ProjectPatch::from(&p);
                                        move |_| form.set(Some(patch.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn danger",
                                    onclick: move |_| confirm_delete.set(true),
                                    "Delete"
                                }
                            }
                        }

                        if !p.description.is_empty() {
                            div {
                                class: "mb-8",
                                h2 { class: "text-lg font-semibold mb-2", "Description" }
                                p { class: "text-gray-600 whitespace-pre-wrap", "{p.description}" }
                            }
                        }

                        div {
                            class: "grid grid-cols-2 gap-6",
                            if let Some(assignee) = &p.assignee {
                                div {
                                    h3 { class: "text-sm font-medium text-gray-500 mb-2", "Assignee" }
                                    p { "{assignee.name}" }
                                    p { class: "text-sm text-gray-500", "{assignee.email}" }
                                }
                            }
                            if p.start_date.is_some() {
                                div {
                                    h3 { class: "text-sm font-medium text-gray-500 mb-2", "Start date" }
                                    p { "{date_input_value(p.start_date)}" }
                                }
                            }
                            if p.end_date.is_some() {
                                div {
                                    h3 { class: "text-sm font-medium text-gray-500 mb-2", "End date" }
                                    p { "{date_input_value(p.end_date)}" }
                                }
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "flex items-center justify-center h-full",
                    div {
                        class: "text-center",
                        h2 { class: "text-2xl font-bold mb-4", "Project not found" }
                        button { class: "link", onclick: move |_| on_back.call(()), "Back to projects" }
                    }
                }
            }
        }

        if confirm_delete() {
            ConfirmDialog {
                message: "Are you sure you want to delete this project? This action cannot be undone.",
                on_confirm: delete,
                on_cancel: move |_| confirm_delete.set(false),
            }
        }
    }
}

#[component]
fn ProjectForm(
    patch: ProjectPatch,
    on_change: EventHandler<ProjectPatch>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let title = patch.title.clone().unwrap_or_default();
    let description = patch.description.clone().unwrap_or_default();
    let status = patch.status.unwrap_or_default();
    let priority = patch.priority.unwrap_or_default();

    let edit = move |update: ProjectPatch| {
        let mut next = patch.clone();
        if update.title.is_some() {
            next.title = update.title;
        }
        if update.description.is_some() {
            next.description = update.description;
        }
        if update.status.is_some() {
            next.status = update.status;
        }
        if update.priority.is_some() {
            next.priority = update.priority;
        }
        on_change.call(next);
    };

    rsx! {
        div {
            class: "space-y-6",
            div {
                label { class: "block text-sm font-medium mb-2", "Title" }
                input {
                    r#type: "text",
                    class: "form-input w-full",
                    value: "{title}",
                    oninput: {
                        let edit = edit.clone();
                        move |evt: FormEvent| {
                            if let Some(p) = ProjectPatch::field("title", &evt.value()) {
                                edit(p);
                            }
                        }
                    },
                }
            }
            div {
                label { class: "block text-sm font-medium mb-2", "Description" }
                textarea {
                    class: "form-input w-full",
                    rows: 4,
                    value: "{description}",
                    oninput: {
                        let edit = edit.clone();
                        move |evt: FormEvent| {
                            if let Some(p) = ProjectPatch::field("description", &evt.value()) {
                                edit(p);
                            }
                        }
                    },
                }
            }
            div {
                class: "grid grid-cols-2 gap-4",
                div {
                    label { class: "block text-sm font-medium mb-2", "Status" }
                    select {
                        class: "form-input w-full",
                        value: "{status.as_str()}",
                        onchange: {
                            let edit = edit.clone();
                            move |evt: FormEvent| {
                                if let Some(p) = ProjectPatch::field("status", &evt.value()) {
                                    edit(p);
                                }
                            }
                        },
                        for option in ProjectStatus::ALL {
                            option { value: "{option.as_str()}", selected: option == status, "{option.as_str()}" }
                        }
                    }
                }
                div {
                    label { class: "block text-sm font-medium mb-2", "Priority" }
                    select {
                        class: "form-input w-full",
                        value: "{priority.as_str()}",
                        onchange: {
                            let edit = edit.clone();
                            move |evt: FormEvent| {
                                if let Some(p) = ProjectPatch::field("priority", &evt.value()) {
                                    edit(p);
                                }
                            }
                        },
                        for option in Priority::ALL {
                            option { value: "{option.as_str()}", selected: option == priority, "{option.as_str()}" }
                        }
                    }
                }
            }
            div {
                class: "flex gap-2",
                button { class: "btn primary", onclick: move |_| on_save.call(()), "Save" }
                button { class: "btn secondary", onclick: move |_| on_cancel.call(()), "Cancel" }
            }
        }
    }
}
