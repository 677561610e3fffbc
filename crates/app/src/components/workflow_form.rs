use dioxus::prelude::*;
use shared_types::{NewWorkflow, WorkflowType, ALL_WORKFLOW_TYPES};
use shared_ui::{
    use_toast, Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle,
    FormSelect, Input, Textarea, ToastOptions,
};

use crate::use_api;

/// "Create New Request" dialog for `username`.
#[component]
pub fn CreateWorkflowDialog(
    open: Signal<bool>,
    username: String,
    on_created: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toast = use_toast();

    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut workflow_type = use_signal(WorkflowType::default);
    let mut amount = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let mut reset = move || {
        title.set(String::new());
        description.set(String::new());
        workflow_type.set(WorkflowType::default());
        amount.set(String::new());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        let username = username.clone();
        let form = NewWorkflow::from_form(&title(), &description(), workflow_type(), &amount());
        saving.set(true);
        spawn(async move {
            let result = match form {
                Ok(body) => api.create_workflow(&username, &body).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => {
                    toast.success("Request submitted".to_string(), ToastOptions::new());
                    reset();
                    open.set(false);
                    on_created.call(());
                }
                Err(e) => {
                    toast.error(format!("Failed to create workflow. {}", e.message), ToastOptions::new());
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        DialogRoot {
            open: open(),
            on_open_change: move |v| open.set(v),
            DialogContent {
                DialogTitle { "Create New Request" }
                DialogDescription { "Submit a request for approval by your department manager." }
                form { class: "dialog-form", onsubmit: handle_submit,
                    Input {
                        id: "workflow-title",
                        label: "Request Title",
                        placeholder: "Enter a descriptive title",
                        value: title(),
                        required: true,
                        on_input: move |e: FormEvent| title.set(e.value()),
                    }
                    Textarea {
                        id: "workflow-description",
                        label: "Description",
                        placeholder: "Provide details about your request",
                        value: description(),
                        required: true,
                        on_input: move |e: FormEvent| description.set(e.value()),
                    }
                    FormSelect {
                        id: "workflow-type",
                        label: "Request Type",
                        value: workflow_type().as_str().to_string(),
                        onchange: move |e: Event<FormData>| {
                            if let Some(t) = WorkflowType::parse(&e.value()) {
                                workflow_type.set(t);
                            }
                        },
                        for t in ALL_WORKFLOW_TYPES.iter() {
                            option { value: t.as_str(), "{t.label()}" }
                        }
                    }
                    Input {
                        id: "workflow-amount",
                        label: "Amount",
                        input_type: "number",
                        placeholder: "0.00",
                        value: amount(),
                        on_input: move |e: FormEvent| amount.set(e.value()),
                    }
                    div { class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| open.set(false),
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            disabled: saving(),
                            if saving() { "Creating..." } else { "Create Request" }
                        }
                    }
                }
            }
        }
    }
}
