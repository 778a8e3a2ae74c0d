use dioxus::prelude::*;

use crate::vm::{Notice, NoticeKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeskAction {
    Start,
    ViewClues,
    Question,
    Accuse,
    SaveNotes,
    Exit,
}

const DESK_ACTIONS: [(DeskAction, &str, &str); 6] = [
    (DeskAction::Start, "desk-start", "Start Case"),
    (DeskAction::ViewClues, "desk-clues", "View Clues"),
    (DeskAction::Question, "desk-question", "Question Suspects"),
    (DeskAction::Accuse, "desk-accuse", "Make Accusation"),
    (DeskAction::SaveNotes, "desk-save", "Save Notes"),
    (DeskAction::Exit, "desk-exit", "Exit"),
];

pub const DEFAULT_NOTES_FILE: &str = "investigation_log.txt";

#[component]
pub fn DeskButtons(disabled: bool, on_action: Callback<DeskAction>) -> Element {
    rsx! {
        div { class: "desk-buttons",
            for (action, id, label) in DESK_ACTIONS {
                button {
                    key: "{id}",
                    id: "{id}",
                    class: "btn desk-btn",
                    r#type: "button",
                    disabled: disabled,
                    onclick: move |_| on_action.call(action),
                    "{label}"
                }
            }
        }
    }
}

/// Modal list of suspects; picking one closes it.
#[component]
pub fn SuspectPicker(
    title: &'static str,
    prompt: &'static str,
    suspects: Vec<&'static str>,
    on_pick: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    rsx! {
        div {
            class: "desk-modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "desk-modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "desk-modal-title", "{title}" }
                p { class: "desk-modal-body", "{prompt}" }
                ul { class: "desk-suspects",
                    for suspect in suspects {
                        li { key: "{suspect}",
                            button {
                                class: "btn desk-suspect",
                                r#type: "button",
                                onclick: move |_| on_pick.call(suspect.to_string()),
                                "{suspect}"
                            }
                        }
                    }
                }
                div { class: "desk-modal-actions",
                    button {
                        class: "btn desk-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
pub fn SaveNotesModal(on_save: Callback<String>, on_cancel: Callback<()>) -> Element {
    let mut path = use_signal(|| DEFAULT_NOTES_FILE.to_string());

    rsx! {
        div {
            class: "desk-modal-overlay",
            onclick: move |_| on_cancel.call(()),
            div {
                class: "desk-modal",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "desk-modal-title", "Save Investigation Log" }
                label { class: "desk-modal-body", r#for: "notes-path", "Save to file:" }
                input {
                    id: "notes-path",
                    class: "desk-input",
                    r#type: "text",
                    value: "{path}",
                    oninput: move |evt| path.set(evt.value()),
                }
                div { class: "desk-modal-actions",
                    button {
                        class: "btn desk-modal-cancel",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_save.call(path()),
                        "Save"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NoticeModal(notice: Notice, on_dismiss: Callback<()>) -> Element {
    let (kind_class, title) = match notice.kind {
        NoticeKind::Info => ("notice-info", "Detective Game"),
        NoticeKind::Success => ("notice-success", "Case Update"),
        NoticeKind::Error => ("notice-error", "Error"),
    };

    rsx! {
        div { class: "desk-modal-overlay",
            div {
                class: "desk-modal {kind_class}",
                role: "alertdialog",
                h3 { class: "desk-modal-title", "{title}" }
                pre { class: "desk-notice", "{notice.message}" }
                div { class: "desk-modal-actions",
                    button {
                        id: "notice-ok",
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
