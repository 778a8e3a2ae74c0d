use dioxus::prelude::*;
use dioxus_router::Link;

use detective_core::model::DetectiveName;

use super::components::{DeskAction, DeskButtons, NoticeModal, SaveNotesModal, SuspectPicker};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{CaseIntent, CaseVm, DeskSnapshot, open_case};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Picker {
    Question,
    Accuse,
}

impl Picker {
    const fn title(self) -> &'static str {
        match self {
            Picker::Question => "Question Suspects",
            Picker::Accuse => "Make Accusation",
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Picker::Question => "Choose a suspect to question:",
            Picker::Accuse => "Who do you think is the thief?",
        }
    }
}

#[component]
pub fn CaseView(name: String) -> Element {
    let ctx = use_context::<AppContext>();
    let services = ctx.services();

    let vm = use_signal(|| None::<CaseVm>);
    let desk = use_signal(|| None::<DeskSnapshot>);
    let busy = use_signal(|| false);
    let mut picker = use_signal(|| None::<Picker>);
    let mut show_save = use_signal(|| false);

    let resource = use_resource(move || {
        let services = services.clone();
        let name = name.clone();
        let mut vm = vm;
        let mut desk = desk;

        async move {
            let detective = DetectiveName::new(name).map_err(|_| ViewError::InvalidName)?;
            let opened = open_case(&services, detective).await;
            desk.set(Some(opened.snapshot()));
            vm.set(Some(opened));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let dispatch = use_callback(move |intent: CaseIntent| {
        let mut vm = vm;
        let mut desk = desk;
        let mut busy = busy;
        spawn(async move {
            let taken = {
                let mut guard = vm.write();
                guard.take()
            };
            let Some(mut local) = taken else {
                return;
            };
            busy.set(true);
            local.dispatch(intent).await;
            desk.set(Some(local.snapshot()));
            {
                let mut guard = vm.write();
                *guard = Some(local);
            }
            busy.set(false);
        });
    });

    let on_action = use_callback(move |action: DeskAction| match action {
        DeskAction::Start => dispatch.call(CaseIntent::Start),
        DeskAction::ViewClues => dispatch.call(CaseIntent::ViewClues),
        DeskAction::Question => picker.set(Some(Picker::Question)),
        DeskAction::Accuse => picker.set(Some(Picker::Accuse)),
        DeskAction::SaveNotes => show_save.set(true),
        DeskAction::Exit => dispatch.call(CaseIntent::Exit),
    });

    let on_pick = use_callback(move |suspect: String| {
        let kind = picker();
        picker.set(None);
        match kind {
            Some(Picker::Question) => dispatch.call(CaseIntent::Question(suspect)),
            Some(Picker::Accuse) => dispatch.call(CaseIntent::Accuse(suspect)),
            None => {}
        }
    });

    let on_save = use_callback(move |path: String| {
        show_save.set(false);
        dispatch.call(CaseIntent::SaveNotes(path));
    });

    let on_dismiss = use_callback(move |()| {
        let mut vm = vm;
        let mut desk = desk;
        let exiting = {
            let mut guard = vm.write();
            let Some(local) = guard.as_mut() else {
                return;
            };
            local.dismiss_notice();
            desk.set(Some(local.snapshot()));
            local.is_exiting()
        };
        if exiting {
            dioxus::desktop::window().close();
        }
    });

    let snapshot = desk.read().clone();

    rsx! {
        div { class: "page case-page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "case-loading", "Opening the case file..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "case-error", "{err.message()}" }
                    Link { to: Route::Login {}, "Back to login" }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some(snapshot) = snapshot {
                        div { class: "desk {snapshot.tint.class()}",
                            pre { id: "desk-display", class: "desk-display", "{snapshot.display}" }
                            DeskButtons { disabled: busy(), on_action }
                        }
                        if let Some(kind) = picker() {
                            SuspectPicker {
                                title: kind.title(),
                                prompt: kind.prompt(),
                                suspects: snapshot.suspects.clone(),
                                on_pick,
                                on_cancel: move |()| picker.set(None),
                            }
                        }
                        if show_save() {
                            SaveNotesModal {
                                on_save,
                                on_cancel: move |()| show_save.set(false),
                            }
                        }
                        if let Some(notice) = snapshot.notice.clone() {
                            NoticeModal { notice, on_dismiss }
                        }
                    }
                },
            }
        }
    }
}
