use dioxus::prelude::*;
use dioxus_router::use_navigator;

use detective_core::model::DetectiveName;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<ViewError>);

    let preset = ctx.preset_detective().cloned();
    use_effect(move || {
        if let Some(detective) = preset.clone() {
            let _ = navigator.replace(Route::Case {
                name: detective.to_string(),
            });
        }
    });

    let submit = move |_: MouseEvent| match DetectiveName::new(name()) {
        Ok(detective) => {
            error.set(None);
            let _ = navigator.push(Route::Case {
                name: detective.to_string(),
            });
        }
        Err(_) => error.set(Some(ViewError::InvalidName)),
    };

    rsx! {
        div { class: "page login",
            h2 { "Detective Login" }
            label { r#for: "detective-name", "Enter your name, Detective:" }
            input {
                id: "detective-name",
                r#type: "text",
                value: "{name}",
                autofocus: true,
                oninput: move |evt| name.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: submit,
                "Begin Investigation"
            }
            if let Some(err) = error() {
                p { class: "login-error", "{err.message()}" }
            }
        }
    }
}
