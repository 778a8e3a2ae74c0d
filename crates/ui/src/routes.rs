use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{CaseView, LoginView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LoginView)] Login {},
        #[route("/case/:name", CaseView)] Case { name: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "🕵️ Detective" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
