use std::path::PathBuf;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use detective_core::CaseFile;
use detective_core::model::DetectiveName;
use services::{AppServices, FileCaseContent};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CaseView, LoginView};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
    preset_detective: Option<DetectiveName>,
}

impl UiApp for TestApp {
    fn services(&self) -> AppServices {
        self.services.clone()
    }

    fn preset_detective(&self) -> Option<DetectiveName> {
        self.preset_detective.clone()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Login,
    Case(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Case(name) => rsx! { CaseView { name } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, clues_path: PathBuf) -> ViewHarness {
    setup_view_harness_with_storage(view, clues_path, Storage::in_memory())
}

pub fn setup_view_harness_with_storage(
    view: ViewKind,
    clues_path: PathBuf,
    storage: Storage,
) -> ViewHarness {
    let content = Arc::new(FileCaseContent::new(CaseFile::museum_heist(), clues_path));
    let services = AppServices::new(Some(storage.clone()), content);
    let app = Arc::new(TestApp {
        services,
        preset_detective: None,
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, storage }
}
