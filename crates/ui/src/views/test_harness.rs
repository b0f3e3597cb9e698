use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Celebration, SurveyStore};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::SurveyView;
use crate::views::survey::SurveyTestHandles;
use crate::vm::SurveyIntent;

#[derive(Default)]
pub struct CountingCelebration {
    bursts: AtomicUsize,
}

impl CountingCelebration {
    pub fn count(&self) -> usize {
        self.bursts.load(Ordering::SeqCst)
    }
}

impl Celebration for CountingCelebration {
    fn burst(&self) {
        self.bursts.fetch_add(1, Ordering::SeqCst);
    }
}

struct TestApp {
    survey_store: Arc<dyn SurveyStore>,
    celebration: Arc<CountingCelebration>,
}

impl UiApp for TestApp {
    fn survey_store(&self) -> Arc<dyn SurveyStore> {
        Arc::clone(&self.survey_store)
    }

    fn celebration(&self) -> Arc<dyn Celebration> {
        self.celebration.clone()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: SurveyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { SurveyView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub celebration: Arc<CountingCelebration>,
    pub handles: SurveyTestHandles,
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

    /// Rebuild and let the initial load resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive_async().await;
    }

    pub async fn dispatch(&mut self, intent: SurveyIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
        self.drive_async().await;
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

pub fn setup_view_harness() -> ViewHarness {
    setup_view_harness_with_storage(Storage::in_memory())
}

pub fn setup_view_harness_with_storage(storage: Storage) -> ViewHarness {
    let survey_store = Arc::clone(&storage.survey);
    setup_view_harness_with_store(storage, survey_store)
}

pub fn setup_view_harness_with_store(
    storage: Storage,
    survey_store: Arc<dyn SurveyStore>,
) -> ViewHarness {
    let celebration = Arc::new(CountingCelebration::default());
    let handles = SurveyTestHandles::default();

    let app = Arc::new(TestApp {
        survey_store,
        celebration: Arc::clone(&celebration),
    });

    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        celebration,
        handles,
    }
}
