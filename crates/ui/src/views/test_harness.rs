use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;
use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use serenade_core::Clock;
use serenade_core::model::{
    PresentationSettings, PresentationSettingsDraft, TimingSettings, VisitSession,
};
use serenade_core::time::fixed_clock;
use services::{AppServices, GalleryService, MusicService, QuizService};

use crate::context::{UiApp, build_app_context};
use crate::views::{PresentationView, use_answer_submit};

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn settings(&self) -> Arc<PresentationSettings> {
        self.services.settings()
    }

    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn start_page(&self) -> Option<String> {
        None
    }

    fn gallery(&self) -> Arc<GalleryService> {
        self.services.gallery()
    }

    fn music(&self) -> Arc<MusicService> {
        self.services.music()
    }

    fn quiz(&self) -> Arc<QuizService> {
        self.services.quiz()
    }
}

/// The `page` query the harness renders with.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct NavigationHint(pub &'static str);

/// Handles the mounted tree registers so tests can act on the visit.
#[derive(Clone, Default)]
struct HarnessHandles {
    session: Rc<RefCell<Option<Signal<VisitSession>>>>,
    submit: Rc<RefCell<Option<Callback<usize>>>>,
}

impl HarnessHandles {
    fn session(&self) -> Signal<VisitSession> {
        (*self.session.borrow()).expect("session registered")
    }

    fn submit(&self) -> Callback<usize> {
        (*self.submit.borrow()).expect("submit registered")
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    hint: NavigationHint,
    session: VisitSession,
    handles: HarnessHandles,
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
    let session = use_signal(|| props.session.clone());
    use_context_provider(|| session);
    use_context_provider(|| props.hint);
    use_context_provider(|| props.handles.clone());
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *props.handles.session.borrow_mut() = Some(session);
    }
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
    let NavigationHint(hint) = use_context::<NavigationHint>();
    rsx! {
        PresentationView { page: hint.to_string() }
        AnswerHandle {}
    }
}

#[component]
fn AnswerHandle() -> Element {
    let handles = use_context::<HarnessHandles>();
    let selected = use_signal(|| 0usize);
    let submit = use_answer_submit(selected);
    let mut registered = use_signal(|| false);
    if !registered() {
        registered.set(true);
        *handles.submit.borrow_mut() = Some(submit);
    }
    rsx! {}
}

/// `pictures/` and `music/` under a scratch directory, removed on drop.
pub struct MediaDirs {
    root: PathBuf,
}

impl MediaDirs {
    pub fn new(label: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "serenade-ui-{label}-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("pictures")).expect("create pictures dir");
        fs::create_dir_all(root.join("music")).expect("create music dir");
        Self { root }
    }

    pub fn pictures(&self) -> PathBuf {
        self.root.join("pictures")
    }

    pub fn music(&self) -> PathBuf {
        self.root.join("music")
    }

    pub fn add_photo(&self, name: &str) {
        image::RgbImage::from_pixel(6, 4, image::Rgb([255, 182, 193]))
            .save(self.pictures().join(name))
            .expect("write photo");
    }

    pub fn add_song(&self, name: &str) {
        fs::write(self.music().join(name), b"la la la").expect("write song");
    }

    fn settings(&self, timing: TimingSettings) -> PresentationSettings {
        PresentationSettingsDraft {
            pictures_dir: Some(self.pictures()),
            music_dir: Some(self.music()),
            timing: Some(timing),
            ..PresentationSettingsDraft::default()
        }
        .validate()
        .expect("valid settings")
    }
}

impl Drop for MediaDirs {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    handles: HarnessHandles,
    _media: MediaDirs,
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

    /// Rebuild and let pending resources settle.
    pub async fn settle(&mut self) {
        self.rebuild();
        for _ in 0..5 {
            self.drive_async().await;
        }
    }

    /// Drive until `done` holds for the visit, or give up after `rounds`.
    pub async fn drive_until(
        &mut self,
        rounds: usize,
        done: impl Fn(&VisitSession) -> bool,
    ) -> bool {
        for _ in 0..rounds {
            if done(&self.session()) {
                return true;
            }
            self.drive_async().await;
        }
        done(&self.session())
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn session(&self) -> VisitSession {
        let session = self.handles.session();
        self.dom.in_runtime(|| session.peek().clone())
    }

    pub fn update_session(&mut self, change: impl FnOnce(&mut VisitSession)) {
        let mut session = self.handles.session();
        self.dom.in_runtime(|| change(&mut session.write()));
        drive_dom(&mut self.dom);
    }

    /// Answer the current question as if `choice` were picked and "next"
    /// clicked.
    pub fn submit_answer(&mut self, choice: usize) {
        let submit = self.handles.submit();
        self.dom.in_runtime(|| submit.call(choice));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Timers short enough for a test to wait out.
pub fn fast_timing() -> TimingSettings {
    TimingSettings {
        popup_display: Duration::from_millis(10),
        quiz_result_display: Duration::from_millis(10),
        ..TimingSettings::default()
    }
}

pub fn setup_view_harness(
    media: MediaDirs,
    session: VisitSession,
    hint: NavigationHint,
) -> ViewHarness {
    setup_view_harness_with_timing(media, session, hint, TimingSettings::default())
}

pub fn setup_view_harness_with_timing(
    media: MediaDirs,
    session: VisitSession,
    hint: NavigationHint,
    timing: TimingSettings,
) -> ViewHarness {
    let services =
        AppServices::new(media.settings(timing), fixed_clock()).expect("app services");
    let app = Arc::new(TestApp { services });
    let handles = HarnessHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            hint,
            session,
            handles: handles.clone(),
        },
    );
    ViewHarness {
        dom,
        handles,
        _media: media,
    }
}
