use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::{IdentityDraft, QuestionBank};
use quiz_core::report::{MailDraft, ReportPolicy};
use quiz_core::time::fixed_now;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{Clipboard, Clock, HandoffError, MailComposer, SessionController, ShareService};

use crate::app::SessionScreen;
use crate::context::{UiApp, build_app_context};

struct NullClipboard;

#[async_trait(?Send)]
impl Clipboard for NullClipboard {
    async fn write_text(&self, _text: &str) -> Result<(), HandoffError> {
        Ok(())
    }
}

struct NullMail;

#[async_trait(?Send)]
impl MailComposer for NullMail {
    async fn compose(&self, _draft: &MailDraft) -> Result<(), HandoffError> {
        Ok(())
    }
}

#[derive(Clone)]
struct TestApp {
    bank: Arc<QuestionBank>,
    share: Arc<ShareService>,
}

impl UiApp for TestApp {
    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn share(&self) -> Arc<ShareService> {
        Arc::clone(&self.share)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    controller: SessionController,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let initial = props.controller.clone();
    let controller = use_signal(move || initial);
    rsx! { SessionScreen { controller } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
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

pub fn builtin_controller() -> SessionController {
    let bank = QuestionBank::builtin().expect("builtin bank");
    SessionController::new(Arc::new(bank))
}

/// Controller already past the start screen, shuffled with a fixed seed.
pub fn started_controller() -> SessionController {
    let mut controller = builtin_controller();
    controller
        .start_with_rng(
            IdentityDraft::new("Иванов Иван", "25Б-101"),
            &mut StdRng::seed_from_u64(5),
        )
        .expect("start session");
    controller
}

pub fn correct_index(controller: &SessionController) -> usize {
    controller
        .state()
        .current_question()
        .and_then(|question| question.correct_index())
        .expect("current question")
}

pub fn fixed_share() -> Arc<ShareService> {
    Arc::new(ShareService::new(
        Clock::fixed(fixed_now()),
        ReportPolicy::default(),
        Arc::new(NullClipboard),
        Arc::new(NullMail),
    ))
}

/// Play the session to the end, missing the first `misses` questions.
pub fn finish(controller: &mut SessionController, misses: usize) {
    let mut position = 0;
    while controller.outcome().is_none() {
        let correct = correct_index(controller);
        let pick = if position < misses { usize::from(correct == 0) } else { correct };
        controller.select_option(pick);
        controller.submit();
        controller.advance();
        position += 1;
    }
}

pub fn setup_view_harness(controller: SessionController) -> ViewHarness {
    let bank = Arc::new(controller.bank().clone());
    let share = fixed_share();
    let app = Arc::new(TestApp { bank, share });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, controller });
    ViewHarness { dom }
}
