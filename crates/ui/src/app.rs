use dioxus::prelude::*;

use services::{QuizPhase, SessionController};

use crate::context::AppContext;
use crate::views::{QuizView, ResultView, StartView};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "Тестирование по СОП" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Что-то пошло не так" }
                        pre { "{errors:?}" }
                    }
                },
                QuizApp {}
            }
        }
    }
}

/// Owns the session for the lifetime of the window.
#[component]
fn QuizApp() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = use_signal(move || SessionController::new(ctx.bank()));
    rsx! { SessionScreen { controller } }
}

/// Shows the screen that matches the session phase.
#[component]
pub fn SessionScreen(controller: Signal<SessionController>) -> Element {
    let phase = controller.read().phase();
    rsx! {
        main { class: "card",
            match phase {
                QuizPhase::NotStarted => rsx! { StartView { controller } },
                QuizPhase::InProgress => rsx! { QuizView { controller } },
                QuizPhase::Finished => rsx! { ResultView { controller } },
            }
        }
    }
}
