use dioxus::prelude::*;

use services::SessionController;

use crate::context::AppContext;
use crate::vm::{COPIED_RESET_DELAY, CopyFeedback, finished_report, map_result};

#[component]
pub fn ResultView(controller: Signal<SessionController>) -> Element {
    let mut controller = controller;
    let share = use_context::<AppContext>().share();
    let mut copy_feedback = use_signal(CopyFeedback::default);

    // Dated once per mount; the outcome stays fixed until restart unmounts the view.
    let report = use_hook(|| finished_report(&controller.peek(), &share));
    let Some(report) = report else {
        return rsx! {};
    };
    let vm = map_result(&report);
    let copied = copy_feedback.read().is_copied();
    let copy_label = copy_feedback.read().label();

    let share_for_mail = share.clone();
    let report_for_mail = report.clone();
    let on_send = move |_| {
        let share = share_for_mail.clone();
        let report = report_for_mail.clone();
        spawn(async move {
            let _ = share.send_report(&report).await;
        });
    };

    let on_copy = move |_| {
        let share = share.clone();
        let report = report.clone();
        spawn(async move {
            if !share.copy_report(&report).await.is_delivered() {
                copy_feedback.write().clear();
                return;
            }
            let token = copy_feedback.write().mark_copied();
            spawn(async move {
                tokio::time::sleep(COPIED_RESET_DELAY).await;
                let _ = copy_feedback.write().expire(token);
            });
        });
    };

    let copy_class = if copied { "secondary copied" } else { "secondary" };

    rsx! {
        section { class: "screen result",
            h2 { "Результаты тестирования" }
            p { class: "respondent", "{vm.respondent_line}" }

            div { class: "ring {vm.tone}",
                span { class: "ring-value", "{vm.percent_label}" }
            }

            div { class: "verdict {vm.tone}",
                p { class: "verdict-message", "{vm.message}" }
                p { class: "verdict-score",
                    "Правильных ответов: "
                    strong { "{vm.score}" }
                    " из {vm.total}"
                }
            }

            div { class: "share",
                button { class: "primary", onclick: on_send, "Отправить преподавателю" }
                button { class: "{copy_class}", onclick: on_copy, "{copy_label}" }
            }

            div { class: "restart",
                button {
                    class: "link",
                    onclick: move |_| controller.write().restart(),
                    "Пройти тест заново"
                }
            }
        }
    }
}
