use dioxus::prelude::*;

use services::SessionController;

use crate::vm::{FeedbackVm, OptionVm, QuizAction, map_quiz};

#[component]
pub fn QuizView(controller: Signal<SessionController>) -> Element {
    let mut controller = controller;
    let Some(vm) = map_quiz(controller.read().state()) else {
        return rsx! {};
    };

    let action = vm.action;
    let on_action = move |_| match action {
        QuizAction::Submit { .. } => controller.write().submit(),
        QuizAction::Next | QuizAction::Finish => controller.write().advance(),
    };
    let action_disabled = action == QuizAction::Submit { enabled: false };
    let action_label = action.label();

    rsx! {
        section { class: "screen quiz",
            header { class: "progress",
                div { class: "progress-labels",
                    span { "{vm.progress_label}" }
                    span { "{vm.percent_label}" }
                }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.percent_complete}%" }
                }
            }

            div { class: "question",
                h2 { class: "prompt", "{vm.prompt}" }
                div { class: "options",
                    for option in vm.options.clone() {
                        OptionButton { key: "{option.index}", option, controller }
                    }
                }

                if let Some(feedback) = vm.feedback.clone() {
                    FeedbackPanel { feedback }
                }
                if let Some(hint) = vm.hint.clone() {
                    div { class: "hint", "Подсказка: {hint}" }
                }
            }

            footer { class: "actions",
                button {
                    class: "primary",
                    disabled: action_disabled,
                    onclick: on_action,
                    "{action_label}"
                }
            }
        }
    }
}

#[component]
fn OptionButton(option: OptionVm, controller: Signal<SessionController>) -> Element {
    let mut controller = controller;
    let index = option.index;
    let class = option.state.css_class();
    rsx! {
        button {
            class: "{class}",
            disabled: option.state.is_locked(),
            onclick: move |_| controller.write().select_option(index),
            span { class: "option-marker" }
            span { class: "option-text", "{option.text}" }
        }
    }
}

#[component]
fn FeedbackPanel(feedback: FeedbackVm) -> Element {
    let heading_class = if feedback.is_correct {
        "feedback-heading feedback-heading--correct"
    } else {
        "feedback-heading feedback-heading--wrong"
    };
    rsx! {
        div { class: "feedback",
            div { class: "{heading_class}", "{feedback.heading}" }
            p { class: "feedback-rationale", "{feedback.rationale}" }
            if let Some(answer) = feedback.correct_answer.clone() {
                div { class: "feedback-reveal",
                    span { class: "feedback-reveal-label", "Правильный ответ: " }
                    "{answer.text}"
                    div { class: "feedback-reveal-rationale", "{answer.rationale}" }
                }
            }
        }
    }
}
