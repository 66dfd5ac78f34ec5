use dioxus::prelude::*;

use services::SessionController;

use crate::vm::{StartForm, intro_line};

#[component]
pub fn StartView(controller: Signal<SessionController>) -> Element {
    let mut controller = controller;
    let mut form = use_signal(StartForm::default);

    let (title, intro) = {
        let controller = controller.read();
        let bank = controller.bank();
        (bank.title().to_string(), intro_line(bank.len()))
    };
    let name = form.read().name().to_string();
    let group = form.read().group().to_string();
    let error = form.read().error();

    let on_start = move |_| {
        let draft = form.read().draft();
        let result = controller.write().start(draft);
        if let Err(err) = result {
            form.write().show_error(&err);
        }
    };

    rsx! {
        section { class: "screen start",
            h1 { class: "title", "{title}" }
            p { class: "intro",
                "{intro}"
                br {}
                "Введите свои данные, чтобы преподаватель мог идентифицировать результаты."
            }

            div { class: "identity",
                h3 { "Данные студента" }
                label { r#for: "respondent-name", "Фамилия Имя" }
                input {
                    id: "respondent-name",
                    r#type: "text",
                    value: "{name}",
                    placeholder: "Иванов Иван",
                    oninput: move |evt: FormEvent| form.write().set_name(evt.value()),
                }
                label { r#for: "respondent-group", "Номер группы" }
                input {
                    id: "respondent-group",
                    r#type: "text",
                    value: "{group}",
                    placeholder: "25Б-101",
                    oninput: move |evt: FormEvent| form.write().set_group(evt.value()),
                }
                if let Some(message) = error {
                    p { class: "form-error", "{message}" }
                }
            }

            button { class: "primary", onclick: on_start, "Начать тестирование" }
        }
    }
}
