use super::test_harness::{
    builtin_controller, correct_index, finish, fixed_share, setup_view_harness,
    started_controller,
};
use crate::vm::{finished_report, tier_message};
use quiz_core::report::ResultTier;
use quiz_core::time::fixed_clock;

fn render(controller: services::SessionController) -> String {
    let mut harness = setup_view_harness(controller);
    harness.rebuild();
    harness.render()
}

#[test]
fn start_view_smoke_renders_identity_form() {
    let html = render(builtin_controller());
    assert!(html.contains("Стандартные операционные процедуры"), "missing title in {html}");
    assert!(html.contains("Вам предстоит ответить на 10 вопросов."), "missing intro in {html}");
    assert!(html.contains("Фамилия Имя"), "missing name label in {html}");
    assert!(html.contains("Номер группы"), "missing group label in {html}");
    assert!(html.contains("Начать тестирование"), "missing start button in {html}");
    assert!(!html.contains("form-error"), "unexpected error in {html}");
}

#[test]
fn quiz_view_smoke_renders_fresh_question() {
    let html = render(started_controller());
    assert!(html.contains("Вопрос 1 из 10"), "missing progress in {html}");
    assert!(html.contains("0% завершено"), "missing percent in {html}");
    assert!(html.contains("Подсказка:"), "missing hint in {html}");
    assert!(html.contains("Ответить"), "missing submit in {html}");
    assert!(!html.contains("feedback"), "feedback shown too early in {html}");
}

#[test]
fn quiz_view_smoke_reveals_answer_after_wrong_pick() {
    let mut controller = started_controller();
    let wrong = usize::from(correct_index(&controller) == 0);
    controller.select_option(wrong);
    controller.submit();

    let html = render(controller);
    assert!(html.contains("Обратите внимание"), "missing heading in {html}");
    assert!(html.contains("Правильный ответ:"), "missing reveal in {html}");
    assert!(html.contains("option--wrong"), "missing wrong marker in {html}");
    assert!(html.contains("Следующий вопрос"), "missing next button in {html}");
    assert!(!html.contains("Подсказка:"), "hint still shown in {html}");
}

#[test]
fn quiz_view_smoke_praises_correct_pick() {
    let mut controller = started_controller();
    let index = correct_index(&controller);
    controller.select_option(index);
    controller.submit();

    let html = render(controller);
    assert!(html.contains("Отлично!"), "missing praise in {html}");
    assert!(!html.contains("Правильный ответ:"), "reveal shown for correct pick in {html}");
    assert!(html.contains("option--correct"), "missing correct marker in {html}");
}

#[test]
fn result_view_smoke_renders_report_summary() {
    let mut controller = started_controller();
    finish(&mut controller, 2);

    let html = render(controller);
    assert!(html.contains("Результаты тестирования"), "missing heading in {html}");
    assert!(html.contains("Иванов Иван, гр. 25Б-101"), "missing respondent in {html}");
    assert!(html.contains("80%"), "missing percentage in {html}");
    let message = tier_message(ResultTier::Pass);
    assert!(html.contains(message), "missing tier message in {html}");
    assert!(html.contains("Правильных ответов: "), "missing score line in {html}");
    assert!(html.contains("Отправить преподавателю"), "missing mail button in {html}");
    assert!(html.contains("Скопировать результат"), "missing copy button in {html}");
    assert!(html.contains("Пройти тест заново"), "missing restart in {html}");
}

#[test]
fn finished_report_exists_only_after_the_last_answer() {
    let share = fixed_share();
    let mut controller = started_controller();
    assert!(finished_report(&controller, &share).is_none());

    finish(&mut controller, 2);
    let report = finished_report(&controller, &share).unwrap();
    assert_eq!(report.date(), fixed_clock().today());
    assert_eq!(report.percentage(), 80);
    assert_eq!(report.mail().body(), format!("{}\n\n", report.text()));
}
