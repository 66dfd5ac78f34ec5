use quiz_core::model::Question;
use services::SessionState;

/// How a single answer button is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
    Dimmed,
}

impl OptionState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            OptionState::Idle => "option",
            OptionState::Selected => "option option--selected",
            OptionState::Correct => "option option--correct",
            OptionState::Wrong => "option option--wrong",
            OptionState::Dimmed => "option option--dimmed",
        }
    }

    /// Options stop reacting to clicks once the answer is graded.
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(
            self,
            OptionState::Correct | OptionState::Wrong | OptionState::Dimmed
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub text: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorrectAnswerVm {
    pub text: String,
    pub rationale: String,
}

/// Feedback shown after grading.
///
/// The rationale is always the selected option's; the correct answer is only
/// spelled out when the selection was wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub heading: &'static str,
    pub rationale: String,
    pub correct_answer: Option<CorrectAnswerVm>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizAction {
    Submit { enabled: bool },
    Next,
    Finish,
}

impl QuizAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            QuizAction::Submit { .. } => "Ответить",
            QuizAction::Next => "Следующий вопрос",
            QuizAction::Finish => "Завершить тест",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub progress_label: String,
    pub percent_label: String,
    pub percent_complete: u32,
    pub prompt: String,
    /// Present only while the question is not graded.
    pub hint: Option<String>,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub action: QuizAction,
}

/// Map the in-progress session to what the quiz screen renders.
#[must_use]
pub fn map_quiz(state: &SessionState) -> Option<QuizVm> {
    let question = state.current_question()?;
    let progress = state.progress();
    let graded = state.is_graded();
    let selection = state.selection();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| OptionVm {
            index,
            text: option.text().to_string(),
            state: option_state(graded, selection == Some(index), option.is_correct()),
        })
        .collect();

    let action = if !graded {
        QuizAction::Submit {
            enabled: selection.is_some(),
        }
    } else if state.is_last_question() {
        QuizAction::Finish
    } else {
        QuizAction::Next
    };

    Some(QuizVm {
        progress_label: format!("Вопрос {} из {}", progress.position, progress.total),
        percent_label: format!("{}% завершено", progress.percent_complete),
        percent_complete: progress.percent_complete,
        prompt: question.prompt().to_string(),
        hint: (!graded).then(|| question.hint().to_string()),
        options,
        feedback: if graded { feedback(question, selection) } else { None },
        action,
    })
}

fn option_state(graded: bool, selected: bool, correct: bool) -> OptionState {
    match (graded, selected, correct) {
        (false, true, _) => OptionState::Selected,
        (false, false, _) => OptionState::Idle,
        (true, _, true) => OptionState::Correct,
        (true, true, false) => OptionState::Wrong,
        (true, false, false) => OptionState::Dimmed,
    }
}

fn feedback(question: &Question, selection: Option<usize>) -> Option<FeedbackVm> {
    let selected = question.option(selection?)?;
    let is_correct = selected.is_correct();

    let correct_answer = if is_correct {
        None
    } else {
        question.correct_option().map(|option| CorrectAnswerVm {
            text: option.text().to_string(),
            rationale: option.rationale().to_string(),
        })
    };

    Some(FeedbackVm {
        is_correct,
        heading: if is_correct {
            "Отлично!"
        } else {
            "Обратите внимание"
        },
        rationale: selected.rationale().to_string(),
        correct_answer,
    })
}
