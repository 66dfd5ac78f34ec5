use quiz_core::model::IdentityDraft;
use services::SessionError;

pub const IDENTITY_REQUIRED_MESSAGE: &str =
    "Пожалуйста, заполните ФИО и номер группы перед началом.";
const START_FAILED_MESSAGE: &str = "Не удалось начать тест. Попробуйте ещё раз.";

/// Start screen inputs plus the validation message under them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StartForm {
    name: String,
    group: String,
    error: Option<&'static str>,
}

impl StartForm {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    // Editing either field dismisses the message.
    pub fn set_name(&mut self, value: String) {
        self.name = value;
        self.error = None;
    }

    pub fn set_group(&mut self, value: String) {
        self.group = value;
        self.error = None;
    }

    #[must_use]
    pub fn draft(&self) -> IdentityDraft {
        IdentityDraft::new(self.name.clone(), self.group.clone())
    }

    pub fn show_error(&mut self, err: &SessionError) {
        self.error = Some(if err.is_user_correctable() {
            IDENTITY_REQUIRED_MESSAGE
        } else {
            START_FAILED_MESSAGE
        });
    }
}

/// Intro sentence with the question count in the right grammatical form.
#[must_use]
pub fn intro_line(count: usize) -> String {
    let word = match (count % 10, count % 100) {
        (1, rem) if rem != 11 => "вопрос",
        (2..=4, rem) if !(12..=14).contains(&rem) => "вопроса",
        _ => "вопросов",
    };
    format!("Вам предстоит ответить на {count} {word}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::IdentityError;

    #[test]
    fn validation_error_maps_to_fill_in_message() {
        let mut form = StartForm::default();
        form.show_error(&SessionError::Validation(IdentityError::EmptyName));
        assert_eq!(form.error(), Some(IDENTITY_REQUIRED_MESSAGE));
    }

    #[test]
    fn editing_clears_the_message() {
        let mut form = StartForm::default();
        form.show_error(&SessionError::Validation(IdentityError::EmptyGroup));
        form.set_name("Иванов".to_string());
        assert_eq!(form.error(), None);

        form.show_error(&SessionError::Validation(IdentityError::EmptyGroup));
        form.set_group("101".to_string());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn draft_carries_raw_input() {
        let mut form = StartForm::default();
        form.set_name("  Иванов ".to_string());
        form.set_group("101".to_string());
        let identity = form.draft().validate().unwrap();
        assert_eq!(identity.name(), "Иванов");
    }

    #[test]
    fn other_errors_get_a_generic_message() {
        let mut form = StartForm::default();
        form.show_error(&SessionError::AlreadyStarted);
        assert_eq!(form.error(), Some(START_FAILED_MESSAGE));
    }

    #[test]
    fn intro_line_agrees_with_the_count() {
        assert_eq!(intro_line(10), "Вам предстоит ответить на 10 вопросов.");
        assert_eq!(intro_line(1), "Вам предстоит ответить на 1 вопрос.");
        assert_eq!(intro_line(3), "Вам предстоит ответить на 3 вопроса.");
        assert_eq!(intro_line(11), "Вам предстоит ответить на 11 вопросов.");
        assert_eq!(intro_line(22), "Вам предстоит ответить на 22 вопроса.");
    }
}
