use quiz_core::report::{QuizReport, ResultTier};
use services::{SessionController, ShareService};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub respondent_line: String,
    pub percent_label: String,
    pub message: &'static str,
    /// CSS modifier shared by the ring and the message.
    pub tone: &'static str,
    pub score: u32,
    pub total: u32,
}

#[must_use]
pub fn tier_message(tier: ResultTier) -> &'static str {
    match tier {
        ResultTier::Distinction => "Отличный результат! Вы допущены к практическому этапу.",
        ResultTier::Pass => "Неплохо, но есть пробелы. Рекомендуется повторить материал.",
        ResultTier::Fail => "Тест не сдан. Необходимо повторное обучение.",
    }
}

#[must_use]
pub fn tier_tone(tier: ResultTier) -> &'static str {
    match tier {
        ResultTier::Distinction => "tone-distinction",
        ResultTier::Pass => "tone-pass",
        ResultTier::Fail => "tone-fail",
    }
}

#[must_use]
pub fn map_result(report: &QuizReport) -> ResultVm {
    let identity = report.identity();
    ResultVm {
        respondent_line: format!("{}, гр. {}", identity.name(), identity.group()),
        percent_label: format!("{}%", report.percentage()),
        message: tier_message(report.tier()),
        tone: tier_tone(report.tier()),
        score: report.score(),
        total: report.total(),
    }
}

/// Report for a finished session; `None` while the quiz is still running.
#[must_use]
pub fn finished_report(controller: &SessionController, share: &ShareService) -> Option<QuizReport> {
    controller.outcome().map(|outcome| share.build_report(&outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::IdentityDraft;
    use quiz_core::report::ReportPolicy;
    use quiz_core::time::fixed_clock;

    fn report(score: u32, total: u32) -> QuizReport {
        let identity = IdentityDraft::new("Иванов Иван", "25Б-101").validate().unwrap();
        QuizReport::new(
            &identity,
            score,
            total,
            fixed_clock().today(),
            &ReportPolicy::default(),
        )
    }

    #[test]
    fn tiers_pick_their_messages() {
        let top = map_result(&report(9, 10));
        assert_eq!(top.message, tier_message(ResultTier::Distinction));
        assert_eq!(top.tone, "tone-distinction");
        assert_eq!(top.percent_label, "90%");

        let middle = map_result(&report(6, 10));
        assert_eq!(middle.tone, "tone-pass");

        let low = map_result(&report(5, 10));
        assert_eq!(low.tone, "tone-fail");
    }

    #[test]
    fn respondent_line_names_the_group() {
        let vm = map_result(&report(7, 10));
        assert_eq!(vm.respondent_line, "Иванов Иван, гр. 25Б-101");
        assert_eq!((vm.score, vm.total), (7, 10));
    }
}
