use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::model::RespondentIdentity;
use crate::report::mail::MailDraft;
use crate::report::policy::{ReportPolicy, ResultTier};

const RULE: &str = "--------------------------------";
const DATE_FORMAT: &str = "%d.%m.%Y";

/// `round(100 * score / total)` with halves rounded up; `0` when `total` is `0`.
#[must_use]
pub fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    let total = u64::from(total);
    let rounded = (u64::from(score) * 200 + total) / (total * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Render the fixed-layout plain-text report.
#[must_use]
pub fn format_report(
    identity: &RespondentIdentity,
    score: u32,
    total: u32,
    date: NaiveDate,
    policy: &ReportPolicy,
) -> String {
    let percent = percentage(score, total);
    render(identity, score, total, percent, policy.tier(percent), date, policy)
}

fn render(
    identity: &RespondentIdentity,
    score: u32,
    total: u32,
    percent: u32,
    tier: ResultTier,
    date: NaiveDate,
    policy: &ReportPolicy,
) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", policy.heading());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Студент: {}", identity.name());
    let _ = writeln!(out, "Группа: {}", identity.group());
    let _ = writeln!(out, "Дата: {}", date.format(DATE_FORMAT));
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Результат: {score} из {total} ({percent}%)");
    let _ = writeln!(out, "Статус: {}", tier.status_label());
    out.push_str(RULE);
    out
}

/// A finished session's outcome, rendered once and shared by both handoffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    identity: RespondentIdentity,
    score: u32,
    total: u32,
    percentage: u32,
    tier: ResultTier,
    date: NaiveDate,
    text: String,
}

impl QuizReport {
    #[must_use]
    pub fn new(
        identity: &RespondentIdentity,
        score: u32,
        total: u32,
        date: NaiveDate,
        policy: &ReportPolicy,
    ) -> Self {
        let percent = percentage(score, total);
        let tier = policy.tier(percent);
        let text = render(identity, score, total, percent, tier, date, policy);
        Self {
            identity: identity.clone(),
            score,
            total,
            percentage: percent,
            tier,
            date,
            text,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &RespondentIdentity {
        &self.identity
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        self.percentage
    }

    #[must_use]
    pub fn tier(&self) -> ResultTier {
        self.tier
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.tier.is_passing()
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn mail(&self) -> MailDraft {
        MailDraft::for_report(self)
    }
}
