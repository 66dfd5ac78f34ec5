mod bank;
mod identity;
mod ids;
mod question;

pub use ids::QuestionId;

pub use bank::{BankError, QuestionBank, QuestionBankDraft};
pub use identity::{IdentityDraft, IdentityError, RespondentIdentity};
pub use question::{AnswerOption, Question, QuestionDraft, QuestionError};
