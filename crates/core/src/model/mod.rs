mod answers;
mod question;
mod survey;
mod tally;

pub use answers::{AnswerError, AnswerSet};
pub use question::{OPTION_COUNT, QUESTION_COUNT, QUESTIONS, Question, question};
pub use survey::{SubmitError, SurveyState, SurveyView};
pub use tally::{RESPONSE_CAP, TallyMatrix, percentage};
