use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Settings {
    pub question_duration: Duration,
    pub reveal_duration: Duration,
    pub wrong_answer_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            question_duration: Duration::from_secs(15),
            reveal_duration: Duration::from_secs(5),
            wrong_answer_delay: Duration::from_secs(1),
        }
    }
}
