use std::path::PathBuf;
use std::time::Duration;

use survey_model::SurveyScores;

#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub scores: SurveyScores,
    pub elapsed: Duration,
}

impl RunResult {
    pub fn respondents(&self) -> usize {
        self.scores.len()
    }
}

/// Respondents falling into one category of one instrument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub instrument: String,
    pub category: String,
    pub count: usize,
}
