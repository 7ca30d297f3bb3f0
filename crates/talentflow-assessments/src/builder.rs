use uuid::Uuid;

use talentflow_core::models::assessment::{Assessment, AssessmentCategory, AssessmentStatus};
use talentflow_core::models::job::{Job, JobStatus};
use talentflow_core::models::question::{Question, QuestionKind, QuestionType};
use talentflow_storage::assessments::{AssessmentPatch, AssessmentRepository, NewAssessment};
use talentflow_storage::jobs::JobRepository;

use crate::error::BuilderError;

pub const DEFAULT_DURATION_MINUTES: u32 = 60;
pub const DEFAULT_PASSING_SCORE_PERCENT: u8 = 70;
pub const DEFAULT_QUESTION_POINTS: u32 = 5;
pub const DEFAULT_QUESTION_TIME_LIMIT_SECONDS: u32 = 120;

/// The question-entry form.
///
/// `options` and `correct_answer_index` only matter for multiple-choice
/// drafts and are dropped when another type is staged.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionDraft {
    pub question_type: QuestionType,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer_index: Option<usize>,
    pub points: u32,
    pub time_limit_seconds: u32,
}

impl Default for QuestionDraft {
    fn default() -> Self {
        Self {
            question_type: QuestionType::MultipleChoice,
            prompt: String::new(),
            options: vec![String::new()],
            correct_answer_index: Some(0),
            points: DEFAULT_QUESTION_POINTS,
            time_limit_seconds: DEFAULT_QUESTION_TIME_LIMIT_SECONDS,
        }
    }
}

impl QuestionDraft {
    pub fn new(question_type: QuestionType, prompt: impl Into<String>) -> Self {
        Self {
            question_type,
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    pub fn add_option(&mut self, option: impl Into<String>) {
        self.options.push(option.into());
    }

    /// Returns false if `index` is out of range.
    pub fn update_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                *option = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove an option, keeping the correct answer pointed at the same
    /// text. The last remaining option cannot be removed.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if self.options.len() <= 1 || index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        self.correct_answer_index = match self.correct_answer_index {
            Some(correct) if correct == index => None,
            Some(correct) if correct > index => Some(correct - 1),
            other => other,
        };
        true
    }

    /// Check the draft can be staged. Reports the first failed condition.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.prompt.trim().is_empty() {
            return Err(BuilderError::BlankPrompt);
        }

        if self.question_type == QuestionType::MultipleChoice {
            let Some(correct) = self.correct_answer_index else {
                return Err(BuilderError::MissingCorrectAnswer);
            };
            if let Some(index) = self.options.iter().position(|o| o.trim().is_empty()) {
                return Err(BuilderError::BlankOption { index });
            }
            if self.options.is_empty() {
                return Err(BuilderError::NoOptions);
            }
            if correct >= self.options.len() {
                return Err(BuilderError::CorrectAnswerOutOfRange {
                    index: correct,
                    options: self.options.len(),
                });
            }
        }

        if self.points == 0 {
            return Err(BuilderError::ZeroPoints);
        }

        Ok(())
    }

    fn into_question(self, id: Uuid) -> Question {
        let kind = match self.question_type {
            QuestionType::MultipleChoice => QuestionKind::MultipleChoice {
                options: self.options,
                correct_answer_index: self.correct_answer_index,
            },
            QuestionType::Text => QuestionKind::Text,
            QuestionType::Rating => QuestionKind::Rating,
            QuestionType::Integer => QuestionKind::Integer,
        };

        Question {
            id,
            prompt: self.prompt.trim().to_string(),
            kind,
            points: self.points,
            time_limit_seconds: Some(self.time_limit_seconds),
        }
    }
}

/// Assessment-level settings being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentForm {
    pub title: String,
    pub description: String,
    pub category: AssessmentCategory,
    pub duration_minutes: u32,
    pub passing_score_percent: u8,
    pub questions: Vec<Question>,
}

impl Default for AssessmentForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: AssessmentCategory::Technical,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            passing_score_percent: DEFAULT_PASSING_SCORE_PERCENT,
            questions: Vec::new(),
        }
    }
}

/// Builds one assessment for one recruiter.
///
/// Questions are validated as they are staged and again on save. A builder
/// that has saved a draft keeps its document id, so later saves update
/// that document instead of creating another.
#[derive(Debug, Clone)]
pub struct AssessmentBuilder {
    owner_id: Uuid,
    available_jobs: Vec<Job>,
    selected_job: Option<Job>,
    form: AssessmentForm,
    draft: QuestionDraft,
    saved_id: Option<Uuid>,
}

impl AssessmentBuilder {
    /// Only active jobs owned by `owner_id` are offered for selection.
    pub fn new(owner_id: Uuid, jobs: Vec<Job>) -> Self {
        let available_jobs = jobs
            .into_iter()
            .filter(|job| job.owner_id == owner_id && job.status == JobStatus::Active)
            .collect();

        Self {
            owner_id,
            available_jobs,
            selected_job: None,
            form: AssessmentForm::default(),
            draft: QuestionDraft::default(),
            saved_id: None,
        }
    }

    pub async fn load(owner_id: Uuid, jobs: &JobRepository) -> Result<Self, BuilderError> {
        let owned = jobs.list_owned_by(owner_id).await?;
        Ok(Self::new(owner_id, owned))
    }

    pub fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    pub fn available_jobs(&self) -> &[Job] {
        &self.available_jobs
    }

    pub fn selected_job(&self) -> Option<&Job> {
        self.selected_job.as_ref()
    }

    pub fn form(&self) -> &AssessmentForm {
        &self.form
    }

    pub fn questions(&self) -> &[Question] {
        &self.form.questions
    }

    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut QuestionDraft {
        &mut self.draft
    }

    /// Id of the document written by the last draft save, if any.
    pub fn saved_id(&self) -> Option<Uuid> {
        self.saved_id
    }

    /// Bind the assessment to a job and pre-fill title and description.
    pub fn select_job(&mut self, job_id: Uuid) -> Result<&Job, BuilderError> {
        let job = self
            .available_jobs
            .iter()
            .find(|job| job.id == job_id)
            .cloned()
            .ok_or(BuilderError::UnknownJob(job_id))?;

        self.form.title = format!("{} Assessment", job.title);
        self.form.description = format!(
            "Technical assessment for {} position at {}",
            job.title, job.company
        );
        Ok(self.selected_job.insert(job))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.form.description = description.into();
    }

    pub fn set_category(&mut self, category: AssessmentCategory) {
        self.form.category = category;
    }

    pub fn set_duration_minutes(&mut self, minutes: u32) {
        self.form.duration_minutes = minutes;
    }

    pub fn set_passing_score_percent(&mut self, percent: u8) -> Result<(), BuilderError> {
        if percent > 100 {
            return Err(BuilderError::PassingScoreOutOfRange(percent));
        }
        self.form.passing_score_percent = percent;
        Ok(())
    }

    /// Validate `draft` and append it as a new question.
    ///
    /// On rejection nothing changes. On success the question gets a fresh
    /// id and the entry form resets to its defaults.
    pub fn stage_question(&mut self, draft: QuestionDraft) -> Result<Uuid, BuilderError> {
        if let Err(err) = draft.validate() {
            tracing::warn!(reason = %err, "question draft rejected");
            return Err(err);
        }

        let id = Uuid::new_v4();
        self.form.questions.push(draft.into_question(id));
        self.draft = QuestionDraft::default();
        tracing::debug!(question_id = %id, count = self.form.questions.len(), "question staged");
        Ok(id)
    }

    /// Stage whatever is in the builder's own entry form.
    pub fn stage_current_draft(&mut self) -> Result<Uuid, BuilderError> {
        self.stage_question(self.draft.clone())
    }

    /// Returns whether a question with that id existed.
    pub fn remove_question(&mut self, question_id: Uuid) -> bool {
        let before = self.form.questions.len();
        self.form.questions.retain(|q| q.id != question_id);
        self.form.questions.len() != before
    }

    /// Assessment-level checks run before any write.
    pub fn validate_for_save(&self) -> Result<(), BuilderError> {
        if self.form.title.trim().is_empty() {
            return Err(BuilderError::BlankTitle);
        }
        if self.selected_job.is_none() {
            return Err(BuilderError::NoJobSelected);
        }
        if self.form.questions.is_empty() {
            return Err(BuilderError::NoQuestions);
        }

        let incomplete = self
            .form
            .questions
            .iter()
            .filter(|q| q.question_type() == QuestionType::MultipleChoice && !q.is_complete())
            .count();
        if incomplete > 0 {
            return Err(BuilderError::IncompleteQuestions { count: incomplete });
        }

        let zero_points = self.form.questions.iter().filter(|q| q.points == 0).count();
        if zero_points > 0 {
            return Err(BuilderError::ZeroPointQuestions { count: zero_points });
        }

        Ok(())
    }

    /// Persist the assessment with the given status.
    ///
    /// Publishing resets the builder for a new assessment; saving a draft
    /// keeps the form as it is. On any error nothing is written and the
    /// form is untouched.
    pub async fn save(
        &mut self,
        status: AssessmentStatus,
        repo: &AssessmentRepository,
    ) -> Result<Assessment, BuilderError> {
        if let Err(err) = self.validate_for_save() {
            tracing::warn!(reason = %err, "assessment save rejected");
            return Err(err);
        }
        let job = self.selected_job.as_ref().ok_or(BuilderError::NoJobSelected)?;

        let doc = NewAssessment {
            title: self.form.title.trim().to_string(),
            description: self.form.description.clone(),
            category: self.form.category,
            duration_minutes: self.form.duration_minutes,
            passing_score_percent: self.form.passing_score_percent,
            questions: self.form.questions.clone(),
            job_id: job.id,
            job_title: job.title.clone(),
            company: job.company.clone(),
            owner_id: self.owner_id,
            status,
        };

        let saved = match self.saved_id {
            Some(id) => repo.update(id, AssessmentPatch::replace_with(doc)).await?,
            None => repo.create(doc).await?,
        };

        tracing::info!(
            assessment_id = %saved.id,
            status = %saved.status,
            questions = saved.questions.len(),
            "assessment saved"
        );

        match status {
            AssessmentStatus::Active => self.reset(),
            AssessmentStatus::Draft => self.saved_id = Some(saved.id),
        }

        Ok(saved)
    }

    /// Clear everything except the owner and the job list.
    pub fn reset(&mut self) {
        self.selected_job = None;
        self.form = AssessmentForm::default();
        self.draft = QuestionDraft::default();
        self.saved_id = None;
    }
}
