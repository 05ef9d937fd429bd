use quiz_core::Catalog;
use quiz_core::model::{ResultTier, percentage};
use quiz_core::time::format_countdown;
use services::SessionSnapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterCardVm {
    pub index: usize,
    pub name: String,
    pub avatar: String,
    pub description: String,
}

#[must_use]
pub fn map_character_cards(catalog: &Catalog) -> Vec<CharacterCardVm> {
    catalog
        .characters()
        .iter()
        .enumerate()
        .map(|(index, character)| CharacterCardVm {
            index,
            name: character.name().to_string(),
            avatar: character.avatar().to_string(),
            description: character.description().to_string(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "option",
            Self::Selected => "option option--selected",
            Self::Correct => "option option--correct",
            Self::Incorrect => "option option--incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub text: String,
    pub correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.correct {
            "feedback feedback--correct"
        } else {
            "feedback feedback--incorrect"
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub character_name: String,
    pub avatar: String,
    pub timer_label: String,
    pub position_label: String,
    pub progress_percent: f64,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub locked: bool,
    pub can_submit: bool,
    pub feedback: Option<FeedbackVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub character_name: String,
    pub avatar: String,
    pub character_label: String,
    pub score_label: String,
    pub time_label: String,
    pub message: &'static str,
    pub perfect: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum QuizScreen {
    CharacterSelect,
    Question(QuestionVm),
    Result(ResultVm),
}

#[must_use]
pub fn map_screen(snapshot: &SessionSnapshot) -> QuizScreen {
    if !snapshot.quiz_started {
        return QuizScreen::CharacterSelect;
    }
    if let Some(result) = map_result(snapshot) {
        return QuizScreen::Result(result);
    }
    map_question(snapshot).map_or(QuizScreen::CharacterSelect, QuizScreen::Question)
}

#[must_use]
pub fn map_question(snapshot: &SessionSnapshot) -> Option<QuestionVm> {
    if snapshot.show_result {
        return None;
    }
    let character = snapshot.selected_character.as_ref()?;
    let question = snapshot.question.as_ref()?;

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let selected = snapshot.selected_answer_index == Some(index);
            let state = match (selected, snapshot.is_submitted) {
                (false, _) => OptionState::Idle,
                (true, false) => OptionState::Selected,
                (true, true) if question.is_correct(index) => OptionState::Correct,
                (true, true) => OptionState::Incorrect,
            };
            OptionVm {
                index,
                label: label.clone(),
                state,
            }
        })
        .collect();

    let feedback = snapshot.feedback().map(|feedback| FeedbackVm {
        text: feedback.message(),
        correct: feedback.is_correct(),
    });

    let current = u32::try_from(snapshot.current_question_index).unwrap_or(u32::MAX);
    let progress_percent = percentage(current, snapshot.total).unwrap_or(0.0);

    Some(QuestionVm {
        character_name: character.name().to_string(),
        avatar: character.avatar().to_string(),
        timer_label: format!("Time: {}", snapshot.time_remaining_formatted()),
        position_label: format!(
            "Question {} of {}",
            snapshot.current_question_index + 1,
            snapshot.total
        ),
        progress_percent,
        prompt: question.prompt().to_string(),
        options,
        locked: snapshot.is_submitted,
        can_submit: snapshot.selected_answer_index.is_some() && !snapshot.is_submitted,
        feedback,
    })
}

#[must_use]
pub fn map_result(snapshot: &SessionSnapshot) -> Option<ResultVm> {
    if !snapshot.show_result {
        return None;
    }
    let character = snapshot.selected_character.as_ref()?;
    let tier = ResultTier::from_score(snapshot.score, snapshot.total);

    Some(ResultVm {
        character_name: character.name().to_string(),
        avatar: character.avatar().to_string(),
        character_label: format!("Your character: {}", character.name()),
        score_label: format!("Your score: {} out of {}", snapshot.score, snapshot.total),
        time_label: format!("Time remaining: {}", format_countdown(snapshot.time_remaining_secs)),
        message: tier.message(),
        perfect: tier == ResultTier::Perfect,
    })
}
