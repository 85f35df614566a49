use strum_macros::Display;

use crate::card_api::CardSource;
use crate::comparator;
use crate::error::{GuessError, Result};
use crate::models::card::Card;
use crate::models::comparison::ComparisonResult;
use crate::models::difficulty::Difficulty;
use crate::models::reference_list::{ReferenceList, ATTRIBUTES, RACES};
use crate::opt::*;

const ROUND_ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ROUND_ID_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Idle,
    InProgress,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum HintField {
    Attribute,
    Race,
    Level,
    #[strum(serialize = "ATK")]
    Atk,
    #[strum(serialize = "DEF")]
    Def,
    Type,
}

const HINT_ORDER: [HintField; 6] = [
    HintField::Attribute,
    HintField::Race,
    HintField::Level,
    HintField::Atk,
    HintField::Def,
    HintField::Type,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub field: HintField,
    pub value: String,
}

#[derive(Debug)]
pub enum GuessOutcome {
    /// Blank input, nothing happened.
    Ignored,
    Duplicate { name: String },
    NotFound { name: String },
    LookupFailed { name: String, error: GuessError },
    Evaluated { result: ComparisonResult, won: bool },
}

/// A state change together with what it produced.
#[derive(Debug)]
pub struct Transition<T> {
    pub state: RoundState,
    pub outcome: Result<T>,
}

impl<T> Transition<T> {
    fn new(state: RoundState, outcome: Result<T>) -> Self {
        Transition { state, outcome }
    }
}

/// Everything one round knows. Transitions consume the state and hand back
/// the next one.
#[derive(Debug, Clone)]
pub struct RoundState {
    round_id: String,
    phase: Phase,
    answer: Option<Card>,
    difficulty: Difficulty,
    guessed: Vec<String>,
    history: Vec<ComparisonResult>,
    hints_remaining: u8,
    hints: Vec<Hint>,
    attributes: ReferenceList,
    races: ReferenceList,
}

impl Default for RoundState {
    fn default() -> Self {
        RoundState::new(ATTRIBUTES.clone(), RACES.clone())
    }
}

impl RoundState {
    pub fn new(attributes: ReferenceList, races: ReferenceList) -> Self {
        RoundState {
            round_id: String::new(),
            phase: Phase::Idle,
            answer: None,
            difficulty: Difficulty::default(),
            guessed: Vec::new(),
            history: Vec::new(),
            hints_remaining: 0,
            hints: Vec::new(),
            attributes,
            races,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn round_id(&self) -> &str {
        &self.round_id
    }

    /// The answer is only revealed once it has been guessed.
    pub fn answer(&self) -> Option<&Card> {
        match self.phase {
            Phase::Won => self.answer.as_ref(),
            _ => None,
        }
    }

    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    pub fn history(&self) -> &[ComparisonResult] {
        &self.history
    }

    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    pub fn attributes(&self) -> &ReferenceList {
        &self.attributes
    }

    pub fn races(&self) -> &ReferenceList {
        &self.races
    }

    pub fn start(self, answer: Card, difficulty: Difficulty) -> Self {
        let round_id = nanoid::nanoid!(
            ROUND_ID_LENGTH,
            &ROUND_ID_ALPHABET.chars().collect::<Vec<char>>()
        );
        log_if(
            &format!("Round {} started on {}", round_id, difficulty),
            DbgFlg::Round,
        );

        RoundState {
            round_id,
            phase: Phase::InProgress,
            answer: Some(answer),
            difficulty,
            guessed: Vec::new(),
            history: Vec::new(),
            hints_remaining: difficulty.hint_count(),
            hints: Vec::new(),
            ..self
        }
    }

    fn ensure_in_progress(&self) -> Result<Card> {
        match (self.phase, self.answer.as_ref()) {
            (Phase::InProgress, Some(answer)) => Ok(answer.clone()),
            (Phase::Won, _) => Err(GuessError::RoundOver),
            _ => Err(GuessError::NoActiveRound),
        }
    }

    /// Resolves `input` through `source` and scores it against the answer.
    pub async fn submit<S: CardSource>(self, source: &S, input: &str) -> Transition<GuessOutcome> {
        let name = input.trim();
        if name.is_empty() {
            return Transition::new(self, Ok(GuessOutcome::Ignored));
        }

        if let Err(err) = self.ensure_in_progress() {
            return Transition::new(self, Err(err));
        }

        if self.guessed.iter().any(|guessed| guessed.eq_ignore_ascii_case(name)) {
            return Transition::new(
                self,
                Ok(GuessOutcome::Duplicate {
                    name: name.to_string(),
                }),
            );
        }

        let mut next = self;
        next.guessed.push(name.to_string());
        log_if(
            &format!("Round {} guess #{}: {}", next.round_id, next.guessed.len(), name),
            DbgFlg::Round,
        );

        let lookup = source.fetch_card_by_name(name).await;
        next.resolve(name, lookup)
    }

    fn resolve(mut self, name: &str, lookup: Result<Option<Card>>) -> Transition<GuessOutcome> {
        let card = match lookup {
            Ok(Some(card)) => card,
            Ok(None) => {
                return Transition::new(
                    self,
                    Ok(GuessOutcome::NotFound {
                        name: name.to_string(),
                    }),
                );
            }
            Err(error) => {
                // a failed lookup does not use up the name
                self.guessed.retain(|guessed| guessed != name);
                return Transition::new(
                    self,
                    Ok(GuessOutcome::LookupFailed {
                        name: name.to_string(),
                        error,
                    }),
                );
            }
        };

        // another spelling of a card that was already scored
        if self.history.iter().any(|scored| scored.guess.name == card.name) {
            return Transition::new(self, Ok(GuessOutcome::Duplicate { name: card.name }));
        }

        let answer = match self.ensure_in_progress() {
            Ok(answer) => answer,
            Err(err) => return Transition::new(self, Err(err)),
        };
        let result = comparator::compare(&card, &answer, &self.attributes, &self.races);
        result.dbg_if(DbgFlg::Round);

        let won = result.name;
        if won {
            self.phase = Phase::Won;
            log_if(
                &format!("Round {} won after {} guesses", self.round_id, self.guessed.len()),
                DbgFlg::Round,
            );
        }
        self.history.push(result.clone());

        Transition::new(self, Ok(GuessOutcome::Evaluated { result, won }))
    }

    /// Reveals the next field of the answer while hints remain.
    pub fn hint(self) -> Transition<Hint> {
        let answer = match self.ensure_in_progress() {
            Ok(answer) => answer,
            Err(err) => return Transition::new(self, Err(err)),
        };

        let next_field = HINT_ORDER.get(self.hints.len()).copied();
        let field = match next_field {
            Some(field) if self.hints_remaining > 0 => field,
            _ => return Transition::new(self, Err(GuessError::NoHintsLeft)),
        };

        let value = match field {
            HintField::Attribute => display_label(&self.attributes, &answer.attribute),
            HintField::Race => display_label(&self.races, &answer.race),
            HintField::Level => answer.level.to_string(),
            HintField::Atk => answer.atk.to_string(),
            HintField::Def => answer.def.to_string(),
            HintField::Type => answer.card_type.clone(),
        };
        let hint = Hint { field, value };

        let mut next = self;
        next.hints_remaining -= 1;
        next.hints.push(hint.clone());
        Transition::new(next, Ok(hint))
    }
}

fn display_label(list: &ReferenceList, label: &str) -> String {
    list.canonical(label).unwrap_or(label).to_string()
}
