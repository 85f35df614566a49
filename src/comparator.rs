use crate::models::card::Card;
use crate::models::comparison::{CategoryOutcome, ComparisonResult, NumericOutcome};
use crate::models::reference_list::ReferenceList;

/// Scores `guess` against `answer`. Categorical fields are measured by their
/// distance in the matching reference list, stats by absolute difference.
pub fn compare(
    guess: &Card,
    answer: &Card,
    attributes: &ReferenceList,
    races: &ReferenceList,
) -> ComparisonResult {
    ComparisonResult {
        guess: guess.clone(),
        name: guess.name == answer.name,
        attribute: compare_category(&guess.attribute, &answer.attribute, attributes),
        race: compare_category(&guess.race, &answer.race, races),
        level: compare_stat(guess.level, answer.level),
        atk: compare_stat(guess.atk, answer.atk),
        def: compare_stat(guess.def, answer.def),
    }
}

fn compare_category(guess: &str, answer: &str, list: &ReferenceList) -> CategoryOutcome {
    if guess == answer {
        return CategoryOutcome::Exact;
    }

    match (list.index_of(guess), list.index_of(answer)) {
        (Some(g), Some(a)) if g == a => CategoryOutcome::Exact,
        (Some(g), Some(a)) => CategoryOutcome::Distance(g.abs_diff(a) as u32),
        _ => CategoryOutcome::Unknown,
    }
}

fn compare_stat(guess: u32, answer: u32) -> NumericOutcome {
    if guess == answer {
        NumericOutcome::Exact
    } else {
        NumericOutcome::Distance(guess.abs_diff(answer))
    }
}
