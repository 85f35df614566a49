use itertools::Itertools;

use crate::models::card::Card;
use crate::models::comparison::{CategoryOutcome, ComparisonResult, NumericOutcome};
use crate::models::difficulty::Difficulty;
use crate::models::reference_list::ReferenceList;
use crate::round::{Hint, RoundState};

const MATCH_MARK: &str = "✔";

pub fn render_comparison(
    result: &ComparisonResult,
    attributes: &ReferenceList,
    races: &ReferenceList,
) -> String {
    let guess = &result.guess;
    let name_line = if result.name {
        format!("Name: {} {}", guess.name, MATCH_MARK)
    } else {
        format!("Name: {}", guess.name)
    };

    [
        name_line,
        category_line("Attribute", attributes, &guess.attribute, result.attribute),
        category_line("Race", races, &guess.race, result.race),
        numeric_line("Level", guess.level, result.level),
        numeric_line("ATK", guess.atk, result.atk),
        numeric_line("DEF", guess.def, result.def),
    ]
    .join("\n")
}

fn category_line(title: &str, list: &ReferenceList, label: &str, outcome: CategoryOutcome) -> String {
    let label = list.canonical(label).unwrap_or(label);
    match (outcome.is_exact(), outcome.distance()) {
        (true, _) => format!("{}: {} {}", title, label, MATCH_MARK),
        (false, Some(n)) => format!("{}: {} (diff: {})", title, label, n),
        (false, None) => format!("{}: {} (unknown category)", title, label),
    }
}

fn numeric_line(title: &str, value: u32, outcome: NumericOutcome) -> String {
    match outcome.distance() {
        Some(n) if !outcome.is_exact() => format!("{}: {} (diff: {})", title, value, n),
        _ => format!("{}: {} {}", title, value, MATCH_MARK),
    }
}

pub fn render_start(difficulty: Difficulty) -> String {
    format!(
        "New round on {}. You have {} hints.",
        difficulty,
        difficulty.hint_count()
    )
}

pub fn render_lists(attributes: &[String], races: &[String]) -> String {
    format!(
        "Attributes: {}\nRaces: {}",
        attributes.iter().join(" "),
        races.iter().join(" ")
    )
}

pub fn render_hint(hint: &Hint, hints_remaining: u8) -> String {
    format!(
        "Hint: {} is {} ({} left)",
        hint.field, hint.value, hints_remaining
    )
}

pub fn render_win(answer: &Card) -> String {
    format!(
        "Congratulations, you got it!\nThe answer is: {}\n{}",
        answer.name, answer.desc
    )
}

pub fn render_round_summary(state: &RoundState) -> String {
    let mut lines = vec![format!(
        "Round {} ({}, {})",
        state.round_id(),
        state.difficulty(),
        state.phase()
    )];
    if !state.guessed().is_empty() {
        lines.push(format!("Guessed: {}", state.guessed().iter().join(", ")));
    }
    if !state.hints().is_empty() {
        lines.push(format!(
            "Hints: {}",
            state
                .hints()
                .iter()
                .map(|hint| format!("{} = {}", hint.field, hint.value))
                .join(", ")
        ));
    }
    lines.join("\n")
}

/// Newest guess first.
pub fn render_history(
    history: &[ComparisonResult],
    attributes: &ReferenceList,
    races: &ReferenceList,
) -> String {
    if history.is_empty() {
        return "No guesses yet.".to_string();
    }

    history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, result)| {
            let header = if result.is_exact() {
                format!("#{} {}", i + 1, MATCH_MARK)
            } else {
                format!("#{}", i + 1)
            };
            format!("{}\n{}", header, render_comparison(result, attributes, races))
        })
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::compare;
    use crate::models::reference_list::{ATTRIBUTES, RACES};
    use crate::round::HintField;

    fn card(name: &str, attribute: &str, race: &str, level: u32, atk: u32, def: u32) -> Card {
        Card {
            name: name.to_string(),
            card_type: "Effect Monster".to_string(),
            attribute: attribute.to_string(),
            race: race.to_string(),
            level,
            atk,
            def,
            desc: "desc".to_string(),
        }
    }

    #[test]
    fn test_render_comparison() {
        let guess = card("Jinzo", "DARK", "Machine", 6, 2400, 1500);
        let answer = card("Cyber Dragon", "LIGHT", "Machine", 5, 2100, 1600);
        let result = compare(&guess, &answer, &ATTRIBUTES, &RACES);

        let text = render_comparison(&result, &ATTRIBUTES, &RACES);
        assert_eq!(
            text,
            "Name: Jinzo\n\
             Attribute: 暗 (diff: 1)\n\
             Race: 机械族 ✔\n\
             Level: 6 (diff: 1)\n\
             ATK: 2400 (diff: 300)\n\
             DEF: 1500 (diff: 100)"
        );
    }

    #[test]
    fn test_render_unknown_category() {
        let guess = card("Decode Talker", "DARK", "Cyberse", 0, 2300, 0);
        let answer = card("Jinzo", "DARK", "Machine", 6, 2400, 1500);
        let result = compare(&guess, &answer, &ATTRIBUTES, &RACES);

        let text = render_comparison(&result, &ATTRIBUTES, &RACES);
        assert!(text.contains("Race: Cyberse (unknown category)"));
        assert!(text.contains("Attribute: 暗 ✔"));
    }

    #[test]
    fn test_render_history_newest_first() {
        let answer = card("Jinzo", "DARK", "Machine", 6, 2400, 1500);
        let history = vec![
            compare(&card("First", "DARK", "Machine", 6, 2400, 1500), &answer, &ATTRIBUTES, &RACES),
            compare(&card("Second", "DARK", "Machine", 6, 2400, 1500), &answer, &ATTRIBUTES, &RACES),
        ];

        let text = render_history(&history, &ATTRIBUTES, &RACES);
        assert!(text.starts_with("#2\nName: Second"));
        assert!(text.contains("#1\nName: First"));
        assert_eq!(render_history(&[], &ATTRIBUTES, &RACES), "No guesses yet.");
    }

    #[test]
    fn test_render_history_marks_exact_guess() {
        let answer = card("Jinzo", "DARK", "Machine", 6, 2400, 1500);
        let history = vec![compare(&answer, &answer, &ATTRIBUTES, &RACES)];

        let text = render_history(&history, &ATTRIBUTES, &RACES);
        assert!(text.starts_with("#1 ✔\nName: Jinzo ✔"));
    }

    #[test]
    fn test_render_round_summary() {
        let idle = RoundState::default();
        assert_eq!(render_round_summary(&idle), "Round  (medium, Idle)");

        let answer = card("Jinzo", "DARK", "Machine", 6, 2400, 1500);
        let transition = RoundState::default().start(answer, Difficulty::Hard).hint();
        let state = transition.state;

        let text = render_round_summary(&state);
        assert!(text.starts_with(&format!("Round {} (hard, InProgress)", state.round_id())));
        assert!(text.contains("Hints: Attribute = 暗"));
        assert!(!text.contains("Guessed:"));
    }

    #[test]
    fn test_render_hint_and_start() {
        let hint = Hint {
            field: HintField::Atk,
            value: "2400".to_string(),
        };
        assert_eq!(render_hint(&hint, 2), "Hint: ATK is 2400 (2 left)");
        assert_eq!(
            render_start(Difficulty::Easy),
            "New round on easy. You have 5 hints."
        );
    }
}
