//! Answer sources: an interactive prompt or a YAML answers file.

use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::Path;

use mingpan_chart::domain::question::Question;
use mingpan_core::view::RadioValue;
use serde_yaml::Value;

use crate::error::CliError;

/// Radio selections to apply, as `(question id, option)`.
pub type Selections = Vec<(String, RadioValue)>;

fn parse_choice(text: &str) -> Option<RadioValue> {
    match text.trim().to_lowercase().as_str() {
        "y" | "yes" | "是" => Some(RadioValue::Yes),
        "n" | "no" | "否" => Some(RadioValue::No),
        _ => None,
    }
}

/// Reads a YAML answers file.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read, otherwise as
/// [`parse_answers`].
pub fn load_answers_file(path: &Path) -> Result<Selections, CliError> {
    let text = std::fs::read_to_string(path)?;
    parse_answers(&text)
}

/// Parses a mapping of question id to `yes`/`no` (booleans and 是/否 also
/// accepted). A `null` entry leaves the question unanswered.
///
/// # Errors
///
/// Returns `CliError::AnswersFile` if the text is not a mapping, or
/// `CliError::InvalidAnswer` for any other value.
pub fn parse_answers(text: &str) -> Result<Selections, CliError> {
    let raw: BTreeMap<String, Value> = serde_yaml::from_str(text)?;
    let mut selections = Vec::with_capacity(raw.len());
    for (id, value) in raw {
        let choice = match &value {
            Value::Null => continue,
            Value::Bool(true) => Some(RadioValue::Yes),
            Value::Bool(false) => Some(RadioValue::No),
            Value::String(text) => parse_choice(text),
            _ => None,
        };
        match choice {
            Some(choice) => selections.push((id, choice)),
            None => {
                let value = serde_yaml::to_string(&value)
                    .unwrap_or_default()
                    .trim()
                    .to_owned();
                return Err(CliError::InvalidAnswer { id, value });
            }
        }
    }
    Ok(selections)
}

/// Asks each question in turn on `prompt`, reading replies from `input`.
///
/// An empty reply skips the question; end of input leaves the remaining
/// questions unanswered. Unrecognised replies are asked again.
///
/// # Errors
///
/// Propagates I/O errors from either stream.
pub fn prompt_answers<R: BufRead, W: Write>(
    questions: &[Question],
    mut input: R,
    mut prompt: W,
) -> io::Result<Selections> {
    let mut selections = Vec::new();
    for (index, question) in questions.iter().enumerate() {
        loop {
            write!(prompt, "{}. {} [y/n，Enter 略過]: ", index + 1, question.text)?;
            prompt.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(prompt)?;
                return Ok(selections);
            }
            if line.trim().is_empty() {
                break;
            }
            if let Some(choice) = parse_choice(&line) {
                selections.push((question.id.clone(), choice));
                break;
            }
            writeln!(prompt, "請輸入 y 或 n")?;
        }
    }
    Ok(selections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions() -> Vec<Question> {
        vec![
            Question {
                id: "q1".into(),
                text: "2021 年換過工作？".into(),
            },
            Question {
                id: "q2".into(),
                text: "2022 年搬過家？".into(),
            },
            Question {
                id: "q3".into(),
                text: "2023 年有重大支出？".into(),
            },
        ]
    }

    #[test]
    fn test_parse_answers_accepts_words_booleans_and_chinese() {
        let text = "q1: yes\nq2: false\nq3: 是\nq4: ~\n";

        let selections = parse_answers(text).unwrap();

        assert_eq!(
            selections,
            vec![
                ("q1".to_owned(), RadioValue::Yes),
                ("q2".to_owned(), RadioValue::No),
                ("q3".to_owned(), RadioValue::Yes),
            ]
        );
    }

    #[test]
    fn test_parse_answers_rejects_other_values() {
        let result = parse_answers("q1: maybe\n");

        match result {
            Err(CliError::InvalidAnswer { id, value }) => {
                assert_eq!(id, "q1");
                assert_eq!(value, "maybe");
            }
            other => panic!("expected InvalidAnswer, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_answers_rejects_non_mapping() {
        let result = parse_answers("- yes\n- no\n");

        assert!(matches!(result, Err(CliError::AnswersFile(_))));
    }

    #[test]
    fn test_prompt_skips_blank_replies_and_reasks_on_garbage() {
        // Arrange
        let input = "y\n\nwhat\nN\n";
        let mut prompt = Vec::new();

        // Act
        let selections = prompt_answers(&questions(), input.as_bytes(), &mut prompt).unwrap();

        // Assert
        assert_eq!(
            selections,
            vec![
                ("q1".to_owned(), RadioValue::Yes),
                ("q3".to_owned(), RadioValue::No),
            ]
        );
        let shown = String::from_utf8(prompt).unwrap();
        assert!(shown.contains("1. 2021 年換過工作？"));
        assert!(shown.contains("請輸入 y 或 n"));
    }

    #[test]
    fn test_prompt_stops_at_end_of_input() {
        let selections = prompt_answers(&questions(), "no\n".as_bytes(), Vec::new()).unwrap();

        assert_eq!(selections, vec![("q1".to_owned(), RadioValue::No)]);
    }
}
