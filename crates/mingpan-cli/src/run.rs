//! One pass through the wizard: chart, questions, result.

use std::io::{BufRead, Write};
use std::sync::Arc;

use mingpan_core::gateway::JsonGateway;
use mingpan_core::view::{Field, Region};
use mingpan_wizard::application::controller::{ActionOutcome, WizardController};
use mingpan_wizard::config::WizardConfig;
use tracing::info;

use crate::answers::{load_answers_file, prompt_answers};
use crate::args::Args;
use crate::error::CliError;
use crate::terminal::TerminalView;

fn completed(outcome: ActionOutcome, action: &'static str) -> Result<(), CliError> {
    match outcome {
        ActionOutcome::Completed => Ok(()),
        ActionOutcome::Busy | ActionOutcome::Superseded => Err(CliError::Incomplete(action)),
    }
}

/// Runs the wizard end to end and returns the result-region markup.
///
/// Questions are asked on `prompt` and answered from `input` unless
/// `args.answers` names a file.
///
/// # Errors
///
/// Returns the first failing action's error, or an answers-file error.
pub async fn run<R: BufRead, W: Write>(
    args: &Args,
    gateway: Arc<dyn JsonGateway>,
    input: R,
    prompt: W,
) -> Result<String, CliError> {
    let view = Arc::new(TerminalView::new());
    let controller = WizardController::new(view.clone(), gateway, WizardConfig::default());

    view.fill(Field::BirthDate, &args.birth_date);
    view.fill(Field::BirthTime, &args.birth_time);
    view.fill(Field::Gender, args.gender.as_str());
    view.fill(Field::City, &args.city);
    completed(controller.submit_birth_data().await?, "chart request")?;

    let questions = controller.state().questions().to_vec();
    info!(questions = questions.len(), "collecting answers");
    let selections = match &args.answers {
        Some(path) => load_answers_file(path)?,
        None => prompt_answers(&questions, input, prompt)?,
    };
    for (id, value) in &selections {
        view.select(id, *value);
    }

    completed(controller.request_result().await?, "result request")?;
    Ok(view.region(Region::Result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use mingpan_core::error::{GatewayError, WizardError};
    use mingpan_test_support::{FailingGateway, RecordingGateway, fixtures};
    use serde_json::json;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "mingpan",
            "--birth-date",
            "1990-01-01",
            "--birth-time",
            "08",
            "--gender",
            "female",
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_run_posts_form_and_prompted_answers() {
        // Arrange
        let gateway = Arc::new(RecordingGateway::new(vec![
            Ok(fixtures::chart_response_json("sess-cli", 2)),
            Ok(fixtures::result_json(2, 1)),
        ]));

        // Act
        let markup = run(
            &args(&["--city", "台北"]),
            gateway.clone(),
            "y\n\n".as_bytes(),
            Vec::new(),
        )
        .await
        .unwrap();

        // Assert
        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "/api/chart");
        assert_eq!(
            calls[0].1,
            json!({
                "birthDate": "1990-01-01",
                "birthTime": "08",
                "gender": "female",
                "city": "台北",
            })
        );
        assert_eq!(
            calls[1].1,
            json!({ "sessionId": "sess-cli", "answers": { "q1": true } })
        );
        assert!(markup.contains("符合：1/2"));
    }

    #[tokio::test]
    async fn test_run_applies_answers_file() {
        // Arrange
        let path = std::env::temp_dir()
            .join(format!("mingpan-answers-{}.yaml", std::process::id()));
        std::fs::write(&path, "q1: no\nq2: yes\n").unwrap();
        let gateway = Arc::new(RecordingGateway::new(vec![
            Ok(fixtures::chart_response_json("sess-file", 2)),
            Ok(fixtures::result_json(2, 2)),
        ]));

        // Act
        let result = run(
            &args(&["--answers", path.to_str().unwrap()]),
            gateway.clone(),
            "".as_bytes(),
            Vec::new(),
        )
        .await;
        std::fs::remove_file(&path).unwrap();

        // Assert
        result.unwrap();
        assert_eq!(
            gateway.calls()[1].1["answers"],
            json!({ "q1": false, "q2": true })
        );
    }

    #[tokio::test]
    async fn test_run_fails_when_chart_request_fails() {
        let gateway = Arc::new(FailingGateway::http(500, "engine exploded"));

        let result = run(&args(&[]), gateway.clone(), "".as_bytes(), Vec::new()).await;

        assert!(matches!(
            result,
            Err(CliError::Wizard(WizardError::Gateway(GatewayError::Http { status: 500, .. })))
        ));
        assert_eq!(gateway.call_count(), 1);
    }
}
