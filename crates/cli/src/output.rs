//! Rendering of run results.
use okapi_runtime::{RunSummary, VariableSnapshot};
use serde::Serialize;

use crate::OutputFormat;

#[derive(Serialize)]
struct Report<'a> {
    frames: u64,
    mutations: usize,
    simulated_seconds: f64,
    variables: &'a [VariableSnapshot],
}

/// Renders the summary and final variable values.
pub fn render(
    format: OutputFormat,
    summary: &RunSummary,
    variables: &[VariableSnapshot],
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!(
                "{} frames, {} mutations, {:.3}s simulated",
                summary.frames, summary.mutations, summary.simulated_seconds
            )];
            lines.extend(variables.iter().map(ToString::to_string));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => {
            let report = Report {
                frames: summary.frames,
                mutations: summary.mutations,
                simulated_seconds: summary.simulated_seconds,
                variables,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use okapi_runtime::VariableScope;

    use super::*;

    fn sample() -> (RunSummary, Vec<VariableSnapshot>) {
        let summary = RunSummary {
            frames: 2,
            mutations: 3,
            simulated_seconds: 1.0,
        };
        let variables = vec![VariableSnapshot {
            scope: VariableScope::Local("player".into()),
            name: "ammo".into(),
            kind: Default::default(),
            value: 4.0,
            display: "4".into(),
            materialized: true,
        }];
        (summary, variables)
    }

    #[test]
    fn renders_text() {
        let (summary, variables) = sample();
        let text = render(OutputFormat::Text, &summary, &variables).unwrap();
        assert_eq!(text, "2 frames, 3 mutations, 1.000s simulated\nplayer.ammo = 4");
    }

    #[test]
    fn renders_json() {
        let (summary, variables) = sample();
        let json = render(OutputFormat::Json, &summary, &variables).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["frames"], 2);
        assert_eq!(value["variables"][0]["scope"], "local");
        assert_eq!(value["variables"][0]["owner"], "player");
        assert_eq!(value["variables"][0]["kind"], "Float");
    }
}
