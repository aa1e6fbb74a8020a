//! Interactive answer collection for the pull/push tasks
//!
//! Walks the task's prompts in weight order, skipping what was passed on the
//! command line and what the visibility rules hide. Environment lists are
//! fetched through the [`EnvironmentResolver`] the first time a prompt needs
//! one.

use crate::Result;
use crate::environments::{
    Credentials, EnvironmentDirectory, EnvironmentResolver, best_environment,
};
use crate::prompt::{Answers, answer_name, choice_index, is_shown, ordered_prompts};
use acquia_meta::{
    Choice, ChoiceSource, PromptDefault, PromptKind, PromptSpec, ToolingDefinition,
};
use serde_json::Value;

/// Terminal front end for the prompts
pub trait Prompter {
    /// Pick one of `choices`, returning its `value`.
    fn select(&mut self, message: &str, choices: &[Choice], default: Option<usize>) -> Result<String>;

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    fn password(&mut self, message: &str) -> Result<String>;
}

/// Where the flow reads its answers from
pub struct FlowContext<'a, D> {
    pub resolver: &'a mut EnvironmentResolver<D>,
    pub fallback: &'a Credentials,
    pub app_uuid: &'a str,
    pub has_saved_keys: bool,
}

/// Answers implied by option defaults (credentials known up front).
pub fn default_answers(task: &ToolingDefinition, preset: &Answers) -> Answers {
    task.options
        .iter()
        .filter_map(|(name, option)| match &option.default {
            Some(Value::String(value)) => Some((name, value)),
            _ => None,
        })
        .fold(preset.clone(), |answers, (name, value)| {
            if answers.get(name).is_some() {
                answers
            } else {
                answers.with(name, value.as_str())
            }
        })
}

fn default_value(spec: &PromptSpec, choices: &[Choice]) -> Option<String> {
    match spec.default.as_ref()? {
        PromptDefault::Literal(value) => Some(value.clone()),
        PromptDefault::BestEnvironment => best_environment(choices).map(|c| c.value.clone()),
    }
}

/// Collect every answer the task needs.
///
/// `preset` holds the values passed as flags; their prompts are skipped. The
/// returned answers have a combined `key:secret` split in two.
pub async fn collect_answers<D, P>(
    task: &ToolingDefinition,
    preset: &Answers,
    mut ctx: FlowContext<'_, D>,
    prompter: &mut P,
) -> Result<Answers>
where
    D: EnvironmentDirectory,
    P: Prompter + ?Sized,
{
    let preset = default_answers(task, preset);
    let mut answers = preset.clone();

    for (option, spec) in ordered_prompts(&task.options) {
        let name = answer_name(option, spec);
        if preset.get(name).is_some() || !is_shown(spec, &answers, ctx.has_saved_keys) {
            continue;
        }
        let message = spec.message.as_deref().unwrap_or(option);

        let value = match spec.kind {
            PromptKind::List => {
                let choices = match &spec.choices {
                    ChoiceSource::Static(choices) => choices.clone(),
                    ChoiceSource::RemoteEnvironments => {
                        ctx.resolver
                            .choices(&answers, ctx.fallback, ctx.app_uuid)
                            .await?
                    }
                };
                let default = default_value(spec, &choices).and_then(|v| choice_index(&choices, &v));
                prompter.select(message, &choices, default)?
            }
            PromptKind::Input => {
                let default = default_value(spec, &[]);
                prompter.input(message, default.as_deref())?
            }
            PromptKind::Password => prompter.password(message)?,
        };

        tracing::debug!(option, answer = name, "Collected answer");
        answers = answers.with(name, value);
    }

    Ok(answers.split_credentials())
}

/// Answers without prompting: flags, option defaults, then the rule-based
/// environment defaults for anything still missing.
pub async fn default_flow<D>(
    task: &ToolingDefinition,
    preset: &Answers,
    mut ctx: FlowContext<'_, D>,
) -> Result<Answers>
where
    D: EnvironmentDirectory,
{
    let mut answers = default_answers(task, preset).split_credentials();

    for (option, spec) in ordered_prompts(&task.options) {
        let name = answer_name(option, spec);
        if answers.get(name).is_some() || spec.choices != ChoiceSource::RemoteEnvironments {
            continue;
        }
        let choices = ctx
            .resolver
            .choices(&answers, ctx.fallback, ctx.app_uuid)
            .await?;
        if let Some(value) = default_value(spec, &choices) {
            answers = answers.with(name, value);
        }
    }

    Ok(answers)
}
