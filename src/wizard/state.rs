use std::collections::BTreeSet;

use rand::Rng;

use crate::config;

use super::error::{SubmissionError, ValidationError, WizardError};
use super::payload::{FormValues, SubmissionPayload};
use super::reference::ReferenceCode;
use super::steps::{FieldKind, StepSpec};
use super::submit::SubmissionReceipt;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitRoute {
    /// Moved on to the given step.
    Advanced(usize),
    Send(SubmissionPayload),
}

pub const SUBMIT_LABEL: &str = "Submit Registration";
pub const BUSY_LABEL: &str = "Submitting...";

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Editing,
    Submitting,
    /// Last attempt failed; the form stays editable and can be sent again.
    Failed(SubmissionError),
    Submitted(ReferenceCode),
}

/// Everything the lead form knows about itself. Transitions are plain methods so the
/// component only has to render whatever state they leave behind.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    steps: &'static [StepSpec],
    current: usize,
    values: FormValues,
    invalid: BTreeSet<&'static str>,
    phase: Phase,
}

impl WizardState {
    pub fn new(steps: &'static [StepSpec]) -> Self {
        debug_assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self {
            steps,
            current: 0,
            values: FormValues::default(),
            invalid: BTreeSet::new(),
            phase: Phase::Editing,
        }
    }

    pub fn steps(&self) -> &'static [StepSpec] {
        self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &'static StepSpec {
        &self.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// One flag per step: reached when its index is at or before the active one.
    pub fn progress(&self) -> Vec<bool> {
        (0..self.steps.len()).map(|i| i <= self.current).collect()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        self.invalid.contains(name)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_busy() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn error(&self) -> Option<&SubmissionError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    pub fn set_value(&mut self, name: &'static str, value: String) {
        if self.is_finished() {
            return;
        }
        let filled = !value.trim().is_empty();
        self.values.set(name, value);
        if filled {
            self.invalid.remove(name);
        }
    }

    pub fn toggle_choice(&mut self, name: &'static str, option: &'static str, checked: bool) {
        if self.is_finished() {
            return;
        }
        self.values.toggle_choice(name, option, checked);
        if !self.values.is_empty(name, FieldKind::Choices(&[])) {
            self.invalid.remove(name);
        }
    }

    /// Flags every empty required field of the active step and unflags the filled ones.
    pub fn validate_current(&mut self) -> Result<(), ValidationError> {
        let step = self.current_step();
        let mut missing = Vec::new();
        for field in step.required_fields() {
            if self.values.is_empty(field.name, field.kind) {
                self.invalid.insert(field.name);
                missing.push(field.name);
            } else {
                self.invalid.remove(field.name);
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { step: step.id, fields: missing })
        }
    }

    pub fn next(&mut self) -> Result<usize, WizardError> {
        if self.is_finished() {
            return Err(WizardError::Finished);
        }
        if self.is_last() {
            return Err(WizardError::NoNextStep);
        }
        self.validate_current()?;
        self.current += 1;
        Ok(self.current)
    }

    pub fn back(&mut self) -> Result<usize, WizardError> {
        if self.is_finished() {
            return Err(WizardError::Finished);
        }
        if self.is_first() {
            return Err(WizardError::NoPreviousStep);
        }
        self.current -= 1;
        Ok(self.current)
    }

    /// Validates the final step and moves into `Submitting`, dropping any earlier error.
    pub fn begin_submit(&mut self, subject: &str) -> Result<SubmissionPayload, WizardError> {
        match self.phase {
            Phase::Submitted(_) => return Err(WizardError::Finished),
            Phase::Submitting => return Err(WizardError::SubmitInFlight),
            _ => {}
        }
        if !self.is_last() {
            return Err(WizardError::NotOnFinalStep);
        }
        self.validate_current()?;
        self.phase = Phase::Submitting;
        Ok(SubmissionPayload::build(self.steps, &self.values, subject))
    }

    /// What a form submit event does: on an earlier step it behaves like Next, on the last
    /// step it starts the submission and hands back the payload to post.
    pub fn submit(&mut self, subject: &str) -> Result<SubmitRoute, WizardError> {
        if self.is_finished() {
            return Err(WizardError::Finished);
        }
        if self.is_last() {
            self.begin_submit(subject).map(SubmitRoute::Send)
        } else {
            self.next().map(SubmitRoute::Advanced)
        }
    }

    /// Applies the endpoint's answer; a success gets a fresh reference code from `rng`.
    pub fn finish<R: Rng>(&mut self, outcome: Result<SubmissionReceipt, SubmissionError>, rng: &mut R) {
        match outcome {
            Ok(_) => self.complete(ReferenceCode::generate(config::REFERENCE_PREFIX, rng)),
            Err(e) => self.fail(e),
        }
    }

    pub fn complete(&mut self, reference: ReferenceCode) {
        self.phase = Phase::Submitted(reference);
    }

    pub fn fail(&mut self, error: SubmissionError) {
        self.phase = Phase::Failed(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::error::FailureKind;
    use crate::wizard::steps::LEAD_STEPS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fill_step(state: &mut WizardState, index: usize) {
        for field in LEAD_STEPS[index].fields {
            match field.kind {
                FieldKind::Choices(options) => state.toggle_choice(field.name, options[0], true),
                FieldKind::Checkbox => state.set_value(field.name, "yes".to_string()),
                FieldKind::Email => state.set_value(field.name, "lead@example.com".to_string()),
                _ => state.set_value(field.name, format!("{} value", field.name)),
            }
        }
    }

    fn at_last_step() -> WizardState {
        let mut state = WizardState::new(LEAD_STEPS);
        for i in 0..LEAD_STEPS.len() - 1 {
            fill_step(&mut state, i);
            state.next().unwrap();
        }
        fill_step(&mut state, LEAD_STEPS.len() - 1);
        state
    }

    #[test]
    fn test_starts_on_first_step() {
        let state = WizardState::new(LEAD_STEPS);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.progress(), vec![true, false, false]);
        assert_eq!(state.phase(), &Phase::Editing);
    }

    #[test]
    fn test_next_with_empty_required_fields_stays_and_flags() {
        for i in 0..LEAD_STEPS.len() - 1 {
            let mut state = WizardState::new(LEAD_STEPS);
            for j in 0..i {
                fill_step(&mut state, j);
                state.next().unwrap();
            }
            let err = state.next().unwrap_err();
            assert_eq!(state.current_index(), i);
            let required: Vec<_> = LEAD_STEPS[i].required_fields().map(|f| f.name).collect();
            assert_eq!(err, WizardError::Incomplete(ValidationError { step: LEAD_STEPS[i].id, fields: required.clone() }));
            for name in required {
                assert!(state.is_invalid(name), "{} should be flagged", name);
            }
        }
    }

    #[test]
    fn test_whitespace_does_not_satisfy_required() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        state.set_value("full_name", "   ".to_string());
        assert!(state.next().is_err());
        assert!(state.is_invalid("full_name"));
        assert!(!state.is_invalid("email"));
    }

    #[test]
    fn test_next_with_filled_fields_advances_progress() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        assert_eq!(state.next(), Ok(1));
        assert_eq!(state.progress(), vec![true, true, false]);
        fill_step(&mut state, 1);
        assert_eq!(state.next(), Ok(2));
        assert_eq!(state.progress(), vec![true, true, true]);
    }

    #[test]
    fn test_optional_choices_do_not_block_next() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        state.next().unwrap();
        state.set_value("investor_type", "Individual".to_string());
        state.set_value("investment_range", "Up to $50,000".to_string());
        assert_eq!(state.next(), Ok(2));
    }

    #[test]
    fn test_back_skips_validation() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        state.next().unwrap();
        // step 1 is left empty on purpose
        assert_eq!(state.back(), Ok(0));
        assert!(!state.is_invalid("investor_type"));
        assert_eq!(state.progress(), vec![true, false, false]);
    }

    #[test]
    fn test_back_from_first_step_is_rejected() {
        let mut state = WizardState::new(LEAD_STEPS);
        assert_eq!(state.back(), Err(WizardError::NoPreviousStep));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_next_from_last_step_is_rejected() {
        let mut state = at_last_step();
        assert_eq!(state.next(), Err(WizardError::NoNextStep));
    }

    #[test]
    fn test_flag_clears_once_value_is_filled() {
        let mut state = WizardState::new(LEAD_STEPS);
        let _ = state.next();
        assert!(state.is_invalid("email"));
        state.set_value("email", " ".to_string());
        assert!(state.is_invalid("email"));
        state.set_value("email", "a@b.c".to_string());
        assert!(!state.is_invalid("email"));
        // flagged again on the next failed attempt
        state.set_value("email", String::new());
        let _ = state.next();
        assert!(state.is_invalid("email"));
    }

    #[test]
    fn test_submit_only_from_last_step() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        assert_eq!(state.begin_submit("s"), Err(WizardError::NotOnFinalStep));
        assert_eq!(state.phase(), &Phase::Editing);
    }

    #[test]
    fn test_submit_requires_consent() {
        let mut state = at_last_step();
        state.set_value("consent", String::new());
        assert!(matches!(state.begin_submit("s"), Err(WizardError::Incomplete(_))));
        assert!(state.is_invalid("consent"));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_submit_marks_busy_and_blocks_second_attempt() {
        let mut state = at_last_step();
        let payload = state.begin_submit("Subject").unwrap();
        assert_eq!(payload.get("_replyto"), Some("lead@example.com"));
        assert!(state.is_busy());
        assert_eq!(state.submit_label(), BUSY_LABEL);
        assert_eq!(state.begin_submit("Subject"), Err(WizardError::SubmitInFlight));
    }

    #[test]
    fn test_success_is_terminal() {
        let mut state = at_last_step();
        state.begin_submit("s").unwrap();
        let reference = ReferenceCode::generate("DEA", &mut StdRng::seed_from_u64(3));
        state.complete(reference.clone());
        assert_eq!(state.phase(), &Phase::Submitted(reference));
        assert_eq!(state.back(), Err(WizardError::Finished));
        assert_eq!(state.begin_submit("s"), Err(WizardError::Finished));
        state.set_value("full_name", "changed".to_string());
        assert_eq!(state.values().get("full_name"), "full_name value");
    }

    #[test]
    fn test_not_found_failure_restores_control_and_keeps_values() {
        let mut state = at_last_step();
        state.begin_submit("s").unwrap();
        state.fail(SubmissionError::status(404, "Not Found"));
        assert!(!state.is_busy());
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
        assert_eq!(state.error().map(|e| e.kind()), Some(FailureKind::NotFound));
        assert_eq!(state.current_index(), LEAD_STEPS.len() - 1);
        assert_eq!(state.values().get("full_name"), "full_name value");
    }

    #[test]
    fn test_enter_on_first_step_with_empty_fields_stays_and_flags() {
        let mut state = WizardState::new(LEAD_STEPS);
        assert!(matches!(state.submit("s"), Err(WizardError::Incomplete(_))));
        assert_eq!(state.current_index(), 0);
        assert!(state.is_invalid("full_name"));
        assert!(state.is_invalid("email"));
        assert_eq!(state.phase(), &Phase::Editing);
    }

    #[test]
    fn test_enter_on_middle_step_with_filled_fields_advances() {
        let mut state = WizardState::new(LEAD_STEPS);
        fill_step(&mut state, 0);
        state.next().unwrap();
        fill_step(&mut state, 1);
        assert_eq!(state.submit("s"), Ok(SubmitRoute::Advanced(2)));
        assert_eq!(state.progress(), vec![true, true, true]);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_enter_never_sends_before_last_step() {
        let mut state = WizardState::new(LEAD_STEPS);
        for i in 0..LEAD_STEPS.len() - 1 {
            fill_step(&mut state, i);
            let route = state.submit("s").unwrap();
            assert!(!matches!(route, SubmitRoute::Send(_)));
            assert_eq!(state.phase(), &Phase::Editing);
        }
        fill_step(&mut state, LEAD_STEPS.len() - 1);
        match state.submit("Subject").unwrap() {
            SubmitRoute::Send(payload) => assert_eq!(payload.get("_subject"), Some("Subject")),
            other => panic!("expected a payload, got {:?}", other),
        }
        assert!(state.is_busy());
    }

    #[test]
    fn test_finish_ok_shows_reference_code() {
        let mut state = at_last_step();
        state.submit("s").unwrap();
        state.finish(Ok(SubmissionReceipt::default()), &mut StdRng::seed_from_u64(9));
        let Phase::Submitted(reference) = state.phase() else {
            panic!("expected submitted, got {:?}", state.phase());
        };
        let shown = reference.to_string();
        assert!(shown.starts_with("DEA-"));
        assert_eq!(reference.code().len(), 6);
        assert!(reference.code().chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_eq!(state.submit("s"), Err(WizardError::Finished));
    }

    #[test]
    fn test_finish_err_restores_label() {
        let mut state = at_last_step();
        state.submit("s").unwrap();
        assert_eq!(state.submit_label(), BUSY_LABEL);
        state.finish(Err(SubmissionError::status(403, "")), &mut StdRng::seed_from_u64(9));
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
        assert!(!state.is_busy());
        assert_eq!(state.error().map(|e| e.kind()), Some(FailureKind::Forbidden));
    }

    #[test]
    fn test_connectivity_failure_then_retry_clears_error() {
        let mut state = at_last_step();
        state.begin_submit("s").unwrap();
        state.fail(SubmissionError::Transport("Failed to fetch".to_string()));
        assert_eq!(state.error().map(|e| e.kind()), Some(FailureKind::Connectivity));
        assert_eq!(state.submit_label(), SUBMIT_LABEL);
        state.begin_submit("s").unwrap();
        assert_eq!(state.error(), None);
        assert!(state.is_busy());
    }
}
