use std::collections::HashMap;

use super::steps::{FieldKind, StepSpec, EMAIL_FIELD, INTERESTS_FIELD};

/// Current value of every field the user touched. Untouched fields read as empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    text: HashMap<&'static str, String>,
    choices: HashMap<&'static str, Vec<&'static str>>,
}

impl FormValues {
    pub fn set(&mut self, name: &'static str, value: String) {
        self.text.insert(name, value);
    }

    pub fn get(&self, name: &str) -> &str {
        self.text.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn toggle_choice(&mut self, name: &'static str, option: &'static str, checked: bool) {
        let selected = self.choices.entry(name).or_default();
        let present = selected.contains(&option);
        if checked && !present {
            selected.push(option);
        } else if !checked && present {
            selected.retain(|o| *o != option);
        }
    }

    pub fn is_chosen(&self, name: &str, option: &str) -> bool {
        self.choices
            .get(name)
            .map_or(false, |selected| selected.iter().any(|o| *o == option))
    }

    /// A field is empty when its trimmed text is empty or, for a choice group,
    /// nothing is selected.
    pub fn is_empty(&self, name: &str, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Choices(_) => self.choices.get(name).map_or(true, |s| s.is_empty()),
            _ => self.get(name).trim().is_empty(),
        }
    }
}

/// Form-encoded field set posted to the lead endpoint, in form order.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    fields: Vec<(String, String)>,
}

impl SubmissionPayload {
    pub fn build(steps: &[StepSpec], values: &FormValues, subject: &str) -> Self {
        let mut fields = Vec::new();
        for field in steps.iter().flat_map(|s| s.fields.iter()) {
            match field.kind {
                FieldKind::Choices(options) => {
                    // The endpoint takes one value per name, so the group is joined.
                    let joined = options
                        .iter()
                        .filter(|o| values.is_chosen(field.name, o))
                        .copied()
                        .collect::<Vec<_>>()
                        .join(", ");
                    if !joined.is_empty() {
                        fields.push((field.name.to_string(), joined));
                    }
                }
                FieldKind::Checkbox => {
                    let value = values.get(field.name);
                    if !value.is_empty() {
                        fields.push((field.name.to_string(), value.to_string()));
                    }
                }
                _ => fields.push((field.name.to_string(), values.get(field.name).to_string())),
            }
        }
        fields.push(("_subject".to_string(), subject.to_string()));
        fields.push(("_replyto".to_string(), values.get(EMAIL_FIELD).to_string()));
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn interests(&self) -> Option<&str> {
        self.get(INTERESTS_FIELD)
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn to_form_body(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::steps::LEAD_STEPS;

    fn filled() -> FormValues {
        let mut values = FormValues::default();
        values.set("full_name", "Ana Souza".to_string());
        values.set("email", "ana@example.com".to_string());
        values.set("phone", "+55 11 99999-0000".to_string());
        values.set("country", "Brazil".to_string());
        values
    }

    #[test]
    fn test_interests_are_joined() {
        let mut values = filled();
        values.toggle_choice(INTERESTS_FIELD, "Equity", true);
        values.toggle_choice(INTERESTS_FIELD, "Carbon Credits", true);
        let payload = SubmissionPayload::build(LEAD_STEPS, &values, "Subject");
        assert_eq!(payload.interests(), Some("Equity, Carbon Credits"));
    }

    #[test]
    fn test_interests_follow_option_order() {
        let mut values = filled();
        values.toggle_choice(INTERESTS_FIELD, "Carbon Credits", true);
        values.toggle_choice(INTERESTS_FIELD, "Equity", true);
        let payload = SubmissionPayload::build(LEAD_STEPS, &values, "Subject");
        assert_eq!(payload.interests(), Some("Equity, Carbon Credits"));
    }

    #[test]
    fn test_no_interests_omits_field() {
        let mut values = filled();
        values.toggle_choice(INTERESTS_FIELD, "Equity", true);
        values.toggle_choice(INTERESTS_FIELD, "Equity", false);
        let payload = SubmissionPayload::build(LEAD_STEPS, &values, "Subject");
        assert_eq!(payload.interests(), None);
        assert!(payload.fields().iter().all(|(k, _)| k != INTERESTS_FIELD));
    }

    #[test]
    fn test_metadata_is_injected() {
        let payload = SubmissionPayload::build(LEAD_STEPS, &filled(), "New DeAgro Investor Registration");
        assert_eq!(payload.get("_subject"), Some("New DeAgro Investor Registration"));
        assert_eq!(payload.get("_replyto"), Some("ana@example.com"));
        let names: Vec<_> = payload.fields().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(&names[names.len() - 2..], &["_subject", "_replyto"]);
    }

    #[test]
    fn test_unchecked_checkbox_is_omitted() {
        let payload = SubmissionPayload::build(LEAD_STEPS, &filled(), "s");
        assert_eq!(payload.get("consent"), None);
        // optional text fields are still sent, empty
        assert_eq!(payload.get("message"), Some(""));
    }

    #[test]
    fn test_form_body_is_url_encoded() {
        let payload = SubmissionPayload::build(LEAD_STEPS, &filled(), "Hi & bye");
        let body = payload.to_form_body();
        assert!(body.starts_with("full_name=Ana%20Souza&email=ana%40example.com"));
        assert!(body.contains("_subject=Hi%20%26%20bye"));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let mut values = FormValues::default();
        values.set("full_name", "   ".to_string());
        assert!(values.is_empty("full_name", FieldKind::Text));
        assert!(values.is_empty(INTERESTS_FIELD, FieldKind::Choices(&["A"])));
    }
}
