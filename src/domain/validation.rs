//! Field rules and assembly of human-readable violation messages.
//!
//! Violations are reported as full messages: the humanized attribute name
//! followed by the rule's message, e.g. `"Title can't be blank"`.

use validator::{ValidationError, ValidationErrors};

/// Rejects values that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Turns `author_id` into `Author id`, `title` into `Title`.
pub fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds a full message for `attribute`.
pub fn full_message(attribute: &str, message: &str) -> String {
    format!("{} {}", humanize(attribute), message)
}

/// Flattens field errors into full messages.
///
/// Fields are emitted in the order given by `declared`; fields not listed there
/// follow alphabetically.
pub fn full_messages(errors: &ValidationErrors, declared: &[&str]) -> Vec<String> {
    let mut fields: Vec<(String, Vec<String>)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let field: &str = field.as_ref();
            let messages = errs.iter().map(error_message).collect();
            (field.to_string(), messages)
        })
        .collect();

    fields.sort_by(|(a, _), (b, _)| {
        let rank = |f: &str| declared.iter().position(|d| *d == f).unwrap_or(usize::MAX);
        rank(a).cmp(&rank(b)).then_with(|| a.cmp(b))
    });

    fields
        .into_iter()
        .flat_map(|(field, messages)| {
            messages
                .into_iter()
                .map(move |message| full_message(&field, &message))
        })
        .collect()
}

fn error_message(error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => error.code.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{BookDraft, NameDraft};
    use validator::Validate;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("1984").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t").is_err());
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("title"), "Title");
        assert_eq!(humanize("publisher_id"), "Publisher id");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_full_messages_for_blank_title() {
        let errors = BookDraft::default().validate().unwrap_err();
        assert_eq!(
            full_messages(&errors, &["title"]),
            vec!["Title can't be blank".to_string()]
        );
    }

    #[test]
    fn test_full_messages_for_whitespace_name() {
        let errors = NameDraft::new(Some("  ".to_string()))
            .validate()
            .unwrap_err();
        assert_eq!(
            full_messages(&errors, &["name"]),
            vec!["Name can't be blank".to_string()]
        );
    }
}
