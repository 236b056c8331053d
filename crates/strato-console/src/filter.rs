use strato_common::RegistrationRecord;

/// Sentinel category meaning "no categorical restriction".
pub const ALL: &str = "all";

/// Case-insensitive registration filter, evaluated on every render.
///
/// The term matches as a substring of the name or the description; an empty
/// term matches everything. A category other than [`ALL`] must appear in the
/// registration's ability list regardless of the text match. No side effects.
pub fn matches(record: &RegistrationRecord, term: &str, category: &str) -> bool {
    if category != ALL
        && !record
            .model_ability
            .iter()
            .any(|ability| ability == category)
    {
        return false;
    }

    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    if record.model_name.to_lowercase().contains(&needle) {
        return true;
    }
    record
        .model_description
        .as_deref()
        .is_some_and(|d| d.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(name: &str, description: Option<&str>, abilities: &[&str]) -> RegistrationRecord {
        RegistrationRecord {
            model_name: name.to_string(),
            model_description: description.map(str::to_string),
            model_ability: abilities.iter().map(|s| s.to_string()).collect(),
            model_family: None,
            is_builtin: true,
        }
    }

    #[test]
    fn empty_term_matches_everything() {
        let rec = registration("orca", None, &[]);
        assert!(matches(&rec, "", ALL));
    }

    #[test]
    fn term_matches_name_case_insensitively() {
        let rec = registration("Llama-2-Chat", None, &["chat"]);
        assert!(matches(&rec, "llama", ALL));
        assert!(matches(&rec, "CHAT", ALL));
        assert!(!matches(&rec, "falcon", ALL));
    }

    #[test]
    fn term_matches_description_when_present() {
        let rec = registration("orca", Some("A helpful assistant model"), &[]);
        assert!(matches(&rec, "helpful", ALL));

        let bare = registration("orca", None, &[]);
        assert!(!matches(&bare, "helpful", ALL));
    }

    #[test]
    fn category_must_be_in_ability_list() {
        let rec = registration("orca", Some("chatty"), &["generate"]);
        // Text matches, category does not: excluded.
        assert!(!matches(&rec, "orca", "chat"));
        assert!(matches(&rec, "orca", "generate"));
        assert!(matches(&rec, "orca", ALL));
    }
}
