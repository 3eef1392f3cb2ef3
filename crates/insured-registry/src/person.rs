//! The insured person record.
//!
//! A record is built once from values the console has already validated and
//! is never modified afterwards.

use std::fmt;

/// A single insured person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsuredPerson {
    first_name: String,
    last_name: String,
    age: u32,
    phone: String,
}

impl InsuredPerson {
    /// Create a record, storing the values verbatim.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            phone: phone.into(),
        }
    }

    /// First name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Age in years.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Lower-cased `"first last phone"`. Age is not searchable.
    #[must_use]
    pub fn searchable_text(&self) -> String {
        format!("{} {} {}", self.first_name, self.last_name, self.phone).to_lowercase()
    }

    /// Check whether every keyword occurs somewhere in the searchable text.
    ///
    /// Keywords are expected to be lower-case already. Each one is matched as
    /// a plain substring, so `"nov"` matches `"Novak"`. An empty keyword list
    /// matches every record.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        let text = self.searchable_text();
        keywords
            .iter()
            .all(|keyword| text.contains(keyword.as_ref()))
    }
}

impl fmt::Display for InsuredPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Jméno: {}, Příjmení: {}, Věk: {}, Telefon: {}",
            self.first_name, self.last_name, self.age, self.phone
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan() -> InsuredPerson {
        InsuredPerson::new("Jan", "Novak", 30, "123456789")
    }

    #[test]
    fn test_new_stores_values_verbatim() {
        let person = InsuredPerson::new("  Eva ", "Svobodová", 0, "007");

        assert_eq!(person.first_name(), "  Eva ");
        assert_eq!(person.last_name(), "Svobodová");
        assert_eq!(person.age(), 0);
        assert_eq!(person.phone(), "007");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            jan().to_string(),
            "Jméno: Jan, Příjmení: Novak, Věk: 30, Telefon: 123456789"
        );
    }

    #[test]
    fn test_searchable_text() {
        assert_eq!(jan().searchable_text(), "jan novak 123456789");
    }

    #[test]
    fn test_matches_all_keywords() {
        assert!(jan().matches(&["jan", "456"]));
        assert!(jan().matches(&["novak"]));
    }

    #[test]
    fn test_matches_requires_every_keyword() {
        assert!(!jan().matches(&["jan", "999"]));
    }

    #[test]
    fn test_matches_substring_not_whole_word() {
        assert!(jan().matches(&["ova"]));
        assert!(jan().matches(&["n n"]));
    }

    #[test]
    fn test_matches_empty_keywords() {
        let keywords: [&str; 0] = [];
        assert!(jan().matches(&keywords));
    }

    #[test]
    fn test_matches_ignores_age() {
        let person = InsuredPerson::new("Petr", "Dvorak", 42, "111");
        assert!(!person.matches(&["42"]));
    }

    #[test]
    fn test_matches_is_case_sensitive_on_keywords() {
        // Callers lower-case their keywords; upper-case ones never match.
        assert!(!jan().matches(&["JAN"]));
    }

    #[test]
    fn test_matches_unicode_names() {
        let person = InsuredPerson::new("Šárka", "Čermáková", 25, "602");
        assert!(person.matches(&["šár", "čerm"]));
    }
}
