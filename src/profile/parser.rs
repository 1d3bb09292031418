// src/profile/parser.rs

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Placeholder used when a field's pattern finds nothing.
pub const NOT_PROVIDED: &str = "Not Provided";

// --- Field Patterns (Lazy Static) ---
// One pattern per field rule. Match semantics (first-match vs all-matches,
// case-insensitivity) are part of the contract: changing them changes
// extracted output silently.
static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)name[:\-]?\s*(.+)").expect("Failed to compile NAME_RE")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("Failed to compile EMAIL_RE")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d[\d\s\-()]{7,}").expect("Failed to compile PHONE_RE")
});

static EDUCATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(.*?degree.*?)\s*(\d{4})").expect("Failed to compile EDUCATION_RE")
});

static SKILLS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)skills[:\-]?\s*(.+)").expect("Failed to compile SKILLS_RE")
});

static EXPERIENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(.*?\s\d{4} - \d{4}|.*?\s\d{4} - Present)").expect("Failed to compile EXPERIENCE_RE")
});

/// Structured metadata for one CV. Every field is always present:
/// a rule that matches nothing resolves to its sentinel, never an error.
/// Serde renames double as the snapshot's CSV column headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Education")]
    pub education: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Years of Experience")]
    pub years_of_experience: u32,
    #[serde(rename = "Source File")]
    pub source_file: String,
}

impl ProfileRecord {
    /// The record's skill phrases, split back out of the joined field.
    pub fn skill_set(&self) -> std::collections::HashSet<&str> {
        self.skills.split("; ").filter(|s| !s.is_empty()).collect()
    }
}

/// Parses a CV's flat text into a ProfileRecord. Total: any rule that
/// fails to match degrades to its sentinel. `source_file` is both the
/// record's provenance and the fallback display name.
///
/// `years_of_experience` is filled in separately by the caller (it needs
/// a reference year, see `profile::experience`).
pub fn parse_profile(raw_text: &str, source_file: &str) -> ProfileRecord {
    ProfileRecord {
        name: match_name(raw_text).unwrap_or_else(|| fallback_name(source_file)),
        email: match_email(raw_text).unwrap_or_else(|| NOT_PROVIDED.to_string()),
        phone: match_phone(raw_text).unwrap_or_else(|| NOT_PROVIDED.to_string()),
        education: match_education(raw_text),
        skills: match_skills(raw_text),
        experience: match_experience(raw_text),
        years_of_experience: 0,
        source_file: source_file.to_string(),
    }
}

/// First "Name: ..." style label, captured text trimmed.
fn match_name(text: &str) -> Option<String> {
    let caps = NAME_RE.captures(text)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Display name fallback: the file name with its extension suffix removed.
fn fallback_name(source_file: &str) -> String {
    source_file
        .split('.')
        .next()
        .unwrap_or(source_file)
        .to_string()
}

fn match_email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().trim().to_string())
}

fn match_phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().trim().to_string())
}

/// All "<program> degree <year>" mentions, rendered "<program> (<year>)".
fn match_education(text: &str) -> String {
    EDUCATION_RE
        .captures_iter(text)
        .map(|caps| format!("{} ({})", &caps[1], &caps[2]))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every "Skills: ..." label in the document, captures joined.
fn match_skills(text: &str) -> String {
    SKILLS_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every text span ending in a "YYYY - YYYY" or "YYYY - Present" range.
fn match_experience(text: &str) -> String {
    EXPERIENCE_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fully_populated_cv() {
        let text = "Name: Jane Doe\n\
                    jane@x.com\n\
                    +44 7700 900123\n\
                    Computer Science degree 2019\n\
                    Acme Corp 2015 - 2019\n\
                    Skills: SQL; Python";
        let record = parse_profile(text, "jane_doe.pdf");

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.email, "jane@x.com");
        assert_eq!(record.phone, "+44 7700 900123");
        assert_eq!(record.education, "Computer Science degree (2019)");
        assert!(record.experience.contains("2015 - 2019"));
        assert_eq!(record.skills, "SQL; Python");
        assert_eq!(record.source_file, "jane_doe.pdf");
    }

    #[test]
    fn empty_text_yields_sentinels_not_errors() {
        let record = parse_profile("", "mystery.docx");

        assert_eq!(record.name, "mystery");
        assert_eq!(record.email, NOT_PROVIDED);
        assert_eq!(record.phone, NOT_PROVIDED);
        assert_eq!(record.education, "");
        assert_eq!(record.skills, "");
        assert_eq!(record.experience, "");
        assert_eq!(record.years_of_experience, 0);
    }

    #[test]
    fn name_falls_back_to_file_stem() {
        let record = parse_profile("no labels here", "john_smith.docx");
        assert_eq!(record.name, "john_smith");
    }

    #[test]
    fn name_label_is_case_insensitive() {
        let record = parse_profile("NAME- Ada Lovelace", "cv.txt");
        assert_eq!(record.name, "Ada Lovelace");
    }

    #[test]
    fn first_email_wins() {
        let record = parse_profile("a@b.co then c@d.org", "cv.txt");
        assert_eq!(record.email, "a@b.co");
    }

    #[test]
    fn email_requires_two_letter_tld() {
        let record = parse_profile("broken@host.x", "cv.txt");
        assert_eq!(record.email, NOT_PROVIDED);
    }

    #[test]
    fn short_digit_runs_are_not_phone_numbers() {
        let record = parse_profile("room 1234", "cv.txt");
        assert_eq!(record.phone, NOT_PROVIDED);
    }

    #[test]
    fn multiple_education_entries_are_joined() {
        let text = "BSc degree 2015\nMSc degree 2017";
        let record = parse_profile(text, "cv.txt");
        assert_eq!(record.education, "BSc degree (2015); MSc degree (2017)");
    }

    #[test]
    fn multiple_skills_lines_are_joined() {
        let text = "Skills: SQL, Python\nother text\nSkills- Rust";
        let record = parse_profile(text, "cv.txt");
        assert_eq!(record.skills, "SQL, Python; Rust");
    }

    #[test]
    fn present_ranges_are_captured_in_experience() {
        let text = "Consultant at Acme 2020 - Present";
        let record = parse_profile(text, "cv.txt");
        assert!(record.experience.contains("2020 - Present"));
    }

    #[test]
    fn skill_set_splits_the_joined_field() {
        let record = parse_profile("Skills: SQL; Python", "cv.txt");
        let skills = record.skill_set();
        assert!(skills.contains("SQL"));
        assert!(skills.contains("Python"));
        assert_eq!(skills.len(), 2);
    }
}
