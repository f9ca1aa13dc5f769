//! Form decoding, validation and sanitization.
//!
//! Write endpoints run an ordered pipeline of per-field rules over the
//! submitted urlencoded body. Rules accumulate errors instead of failing
//! fast so a re-rendered form can show every problem at once, and every
//! value is sanitized (trimmed, markup-escaped) before it is ever echoed
//! back into a page. The [`FormReport`] is the contract with handlers:
//! whether any rule failed, the ordered `{field, message}` list, and the
//! sanitized values for redisplay.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Escape markup-significant characters so a value can be echoed into a
/// rendered form.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Raw submitted form data: ordered (name, value) pairs.
#[derive(Debug, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl FormData {
    /// Decode an `application/x-www-form-urlencoded` body.
    pub fn parse(body: &[u8]) -> AppResult<Self> {
        let body = std::str::from_utf8(body)
            .map_err(|e| AppError::BadRequest(format!("Malformed form body: {}", e)))?;
        let pairs = serde_urlencoded::from_str::<Vec<(String, String)>>(body)
            .map_err(|e| AppError::BadRequest(format!("Malformed form body: {}", e)))?;
        Ok(Self { pairs })
    }

    /// First value submitted under `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// All values submitted under `name`, normalized to a uniform
    /// sequence: absent fields yield an empty vec, a single submission a
    /// one-element vec, repeated keys all values in submitted order.
    pub fn all(&self, name: &str) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .collect()
    }
}

/// One accumulated validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Outcome of running a validation pipeline over one submission.
///
/// Also used to pre-fill forms: update-form handlers seed a report from
/// the stored record and render it with no errors.
#[derive(Debug, Default)]
pub struct FormReport {
    values: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
    errors: Vec<FieldError>,
}

impl FormReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no rule recorded an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors in the order the rules ran.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Sanitized value of a single-valued field ("" when absent).
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Sanitized values of a multi-valued field.
    pub fn list(&self, name: &str) -> &[String] {
        self.lists.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parsed date of a validated optional-date field.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.value(name), ISO_DATE_FORMAT).ok()
    }

    /// Seed a value directly (used to pre-fill update forms).
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Seed a multi-value list directly.
    pub fn set_list(&mut self, name: &str, values: Vec<String>) {
        self.lists.insert(name.to_string(), values);
    }

    /// Start a rule chain for a single-valued field. The chain must be
    /// committed with [`FieldRules::done`].
    pub fn field<'a>(&'a mut self, name: &'static str, raw: Option<&str>) -> FieldRules<'a> {
        FieldRules {
            report: self,
            name,
            value: raw.unwrap_or("").to_string(),
        }
    }

    /// Sanitize and store a multi-valued field (each value escaped).
    pub fn field_list(&mut self, name: &'static str, raw: Vec<String>) {
        let values = raw.iter().map(|v| escape_html(v.trim())).collect();
        self.lists.insert(name.to_string(), values);
    }

    fn push_error(&mut self, field: &str, message: &str) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }
}

/// Ordered rule chain over one field. Each rule may rewrite the in-flight
/// value (sanitizers) or record an error (validators); none of them stops
/// the chain.
pub struct FieldRules<'a> {
    report: &'a mut FormReport,
    name: &'static str,
    value: String,
}

impl FieldRules<'_> {
    /// Strip surrounding whitespace.
    pub fn trim(mut self) -> Self {
        self.value = self.value.trim().to_string();
        self
    }

    /// Reject empty values.
    pub fn required(self, message: &str) -> Self {
        if self.value.is_empty() {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Reject values shorter than `min` characters.
    pub fn min_length(self, min: usize, message: &str) -> Self {
        if self.value.chars().count() < min {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Reject values longer than `max` characters.
    pub fn max_length(self, max: usize, message: &str) -> Self {
        if self.value.chars().count() > max {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Reject values containing anything but alphanumeric characters.
    /// Empty values pass (emptiness is `required`'s concern).
    pub fn alphanumeric(self, message: &str) -> Self {
        if !self.value.chars().all(char::is_alphanumeric) {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Validate an optional ISO-8601 (yyyy-mm-dd) date. Empty values skip
    /// the check entirely; a parse failure is reported, never thrown.
    pub fn iso_date(self, message: &str) -> Self {
        if !self.value.is_empty()
            && NaiveDate::parse_from_str(&self.value, ISO_DATE_FORMAT).is_err()
        {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Reject non-empty values outside a fixed set (enumerated fields).
    pub fn one_of(self, allowed: &[&str], message: &str) -> Self {
        if !self.value.is_empty() && !allowed.contains(&self.value.as_str()) {
            self.report.push_error(self.name, message);
        }
        self
    }

    /// Escape markup-significant characters.
    pub fn escape(mut self) -> Self {
        self.value = escape_html(&self.value);
        self
    }

    /// Commit the sanitized value to the report.
    pub fn done(self) {
        self.report.values.insert(self.name.to_string(), self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(body: &str) -> FormData {
        FormData::parse(body.as_bytes()).unwrap()
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(FormData::parse(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn all_normalizes_multi_values() {
        let d = data("genre=a&title=x&genre=b");
        assert_eq!(d.all("genre"), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(d.all("title"), vec!["x".to_string()]);
        assert!(d.all("missing").is_empty());
    }

    #[test]
    fn urlencoded_values_are_decoded() {
        let d = data("name=Science+Fiction&summary=a%26b");
        assert_eq!(d.first("name"), Some("Science Fiction"));
        assert_eq!(d.first("summary"), Some("a&b"));
    }

    #[test]
    fn required_and_alphanumeric_accumulate_in_order() {
        let d = data("first_name=&family_name=O%27Brien");
        let mut report = FormReport::new();
        report
            .field("first_name", d.first("first_name"))
            .trim()
            .required("First name must be specified.")
            .alphanumeric("First name has non-alphanumeric characters.")
            .escape()
            .done();
        report
            .field("family_name", d.first("family_name"))
            .trim()
            .required("Family name must be specified.")
            .alphanumeric("Family name has non-alphanumeric characters.")
            .escape()
            .done();

        assert!(!report.is_valid());
        let messages: Vec<&str> = report.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "First name must be specified.",
                "Family name has non-alphanumeric characters.",
            ]
        );
        // Sanitized values are preserved for redisplay, escaped.
        assert_eq!(report.value("family_name"), "O&#x27;Brien");
    }

    #[test]
    fn empty_optional_date_skips_format_check() {
        let d = data("date_of_birth=");
        let mut report = FormReport::new();
        report
            .field("date_of_birth", d.first("date_of_birth"))
            .trim()
            .iso_date("Invalid date of birth")
            .done();
        assert!(report.is_valid());
        assert_eq!(report.date("date_of_birth"), None);
    }

    #[test]
    fn bad_date_is_reported_not_thrown() {
        let d = data("date_of_birth=16%2F12%2F1775");
        let mut report = FormReport::new();
        report
            .field("date_of_birth", d.first("date_of_birth"))
            .trim()
            .iso_date("Invalid date of birth")
            .escape()
            .done();
        assert!(!report.is_valid());
        assert_eq!(report.errors()[0].field, "date_of_birth");
        // The cleaned raw input survives for redisplay.
        assert_eq!(report.value("date_of_birth"), "16/12/1775");
    }

    #[test]
    fn valid_date_parses() {
        let d = data("due_back=2026-06-03");
        let mut report = FormReport::new();
        report
            .field("due_back", d.first("due_back"))
            .trim()
            .iso_date("Invalid date")
            .done();
        assert!(report.is_valid());
        assert_eq!(
            report.date("due_back"),
            NaiveDate::from_ymd_opt(2026, 6, 3)
        );
    }

    #[test]
    fn min_length_applies_to_empty_values() {
        let d = data("name=ab");
        let mut report = FormReport::new();
        report
            .field("name", d.first("name"))
            .trim()
            .min_length(3, "Genre name must contain at least 3 characters")
            .max_length(100, "Genre name must not exceed 100 characters")
            .escape()
            .done();
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn one_of_rejects_unknown_values() {
        let d = data("status=Lost");
        let mut report = FormReport::new();
        report
            .field("status", d.first("status"))
            .trim()
            .one_of(&["Available", "Maintenance"], "Invalid status")
            .escape()
            .done();
        assert!(!report.is_valid());
    }

    #[test]
    fn field_list_escapes_each_value() {
        let mut report = FormReport::new();
        report.field_list("genre", vec!["g<1>".to_string(), " g2 ".to_string()]);
        assert_eq!(report.list("genre"), ["g&lt;1&gt;", "g2"]);
    }

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<b>"war & peace"</b>'"#),
            "&lt;b&gt;&quot;war &amp; peace&quot;&lt;/b&gt;&#x27;"
        );
    }
}
