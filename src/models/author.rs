//! Author model and derived display fields

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use super::{format_form_date, format_medium_date};

/// Full author model from database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Author {
    pub id: String,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display name: "family_name, first_name"
    pub fn name(&self) -> String {
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Formatted "birth - death" span. Empty when neither date is known;
    /// a missing side renders as an empty slot.
    pub fn lifespan(&self) -> String {
        match (self.date_of_birth, self.date_of_death) {
            (None, None) => String::new(),
            (birth, death) => format!(
                "{} - {}",
                birth.map(format_medium_date).unwrap_or_default(),
                death.map(format_medium_date).unwrap_or_default()
            ),
        }
    }

    /// Canonical detail-page path
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    /// Birth date as an ISO string for form value attributes
    pub fn date_of_birth_form(&self) -> String {
        self.date_of_birth.map(format_form_date).unwrap_or_default()
    }

    /// Death date as an ISO string for form value attributes
    pub fn date_of_death_form(&self) -> String {
        self.date_of_death.map(format_form_date).unwrap_or_default()
    }
}

/// Validated field set for author create and update
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> Author {
        Author {
            id: "a1".to_string(),
            first_name: "Jane".to_string(),
            family_name: "Austen".to_string(),
            date_of_birth: birth,
            date_of_death: death,
        }
    }

    #[test]
    fn name_is_family_name_first() {
        assert_eq!(author(None, None).name(), "Austen, Jane");
    }

    #[test]
    fn lifespan_formats_both_dates() {
        let a = author(
            NaiveDate::from_ymd_opt(1775, 12, 16),
            NaiveDate::from_ymd_opt(1817, 7, 18),
        );
        assert_eq!(a.lifespan(), "Dec 16, 1775 - Jul 18, 1817");
    }

    #[test]
    fn lifespan_is_empty_without_dates() {
        assert_eq!(author(None, None).lifespan(), "");
    }

    #[test]
    fn lifespan_leaves_missing_side_blank() {
        let a = author(NaiveDate::from_ymd_opt(1775, 12, 16), None);
        assert_eq!(a.lifespan(), "Dec 16, 1775 - ");
    }

    #[test]
    fn url_embeds_id() {
        assert_eq!(author(None, None).url(), "/catalog/author/a1");
    }

    #[test]
    fn form_dates_are_iso_or_empty() {
        let a = author(NaiveDate::from_ymd_opt(1775, 12, 16), None);
        assert_eq!(a.date_of_birth_form(), "1775-12-16");
        assert_eq!(a.date_of_death_form(), "");
    }
}
