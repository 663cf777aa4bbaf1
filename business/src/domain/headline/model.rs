use chrono::{DateTime, Utc};

use super::errors::HeadlineError;

/// Number of alternative headlines the model is asked for.
pub const SUGGESTION_TARGET: usize = 3;

/// Upper bound on headline length, in whitespace-separated words.
pub const MAX_HEADLINE_WORDS: usize = 10;

/// A single request to generate alternative headlines for a product.
/// Built per call and discarded once the suggestions are consumed.
#[derive(Debug, Clone)]
pub struct HeadlineRequest {
    pub product_description: String,
    pub current_headline: Option<String>,
}

impl HeadlineRequest {
    pub fn new(
        product_description: impl Into<String>,
        current_headline: Option<String>,
    ) -> Result<Self, HeadlineError> {
        let product_description = product_description.into().trim().to_string();
        if product_description.is_empty() {
            return Err(HeadlineError::DescriptionEmpty);
        }

        let current_headline = current_headline
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty());

        Ok(Self {
            product_description,
            current_headline,
        })
    }
}

/// The validated result of one generation call.
#[derive(Debug, Clone)]
pub struct HeadlineSuggestions {
    pub headlines: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Structural enforcement of what the prompt only asks the model for.
///
/// Drops blank entries, entries over [`MAX_HEADLINE_WORDS`] words, entries
/// equal to the current headline, and duplicates of earlier entries. The
/// model's own ordering is preserved for the survivors.
pub fn sanitize_headlines(raw: Vec<String>, current_headline: Option<&str>) -> Vec<String> {
    let current = current_headline.map(str::trim);
    let mut kept: Vec<String> = Vec::with_capacity(raw.len());

    for candidate in raw {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            continue;
        }
        if candidate.split_whitespace().count() > MAX_HEADLINE_WORDS {
            continue;
        }
        if current.is_some_and(|c| c == candidate) {
            continue;
        }
        if kept.iter().any(|k| k == candidate) {
            continue;
        }
        kept.push(candidate.to_string());
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_request_when_description_present() {
        let request = HeadlineRequest::new(
            "Template portfolio siap pakai untuk mahasiswa",
            Some("Buat Kesan Pertama yang Tak Terlupakan".to_string()),
        );

        assert!(request.is_ok());
        let request = request.unwrap();
        assert_eq!(
            request.current_headline.as_deref(),
            Some("Buat Kesan Pertama yang Tak Terlupakan")
        );
    }

    #[test]
    fn should_reject_empty_description() {
        let result = HeadlineRequest::new("", None);
        assert!(matches!(result, Err(HeadlineError::DescriptionEmpty)));
    }

    #[test]
    fn should_reject_whitespace_only_description() {
        let result = HeadlineRequest::new("   \n\t ", None);
        assert!(matches!(result, Err(HeadlineError::DescriptionEmpty)));
    }

    #[test]
    fn should_normalize_blank_current_headline_to_none() {
        let request = HeadlineRequest::new("A product", Some("   ".to_string())).unwrap();
        assert!(request.current_headline.is_none());
    }

    #[test]
    fn should_drop_headline_equal_to_current() {
        let raw = vec![
            "Portofolio Online dalam 10 Menit".to_string(),
            "Buat Kesan Pertama yang Tak Terlupakan".to_string(),
        ];

        let kept = sanitize_headlines(raw, Some("Buat Kesan Pertama yang Tak Terlupakan"));

        assert_eq!(kept, vec!["Portofolio Online dalam 10 Menit".to_string()]);
    }

    #[test]
    fn should_drop_headlines_over_word_limit() {
        let over_limit =
            "one two three four five six seven eight nine ten eleven".to_string();
        let kept = sanitize_headlines(vec![over_limit, "Short and sharp".to_string()], None);

        assert_eq!(kept, vec!["Short and sharp".to_string()]);
    }

    #[test]
    fn should_keep_headline_at_exactly_ten_words() {
        let exactly_ten = "one two three four five six seven eight nine ten".to_string();
        let kept = sanitize_headlines(vec![exactly_ten.clone()], None);
        assert_eq!(kept, vec![exactly_ten]);
    }

    #[test]
    fn should_deduplicate_while_preserving_order() {
        let raw = vec![
            "Beli Sekarang".to_string(),
            "Lihat Demo".to_string(),
            "Beli Sekarang".to_string(),
        ];

        let kept = sanitize_headlines(raw, None);

        assert_eq!(
            kept,
            vec!["Beli Sekarang".to_string(), "Lihat Demo".to_string()]
        );
    }

    #[test]
    fn should_drop_blank_entries() {
        let kept = sanitize_headlines(vec!["".to_string(), "  ".to_string()], None);
        assert!(kept.is_empty());
    }
}
