use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const MAX_AUTHOR_NAME_GRAPHEMES: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub vehicle_id: i64,
    pub author_name: String,
    pub rating: u8,
    pub comment: String,
    pub is_approved: bool,
    pub admin_reply: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub fn parse(value: i64) -> Result<Self, String> {
        match u8::try_from(value) {
            Ok(rating @ 1..=5) => Ok(Self(rating)),
            _ => Err(format!("{} is not a valid rating, use 1 to 5.", value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorName(String);

impl AuthorName {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Author name is required.".into());
        }
        if trimmed.graphemes(true).count() > MAX_AUTHOR_NAME_GRAPHEMES {
            return Err("Author name is too long.".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for AuthorName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw review as submitted by a visitor.
#[derive(Debug, Deserialize)]
pub struct ReviewSubmission {
    pub vehicle_id: i64,
    pub author_name: String,
    pub rating: i64,
    pub comment: String,
}

/// A validated review waiting to be stored, unapproved.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub vehicle_id: i64,
    pub author_name: AuthorName,
    pub rating: Rating,
    pub comment: String,
}

impl TryFrom<ReviewSubmission> for NewReview {
    type Error = String;

    fn try_from(value: ReviewSubmission) -> Result<Self, Self::Error> {
        let author_name = AuthorName::parse(value.author_name)?;
        let rating = Rating::parse(value.rating)?;
        let comment = parse_comment(value.comment)?;
        Ok(Self {
            vehicle_id: value.vehicle_id,
            author_name,
            rating,
            comment,
        })
    }
}

fn parse_comment(comment: String) -> Result<String, String> {
    let comment = comment.trim();
    if comment.is_empty() {
        return Err("Review comment is required.".into());
    }
    Ok(comment.to_string())
}

/// Moderation changes; absent fields are left alone.
///
/// An empty `admin_reply` removes the reply.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewUpdate {
    pub is_approved: Option<bool>,
    pub admin_reply: Option<String>,
    pub comment: Option<String>,
    pub rating: Option<i64>,
    pub author_name: Option<String>,
}

impl ReviewUpdate {
    pub fn apply(self, review: &mut Review) -> Result<(), String> {
        // Validate everything before touching the stored row.
        let rating = self.rating.map(Rating::parse).transpose()?;
        let author_name = self.author_name.map(AuthorName::parse).transpose()?;
        let comment = self.comment.map(parse_comment).transpose()?;

        if let Some(rating) = rating {
            review.rating = rating.value();
        }
        if let Some(author_name) = author_name {
            review.author_name = author_name.as_ref().to_string();
        }
        if let Some(is_approved) = self.is_approved {
            review.is_approved = is_approved;
        }
        if let Some(comment) = comment {
            review.comment = comment;
        }
        if let Some(reply) = self.admin_reply {
            review.admin_reply = Some(reply).filter(|r| !r.trim().is_empty());
        }
        Ok(())
    }
}
