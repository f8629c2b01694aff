//! Static Matcher - keyword based reply lookup
//!
//! Resolves a message to a canned reply without any external service.
//! Matching is plain substring containment on the lower-cased message,
//! evaluated in three phases:
//!
//! 1. Keyword table, first entry in definition order wins
//! 2. Category rules, first rule with any trigger present wins
//! 3. Default reply
//!
//! Partial-word hits count (`"hi"` matches inside `"this"`).

use super::catalogue::{CATEGORY_RULES, DEFAULT_REPLY, KEYWORD_TABLE};

/// A single keyword → reply association
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    keyword: String,
    reply: String,
}

impl KeywordEntry {
    /// Keywords are stored lower-cased since messages are lower-cased before matching.
    pub fn new(keyword: impl AsRef<str>, reply: impl Into<String>) -> Self {
        Self {
            keyword: keyword.as_ref().to_lowercase(),
            reply: reply.into(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }
}

/// A set of related trigger words sharing one reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    name: String,
    triggers: Vec<String>,
    reply: String,
}

impl CategoryRule {
    pub fn new<I, S>(name: impl Into<String>, triggers: I, reply: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            reply: reply.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn reply(&self) -> &str {
        &self.reply
    }

    fn first_trigger_in(&self, normalized: &str) -> Option<&str> {
        self.triggers
            .iter()
            .find(|t| normalized.contains(t.as_str()))
            .map(String::as_str)
    }
}

/// Which phase produced a static reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind<'a> {
    Keyword { keyword: &'a str },
    Category { rule: &'a str, trigger: &'a str },
    Default,
}

impl std::fmt::Display for MatchKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::Keyword { keyword } => write!(f, "keyword '{}'", keyword),
            MatchKind::Category { rule, trigger } => {
                write!(f, "category '{}' via '{}'", rule, trigger)
            }
            MatchKind::Default => write!(f, "default"),
        }
    }
}

/// Result of a static lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMatch<'a> {
    pub kind: MatchKind<'a>,
    pub reply: &'a str,
}

/// Keyword table, category rules and default reply.
///
/// Built once at startup and shared read-only; matching never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMatcher {
    keywords: Vec<KeywordEntry>,
    categories: Vec<CategoryRule>,
    default_reply: String,
}

impl StaticMatcher {
    /// Build a matcher from a custom catalogue.
    ///
    /// An empty `default_reply` falls back to the built-in default so that
    /// matching always yields text.
    pub fn new(
        keywords: Vec<KeywordEntry>,
        categories: Vec<CategoryRule>,
        default_reply: impl Into<String>,
    ) -> Self {
        let default_reply = default_reply.into();
        let default_reply = if default_reply.trim().is_empty() {
            DEFAULT_REPLY.to_string()
        } else {
            default_reply
        };

        Self {
            keywords,
            categories,
            default_reply,
        }
    }

    pub fn keywords(&self) -> &[KeywordEntry] {
        &self.keywords
    }

    pub fn categories(&self) -> &[CategoryRule] {
        &self.categories
    }

    pub fn default_reply(&self) -> &str {
        &self.default_reply
    }

    /// Look up the reply for a message along with the phase that matched
    pub fn classify(&self, message: &str) -> StaticMatch<'_> {
        let normalized = message.to_lowercase();

        if let Some(entry) = self
            .keywords
            .iter()
            .find(|e| normalized.contains(e.keyword.as_str()))
        {
            return StaticMatch {
                kind: MatchKind::Keyword {
                    keyword: &entry.keyword,
                },
                reply: &entry.reply,
            };
        }

        for rule in &self.categories {
            if let Some(trigger) = rule.first_trigger_in(&normalized) {
                return StaticMatch {
                    kind: MatchKind::Category {
                        rule: &rule.name,
                        trigger,
                    },
                    reply: &rule.reply,
                };
            }
        }

        StaticMatch {
            kind: MatchKind::Default,
            reply: &self.default_reply,
        }
    }

    /// Reply text for a message. Never fails.
    pub fn match_message(&self, message: &str) -> &str {
        self.classify(message).reply
    }
}

impl Default for StaticMatcher {
    /// The built-in customer support catalogue
    fn default() -> Self {
        let keywords = KEYWORD_TABLE
            .iter()
            .map(|(keyword, reply)| KeywordEntry::new(keyword, *reply))
            .collect();

        let categories = CATEGORY_RULES
            .iter()
            .map(|(name, triggers, reply)| CategoryRule::new(*name, triggers.iter(), *reply))
            .collect();

        Self::new(keywords, categories, DEFAULT_REPLY)
    }
}
