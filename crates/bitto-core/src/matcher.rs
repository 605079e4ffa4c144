//! Keyword relevance matcher: the local responder used when the upstream model is unavailable.
//!
//! Scoring is additive per keyword:
//! - phrase bonus: `phrase_weight × len(keyword)` when the normalized keyword occurs in the normalized input;
//! - word bonus: `len(word)` for every keyword word that equals an input word.
//!
//! The best topic wins only if it reaches `min_score`. Below that the visitor gets a
//! suggestion list instead. Nothing here fails: empty or odd input scores zero and
//! falls through to the generic suggestions.

use crate::knowledge::{default_topics, SiteKnowledge, TopicEntry, TopicReply, SITE};
use crate::session::ConversationContext;
use crate::shared::MatcherSettings;

const DEFAULT_SUGGESTIONS: [&str; 5] = ["services", "pricing", "workflow", "portfolio", "booking"];
const BOOKING_TOPIC: &str = "booking";

/// Tunable scoring parameters.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub phrase_weight: usize,
    pub min_score: usize,
    pub max_suggestions: usize,
    pub default_suggestions: Vec<&'static str>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            phrase_weight: 3,
            min_score: 10,
            max_suggestions: 4,
            default_suggestions: DEFAULT_SUGGESTIONS.to_vec(),
        }
    }
}

impl From<MatcherSettings> for MatcherConfig {
    fn from(s: MatcherSettings) -> Self {
        Self {
            phrase_weight: s.phrase_weight,
            min_score: s.min_score,
            max_suggestions: s.max_suggestions,
            ..Self::default()
        }
    }
}

/// A confident match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub topic_key: &'static str,
    pub score: usize,
}

/// Lower-cases, keeps only word characters (ASCII alphanumerics and `_`) and whitespace,
/// collapses whitespace runs to one space and trims.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Relevance of `input` against one keyword list.
pub fn score(input: &str, keywords: &[&str], phrase_weight: usize) -> usize {
    let normalized_input = normalize(input);
    let input_words: Vec<&str> = normalized_input.split(' ').collect();

    keywords
        .iter()
        .map(|keyword| {
            let normalized_keyword = normalize(keyword);
            let phrase = if normalized_input.contains(normalized_keyword.as_str()) {
                normalized_keyword.len() * phrase_weight
            } else {
                0
            };
            let words: usize = normalized_keyword
                .split(' ')
                .filter(|w| input_words.contains(w))
                .map(str::len)
                .sum();
            phrase + words
        })
        .sum()
}

pub struct RelevanceMatcher {
    topics: Vec<TopicEntry>,
    site: &'static SiteKnowledge,
    config: MatcherConfig,
}

impl RelevanceMatcher {
    pub fn new(topics: Vec<TopicEntry>, site: &'static SiteKnowledge, config: MatcherConfig) -> Self {
        Self { topics, site, config }
    }

    /// Built-in topics and company knowledge.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self::new(default_topics(), &SITE, config)
    }

    pub fn topics(&self) -> &[TopicEntry] {
        &self.topics
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn score(&self, input: &str, keywords: &[&str]) -> usize {
        score(input, keywords, self.config.phrase_weight)
    }

    /// Highest-scoring topic at or above `min_score`; earlier topics win ties.
    pub fn find_best_match(&self, input: &str) -> Option<(&TopicEntry, MatchResult)> {
        let mut best: Option<(&TopicEntry, usize)> = None;
        let mut highest = 0;
        for topic in &self.topics {
            let s = self.score(input, topic.keywords);
            if s > highest {
                highest = s;
                best = Some((topic, s));
            }
        }
        best.filter(|(_, s)| *s >= self.config.min_score).map(|(topic, s)| {
            (
                topic,
                MatchResult {
                    topic_key: topic.key,
                    score: s,
                },
            )
        })
    }

    /// First topic (declaration order) with any keyword contained in the input. No scoring.
    fn partial_match(&self, input: &str) -> Option<&TopicEntry> {
        let normalized_input = normalize(input);
        self.topics.iter().find(|topic| {
            topic
                .keywords
                .iter()
                .any(|k| normalized_input.contains(normalize(k).as_str()))
        })
    }

    /// Answers from the best topic and logs it in `context`, or returns the suggestion fallback.
    /// Effects in the reply are for the caller to apply.
    pub fn respond(&self, input: &str, context: &mut ConversationContext) -> TopicReply {
        if let Some((topic, result)) = self.find_best_match(input) {
            tracing::debug!(
                target: "bitto::matcher",
                topic = result.topic_key,
                score = result.score,
                "Local topic match"
            );
            context.record(topic.key);
            return topic.respond(self.site);
        }
        TopicReply::text(self.fallback(input))
    }

    fn fallback(&self, input: &str) -> String {
        let partial = self.partial_match(input);
        let (intro, candidates): (String, Vec<&str>) = match partial {
            Some(topic) => {
                let mut ordered = vec![topic.key];
                ordered.extend(topic.related_topics.iter().copied());
                ordered.push(BOOKING_TOPIC);
                ordered.extend(self.config.default_suggestions.iter().copied());
                (
                    format!(
                        "I'm not sure I fully understand. Did you want to know about **{}**? I can also tell you about:\n",
                        topic.key
                    ),
                    ordered,
                )
            }
            None => (
                "I can help with things like:\n".to_string(),
                self.config.default_suggestions.clone(),
            ),
        };

        let mut suggestions: Vec<&str> = Vec::new();
        for key in candidates {
            if !suggestions.contains(&key) {
                suggestions.push(key);
            }
        }
        let lines = suggestions
            .iter()
            .take(self.config.max_suggestions)
            .map(|key| format!("Our **{}**", key))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "I'm sorry, I'm not equipped to answer that question. My knowledge is focused on {}.\n\n{}\n{}",
            self.site.company.name, intro, lines
        )
    }
}

impl Default for RelevanceMatcher {
    fn default() -> Self {
        Self::with_config(MatcherConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::TopicCategory;
    use crate::session::SessionEffect;

    fn topic(key: &'static str, keywords: &'static [&'static str]) -> TopicEntry {
        TopicEntry {
            key,
            keywords,
            responder: |_| TopicReply::text("custom"),
            related_topics: &[],
            category: TopicCategory::Info,
        }
    }

    #[test]
    fn normalize_strips_punctuation_and_collapses_space() {
        assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
        assert_eq!(normalize("UI/UX design\t\nexperts"), "uiux design experts");
        assert_eq!(normalize("snake_case ok"), "snake_case ok");
        assert_eq!(normalize("Ünïcödé"), "ncd");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "",
            "   ",
            "How much is the SIMBA plan?!",
            "tabs\tand\nnewlines",
            "émoji 🚀 mixed_with-dashes",
            "K-Kelvin \u{212A}",
            "multiple    spaces   here  ",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {:?}", s);
        }
    }

    #[test]
    fn simba_pricing_scores_phrase_and_word_bonus() {
        assert_eq!(score("how much is the simba plan", &["Simba"], 3), 15 + 5);
        let matcher = RelevanceMatcher::default();
        let (topic, result) = matcher.find_best_match("how much is the simba plan").unwrap();
        assert_eq!(topic.key, "pricing");
        assert_eq!(result.topic_key, "pricing");
        assert!(result.score >= 10);
    }

    #[test]
    fn short_overlap_is_not_confident() {
        let matcher = RelevanceMatcher::default();
        let thanks = matcher.topics().iter().find(|t| t.key == "thanks").unwrap();
        assert!(matcher.score("ok", thanks.keywords) < 10);
        assert!(matcher.find_best_match("ok").is_none());

        let mut ctx = ConversationContext::default();
        let reply = matcher.respond("ok", &mut ctx);
        assert!(reply.text.starts_with("I'm sorry, I'm not equipped to answer that question."));
        assert!(reply.text.contains("Did you want to know about **thanks**?"));
        assert!(reply.effects.is_empty());
        assert!(ctx.asked_about().is_empty());
    }

    #[test]
    fn score_is_monotonic_in_added_phrases() {
        let keywords: &[&str] = &["brand identity", "logo", "web design"];
        let base = "i need some help";
        let mut input = base.to_string();
        let mut last = score(&input, keywords, 3);
        for k in keywords {
            input.push(' ');
            input.push_str(k);
            let next = score(&input, keywords, 3);
            assert!(next >= last, "{} < {} after adding {}", next, last, k);
            last = next;
        }
        assert!(last > score(base, keywords, 3));
    }

    #[test]
    fn ties_go_to_the_first_declared_topic() {
        let matcher = RelevanceMatcher::new(
            vec![topic("first", &["alpha bravo"]), topic("second", &["alpha bravo"])],
            &SITE,
            MatcherConfig::default(),
        );
        let (t, _) = matcher.find_best_match("alpha bravo").unwrap();
        assert_eq!(t.key, "first");
    }

    #[test]
    fn global_maximum_wins_over_declaration_order() {
        let matcher = RelevanceMatcher::new(
            vec![topic("weak", &["alpha"]), topic("strong", &["alpha", "alpha bravo"])],
            &SITE,
            MatcherConfig::default(),
        );
        let (t, r) = matcher.find_best_match("alpha bravo").unwrap();
        assert_eq!(t.key, "strong");
        assert_eq!(r.score, 15 + 5 + 33 + 5 + 5);
    }

    #[test]
    fn threshold_is_tunable() {
        let strict = RelevanceMatcher::with_config(MatcherConfig {
            min_score: 1_000,
            ..MatcherConfig::default()
        });
        assert!(strict.find_best_match("how much is the simba plan").is_none());
    }

    #[test]
    fn empty_input_gets_default_suggestions() {
        let matcher = RelevanceMatcher::default();
        let mut ctx = ConversationContext::default();
        let reply = matcher.respond("", &mut ctx);
        assert!(reply.text.contains("I can help with things like:\n"));
        assert!(reply
            .text
            .ends_with("Our **services**\nOur **pricing**\nOur **workflow**\nOur **portfolio**"));
    }

    #[test]
    fn partial_match_personalises_suggestions() {
        let matcher = RelevanceMatcher::new(
            vec![
                TopicEntry {
                    related_topics: &["pricing", "services"],
                    ..topic("team", &["zz"])
                },
                topic("pricing", &["price"]),
            ],
            &SITE,
            MatcherConfig::default(),
        );
        // "zz" occurs inside "zzz" but only earns the phrase bonus (6), below the threshold.
        let mut ctx = ConversationContext::default();
        let reply = matcher.respond("zzz", &mut ctx);
        assert!(reply.text.contains("Did you want to know about **team**?"));
        assert!(reply
            .text
            .ends_with("Our **team**\nOur **pricing**\nOur **services**\nOur **booking**"));
    }

    #[test]
    fn confident_match_records_topic_and_returns_effects() {
        let matcher = RelevanceMatcher::default();
        let mut ctx = ConversationContext::default();
        let reply = matcher.respond("I'd like to book a consultation", &mut ctx);
        assert_eq!(ctx.asked_about(), ["booking"]);
        assert_eq!(reply.effects, vec![SessionEffect::StartBookingFlow]);

        matcher.respond("book a consultation again", &mut ctx);
        matcher.respond("who is on your team?", &mut ctx);
        assert_eq!(ctx.asked_about(), ["booking", "team"]);
    }
}
