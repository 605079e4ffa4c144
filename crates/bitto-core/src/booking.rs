//! Guided call booking: name → email → day → time → summary.

use crate::knowledge::capitalize;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const WEEKDAYS: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    Name,
    Email,
    Day,
    Time,
    Summary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub day: String,
    pub time: String,
}

impl BookingDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.day.is_empty() && !self.time.is_empty()
    }

    /// Confirmation shown once the booking is final.
    pub fn confirmation_text(&self) -> String {
        format!(
            "Thank you **{}**! Your call has been scheduled:\n📧 **Email**: {}\n📅 **Day**: {}\n🕐 **Time**: {}\n\nWe'll send a confirmation to your email shortly. Looking forward to speaking with you!",
            self.name, self.email, self.day, self.time
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingState {
    active: bool,
    step: Option<BookingStep>,
    data: BookingDetails,
}

impl BookingState {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn step(&self) -> Option<BookingStep> {
        self.step
    }

    pub fn details(&self) -> &BookingDetails {
        &self.data
    }

    pub fn start(&mut self) {
        self.active = true;
        self.step = Some(BookingStep::Name);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Tries to fill the field for the current step from `input`. Returns true when a field was captured.
    pub fn capture(&mut self, input: &str) -> bool {
        let data = &mut self.data;
        match self.step {
            Some(BookingStep::Name) if data.name.is_empty() => {
                data.name = input.trim().to_string();
                !data.name.is_empty()
            }
            Some(BookingStep::Email) if data.email.is_empty() && input.contains('@') => {
                data.email = input.trim().to_string();
                true
            }
            Some(BookingStep::Day) if data.day.is_empty() => {
                let lower = input.to_lowercase();
                match WEEKDAYS.iter().find(|d| lower.contains(*d)) {
                    Some(day) => {
                        data.day = capitalize(day);
                        true
                    }
                    None => false,
                }
            }
            Some(BookingStep::Time) if data.time.is_empty() && looks_like_time(input) => {
                data.time = input.trim().to_string();
                true
            }
            _ => false,
        }
    }

    /// Moves to the next missing field and returns its prompt, or the summary once everything is known.
    pub fn advance(&mut self) -> Option<String> {
        let d = &self.data;
        let (step, prompt) = if d.name.is_empty() {
            return None;
        } else if d.email.is_empty() {
            (BookingStep::Email, format!("Perfect, {}! What's your **email address**?", d.name))
        } else if d.day.is_empty() {
            (BookingStep::Day, "Great! Which **day** works best for you? (Monday-Friday)".to_string())
        } else if d.time.is_empty() {
            (BookingStep::Time, "Perfect! What **time** would you prefer? (8 AM - 5 PM)".to_string())
        } else {
            (
                BookingStep::Summary,
                format!(
                    "Let me confirm:\n📧 **Email**: {}\n📅 **Day**: {}\n🕐 **Time**: {}\n\nIs this correct? (Yes/No)",
                    d.email, d.day, d.time
                ),
            )
        };
        self.step = Some(step);
        Some(prompt)
    }

    /// True when the visitor accepts the summary.
    pub fn is_confirmation(&self, input: &str) -> bool {
        if self.step != Some(BookingStep::Summary) {
            return false;
        }
        let lower = input.to_lowercase();
        lower.contains("yes") || lower.contains("confirm")
    }

    /// Takes the collected details and closes the flow.
    pub fn complete(&mut self) -> BookingDetails {
        let details = std::mem::take(&mut self.data);
        self.reset();
        details
    }

    /// Re-aligns the current step with what the assistant just asked for.
    pub fn follow_assistant(&mut self, message: &str) {
        let lower = message.to_lowercase();
        let d = &self.data;
        let step = if lower.contains("name") && d.name.is_empty() {
            BookingStep::Name
        } else if lower.contains("email") && d.email.is_empty() {
            BookingStep::Email
        } else if lower.contains("day") && d.day.is_empty() {
            BookingStep::Day
        } else if lower.contains("time") && d.time.is_empty() {
            BookingStep::Time
        } else if lower.contains("summary") || lower.contains("confirm") {
            BookingStep::Summary
        } else {
            return;
        };
        self.step = Some(step);
    }
}

/// `H:MM`/`HH:MM` anywhere, or digits followed by optional whitespace and `am`/`pm`.
static TIME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9]{1,2}:[0-9]{2}|[0-9]+\s*(am|pm)").ok());

pub fn looks_like_time(input: &str) -> bool {
    TIME_PATTERN
        .as_ref()
        .map(|re| re.is_match(input))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> BookingState {
        let mut b = BookingState::default();
        b.start();
        b
    }

    #[test]
    fn full_flow_reaches_summary_and_completes() {
        let mut b = started();
        assert!(b.capture("  Asha Mushi "));
        assert_eq!(b.advance().unwrap(), "Perfect, Asha Mushi! What's your **email address**?");
        assert_eq!(b.step(), Some(BookingStep::Email));

        assert!(!b.capture("not an email"));
        assert!(b.capture("asha@example.com"));
        assert!(b.advance().unwrap().contains("**day**"));

        assert!(!b.capture("saturday please"));
        assert!(b.capture("Maybe THURSDAY?"));
        assert_eq!(b.details().day, "Thursday");
        assert!(b.advance().unwrap().contains("**time**"));

        assert!(!b.capture("whenever"));
        assert!(b.capture("10 am"));
        let summary = b.advance().unwrap();
        assert!(summary.starts_with("Let me confirm:"));
        assert!(summary.contains("asha@example.com"));
        assert_eq!(b.step(), Some(BookingStep::Summary));

        assert!(!b.is_confirmation("no"));
        assert!(b.is_confirmation("Yes, that's right"));
        let details = b.complete();
        assert!(details.is_complete());
        assert_eq!(details.time, "10 am");
        assert!(!b.is_active());
        assert_eq!(b.step(), None);
    }

    #[test]
    fn time_detection() {
        assert!(looks_like_time("9:30"));
        assert!(looks_like_time("at 14:05 please"));
        assert!(looks_like_time("3pm"));
        assert!(looks_like_time("11 AM"));
        assert!(!looks_like_time("noon"));
        assert!(!looks_like_time("9:3"));
        assert!(!looks_like_time("am 9"));
    }

    #[test]
    fn time_detection_accepts_unicode_spacing() {
        assert!(looks_like_time("10\u{00A0}am"));
        assert!(looks_like_time("4\u{2009}PM works"));
        assert!(looks_like_time("10\tam"));
    }

    #[test]
    fn assistant_prompts_realign_missing_steps() {
        let mut b = started();
        b.capture("Juma");
        b.follow_assistant("Thanks! Could you share your email?");
        assert_eq!(b.step(), Some(BookingStep::Email));
        // name is already known, so a mention of it does not rewind
        b.follow_assistant("Nice name. Which day suits you?");
        assert_eq!(b.step(), Some(BookingStep::Day));
        b.follow_assistant("Let me just confirm everything.");
        assert_eq!(b.step(), Some(BookingStep::Summary));
    }

    #[test]
    fn confirmation_text_mentions_every_field() {
        let details = BookingDetails {
            name: "Neema".into(),
            email: "neema@example.com".into(),
            day: "Monday".into(),
            time: "9:00".into(),
        };
        let text = details.confirmation_text();
        for part in ["**Neema**", "neema@example.com", "Monday", "9:00"] {
            assert!(text.contains(part));
        }
    }
}
