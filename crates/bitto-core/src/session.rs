//! Per-conversation state: chat history, topic log and booking progress.
//!
//! A `ChatSession` is owned by exactly one conversation. Concurrent
//! conversations each hold their own instance; nothing here is shared.

use crate::booking::{BookingDetails, BookingState};
use serde::{Deserialize, Serialize};

/// State transition requested by a responder. Applied by the session owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEffect {
    /// Begin collecting name, email, day and time.
    StartBookingFlow,
    /// A booking was confirmed with these details.
    BookingConfirmed(BookingDetails),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnPart {
    pub text: String,
}

/// One conversation turn in the upstream wire shape: `{role, parts: [{text}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub parts: Vec<TurnPart>,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![TurnPart { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![TurnPart { text: text.into() }],
        }
    }

    pub fn text(&self) -> &str {
        self.parts.first().map(|p| p.text.as_str()).unwrap_or("")
    }
}

/// Ordered, duplicate-free log of topics the visitor asked about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationContext {
    asked_about: Vec<String>,
}

impl ConversationContext {
    /// Appends `topic` unless already present.
    pub fn record(&mut self, topic: &str) {
        if !self.asked_about.iter().any(|t| t == topic) {
            self.asked_about.push(topic.to_string());
        }
    }

    pub fn asked_about(&self) -> &[String] {
        &self.asked_about
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    pub history: Vec<ChatTurn>,
    pub context: ConversationContext,
    pub booking: BookingState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.history.push(ChatTurn::user(text));
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.history.push(ChatTurn::model(text));
    }

    /// The last `window` turns, oldest first.
    pub fn recent_history(&self, window: usize) -> &[ChatTurn] {
        let start = self.history.len().saturating_sub(window);
        &self.history[start..]
    }

    pub fn apply(&mut self, effect: &SessionEffect) {
        match effect {
            SessionEffect::StartBookingFlow => self.booking.start(),
            SessionEffect::BookingConfirmed(_) => self.booking.reset(),
        }
    }

    pub fn apply_all(&mut self, effects: &[SessionEffect]) {
        for effect in effects {
            self.apply(effect);
        }
    }

    /// Drops history, topic log and booking progress.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
