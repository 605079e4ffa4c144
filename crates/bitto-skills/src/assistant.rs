//! Two-tier chat assistant. The upstream model answers when reachable; the local
//! relevance matcher answers otherwise. A guided booking flow short-circuits both
//! while it is collecting details.

use crate::reply::{arg_str, candidate_text, AssistantReply};
use crate::upstream::{UpstreamCaller, UpstreamError};
use bitto_core::{system_instruction, BookingDetails, ChatSession, RelevanceMatcher, SessionEffect, SITE};
use url::form_urlencoded;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;

const BOOKING_PAGE: &str = "/booking.html";

/// Which tier produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTier {
    Upstream,
    Local,
    Booking,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantOutcome {
    pub reply: String,
    pub tier: ReplyTier,
    pub effects: Vec<SessionEffect>,
    /// Page the client should open next, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum AskError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("upstream response has no candidate text")]
    NoCandidate,
}

pub struct ChatAssistant {
    upstream: Arc<UpstreamCaller>,
    matcher: Arc<RelevanceMatcher>,
    system_instruction: String,
    history_window: usize,
}

impl ChatAssistant {
    pub fn new(upstream: Arc<UpstreamCaller>, matcher: Arc<RelevanceMatcher>, history_window: usize) -> Self {
        Self {
            upstream,
            matcher,
            system_instruction: system_instruction(&SITE),
            history_window: history_window.max(1),
        }
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    /// Handles one visitor message. Blank input is ignored and yields `None`.
    pub async fn handle(&self, session: &mut ChatSession, input: &str) -> Option<AssistantOutcome> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        session.push_user(input);

        if session.booking.is_active() && session.booking.step().is_some() {
            if session.booking.capture(input) {
                if let Some(prompt) = session.booking.advance() {
                    return Some(Self::finish(session, prompt, ReplyTier::Booking, Vec::new(), None));
                }
            }
            if session.booking.is_confirmation(input) {
                let details = session.booking.complete();
                return Some(Self::confirm_booking(session, details, ReplyTier::Booking));
            }
        }

        match self.ask_upstream(session).await {
            Ok(AssistantReply::PlainText(text)) => {
                if session.booking.is_active() {
                    session.booking.follow_assistant(&text);
                }
                Some(Self::finish(session, text, ReplyTier::Upstream, Vec::new(), None))
            }
            Ok(AssistantReply::ToolCall { name, args }) => Some(self.run_tool(session, input, &name, &args)),
            Err(e) => {
                tracing::warn!(target: "bitto::assistant", error = %e, "Falling back to local responder");
                Some(self.answer_locally(session, input))
            }
        }
    }

    async fn ask_upstream(&self, session: &ChatSession) -> Result<AssistantReply, AskError> {
        let payload = json!({
            "contents": session.recent_history(self.history_window),
            "systemInstruction": { "parts": [{ "text": self.system_instruction }] },
        });
        let body = self.upstream.call(&payload).await?;
        let text = candidate_text(&body).ok_or(AskError::NoCandidate)?;
        Ok(AssistantReply::parse(text))
    }

    fn run_tool(&self, session: &mut ChatSession, input: &str, name: &str, args: &Map<String, Value>) -> AssistantOutcome {
        tracing::info!(target: "bitto::assistant", tool = name, "Model requested tool");
        match name {
            "booking_complete" => {
                let details = BookingDetails {
                    name: arg_str(args, "name").to_string(),
                    email: arg_str(args, "email").to_string(),
                    day: arg_str(args, "day").to_string(),
                    time: arg_str(args, "time").to_string(),
                };
                Self::confirm_booking(session, details, ReplyTier::Upstream)
            }
            "schedule_call" => {
                let effects = vec![SessionEffect::StartBookingFlow];
                session.apply_all(&effects);
                Self::finish(
                    session,
                    "Great! I'd love to help you schedule a call. What's your **full name**?".to_string(),
                    ReplyTier::Upstream,
                    effects,
                    None,
                )
            }
            "contact_us" => Self::finish(
                session,
                format!(
                    "You can reach us at {} or {}. We're here to help!",
                    SITE.company.email, SITE.company.phone
                ),
                ReplyTier::Upstream,
                Vec::new(),
                None,
            ),
            other => {
                tracing::warn!(target: "bitto::assistant", tool = other, "Unknown tool requested");
                self.answer_locally(session, input)
            }
        }
    }

    fn answer_locally(&self, session: &mut ChatSession, input: &str) -> AssistantOutcome {
        let reply = self.matcher.respond(input, &mut session.context);
        session.apply_all(&reply.effects);
        Self::finish(session, reply.text, ReplyTier::Local, reply.effects, None)
    }

    fn confirm_booking(session: &mut ChatSession, details: BookingDetails, tier: ReplyTier) -> AssistantOutcome {
        tracing::info!(target: "bitto::assistant", day = %details.day, "Booking confirmed");
        let text = details.confirmation_text();
        let redirect = booking_redirect(&details);
        let effects = vec![SessionEffect::BookingConfirmed(details)];
        session.apply_all(&effects);
        Self::finish(session, text, tier, effects, Some(redirect))
    }

    fn finish(
        session: &mut ChatSession,
        reply: String,
        tier: ReplyTier,
        effects: Vec<SessionEffect>,
        redirect: Option<String>,
    ) -> AssistantOutcome {
        session.push_model(reply.as_str());
        AssistantOutcome {
            reply,
            tier,
            effects,
            redirect,
        }
    }
}

/// Relative link to the booking page with the details pre-filled.
pub fn booking_redirect(details: &BookingDetails) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", &details.name)
        .append_pair("email", &details.email)
        .append_pair("date", &details.day)
        .append_pair("message", &format!("Booking for {}", details.time))
        .finish();
    format!("{}?{}", BOOKING_PAGE, query)
}
