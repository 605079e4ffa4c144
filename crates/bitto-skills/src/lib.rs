//! Upstream-facing capabilities: the rotating credential caller, model reply
//! interpretation and the two-tier chat assistant built on them.

mod assistant;
mod reply;
mod upstream;

#[cfg(test)]
mod test_support;

pub use assistant::{booking_redirect, AssistantOutcome, ChatAssistant, ReplyTier};
pub use reply::{candidate_text, AssistantReply};
pub use upstream::{
    redact, AttemptError, CredentialPool, GeminiTransport, UpstreamCaller, UpstreamError, UpstreamTransport,
};
