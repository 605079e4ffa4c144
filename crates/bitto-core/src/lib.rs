//! bitto-core: configuration, company knowledge, the keyword relevance matcher
//! and per-conversation chat state for the Reinmax Creative assistant.
//!
//! Nothing in this crate performs network I/O; the upstream model lives in `bitto-skills`.

mod booking;
mod knowledge;
mod matcher;
mod session;
mod shared;

pub use shared::{
    parse_key_list, AssistantSettings, CoreConfig, MatcherSettings, RateLimitSettings, UpstreamSettings,
    ENV_API_KEYS,
};

pub use knowledge::{
    default_topics, system_instruction, BrandingPlan, Company, Course, NamedLink, Pillar, Responder,
    SiteKnowledge, TeamMember, TopicCategory, TopicEntry, TopicReply, WorkflowStep, SITE,
};

pub use matcher::{normalize, score, MatchResult, MatcherConfig, RelevanceMatcher};

pub use session::{ChatSession, ChatTurn, ConversationContext, Role, SessionEffect, TurnPart};

pub use booking::{looks_like_time, BookingDetails, BookingState, BookingStep};
