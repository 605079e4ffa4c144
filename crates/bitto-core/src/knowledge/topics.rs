//! Built-in FAQ topics for the local responder.
//!
//! Declaration order is significant: the matcher resolves score ties and
//! partial matches in favour of the earlier entry.

use super::site::SiteKnowledge;
use crate::session::SessionEffect;

/// Coarse grouping of a topic, reported alongside matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicCategory {
    Info,
    Pricing,
    Academy,
    Contact,
    Booking,
    Greeting,
    Pleasantry,
    Services,
    Utility,
}

/// Display text plus the session transitions the caller should apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicReply {
    pub text: String,
    pub effects: Vec<SessionEffect>,
}

impl TopicReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            effects: Vec::new(),
        }
    }

    pub fn with_effect(mut self, effect: SessionEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Pure response generator for a topic.
pub type Responder = fn(&SiteKnowledge) -> TopicReply;

/// One FAQ category: keywords to score against, a responder and follow-up suggestions.
#[derive(Debug, Clone, Copy)]
pub struct TopicEntry {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub responder: Responder,
    pub related_topics: &'static [&'static str],
    pub category: TopicCategory,
}

impl TopicEntry {
    pub fn respond(&self, site: &SiteKnowledge) -> TopicReply {
        (self.responder)(site)
    }
}

fn team(site: &SiteKnowledge) -> TopicReply {
    let members = site
        .team
        .iter()
        .map(|t| format!("**{}** ({}) - {}", t.name, t.role, t.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "Meet our creative force:\n\n{}\n\nReady to work with us? **Book a call**!",
        members
    ))
}

fn philosophy(site: &SiteKnowledge) -> TopicReply {
    let values = site
        .philosophy
        .iter()
        .map(|p| format!("**{}** - {}", p.name, p.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "Our brand philosophy:\n\n{}\n\nLet's create something amazing! **Book a call**",
        values
    ))
}

fn workflow(site: &SiteKnowledge) -> TopicReply {
    let steps = site
        .workflow
        .iter()
        .map(|w| format!("**{}. {}**\n{}", w.step, w.name, w.description))
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "Our proven 6-step workflow:\n\n{}\n\nReady to start? **Book a call**!",
        steps
    ))
}

fn pricing(site: &SiteKnowledge) -> TopicReply {
    let plans = site
        .branding_plans
        .iter()
        .map(|p| format!("**{}** ({}) - {}\n{}", p.name, p.tier, p.price, p.target))
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "Our branding plans:\n\n{}\n\n**Book a call** to discuss which plan fits your needs!",
        plans
    ))
}

fn academy(site: &SiteKnowledge) -> TopicReply {
    let courses = site
        .academy_courses
        .iter()
        .map(|c| {
            format!(
                "**{}** - {}\n{}",
                c.name,
                c.price.unwrap_or("Contact for details"),
                c.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "Our academy courses:\n\n{}\n\nInterested? **Book a call** or enroll directly!",
        courses
    ))
}

fn contact(site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(format!(
        "Let's connect!\n\n{} | {}\nBased in {}\n\nOr simply **book a call** right here!",
        site.company.email, site.company.phone, site.company.location
    ))
}

fn booking(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text("I'd love to help you schedule a call with our team!\n\nWhat's your **full name**?")
        .with_effect(SessionEffect::StartBookingFlow)
}

fn about(site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(format!(
        "We're **{}** - {}\n\nBased in {}, we're passionate about helping brands grow through strategic design!\n\n**Book a call** to work together!",
        site.company.name, site.company.description, site.company.location
    ))
}

fn greeting(site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(format!(
        "Hello! I'm Bitto, your assistant at {}.\n\nI can help you:\nLearn about our **services**\nCheck **pricing**\n**Book a call**\nAnswer questions\n\nWhat brings you here today?",
        site.company.name
    ))
}

fn thanks(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text("You're very welcome!\n\nIs there anything else I can help you with?")
}

fn services(site: &SiteKnowledge) -> TopicReply {
    let mut seen: Vec<(&str, &str)> = Vec::new();
    for s in site.services {
        if !seen.iter().any(|(n, d)| *n == s.name || *d == s.description) {
            seen.push((s.name, s.description));
        }
    }
    let listed = seen
        .iter()
        .map(|(n, d)| format!("**{}** - {}", n, d))
        .collect::<Vec<_>>()
        .join("\n\n");
    TopicReply::text(format!(
        "We are experts in bringing brands to life through design and motion. Our core services are:\n\n{}\n\nIs there a specific service you'd like to know more about, like **Brand Identity** or **Web UI Design**?",
        listed
    ))
}

fn portfolio(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(
        "You can view our portfolio of selected projects on our main website. We've worked with a diverse range of clients to create impactful brand identities and digital experiences. Would you like me to point you to our **workflow** to see how we do it?",
    )
}

fn timeline(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(
        "Project timelines can vary based on complexity. A typical **Brand Identity** project takes about 2-4 weeks from brief to delivery. Web design projects are more variable. For a precise estimate, it's best to **book a call** with our team to discuss your specific needs!",
    )
}

fn technology(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(
        "Our design team primarily uses industry-standard tools like **Figma** for UI/UX design, and the **Adobe Creative Suite** (Illustrator, Photoshop, After Effects, Premiere Pro) for branding, illustration, motion graphics, and video editing. We also offer courses in some of these tools in our **academy**!",
    )
}

fn resources(site: &SiteKnowledge) -> TopicReply {
    // Links are never handed out in chat, only the names.
    let listed = site
        .resources
        .iter()
        .map(|r| format!("**{}** (available on our website)", r.name))
        .collect::<Vec<_>>()
        .join("\n");
    TopicReply::text(format!(
        "We offer several resources on our website:\n\n{}\n\nYou can find these under the Resources section in our site footer.",
        listed
    ))
}

fn social(site: &SiteKnowledge) -> TopicReply {
    let platforms = site
        .social_links
        .iter()
        .map(|(platform, _)| capitalize(platform))
        .collect::<Vec<_>>()
        .join(", ");
    TopicReply::text(format!(
        "You can find us on {}. Check out our site footer for direct links!",
        platforms
    ))
}

fn legal(site: &SiteKnowledge) -> TopicReply {
    let pages = site.legal.iter().map(|l| l.name).collect::<Vec<_>>().join(", ");
    TopicReply::text(format!(
        "You can find information about our {} on our website, typically linked in the footer.",
        pages
    ))
}

fn clarification(_site: &SiteKnowledge) -> TopicReply {
    TopicReply::text(
        "I can certainly help with that! To give you the best information, could you be a bit more specific? For example, are you interested in our **services**, **pricing**, or our creative **process**?",
    )
}

pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The built-in topic table, in matching priority order.
pub fn default_topics() -> Vec<TopicEntry> {
    use TopicCategory::*;
    vec![
        TopicEntry {
            key: "team",
            keywords: &[
                "team", "who", "people", "staff", "members", "founder", "ceo", "designer", "developer",
                "Reinhard", "Henry", "Klerry", "Maggie",
            ],
            responder: team,
            related_topics: &["about", "contact"],
            category: Info,
        },
        TopicEntry {
            key: "philosophy",
            keywords: &[
                "philosophy", "values", "core", "believe", "principles", "approach", "why", "innovation",
                "excellence", "collaboration", "integrity",
            ],
            responder: philosophy,
            related_topics: &["about", "services"],
            category: Info,
        },
        TopicEntry {
            key: "workflow",
            keywords: &[
                "process", "workflow", "how it works", "steps", "procedure", "methodology", "how do you work",
                "creative brief", "research", "strategy", "concept development", "sketching", "designing",
                "client feedback", "asset delivery",
            ],
            responder: workflow,
            related_topics: &["services", "timeline"],
            category: Info,
        },
        TopicEntry {
            key: "pricing",
            keywords: &[
                "pricing", "price", "cost", "how much", "package", "plan", "plans", "afford", "Twiga", "Simba",
                "Tembo", "TZS",
            ],
            responder: pricing,
            related_topics: &["services", "booking"],
            category: Pricing,
        },
        TopicEntry {
            key: "academy",
            keywords: &[
                "academy", "course", "courses", "learn", "training", "education", "teach", "class", "Illustrator",
                "Photoshop", "Figma", "Premiere Pro",
            ],
            responder: academy,
            related_topics: &["pricing"],
            category: Academy,
        },
        TopicEntry {
            key: "contact",
            keywords: &[
                "contact", "reach", "email", "phone", "call", "talk", "speak", "get in touch", "reach out",
                "location", "address",
            ],
            responder: contact,
            related_topics: &["booking"],
            category: Contact,
        },
        TopicEntry {
            key: "booking",
            keywords: &[
                "book", "schedule", "appointment", "meeting", "consultation", "discuss", "meet", "talk to someone",
            ],
            responder: booking,
            related_topics: &[],
            category: Booking,
        },
        TopicEntry {
            key: "about",
            keywords: &["about", "who are you", "company", "reinmax", "background", "history", "agency"],
            responder: about,
            related_topics: &["services", "team", "philosophy"],
            category: Info,
        },
        TopicEntry {
            key: "greeting",
            keywords: &[
                "hello", "hi", "hey", "greetings", "good morning", "good afternoon", "good evening", "how are you",
                "what can you do",
            ],
            responder: greeting,
            related_topics: &["services", "pricing", "booking"],
            category: Greeting,
        },
        TopicEntry {
            key: "thanks",
            keywords: &["thank", "thanks", "appreciate", "grateful", "ok", "got it"],
            responder: thanks,
            related_topics: &[],
            category: Pleasantry,
        },
        TopicEntry {
            key: "services",
            keywords: &[
                "service", "services", "offer", "offerings", "do", "provide", "help with", "specialize",
                "brand identity", "branding", "logo", "logos", "web ui", "web design", "website", "illustration",
                "drawing", "motion graphics", "animation", "video", "graphic design",
            ],
            responder: services,
            related_topics: &["workflow", "pricing", "portfolio"],
            category: Services,
        },
        TopicEntry {
            key: "portfolio",
            keywords: &[
                "portfolio", "work", "projects", "examples", "case studies", "seen", "show me", "gallery",
            ],
            responder: portfolio,
            related_topics: &["workflow", "services"],
            category: Info,
        },
        TopicEntry {
            key: "timeline",
            keywords: &[
                "timeline", "how long", "duration", "fast", "project length", "turnaround", "schedule",
            ],
            responder: timeline,
            related_topics: &["workflow", "booking", "pricing"],
            category: Info,
        },
        TopicEntry {
            key: "technology",
            keywords: &[
                "tech", "technology", "tools", "software", "stack", "figma", "illustrator", "photoshop",
                "premiere pro",
            ],
            responder: technology,
            related_topics: &["academy", "services"],
            category: Info,
        },
        TopicEntry {
            key: "resources",
            keywords: &["resources", "free", "templates", "icons", "timescript", "image editor"],
            responder: resources,
            related_topics: &["academy", "services"],
            category: Info,
        },
        TopicEntry {
            key: "social",
            keywords: &["social media", "instagram", "behance", "dribbble", "youtube", "twitter", "x"],
            responder: social,
            related_topics: &["contact", "portfolio"],
            category: Info,
        },
        TopicEntry {
            key: "legal",
            keywords: &["legal", "privacy", "terms", "cookies", "sitemap", "policy"],
            responder: legal,
            related_topics: &["about"],
            category: Info,
        },
        TopicEntry {
            key: "clarification",
            keywords: &["help", "info", "details", "more", "tell me about", "what else"],
            responder: clarification,
            related_topics: &["services", "pricing", "workflow"],
            category: Utility,
        },
    ]
}
