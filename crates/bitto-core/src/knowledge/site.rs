//! Static company knowledge sheet. Immutable for the life of the process.

#[derive(Debug, Clone, Copy)]
pub struct Company {
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub registration: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub description: &'static str,
}

/// A named value with a description (philosophy pillars, services).
#[derive(Debug, Clone, Copy)]
pub struct Pillar {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct WorkflowStep {
    pub step: u8,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BrandingPlan {
    pub name: &'static str,
    pub tier: &'static str,
    pub price: &'static str,
    pub target: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub name: &'static str,
    pub level: Option<&'static str>,
    /// `None` when the price is not published.
    pub price: Option<&'static str>,
    pub description: &'static str,
    pub topics: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct NamedLink {
    pub name: &'static str,
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct SiteKnowledge {
    pub company: Company,
    pub team: &'static [TeamMember],
    pub philosophy: &'static [Pillar],
    pub services: &'static [Pillar],
    pub workflow: &'static [WorkflowStep],
    pub branding_plans: &'static [BrandingPlan],
    pub academy_courses: &'static [Course],
    /// (platform, url) in display order.
    pub social_links: &'static [(&'static str, &'static str)],
    pub resources: &'static [NamedLink],
    pub legal: &'static [NamedLink],
}

pub static SITE: SiteKnowledge = SiteKnowledge {
    company: Company {
        name: "Reinmax Creative",
        description: "A design agency that specializes in creating unforgettable brands and digital experiences.",
        location: "Tanzania",
        registration: "BRELA No: 56**1",
        email: "mail@reinmaxcreative.com",
        phone: "+255 678 700 731",
    },
    team: &[
        TeamMember {
            name: "Reinhard Baraka",
            role: "Creative Designer & Founder",
            description: "The visionary force setting the creative standards for our agency and the brands we partner with.",
        },
        TeamMember {
            name: "Henry Binamungu",
            role: "Brand Strategist",
            description: "The strategic force behind our brand narratives, crafting the core stories for brands.",
        },
        TeamMember {
            name: "Klerry Tumsiime",
            role: "Developer",
            description: "The engineering force behind our digital work, web engineering and interactive experiences.",
        },
        TeamMember {
            name: "Maggie Shayo",
            role: "Creative Designer",
            description: "The creative force behind our visual output, designing stunning assets.",
        },
    ],
    philosophy: &[
        Pillar {
            name: "Innovation",
            description: "We constantly push boundaries, exploring new tech and creative solutions.",
        },
        Pillar {
            name: "Excellence",
            description: "Committed to the highest standards, ensuring every detail is perfected.",
        },
        Pillar {
            name: "Collaboration",
            description: "The best ideas are born from partnership. We work closely with our clients.",
        },
        Pillar {
            name: "Integrity",
            description: "Operating with transparency and honesty, building trust with our clients.",
        },
    ],
    services: &[
        Pillar {
            name: "Brand Identity",
            description: "Comprehensive branding solutions that define and elevate your presence.",
        },
        Pillar {
            name: "Web UI Design",
            description: "Intuitive and beautiful user interfaces that provide a seamless user experience.",
        },
        Pillar {
            name: "Illustration",
            description: "Custom illustrations that add a unique and personal touch to your brand.",
        },
        Pillar {
            name: "Motion Graphics",
            description: "Engaging animations and motion graphics that bring your brand's story to life.",
        },
        Pillar {
            name: "Logo Design",
            description: "Crafting distinctive logos that serve as the visual heartbeat of a business.",
        },
        Pillar {
            name: "Graphic Design",
            description: "Intentional visual elements to engage audiences and convey information clearly.",
        },
    ],
    workflow: &[
        WorkflowStep {
            step: 1,
            name: "The Creative Brief",
            description: "We collect detailed information about your brand, goals, target audience, and vision to establish a clear strategic foundation for the project.",
        },
        WorkflowStep {
            step: 2,
            name: "Research & Strategy",
            description: "We conduct comprehensive research on market trends, competitors, and audience preferences. Insights from this research inform a strategic approach tailored to your brand.",
        },
        WorkflowStep {
            step: 3,
            name: "Concept Development",
            description: "We explore a range of unique ideas and creative directions, presenting you with distinct concepts that tell your brand's story.",
        },
        WorkflowStep {
            step: 4,
            name: "Sketching & Designing",
            description: "The chosen concept is transformed into polished, high-quality designs, focusing on aesthetics, usability, and functionality to ensure the final product represents your brand perfectly.",
        },
        WorkflowStep {
            step: 5,
            name: "Client Feedback",
            description: "We present the designs for your feedback and collaborate closely to refine and adjust every detail. This iterative process ensures the final design aligns with your vision.",
        },
        WorkflowStep {
            step: 6,
            name: "Asset Delivery",
            description: "Deliver all finalized assets in appropriate formats, production-ready and a detailed brand guidelines, empowering your team to maintain brand consistency.",
        },
    ],
    branding_plans: &[
        BrandingPlan {
            name: "Twiga Plan",
            tier: "Essential",
            price: "150,000 TZS",
            target: "Individuals, startups, or small businesses getting off the ground",
            features: &[
                "Two Logo Concept",
                "Up to 2 Revision Rounds",
                "Basic Logo Mockups",
                "PNG & Source File",
                "Editable Source File",
                "Essential Brand Guidelines",
            ],
        },
        BrandingPlan {
            name: "Simba Plan",
            tier: "Professional",
            price: "200,000 TZS",
            target: "Growing businesses that needs a professional brand identity",
            features: &[
                "Multiple Logo Concepts",
                "Up to 3 Revision Rounds",
                "Professional Logo Mockups",
                "PNG, JPG, SVG & Source File",
                "Social Media Mockups",
                "Professional Brand Guidelines",
            ],
        },
        BrandingPlan {
            name: "Tembo Plan",
            tier: "Enterprise",
            price: "Custom Quote",
            target: "Well-established companies that require full-scale strategy",
            features: &[
                "Full Logo Variations",
                "Unlimited Revisions",
                "Iconography & Illustrations",
                "Premium Marketing Materials",
                "Brand Strategy Consultation",
                "Comprehensive Brand Guidelines",
            ],
        },
    ],
    academy_courses: &[
        Course {
            name: "Adobe Illustrator",
            level: Some("Beginner - Professional"),
            price: Some("60,000 TZS"),
            description: "Master the industry-standard tool for vector graphics, from basic shapes to complex illustrations.",
            topics: &[
                "Mastery of Vector Graphics",
                "Professional Logo & Icon Design",
                "Advanced Typography & Layout",
                "Creative Color Theory & Gradients",
                "Exporting for Web & Print",
            ],
        },
        Course {
            name: "Adobe Photoshop",
            level: Some("Beginner - Professional"),
            price: Some("50,000 TZS"),
            description: "Unlock the power of photo editing, digital compositing, and graphic design.",
            topics: &[
                "Advanced Photo Retouching",
                "Layer & Masking Techniques",
                "Graphic Design Fundamentals",
                "Social Media Design",
                "Intro to Digital Painting",
            ],
        },
        Course {
            name: "Figma",
            level: Some("Beginner - Professional"),
            price: Some("55,000 TZS"),
            description: "Design and prototype modern interfaces from the ground up using collaborative tools.",
            topics: &[
                "UI/UX Design Fundamentals",
                "Interactive Prototyping",
                "Design Systems",
                "Collaboration Tools",
                "Component Libraries",
            ],
        },
        Course {
            name: "Adobe Premiere Pro",
            level: None,
            price: None,
            description: "Learn professional video editing techniques.",
            topics: &[],
        },
    ],
    social_links: &[
        ("instagram", "https://instagram.com/reinmax_creative"),
        ("behance", "https://behance.net/reinmaxcreative"),
        ("dribbble", "https://dribbble.com/reinmaxcreative"),
        ("youtube", "https://youtube.com/@reinmaxcreative"),
        ("twitter", "https://x.com/reinmaxstudio/"),
    ],
    resources: &[
        NamedLink { name: "Free Templates", url: None },
        NamedLink { name: "Icon Library", url: None },
        NamedLink { name: "TimeScript", url: Some("https://timescript.vercel.app/") },
        NamedLink { name: "Image Editor", url: Some("https://megascale.vercel.app/") },
    ],
    legal: &[
        NamedLink { name: "Privacy Policy", url: None },
        NamedLink { name: "Terms of Service", url: None },
        NamedLink { name: "Cookie Policy", url: None },
        NamedLink { name: "Sitemap", url: None },
    ],
};
