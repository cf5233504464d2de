//! Landing page rendering.
//!
//! The HTML template is compiled into the binary and rendered with Tera. The
//! page carries two static resource lists and the greeting for the current
//! mode; the chat itself runs client-side against `POST /chat`.

use serde::Serialize;
use tera::{Context, Tera};

const INDEX_TEMPLATE_NAME: &str = "index.html";
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// A link card shown next to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub image: &'static str,
}

pub const RECOMMENDED_VIDEOS: &[ResourceLink] = &[
    ResourceLink {
        title: "General Fire Safety Principles",
        description: "Basic steps for fire prevention and response.",
        link: "https://www.youtube.com/watch?v=acQbJTZ91ks",
        image: "https://img.youtube.com/vi/acQbJTZ91ks/hqdefault.jpg",
    },
    ResourceLink {
        title: "Understanding Hazard Symbols",
        description: "How to read common safety signs.",
        link: "https://www.youtube.com/watch?v=KX9qzn8lkl4",
        image: "https://img.youtube.com/vi/KX9qzn8lkl4/hqdefault.jpg",
    },
    ResourceLink {
        title: "Importance of PPE",
        description: "Why Personal Protective Equipment matters.",
        link: "https://www.youtube.com/watch?v=kcM9u4heDVk",
        image: "https://img.youtube.com/vi/kcM9u4heDVk/hqdefault.jpg",
    },
];

pub const SAFETY_RESOURCES: &[ResourceLink] = &[
    ResourceLink {
        title: "Find Your Company Safety Portal",
        description: "Access official documents, forms, and schedules (Internal).",
        link: "https://services.india.gov.in/service/listing?ln=en&cat_id=52",
        image: "https://plus.unsplash.com/premium_photo-1733873203119-97d2b9b5c5a6?w=600&auto=format&fit=crop&q=60",
    },
    ResourceLink {
        title: "Government Safety Agency",
        description: "Public safety guidelines (e.g., HSE, OSHA, CCOHS - check your region).",
        link: "https://www.hpae.org/issues/health-and-safety/health-safety-organizations-government-agencies/",
        image: "https://i.pinimg.com/736x/c0/1d/a7/c01da741f818e21178710904e3a9dfe6.jpg",
    },
    ResourceLink {
        title: "First Aid Providers",
        description: "Find certified training (e.g., Red Cross, St John Ambulance).",
        link: "https://www.indianredcross.org/ircs/program/FirstAid",
        image: "https://www.indianredcross.org/ircs/sites/default/files/inline-images/FirstAid.jpg",
    },
    ResourceLink {
        title: "Learn About Risk Assessment",
        description: "Understanding workplace hazard evaluation.",
        link: "https://www.greenwgroup.com/corporate-courses/understanding-hazards-in-the-workplace/",
        image: "https://i.pinimg.com/736x/f2/bd/b9/f2bdb9ae1fab1ed021c3d4aadfd17bff.jpg",
    },
];

/// Compiled landing page template.
#[derive(Debug)]
pub struct LandingPage {
    tera: Tera,
}

impl LandingPage {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE_NAME, INDEX_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Render the page with the given greeting.
    pub fn render(&self, initial_bot_message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("recommended_videos", RECOMMENDED_VIDEOS);
        context.insert("safety_resources", SAFETY_RESOURCES);
        context.insert("initial_bot_message", initial_bot_message);
        self.tera.render(INDEX_TEMPLATE_NAME, &context)
    }
}
