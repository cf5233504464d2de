//! Fixed user-facing strings.

/// Greeting shown on the landing page while the live model is in use.
pub const LIVE_WELCOME_MESSAGE: &str =
    "Welcome! I'm SafetyTrainPro, your chatbot assistant. Let me know how I can assist you today:)";

/// Greeting shown on the landing page in demo mode.
pub const DEMO_WELCOME_MESSAGE: &str = "Hello! I'm the AI Safety Assistant (demo mode). I can guide you on safety protocols, resources, and reporting, but cannot access company systems.";

/// Demo reply when no keyword matches, and the reply after a failed call.
pub const DEMO_GENERAL_RESPONSE: &str = "I'm in demo mode due to an API issue. I can offer general safety guidance. For specific actions like downloads or reporting, use your company's official tools.";

pub const DEMO_RATE_LIMIT_RESPONSE: &str =
    "The API is currently busy. Please try again shortly. (Rate Limit Reached)";

pub const CONTENT_BLOCKED_RESPONSE: &str = "I cannot provide a response to that request. It may be outside my safety scope or potentially unsafe content. Please rephrase.";

pub const UNEXPECTED_ERROR_RESPONSE: &str = "An unexpected error occurred. Please try again.";

pub const EMPTY_MESSAGE_ERROR: &str = "No message provided";
