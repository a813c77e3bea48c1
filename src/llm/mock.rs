//! Canned-note generator for running without provider credentials.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::llm::client::{GenerationRequest, TextGenerator, UpstreamFailure};
use crate::note::Category;

/// How the mock generator picks one of the canned notes for a category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MockSelection {
    /// Stable hash of name and subject, so the same input gets the same note
    #[default]
    Hashed,
    /// Always the given template index (modulo the template count)
    Fixed(usize),
}

const THANK_YOU_NOTES: &[&str] = &[
    "Dear {name},\n\nThank you so much for choosing {subject}! We hope it brings you as much joy as we had preparing it for you.\n\nIf anything comes up, we are always happy to help.\n\nWith gratitude,\nThe Team",
    "Hi {name},\n\nWe wanted to say a personal thank you for your purchase of {subject}. Customers like you are the reason we love what we do.\n\nEnjoy, and thank you again for your support!\n\nWarm regards,\nThe Team",
    "Hello {name},\n\nYour order of {subject} made our day. Thank you for trusting us with it, and we hope it exceeds every expectation.\n\nWith heartfelt thanks,\nThe Team",
];

const APOLOGY_NOTES: &[&str] = &[
    "Dear {name},\n\nWe are truly sorry for the trouble you had with {subject}. That is not the experience we want for you, and we take full responsibility.\n\nWe are already working to make it right.\n\nWith our sincere apologies,\nThe Team",
    "Hi {name},\n\nPlease accept our apologies for the problems with {subject}. We understand how frustrating this has been, and we own the mistake.\n\nThank you for your patience while we fix it.\n\nSincerely,\nThe Team",
    "Hello {name},\n\nWe let you down with {subject}, and we apologize. Your satisfaction matters to us, and we are taking steps so this does not happen again.\n\nWith sincere apologies,\nThe Team",
];

const WELCOME_NOTES: &[&str] = &[
    "Welcome, {name}!\n\nWe are thrilled you joined {subject}. You are now part of something special, and we cannot wait for you to get started.\n\nWe are just a message away if you need anything.\n\nWelcome aboard!\nThe Team",
    "Hi {name},\n\nA warm welcome to {subject}! You made a fantastic choice, and we are here to help you get the most out of it.\n\nSee you soon,\nThe Team",
    "Hello {name},\n\nWelcome to the family! We are so excited to have you in {subject} and look forward to everything ahead.\n\nCheers,\nThe Team",
];

const FOLLOW_UP_NOTES: &[&str] = &[
    "Hi {name},\n\nWe wanted to check in about {subject} and see how everything is going. We hope it is meeting your expectations.\n\nAny feedback is welcome, just reply to this note.\n\nBest,\nThe Team",
    "Dear {name},\n\nWe hope you are doing well! Is there anything we can help with regarding {subject}? We are always glad to hear from you.\n\nBest regards,\nThe Team",
    "Hello {name},\n\nJust touching base about {subject} to make sure everything is going smoothly. Let us know if there is anything we can improve.\n\nWarm regards,\nThe Team",
];

const GENERAL_NOTES: &[&str] = &[
    "Dear {name},\n\nThank you for being part of our community and for your interest in {subject}. We truly appreciate your business.\n\nKind regards,\nThe Team",
];

/// Writes notes from fixed templates instead of calling a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGenerator {
    selection: MockSelection,
}

impl MockGenerator {
    pub fn new(selection: MockSelection) -> Self {
        Self { selection }
    }

    /// Render the canned note this generator picks for the given input.
    pub fn render(&self, category: Category, name: &str, subject: &str) -> String {
        let templates = templates_for(category);
        let index = match self.selection {
            MockSelection::Hashed => stable_hash(name, subject) as usize,
            MockSelection::Fixed(index) => index,
        } % templates.len();

        fill(templates[index], name, subject)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn is_canned(&self) -> bool {
        true
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, UpstreamFailure> {
        Ok(self.render(request.category, request.name, request.subject))
    }
}

fn templates_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::ThankYou => THANK_YOU_NOTES,
        Category::Apology => APOLOGY_NOTES,
        Category::Welcome => WELCOME_NOTES,
        Category::FollowUp => FOLLOW_UP_NOTES,
        Category::General => GENERAL_NOTES,
    }
}

/// Substitute `{name}` and `{subject}` in one pass, so placeholder-like
/// text inside the inputs is copied as-is.
fn fill(template: &str, name: &str, subject: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len() + subject.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{name}") {
            out.push_str(name);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{subject}") {
            out.push_str(subject);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// FNV-1a over name and subject. Stable across builds and platforms.
fn stable_hash(name: &str, subject: &str) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    name.bytes()
        .chain(std::iter::once(0xff))
        .chain(subject.bytes())
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
