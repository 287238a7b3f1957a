//! Keyword-driven support assistant.
//!
//! The assistant has no language model behind it. Incoming messages are
//! classified into a small set of intents by keyword lookup and each
//! intent maps to a canned reply, optionally assembled from the seed
//! issue data.

use std::fmt;

use crate::query::search::contains_case_insensitive;
use crate::seed::ISSUES;

/// Portal pages the assistant can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Dashboard,
    Report,
    Issues,
    AiInsights,
    Login,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Dashboard => "/dashboard",
            Page::Report => "/report",
            Page::Issues => "/issues",
            Page::AiInsights => "/ai-insights",
            Page::Login => "/login",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Report => "Report an Issue",
            Page::Issues => "Community Issues",
            Page::AiInsights => "AI Insights",
            Page::Login => "Sign In",
        };
        write!(f, "{s}")
    }
}

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    RaiseQuery,
    TrackQuery,
    FillReportForm,
    PageLink(Page),
    AiInsights,
    LatestIssues,
    Unknown,
}

fn any(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_case_insensitive(message, k))
}

/// Classify a message into an intent. First matching rule wins; page
/// links are checked before the broader report/track rules so "link to
/// the report page" routes to the link intent.
pub fn classify(message: &str) -> Intent {
    let message = message.trim();
    if message.is_empty() {
        return Intent::Unknown;
    }
    if any(message, &["link", "page", "navigate", "take me to", "go to"]) {
        let page = if any(message, &["report"]) {
            Page::Report
        } else if any(message, &["dashboard"]) {
            Page::Dashboard
        } else if any(message, &["insight", "ai"]) {
            Page::AiInsights
        } else if any(message, &["issue", "community"]) {
            Page::Issues
        } else if any(message, &["login", "sign in"]) {
            Page::Login
        } else {
            Page::Home
        };
        return Intent::PageLink(page);
    }
    if any(message, &["hello", "hi ", "hey", "namaste"]) || message.eq_ignore_ascii_case("hi") {
        return Intent::Greeting;
    }
    if any(message, &["track", "status of", "existing query", "existing complaint"]) {
        return Intent::TrackQuery;
    }
    if any(message, &["fill", "form"]) {
        return Intent::FillReportForm;
    }
    if any(message, &["raise", "new query", "report a", "complain"]) {
        return Intent::RaiseQuery;
    }
    if any(message, &["insight", "analyze", "analysis", "ai"]) {
        return Intent::AiInsights;
    }
    if any(message, &["latest", "recent", "show me the issues", "reported issues"]) {
        return Intent::LatestIssues;
    }
    Intent::Unknown
}

const GREETING: &str = "Hello! I'm your civic assistant. How can I help you today? You can ask me to:\n\n\
- Raise a new query\n\
- Track an existing query\n\
- Fill a report form\n\
- Get a link to a specific page\n\
- Provide AI insights on civic issues\n\
- Show the latest reported issues";

fn latest_issues_reply() -> String {
    let mut reply = String::from("Here are the latest reported issues:\n");
    for issue in ISSUES.iter().take(3) {
        reply.push_str(&format!(
            "\n#{} {} ({}, {})",
            issue.id, issue.title, issue.category, issue.status
        ));
    }
    reply.push_str("\n\nYou can view all issues on the Community Issues page.");
    reply
}

/// Produce the assistant's reply to a message.
pub fn respond(message: &str) -> String {
    match classify(message) {
        Intent::Greeting => GREETING.to_string(),
        Intent::RaiseQuery => {
            "I can help you raise a new query. Please tell me the location and a short \
             description of the problem, or open the report form to file it directly."
                .to_string()
        }
        Intent::TrackQuery => {
            "To track an existing query, give me its issue number (for example '#1') or \
             check the My Reports section of your dashboard for live status updates."
                .to_string()
        }
        Intent::FillReportForm => {
            "I'll walk you through the report form. You'll need a title, a description, \
             the location, and a category. A photo is optional but helps verification."
                .to_string()
        }
        Intent::PageLink(page) => {
            format!("Here's the link to the {page} page: {}", page.path())
        }
        Intent::AiInsights => {
            "Our AI can classify an issue, assess its severity, and predict resolution \
             time. Visit the AI Insights page or paste a description here to analyze it."
                .to_string()
        }
        Intent::LatestIssues => latest_issues_reply(),
        Intent::Unknown => {
            "I'm not sure I understood that. You can ask me to raise a query, track a \
             query, fill a report form, link you to a page, provide AI insights, or \
             show the latest issues."
                .to_string()
        }
    }
}
