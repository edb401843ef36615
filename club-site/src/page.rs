use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use club_calendar::{Announcement, Schedule};
use minijinja::{context, Environment};
use serde::Serialize;
use tracing::error;

const TEMPLATE: &str = "index.html";

#[derive(Serialize)]
struct Faq {
    question: &'static str,
    badge: &'static str,
    answer: &'static str,
}

const FAQS: [Faq; 3] = [
    Faq {
        question: "what is this?",
        badge: "Overcommitters Club",
        answer: "is a monthly \"event\" for folks like us, who sign up for too many things, \
                 and need to reclaim that time every once in awhile. We like to think \
                 we're the only recurring event that's happy when you're a no-show.",
    },
    Faq {
        question: "do you actually meet up?",
        badge: "Nope!",
        answer: "Call a meeting of Overcommitters Club wherever you find yourself! \
                 Take time to relax.",
    },
    Faq {
        question: "What sorts of things can I do with this time?",
        badge: "Up to you!",
        answer: "Use it to do whatever you like. Chill out. Answer those boring emails. \
                 Better yet, unsubscribe from a bunch of mailing lists. It's your time. \
                 This is just one way to get that time back.",
    },
];

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        error!("Failed to render page: {self}");
        (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
    }
}

/// The landing page, compiled once and rendered per request.
pub struct Page {
    env: Environment<'static>,
}

impl Page {
    pub fn new() -> Result<Self, PageError> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE, include_str!("../templates/index.html"))?;
        Ok(Self { env })
    }

    pub fn render(
        &self,
        schedule: &Schedule,
        announcement: &Announcement,
    ) -> Result<String, PageError> {
        let html = self.env.get_template(TEMPLATE)?.render(context! {
            title => schedule.title,
            description => schedule.description,
            event => announcement,
            faqs => FAQS,
        })?;

        Ok(html)
    }
}
