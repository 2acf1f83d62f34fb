//! Per-category notification templates.
//!
//! Every category shares the same visual shell and footer; what varies is
//! the subject line, heading, intro sentence, and an optional colored
//! "next steps" callout. Unrecognized categories fall back to a generic
//! template with no callout.

use serde_json::{Map, Value};

use super::format::format_form_data;

const CRISIS_SUBJECT_VALUE: &str = "Need Help/Crisis";
const CRISIS_CALLOUT: Callout = Callout {
    background: "#dc2626",
    text: "<strong>⚠️ URGENT:</strong> This message indicates a crisis situation. Please respond immediately.",
};

/// The fixed set of website form categories. Anything else renders the
/// generic template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCategory {
    Church,
    Contact,
    Volunteer,
    Story,
    Newsletter,
    Donation,
    Generic,
}

impl From<&str> for FormCategory {
    fn from(form_type: &str) -> Self {
        match form_type {
            "church" => FormCategory::Church,
            "contact" => FormCategory::Contact,
            "volunteer" => FormCategory::Volunteer,
            "story" => FormCategory::Story,
            "newsletter" => FormCategory::Newsletter,
            "donation" => FormCategory::Donation,
            _ => FormCategory::Generic,
        }
    }
}

struct Callout {
    background: &'static str,
    text: &'static str,
}

struct Template {
    subject: &'static str,
    heading: &'static str,
    intro: &'static str,
    callout: Option<Callout>,
}

impl FormCategory {
    fn template(self) -> Template {
        match self {
            FormCategory::Church => Template {
                subject: "🏛️ New Church Registration - The Open Church Project",
                heading: "🏛️ New Church Wants to Join the Movement!",
                intro: "A new church has registered to join The Open Church Project 24/7 network:",
                callout: Some(Callout {
                    background: "#eab308",
                    text: "<strong>Next Steps:</strong> Contact this church to discuss implementation timeline and support needs.",
                }),
            },
            FormCategory::Contact => Template {
                subject: "📬 New Contact Message - The Open Church Project",
                heading: "📬 New Contact Message",
                intro: "Someone has reached out through the website contact form:",
                callout: None,
            },
            FormCategory::Volunteer => Template {
                subject: "🙋‍♀️ New Volunteer Application - The Open Church Project",
                heading: "🙋‍♀️ New Volunteer Application",
                intro: "Someone wants to volunteer with The Open Church Project:",
                callout: Some(Callout {
                    background: "#059669",
                    text: "<strong>Next Steps:</strong> Follow up with volunteer opportunities in their area.",
                }),
            },
            FormCategory::Story => Template {
                subject: "📖 New Story Submission - The Open Church Project",
                heading: "📖 New Story Submission",
                intro: "Someone has shared their story about The Open Church Project:",
                callout: Some(Callout {
                    background: "#7c3aed",
                    text: "<strong>Review Required:</strong> Please review this story for potential publication on the website.",
                }),
            },
            FormCategory::Newsletter => Template {
                subject: "📧 New Newsletter Subscription - The Open Church Project",
                heading: "📧 New Newsletter Subscriber",
                intro: "Someone has subscribed to The Open Church Project newsletter:",
                callout: Some(Callout {
                    background: "#0ea5e9",
                    text: "<strong>Growing Network:</strong> Add this email to your newsletter distribution list.",
                }),
            },
            FormCategory::Donation => Template {
                subject: "💝 New Donation - The Open Church Project",
                heading: "💝 New Donation Received",
                intro: "A donation has been submitted through The Open Church Project website:",
                callout: Some(Callout {
                    background: "#eab308",
                    text: "<strong>Action Required:</strong> Process this donation and send receipt if email was provided.",
                }),
            },
            FormCategory::Generic => Template {
                subject: "📋 New Website Submission - The Open Church Project",
                heading: "📋 New Website Submission",
                intro: "A new form submission has been received:",
                callout: None,
            },
        }
    }

    #[must_use]
    pub fn subject(self) -> &'static str {
        self.template().subject
    }
}

fn callout_block(callout: &Callout) -> String {
    format!(
        "<div style=\"background: {}; color: white; padding: 15px; border-radius: 5px; margin-top: 20px;\">{}</div>",
        callout.background, callout.text,
    )
}

/// Renders the full HTML body for a submission: shared shell, category
/// heading and intro, one table row per form field, the category callout
/// (plus the urgent-crisis callout for contact messages whose subject is
/// "Need Help/Crisis"), and the shared footer with the submission timestamp
/// verbatim.
#[must_use]
pub fn render(
    category: FormCategory,
    form_data: &Map<String, Value>,
    submission_time: &str,
) -> String {
    let template = category.template();

    let mut callouts = String::new();
    if let Some(callout) = &template.callout {
        callouts.push_str(&callout_block(callout));
    }
    if category == FormCategory::Contact
        && form_data.get("subject").and_then(Value::as_str) == Some(CRISIS_SUBJECT_VALUE)
    {
        callouts.push_str(&callout_block(&CRISIS_CALLOUT));
    }

    format!(
        concat!(
            "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; background: #f9f9f9; padding: 20px;\">",
            "<div style=\"background: white; padding: 30px; border-radius: 10px; box-shadow: 0 2px 10px rgba(0,0,0,0.1);\">",
            "<h1 style=\"color: #1e3a8a; margin-bottom: 20px;\">{heading}</h1>",
            "<p style=\"font-size: 16px; color: #666; margin-bottom: 20px;\">{intro}</p>",
            "<table style=\"width: 100%; border-collapse: collapse; margin: 20px 0;\">{rows}</table>",
            "{callouts}",
            "</div>",
            "<div style=\"text-align: center; margin-top: 20px; color: #666; font-size: 12px;\">",
            "<p>This notification was sent from The Open Church Project website</p>",
            "<p>Submission Time: {submission_time}</p>",
            "</div>",
            "</div>",
        ),
        heading = template.heading,
        intro = template.intro,
        rows = format_form_data(form_data),
        callouts = callouts,
        submission_time = submission_time,
    )
}
