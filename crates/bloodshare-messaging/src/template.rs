//! Message bodies for emergency broadcasts.
//!
//! The plain-text bodies use WhatsApp markup (`*bold*`). The email body
//! is the same text rendered to escaped HTML.

use bloodshare_entity::blood_type::{BloodType, join_types};
use bloodshare_entity::emergency::EmergencyRequest;

/// Body of the connectivity test message.
pub const TEST_MESSAGE: &str = "Test message from BloodShare app!";

/// Everything needed to deliver one request to one donor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    /// WhatsApp body.
    pub text: String,
    /// Email subject.
    pub subject: String,
    /// Email HTML body.
    pub html: String,
}

impl RenderedMessage {
    /// Render the message for a donor of `donor_type`.
    pub fn for_donor(
        request: &EmergencyRequest,
        donor_type: BloodType,
        compatible: bool,
        compatible_types: &[BloodType],
    ) -> Self {
        let text = if compatible {
            compatible_message(request, donor_type)
        } else {
            general_message(request, compatible_types)
        };
        let html = render_html(&text);
        Self {
            text,
            subject: email_subject(request),
            html,
        }
    }
}

/// Message for a donor who can give directly.
pub fn compatible_message(request: &EmergencyRequest, donor_type: BloodType) -> String {
    format!(
        "🚨 *URGENT BLOOD REQUEST* - You can help! 🚨\n\n\
         {summary}\
         *YOUR BLOOD GROUP ({donor_type}) CAN HELP!*\n\
         {details}\n\
         ⚡ *You can directly donate! Please contact them immediately.*\n\n\
         Your donation can save a life! ❤️\n- BloodShare Team",
        summary = summary(request),
        details = details(request),
    )
}

/// Message asking a non-compatible donor to spread the word.
pub fn general_message(request: &EmergencyRequest, compatible_types: &[BloodType]) -> String {
    format!(
        "🚨 *EMERGENCY BLOOD REQUEST* 🚨\n\n\
         {summary}\
         {details}\n\
         🩸 *Please share this with friends/family who might be able to help! \
         Compatible blood groups: {types}*\n\n\
         Please contact them directly if you can donate or know someone who can.\n\
         Your help can save a life! ❤️\n\n- BloodShare Team",
        summary = summary(request),
        details = details(request),
        types = join_types(compatible_types),
    )
}

/// Email subject line.
pub fn email_subject(request: &EmergencyRequest) -> String {
    format!(
        "Urgent: {} blood needed at {}",
        request.blood_group, request.hospital
    )
}

fn summary(request: &EmergencyRequest) -> String {
    format!(
        "*Patient:* {}\n*Blood Group Required:* {} ({} units)\n",
        request.patient_name, request.blood_group, request.units_needed
    )
}

fn details(request: &EmergencyRequest) -> String {
    let mut out = format!(
        "*Urgency:* {}\n*Hospital:* {}\n*City:* {}\n\n*Contact Person:* {}\n*Contact Phone:* {}\n",
        request.urgency_level.label(),
        request.hospital,
        request.city,
        request.contact_person,
        request.phone,
    );
    if let Some(info) = request
        .additional_info
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        out.push_str(&format!("\n*Additional Info:* {info}\n"));
    }
    out
}

/// Render WhatsApp-style text as HTML paragraphs.
///
/// Text is escaped first. Paired `*` markers on a line become `<strong>`.
pub fn render_html(text: &str) -> String {
    let mut html = String::from("<div style=\"font-family: sans-serif; line-height: 1.5;\">\n");
    for line in text.lines().map(str::trim_end).filter(|l| !l.is_empty()) {
        html.push_str("<p>");
        html.push_str(&emphasize(&escape_html(line)));
        html.push_str("</p>\n");
    }
    html.push_str("</div>");
    html
}

/// Escape the five HTML-significant characters.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn emphasize(line: &str) -> String {
    if line.matches('*').count() % 2 != 0 {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + 16);
    let mut open = false;
    for c in line.chars() {
        if c == '*' {
            out.push_str(if open { "</strong>" } else { "<strong>" });
            open = !open;
        } else {
            out.push(c);
        }
    }
    out
}
