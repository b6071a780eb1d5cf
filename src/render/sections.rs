//! One renderer per section. Each reads the page context and writes into a frame;
//! none of them looks at another section's output.

use std::fmt::Write;

use super::markup::{escape, Frame, NoticeKind};
use super::project_card::render_project_card;
use super::PageContext;
use crate::content::catalog::{HERO_IMAGE, RESUME_FILE_NAME, RESUME_PATH};
use crate::nav::SectionId;

pub fn render_home(ctx: &PageContext, frame: &mut Frame) {
    let p = &ctx.content.profile;
    frame.heading(SectionId::Home.header());
    frame.text("p", "lead", &p.headline);
    frame.chips(&p.focus);
    if let Some(first) = p.bio.first() {
        frame.text("p", "", first);
    }
    frame.image(&ctx.assets.url_for(&HERO_IMAGE), &p.name, "hero-image");
}

pub fn render_about(ctx: &PageContext, frame: &mut Frame) {
    let p = &ctx.content.profile;
    frame.heading(SectionId::About.header());
    for para in &p.bio {
        frame.text("p", "", para);
    }
    if !p.focus.is_empty() {
        frame.text(
            "p",
            "",
            &format!("My current focus is on {}.", p.focus.join(", ")),
        );
    }
    if !p.highlights.is_empty() {
        frame.text("h3", "", "Highlights");
        frame.list("highlights", &p.highlights);
    }

    if ctx.assets.exists(RESUME_PATH) {
        frame.raw(&format!(
            "<a class=\"link-button\" href=\"/resume\" download=\"{}\">📄 Download Resume</a>",
            escape(RESUME_FILE_NAME)
        ));
    } else {
        frame.notice(
            NoticeKind::Info,
            &format!("Upload `{}` to enable resume download", RESUME_PATH),
        );
    }
}

pub fn render_projects(ctx: &PageContext, frame: &mut Frame) {
    frame.heading(SectionId::Projects.header());
    for (i, project) in ctx.content.projects.iter().enumerate() {
        render_project_card(project, i == 0, ctx.assets, frame);
    }
}

pub fn render_skills(ctx: &PageContext, frame: &mut Frame) {
    frame.heading(SectionId::Skills.header());
    frame.raw("<div class=\"grid\">");
    for skill in &ctx.content.skills {
        frame.text("div", "card", skill);
    }
    frame.raw("</div>");

    let tools = distinct_tools(ctx);
    if !tools.is_empty() {
        frame.text("h3", "", "Used in projects");
        frame.chips(&tools);
    }
}

/// Every tool mentioned by a project, first mention first.
fn distinct_tools<'a>(ctx: &'a PageContext) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for tool in ctx.content.projects.iter().flat_map(|p| p.tools.iter()) {
        if !seen.contains(&tool.as_str()) {
            seen.push(tool);
        }
    }
    seen
}

pub fn render_courses(ctx: &PageContext, frame: &mut Frame) {
    frame.heading(SectionId::Courses.header());
    if ctx.content.courses.is_empty() {
        return;
    }
    let mut html = String::from(
        "<table class=\"records\"><thead><tr><th>Course</th><th>Provider</th>\
         <th>Status</th><th>Year</th></tr></thead><tbody>",
    );
    for c in &ctx.content.courses {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&c.name),
            escape(&c.provider),
            escape(&c.status),
            escape(&c.year)
        );
    }
    html.push_str("</tbody></table>");
    frame.raw(&html);
}

pub fn render_education(ctx: &PageContext, frame: &mut Frame) {
    frame.heading(SectionId::Education.header());
    frame.raw("<div class=\"grid\">");
    for e in &ctx.content.education {
        frame.raw("<div class=\"card\">");
        if !e.period.is_empty() {
            frame.text("div", "card-label", &e.period);
        }
        frame.text("h3", "", &e.degree);
        frame.text("p", "", &e.institution);
        if !e.details.is_empty() {
            frame.text("p", "lead", &e.details);
        }
        frame.raw("</div>");
    }
    frame.raw("</div>");
}

pub fn render_experience(ctx: &PageContext, frame: &mut Frame) {
    frame.heading(SectionId::Experience.header());
    frame.raw("<div class=\"grid\">");
    for x in &ctx.content.experience {
        frame.raw("<div class=\"card\">");
        if !x.period.is_empty() {
            frame.text("div", "card-label", &x.period);
        }
        frame.text("h3", "", &x.role);
        frame.text("p", "", &x.organization);
        if !x.details.is_empty() {
            frame.text("p", "lead", &x.details);
        }
        frame.raw("</div>");
    }
    frame.raw("</div>");
}

pub fn render_contact(ctx: &PageContext, frame: &mut Frame) {
    let p = &ctx.content.profile;
    frame.heading(SectionId::Contact.header());
    frame.raw("<div class=\"contact-links\">");
    frame.link_button(&p.linkedin, "LinkedIn");
    frame.link_button(&p.github_url(), "GitHub");
    frame.raw(&format!(
        "<a class=\"link-button\" href=\"mailto:{}\">📧 Email me</a>",
        escape(&p.email)
    ));
    frame.raw("</div>");

    if let Some(outcome) = &ctx.contact.outcome {
        let kind = if outcome.is_accepted() { NoticeKind::Success } else { NoticeKind::Error };
        frame.notice(kind, &outcome.notice());
    }

    let form = &ctx.contact.form;
    let mut html = String::from("<form class=\"contact-form\" method=\"post\" action=\"/contact\">");
    for (field, label, value) in [
        ("name", "Name *", &form.name),
        ("email", "Email *", &form.email),
        ("subject", "Subject", &form.subject),
    ] {
        let _ = write!(
            html,
            "<label for=\"{field}\">{label}</label>\
             <input id=\"{field}\" name=\"{field}\" value=\"{}\">",
            escape(value)
        );
    }
    let _ = write!(
        html,
        "<label for=\"message\">Message *</label>\
         <textarea id=\"message\" name=\"message\" rows=\"5\">{}</textarea>\
         <button type=\"submit\">Send</button></form>",
        escape(&form.message)
    );
    frame.raw(&html);

    frame.raw("<div id=\"demo\" class=\"demo\">");
    frame.text("h3", "", "🧪 Interactive ML Demo");
    ctx.demo.render(frame);
    frame.raw("</div>");
}
