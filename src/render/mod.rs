//! Full-page rendering.
//!
//! Every request recomputes the whole page: sidebar, navigation bar, the one
//! section picked by the dispatch table, footer. Renderers are pure over the
//! page context.

pub mod markup;
pub mod project_card;
pub mod sections;
pub mod style;

use std::fmt::Write;

use serde_json::Value;

use crate::assets::AssetResolver;
use crate::contact::{ContactForm, Submission};
use crate::content::catalog::PROFILE_IMAGE;
use crate::content::SiteContent;
use crate::demo::DemoSlot;
use crate::logging::{agg_increment, v_str, ProfileScope};
use crate::nav::SectionId;
use markup::{escape, Frame};

/// What the contact section shows beside the static content.
#[derive(Debug, Clone, Default)]
pub struct ContactView {
    pub form: ContactForm,
    pub outcome: Option<Submission>,
}

pub struct PageContext<'a> {
    pub content: &'a SiteContent,
    pub assets: &'a dyn AssetResolver,
    pub demo: &'a DemoSlot,
    pub contact: ContactView,
}

pub type SectionRenderer = fn(&PageContext, &mut Frame);

/// Dispatch table: one renderer per section.
pub fn renderer_for(section: SectionId) -> SectionRenderer {
    match section {
        SectionId::Home => sections::render_home,
        SectionId::About => sections::render_about,
        SectionId::Projects => sections::render_projects,
        SectionId::Skills => sections::render_skills,
        SectionId::Courses => sections::render_courses,
        SectionId::Education => sections::render_education,
        SectionId::Experience => sections::render_experience,
        SectionId::Contact => sections::render_contact,
    }
}

/// Body of exactly one section.
pub fn render_section(section: SectionId, ctx: &PageContext) -> String {
    let _scope = ProfileScope::new("render_section");
    let mut frame = Frame::new();
    frame.raw(&format!("<section id=\"{}\" class=\"section\">", section.slug()));
    renderer_for(section)(ctx, &mut frame);
    frame.raw("</section>");
    frame.into_string()
}

/// The whole page. `None` renders the chrome and navigation bar with no section body.
pub fn render_page(section: Option<SectionId>, ctx: &PageContext) -> String {
    let _scope = ProfileScope::with_context(
        "render_page",
        &[(
            "section",
            section.map(|s| v_str(s.slug())).unwrap_or(Value::Null),
        )],
    );
    agg_increment("page_view");

    let p = &ctx.content.profile;
    let mut html = String::with_capacity(16 * 1024);
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n  \
         <title>{} | Portfolio</title>\n  <style>{}</style>\n</head>\n<body>\n<div class=\"layout\">\n",
        escape(&p.name),
        style::STYLESHEET
    );

    html.push_str(&render_sidebar(ctx));
    html.push_str("<div class=\"content\">\n");
    html.push_str(&render_nav(section));
    html.push_str("<main>\n");
    if let Some(section) = section {
        html.push_str(&render_section(section, ctx));
    }
    html.push_str("\n</main>\n");
    let _ = write!(
        html,
        "<footer>© 2025 {} | Built with Rust</footer>\n</div>\n</div>\n</body>\n</html>\n",
        escape(&p.name)
    );
    html
}

fn render_sidebar(ctx: &PageContext) -> String {
    let p = &ctx.content.profile;
    let mut f = Frame::new();
    f.raw("<aside>");
    f.image(&ctx.assets.url_for(&PROFILE_IMAGE), &p.name, "profile-photo");
    f.text("div", "brand", &p.name);
    f.text("p", "", &p.tagline);
    f.text("p", "", &p.location);
    f.text("p", "", &format!("📧 {}", p.email));
    f.link_button(&p.linkedin, "LinkedIn");
    f.link_button(&p.github_url(), "GitHub");
    f.raw("</aside>\n");
    f.into_string()
}

/// One form-button per section; the active one is highlighted.
pub fn render_nav(active: Option<SectionId>) -> String {
    let mut html = String::from("<nav>");
    for id in SectionId::ALL {
        let class = if Some(id) == active { "nav-button active" } else { "nav-button" };
        let _ = write!(
            html,
            "<form method=\"post\" action=\"/navigate\">\
             <button class=\"{class}\" name=\"section\" value=\"{}\">{}</button></form>",
            id.slug(),
            id.label()
        );
    }
    html.push_str("</nav>\n");
    html
}
