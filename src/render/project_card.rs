use std::fmt::Write;

use super::markup::{escape, Frame};
use crate::assets::AssetResolver;
use crate::content::ProjectRecord;

/// Tools grid width.
pub const TOOL_COLUMNS: usize = 3;

/// Collapsible card for one project. Empty subsections are left out entirely.
pub fn render_project_card(
    project: &ProjectRecord,
    expanded: bool,
    assets: &dyn AssetResolver,
    frame: &mut Frame,
) {
    frame.raw(if expanded {
        "<details class=\"project-card\" open>"
    } else {
        "<details class=\"project-card\">"
    });
    let mut summary = String::new();
    let _ = write!(
        summary,
        "<summary><h3 class=\"project-title\">{}</h3>",
        escape(&project.title)
    );
    if !project.subtitle.is_empty() {
        let _ = write!(summary, "<span class=\"project-subtitle\">{}</span>", escape(&project.subtitle));
    }
    summary.push_str("</summary>");
    frame.raw(&summary);

    frame.raw("<div class=\"project-body\">");
    if let Some(image) = &project.image {
        frame.image(&assets.url_for(image), &project.title, "project-thumb");
    }
    frame.chips(&project.tags);
    frame.text("p", "project-description", &project.description);

    if !project.deliverables.is_empty() {
        frame.text("h4", "", "Deliverables");
        frame.list("deliverables", &project.deliverables);
    }

    if !project.tools.is_empty() {
        frame.text("h4", "", "Tools");
        frame.raw("<table class=\"tools-grid\"><tbody>");
        for row in project.tools.chunks(TOOL_COLUMNS) {
            frame.raw("<tr>");
            for tool in row {
                frame.text("td", "", tool);
            }
            frame.raw("</tr>");
        }
        frame.raw("</tbody></table>");
    }

    if !project.links.is_empty() {
        frame.raw("<div class=\"project-links\">");
        for (label, url) in project.links.iter() {
            frame.link_button(url, label);
        }
        frame.raw("</div>");
    }
    frame.raw("</div></details>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::FsResolver;
    use crate::content::{AssetRef, Links};

    fn project() -> ProjectRecord {
        ProjectRecord {
            title: "Alpha & Beta".into(),
            subtitle: "Sub".into(),
            description: "Desc".into(),
            deliverables: vec!["one".into(), "two".into()],
            tools: ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect(),
            links: [("Repo", "https://r"), ("Demo", "https://d")].into_iter().collect(),
            tags: vec!["ml".into()],
            image: Some(AssetRef::new("assets/p.png", "https://placeholder/p")),
        }
    }

    fn render(p: &ProjectRecord, expanded: bool) -> String {
        let dir = tempfile::tempdir().unwrap();
        let assets = FsResolver::new(dir.path());
        let mut f = Frame::new();
        render_project_card(p, expanded, &assets, &mut f);
        f.into_string()
    }

    #[test]
    fn expanded_flag_controls_open() {
        assert!(render(&project(), true).starts_with("<details class=\"project-card\" open>"));
        assert!(render(&project(), false).starts_with("<details class=\"project-card\">"));
    }

    #[test]
    fn tools_wrap_into_fixed_columns() {
        let html = render(&project(), true);
        assert!(html.contains("<tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr>"));
    }

    #[test]
    fn links_render_in_insertion_order() {
        let html = render(&project(), true);
        let repo = html.find("https://r").unwrap();
        let demo = html.find("https://d").unwrap();
        assert!(repo < demo);
    }

    #[test]
    fn missing_image_uses_fallback() {
        let html = render(&project(), true);
        assert!(html.contains("src=\"https://placeholder/p\""));
        assert!(html.contains("Alpha &amp; Beta"));
    }

    #[test]
    fn empty_optional_parts_render_nothing() {
        let bare = ProjectRecord {
            deliverables: Vec::new(),
            tools: Vec::new(),
            links: Links::new(),
            tags: Vec::new(),
            image: None,
            ..project()
        };
        let html = render(&bare, false);
        assert!(!html.contains("Deliverables"));
        assert!(!html.contains("deliverables"));
        assert!(!html.contains("tools-grid"));
        assert!(!html.contains("project-links"));
        assert!(!html.contains("chip"));
        assert!(!html.contains("<img"));
        assert!(html.contains("Desc"));
    }
}
