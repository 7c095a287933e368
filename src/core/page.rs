use crate::core::placeholder::{AVATAR_SLOT, HERO_SLOT, IMAGE_SLOT};
use crate::domain::model::{PageAssets, Portfolio};
use std::fmt::Write;

pub const HERO_SIZE: (u32, u32) = (1200, 600);
pub const AVATAR_SIZE: (u32, u32) = (400, 400);
pub const IMAGE_SIZE: (u32, u32) = (800, 600);

/// Rotation index of the about-section image.
pub const ABOUT_INDEX: i64 = 0;
/// Rotation index of the contact-section image.
pub const CONTACT_INDEX: i64 = 7;

/// Rotation index of the image for project `position`.
pub fn project_index(position: usize) -> i64 {
    position as i64 + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub year: i32,
    /// Prefix for local placeholder files, e.g. `static/img`.
    pub static_dir: String,
}

const STYLE: &str = r#"
body { font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background-color: #f8fafc; color: #334155; margin: 0; }
main { max-width: 72rem; margin: 0 auto; padding: 2rem 1rem; }
section { background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); margin-bottom: 2rem; padding: 1.5rem; }
h2 { color: #1e3a8a; }
.hero { min-height: 16rem; background-size: cover; background-position: center; display: flex; align-items: center; gap: 1.5rem; color: #fff; padding: 2rem; }
.hero img { width: 8rem; height: 8rem; border-radius: 50%; object-fit: cover; }
.grid { display: grid; grid-template-columns: repeat(2, 1fr); gap: 1.5rem; }
.skill-bar { background: #e5e7eb; border-radius: 9999px; height: 0.6rem; }
.skill-bar div { background: #2563eb; border-radius: 9999px; height: 0.6rem; }
.tag { display: inline-block; padding: 0.25rem 0.5rem; margin: 0 0.25rem 0.25rem 0; background: #dbeafe; color: #1e40af; font-size: 0.75rem; border-radius: 0.25rem; }
.card img { width: 100%; height: 12rem; object-fit: cover; border-radius: 0.5rem; }
.prose { max-width: 65ch; line-height: 1.6; }
footer { text-align: center; color: #4b5563; font-size: 0.875rem; padding: 1.5rem 0; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn image(out: &mut String, src: &str, alt: &str, local: &str) {
    let _ = writeln!(
        out,
        r#"<img src="{}" alt="{}" onerror="this.onerror=null;this.src='{}'">"#,
        escape_html(src),
        escape_html(alt),
        escape_html(local)
    );
}

fn header(out: &mut String, portfolio: &Portfolio, assets: &PageAssets, meta: &PageMeta) {
    let profile = &portfolio.profile;
    let _ = writeln!(
        out,
        r#"<header class="hero" style="background-image: linear-gradient(to right, rgba(30,58,138,0.8), transparent), url('{}'), url('{}/{}');">"#,
        escape_html(&assets.hero),
        escape_html(&meta.static_dir),
        HERO_SLOT.file_name()
    );
    image(
        out,
        &assets.avatar,
        &profile.name,
        &format!("{}/{}", meta.static_dir, AVATAR_SLOT.file_name()),
    );
    let _ = writeln!(
        out,
        "<div><h1>{}</h1><h2>{}</h2><p>{}</p></div>\n</header>",
        escape_html(&profile.name),
        escape_html(&profile.title),
        escape_html(&profile.tagline)
    );
}

fn about(out: &mut String, portfolio: &Portfolio, assets: &PageAssets, local: &str) {
    let profile = &portfolio.profile;
    out.push_str("<section id=\"about\" class=\"grid\">\n<div class=\"card\">\n");
    image(out, &assets.about, "About", local);
    out.push_str("</div>\n<div>\n<h2>About Me</h2>\n<div class=\"prose\">\n");
    out.push_str(&paragraphs(&profile.about));
    out.push_str("\n</div>\n<h3>Skills</h3>\n<div class=\"grid\">\n");
    for skill in &profile.skills {
        let _ = writeln!(
            out,
            r#"<div class="skill"><span>{}</span> <span>{}%</span><div class="skill-bar"><div style="width: {}%"></div></div></div>"#,
            escape_html(&skill.name),
            skill.level,
            skill.level.min(100)
        );
    }
    out.push_str("</div>\n</div>\n</section>\n");
}

fn projects(out: &mut String, portfolio: &Portfolio, assets: &PageAssets, local: &str) {
    out.push_str("<section id=\"projects\">\n<h2>AI Projects</h2>\n<div class=\"grid\">\n");
    for (project, url) in portfolio.projects.iter().zip(&assets.projects) {
        out.push_str("<article class=\"card\">\n");
        image(out, url, &project.title, local);
        let _ = writeln!(
            out,
            "<h3>{}</h3>\n<p>{}</p>",
            escape_html(&project.title),
            escape_html(&project.description)
        );
        out.push_str("<div>");
        for tech in &project.technologies {
            let _ = write!(out, r#"<span class="tag">{}</span>"#, escape_html(tech));
        }
        out.push_str("</div>\n<h4>Key Achievements:</h4>\n<ul>\n");
        for highlight in &project.highlights {
            let _ = writeln!(out, "<li>{}</li>", escape_html(highlight));
        }
        out.push_str("</ul>\n</article>\n");
    }
    out.push_str("</div>\n</section>\n");
}

fn experience(out: &mut String, portfolio: &Portfolio) {
    out.push_str("<section id=\"experience\">\n<h2>Professional Experience</h2>\n");
    for job in &portfolio.experience {
        let _ = writeln!(
            out,
            "<div class=\"job\"><h3>{}</h3><h4>{}</h4><p>{}</p><div class=\"prose\">{}</div></div>",
            escape_html(&job.title),
            escape_html(&job.company),
            escape_html(&job.period),
            paragraphs(&job.description)
        );
    }
    out.push_str("</section>\n");
}

fn education(out: &mut String, portfolio: &Portfolio) {
    out.push_str("<section id=\"education\">\n<h2>Education &amp; Certifications</h2>\n<div class=\"grid\">\n<div>\n<h3>Education</h3>\n");
    for edu in &portfolio.education {
        let _ = writeln!(
            out,
            "<div><h4>{}</h4><p>{}</p><p>{}</p><p>{}</p></div>",
            escape_html(&edu.degree),
            escape_html(&edu.institution),
            escape_html(&edu.period),
            escape_html(&edu.description)
        );
    }
    out.push_str("</div>\n<div>\n<h3>Certifications</h3>\n");
    for cert in &portfolio.certifications {
        let _ = writeln!(
            out,
            "<div class=\"cert\"><h4>{}</h4><p>{} &middot; {}</p></div>",
            escape_html(&cert.name),
            escape_html(&cert.issuer),
            escape_html(&cert.year)
        );
    }
    out.push_str("</div>\n</div>\n</section>\n");
}

fn contact(out: &mut String, portfolio: &Portfolio, assets: &PageAssets, local: &str) {
    let contact = &portfolio.profile.contact;
    out.push_str("<section id=\"contact\" class=\"grid\">\n<div>\n<h2>Get In Touch</h2>\n");
    out.push_str("<p>Interested in working together? Feel free to reach out through any of these channels:</p>\n<ul>\n");
    let _ = writeln!(
        out,
        r#"<li><a href="mailto:{0}">{0}</a></li>"#,
        escape_html(&contact.email)
    );
    for handle in [&contact.linkedin, &contact.github, &contact.twitter] {
        let _ = writeln!(
            out,
            r#"<li><a href="https://{0}">{0}</a></li>"#,
            escape_html(handle)
        );
    }
    out.push_str("</ul>\n</div>\n<div class=\"card\">\n");
    image(out, &assets.contact, "Contact", local);
    out.push_str("</div>\n</section>\n");
}

/// Renders the whole page. Every project needs a matching entry in `assets.projects`.
pub fn render_page(portfolio: &Portfolio, assets: &PageAssets, meta: &PageMeta) -> String {
    let profile = &portfolio.profile;
    let local_image = format!("{}/{}", meta.static_dir, IMAGE_SLOT.file_name());
    let mut out = String::with_capacity(16 * 1024);

    let _ = writeln!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{} - {}</title>\n<style>{}</style>\n</head>\n<body>\n<main>",
        escape_html(&profile.name),
        escape_html(&profile.title),
        STYLE
    );

    header(&mut out, portfolio, assets, meta);
    about(&mut out, portfolio, assets, &local_image);
    projects(&mut out, portfolio, assets, &local_image);
    experience(&mut out, portfolio);
    education(&mut out, portfolio);
    contact(&mut out, portfolio, assets, &local_image);

    let _ = writeln!(
        out,
        "<footer><p>&copy; {} {} - {} Portfolio</p><p>Built with Rust</p></footer>\n</main>\n</body>\n</html>",
        meta.year,
        escape_html(&profile.name),
        escape_html(&profile.title)
    );
    out
}
