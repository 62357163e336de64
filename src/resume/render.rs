use super::canvas::{Canvas, FontStyle, TextStyle};
use super::{DocumentSink, ResumeData, ResumeError};
use crate::pagesize::A4;
use crate::{colours, Colour, Info, Mm};
use chrono::{DateTime, FixedOffset};
use std::path::PathBuf;
use tracing::{debug, info};

const MARGIN: Mm = Mm(15.0);
const HEADER_HEIGHT: Mm = Mm(40.0);
/// Where the cursor sits once the header band is drawn
const BODY_START: Mm = Mm(50.0);
/// Distance the cursor moves per wrapped line, in millimetres per point of font size
const WRAP_FACTOR: f32 = 0.35;
/// Distance of the footer baseline from the bottom edge of the page
const FOOTER_OFFSET: Mm = Mm(10.0);

const MAX_PROJECTS: usize = 3;
const MAX_FEATURES_PER_PROJECT: usize = 2;

const ACCENT: Colour = Colour::RGB {
    r: 59.0 / 255.0,
    g: 130.0 / 255.0,
    b: 246.0 / 255.0,
};
const MUTED: Colour = Colour::RGB {
    r: 100.0 / 255.0,
    g: 100.0 / 255.0,
    b: 100.0 / 255.0,
};

/// The resume's sections, in the order they are drawn
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    Summary,
    Experience,
    Skills,
    Projects,
    Education,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Summary,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Certifications,
    ];

    /// The heading printed on the page
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Summary => "PROFESSIONAL SUMMARY",
            Section::Experience => "PROFESSIONAL EXPERIENCE",
            Section::Skills => "TECHNICAL SKILLS",
            Section::Projects => "KEY PROJECTS",
            Section::Education => "EDUCATION",
            Section::Certifications => "CERTIFICATIONS",
        }
    }

    /// The bookmark title
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Certifications => "Certifications",
        }
    }

    /// Space that must remain on the page for the heading to be drawn there rather
    /// than on a fresh page
    fn required_space(&self) -> Mm {
        match self {
            Section::Summary => Mm(25.0),
            Section::Experience => Mm(30.0),
            Section::Skills => Mm(40.0),
            Section::Projects => Mm(30.0),
            Section::Education => Mm(25.0),
            Section::Certifications => Mm(20.0),
        }
    }

    fn from_label(label: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// A finished resume, ready to be saved
#[derive(Debug, Clone)]
pub struct RenderedResume {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Each section with the 0-based index of the page its heading is on, in drawing order
    pub sections: Vec<(Section, usize)>,
}

/// Lays [ResumeData] out on A4 pages.
///
/// Rendering is deterministic: the same record always produces the same bytes, unless a
/// creation date is stamped into the document information.
#[derive(Debug, Default, Clone)]
pub struct ResumeRenderer {
    creation_date: Option<DateTime<FixedOffset>>,
}

impl ResumeRenderer {
    pub fn new() -> ResumeRenderer {
        ResumeRenderer::default()
    }

    pub fn with_creation_date(mut self, date: DateTime<FixedOffset>) -> ResumeRenderer {
        self.creation_date = Some(date);
        self
    }

    pub fn render(&self, data: &ResumeData) -> Result<RenderedResume, ResumeError> {
        let layout = lay_out(data);
        let canvas = layout.canvas;

        let page_count = canvas.page_count();
        let sections = canvas
            .bookmarks()
            .iter()
            .filter_map(|b| Section::from_label(&b.title).map(|s| (s, b.page_index)))
            .collect();

        let mut info = Info::new();
        info.title(format!("{} - Resume", data.personal_info.name))
            .author(&data.personal_info.name)
            .subject(&data.personal_info.title);
        if let Some(date) = self.creation_date {
            info.creation_date(date);
        }

        let bytes = canvas.finish(info)?;
        info!(page_count, size = bytes.len(), "rendered resume");

        Ok(RenderedResume {
            file_name: data.file_name(),
            bytes,
            page_count,
            sections,
        })
    }

    /// Renders the resume and hands it to the sink's save action. Nothing is saved unless
    /// every section was laid out and serialised.
    pub fn generate(
        &self,
        data: &ResumeData,
        sink: &dyn DocumentSink,
    ) -> Result<PathBuf, ResumeError> {
        let rendered = self.render(data)?;
        let path = sink
            .save(&rendered.file_name, &rendered.bytes)
            .map_err(ResumeError::Save)?;
        info!(path = %path.display(), "saved resume");
        Ok(path)
    }
}

/// Renders `data` with the default renderer and saves it through `sink`
pub fn generate_document(
    data: &ResumeData,
    sink: &dyn DocumentSink,
) -> Result<PathBuf, ResumeError> {
    ResumeRenderer::default().generate(data, sink)
}

/// The drawing cursor: a canvas and the baseline the next block starts at
struct Layout {
    canvas: Canvas,
    y: Mm,
}

impl Layout {
    fn new() -> Layout {
        Layout {
            canvas: Canvas::new(A4, MARGIN),
            y: MARGIN,
        }
    }

    fn content_width(&self) -> Mm {
        self.canvas.page_width() - MARGIN - MARGIN
    }

    /// Lookahead page break: only the upcoming block is considered, not whatever
    /// follows it.
    fn ensure_space(&mut self, required: Mm) {
        if self.y + required > self.canvas.page_height() - MARGIN {
            self.canvas.add_page();
            self.y = MARGIN;
            debug!(page = self.canvas.page_index(), "page break");
        }
    }

    /// Draws wrapped text with its first baseline at `y` and returns the cursor position
    /// below it: `lines × size × WRAP_FACTOR` further down.
    fn add_text(&mut self, text: &str, x: Mm, y: Mm, max_width: Mm, style: TextStyle) -> Mm {
        let lines = self.canvas.split_text(text, max_width, style);
        self.canvas.text_lines(&lines, x, y, style);
        y + Mm(lines.len() as f32 * style.size.0 * WRAP_FACTOR)
    }

    fn heading(&mut self, section: Section) {
        self.ensure_space(section.required_space());
        self.canvas.bookmark(section.label());
        self.canvas.text(
            section.heading(),
            MARGIN,
            self.y,
            TextStyle::new(FontStyle::Bold, 16.0, ACCENT),
        );
        self.y += Mm(8.0);
    }
}

fn body(font: FontStyle, size: f32) -> TextStyle {
    TextStyle::new(font, size, colours::BLACK)
}

fn muted_italic(size: f32) -> TextStyle {
    TextStyle::new(FontStyle::Italic, size, MUTED)
}

fn lay_out(data: &ResumeData) -> Layout {
    let mut layout = Layout::new();

    draw_header(&mut layout, data);
    for section in Section::ALL {
        match section {
            Section::Summary => draw_summary(&mut layout, data),
            Section::Experience => draw_experience(&mut layout, data),
            Section::Skills => draw_skills(&mut layout, data),
            Section::Projects => draw_projects(&mut layout, data),
            Section::Education => draw_education(&mut layout, data),
            Section::Certifications => draw_certifications(&mut layout, data),
        }
    }
    draw_footer(&mut layout, data);

    layout
}

fn draw_header(layout: &mut Layout, data: &ResumeData) {
    let info = &data.personal_info;
    let width = layout.canvas.page_width();
    let canvas = &mut layout.canvas;

    canvas.fill_rect(Mm(0.0), Mm(0.0), width, HEADER_HEIGHT, ACCENT);
    canvas.text(
        &info.name,
        MARGIN,
        Mm(20.0),
        TextStyle::new(FontStyle::Bold, 24.0, colours::WHITE),
    );
    canvas.text(
        &info.title,
        MARGIN,
        Mm(30.0),
        TextStyle::new(FontStyle::Normal, 14.0, colours::WHITE),
    );

    let contact = TextStyle::new(FontStyle::Normal, 10.0, colours::WHITE);
    let row = Mm(35.0);
    canvas.text(&info.email, MARGIN, row, contact);
    canvas.text(&info.phone, MARGIN + Mm(70.0), row, contact);
    canvas.text(&info.location, MARGIN + Mm(140.0), row, contact);

    layout.y = BODY_START;
}

fn draw_summary(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Summary);
    let width = layout.content_width();
    layout.y = layout.add_text(
        &data.summary,
        MARGIN,
        layout.y,
        width,
        body(FontStyle::Normal, 11.0),
    );
    layout.y += Mm(10.0);
}

fn draw_experience(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Experience);
    let indented = layout.content_width() - Mm(5.0);

    for exp in &data.experience {
        layout.ensure_space(Mm(40.0));

        let y = layout.y;
        layout
            .canvas
            .text(&exp.title, MARGIN, y, body(FontStyle::Bold, 14.0));
        layout.canvas.text(
            &format!("{} | {} | {}", exp.company, exp.period, exp.location),
            MARGIN,
            y + Mm(6.0),
            body(FontStyle::Normal, 12.0),
        );
        layout.y += Mm(12.0);

        for resp in &exp.responsibilities {
            layout.ensure_space(Mm(8.0));
            layout.y = layout.add_text(
                &format!("• {resp}"),
                MARGIN + Mm(5.0),
                layout.y,
                indented,
                body(FontStyle::Normal, 10.0),
            );
            layout.y += Mm(2.0);
        }

        layout.y = layout.add_text(
            &format!("Technologies: {}", exp.technologies.join(", ")),
            MARGIN + Mm(5.0),
            layout.y + Mm(3.0),
            indented,
            muted_italic(10.0),
        );
        layout.y += Mm(8.0);
    }
}

fn draw_skills(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Skills);
    let indented = layout.content_width() - Mm(5.0);

    for (title, skills) in data.skills.groups() {
        layout.ensure_space(Mm(15.0));
        layout
            .canvas
            .text(title, MARGIN, layout.y, body(FontStyle::Bold, 12.0));
        layout.y += Mm(6.0);

        let line = skills
            .iter()
            .map(|skill| format!("{} ({}%)", skill.name, skill.level))
            .collect::<Vec<_>>()
            .join(" • ");
        layout.y = layout.add_text(
            &line,
            MARGIN + Mm(5.0),
            layout.y,
            indented,
            body(FontStyle::Normal, 10.0),
        );
        layout.y += Mm(8.0);
    }
}

fn draw_projects(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Projects);
    let indented = layout.content_width() - Mm(5.0);
    let feature_width = layout.content_width() - Mm(10.0);

    for project in data.projects.iter().take(MAX_PROJECTS) {
        layout.ensure_space(Mm(25.0));
        layout
            .canvas
            .text(&project.title, MARGIN, layout.y, body(FontStyle::Bold, 12.0));
        layout.y += Mm(6.0);

        layout.y = layout.add_text(
            &project.description,
            MARGIN + Mm(5.0),
            layout.y,
            indented,
            body(FontStyle::Normal, 10.0),
        );
        layout.y += Mm(3.0);

        for feature in project.features.iter().take(MAX_FEATURES_PER_PROJECT) {
            layout.ensure_space(Mm(6.0));
            layout.y = layout.add_text(
                &format!("• {feature}"),
                MARGIN + Mm(10.0),
                layout.y,
                feature_width,
                body(FontStyle::Normal, 9.0),
            );
        }

        layout.y = layout.add_text(
            &format!("Technologies: {}", project.technologies.join(", ")),
            MARGIN + Mm(5.0),
            layout.y + Mm(2.0),
            indented,
            muted_italic(9.0),
        );
        layout.y += Mm(8.0);
    }
}

fn draw_education(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Education);

    for edu in &data.education {
        layout.ensure_space(Mm(15.0));
        let y = layout.y;
        layout
            .canvas
            .text(&edu.degree, MARGIN, y, body(FontStyle::Bold, 12.0));
        layout.canvas.text(
            &format!("{} | {}", edu.period, edu.status),
            MARGIN,
            y + Mm(6.0),
            body(FontStyle::Normal, 10.0),
        );
        layout.y += Mm(12.0);
    }
}

fn draw_certifications(layout: &mut Layout, data: &ResumeData) {
    layout.heading(Section::Certifications);

    for cert in &data.certifications {
        layout.ensure_space(Mm(10.0));
        layout.canvas.text(
            &format!("{} - {} ({})", cert.title, cert.issuer, cert.year),
            MARGIN,
            layout.y,
            body(FontStyle::Bold, 11.0),
        );
        layout.y += Mm(8.0);
    }
}

/// Drawn once, on whichever page is current when the flow gets here, in the bold face
/// the certifications left selected
fn draw_footer(layout: &mut Layout, data: &ResumeData) {
    let y = layout.canvas.page_height() - FOOTER_OFFSET;
    let style = TextStyle::new(FontStyle::Bold, 8.0, MUTED);
    let info = &data.personal_info;

    layout
        .canvas
        .text(&format!("LinkedIn: {}", info.linkedin), MARGIN, y, style);
    layout.canvas.text(
        &format!("GitHub: {}", info.github),
        MARGIN + Mm(80.0),
        y,
        style,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::{Certification, Education, Experience};
    use pretty_assertions::assert_eq;

    fn long_experience(n: usize) -> Experience {
        Experience {
            title: format!("Role {n}"),
            company: "Company".into(),
            period: "2020".into(),
            location: "Remote".into(),
            responsibilities: (0..6).map(|_| lipsum::lipsum(45)).collect(),
            technologies: vec!["Rust".into(), "Docker".into()],
        }
    }

    fn section_order(rendered: &RenderedResume) -> Vec<Section> {
        rendered.sections.iter().map(|(s, _)| *s).collect()
    }

    #[test]
    fn builtin_resume_renders_every_section_in_order() {
        let rendered = ResumeRenderer::new()
            .render(&ResumeData::builtin())
            .expect("renders");

        assert!(rendered.page_count >= 1);
        assert_eq!(section_order(&rendered), Section::ALL.to_vec());
        assert_eq!(rendered.file_name, "Sachit_Kaistha_Resume.pdf");
        assert!(rendered.bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let data = ResumeData::builtin();
        let renderer = ResumeRenderer::new();
        let first = renderer.render(&data).unwrap();
        let second = renderer.render(&data).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn long_resumes_paginate_without_reordering_sections() {
        let mut data = ResumeData::builtin();
        data.experience = (0..5).map(long_experience).collect();

        let rendered = ResumeRenderer::new().render(&data).unwrap();

        assert!(rendered.page_count > 1);
        assert_eq!(section_order(&rendered), Section::ALL.to_vec());
        let pages: Vec<usize> = rendered.sections.iter().map(|(_, p)| *p).collect();
        assert!(pages.windows(2).all(|w| w[0] <= w[1]));
        assert!(*pages.last().unwrap() < rendered.page_count);
    }

    #[test]
    fn empty_lists_still_draw_every_heading() {
        let mut data = ResumeData::builtin();
        data.experience.clear();
        data.education.clear();
        data.certifications.clear();
        data.projects.clear();

        let rendered = ResumeRenderer::new().render(&data).unwrap();
        assert_eq!(rendered.page_count, 1);
        assert_eq!(section_order(&rendered), Section::ALL.to_vec());
    }

    #[test]
    fn multi_line_blocks_advance_further_than_single_lines() {
        let mut layout = Layout::new();
        let width = layout.content_width();
        let style = body(FontStyle::Normal, 10.0);
        let start = Mm(60.0);

        let short = layout.add_text("• Shipped it", MARGIN, start, width, style);
        let long = layout.add_text(
            &format!("• {}", lipsum::lipsum(60)),
            MARGIN,
            start,
            width,
            style,
        );

        assert!(((short - start).0 - 3.5).abs() < 1e-4);
        assert!(long - start > short - start);
    }

    #[test]
    fn page_break_resets_cursor_to_top_margin() {
        let mut layout = Layout::new();
        layout.y = Mm(270.0);
        layout.ensure_space(Mm(8.0));
        assert_eq!(layout.canvas.page_count(), 1);

        layout.ensure_space(Mm(20.0));
        assert_eq!(layout.canvas.page_count(), 2);
        assert_eq!(layout.y, MARGIN);
    }

    #[test]
    fn footer_is_drawn_exactly_once() {
        let mut data = ResumeData::builtin();
        data.experience = (0..5).map(long_experience).collect();
        let layout = lay_out(&data);

        let texts = layout.canvas.page_texts();
        let footers: Vec<usize> = texts
            .iter()
            .enumerate()
            .flat_map(|(page, lines)| {
                lines
                    .iter()
                    .filter(|l| l.starts_with("LinkedIn: "))
                    .map(move |_| page)
            })
            .collect();
        assert_eq!(footers, vec![texts.len() - 1]);
    }

    #[test]
    fn footer_is_small_bold_and_muted() {
        let data = ResumeData::builtin();
        let layout = lay_out(&data);
        let linkedin = format!("LinkedIn: {}", data.personal_info.linkedin);
        let github = format!("GitHub: {}", data.personal_info.github);

        let expected = TextStyle::new(FontStyle::Bold, 8.0, MUTED);
        assert_eq!(layout.canvas.style_of(&linkedin), Some(expected));
        assert_eq!(layout.canvas.style_of(&github), Some(expected));
    }

    #[test]
    fn lists_keep_declaration_order_and_caps() {
        let mut data = ResumeData::builtin();
        data.education = vec![
            Education {
                degree: "First".into(),
                period: "a".into(),
                status: "done".into(),
                highlights: vec![],
            },
            Education {
                degree: "Second".into(),
                period: "b".into(),
                status: "done".into(),
                highlights: vec![],
            },
        ];
        data.certifications = vec![Certification {
            title: "Cert".into(),
            issuer: "Issuer".into(),
            year: "2024".into(),
        }];
        let mut extra = data.projects[0].clone();
        extra.title = "Fourth Project".into();
        data.projects.push(extra);

        let layout = lay_out(&data);
        let all: Vec<String> = layout.canvas.page_texts().concat();
        let position = |needle: &str| all.iter().position(|l| l == needle);

        assert!(position("First") < position("Second"));
        assert!(position("Cert - Issuer (2024)").is_some());
        assert_eq!(position("Fourth Project"), None);
        assert!(position("• Remote Docker management over SSH").is_some());
        assert_eq!(position("• AI story co-writing with text-to-speech"), None);
        assert!(position("Docker (90%) • AWS (85%) • Jenkins (80%) • Kubernetes (75%) • Linux (90%)").is_some());
    }
}
