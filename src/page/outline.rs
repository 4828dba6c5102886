//! Vertical geometry of the page document.
//!
//! The page is one tall column of rows. Sections and the content blocks
//! inside them get fixed row spans computed from the configured content, so
//! scroll targets, nav highlighting and reveal checks never depend on what
//! was last drawn. The renderer pads or truncates each block to these spans.

use crate::config::AppConfig;
use crate::form::field::Field;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Projects, Section::Contact];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "#home",
            Section::About => "#about",
            Section::Projects => "#projects",
            Section::Contact => "#contact",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Section::Home => "",
            Section::About => "About Me",
            Section::Projects => "Featured Projects",
            Section::Contact => "Get In Touch",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// A content block that fades in on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Block {
    HeroText,
    HeroImage,
    AboutText,
    TechStack,
    Project(usize),
    ContactInfo,
    ContactForm,
}

impl Block {
    /// Hero blocks appear through the timed intro, not on scroll.
    pub fn is_hero(self) -> bool {
        matches!(self, Block::HeroText | Block::HeroImage)
    }

    pub const HERO: [Block; 2] = [Block::HeroText, Block::HeroImage];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: usize,
    pub height: usize,
}

impl RowSpan {
    pub fn bottom(&self) -> usize {
        self.top + self.height
    }

    pub fn contains(&self, row: usize) -> bool {
        row >= self.top && row < self.bottom()
    }

    /// Number of rows shared with `[start, end)`.
    pub fn overlap(&self, start: usize, end: usize) -> usize {
        let lo = self.top.max(start);
        let hi = self.bottom().min(end);
        hi.saturating_sub(lo)
    }
}

pub const HEADING_ROWS: usize = 2;
pub const HERO_IMAGE_ROWS: usize = 5;
pub const TECH_PER_ROW: usize = 4;
pub const MESSAGE_ROWS: usize = 3;

/// Rows used by one field in the form: label, input, error line.
pub fn field_rows(field: Field) -> usize {
    let input = if field == Field::Message { MESSAGE_ROWS } else { 1 };
    1 + input + 1
}

/// Row of a field's label, relative to the top of the form block.
pub fn field_offset(field: Field) -> usize {
    Field::ALL
        .iter()
        .take_while(|f| **f != field)
        .map(|f| field_rows(*f))
        .sum()
}

/// Row of the submit button, relative to the top of the form block.
pub fn submit_offset() -> usize {
    Field::ALL.iter().map(|f| field_rows(*f)).sum()
}

pub fn form_rows() -> usize {
    submit_offset() + 2
}

pub fn hero_text_rows(config: &AppConfig) -> usize {
    // name, title, blank, tagline..., blank, buttons
    5 + wrap_text(&config.profile.tagline, config.layout.content_width).len()
}

pub fn about_text_rows(config: &AppConfig) -> usize {
    config
        .profile
        .about
        .iter()
        .map(|p| wrap_text(p, config.layout.content_width).len() + 1)
        .sum()
}

pub fn tech_stack_rows(config: &AppConfig) -> usize {
    1 + config.profile.tech_stack.len().div_ceil(TECH_PER_ROW)
}

pub fn project_rows(config: &AppConfig, index: usize) -> usize {
    let desc = config
        .projects
        .get(index)
        .map(|p| wrap_text(&p.description, config.layout.content_width.saturating_sub(4)).len())
        .unwrap_or(0);
    // title, description..., tags, link, blank
    4 + desc
}

pub fn contact_info_rows(config: &AppConfig) -> usize {
    // email, [phone], location, blank
    3 + usize::from(config.profile.phone.is_some())
}

#[derive(Debug, Clone)]
pub struct Outline {
    pub sections: Vec<(Section, RowSpan)>,
    pub blocks: Vec<(Block, RowSpan)>,
    pub height: usize,
}

impl Outline {
    pub fn build(config: &AppConfig) -> Self {
        let mut builder = OutlineBuilder::default();

        builder.begin(Section::Home);
        builder.gap(1);
        builder.block(Block::HeroText, hero_text_rows(config));
        builder.gap(1);
        builder.block(Block::HeroImage, HERO_IMAGE_ROWS);
        builder.gap(1);
        builder.end();

        builder.begin(Section::About);
        builder.gap(HEADING_ROWS);
        builder.block(Block::AboutText, about_text_rows(config));
        builder.block(Block::TechStack, tech_stack_rows(config));
        builder.gap(1);
        builder.end();

        builder.begin(Section::Projects);
        builder.gap(HEADING_ROWS);
        for i in 0..config.projects.len() {
            builder.block(Block::Project(i), project_rows(config, i));
        }
        builder.end();

        builder.begin(Section::Contact);
        builder.gap(HEADING_ROWS);
        builder.block(Block::ContactInfo, contact_info_rows(config));
        builder.block(Block::ContactForm, form_rows());
        builder.end();

        builder.finish()
    }

    pub fn section(&self, section: Section) -> Option<RowSpan> {
        self.sections.iter().find(|(s, _)| *s == section).map(|(_, span)| *span)
    }

    pub fn block(&self, block: Block) -> Option<RowSpan> {
        self.blocks.iter().find(|(b, _)| *b == block).map(|(_, span)| *span)
    }

    /// The section containing `row`, if any.
    pub fn section_at(&self, row: usize) -> Option<Section> {
        self.sections
            .iter()
            .find(|(_, span)| span.contains(row))
            .map(|(s, _)| *s)
    }
}

#[derive(Default)]
struct OutlineBuilder {
    cursor: usize,
    current: Option<(Section, usize)>,
    sections: Vec<(Section, RowSpan)>,
    blocks: Vec<(Block, RowSpan)>,
}

impl OutlineBuilder {
    fn begin(&mut self, section: Section) {
        self.current = Some((section, self.cursor));
    }

    fn gap(&mut self, rows: usize) {
        self.cursor += rows;
    }

    fn block(&mut self, block: Block, rows: usize) {
        self.blocks.push((block, RowSpan { top: self.cursor, height: rows }));
        self.cursor += rows;
    }

    fn end(&mut self) {
        if let Some((section, top)) = self.current.take() {
            self.sections.push((section, RowSpan { top, height: self.cursor - top }));
        }
    }

    fn finish(self) -> Outline {
        Outline {
            sections: self.sections,
            blocks: self.blocks,
            height: self.cursor,
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` get a line
/// of their own. Empty input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        assert!(wrap_text("", 10).is_empty());
        assert_eq!(wrap_text("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap_text("abcdefghij xy", 4), vec!["abcdefghij", "xy"]);
    }

    #[test]
    fn test_sections_tile_the_document() {
        let outline = Outline::build(&AppConfig::default());
        let mut expected_top = 0;
        for (section, span) in &outline.sections {
            assert_eq!(span.top, expected_top, "{:?} should start where the previous ended", section);
            expected_top = span.bottom();
        }
        assert_eq!(expected_top, outline.height);
        let order: Vec<_> = outline.sections.iter().map(|(s, _)| *s).collect();
        assert_eq!(order, Section::ALL);
    }

    #[test]
    fn test_blocks_sit_inside_their_sections() {
        let cfg = AppConfig::default();
        let outline = Outline::build(&cfg);
        let contact = outline.section(Section::Contact).unwrap();
        let form = outline.block(Block::ContactForm).unwrap();
        assert!(form.top >= contact.top && form.bottom() <= contact.bottom());
        for i in 0..cfg.projects.len() {
            let card = outline.block(Block::Project(i)).unwrap();
            assert_eq!(outline.section_at(card.top), Some(Section::Projects));
        }
    }

    #[test]
    fn test_form_offsets() {
        assert_eq!(field_offset(Field::FirstName), 0);
        assert_eq!(field_offset(Field::LastName), 3);
        assert_eq!(field_offset(Field::Message), 12);
        assert_eq!(submit_offset(), 17);
        assert_eq!(form_rows(), 19);
    }

    #[test]
    fn test_anchor_lookup() {
        assert_eq!(Section::from_anchor("#projects"), Some(Section::Projects));
        assert_eq!(Section::from_anchor("#missing"), None);
    }

    #[test]
    fn test_overlap() {
        let span = RowSpan { top: 10, height: 5 };
        assert_eq!(span.overlap(0, 10), 0);
        assert_eq!(span.overlap(12, 100), 3);
        assert_eq!(span.overlap(0, 100), 5);
    }
}
