//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the page renders out of the box.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default = "default_projects")]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: ProfileConfig::default(),
            projects: default_projects(),
            timing: TimingConfig::default(),
            layout: LayoutConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Who the page is about. Drives the hero, about and contact sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_about")]
    pub about: Vec<String>,
    #[serde(default = "default_tech_stack")]
    pub tech_stack: Vec<String>,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_resume_url")]
    pub resume_url: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            tagline: default_tagline(),
            about: default_about(),
            tech_stack: default_tech_stack(),
            email: default_email(),
            phone: None,
            location: default_location(),
            resume_url: default_resume_url(),
        }
    }
}

/// A project card. A `url` of `"#"` marks a placeholder link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_project_url")]
    pub url: String,
}

impl ProjectConfig {
    pub fn is_placeholder(&self) -> bool {
        self.url.trim() == "#"
    }
}

/// Delays for every timed transition on the page, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
    #[serde(default = "default_toast_visible")]
    pub toast_visible_ms: u64,
    #[serde(default = "default_toast_exit")]
    pub toast_exit_ms: u64,
    #[serde(default = "default_hero_intro_delay")]
    pub hero_intro_delay_ms: u64,
    #[serde(default = "default_hero_stagger")]
    pub hero_stagger_ms: u64,
}

impl TimingConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_visible(&self) -> Duration {
        Duration::from_millis(self.toast_visible_ms)
    }

    pub fn toast_exit(&self) -> Duration {
        Duration::from_millis(self.toast_exit_ms)
    }

    pub fn hero_intro_delay(&self) -> Duration {
        Duration::from_millis(self.hero_intro_delay_ms)
    }

    pub fn hero_stagger(&self) -> Duration {
        Duration::from_millis(self.hero_stagger_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
            toast_visible_ms: default_toast_visible(),
            toast_exit_ms: default_toast_exit(),
            hero_intro_delay_ms: default_hero_intro_delay(),
            hero_stagger_ms: default_hero_stagger(),
        }
    }
}

/// Scroll and layout thresholds, in terminal rows and columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Rows left above a section after scrolling to it (the fixed navbar).
    #[serde(default = "default_header_offset")]
    pub header_offset: usize,
    /// Scroll position past which the navbar switches to its compact style.
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: usize,
    /// Look-ahead added to the scroll position when picking the active link.
    #[serde(default = "default_highlight_offset")]
    pub highlight_offset: usize,
    /// Terminal width above which the collapsible nav menu is closed.
    #[serde(default = "default_wide_breakpoint")]
    pub wide_breakpoint: u16,
    /// Rows trimmed off the bottom of the viewport for reveal checks.
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin: usize,
    /// Column width content is wrapped to.
    #[serde(default = "default_content_width")]
    pub content_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_offset: default_header_offset(),
            scrolled_threshold: default_scrolled_threshold(),
            highlight_offset: default_highlight_offset(),
            wide_breakpoint: default_wide_breakpoint(),
            reveal_margin: default_reveal_margin(),
            content_width: default_content_width(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_name() -> String {
    "Alex Morgan".to_string()
}
fn default_title() -> String {
    "Software Engineer".to_string()
}
fn default_tagline() -> String {
    "I build reliable systems and friendly tools, from the terminal up.".to_string()
}
fn default_about() -> Vec<String> {
    vec![
        "I'm a software engineer who enjoys turning fuzzy problems into small, \
         well-tested programs. Most of my recent work is in Rust and TypeScript."
            .to_string(),
        "When I'm not coding I'm usually hiking, reading about distributed systems, \
         or tinkering with keyboards."
            .to_string(),
    ]
}
fn default_tech_stack() -> Vec<String> {
    ["Rust", "TypeScript", "Python", "PostgreSQL", "Docker", "Linux", "Git", "React"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_email() -> String {
    "hello@example.com".to_string()
}
fn default_location() -> String {
    "Remote".to_string()
}
fn default_resume_url() -> String {
    "https://example.com/resume.pdf".to_string()
}
fn default_project_url() -> String {
    "#".to_string()
}
fn default_projects() -> Vec<ProjectConfig> {
    vec![
        ProjectConfig {
            title: "Task Tracker".into(),
            description: "A keyboard-driven task manager with offline sync.".into(),
            tags: vec!["Rust".into(), "SQLite".into()],
            url: default_project_url(),
        },
        ProjectConfig {
            title: "Weather Dashboard".into(),
            description: "Forecasts and radar maps in a single responsive page.".into(),
            tags: vec!["TypeScript".into(), "React".into()],
            url: default_project_url(),
        },
        ProjectConfig {
            title: "Log Explorer".into(),
            description: "Streams, filters and highlights structured logs in real time.".into(),
            tags: vec!["Rust".into(), "Tokio".into()],
            url: default_project_url(),
        },
    ]
}
fn default_submit_delay() -> u64 {
    2000
}
fn default_toast_visible() -> u64 {
    4000
}
fn default_toast_exit() -> u64 {
    300
}
fn default_hero_intro_delay() -> u64 {
    100
}
fn default_hero_stagger() -> u64 {
    200
}
fn default_header_offset() -> usize {
    3
}
fn default_scrolled_threshold() -> usize {
    5
}
fn default_highlight_offset() -> usize {
    5
}
fn default_wide_breakpoint() -> u16 {
    100
}
fn default_reveal_margin() -> usize {
    2
}
fn default_content_width() -> usize {
    72
}
fn default_log_dir() -> String {
    "~/.local/share/folio/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.timing.submit_delay_ms, 2000);
        assert_eq!(cfg.timing.toast_visible_ms, 4000);
        assert_eq!(cfg.timing.toast_exit_ms, 300);
        assert_eq!(cfg.projects.len(), 3);
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [profile]
            name = "Sam"

            [timing]
            submit_delay_ms = 500

            [[projects]]
            title = "Only"
            url = "https://example.org"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.profile.name, "Sam");
        assert_eq!(cfg.profile.title, "Software Engineer");
        assert_eq!(cfg.timing.submit_delay(), Duration::from_millis(500));
        assert_eq!(cfg.timing.hero_stagger_ms, 200);
        assert_eq!(cfg.projects.len(), 1);
        assert!(!cfg.projects[0].is_placeholder());
    }

    #[test]
    fn test_placeholder_project_url() {
        let cfg = AppConfig::default();
        assert!(cfg.projects.iter().all(|p| p.is_placeholder()));
    }
}
