//! Portfolio project domain: enums, payload schema, list filter, statistics.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::validation::{self, Constraint, FieldRule, FieldType, Schema};

/// Earliest year a project may carry.
pub const MIN_PROJECT_YEAR: i32 = 2020;

/// Icon stored when the payload does not name one.
pub const DEFAULT_ICON: &str = "🚀";

/// `https://` on github.com or gitlab.com, optionally followed by a path.
const REPOSITORY_URL_PATTERN: &str = r"^https://(github\.com|gitlab\.com)(/\S*)?$";

/// Empty, or any `http://` / `https://` URL.
const DEMO_URL_PATTERN: &str = r"^(https?://\S+)?$";

static REPOSITORY_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REPOSITORY_URL_PATTERN).expect("valid regex"));

static DEMO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEMO_URL_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Closed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Frontend,
    Backend,
    #[serde(rename = "Full-Stack")]
    FullStack,
    Mobile,
    DevOps,
}

impl ProjectCategory {
    /// Return the category name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::FullStack => "Full-Stack",
            Self::Mobile => "Mobile",
            Self::DevOps => "DevOps",
        }
    }

    /// Parse a category name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Frontend" => Some(Self::Frontend),
            "Backend" => Some(Self::Backend),
            "Full-Stack" => Some(Self::FullStack),
            "Mobile" => Some(Self::Mobile),
            "DevOps" => Some(Self::DevOps),
            _ => None,
        }
    }

    /// All valid category names.
    pub const ALL: &'static [&'static str] =
        &["Frontend", "Backend", "Full-Stack", "Mobile", "DevOps"];
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Progress of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    #[default]
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "completed" => Some(Self::Completed),
            "in-progress" => Some(Self::InProgress),
            "planned" => Some(Self::Planned),
            _ => None,
        }
    }

    pub const ALL: &'static [&'static str] = &["completed", "in-progress", "planned"];
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// A validated, normalized project payload with defaults applied.
///
/// Used for both create and full-document update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
    pub category: ProjectCategory,
    #[serde(default)]
    pub status: ProjectStatus,
    pub year: i32,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub featured: bool,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// Latest year a project may carry: next calendar year.
pub fn max_project_year() -> i32 {
    chrono::Utc::now().year() + 1
}

/// Build the project payload schema.
///
/// Built per call because the upper year bound moves with the calendar.
pub fn project_schema() -> Schema {
    use Constraint::*;

    let max_year = max_project_year();
    Schema::new(vec![
        FieldRule::new("title", Required, "Project title is required"),
        FieldRule::new("title", Type(FieldType::String), "Title must be text"),
        FieldRule::new("title", MaxLength(100), "Title cannot exceed 100 characters"),
        FieldRule::new("description", Required, "Project description is required"),
        FieldRule::new("description", Type(FieldType::String), "Description must be text"),
        FieldRule::new(
            "description",
            MaxLength(500),
            "Description cannot exceed 500 characters",
        ),
        FieldRule::new("fullDescription", Required, "Full description is required"),
        FieldRule::new(
            "fullDescription",
            Type(FieldType::String),
            "Full description must be text",
        ),
        FieldRule::new(
            "fullDescription",
            MaxLength(2000),
            "Full description cannot exceed 2000 characters",
        ),
        FieldRule::new("technologies", Required, "Technologies are required"),
        FieldRule::new(
            "technologies",
            Type(FieldType::Array),
            "Technologies must be a list",
        ),
        FieldRule::new(
            "technologies",
            MinItems(1),
            "At least one technology is required",
        ),
        FieldRule::new(
            "technologies",
            NonEmptyItems,
            "Each technology must be non-empty text",
        ),
        FieldRule::new("github", Required, "GitHub URL is required"),
        FieldRule::new("github", Type(FieldType::String), "GitHub URL must be text"),
        FieldRule::new(
            "github",
            Pattern(&REPOSITORY_URL_RE),
            "Please provide a valid GitHub or GitLab URL",
        ),
        FieldRule::new("demo", Type(FieldType::String), "Demo URL must be text"),
        FieldRule::new("demo", Pattern(&DEMO_URL_RE), "Please provide a valid URL"),
        FieldRule::new("category", Required, "Project category is required"),
        FieldRule::new("category", Type(FieldType::String), "Category must be text"),
        FieldRule::new(
            "category",
            OneOf(ProjectCategory::ALL),
            "Category must be Frontend, Backend, Full-Stack, Mobile, or DevOps",
        ),
        FieldRule::new("status", Type(FieldType::String), "Status must be text"),
        FieldRule::new(
            "status",
            OneOf(ProjectStatus::ALL),
            "Status must be completed, in-progress, or planned",
        ),
        FieldRule::new("year", Required, "Project year is required"),
        FieldRule::new("year", Type(FieldType::Integer), "Year must be a whole number"),
        FieldRule::new(
            "year",
            MinValue(f64::from(MIN_PROJECT_YEAR)),
            format!("Year must be {MIN_PROJECT_YEAR} or later"),
        ),
        FieldRule::new(
            "year",
            MaxValue(f64::from(max_year)),
            format!("Year cannot be later than {max_year}"),
        ),
        FieldRule::new("icon", Type(FieldType::String), "Icon must be text"),
        FieldRule::new("icon", MinLength(1), "Project icon cannot be empty"),
        FieldRule::new("featured", Type(FieldType::Boolean), "Featured must be true or false"),
    ])
}

/// Validate a raw project payload and apply defaults.
pub fn validate_project(payload: &Value) -> Result<ProjectInput, CoreError> {
    let normalized = validation::validate(&project_schema(), payload)?;
    let mut input: ProjectInput = serde_json::from_value(Value::Object(normalized))
        .map_err(|e| CoreError::Validation(vec![e.to_string()]))?;
    input.demo = input.demo.filter(|d| !d.is_empty());
    Ok(input)
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Exact-match conjunction applied by project listing. `None` matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectFilter {
    pub fn matches(&self, category: ProjectCategory, status: ProjectStatus, featured: bool) -> bool {
        self.category.as_deref().map_or(true, |c| c == category.as_str())
            && self.status.as_deref().map_or(true, |s| s == status.as_str())
            && self.featured.map_or(true, |f| f == featured)
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Global project counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOverview {
    pub total: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub planned: i64,
    pub featured: i64,
}

/// Number of projects in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Aggregates returned by the stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub overview: ProjectOverview,
    pub categories: Vec<CategoryCount>,
}

impl ProjectStats {
    /// Aggregate `(category, status, featured)` triples.
    pub fn tally<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (ProjectCategory, ProjectStatus, bool)>,
    {
        let mut overview = ProjectOverview::default();
        let mut by_category: Vec<CategoryCount> = Vec::new();

        for (category, status, featured) in records {
            overview.total += 1;
            match status {
                ProjectStatus::Completed => overview.completed += 1,
                ProjectStatus::InProgress => overview.in_progress += 1,
                ProjectStatus::Planned => overview.planned += 1,
            }
            if featured {
                overview.featured += 1;
            }
            match by_category.iter_mut().find(|c| c.category == category.as_str()) {
                Some(entry) => entry.count += 1,
                None => by_category.push(CategoryCount {
                    category: category.as_str().to_string(),
                    count: 1,
                }),
            }
        }

        sort_categories(&mut by_category);
        Self {
            overview,
            categories: by_category,
        }
    }
}

/// Order category counts by count descending, then name ascending.
pub fn sort_categories(categories: &mut [CategoryCount]) {
    categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "title": "Vue Portfolio Monorepo",
            "description": "A modern portfolio",
            "fullDescription": "A complete monorepo with a backend and a client.",
            "technologies": ["Vue 3", "TypeScript"],
            "github": "https://github.com/someone/portfolio",
            "category": "Full-Stack",
            "year": 2024
        })
    }

    fn messages(payload: &Value) -> Vec<String> {
        match validate_project(payload) {
            Err(CoreError::Validation(msgs)) => msgs,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_gets_defaults() {
        let input = validate_project(&valid_payload()).unwrap();
        assert_eq!(input.status, ProjectStatus::InProgress);
        assert_eq!(input.icon, DEFAULT_ICON);
        assert!(!input.featured);
        assert_eq!(input.demo, None);
        assert_eq!(input.category, ProjectCategory::FullStack);
    }

    #[test]
    fn strings_are_trimmed() {
        let mut payload = valid_payload();
        payload["title"] = json!("  Padded  ");
        payload["technologies"] = json!([" Rust "]);
        let input = validate_project(&payload).unwrap();
        assert_eq!(input.title, "Padded");
        assert_eq!(input.technologies, vec!["Rust"]);
    }

    #[test]
    fn year_2019_yields_exactly_one_message() {
        let mut payload = valid_payload();
        payload["year"] = json!(2019);
        let msgs = messages(&payload);
        assert_eq!(msgs.len(), 1);
        assert!(msgs[0].contains("Year"));
    }

    #[test]
    fn year_after_next_is_rejected() {
        let mut payload = valid_payload();
        payload["year"] = json!(max_project_year() + 1);
        assert_eq!(messages(&payload).len(), 1);

        payload["year"] = json!(max_project_year());
        assert!(validate_project(&payload).is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let payload = json!({
            "title": "x".repeat(101),
            "technologies": [],
            "github": "https://bitbucket.org/someone/repo",
            "category": "Desktop",
            "year": 2024
        });
        let msgs = messages(&payload);
        assert_eq!(msgs.len(), 6, "{msgs:?}");
        assert!(msgs.contains(&"Title cannot exceed 100 characters".to_string()));
        assert!(msgs.contains(&"Project description is required".to_string()));
        assert!(msgs.contains(&"Full description is required".to_string()));
        assert!(msgs.contains(&"At least one technology is required".to_string()));
        assert!(msgs.contains(&"Please provide a valid GitHub or GitLab URL".to_string()));
        assert!(msgs.iter().any(|m| m.starts_with("Category must be")));
    }

    #[test]
    fn github_host_must_be_exact() {
        let mut payload = valid_payload();
        payload["github"] = json!("https://github.com.evil.example/repo");
        assert_eq!(messages(&payload).len(), 1);

        payload["github"] = json!("http://github.com/someone/repo");
        assert_eq!(messages(&payload).len(), 1);

        payload["github"] = json!("https://gitlab.com/someone/repo");
        assert!(validate_project(&payload).is_ok());
    }

    #[test]
    fn demo_may_be_empty_but_not_malformed() {
        let mut payload = valid_payload();
        payload["demo"] = json!("");
        assert_eq!(validate_project(&payload).unwrap().demo, None);

        payload["demo"] = json!("https://demo.example.com");
        assert_eq!(
            validate_project(&payload).unwrap().demo.as_deref(),
            Some("https://demo.example.com")
        );

        payload["demo"] = json!("not a url");
        assert_eq!(messages(&payload), vec!["Please provide a valid URL"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let mut payload = valid_payload();
        payload["stars"] = json!(5);
        assert_eq!(messages(&payload), vec!["stars is not allowed"]);
    }

    #[test]
    fn wrong_type_yields_single_message() {
        let mut payload = valid_payload();
        payload["featured"] = json!("yes");
        assert_eq!(messages(&payload), vec!["Featured must be true or false"]);
    }

    #[test]
    fn null_optional_fields_take_defaults() {
        for field in ["featured", "status", "icon", "demo"] {
            let mut payload = valid_payload();
            payload[field] = Value::Null;
            let input = validate_project(&payload)
                .unwrap_or_else(|e| panic!("{field}: null rejected with {e:?}"));
            assert!(!input.featured);
            assert_eq!(input.status, ProjectStatus::InProgress);
            assert_eq!(input.icon, DEFAULT_ICON);
            assert_eq!(input.demo, None);
        }
    }

    #[test]
    fn null_required_field_names_the_field() {
        let mut payload = valid_payload();
        payload["year"] = Value::Null;
        assert_eq!(messages(&payload), vec!["Project year is required"]);
    }

    #[test]
    fn category_round_trips_through_str() {
        for name in ProjectCategory::ALL {
            let category = ProjectCategory::from_str(name).unwrap();
            assert_eq!(category.as_str(), *name);
        }
        assert_matches!(ProjectCategory::from_str("Desktop"), None);
    }

    #[test]
    fn filter_matches_conjunction() {
        let filter = ProjectFilter {
            category: Some("Frontend".into()),
            status: None,
            featured: Some(true),
        };
        assert!(filter.matches(ProjectCategory::Frontend, ProjectStatus::Planned, true));
        assert!(!filter.matches(ProjectCategory::Frontend, ProjectStatus::Planned, false));
        assert!(!filter.matches(ProjectCategory::Backend, ProjectStatus::Planned, true));
        assert!(ProjectFilter::default().matches(
            ProjectCategory::Mobile,
            ProjectStatus::Completed,
            false
        ));
    }

    #[test]
    fn tally_counts_statuses_and_categories() {
        let stats = ProjectStats::tally([
            (ProjectCategory::Frontend, ProjectStatus::Completed, true),
            (ProjectCategory::Backend, ProjectStatus::Completed, false),
            (ProjectCategory::Frontend, ProjectStatus::Planned, false),
        ]);
        assert_eq!(stats.overview.total, 3);
        assert_eq!(stats.overview.completed, 2);
        assert_eq!(stats.overview.planned, 1);
        assert_eq!(stats.overview.in_progress, 0);
        assert_eq!(stats.overview.featured, 1);
        assert_eq!(
            stats.categories,
            vec![
                CategoryCount {
                    category: "Frontend".into(),
                    count: 2
                },
                CategoryCount {
                    category: "Backend".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn overview_serializes_camel_case() {
        let json = serde_json::to_value(ProjectOverview::default()).unwrap();
        assert!(json.get("inProgress").is_some());
    }
}
