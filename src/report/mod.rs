//! The report catalog: named join queries with optional equality filters.
//!
//! Each report is data: a kind, a title, a column list, and the filter
//! dimensions its join graph supports. Execution lives in [`catalog`],
//! filter value discovery in [`filter`], table formatting in [`render`].

pub mod catalog;
pub mod filter;
pub mod render;

/// A dimension a report can be narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    /// Narrow to one user name.
    User,
    /// Narrow to one device name.
    Device,
}

impl FilterDimension {
    /// Short name used in errors and CLI flags.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FilterDimension::User => "user",
            FilterDimension::Device => "device",
        }
    }

    /// Prompt shown when the operator picks a value.
    #[must_use]
    pub fn prompt(self) -> &'static str {
        match self {
            FilterDimension::User => "Filter by user name",
            FilterDimension::Device => "Filter by device",
        }
    }
}

/// The seven reports in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Sessions,
    UserFeedback,
    InstructorFeedback,
    Maintenance,
    Achievements,
    Preferences,
    Metrics,
}

impl ReportKind {
    /// All reports, in menu order.
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Sessions,
        ReportKind::UserFeedback,
        ReportKind::InstructorFeedback,
        ReportKind::Maintenance,
        ReportKind::Achievements,
        ReportKind::Preferences,
        ReportKind::Metrics,
    ];

    /// Stable identifier for the scripted CLI surface.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::Sessions => "sessions",
            ReportKind::UserFeedback => "user-feedback",
            ReportKind::InstructorFeedback => "instructor-feedback",
            ReportKind::Maintenance => "maintenance",
            ReportKind::Achievements => "achievements",
            ReportKind::Preferences => "preferences",
            ReportKind::Metrics => "metrics",
        }
    }

    /// Human-readable report title, also the menu entry.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Sessions => "Training sessions",
            ReportKind::UserFeedback => "User feedback",
            ReportKind::InstructorFeedback => "Instructor feedback",
            ReportKind::Maintenance => "Maintenance history",
            ReportKind::Achievements => "User achievements",
            ReportKind::Preferences => "User preferences",
            ReportKind::Metrics => "User metrics",
        }
    }

    /// Ordered column headers of the rendered table.
    #[must_use]
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ReportKind::Sessions => &[
                "Session ID",
                "User",
                "Procedure",
                "Device",
                "Date",
                "Duration",
                "Result",
            ],
            ReportKind::UserFeedback => {
                &["Feedback ID", "User", "Procedure", "Comment", "Score"]
            }
            ReportKind::InstructorFeedback => &[
                "Report ID",
                "User",
                "Procedure",
                "Instructor Feedback",
                "Total Score",
            ],
            ReportKind::Maintenance => {
                &["Maintenance ID", "Device", "Date", "Description", "Technician"]
            }
            ReportKind::Achievements => &["Achievement", "User", "Description", "Date"],
            ReportKind::Preferences => &["User", "Preferences"],
            ReportKind::Metrics => &["Metric ID", "User", "Metric Type", "Value"],
        }
    }

    /// Dimensions present in this report's join graph.
    #[must_use]
    pub fn supported_filters(self) -> &'static [FilterDimension] {
        match self {
            ReportKind::Sessions => &[FilterDimension::User, FilterDimension::Device],
            ReportKind::UserFeedback
            | ReportKind::InstructorFeedback
            | ReportKind::Achievements
            | ReportKind::Preferences
            | ReportKind::Metrics => &[FilterDimension::User],
            ReportKind::Maintenance => &[FilterDimension::Device],
        }
    }

    /// Dimension the interactive loop offers after the unfiltered run.
    ///
    /// Sessions and metrics run unfiltered only, matching the baseline
    /// menu behavior; their catalog queries still accept filters for the
    /// scripted surface.
    #[must_use]
    pub fn menu_filter(self) -> Option<FilterDimension> {
        match self {
            ReportKind::Sessions | ReportKind::Metrics => None,
            ReportKind::Maintenance => Some(FilterDimension::Device),
            ReportKind::UserFeedback
            | ReportKind::InstructorFeedback
            | ReportKind::Achievements
            | ReportKind::Preferences => Some(FilterDimension::User),
        }
    }

    /// Look up a report by its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == slug.trim().to_ascii_lowercase())
    }
}

/// Equality filters applied to a report. All present values are ANDed.
#[derive(Debug, Default, Clone)]
pub struct Filters {
    pub user: Option<String>,
    pub device: Option<String>,
}

impl Filters {
    /// No filtering: the full report.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Narrow to one user name.
    #[must_use]
    pub fn by_user(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
            device: None,
        }
    }

    /// Narrow to one device name.
    #[must_use]
    pub fn by_device(name: impl Into<String>) -> Self {
        Self {
            user: None,
            device: Some(name.into()),
        }
    }

    /// Narrow to the given value of the given dimension.
    #[must_use]
    pub fn by_dimension(dimension: FilterDimension, value: impl Into<String>) -> Self {
        match dimension {
            FilterDimension::User => Self::by_user(value),
            FilterDimension::Device => Self::by_device(value),
        }
    }

    /// True when no filter is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.device.is_none()
    }
}

/// An executed report: ordered headers plus all rows as display cells.
#[derive(Debug, Clone)]
pub struct ReportTable {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<String>>,
}
