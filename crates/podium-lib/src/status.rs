//! Domain status enumerations and their label-key mappings.
//!
//! Each admin-console domain encodes lifecycle state as a small integer.
//! The console never renders the raw code: it maps it to a fixed
//! localization key and hands that key to the translation service. The
//! mapping is total — any code outside a domain's declared set maps to the
//! empty string, never an error.

use std::fmt;
use std::str::FromStr;

use crate::error::PodiumError;
use crate::filter::coerce_int;

/// Total code-to-label-key mapping for a status domain.
pub trait CodeLabel: Copy {
    /// Decode a raw status code.
    fn from_code(code: i64) -> Option<Self>;

    /// Fixed localization key for this value.
    fn label_key(self) -> &'static str;

    /// Map a raw code to its localization key.
    ///
    /// Returns the empty string for any code outside the declared set.
    #[must_use]
    fn key_for(code: i64) -> &'static str {
        Self::from_code(code).map_or("", Self::label_key)
    }
}

/// Review state of an uploaded VM image template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageStatus {
    Unapproved,
    Passed,
    Failed,
}

impl ImageStatus {
    pub const ALL: [Self; 3] = [Self::Unapproved, Self::Passed, Self::Failed];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Unapproved => 0,
            Self::Passed => 1,
            Self::Failed => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unapproved => "unapproved",
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

impl CodeLabel for ImageStatus {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unapproved),
            1 => Some(Self::Passed),
            2 => Some(Self::Failed),
            _ => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Unapproved => "TEMPLATE_STATUS.UNAPPROVED",
            Self::Passed => "TEMPLATE_STATUS.PASS",
            Self::Failed => "TEMPLATE_STATUS.FAIL",
        }
    }
}

impl fmt::Display for ImageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageStatus {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unapproved" => Ok(Self::Unapproved),
            "passed" | "pass" => Ok(Self::Passed),
            "failed" | "fail" => Ok(Self::Failed),
            other => Err(PodiumError::UnknownName {
                domain: "image status",
                name: other.to_string(),
            }),
        }
    }
}

/// Audit state of a user's registration for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditStatus {
    NotAudited,
    Passed,
    Refused,
    AutoPassed,
}

impl AuditStatus {
    pub const ALL: [Self; 4] = [
        Self::NotAudited,
        Self::Passed,
        Self::Refused,
        Self::AutoPassed,
    ];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::NotAudited => 0,
            Self::Passed => 1,
            Self::Refused => 2,
            Self::AutoPassed => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotAudited => "not_audited",
            Self::Passed => "passed",
            Self::Refused => "refused",
            Self::AutoPassed => "auto_passed",
        }
    }

    /// Registrations in either passed state count toward attendance.
    #[must_use]
    pub const fn is_admitted(self) -> bool {
        matches!(self, Self::Passed | Self::AutoPassed)
    }
}

impl CodeLabel for AuditStatus {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::NotAudited),
            1 => Some(Self::Passed),
            2 => Some(Self::Refused),
            3 => Some(Self::AutoPassed),
            _ => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::NotAudited => "HACK_USER_STATUS.NOAUDIT",
            Self::Passed => "HACK_USER_STATUS.AUDIT_PASSED",
            Self::Refused => "HACK_USER_STATUS.AUDIT_REFUSE",
            Self::AutoPassed => "HACK_USER_STATUS.AUTO_PASSED",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditStatus {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not_audited" | "notaudited" => Ok(Self::NotAudited),
            "passed" => Ok(Self::Passed),
            "refused" => Ok(Self::Refused),
            "auto_passed" | "autopassed" => Ok(Self::AutoPassed),
            other => Err(PodiumError::UnknownName {
                domain: "audit status",
                name: other.to_string(),
            }),
        }
    }
}

/// Role a user holds within an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Visitor,
    Admin,
    Judge,
    Competitor,
}

impl UserRole {
    pub const ALL: [Self; 4] = [Self::Visitor, Self::Admin, Self::Judge, Self::Competitor];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Visitor => 0,
            Self::Admin => 1,
            Self::Judge => 2,
            Self::Competitor => 3,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visitor => "visitor",
            Self::Admin => "admin",
            Self::Judge => "judge",
            Self::Competitor => "competitor",
        }
    }
}

impl CodeLabel for UserRole {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Visitor),
            1 => Some(Self::Admin),
            2 => Some(Self::Judge),
            3 => Some(Self::Competitor),
            _ => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Visitor => "HACK_USER_TYPE.VISITOR",
            Self::Admin => "HACK_USER_TYPE.ADMIN",
            Self::Judge => "HACK_USER_TYPE.JUDGE",
            Self::Competitor => "HACK_USER_TYPE.COMPETITOR",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "visitor" => Ok(Self::Visitor),
            "admin" => Ok(Self::Admin),
            "judge" => Ok(Self::Judge),
            "competitor" => Ok(Self::Competitor),
            other => Err(PodiumError::UnknownName {
                domain: "user role",
                name: other.to_string(),
            }),
        }
    }
}

/// Lifecycle state of a provisioned experiment environment.
///
/// Code 4 is unassigned in the platform's status table; the gap is part of
/// the contract and maps to the empty label like any other unknown code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperimentStatus {
    Init,
    Starting,
    Running,
    Stopped,
    Failed,
    RollingBack,
    RolledBack,
    UnexpectedError,
}

impl ExperimentStatus {
    pub const ALL: [Self; 8] = [
        Self::Init,
        Self::Starting,
        Self::Running,
        Self::Stopped,
        Self::Failed,
        Self::RollingBack,
        Self::RolledBack,
        Self::UnexpectedError,
    ];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Init => 0,
            Self::Starting => 1,
            Self::Running => 2,
            Self::Stopped => 3,
            Self::Failed => 5,
            Self::RollingBack => 6,
            Self::RolledBack => 7,
            Self::UnexpectedError => 8,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Starting => "starting",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Failed => "failed",
            Self::RollingBack => "rolling_back",
            Self::RolledBack => "rolled_back",
            Self::UnexpectedError => "unexpected_error",
        }
    }

    /// Starting and running environments hold cloud resources.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Starting | Self::Running)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Stopped | Self::Failed | Self::RolledBack | Self::UnexpectedError
        )
    }
}

impl CodeLabel for ExperimentStatus {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Init),
            1 => Some(Self::Starting),
            2 => Some(Self::Running),
            3 => Some(Self::Stopped),
            5 => Some(Self::Failed),
            6 => Some(Self::RollingBack),
            7 => Some(Self::RolledBack),
            8 => Some(Self::UnexpectedError),
            _ => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Init => "EXPERIMENT_STATUS.INIT",
            Self::Starting => "EXPERIMENT_STATUS.STARTING",
            Self::Running => "EXPERIMENT_STATUS.RUNNING",
            Self::Stopped => "EXPERIMENT_STATUS.STOPPED",
            Self::Failed => "EXPERIMENT_STATUS.FAILED",
            Self::RollingBack => "EXPERIMENT_STATUS.ROLL_BACKING",
            Self::RolledBack => "EXPERIMENT_STATUS.ROLL_BACKED",
            // key spelling matches the platform's locale files
            Self::UnexpectedError => "EXPERIMENT_STATUS.UNEXPCTED_ERROR",
        }
    }
}

impl fmt::Display for ExperimentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExperimentStatus {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "init" => Ok(Self::Init),
            "starting" => Ok(Self::Starting),
            "running" => Ok(Self::Running),
            "stopped" => Ok(Self::Stopped),
            "failed" => Ok(Self::Failed),
            "rolling_back" | "rollingback" => Ok(Self::RollingBack),
            "rolled_back" | "rolledback" => Ok(Self::RolledBack),
            "unexpected_error" | "unexpectederror" => Ok(Self::UnexpectedError),
            other => Err(PodiumError::UnknownName {
                domain: "experiment status",
                name: other.to_string(),
            }),
        }
    }
}

/// Kind of organization attached to an event.
///
/// Codes start at 1; form posts deliver them as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrganizationType {
    Organizer,
    Partner,
}

impl OrganizationType {
    pub const ALL: [Self; 2] = [Self::Organizer, Self::Partner];

    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Organizer => 1,
            Self::Partner => 2,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organizer => "organizer",
            Self::Partner => "partner",
        }
    }

    /// Decode a code that arrived as a form string.
    #[must_use]
    pub fn from_form_value(text: &str) -> Option<Self> {
        Self::from_code(coerce_int(text))
    }
}

impl CodeLabel for OrganizationType {
    fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Organizer),
            2 => Some(Self::Partner),
            _ => None,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Organizer => "ORGANIZATION_TYPE.ORGANIZER",
            Self::Partner => "ORGANIZATION_TYPE.PARTNER",
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrganizationType {
    type Err = PodiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "organizer" => Ok(Self::Organizer),
            "partner" => Ok(Self::Partner),
            other => Err(PodiumError::UnknownName {
                domain: "organization type",
                name: other.to_string(),
            }),
        }
    }
}
