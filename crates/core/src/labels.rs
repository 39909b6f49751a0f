//! Closed label sets backing the PostgreSQL enumerated types.
//!
//! Each set is declared once here and used both to generate the
//! `CREATE TYPE ... AS ENUM` statements and to bind typed values in seed
//! inserts, so the storage layer and the Rust side cannot drift apart.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Enumerated type names
// ---------------------------------------------------------------------------

pub const TYPE_ROLE: &str = "role";
pub const TYPE_STATUS: &str = "status";
pub const TYPE_COMFORT_LEVEL: &str = "comfort_level";
pub const TYPE_CATEGORY: &str = "category";

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

pub const ROLE_MENTOR: &str = "mentor";
pub const ROLE_MENTEE: &str = "mentee";
pub const ROLE_ADMIN: &str = "admin";

/// All valid role labels, in declaration order.
pub const VALID_ROLES: &[&str] = &[ROLE_MENTOR, ROLE_MENTEE, ROLE_ADMIN];

/// Account role. Set once at creation; there is no update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mentor,
    Mentee,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Mentor, Role::Mentee, Role::Admin];

    /// Return the database label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mentor => ROLE_MENTOR,
            Self::Mentee => ROLE_MENTEE,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Parse from a database label, returning an error for unknown roles.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            ROLE_MENTOR => Ok(Self::Mentor),
            ROLE_MENTEE => Ok(Self::Mentee),
            ROLE_ADMIN => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!(
                "Unknown role: '{other}'. Valid roles: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    /// Whether accounts with this role carry a mentor profile.
    pub fn can_supervise(&self) -> bool {
        matches!(self, Self::Mentor | Self::Admin)
    }
}

// ---------------------------------------------------------------------------
// Status (attendance requests and assignments)
// ---------------------------------------------------------------------------

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_DECLINED: &str = "declined";
pub const STATUS_CANCELLED: &str = "cancelled";

pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_DECLINED,
    STATUS_CANCELLED,
];

/// Lifecycle status shared by attendance requests and assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    Confirmed,
    Declined,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Pending,
        Status::Confirmed,
        Status::Declined,
        Status::Cancelled,
    ];

    /// Return the database label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => STATUS_PENDING,
            Self::Confirmed => STATUS_CONFIRMED,
            Self::Declined => STATUS_DECLINED,
            Self::Cancelled => STATUS_CANCELLED,
        }
    }

    /// Parse from a database label, returning an error for unknown statuses.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_PENDING => Ok(Self::Pending),
            STATUS_CONFIRMED => Ok(Self::Confirmed),
            STATUS_DECLINED => Ok(Self::Declined),
            STATUS_CANCELLED => Ok(Self::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Comfort level
// ---------------------------------------------------------------------------

pub const COMFORT_LOW: &str = "low";
pub const COMFORT_MEDIUM: &str = "medium";
pub const COMFORT_HIGH: &str = "high";

pub const VALID_COMFORT_LEVELS: &[&str] = &[COMFORT_LOW, COMFORT_MEDIUM, COMFORT_HIGH];

/// Self-reported comfort level of a mentee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl ComfortLevel {
    pub const ALL: [ComfortLevel; 3] = [
        ComfortLevel::Low,
        ComfortLevel::Medium,
        ComfortLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => COMFORT_LOW,
            Self::Medium => COMFORT_MEDIUM,
            Self::High => COMFORT_HIGH,
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            COMFORT_LOW => Ok(Self::Low),
            COMFORT_MEDIUM => Ok(Self::Medium),
            COMFORT_HIGH => Ok(Self::High),
            other => Err(CoreError::Validation(format!(
                "Unknown comfort level: '{other}'. Valid levels: {}",
                VALID_COMFORT_LEVELS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Category (progression steps)
// ---------------------------------------------------------------------------

pub const CATEGORY_2WAY: &str = "2way";
pub const CATEGORY_3WAY: &str = "3way";
pub const CATEGORY_4WAY: &str = "4way";
pub const CATEGORY_CANOPY: &str = "canopy";
pub const CATEGORY_SAFETY: &str = "safety";

pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_2WAY,
    CATEGORY_3WAY,
    CATEGORY_4WAY,
    CATEGORY_CANOPY,
    CATEGORY_SAFETY,
];

/// Curriculum category of a progression step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "2way")]
    TwoWay,
    #[serde(rename = "3way")]
    ThreeWay,
    #[serde(rename = "4way")]
    FourWay,
    #[serde(rename = "canopy")]
    Canopy,
    #[serde(rename = "safety")]
    Safety,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::TwoWay,
        Category::ThreeWay,
        Category::FourWay,
        Category::Canopy,
        Category::Safety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoWay => CATEGORY_2WAY,
            Self::ThreeWay => CATEGORY_3WAY,
            Self::FourWay => CATEGORY_4WAY,
            Self::Canopy => CATEGORY_CANOPY,
            Self::Safety => CATEGORY_SAFETY,
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            CATEGORY_2WAY => Ok(Self::TwoWay),
            CATEGORY_3WAY => Ok(Self::ThreeWay),
            CATEGORY_4WAY => Ok(Self::FourWay),
            CATEGORY_CANOPY => Ok(Self::Canopy),
            CATEGORY_SAFETY => Ok(Self::Safety),
            other => Err(CoreError::Validation(format!(
                "Unknown category: '{other}'. Valid categories: {}",
                VALID_CATEGORIES.join(", ")
            ))),
        }
    }

    /// Formation categories (as opposed to canopy and safety skills).
    pub fn is_formation(&self) -> bool {
        matches!(self, Self::TwoWay | Self::ThreeWay | Self::FourWay)
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

impl_display!(Role, Status, ComfortLevel, Category);

// ---------------------------------------------------------------------------
// Enumerated type catalog
// ---------------------------------------------------------------------------

/// A named PostgreSQL enumerated type and its labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumType {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

/// Every enumerated type, in creation order.
pub const ENUM_TYPES: &[EnumType] = &[
    EnumType {
        name: TYPE_ROLE,
        labels: VALID_ROLES,
    },
    EnumType {
        name: TYPE_STATUS,
        labels: VALID_STATUSES,
    },
    EnumType {
        name: TYPE_COMFORT_LEVEL,
        labels: VALID_COMFORT_LEVELS,
    },
    EnumType {
        name: TYPE_CATEGORY,
        labels: VALID_CATEGORIES,
    },
];
