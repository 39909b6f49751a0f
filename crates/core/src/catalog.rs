//! Static seed catalog: demo accounts, the A-license progression curriculum,
//! and badge definitions.
//!
//! Pure data with no database access. The seed stages in `skymentor-db`
//! insert exactly what is listed here, and verification compares against
//! the volumes derived from it.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::labels::{Category, ComfortLevel, Role};

// ---------------------------------------------------------------------------
// Demo accounts
// ---------------------------------------------------------------------------

/// Shared password for every demo account.
pub const DEMO_PASSWORD: &str = "password123";

/// A demo user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoUser {
    pub role: Role,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub license: &'static str,
    pub jumps: i32,
}

/// One demo account per role, in insertion order.
pub const DEMO_USERS: [DemoUser; 3] = [
    DemoUser {
        role: Role::Mentor,
        name: "Alex Rodriguez",
        email: "mentor@test.com",
        phone: "+1-555-0101",
        license: "D-12345",
        jumps: 2500,
    },
    DemoUser {
        role: Role::Mentee,
        name: "Sarah Johnson",
        email: "mentee@test.com",
        phone: "+1-555-0102",
        license: "A-67890",
        jumps: 25,
    },
    DemoUser {
        role: Role::Admin,
        name: "Mike Admin",
        email: "admin@test.com",
        phone: "+1-555-0103",
        license: "D-54321",
        jumps: 5000,
    },
];

/// Mentor profile attached to a demo account that can supervise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentorProfileSeed {
    pub role: Role,
    pub ratings: &'static str,
    pub coach_number: &'static str,
    pub disciplines: &'static [&'static str],
    pub max_concurrent_mentees: i32,
    pub seniority_score: i32,
    pub dz_endorsement: bool,
}

/// The admin also gets a mentor profile so it can supervise.
pub const MENTOR_PROFILES: [MentorProfileSeed; 2] = [
    MentorProfileSeed {
        role: Role::Mentor,
        ratings: "AFF-I, Tandem, Coach",
        coach_number: "C-12345",
        disciplines: &["AFF", "Tandem", "Coaching"],
        max_concurrent_mentees: 3,
        seniority_score: 85,
        dz_endorsement: true,
    },
    MentorProfileSeed {
        role: Role::Admin,
        ratings: "AFF-I, Tandem, Coach, Instructor Examiner",
        coach_number: "IE-98765",
        disciplines: &["AFF", "Tandem", "Coaching", "Camera"],
        max_concurrent_mentees: 5,
        seniority_score: 100,
        dz_endorsement: true,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenteeProfileSeed {
    pub goals: &'static str,
    pub comfort_level: ComfortLevel,
    pub canopy_size: i32,
    pub last_currency_date: Option<NaiveDate>,
}

pub fn mentee_profile() -> MenteeProfileSeed {
    MenteeProfileSeed {
        goals: "Complete AFF program and get A-license",
        comfort_level: ComfortLevel::Medium,
        canopy_size: 280,
        last_currency_date: NaiveDate::from_ymd_opt(2024, 12, 15),
    }
}

// ---------------------------------------------------------------------------
// Progression curriculum
// ---------------------------------------------------------------------------

/// A curriculum milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurriculumStep {
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub min_jumps_gate: i32,
}

const fn step(
    code: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    min_jumps_gate: i32,
) -> CurriculumStep {
    CurriculumStep {
        code,
        title,
        description,
        category,
        min_jumps_gate,
    }
}

/// The A-license progression, grouped by category with ascending jump gates.
#[rustfmt::skip]
pub const CURRICULUM: [CurriculumStep; 24] = [
    step("2W-01", "Basic 2-Way Exit", "Learn synchronized exits with partner for stable relative work", Category::TwoWay, 26),
    step("2W-02", "2-Way Sequential", "Complete 2-point sequential moves with partner", Category::TwoWay, 30),
    step("3W-01", "Star Exit", "Master 3-way star exit from aircraft", Category::ThreeWay, 35),
    step("3W-02", "Sidebody Donut", "Build and hold sidebody donut formation", Category::ThreeWay, 40),
    step("3W-03", "Open Accordion", "Transition through open accordion formation", Category::ThreeWay, 45),
    step("3W-04", "Cat to Bipole", "Execute cat to bipole transition smoothly", Category::ThreeWay, 50),
    step("3W-05", "3-Way Sequential", "Complete 3-point sequential with 2 partners", Category::ThreeWay, 55),
    step("3W-06", "3-Way Random", "Complete random 3-way formations from draw", Category::ThreeWay, 60),
    step("4W-01", "Star to Diamond", "Transition from star to diamond formation", Category::FourWay, 65),
    step("4W-02", "Meeker Exit", "Execute proper 4-way meeker exit", Category::FourWay, 68),
    step("4W-03", "Compressed Accordion", "Build compressed accordion with 3 partners", Category::FourWay, 71),
    step("4W-04", "Bipole to Donut", "Smooth transition from bipole to donut", Category::FourWay, 74),
    step("4W-05", "Sidebody Box", "Form and maintain sidebody box formation", Category::FourWay, 77),
    step("4W-06", "Murphy Flake", "Complete murphy flake with proper grips", Category::FourWay, 80),
    step("4W-07", "4-Way Sequential", "Execute 4-point sequential moves", Category::FourWay, 83),
    step("4W-08", "Zipper to Bow", "Transition from zipper to bow formation", Category::FourWay, 86),
    step("4W-09", "Block Sequence", "Complete 2-block sequence with team", Category::FourWay, 90),
    step("4W-10", "4-Way Competition", "Perform competition-level 4-way sequences", Category::FourWay, 95),
    step("CAN-01", "Accuracy Landing", "Land within 5 meters of target consistently", Category::Canopy, 30),
    step("CAN-02", "Traffic Pattern", "Navigate busy pattern with proper spacing", Category::Canopy, 40),
    step("CAN-03", "Emergency Procedures", "Demonstrate malfunction response procedures", Category::Canopy, 50),
    step("SAF-01", "Altitude Awareness", "Demonstrate proper altitude discipline", Category::Safety, 26),
    step("SAF-02", "Collision Avoidance", "Show effective air traffic awareness", Category::Safety, 35),
    step("SAF-03", "Emergency Response", "Execute emergency action plan correctly", Category::Safety, 45),
];

/// Number of curriculum steps in `category`.
pub fn steps_in(category: Category) -> usize {
    CURRICULUM.iter().filter(|s| s.category == category).count()
}

/// Reference data stored alongside each step: its 1-based position within
/// its category and the code of the step before it, if any.
pub fn step_references(index: usize) -> serde_json::Value {
    let Some(current) = CURRICULUM.get(index) else {
        return serde_json::Value::Null;
    };
    let earlier: Vec<&CurriculumStep> = CURRICULUM[..index]
        .iter()
        .filter(|s| s.category == current.category)
        .collect();

    serde_json::json!({
        "sequence": earlier.len() + 1,
        "prerequisite": earlier.last().map(|s| s.code),
    })
}

// ---------------------------------------------------------------------------
// Badges
// ---------------------------------------------------------------------------

/// Machine-checkable award rule, stored as the badge's criteria blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum BadgeCriteria {
    StepsCompleted { category: Category, count: u32 },
    AllSteps { categories: &'static [Category] },
    StepsWithinDays { steps: u32, days: u32 },
    JumpsLogged { count: u32 },
    DistinctMentorFeedback { mentors: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeSeed {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub criteria: BadgeCriteria,
}

const FORMATION_CATEGORIES: &[Category] =
    &[Category::TwoWay, Category::ThreeWay, Category::FourWay];

pub const BADGES: [BadgeSeed; 10] = [
    BadgeSeed {
        code: "FIRST_2WAY",
        name: "First 2-Way",
        description: "Complete your first 2-way formation",
        criteria: BadgeCriteria::StepsCompleted {
            category: Category::TwoWay,
            count: 1,
        },
    },
    BadgeSeed {
        code: "FIRST_3WAY",
        name: "First 3-Way",
        description: "Complete your first 3-way formation",
        criteria: BadgeCriteria::StepsCompleted {
            category: Category::ThreeWay,
            count: 1,
        },
    },
    BadgeSeed {
        code: "FIRST_4WAY",
        name: "First 4-Way",
        description: "Complete your first 4-way formation",
        criteria: BadgeCriteria::StepsCompleted {
            category: Category::FourWay,
            count: 1,
        },
    },
    BadgeSeed {
        code: "FORMATION_MASTER",
        name: "Formation Master",
        description: "Complete all formation progression steps",
        criteria: BadgeCriteria::AllSteps {
            categories: FORMATION_CATEGORIES,
        },
    },
    BadgeSeed {
        code: "CANOPY_PILOT",
        name: "Canopy Pilot",
        description: "Master all canopy control skills",
        criteria: BadgeCriteria::AllSteps {
            categories: &[Category::Canopy],
        },
    },
    BadgeSeed {
        code: "SAFETY_CONSCIOUS",
        name: "Safety Conscious",
        description: "Complete all safety training",
        criteria: BadgeCriteria::AllSteps {
            categories: &[Category::Safety],
        },
    },
    BadgeSeed {
        code: "A_LICENSE_READY",
        name: "A-License Ready",
        description: "Complete entire A-license curriculum",
        criteria: BadgeCriteria::AllSteps {
            categories: &Category::ALL,
        },
    },
    BadgeSeed {
        code: "QUICK_LEARNER",
        name: "Quick Learner",
        description: "Complete 5 steps in one week",
        criteria: BadgeCriteria::StepsWithinDays { steps: 5, days: 7 },
    },
    BadgeSeed {
        code: "DEDICATED_STUDENT",
        name: "Dedicated Student",
        description: "Complete 20 jumps in training",
        criteria: BadgeCriteria::JumpsLogged { count: 20 },
    },
    BadgeSeed {
        code: "MENTOR_FAVORITE",
        name: "Mentor's Favorite",
        description: "Receive positive feedback from 3 different mentors",
        criteria: BadgeCriteria::DistinctMentorFeedback { mentors: 3 },
    },
];

// ---------------------------------------------------------------------------
// Sample activity
// ---------------------------------------------------------------------------

/// Saturday, with Sunday as day 0.
pub const SAMPLE_DAY_OF_WEEK: i32 = 6;

/// A recurring availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub role: Role,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Availability for the demo mentor and mentee on [`SAMPLE_DAY_OF_WEEK`].
pub fn sample_availability() -> [SampleWindow; 2] {
    [
        SampleWindow {
            role: Role::Mentor,
            start: hm(8, 0),
            end: hm(17, 0),
        },
        SampleWindow {
            role: Role::Mentee,
            start: hm(9, 0),
            end: hm(16, 0),
        },
    ]
}

/// Start and end of the sample session block, held the day after seeding.
pub fn sample_session_hours() -> (NaiveTime, NaiveTime) {
    (hm(10, 0), hm(15, 0))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn one_demo_user_per_role() {
        let roles: HashSet<Role> = DEMO_USERS.iter().map(|u| u.role).collect();
        assert_eq!(roles.len(), 3);
        let emails: HashSet<&str> = DEMO_USERS.iter().map(|u| u.email).collect();
        assert_eq!(emails.len(), 3, "emails must be unique");
    }

    #[test]
    fn mentor_profiles_only_for_supervising_roles() {
        assert!(MENTOR_PROFILES.iter().all(|p| p.role.can_supervise()));
    }

    #[test]
    fn curriculum_volumes_per_category() {
        assert_eq!(CURRICULUM.len(), 24);
        assert_eq!(steps_in(Category::TwoWay), 2);
        assert_eq!(steps_in(Category::ThreeWay), 6);
        assert_eq!(steps_in(Category::FourWay), 10);
        assert_eq!(steps_in(Category::Canopy), 3);
        assert_eq!(steps_in(Category::Safety), 3);
    }

    #[test]
    fn jump_gates_ascend_within_each_category() {
        for category in Category::ALL {
            let gates: Vec<i32> = CURRICULUM
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.min_jumps_gate)
                .collect();
            assert!(
                gates.windows(2).all(|w| w[0] < w[1]),
                "{category} gates not ascending: {gates:?}"
            );
        }
    }

    #[test]
    fn step_codes_are_unique() {
        let codes: HashSet<&str> = CURRICULUM.iter().map(|s| s.code).collect();
        assert_eq!(codes.len(), CURRICULUM.len());
    }

    #[test]
    fn references_chain_within_category() {
        assert_eq!(
            step_references(0),
            serde_json::json!({"sequence": 1, "prerequisite": null})
        );
        assert_eq!(
            step_references(1),
            serde_json::json!({"sequence": 2, "prerequisite": "2W-01"})
        );
        // First canopy step has no prerequisite even though 4-way steps precede it.
        assert_eq!(
            step_references(18),
            serde_json::json!({"sequence": 1, "prerequisite": null})
        );
        assert!(step_references(99).is_null());
    }

    #[test]
    fn ten_badges_with_unique_codes() {
        let codes: HashSet<&str> = BADGES.iter().map(|b| b.code).collect();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn badge_criteria_serialize_with_rule_tag() {
        let json = serde_json::to_value(BADGES[0].criteria).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rule": "steps_completed", "category": "2way", "count": 1})
        );

        let json = serde_json::to_value(BADGES[3].criteria).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rule": "all_steps", "categories": ["2way", "3way", "4way"]})
        );
    }

    #[test]
    fn sample_windows_are_well_ordered() {
        for window in sample_availability() {
            assert!(window.start < window.end);
        }
        let (start, end) = sample_session_hours();
        assert!(start < end);
    }
}
