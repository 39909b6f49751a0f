pub mod assignment_repo;
pub mod attendance_request_repo;
pub mod audit_event_repo;
pub mod availability_repo;
pub mod badge_repo;
pub mod mentee_repo;
pub mod mentor_repo;
pub mod preference_repo;
pub mod progression_step_repo;
pub mod session_block_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use attendance_request_repo::AttendanceRequestRepo;
pub use audit_event_repo::AuditEventRepo;
pub use availability_repo::AvailabilityRepo;
pub use badge_repo::BadgeRepo;
pub use mentee_repo::MenteeRepo;
pub use mentor_repo::MentorRepo;
pub use preference_repo::PreferenceRepo;
pub use progression_step_repo::ProgressionStepRepo;
pub use session_block_repo::SessionBlockRepo;
pub use user_repo::UserRepo;
