//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod case_handler_repo;
pub mod case_repo;
pub mod deadline_repo;
pub mod notification_repo;
pub mod opinion_repo;
pub mod party_repo;
pub mod recovery_activity_repo;
pub mod todo_repo;
pub mod user_repo;

pub use case_handler_repo::CaseHandlerRepo;
pub use case_repo::CaseRepo;
pub use deadline_repo::DeadlineRepo;
pub use notification_repo::NotificationRepo;
pub use opinion_repo::OpinionRepo;
pub use party_repo::PartyRepo;
pub use recovery_activity_repo::RecoveryActivityRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
