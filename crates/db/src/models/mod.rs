//! Row structs and DTOs, one module per table.

pub mod case;
pub mod case_handler;
pub mod deadline;
pub mod notification;
pub mod opinion;
pub mod party;
pub mod recovery_activity;
pub mod todo;
pub mod user;

pub use case::{Case, CreateCase, UpdateCase};
pub use case_handler::{AssignHandler, CaseHandler};
pub use deadline::{CreateDeadline, Deadline, UpdateDeadline};
pub use notification::{CreateNotification, Notification};
pub use opinion::{CreateOpinion, Opinion};
pub use party::{CreateParty, Party, UpdateParty};
pub use recovery_activity::{CreateRecoveryActivity, RecoveryActivity};
pub use todo::{CreateTodo, Todo, UpdateTodo};
pub use user::{CreateUser, UpdateUser, User};
