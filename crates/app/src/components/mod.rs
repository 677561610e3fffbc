mod badges;
mod user_form;
mod workflow_form;
mod workflow_list;

pub use badges::{role_badge_variant, status_badge_variant, RoleBadge, StatusBadge};
pub use user_form::CreateUserDialog;
pub use workflow_form::CreateWorkflowDialog;
pub use workflow_list::{WorkflowCard, WorkflowCardList, WorkflowTable};
