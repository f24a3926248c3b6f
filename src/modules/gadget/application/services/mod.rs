mod confirm_self_destruct_service;
mod create_gadget_service;
mod decommission_gadget_service;
mod initiate_self_destruct_service;
mod list_gadgets_service;
mod not_found;
mod update_gadget_status_service;

pub use confirm_self_destruct_service::ConfirmSelfDestructService;
pub use create_gadget_service::CreateGadgetService;
pub use decommission_gadget_service::DecommissionGadgetService;
pub use initiate_self_destruct_service::InitiateSelfDestructService;
pub use list_gadgets_service::ListGadgetsService;
pub use update_gadget_status_service::UpdateGadgetStatusService;
