mod confirm_self_destruct;
mod create_gadget;
mod decommission_gadget;
mod dto;
mod initiate_self_destruct;
mod list_gadgets;
mod update_gadget_status;

pub use confirm_self_destruct::confirm_self_destruct_handler;
pub use create_gadget::create_gadget_handler;
pub use decommission_gadget::decommission_gadget_handler;
pub use dto::{
    ConfirmSelfDestructRequest, GadgetListItemResponse, GadgetResponse, ListGadgetsParams,
    SelfDestructTicketResponse, UpdateGadgetStatusRequest,
};
pub use initiate_self_destruct::initiate_self_destruct_handler;
pub use list_gadgets::list_gadgets_handler;
pub use update_gadget_status::update_gadget_status_handler;

// Exposed for the OpenAPI document.
pub use confirm_self_destruct::__path_confirm_self_destruct_handler;
pub use create_gadget::__path_create_gadget_handler;
pub use decommission_gadget::__path_decommission_gadget_handler;
pub use initiate_self_destruct::__path_initiate_self_destruct_handler;
pub use list_gadgets::__path_list_gadgets_handler;
pub use update_gadget_status::__path_update_gadget_status_handler;
