mod confirm_self_destruct;
mod create_gadget;
mod decommission_gadget;
mod initiate_self_destruct;
mod list_gadgets;
mod update_gadget_status;

pub use confirm_self_destruct::{
    ConfirmSelfDestructCommand, ConfirmSelfDestructCommandError, ConfirmSelfDestructError,
    ConfirmSelfDestructUseCase,
};
pub use create_gadget::{CreateGadgetError, CreateGadgetUseCase, MAX_NAME_ATTEMPTS};
pub use decommission_gadget::{DecommissionGadgetError, DecommissionGadgetUseCase};
pub use initiate_self_destruct::{
    InitiateSelfDestructError, InitiateSelfDestructUseCase, SelfDestructTicket,
};
pub use list_gadgets::{GadgetListItem, ListGadgetsError, ListGadgetsQuery, ListGadgetsUseCase};
pub use update_gadget_status::{
    UpdateGadgetStatusCommand, UpdateGadgetStatusError, UpdateGadgetStatusUseCase,
};
