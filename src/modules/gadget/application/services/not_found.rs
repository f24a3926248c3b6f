use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::gadget::application::ports::outgoing::GadgetQuery;

/// Callers only ever see "not found"; this records which case it really was.
pub(super) async fn log_not_found_cause<Q>(
    query: &Q,
    operation: &'static str,
    owner: UserId,
    gadget_id: Uuid,
) where
    Q: GadgetQuery + ?Sized,
{
    match query.find_owner_and_status(gadget_id).await {
        Ok(None) => {
            debug!(operation, user_id = %owner, gadget_id = %gadget_id, "Gadget does not exist");
        }
        Ok(Some(location)) if location.owner != owner => {
            warn!(
                operation,
                user_id = %owner,
                gadget_id = %gadget_id,
                "Gadget belongs to another user"
            );
        }
        Ok(Some(location)) if location.status.is_terminal() => {
            debug!(
                operation,
                user_id = %owner,
                gadget_id = %gadget_id,
                status = %location.status,
                "Gadget is in a terminal state"
            );
        }
        Ok(Some(location)) => {
            // Row matched on re-read; it changed between the write and this lookup
            debug!(
                operation,
                user_id = %owner,
                gadget_id = %gadget_id,
                status = %location.status,
                "Gadget changed concurrently"
            );
        }
        Err(e) => {
            debug!(
                operation,
                gadget_id = %gadget_id,
                error = %e,
                "Could not diagnose missing gadget"
            );
        }
    }
}
