use async_trait::async_trait;

use crate::gadget::application::domain::display::{format_display_line, roll_success_probability};
use crate::gadget::application::domain::random::SharedRng;
use crate::gadget::application::ports::incoming::use_cases::{
    GadgetListItem, ListGadgetsError, ListGadgetsQuery, ListGadgetsUseCase,
};
use crate::gadget::application::ports::outgoing::GadgetQuery;

#[derive(Clone)]
pub struct ListGadgetsService<Q>
where
    Q: GadgetQuery,
{
    query: Q,
    rng: SharedRng,
}

impl<Q> ListGadgetsService<Q>
where
    Q: GadgetQuery,
{
    pub fn new(query: Q, rng: SharedRng) -> Self {
        Self { query, rng }
    }
}

#[async_trait]
impl<Q> ListGadgetsUseCase for ListGadgetsService<Q>
where
    Q: GadgetQuery,
{
    async fn execute(
        &self,
        query: ListGadgetsQuery,
    ) -> Result<Vec<GadgetListItem>, ListGadgetsError> {
        let gadgets = self
            .query
            .list_by_statuses(query.owner(), query.statuses())
            .await
            .map_err(|e| ListGadgetsError::QueryFailed(e.to_string()))?;

        let mut rng = self.rng.lock().await;

        let items = gadgets
            .into_iter()
            .map(|gadget| {
                let success_probability = roll_success_probability(&mut *rng);
                GadgetListItem {
                    display: format_display_line(&gadget.name, success_probability),
                    success_probability,
                    gadget,
                }
            })
            .collect();

        Ok(items)
    }
}
