use crate::core::models::interaction::InteractionLog;

/// Narrows interaction histories for display and aggregation.
pub struct InteractionService;

impl InteractionService {
    /// Filter a history down to the interactions for one item.
    ///
    /// - `None` criterion: the input comes back unchanged — same elements,
    ///   same order, no filtering applied.
    /// - `Some(k)`: exactly the entries whose `item_id` equals `k`, in
    ///   their original relative order. `learner_id` is never consulted.
    ///
    /// `item_id = 0` is an ordinary value, not "unset"; absence is carried
    /// by the `Option`. An empty input or no match yields an empty vector,
    /// never an error.
    pub fn filter_by_item(
        &self,
        interactions: Vec<InteractionLog>,
        item_id: Option<i64>,
    ) -> Vec<InteractionLog> {
        match item_id {
            None => interactions,
            Some(item_id) => interactions
                .into_iter()
                .filter(|log| log.item_id == item_id)
                .collect(),
        }
    }
}
