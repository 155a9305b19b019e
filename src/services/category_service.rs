use std::sync::Arc;

use crate::database::TriviaStore;
use crate::dto::category_dto::CategoryMap;
use crate::error::Result;

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<dyn TriviaStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Category labels keyed by id, read fresh from the datastore.
    pub async fn category_map(&self) -> Result<CategoryMap> {
        let categories = self.store.all_categories().await?;
        Ok(categories
            .into_iter()
            .map(|c| (c.id, c.category_type))
            .collect())
    }
}
