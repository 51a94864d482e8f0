use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::TabRepository;
use crate::domain::redirect::Tab;
use crate::schema::tab;

use super::models::TabRow;

pub struct DieselTabRepository {
    pool: DbPool,
}

impl DieselTabRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl TabRepository for DieselTabRepository {
    fn find_by_id(&self, id: i32) -> Result<Option<Tab>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = tab::table
            .find(id)
            .select(TabRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Tab::from))
    }
}
