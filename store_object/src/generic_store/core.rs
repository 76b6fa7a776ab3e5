use crate::clock::{Clock, SystemClock};
use crate::traits::entity::Entity;
use crate::DbPool;
use std::marker::PhantomData;
use std::sync::Arc;

/// Generic repository that implements every `Repository` operation for an entity
#[derive(Clone)]
pub struct GenericRepository<T: Entity> {
    pub(crate) db_pool: DbPool,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: Entity> std::fmt::Debug for GenericRepository<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericRepository")
            .field("table", &T::table_name())
            .field("clock", &self.clock)
            .finish()
    }
}

impl<T: Entity> GenericRepository<T> {
    /// Repository stamping audit fields with the system clock
    pub fn new(db_pool: DbPool) -> Self {
        Self::with_clock(db_pool, Arc::new(SystemClock))
    }

    pub fn with_clock(db_pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self {
            db_pool,
            clock,
            _phantom: PhantomData,
        }
    }

    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }
}
