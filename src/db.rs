use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

use crate::config::DbSettings;

pub type DbPool = Pool<ConnectionManager<PgConnection>>;

pub fn create_pool(settings: &DbSettings) -> Result<DbPool, r2d2::Error> {
    let manager = ConnectionManager::<PgConnection>::new(&settings.database_url);
    Pool::builder()
        .max_size(settings.max_pool_size)
        .connection_timeout(settings.connection_timeout)
        .build(manager)
}
