//! Dependency injection module using Shaku.
//!
//! A single module wires the Postgres pool, the repositories and the
//! services. The pool is opened before the module is built and handed in
//! as component parameters, so every repository shares it.

use pizza_repository::{DatabasePool, PgDishRepository, PgUserRepository};
use pizza_service::{DishServiceComponent, UserServiceComponent};
use shaku::module;
use std::sync::Arc;

// Application module holding every runtime component.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            PgUserRepository,
            PgDishRepository,
            UserServiceComponent,
            DishServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module over an open pool.
pub fn build_app_module(db_pool: &DatabasePool) -> Arc<AppModule> {
    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(db_pool.parameters())
        .build();

    Arc::new(module)
}
