use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::catalog::Catalog;
use crate::store::DocumentStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Auth provider. Default: `SupabaseAuth`.
    pub auth: Arc<dyn AuthProvider>,
    /// Document store. `PgStore` when `DATABASE_URL` is set, otherwise `MemoryStore`.
    pub store: Arc<dyn DocumentStore>,
    pub catalog: Arc<Catalog>,
}
