use std::sync::Arc;

use storage::Database;

use crate::clients::identity::IdentityProvider;
use crate::clients::images::ImageStore;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub identity: Arc<dyn IdentityProvider>,
    pub images: Arc<dyn ImageStore>,
    pub allowed_email_domain: String,
}
