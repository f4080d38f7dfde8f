//! Lead persistence seam

use async_trait::async_trait;

use crate::error::Result;
use crate::lead::Lead;

/// Lead persistence owned by the host application
///
/// The engine fetches a lead, qualifies it, and writes the updated record
/// back. It never enumerates or deletes leads.
///
/// # Example
///
/// ```ignore
/// let store: Arc<dyn LeadStore> = Arc::new(PostgresLeadStore::new(pool));
/// let lead = store.get("lead-42").await?;
/// ```
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Fetch a lead by id
    async fn get(&self, id: &str) -> Result<Option<Lead>>;

    /// Persist an updated lead record
    async fn put(&self, lead: Lead) -> Result<()>;
}
