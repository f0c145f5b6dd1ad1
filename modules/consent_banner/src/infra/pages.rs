//! Page directory implementations

use crate::contract::Page;
use crate::domain::repository::PageDirectory;
use anyhow::Result;
use async_trait::async_trait;

/// Page directory over a fixed page list. Hosts with a real CMS swap in
/// their own implementation.
#[derive(Clone, Default)]
pub struct StaticPageDirectory {
    pages: Vec<Page>,
}

impl StaticPageDirectory {
    pub fn new(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

#[async_trait]
impl PageDirectory for StaticPageDirectory {
    async fn list_pages(&self) -> Result<Vec<Page>> {
        Ok(self.pages.clone())
    }
}
