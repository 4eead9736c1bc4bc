use platebook_domain::PageDocument;
use tracing::{error, info, warn};

use crate::{ApplicationError, PageSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrigin {
    Remote,
    Embedded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPages {
    pub origin: PageOrigin,
    pub document: PageDocument,
}

/// Remote data resource first, inline document data second.
pub struct PageLoader {
    remote: Box<dyn PageSource + Send>,
    embedded: Box<dyn PageSource + Send>,
}

impl PageLoader {
    pub fn new(
        remote: Box<dyn PageSource + Send>,
        embedded: Box<dyn PageSource + Send>,
    ) -> Self {
        Self { remote, embedded }
    }

    pub fn load_remote(&self) -> Result<PageDocument, ApplicationError> {
        self.remote.load_pages()
    }

    pub fn load_embedded(&self) -> Result<PageDocument, ApplicationError> {
        self.embedded.load_pages()
    }

    pub fn load(&self) -> Result<LoadedPages, ApplicationError> {
        let remote_error = match self.load_remote() {
            Ok(document) => {
                info!(
                    source = %self.remote.describe(),
                    pages = document.pages.len(),
                    "loaded pages"
                );
                return Ok(LoadedPages {
                    origin: PageOrigin::Remote,
                    document,
                });
            }
            Err(error) => error,
        };
        warn!(
            source = %self.remote.describe(),
            error = %remote_error,
            "fetch failed, falling back to inline data"
        );

        match self.load_embedded() {
            Ok(document) => {
                info!(
                    source = %self.embedded.describe(),
                    pages = document.pages.len(),
                    "loaded inline pages"
                );
                Ok(LoadedPages {
                    origin: PageOrigin::Embedded,
                    document,
                })
            }
            Err(embedded_error) => {
                error!(
                    source = %self.embedded.describe(),
                    error = %embedded_error,
                    "inline data unavailable"
                );
                Err(ApplicationError::Unavailable {
                    remote: Box::new(remote_error),
                    embedded: Box::new(embedded_error),
                })
            }
        }
    }
}
