use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::import::ImportSummary;
use crate::core::command::{Command, CommandError};

pub struct ImportBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ImportBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ImportBooksCommandRequest {
    pub path: PathBuf,
}

impl ImportBooksCommandRequest {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImportBooksCommandResponse {
    pub summary: ImportSummary,
}

impl<'a> Command<ImportBooksCommandRequest, ImportBooksCommandResponse> for ImportBooksCommand<'a> {
    fn execute(&mut self, req: ImportBooksCommandRequest) -> Result<ImportBooksCommandResponse, CommandError> {
        let summary = self.catalog_service.add_books_from_file(req.path.as_path());
        Ok(ImportBooksCommandResponse { summary })
    }
}
