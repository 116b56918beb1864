use serde::Serialize;
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SuggestBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> SuggestBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default)]
pub struct SuggestBookCommandRequest;

#[derive(Debug, Serialize)]
pub struct SuggestBookCommandResponse {
    pub book: Option<Book>,
}

impl<'a> Command<SuggestBookCommandRequest, SuggestBookCommandResponse> for SuggestBookCommand<'a> {
    fn execute(&mut self, _req: SuggestBookCommandRequest) -> Result<SuggestBookCommandResponse, CommandError> {
        let book = self.catalog_service.suggest_random_unread_book().cloned();
        Ok(SuggestBookCommandResponse { book })
    }
}
