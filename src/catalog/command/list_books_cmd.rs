use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::command::parse_number;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> ListBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum ListBooksCommandRequest {
    SortedByTitle,
    SortedByAuthor,
    Read,
    Unread,
}

impl ListBooksCommandRequest {
    /// Maps the numbered menu choice (1-4) to a listing.
    pub fn from_option(text: &str) -> Result<Self, CommandError> {
        match parse_number(text, "option")? {
            1 => Ok(ListBooksCommandRequest::SortedByTitle),
            2 => Ok(ListBooksCommandRequest::SortedByAuthor),
            3 => Ok(ListBooksCommandRequest::Read),
            4 => Ok(ListBooksCommandRequest::Unread),
            _ => Err(CommandError::validation("Invalid option.")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<Book>,
}

impl<'a> Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand<'a> {
    fn execute(&mut self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        let books = match req {
            ListBooksCommandRequest::SortedByTitle => self.catalog_service.get_all_books_sorted_by_title(),
            ListBooksCommandRequest::SortedByAuthor => self.catalog_service.get_all_books_sorted_by_author(),
            ListBooksCommandRequest::Read => self.catalog_service.get_read_books(),
            ListBooksCommandRequest::Unread => self.catalog_service.get_unread_books(),
        };
        Ok(ListBooksCommandResponse { books: books.into_iter().cloned().collect() })
    }
}
