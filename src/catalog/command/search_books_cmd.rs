use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::command::parse_number;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> SearchBooksCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, PartialEq, Deserialize)]
pub enum SearchBooksCommandRequest {
    Title(String),
    Author(String),
    Rating(i32),
}

impl SearchBooksCommandRequest {
    pub fn title(title: &str) -> Self {
        SearchBooksCommandRequest::Title(title.to_string())
    }

    pub fn author(author: &str) -> Self {
        SearchBooksCommandRequest::Author(author.to_string())
    }

    // any integer is searchable, including the unrated sentinel 0
    pub fn rating(text: &str) -> Result<Self, CommandError> {
        parse_number(text, "rating").map(SearchBooksCommandRequest::Rating)
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub books: Vec<Book>,
}

impl SearchBooksCommandResponse {
    pub fn new(books: Vec<&Book>) -> Self {
        Self {
            books: books.into_iter().cloned().collect(),
        }
    }
}

impl<'a> Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand<'a> {
    fn execute(&mut self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = match &req {
            SearchBooksCommandRequest::Title(title) => self.catalog_service.search_by_title(title),
            SearchBooksCommandRequest::Author(author) => self.catalog_service.search_by_author(author),
            SearchBooksCommandRequest::Rating(rating) => self.catalog_service.search_by_rating(*rating),
        };
        Ok(SearchBooksCommandResponse::new(books))
    }
}
