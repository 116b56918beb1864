use serde::{Deserialize, Serialize};
use crate::catalog::command::parse_rating;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> RateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RateBookCommandRequest {
    pub title: String,
    pub rating: i32,
}

impl RateBookCommandRequest {
    /// Parses the user's rating text; only 1 through 5 are accepted.
    pub fn new(title: &str, rating: &str) -> Result<Self, CommandError> {
        Ok(Self {
            title: title.to_string(),
            rating: parse_rating(rating)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RateBookCommandResponse {
    pub found: bool,
}

impl<'a> Command<RateBookCommandRequest, RateBookCommandResponse> for RateBookCommand<'a> {
    fn execute(&mut self, req: RateBookCommandRequest) -> Result<RateBookCommandResponse, CommandError> {
        let found = self.catalog_service.rate_book(req.title.as_str(), req.rating);
        Ok(RateBookCommandResponse { found })
    }
}
