use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct MarkReadCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> MarkReadCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MarkReadCommandRequest {
    pub title: String,
}

impl MarkReadCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

// A miss is not an error: the catalog has already reported it on the status channel.
#[derive(Debug, Serialize)]
pub struct MarkReadCommandResponse {
    pub found: bool,
}

impl<'a> Command<MarkReadCommandRequest, MarkReadCommandResponse> for MarkReadCommand<'a> {
    fn execute(&mut self, req: MarkReadCommandRequest) -> Result<MarkReadCommandResponse, CommandError> {
        let found = self.catalog_service.set_to_read(req.title.as_str());
        Ok(MarkReadCommandResponse { found })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::catalog::command::mark_read_cmd::{MarkReadCommand, MarkReadCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::PublisherVia;

    #[test]
    fn test_should_run_mark_read() {
        let mut catalog = factory::create_catalog(&Configuration::new("test"), PublisherVia::Silent);
        catalog.add_book(Book::new("The Hobbit", "J.R.R. Tolkien", 5));
        let res = MarkReadCommand::new(&mut catalog).execute(MarkReadCommandRequest::new("The Hobbit"))
            .expect("should mark book");
        assert!(res.found);
        assert_eq!(1, catalog.get_read_books().len());
        let res = MarkReadCommand::new(&mut catalog).execute(MarkReadCommandRequest::new("Dune"))
            .expect("should run");
        assert!(!res.found);
    }
}
