use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::catalog::domain::service::Catalog;
use crate::catalog::selector::RandomSelector;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::PublisherVia;

pub fn create_catalog(config: &Configuration, via: PublisherVia) -> Catalog {
    let book_repo = Box::new(MemoryBookRepository::new());
    let publisher = create_publisher(via);
    Catalog::with(config, book_repo, publisher, Box::new(RandomSelector::from_entropy()))
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::Book;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog;
    use crate::core::domain::Configuration;
    use crate::gateway::PublisherVia;

    #[test]
    fn test_should_create_empty_catalog() {
        let mut catalog = create_catalog(&Configuration::new("test"), PublisherVia::Silent);
        assert!(catalog.is_empty());
        catalog.add_book(Book::new("The Hobbit", "J.R.R. Tolkien", 5));
        assert!(catalog.set_to_read("The Hobbit"));
        assert_eq!("test", catalog.config().owner.as_str());
    }
}
