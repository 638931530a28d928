pub mod dynamodb;
pub mod handlers;
pub mod repository;

pub use repository::{
    InMemoryWriterRepository, RepositoryError, WriterRepository,
};
