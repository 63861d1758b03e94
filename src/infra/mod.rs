pub mod weaviate_client;
