mod splice_service_client;

pub use splice_service_client::SpliceServiceClient;
