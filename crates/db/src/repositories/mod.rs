mod tasting_repo;

pub use tasting_repo::TastingRepo;
