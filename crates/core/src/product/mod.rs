mod error;
mod mock_data;
mod operations;
mod types;

pub use error::ProductError;
pub use mock_data::generate_seed_products;
pub use operations::{
    canonical_number, canonical_product, canonical_value, validate_product, ID_ATTRIBUTE,
};
pub use types::{Attributes, Product, ProductRange};
