//! Catalog types: categories, subcategories, products.

pub mod category;
pub mod product;
pub mod subcategory;

pub use category::Category;
pub use product::Product;
pub use subcategory::Subcategory;
