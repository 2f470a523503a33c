mod add_product;
mod delete_product;
mod update_product;

pub use add_product::*;
pub use delete_product::*;
pub use update_product::*;
